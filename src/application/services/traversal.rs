//! Tree traversal service
//!
//! Loads level-order tree definitions and runs the column traversal over
//! each of them, optionally in parallel.

use std::path::Path;
use std::sync::Arc;

use itertools::Itertools;
use rayon::prelude::*;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{OutputFormat, Settings};
use crate::domain::{
    parse_level_order, BinaryTree, Column, ColumnTraversal, DomainError, TreeNodeConvert,
    MAX_RENDER_DEPTH,
};
use crate::infrastructure::traits::FileSystem;

/// One tree read from a definition file or string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDefinition {
    /// 1-based line of the definition in its source
    pub line: usize,
    pub tree: BinaryTree,
}

/// Result of traversing one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub line: usize,
    pub node_count: usize,
    /// Values in vertical order
    pub order: Vec<i64>,
    /// Same values grouped by column
    pub columns: Vec<Column>,
}

/// Service for loading trees and producing vertical-order reports.
pub struct TraversalService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl TraversalService {
    /// Create a new traversal service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read tree definitions from a file, one tree per line.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<TreeDefinition>> {
        if !self.fs.exists(path) || !self.fs.is_file(path) {
            return Err(ApplicationError::InputNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read tree file", path)?;
        self.parse(&content)
    }

    /// Parse tree definitions from text.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(&self, content: &str) -> ApplicationResult<Vec<TreeDefinition>> {
        let definitions = content
            .lines()
            .enumerate()
            .filter(|(_, text)| {
                let text = text.trim();
                !text.is_empty() && !text.starts_with('#')
            })
            .map(|(idx, text)| self.parse_line(idx + 1, text))
            .collect::<ApplicationResult<Vec<_>>>()?;
        debug!("parsed {} tree definition(s)", definitions.len());
        Ok(definitions)
    }

    fn parse_line(&self, line: usize, text: &str) -> ApplicationResult<TreeDefinition> {
        let to_app = |source: DomainError| ApplicationError::InvalidDefinition { line, source };
        let slots = parse_level_order(text, &self.settings.null_token).map_err(to_app)?;
        let tree = BinaryTree::from_level_order(&slots).map_err(to_app)?;
        Ok(TreeDefinition { line, tree })
    }

    /// Traverse every tree, preserving input order.
    #[instrument(level = "debug", skip(self, definitions), fields(trees = definitions.len()))]
    pub fn traverse_all(&self, definitions: &[TreeDefinition]) -> Vec<TraversalReport> {
        if self.settings.parallel {
            definitions.par_iter().map(Self::traverse).collect()
        } else {
            definitions.iter().map(Self::traverse).collect()
        }
    }

    /// Traverse a single tree definition.
    pub fn traverse(definition: &TreeDefinition) -> TraversalReport {
        let columns = ColumnTraversal::run(definition.tree.root()).into_columns();
        let order: Vec<i64> = columns
            .iter()
            .flat_map(|column| column.values.iter().copied())
            .collect();
        TraversalReport {
            line: definition.line,
            node_count: definition.tree.len(),
            order,
            columns,
        }
    }

    /// Render a tree with column annotations.
    ///
    /// Trees deeper than [`MAX_RENDER_DEPTH`] are refused.
    pub fn render(definition: &TreeDefinition) -> ApplicationResult<Tree<String>> {
        let depth = definition.tree.depth();
        if depth > MAX_RENDER_DEPTH {
            return Err(ApplicationError::TooDeepToRender {
                line: definition.line,
                depth,
                limit: MAX_RENDER_DEPTH,
            });
        }
        Ok(definition.tree.to_tree_string())
    }

    /// Render a report in the configured output format.
    pub fn format_report(&self, report: &TraversalReport) -> String {
        self.format_report_as(report, self.settings.format)
    }

    /// Render a report in an explicit output format.
    pub fn format_report_as(&self, report: &TraversalReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Flat => report.order.iter().join(&self.settings.separator),
            OutputFormat::Columns => report
                .columns
                .iter()
                .map(|column| format!("{}: {}", column.index, column.values.iter().join(" ")))
                .join("\n"),
        }
    }
}
