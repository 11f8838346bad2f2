//! Command dispatch

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{TraversalService, TreeDefinition};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeSource};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::BinaryTree;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `vtree --help`".to_string(),
        ));
    };

    let project_dir = resolve_project_dir(cli)?;
    let settings = Settings::load(Some(&project_dir))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Traverse { source, format } => cmd_traverse(&container, source, *format),
        Commands::Show { source } => cmd_show(&container, source),
        Commands::Bst { values, format } => cmd_bst(&container, values, *format),
        Commands::Config { command } => cmd_config(&container, command, &project_dir),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn resolve_project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("resolve current directory", e))),
    }
}

fn load_definitions(
    service: &TraversalService,
    source: &TreeSource,
) -> CliResult<Vec<TreeDefinition>> {
    let definitions = match (&source.file, &source.tree) {
        (Some(file), _) => service.load(file)?,
        (None, Some(tree)) => service.parse(tree)?,
        (None, None) => {
            return Err(CliError::InvalidArgs(
                "either FILE or --tree is required".to_string(),
            ))
        }
    };
    if definitions.is_empty() {
        output::warning("no tree definitions found");
    }
    Ok(definitions)
}

#[instrument(skip(container))]
fn cmd_traverse(
    container: &ServiceContainer,
    source: &TreeSource,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let service = &container.traversal;
    let definitions = load_definitions(service, source)?;
    let format = format.unwrap_or(container.settings.format);
    let reports = service.traverse_all(&definitions);

    for report in &reports {
        match format {
            OutputFormat::Flat => output::info(&service.format_report_as(report, format)),
            OutputFormat::Columns => {
                output::header(&format!("tree at line {}", report.line));
                output::info(&service.format_report_as(report, format));
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, source: &TreeSource) -> CliResult<()> {
    let definitions = load_definitions(&container.traversal, source)?;
    for definition in &definitions {
        output::header(&format!("tree at line {}", definition.line));
        output::info(&TraversalService::render(definition)?);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_bst(
    container: &ServiceContainer,
    values: &[i64],
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let definition = TreeDefinition {
        line: 1,
        tree: BinaryTree::from_bst_values(values.iter().copied()),
    };
    let report = TraversalService::traverse(&definition);
    let format = format.unwrap_or(container.settings.format);
    output::info(&container.traversal.format_report_as(&report, format));
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    project_dir: &std::path::Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", &"(unavailable)"),
            }
            output::action("local", &local_config_path(project_dir).display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
