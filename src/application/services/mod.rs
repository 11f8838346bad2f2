//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod traversal;

pub use traversal::{TraversalReport, TraversalService, TreeDefinition};
