/// DiscCatalog Core: scanning, selection, assembly and rendering.
///
/// This crate contains all business logic with zero UI dependencies.
/// Any frontend (the bundled CLI, a GUI, a test harness) drives it through
/// [`pipeline::generate`] or the individual stages below.
///
/// # Modules
///
/// - [`model`]: Entries, sections, the catalog document and display helpers.
/// - [`scanner`]: Lazy filesystem walk yielding classified raw entries.
/// - [`probe`]: Pluggable audio duration probing.
/// - [`catalog`]: Grouping, per-group selection, labelling and assembly.
/// - [`render`]: HTML, JSON and CSV output for a finished document.
/// - [`platform`]: Removable volume enumeration.
/// - [`config`]: Optional JSON configuration with defaults.
/// - [`pipeline`]: End-to-end orchestration of one catalog run.
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod platform;
pub mod probe;
pub mod render;
pub mod scanner;

pub use config::{CatalogConfig, OutputFormat};
pub use error::{CatalogError, Result};
pub use model::{CatalogDocument, Entry, MediaKind, Section};
pub use pipeline::{build_catalog, generate, CatalogReport, CatalogRequest};
