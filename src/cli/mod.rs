
/// Shared CLI components and the top-level parser
pub mod core;
/// Settings for the ingest sub-command
pub mod ingest;
