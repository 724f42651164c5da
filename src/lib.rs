
/// Command line interface functionality
pub mod cli;
/// Contains shared data types for records and batches
pub mod data_types;
/// The biallelic SNV filtering policy
pub mod filter;
/// Batch ingestion orchestration and its error kinds
pub mod ingest;
/// Removed entry points that redirect callers to the current API
pub mod legacy;
/// Tooling for parsing input files and chromosome naming styles
pub mod parsing;
/// Various utility functions that tend to be very generic
pub mod util;
