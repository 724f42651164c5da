
//! Removed entry points, preserved only so old callers fail with a pointer to the
//! replacement instead of a silent compile break. None of these perform any work.

use std::path::{Path, PathBuf};

use crate::data_types::sample_batch::SampleBatch;
use crate::data_types::variants::VariantRecord;
use crate::ingest::IngestError;

/// Single-file loader from before batching existed.
#[deprecated(note = "removed; use `ingest::ingest` instead")]
pub fn read_vcf(_vcf_file: &Path, _sample_name: &str, _genome: &str) -> Result<SampleBatch, IngestError> {
    Err(IngestError::Removed { old: "read_vcf", new: "ingest::ingest" })
}

/// Batch loader from before chromosome name normalization was part of the pipeline.
#[deprecated(note = "removed; use `ingest::ingest` instead")]
pub fn read_vcfs(_vcf_files: &[PathBuf], _sample_names: &[String], _genome: &str) -> Result<SampleBatch, IngestError> {
    Err(IngestError::Removed { old: "read_vcfs", new: "ingest::ingest" })
}

/// Raw record conversion that bypassed the SNV filter.
#[deprecated(note = "removed; use `ingest::ingest` instead")]
pub fn vcf_to_snv_records(_vcf_file: &Path, _genome: &str) -> Result<Vec<VariantRecord>, IngestError> {
    Err(IngestError::Removed { old: "vcf_to_snv_records", new: "ingest::ingest" })
}
