
use indexmap::IndexMap;
use indicatif::ParallelProgressIterator;
use itertools::izip;
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use crate::data_types::sample_batch::SampleBatch;
use crate::data_types::variants::VariantRecord;
use crate::filter::retain_biallelic_snvs;
use crate::parsing::chrom_names::{ChromosomeNormalizer, ContigAliasTable, NamingStyle};
use crate::parsing::variant_source::{NoodlesVariantSource, VariantRecordSource};
use crate::util::progress_bar::get_progress_style;

/// Parallelism basis assumed when the number of processing units cannot be detected
const DEFAULT_PARALLELISM_BASIS: usize = 2;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("vcf_files has {files} entries but sample_names has {samples}")]
    ArgumentMismatch { files: usize, samples: usize },
    #[error("sample name {name:?} appears more than once")]
    DuplicateSample { name: String },
    #[error("`{old}` has been removed; use `{new}` instead")]
    Removed { old: &'static str, new: &'static str },
    #[error("error while reading variants from {path:?}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error
    },
    #[error("error while normalizing chromosome names for {path:?}")]
    Normalize {
        path: PathBuf,
        #[source]
        source: anyhow::Error
    },
    #[error("error while building thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError)
}

/// Maps a detected processing-unit count to a worker count: one unit is reserved for
/// the orchestrator/OS, with a floor of one worker. An unknown count falls back to a
/// conservative basis of 2, so the floor still holds.
fn worker_count_from_probe(detected: Option<usize>) -> usize {
    let basis = detected.unwrap_or(DEFAULT_PARALLELISM_BASIS);
    basis.saturating_sub(1).max(1)
}

/// The number of parallel workers used when the caller does not request a count
pub fn default_worker_count() -> usize {
    let detected = std::thread::available_parallelism().ok().map(|n| n.get());
    worker_count_from_probe(detected)
}

/// Loads one file: read records via the source, rewrite chromosome labels in place via
/// the normalizer, then keep only the biallelic SNVs. Returns the cleaned collection
/// and the number of records that were dropped.
/// # Arguments
/// * `source` - the variant record reader
/// * `normalizer` - the chromosome name rewriter
/// * `vcf_file` - path to the file to load
/// * `genome` - opaque reference genome identifier, handed to the source
/// * `style` - target chromosome naming style
/// # Errors
/// * if the source or the normalizer fail; filtering itself never fails
pub fn load_one<S: VariantRecordSource, N: ChromosomeNormalizer>(
    source: &S,
    normalizer: &N,
    vcf_file: &Path,
    genome: &str,
    style: NamingStyle
) -> Result<(Vec<VariantRecord>, usize), IngestError> {
    let mut records = source.load_records(vcf_file, genome)
        .map_err(|e| IngestError::SourceRead { path: vcf_file.to_path_buf(), source: e })?;

    normalizer.normalize(&mut records, style)
        .map_err(|e| IngestError::Normalize { path: vcf_file.to_path_buf(), source: e })?;

    Ok(retain_biallelic_snvs(records))
}

/// Batch ingest with injectable collaborators. Fans `load_one` out over the files on a
/// bounded local thread pool and assembles the results into a `SampleBatch` keyed by
/// the caller's sample names, in their given order.
/// # Arguments
/// * `source` - the variant record reader
/// * `normalizer` - the chromosome name rewriter
/// * `vcf_files` - the files to load, one per sample
/// * `sample_names` - unique sample names, same length and order as `vcf_files`
/// * `genome` - opaque reference genome identifier, handed to the source
/// * `style` - target chromosome naming style
/// * `num_threads` - worker count; 0 selects `default_worker_count()`
/// # Errors
/// * `ArgumentMismatch` / `DuplicateSample` before any file is opened
/// * `SourceRead` / `Normalize` if any single file fails; the whole batch fails with it
pub fn ingest_with<S: VariantRecordSource, N: ChromosomeNormalizer>(
    source: &S,
    normalizer: &N,
    vcf_files: &[PathBuf],
    sample_names: &[String],
    genome: &str,
    style: NamingStyle,
    num_threads: usize
) -> Result<SampleBatch, IngestError> {
    // validation happens before any I/O or pool construction
    if vcf_files.len() != sample_names.len() {
        return Err(IngestError::ArgumentMismatch {
            files: vcf_files.len(),
            samples: sample_names.len()
        });
    }

    let mut seen_names: FxHashSet<&str> = Default::default();
    for name in sample_names.iter() {
        if !seen_names.insert(name.as_str()) {
            return Err(IngestError::DuplicateSample { name: name.clone() });
        }
    }

    let num_threads = if num_threads == 0 { default_worker_count() } else { num_threads };
    debug!("Loading {} VCF files with {num_threads} worker(s)...", vcf_files.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    // `collect` on an indexed parallel iterator restores input order, so the sample
    // pairing below is stable regardless of task completion order. A single failed
    // file fails the whole collect after the in-flight siblings finish.
    let results: Vec<(Vec<VariantRecord>, usize)> = pool.install(|| {
        vcf_files.par_iter()
            .map(|vcf_file| load_one(source, normalizer, vcf_file, genome, style))
            .progress_with_style(get_progress_style())
            .collect::<Result<Vec<_>, IngestError>>()
    })?;

    let mut samples: IndexMap<String, Vec<VariantRecord>> = IndexMap::with_capacity(sample_names.len());
    for (sample_name, vcf_file, (records, removed)) in izip!(sample_names, vcf_files, results) {
        if removed > 0 {
            warn!("Removed {removed} non-SNV record(s) from {vcf_file:?} (sample {sample_name:?}).");
        }
        samples.insert(sample_name.clone(), records);
    }

    Ok(SampleBatch::new(samples))
}

/// Batch ingest with the default collaborators: the noodles-backed VCF reader and the
/// built-in human contig alias table, with automatic worker sizing.
/// # Arguments
/// * `vcf_files` - the files to load, one per sample
/// * `sample_names` - unique sample names, same length and order as `vcf_files`
/// * `genome` - reference genome identifier; the default source ignores it
/// * `style` - target chromosome naming style
pub fn ingest(
    vcf_files: &[PathBuf],
    sample_names: &[String],
    genome: &str,
    style: NamingStyle
) -> Result<SampleBatch, IngestError> {
    ingest_with(
        &NoodlesVariantSource, &ContigAliasTable::default(),
        vcf_files, sample_names, genome, style, 0
    )
}
