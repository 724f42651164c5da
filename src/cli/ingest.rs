
use anyhow::bail;
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::{check_required_filename, FULL_VERSION};
use crate::ingest::default_worker_count;
use crate::parsing::chrom_names::NamingStyle;
use crate::parsing::variant_source::vcf_sample_name;

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about)]
pub struct IngestSettings {
    #[clap(default_value = "")]
    #[clap(hide = true)]
    snvbatch_version: String,

    /// Input variant call file, one per sample; repeat for each sample
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "vcf")]
    #[clap(value_name = "VCF")]
    #[clap(help_heading = Some("Input/Output"))]
    pub vcf_filenames: Vec<PathBuf>,

    /// Sample name for the matching --vcf, in order [default: first sample in each header]
    #[clap(short = 's')]
    #[clap(long = "sample")]
    #[clap(value_name = "SAMPLE")]
    #[clap(help_heading = Some("Input/Output"))]
    pub sample_names: Vec<String>,

    /// Reference genome identifier, passed through to the record reader
    #[clap(short = 'g')]
    #[clap(long = "genome")]
    #[clap(value_name = "ID")]
    #[clap(help_heading = Some("Input/Output"))]
    #[clap(default_value = "-")]
    pub genome: String,

    /// Target chromosome naming style
    #[clap(long = "style")]
    #[clap(value_name = "STYLE")]
    #[clap(help_heading = Some("Input/Output"))]
    #[clap(default_value = "ucsc")]
    pub style: NamingStyle,

    /// Optional output JSON summary with per-sample record counts
    #[clap(short = 'o')]
    #[clap(long = "output-summary")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_summary: Option<PathBuf>,

    /// Number of threads to use for loading [default: detected units - 1]
    #[clap(long = "threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "0", hide_default_value = true)]
    pub threads: usize,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_ingest_settings(mut settings: IngestSettings) -> anyhow::Result<IngestSettings> {
    // hard code the version in
    settings.snvbatch_version = FULL_VERSION.clone();
    info!("snvbatch version: {:?}", &settings.snvbatch_version);
    info!("Sub-command: ingest");
    info!("Inputs:");

    for filename in settings.vcf_filenames.iter() {
        check_required_filename(filename, "Input VCF")?;
    }

    // the batch orchestrator checks this too, but catching it here gives a usage
    // error before we start resolving sample names from headers
    if !settings.sample_names.is_empty() && settings.sample_names.len() != settings.vcf_filenames.len() {
        bail!(
            "Received {} --sample entries for {} --vcf entries; counts must match",
            settings.sample_names.len(), settings.vcf_filenames.len()
        );
    }

    if settings.sample_names.is_empty() {
        for filename in settings.vcf_filenames.iter() {
            settings.sample_names.push(vcf_sample_name(filename, 0)?);
        }
    }

    for (filename, sample) in settings.vcf_filenames.iter().zip(settings.sample_names.iter()) {
        info!("\tVCF: {filename:?} (sample {sample:?})");
    }
    info!("\tGenome: {:?}", &settings.genome);
    info!("\tNaming style: {}", settings.style);

    // outputs
    info!("Outputs:");
    if let Some(summary_fn) = settings.output_summary.as_deref() {
        info!("\tSummary: {summary_fn:?}");
    } else {
        info!("\tSummary: None");
    }

    if settings.threads == 0 {
        settings.threads = default_worker_count();
    }
    info!("Processing threads: {}", settings.threads);

    Ok(settings)
}
