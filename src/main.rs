
use log::{LevelFilter, error, info};
use serde::Serialize;
use std::time::Instant;

use snvbatch::cli::core::{Commands, get_cli};
use snvbatch::cli::ingest::{IngestSettings, check_ingest_settings};
use snvbatch::ingest::{IngestError, ingest_with};
use snvbatch::parsing::chrom_names::ContigAliasTable;
use snvbatch::parsing::variant_source::NoodlesVariantSource;
use snvbatch::util::json_io::save_json;

/// One row of the optional JSON summary output
#[derive(Serialize)]
struct SampleSummary {
    sample_name: String,
    num_records: usize
}

fn run_ingest(settings: IngestSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let settings = match check_ingest_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    info!("Loading sample batch...");
    let batch = match ingest_with(
        &NoodlesVariantSource, &ContigAliasTable::default(),
        &settings.vcf_filenames, &settings.sample_names,
        &settings.genome, settings.style, settings.threads
    ) {
        Ok(b) => b,
        Err(e @ (IngestError::ArgumentMismatch { .. } | IngestError::DuplicateSample { .. })) => {
            error!("Error while validating batch arguments: {e}");
            std::process::exit(exitcode::USAGE);
        },
        Err(e) => {
            error!("Error while loading sample batch: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    };

    let mut total_records = 0;
    for (sample_name, records) in batch.iter() {
        info!("Loaded {} SNV record(s) for sample {sample_name:?}.", records.len());
        total_records += records.len();
    }
    info!("Batch total: {total_records} record(s) across {} sample(s).", batch.len());

    if let Some(summary_fn) = settings.output_summary.as_deref() {
        info!("Saving batch summary to {summary_fn:?}...");
        let rows: Vec<SampleSummary> = batch.iter()
            .map(|(sample_name, records)| SampleSummary {
                sample_name: sample_name.clone(),
                num_records: records.len()
            })
            .collect();
        if let Err(e) = save_json(&rows, summary_fn) {
            error!("Error while saving batch summary: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Ingest completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Ingest(settings) => {
            run_ingest(*settings);
        }
    }

    info!("Process finished successfully.");
}
