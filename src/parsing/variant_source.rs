
use anyhow::{anyhow, Context};
use log::debug;
use noodles::vcf;
use std::io::BufReader;
use std::path::Path;

use crate::data_types::variants::VariantRecord;

/// The seam to the variant-file reader: given a file path and a reference genome
/// identifier, produce the variant-level records for that file. Implementations decide
/// what the genome identifier means; it is opaque to the rest of the pipeline.
pub trait VariantRecordSource: Sync {
    /// Loads all variant records from one file. Only positional fields (CHROM, POS,
    /// REF, ALT) should be retained; genotype and metadata columns are dropped at
    /// this boundary.
    /// # Arguments
    /// * `vcf_file` - path to the file to read
    /// * `genome` - opaque reference genome identifier
    /// # Errors
    /// * if the file cannot be opened or parsed
    fn load_records(&self, vcf_file: &Path, genome: &str) -> anyhow::Result<Vec<VariantRecord>>;
}

/// Wrapper function that handles both bgzip compressed and uncompressed VCF files
/// # Arguments
/// * `filename` - path to the .vcf(.gz) file to open
pub fn open_vcf_file(filename: &Path) -> anyhow::Result<vcf::io::Reader<BufReader<Box<dyn std::io::Read>>>> {
    let is_compressed = match filename.extension() {
        Some(extension) => {
            extension == "gz"
        },
        None => false
    };

    let inner: Box<dyn std::io::Read> = if is_compressed {
        #[allow(clippy::default_constructed_unit_structs)]
        let bgzf_reader = noodles::bgzf::io::reader::Builder::default()
            .build_from_path(filename)
            .with_context(|| format!("Error while loading {filename:?}:"))?;
        Box::new(bgzf_reader)
    } else {
        Box::new(std::fs::File::open(filename)
            .with_context(|| format!("Error while loading {filename:?}:"))?)
    };

    Ok(vcf::io::Reader::new(BufReader::new(inner)))
}

/// This will open a VCF file and retrieve the sample name at the given index
/// # Arguments
/// * `vcf_fn` - the VCF filename to open
/// * `index` - the index of the sample to return; 0 = first sample
pub fn vcf_sample_name(vcf_fn: &Path, index: usize) -> anyhow::Result<String> {
    let mut vcf_reader = open_vcf_file(vcf_fn)?;
    let vcf_header = vcf_reader.read_header()
        .with_context(|| format!("Error while reading header of {vcf_fn:?}:"))?;

    let sample_name = vcf_header.sample_names().get_index(index)
        .ok_or(anyhow!("Sample index {index} does not exist in {vcf_fn:?}."))?
        .clone();

    Ok(sample_name)
}

/// Default record source backed by noodles. Reads plain or bgzip-compressed VCF and
/// keeps CHROM/POS/REF/ALT only. The genome identifier is ignored here since VCF is
/// self-describing; it exists on the seam for sources that need a build identifier.
pub struct NoodlesVariantSource;

impl VariantRecordSource for NoodlesVariantSource {
    fn load_records(&self, vcf_file: &Path, genome: &str) -> anyhow::Result<Vec<VariantRecord>> {
        debug!("Loading records from {vcf_file:?} (genome = {genome:?})...");
        let mut reader = open_vcf_file(vcf_file)?;
        let header = reader.read_header()
            .with_context(|| format!("Error while reading header of {vcf_file:?}:"))?;

        let mut ret: Vec<VariantRecord> = vec![];
        let mut skipped_no_alt: usize = 0;
        for result in reader.record_bufs(&header) {
            let record = result
                .with_context(|| format!("Error while reading records from {vcf_file:?}:"))?;

            let chrom = record.reference_sequence_name().to_string();
            let position = record.variant_start()
                .ok_or(anyhow!("Record in {vcf_file:?} is missing POS"))?;
            let position = (position.get() - 1) as u64; // convert to 0-based
            let ref_allele = record.reference_bases().as_bytes().to_vec();
            let alt_alleles: Vec<Vec<u8>> = record.alternate_bases().as_ref().iter()
                .map(|a| a.as_bytes().to_vec())
                .collect();

            // monomorphic reference records carry no ALT; nothing downstream can use them
            if alt_alleles.is_empty() {
                skipped_no_alt += 1;
                continue;
            }

            let variant = VariantRecord::new(chrom, position, ref_allele, alt_alleles)
                .with_context(|| format!("Error while converting record at {}:{} in {vcf_file:?}:",
                    record.reference_sequence_name(), position + 1))?;
            ret.push(variant);
        }

        if skipped_no_alt > 0 {
            debug!("Skipped {skipped_no_alt} ALT-less records in {vcf_file:?}.");
        }

        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_VCF: &str = "##fileformat=VCFv4.2\n\
        ##contig=<ID=1>\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
        1\t100\t.\tA\tT\t.\tPASS\t.\n\
        1\t200\t.\tAT\tA\t.\tPASS\t.\n\
        1\t300\t.\tG\tC,T\t.\tPASS\t.\n";

    fn write_test_vcf(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".vcf")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_records() {
        let vcf_file = write_test_vcf(TEST_VCF);
        let records = NoodlesVariantSource.load_records(vcf_file.path(), "-").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].chrom(), "1");
        assert_eq!(records[0].position(), 99); // 0-based
        assert_eq!(records[0].ref_allele(), b"A");
        assert_eq!(records[0].alt_alleles(), &[b"T".to_vec()]);

        assert_eq!(records[1].ref_allele(), b"AT");
        assert_eq!(records[2].alt_alleles(), &[b"C".to_vec(), b"T".to_vec()]);
    }

    #[test]
    fn test_missing_file() {
        let result = NoodlesVariantSource.load_records(Path::new("/does/not/exist.vcf"), "-");
        assert!(result.is_err());
    }

    #[test]
    fn test_vcf_sample_name() {
        let with_sample = "##fileformat=VCFv4.2\n\
            ##contig=<ID=1>\n\
            ##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tcolon1\n\
            1\t100\t.\tA\tT\t.\tPASS\t.\tGT\t0/1\n";
        let vcf_file = write_test_vcf(with_sample);

        assert_eq!(vcf_sample_name(vcf_file.path(), 0).unwrap(), "colon1");
        assert!(vcf_sample_name(vcf_file.path(), 1).is_err());
    }
}
