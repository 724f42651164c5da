
#[derive(thiserror::Error, Debug)]
pub enum VariantError {
    #[error("reference allele is empty (length = 0)")]
    EmptyRefAllele,
    #[error("record has no alternate alleles")]
    NoAltAlleles,
    #[error("alternate allele {index} is empty (length = 0)")]
    EmptyAltAllele { index: usize }
}

/// One genomic position in one sample: a chromosome label, a position, a
/// reference allele, and one or more alternate alleles.
/// Genotype and metadata fields are deliberately not represented; they get dropped
/// at the read boundary to keep the memory footprint small during the parallel load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariantRecord {
    /// The chromosome label as read from the file; may be rewritten to a different naming style
    chrom: String,
    /// The coordinate of the record in the VCF file, 0-based
    position: u64,
    /// The reference allele sequence
    ref_allele: Vec<u8>,
    /// All alternate allele sequences, at least one
    alt_alleles: Vec<Vec<u8>>
}

impl VariantRecord {
    /// Creates a new record. Allele lengths are unconstrained here, they only matter to the SNV filter.
    /// # Arguments
    /// * `chrom` - the chromosome label, any naming style
    /// * `position` - the coordinate of the record in a contig, 0-based
    /// * `ref_allele` - the reference allele, must be non-empty
    /// * `alt_alleles` - the alternate alleles, each must be non-empty and at least one is required
    /// # Errors
    /// * if the reference allele or any alternate allele is empty
    /// * if no alternate alleles are provided
    pub fn new(chrom: String, position: u64, ref_allele: Vec<u8>, alt_alleles: Vec<Vec<u8>>) -> Result<VariantRecord, VariantError> {
        if ref_allele.is_empty() {
            return Err(VariantError::EmptyRefAllele);
        }
        if alt_alleles.is_empty() {
            return Err(VariantError::NoAltAlleles);
        }
        for (index, alt) in alt_alleles.iter().enumerate() {
            if alt.is_empty() {
                return Err(VariantError::EmptyAltAllele { index });
            }
        }

        Ok(VariantRecord {
            chrom,
            position,
            ref_allele,
            alt_alleles
        })
    }

    /// Rewrites the chromosome label, the one mutation allowed after construction.
    /// This is the hook the chromosome name normalizer uses.
    pub fn set_chrom(&mut self, chrom: String) {
        self.chrom = chrom;
    }

    /// True if this record is a biallelic single-nucleotide variant:
    /// exactly one alternate allele, and both REF and ALT are a single nucleotide in {A,C,G,T}.
    pub fn is_biallelic_snv(&self) -> bool {
        self.alt_alleles.len() == 1
            && is_single_nucleotide(&self.ref_allele)
            && is_single_nucleotide(&self.alt_alleles[0])
    }

    // getters
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn ref_allele(&self) -> &[u8] {
        &self.ref_allele
    }

    pub fn alt_alleles(&self) -> &[Vec<u8>] {
        &self.alt_alleles
    }
}

/// True if the allele is exactly one of A, C, G, or T
fn is_single_nucleotide(allele: &[u8]) -> bool {
    matches!(allele, [b'A' | b'C' | b'G' | b'T'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_record() {
        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"A".to_vec(), vec![b"C".to_vec()]
        ).unwrap();
        assert_eq!(record.chrom(), "chr1");
        assert_eq!(record.position(), 100);
        assert_eq!(record.ref_allele(), b"A");
        assert_eq!(record.alt_alleles(), &[b"C".to_vec()]);
        assert!(record.is_biallelic_snv());
    }

    #[test]
    fn test_set_chrom() {
        let mut record = VariantRecord::new(
            "1".to_string(), 100,
            b"A".to_vec(), vec![b"C".to_vec()]
        ).unwrap();
        record.set_chrom("chr1".to_string());
        assert_eq!(record.chrom(), "chr1");
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            VariantRecord::new("chr1".to_string(), 0, b"".to_vec(), vec![b"C".to_vec()]),
            Err(VariantError::EmptyRefAllele)
        ));
        assert!(matches!(
            VariantRecord::new("chr1".to_string(), 0, b"A".to_vec(), vec![]),
            Err(VariantError::NoAltAlleles)
        ));
        assert!(matches!(
            VariantRecord::new("chr1".to_string(), 0, b"A".to_vec(), vec![b"C".to_vec(), b"".to_vec()]),
            Err(VariantError::EmptyAltAllele { index: 1 })
        ));
    }

    #[test]
    fn test_is_biallelic_snv() {
        // multi-allelic site
        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"A".to_vec(), vec![b"C".to_vec(), b"G".to_vec()]
        ).unwrap();
        assert!(!record.is_biallelic_snv());

        // deletion
        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"AT".to_vec(), vec![b"A".to_vec()]
        ).unwrap();
        assert!(!record.is_biallelic_snv());

        // insertion
        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"A".to_vec(), vec![b"AT".to_vec()]
        ).unwrap();
        assert!(!record.is_biallelic_snv());

        // non-nucleotide characters
        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"N".to_vec(), vec![b"C".to_vec()]
        ).unwrap();
        assert!(!record.is_biallelic_snv());

        let record = VariantRecord::new(
            "chr1".to_string(), 100,
            b"A".to_vec(), vec![b"*".to_vec()]
        ).unwrap();
        assert!(!record.is_biallelic_snv());
    }
}
