
use crate::data_types::variants::VariantRecord;

/// Reduces a record collection to the biallelic SNVs, reporting how many records were dropped.
/// A record survives if it has exactly one alternate allele and both REF and that ALT are a
/// single nucleotide in {A,C,G,T}; everything else (multi-allelic sites, insertions, deletions,
/// symbolic or ambiguous alleles) is removed. The filter is stable: kept records keep their
/// relative order. It never fails, it only partitions.
/// # Arguments
/// * `records` - the record collection to filter, consumed
pub fn retain_biallelic_snvs(records: Vec<VariantRecord>) -> (Vec<VariantRecord>, usize) {
    let input_len = records.len();
    let kept: Vec<VariantRecord> = records.into_iter()
        .filter(VariantRecord::is_biallelic_snv)
        .collect();
    let removed = input_len - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ref_allele: &[u8], alt_alleles: &[&[u8]]) -> VariantRecord {
        VariantRecord::new(
            "chr1".to_string(), 100,
            ref_allele.to_vec(),
            alt_alleles.iter().map(|a| a.to_vec()).collect()
        ).unwrap()
    }

    #[test]
    fn test_mixed_collection() {
        let records = vec![
            record(b"A", &[b"C"]),        // clean SNV
            record(b"A", &[b"C", b"G"]),  // multi-allelic
            record(b"AT", &[b"A"]),       // deletion
            record(b"A", &[b"AT"])        // insertion
        ];
        let expected = records[0].clone();

        let (kept, removed) = retain_biallelic_snvs(records);
        assert_eq!(kept, vec![expected]);
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_idempotence() {
        let records = vec![
            record(b"A", &[b"C"]),
            record(b"AT", &[b"A"]),
            record(b"G", &[b"T"])
        ];

        let (kept, removed) = retain_biallelic_snvs(records);
        assert_eq!(removed, 1);

        // a second pass over already-filtered records is a no-op
        let (kept_again, removed_again) = retain_biallelic_snvs(kept.clone());
        assert_eq!(kept_again, kept);
        assert_eq!(removed_again, 0);
    }

    #[test]
    fn test_stable_order() {
        let mut records = vec![];
        for (i, alleles) in [(b"A", b"C"), (b"G", b"T"), (b"C", b"A")].iter().enumerate() {
            records.push(VariantRecord::new(
                "chr1".to_string(), i as u64,
                alleles.0.to_vec(), vec![alleles.1.to_vec()]
            ).unwrap());
            records.push(record(b"ATT", &[b"A"]));
        }

        let (kept, removed) = retain_biallelic_snvs(records);
        assert_eq!(removed, 3);
        let positions: Vec<u64> = kept.iter().map(|r| r.position()).collect();
        assert_eq!(positions, [0, 1, 2]);
    }

    #[test]
    fn test_empty_collection() {
        let (kept, removed) = retain_biallelic_snvs(vec![]);
        assert!(kept.is_empty());
        assert_eq!(removed, 0);
    }
}
