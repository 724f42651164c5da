
use indexmap::IndexMap;

use crate::data_types::variants::VariantRecord;

/// The final product of a batch ingest: a mapping from sample name to that sample's
/// cleaned record collection. Key order matches the caller's sample name order, which
/// is why this is an `IndexMap` and not a plain `HashMap`.
/// Built once per ingest call and never mutated afterward.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleBatch {
    /// Map from sample name to the cleaned records for that sample
    samples: IndexMap<String, Vec<VariantRecord>>
}

impl SampleBatch {
    pub fn new(samples: IndexMap<String, Vec<VariantRecord>>) -> Self {
        Self {
            samples
        }
    }

    /// The number of samples in the batch
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the record collection for a sample by name
    pub fn get(&self, sample_name: &str) -> Option<&[VariantRecord]> {
        self.samples.get(sample_name).map(|v| v.as_slice())
    }

    /// Get the entry at the specified index, returning both the sample name (key) and its records
    pub fn get_index(&self, index: usize) -> Option<(&String, &Vec<VariantRecord>)> {
        self.samples.get_index(index)
    }

    /// Sample names in their original (caller-supplied) order
    pub fn sample_names(&self) -> impl Iterator<Item = &String> {
        self.samples.keys()
    }

    /// Iterate over (sample name, records) pairs in original order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<VariantRecord>)> {
        self.samples.iter()
    }

    /// Consumes the batch, handing the underlying map to the caller
    pub fn into_inner(self) -> IndexMap<String, Vec<VariantRecord>> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snv(chrom: &str, position: u64) -> VariantRecord {
        VariantRecord::new(chrom.to_string(), position, b"A".to_vec(), vec![b"C".to_vec()]).unwrap()
    }

    #[test]
    fn test_order_preservation() {
        let mut samples = IndexMap::new();
        samples.insert("colon1".to_string(), vec![snv("chr1", 10)]);
        samples.insert("intestine1".to_string(), vec![snv("chr2", 20)]);
        samples.insert("liver1".to_string(), vec![]);
        let batch = SampleBatch::new(samples);

        assert_eq!(batch.len(), 3);
        let names: Vec<&String> = batch.sample_names().collect();
        assert_eq!(names, ["colon1", "intestine1", "liver1"]);

        let (name, records) = batch.get_index(1).unwrap();
        assert_eq!(name, "intestine1");
        assert_eq!(records.len(), 1);

        assert_eq!(batch.get("liver1"), Some(&[][..]));
        assert_eq!(batch.get("missing"), None);
    }
}
