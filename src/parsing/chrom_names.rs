
use log::trace;
use serde::Serialize;
use std::collections::HashMap;
use strum_macros::EnumString;

use crate::data_types::variants::VariantRecord;

/// The chromosome naming conventions we can rewrite labels into
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, strum_macros::Display, EnumString, Serialize, clap::ValueEnum)]
pub enum NamingStyle {
    /// "chr"-prefixed labels: chr1..chr22, chrX, chrY, chrM
    #[default]
    #[strum(ascii_case_insensitive, serialize = "UCSC")]
    Ucsc,
    /// Bare labels: 1..22, X, Y, MT
    #[strum(ascii_case_insensitive, serialize = "Ensembl")]
    Ensembl
}

/// The seam to the chromosome-naming-convention database: rewrites the chromosome
/// labels of a record collection to a target style, in place. Alleles and positions
/// are never touched.
pub trait ChromosomeNormalizer: Sync {
    /// Rewrites the chromosome label of every record to the target style.
    /// # Arguments
    /// * `records` - the records to rewrite
    /// * `style` - the target naming style
    /// # Errors
    /// * implementation specific; the built-in table never fails
    fn normalize(&self, records: &mut [VariantRecord], style: NamingStyle) -> anyhow::Result<()>;
}

/// Built-in alias table for the human primary assembly: autosomes 1-22 plus X, Y,
/// and the mitochondrial contig (MT / chrM). Labels it does not recognize (alts,
/// unplaced scaffolds, other species) are left untouched.
pub struct ContigAliasTable {
    /// Maps any known label to its UCSC form
    to_ucsc: HashMap<String, String>,
    /// Maps any known label to its Ensembl form
    to_ensembl: HashMap<String, String>
}

impl Default for ContigAliasTable {
    fn default() -> Self {
        let mut to_ucsc: HashMap<String, String> = Default::default();
        let mut to_ensembl: HashMap<String, String> = Default::default();

        let mut add_pair = |ucsc: String, ensembl: String| {
            to_ucsc.insert(ensembl.clone(), ucsc.clone());
            to_ucsc.insert(ucsc.clone(), ucsc.clone());
            to_ensembl.insert(ucsc, ensembl.clone());
            to_ensembl.insert(ensembl.clone(), ensembl);
        };

        for i in 1..=22 {
            add_pair(format!("chr{i}"), format!("{i}"));
        }
        add_pair("chrX".to_string(), "X".to_string());
        add_pair("chrY".to_string(), "Y".to_string());
        add_pair("chrM".to_string(), "MT".to_string());

        Self {
            to_ucsc,
            to_ensembl
        }
    }
}

impl ContigAliasTable {
    /// Returns the label rewritten to the target style, or None if the label is not in the table
    pub fn restyle(&self, label: &str, style: NamingStyle) -> Option<&str> {
        let lookup = match style {
            NamingStyle::Ucsc => &self.to_ucsc,
            NamingStyle::Ensembl => &self.to_ensembl
        };
        lookup.get(label).map(|s| s.as_str())
    }
}

impl ChromosomeNormalizer for ContigAliasTable {
    fn normalize(&self, records: &mut [VariantRecord], style: NamingStyle) -> anyhow::Result<()> {
        for record in records.iter_mut() {
            match self.restyle(record.chrom(), style) {
                Some(restyled) => {
                    if restyled != record.chrom() {
                        record.set_chrom(restyled.to_string());
                    }
                },
                None => {
                    trace!("Leaving unrecognized contig label {:?} untouched.", record.chrom());
                }
            }
        }
        Ok(())
    }
}
