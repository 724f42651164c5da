
/// Chromosome naming styles and the label normalization seam
pub mod chrom_names;
/// The variant record reading seam and its noodles-backed default
pub mod variant_source;
