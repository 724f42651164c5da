
/// Contains the sample batch, the order-preserving output mapping
pub mod sample_batch;
/// Contains the variant record type and related errors
pub mod variants;
