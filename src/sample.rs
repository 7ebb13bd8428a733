//! Struct `Sample` represents a batch of rows.
//! Struct `Row` represents a single observation.

// Provides row struct.
pub(crate) mod row;
// Provides sample struct.
pub(crate) mod sample_struct;


pub use row::Row;
pub use sample_struct::Sample;
