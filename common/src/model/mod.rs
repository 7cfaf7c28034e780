pub mod lead;
pub mod stats;
