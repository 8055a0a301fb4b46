pub mod agreement;
pub mod alpha;
pub mod errors;
pub mod matrix;
pub mod stats;
pub mod warnings;
