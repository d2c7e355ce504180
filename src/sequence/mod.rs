pub mod alphabet;
pub mod analysis;
pub mod codon;
pub mod conversion;
pub mod mutation;
pub mod translation;

pub use alphabet::*;
pub use analysis::*;
pub use codon::*;
pub use conversion::*;
pub use mutation::*;
pub use translation::*;
