//! CVM inventory lookup.
//!
//! Scans a cloud inventory listing for the first non-terminated CVM
//! matching a name and projects it into a three-field summary.

mod error;
mod lookup;
mod types;

pub use error::LookupError;
pub use lookup::find_cvm;
pub use types::*;
