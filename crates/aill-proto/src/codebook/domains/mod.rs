//! Standard Level 1 domain codebook tables.
//!
//! One module per published codebook, each a sorted static entry table.
//! Codes sub-partition every domain into functional blocks (documented
//! per-module); gaps between blocks are reserved for future registry
//! revisions.

mod comm;
mod diag;
mod manip;
mod nav;
mod percept;
mod plan;
mod safety;

pub use comm::COMM1;
pub use diag::DIAG1;
pub use manip::MANIP1;
pub use nav::NAV1;
pub use percept::PERCEPT1;
pub use plan::PLAN1;
pub use safety::SAFETY1;

use super::domain::DomainEntry;

/// Shorthand entry constructor for the static tables.
pub(crate) const fn entry(
    code: u16,
    mnemonic: &'static str,
    value_type: &'static str,
    unit: &'static str,
    description: &'static str,
) -> DomainEntry {
    DomainEntry::new(code, mnemonic, value_type, unit, description)
}
