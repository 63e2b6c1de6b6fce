//! Level 1 domain codebooks and their registry.
//!
//! A domain codebook maps 16-bit codes (reached via ESCAPE_L1 on the wire)
//! to mnemonics with type signatures and units. The standard seven codebooks
//! occupy registry ids 0x01-0x07; implementations may register custom
//! codebooks under other ids. Registration is init-once at startup: standard
//! ids cannot be displaced and a taken id is never overwritten.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    sync::{LazyLock, RwLock},
};

use super::domains;

/// Entry in a Level 1 domain codebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainEntry {
    /// 16-bit domain code.
    pub code: u16,
    /// Wire-spec mnemonic, e.g. `POSITION_3D`.
    pub mnemonic: &'static str,
    /// Expected AILL type signature, e.g. `ARRAY<FLOAT32,3>`.
    pub value_type: &'static str,
    /// Physical unit (SI), empty when dimensionless.
    pub unit: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl DomainEntry {
    /// Build an entry; used by the static tables.
    #[must_use]
    pub const fn new(
        code: u16,
        mnemonic: &'static str,
        value_type: &'static str,
        unit: &'static str,
        description: &'static str,
    ) -> Self {
        Self { code, mnemonic, value_type, unit, description }
    }
}

/// A complete Level 1 domain codebook.
///
/// # Invariants
///
/// - Entries are sorted by `code` ascending (lookup is a binary search).
#[derive(Debug)]
pub struct DomainCodebook {
    /// Registry id referenced in session negotiation (e.g. 0x01 for NAV-1).
    pub registry_id: u8,
    /// Codebook name, e.g. `NAV-1`.
    pub name: &'static str,
    /// One-line domain description.
    pub domain: &'static str,
    entries: &'static [DomainEntry],
}

impl DomainCodebook {
    /// Build a codebook over a sorted entry table.
    #[must_use]
    pub const fn new(
        registry_id: u8,
        name: &'static str,
        domain: &'static str,
        entries: &'static [DomainEntry],
    ) -> Self {
        Self { registry_id, name, domain, entries }
    }

    /// Look up an entry by its 16-bit code.
    #[must_use]
    pub fn lookup(&self, code: u16) -> Option<&'static DomainEntry> {
        let entries: &'static [DomainEntry] = self.entries;
        entries
            .binary_search_by_key(&code, |e| e.code)
            .ok()
            .and_then(|i| entries.get(i))
    }

    /// Number of entries in this codebook.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the codebook has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all entries in code order.
    pub fn entries(&self) -> impl Iterator<Item = &'static DomainEntry> {
        self.entries.iter()
    }
}

static REGISTRY: LazyLock<RwLock<BTreeMap<u8, &'static DomainCodebook>>> = LazyLock::new(|| {
    let mut map: BTreeMap<u8, &'static DomainCodebook> = BTreeMap::new();
    for book in [
        &domains::NAV1,
        &domains::PERCEPT1,
        &domains::MANIP1,
        &domains::COMM1,
        &domains::DIAG1,
        &domains::PLAN1,
        &domains::SAFETY1,
    ] {
        map.insert(book.registry_id, book);
    }
    RwLock::new(map)
});

/// Look up a domain codebook by registry id.
#[must_use]
pub fn get_domain(registry_id: u8) -> Option<&'static DomainCodebook> {
    REGISTRY
        .read()
        .ok()
        .and_then(|map| map.get(&registry_id).copied())
}

/// Register a custom domain codebook.
///
/// Returns `false` when the id is already taken (the existing codebook is
/// kept) or the registry lock is poisoned. Intended to be called once at
/// startup before any session runs.
pub fn register_domain(book: &'static DomainCodebook) -> bool {
    let Ok(mut map) = REGISTRY.write() else {
        return false;
    };
    match map.entry(book.registry_id) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(book);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_ids() {
        for (id, name) in [
            (0x01, "NAV-1"),
            (0x02, "PERCEPT-1"),
            (0x03, "MANIP-1"),
            (0x04, "COMM-1"),
            (0x05, "DIAG-1"),
            (0x06, "PLAN-1"),
            (0x07, "SAFETY-1"),
        ] {
            let book = get_domain(id).unwrap();
            assert_eq!(book.name, name);
            assert!(!book.is_empty());
        }
        assert!(get_domain(0x00).is_none());
        assert!(get_domain(0x42).is_none());
    }

    #[test]
    fn entry_tables_are_sorted() {
        for id in 0x01..=0x07 {
            let book = get_domain(id).unwrap();
            let codes: Vec<u16> = book.entries().map(|e| e.code).collect();
            let mut sorted = codes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(codes, sorted, "{} entries not sorted/unique", book.name);
        }
    }

    #[test]
    fn known_entries_resolve() {
        let nav = get_domain(0x01).unwrap();
        assert_eq!(nav.lookup(0x0000).unwrap().mnemonic, "POSITION_3D");
        assert_eq!(nav.lookup(0x0090).unwrap().mnemonic, "GOTO");
        assert!(nav.lookup(0xFFFF).is_none());

        let diag = get_domain(0x05).unwrap();
        assert_eq!(diag.lookup(0x0000).unwrap().mnemonic, "BATTERY_LEVEL");
    }

    #[test]
    fn standard_ids_cannot_be_displaced() {
        static BOGUS: DomainCodebook =
            DomainCodebook::new(0x01, "BOGUS-1", "Conflicting navigation codebook", &[]);
        assert!(!register_domain(&BOGUS));
        assert_eq!(get_domain(0x01).unwrap().name, "NAV-1");
    }

    #[test]
    fn custom_registration_is_init_once() {
        static CUSTOM: DomainCodebook = DomainCodebook::new(
            0xA0,
            "CUSTOM-1",
            "Site-specific vocabulary",
            &[DomainEntry::new(0x0000, "WIDGET_COUNT", "UINT16", "", "Widgets on the line")],
        );
        static CUSTOM_AGAIN: DomainCodebook =
            DomainCodebook::new(0xA0, "CUSTOM-2", "Conflicting vocabulary", &[]);

        assert!(register_domain(&CUSTOM));
        assert!(!register_domain(&CUSTOM_AGAIN));
        assert_eq!(get_domain(0xA0).unwrap().name, "CUSTOM-1");
    }
}
