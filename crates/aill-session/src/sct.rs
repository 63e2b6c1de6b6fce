//! Session Context Table (SCT).
//!
//! A per-session cache of previously transmitted values. Once a value is
//! interned, later utterances reference it with a CONTEXT_REF and its
//! short varint index instead of retransmitting the expression. Capacity
//! comes from negotiation: 1024 entries at Standard conformance and
//! above, 64 below.

use aill_proto::Expression;

/// Bounded, insertion-ordered table of shared expressions.
///
/// Indices are stable for the lifetime of the session; interning an
/// expression that is already present returns its existing index.
#[derive(Debug, Clone)]
pub struct SessionContextTable {
    entries: Vec<Expression>,
    max_size: usize,
}

impl SessionContextTable {
    /// A table bounded by the negotiated `sct_max_size`.
    #[must_use]
    pub fn new(max_size: u32) -> Self {
        Self { entries: Vec::new(), max_size: max_size as usize }
    }

    /// Number of interned entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Intern an expression, returning its index.
    ///
    /// Returns the existing index when the value is already present, and
    /// `None` when the table is full.
    pub fn intern(&mut self, expr: Expression) -> Option<u32> {
        if let Some(existing) = self.entries.iter().position(|e| *e == expr) {
            return Some(existing as u32);
        }
        if self.entries.len() >= self.max_size {
            return None;
        }
        self.entries.push(expr);
        Some((self.entries.len() - 1) as u32)
    }

    /// Resolve a CONTEXT_REF index.
    #[must_use]
    pub fn resolve(&self, sct_index: u32) -> Option<&Expression> {
        self.entries.get(sct_index as usize)
    }
}

#[cfg(test)]
mod tests {
    use aill_proto::Value;

    use super::*;

    fn lit(v: i32) -> Expression {
        Expression::Literal(Value::I32(v))
    }

    #[test]
    fn interning_is_stable_and_deduplicated() {
        let mut sct = SessionContextTable::new(64);
        assert_eq!(sct.intern(lit(1)), Some(0));
        assert_eq!(sct.intern(lit(2)), Some(1));
        assert_eq!(sct.intern(lit(1)), Some(0));
        assert_eq!(sct.len(), 2);
        assert_eq!(sct.resolve(1), Some(&lit(2)));
        assert_eq!(sct.resolve(2), None);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut sct = SessionContextTable::new(2);
        assert_eq!(sct.intern(lit(1)), Some(0));
        assert_eq!(sct.intern(lit(2)), Some(1));
        assert_eq!(sct.intern(lit(3)), None);
        // Existing values still resolve once the table is full.
        assert_eq!(sct.intern(lit(2)), Some(1));
    }
}
