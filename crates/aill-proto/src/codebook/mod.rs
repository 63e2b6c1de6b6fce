//! Symbol tables for the AILL code space.
//!
//! The base codebook (Level 0) covers the full 8-bit space, partitioned by
//! byte range into semantic categories. Level 1 domain codebooks extend it
//! with 16-bit codes reached through the ESCAPE_L1/L2/L3 bytes; the standard
//! seven (NAV-1 through SAFETY-1) ship here, and custom registries can be
//! added once at startup through [`register_domain`].
//!
//! The operator arity tables ([`is_unary_op`] and friends) are a contract
//! for expression validators; the codec itself never consults them.

mod base;
mod domain;
mod domains;

use std::borrow::Cow;

pub use base::{
    Arithmetic, Escape, FrameControl, Logic, Meta, Modality, Pragmatic, Quantifier, Relational,
    Structure, Temporal, TypeMarker,
};
pub use domain::{DomainCodebook, DomainEntry, get_domain, register_domain};
pub use domains::{COMM1, DIAG1, MANIP1, NAV1, PERCEPT1, PLAN1, SAFETY1};

/// Semantic category of a base codebook range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 0x00-0x0F: utterance and transport control
    FrameControl,
    /// 0x10-0x1F: literal type tags
    TypeMarker,
    /// 0x20-0x2F: structure delimiters
    Structure,
    /// 0x30-0x3F: quantifiers
    Quantifier,
    /// 0x40-0x4F: logic operators
    Logic,
    /// 0x50-0x5F: relational operators
    Relational,
    /// 0x60-0x6F: temporal operators
    Temporal,
    /// 0x70-0x7F: modalities
    Modality,
    /// 0x80-0x8F: pragmatic acts
    Pragmatic,
    /// 0x90-0x9F: meta and annotation
    Meta,
    /// 0xA0-0xBF: arithmetic
    Arithmetic,
    /// 0xC0-0xEF: reserved, decodes as opaque
    Reserved,
    /// 0xF0-0xFF: escape and extension
    Escape,
}

/// Metadata for a single base codebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    /// The raw code byte.
    pub code: u8,
    /// Wire-spec mnemonic; synthesized for the reserved range.
    pub mnemonic: Cow<'static, str>,
    /// Semantic category of the code's range.
    pub category: Category,
}

fn named(code: u8) -> Option<(&'static str, Category)> {
    match code {
        0x00..=0x0F => FrameControl::from_u8(code).map(|c| (c.mnemonic(), Category::FrameControl)),
        0x10..=0x1F => TypeMarker::from_u8(code).map(|c| (c.mnemonic(), Category::TypeMarker)),
        0x20..=0x2F => Structure::from_u8(code).map(|c| (c.mnemonic(), Category::Structure)),
        0x30..=0x3F => Quantifier::from_u8(code).map(|c| (c.mnemonic(), Category::Quantifier)),
        0x40..=0x4F => Logic::from_u8(code).map(|c| (c.mnemonic(), Category::Logic)),
        0x50..=0x5F => Relational::from_u8(code).map(|c| (c.mnemonic(), Category::Relational)),
        0x60..=0x6F => Temporal::from_u8(code).map(|c| (c.mnemonic(), Category::Temporal)),
        0x70..=0x7F => Modality::from_u8(code).map(|c| (c.mnemonic(), Category::Modality)),
        0x80..=0x8F => Pragmatic::from_u8(code).map(|c| (c.mnemonic(), Category::Pragmatic)),
        0x90..=0x9F => Meta::from_u8(code).map(|c| (c.mnemonic(), Category::Meta)),
        0xA0..=0xBF => Arithmetic::from_u8(code).map(|c| (c.mnemonic(), Category::Arithmetic)),
        0xF0..=0xFF => Escape::from_u8(code).map(|c| (c.mnemonic(), Category::Escape)),
        _ => None,
    }
}

/// Look up any of the 256 base codes. Total: reserved codes 0xC0-0xEF get
/// synthesized `RESERVED_XX` entries.
#[must_use]
pub fn base_lookup(code: u8) -> CodeEntry {
    match named(code) {
        Some((mnemonic, category)) => CodeEntry {
            code,
            mnemonic: Cow::Borrowed(mnemonic),
            category,
        },
        None => CodeEntry {
            code,
            mnemonic: Cow::Owned(format!("RESERVED_{code:02X}")),
            category: Category::Reserved,
        },
    }
}

/// True for operators taking two operands (e.g. ADD, AND, EQ, T_BEFORE).
#[must_use]
pub fn is_binary_op(code: u8) -> bool {
    matches!(
        code,
        0x40 | 0x41                 // AND, OR
        | 0x43..=0x47               // XOR..NOR
        | 0x49                      // COALESCE
        | 0x50..=0x55               // EQ..GTE
        | 0x57..=0x59               // CONTAINS, SUBSET, SUPERSET
        | 0x64..=0x6B               // T_BEFORE..T_MEETS
        | 0xA0..=0xA5               // ADD..POW
        | 0xB0 | 0xB1               // MIN, MAX
        | 0xB7 | 0xB8               // DOT_PRODUCT, CROSS_PRODUCT
        | 0xBE | 0xBF               // ATAN2, DISTANCE
    )
}

/// True for operators taking one operand (e.g. NOT, SQRT, COUNT).
#[must_use]
pub fn is_unary_op(code: u8) -> bool {
    matches!(
        code,
        0x36                        // COUNT
        | 0x42 | 0x4A               // NOT, IS_NULL
        | 0x6C                      // T_ELAPSED
        | 0xA6..=0xAF               // SQRT..TRUNC
        | 0xB2..=0xB6               // SUM..VARIANCE
        | 0xB9                      // NORM
        | 0xBC | 0xBD               // SIN, COS
    )
}

/// True for operators taking three operands (IF_THEN_ELSE, IN_RANGE, CLAMP,
/// LERP).
#[must_use]
pub fn is_ternary_op(code: u8) -> bool {
    matches!(code, 0x48 | 0x5A | 0xBA | 0xBB)
}
