//! Base codebook categories (Level 0).
//!
//! The 8-bit code space is partitioned into fixed category ranges; each
//! category is a closed `#[repr(u8)]` enum carrying the wire-spec mnemonic.
//! Codes 0xC0-0xEF are reserved for future base codebook expansion and have
//! no enum - [`super::base_lookup`] synthesizes entries for them.

/// Defines one category enum together with its code/mnemonic tables.
macro_rules! codebook_category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => $mnemonic:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc = $mnemonic]
                $variant = $code,
            )+
        }

        impl $name {
            /// Map a raw code into this category. `None` outside its range.
            #[must_use]
            pub const fn from_u8(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Wire-spec mnemonic for this code.
            #[must_use]
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$variant => $mnemonic,)+
                }
            }

            /// Raw code byte.
            #[must_use]
            pub const fn code(self) -> u8 {
                self as u8
            }
        }
    };
}

codebook_category! {
    /// 0x00-0x0F: frame control codes.
    FrameControl {
        StartUtterance = 0x00 => "START_UTTERANCE",
        EndUtterance   = 0x01 => "END_UTTERANCE",
        Abort          = 0x02 => "ABORT",
        Pause          = 0x03 => "PAUSE",
        Resume         = 0x04 => "RESUME",
        Retransmit     = 0x05 => "RETRANSMIT",
        AckEpoch       = 0x06 => "ACK_EPOCH",
        NackEpoch      = 0x07 => "NACK_EPOCH",
        SyncMark       = 0x08 => "SYNC_MARK",
        FragmentStart  = 0x09 => "FRAGMENT_START",
        FragmentCont   = 0x0A => "FRAGMENT_CONT",
        FragmentEnd    = 0x0B => "FRAGMENT_END",
        EchoRequest    = 0x0C => "ECHO_REQUEST",
        EchoReply      = 0x0D => "ECHO_REPLY",
        Reserved0E     = 0x0E => "RESERVED_0E",
        Reserved0F     = 0x0F => "RESERVED_0F",
    }
}

codebook_category! {
    /// 0x10-0x1F: literal type markers.
    TypeMarker {
        Int8      = 0x10 => "TYPE_INT8",
        Int16     = 0x11 => "TYPE_INT16",
        Int32     = 0x12 => "TYPE_INT32",
        Int64     = 0x13 => "TYPE_INT64",
        Uint8     = 0x14 => "TYPE_UINT8",
        Uint16    = 0x15 => "TYPE_UINT16",
        Uint32    = 0x16 => "TYPE_UINT32",
        Uint64    = 0x17 => "TYPE_UINT64",
        Float16   = 0x18 => "TYPE_FLOAT16",
        Float32   = 0x19 => "TYPE_FLOAT32",
        Float64   = 0x1A => "TYPE_FLOAT64",
        Bool      = 0x1B => "TYPE_BOOL",
        String    = 0x1C => "TYPE_STRING",
        Bytes     = 0x1D => "TYPE_BYTES",
        Timestamp = 0x1E => "TYPE_TIMESTAMP",
        Null      = 0x1F => "TYPE_NULL",
    }
}

codebook_category! {
    /// 0x20-0x2F: structure delimiters.
    Structure {
        BeginStruct = 0x20 => "BEGIN_STRUCT",
        EndStruct   = 0x21 => "END_STRUCT",
        FieldSep    = 0x22 => "FIELD_SEP",
        BeginList   = 0x23 => "BEGIN_LIST",
        EndList     = 0x24 => "END_LIST",
        BeginMap    = 0x25 => "BEGIN_MAP",
        EndMap      = 0x26 => "END_MAP",
        BeginTuple  = 0x27 => "BEGIN_TUPLE",
        EndTuple    = 0x28 => "END_TUPLE",
        FieldId     = 0x29 => "FIELD_ID",
        BeginUnion  = 0x2A => "BEGIN_UNION",
        EndUnion    = 0x2B => "END_UNION",
        BeginOption = 0x2C => "BEGIN_OPTION",
        EndOption   = 0x2D => "END_OPTION",
        SchemaRef   = 0x2E => "SCHEMA_REF",
        Reserved2F  = 0x2F => "RESERVED_2F",
    }
}

codebook_category! {
    /// 0x30-0x3F: quantifiers.
    Quantifier {
        Forall       = 0x30 => "FORALL",
        Exists       = 0x31 => "EXISTS",
        ExistsUnique = 0x32 => "EXISTS_UNIQUE",
        ExactlyN     = 0x33 => "EXACTLY_N",
        AtLeastN     = 0x34 => "AT_LEAST_N",
        AtMostN      = 0x35 => "AT_MOST_N",
        Count        = 0x36 => "COUNT",
        Zero         = 0x37 => "ZERO",
        One          = 0x38 => "ONE",
        Few          = 0x39 => "FEW",
        Many         = 0x3A => "MANY",
        All          = 0x3B => "ALL",
        NoneQ        = 0x3C => "NONE_Q",
        Most         = 0x3D => "MOST",
        Proportion   = 0x3E => "PROPORTION",
        Reserved3F   = 0x3F => "RESERVED_3F",
    }
}

codebook_category! {
    /// 0x40-0x4F: logic operators.
    Logic {
        And        = 0x40 => "AND",
        Or         = 0x41 => "OR",
        Not        = 0x42 => "NOT",
        Xor        = 0x43 => "XOR",
        Implies    = 0x44 => "IMPLIES",
        Iff        = 0x45 => "IFF",
        Nand       = 0x46 => "NAND",
        Nor        = 0x47 => "NOR",
        IfThenElse = 0x48 => "IF_THEN_ELSE",
        Coalesce   = 0x49 => "COALESCE",
        IsNull     = 0x4A => "IS_NULL",
        IsType     = 0x4B => "IS_TYPE",
        Reserved4C = 0x4C => "RESERVED_4C",
        Reserved4D = 0x4D => "RESERVED_4D",
        Reserved4E = 0x4E => "RESERVED_4E",
        Reserved4F = 0x4F => "RESERVED_4F",
    }
}

codebook_category! {
    /// 0x50-0x5F: relational operators.
    Relational {
        Eq         = 0x50 => "EQ",
        Neq        = 0x51 => "NEQ",
        Lt         = 0x52 => "LT",
        Gt         = 0x53 => "GT",
        Lte        = 0x54 => "LTE",
        Gte        = 0x55 => "GTE",
        Approx     = 0x56 => "APPROX",
        Contains   = 0x57 => "CONTAINS",
        Subset     = 0x58 => "SUBSET",
        Superset   = 0x59 => "SUPERSET",
        InRange    = 0x5A => "IN_RANGE",
        Matches    = 0x5B => "MATCHES",
        StartsWith = 0x5C => "STARTS_WITH",
        EndsWith   = 0x5D => "ENDS_WITH",
        Between    = 0x5E => "BETWEEN",
        Reserved5F = 0x5F => "RESERVED_5F",
    }
}

codebook_category! {
    /// 0x60-0x6F: temporal operators and modifiers.
    Temporal {
        Past          = 0x60 => "PAST",
        Present       = 0x61 => "PRESENT",
        Future        = 0x62 => "FUTURE",
        Duration      = 0x63 => "DURATION",
        TBefore       = 0x64 => "T_BEFORE",
        TAfter        = 0x65 => "T_AFTER",
        TDuring       = 0x66 => "T_DURING",
        TSimultaneous = 0x67 => "T_SIMULTANEOUS",
        TStarts       = 0x68 => "T_STARTS",
        TFinishes     = 0x69 => "T_FINISHES",
        TOverlaps     = 0x6A => "T_OVERLAPS",
        TMeets        = 0x6B => "T_MEETS",
        TElapsed      = 0x6C => "T_ELAPSED",
        TNow          = 0x6D => "T_NOW",
        TDeadline     = 0x6E => "T_DEADLINE",
        Reserved6F    = 0x6F => "RESERVED_6F",
    }
}

codebook_category! {
    /// 0x70-0x7F: epistemic and deontic modalities.
    Modality {
        Certain        = 0x70 => "CERTAIN",
        Probable       = 0x71 => "PROBABLE",
        Possible       = 0x72 => "POSSIBLE",
        Unlikely       = 0x73 => "UNLIKELY",
        Uncertain      = 0x74 => "UNCERTAIN",
        Hypothetical   = 0x75 => "HYPOTHETICAL",
        Counterfactual = 0x76 => "COUNTERFACTUAL",
        Obligatory     = 0x77 => "OBLIGATORY",
        Permitted      = 0x78 => "PERMITTED",
        Forbidden      = 0x79 => "FORBIDDEN",
        Inferred       = 0x7A => "INFERRED",
        Observed       = 0x7B => "OBSERVED",
        Reported       = 0x7C => "REPORTED",
        Predicted      = 0x7D => "PREDICTED",
        Desired        = 0x7E => "DESIRED",
        Undesired      = 0x7F => "UNDESIRED",
    }
}

codebook_category! {
    /// 0x80-0x8F: pragmatic (speech) acts.
    Pragmatic {
        Query       = 0x80 => "QUERY",
        Assert      = 0x81 => "ASSERT",
        Request     = 0x82 => "REQUEST",
        Command     = 0x83 => "COMMAND",
        Acknowledge = 0x84 => "ACKNOWLEDGE",
        Reject      = 0x85 => "REJECT",
        Clarify     = 0x86 => "CLARIFY",
        Correct     = 0x87 => "CORRECT",
        Propose     = 0x88 => "PROPOSE",
        Accept      = 0x89 => "ACCEPT",
        Warn        = 0x8A => "WARN",
        Promise     = 0x8B => "PROMISE",
        Inform      = 0x8C => "INFORM",
        Suggest     = 0x8D => "SUGGEST",
        Greet       = 0x8E => "GREET",
        Farewell    = 0x8F => "FAREWELL",
    }
}

codebook_category! {
    /// 0x90-0x9F: meta and annotation codes.
    Meta {
        Confidence    = 0x90 => "CONFIDENCE",
        Priority      = 0x91 => "PRIORITY",
        SourceAgent   = 0x92 => "SOURCE_AGENT",
        DestAgent     = 0x93 => "DEST_AGENT",
        TimestampMeta = 0x94 => "TIMESTAMP_META",
        Seqnum        = 0x95 => "SEQNUM",
        HashRef       = 0x96 => "HASH_REF",
        Topic         = 0x97 => "TOPIC",
        ContextRef    = 0x98 => "CONTEXT_REF",
        EpochBoundary = 0x99 => "EPOCH_BOUNDARY",
        Label         = 0x9A => "LABEL",
        VersionTag    = 0x9B => "VERSION_TAG",
        TraceId       = 0x9C => "TRACE_ID",
        Cost          = 0x9D => "COST",
        Ttl           = 0x9E => "TTL",
        Reserved9F    = 0x9F => "RESERVED_9F",
    }
}

codebook_category! {
    /// 0xA0-0xBF: arithmetic and mathematical operators.
    Arithmetic {
        Add          = 0xA0 => "ADD",
        Sub          = 0xA1 => "SUB",
        Mul          = 0xA2 => "MUL",
        Div          = 0xA3 => "DIV",
        Mod          = 0xA4 => "MOD",
        Pow          = 0xA5 => "POW",
        Sqrt         = 0xA6 => "SQRT",
        Log          = 0xA7 => "LOG",
        Log10        = 0xA8 => "LOG10",
        Log2         = 0xA9 => "LOG2",
        Abs          = 0xAA => "ABS",
        Neg          = 0xAB => "NEG",
        Round        = 0xAC => "ROUND",
        Floor        = 0xAD => "FLOOR",
        Ceil         = 0xAE => "CEIL",
        Trunc        = 0xAF => "TRUNC",
        Min          = 0xB0 => "MIN",
        Max          = 0xB1 => "MAX",
        Sum          = 0xB2 => "SUM",
        Mean         = 0xB3 => "MEAN",
        Median       = 0xB4 => "MEDIAN",
        Stddev       = 0xB5 => "STDDEV",
        Variance     = 0xB6 => "VARIANCE",
        DotProduct   = 0xB7 => "DOT_PRODUCT",
        CrossProduct = 0xB8 => "CROSS_PRODUCT",
        Norm         = 0xB9 => "NORM",
        Clamp        = 0xBA => "CLAMP",
        Lerp         = 0xBB => "LERP",
        Sin          = 0xBC => "SIN",
        Cos          = 0xBD => "COS",
        Atan2        = 0xBE => "ATAN2",
        Distance     = 0xBF => "DISTANCE",
    }
}

codebook_category! {
    /// 0xF0-0xFF: escape and extension codes.
    Escape {
        EscapeL1     = 0xF0 => "ESCAPE_L1",
        EscapeL2     = 0xF1 => "ESCAPE_L2",
        EscapeL3     = 0xF2 => "ESCAPE_L3",
        LiteralBytes = 0xF3 => "LITERAL_BYTES",
        CodebookRef  = 0xF4 => "CODEBOOK_REF",
        Extension    = 0xF5 => "EXTENSION",
        ExtAck       = 0xF6 => "EXT_ACK",
        ExtNack      = 0xF7 => "EXT_NACK",
        CodebookDef  = 0xF8 => "CODEBOOK_DEF",
        CodebookAck  = 0xF9 => "CODEBOOK_ACK",
        CodebookNack = 0xFA => "CODEBOOK_NACK",
        StreamId     = 0xFB => "STREAM_ID",
        Xref         = 0xFC => "XREF",
        Comment      = 0xFD => "COMMENT",
        Nop          = 0xFE => "NOP",
        ReservedFF   = 0xFF => "RESERVED_FF",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ranges_are_closed() {
        for code in 0x00..=0x0F {
            assert!(FrameControl::from_u8(code).is_some());
        }
        for code in 0x10..=0x1F {
            assert!(TypeMarker::from_u8(code).is_some());
        }
        for code in 0xA0..=0xBF {
            assert!(Arithmetic::from_u8(code).is_some());
        }
        for code in 0xF0..=0xFF {
            assert!(Escape::from_u8(code).is_some());
        }
        assert!(TypeMarker::from_u8(0x20).is_none());
        assert!(Pragmatic::from_u8(0x90).is_none());
    }

    #[test]
    fn codes_round_trip_through_mnemonics() {
        assert_eq!(Pragmatic::Assert.code(), 0x81);
        assert_eq!(Pragmatic::Assert.mnemonic(), "ASSERT");
        assert_eq!(Modality::Predicted.code(), 0x7D);
        assert_eq!(Escape::Nop.mnemonic(), "NOP");
        assert_eq!(Quantifier::NoneQ.mnemonic(), "NONE_Q");
    }
}
