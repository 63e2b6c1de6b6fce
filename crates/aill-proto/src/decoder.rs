//! Streaming wire-format decoder.
//!
//! Forward-only: the decoder consumes bytes left to right, dispatching on
//! the current byte's codebook range, and never backtracks or
//! resynchronizes inside an utterance. All fatal errors carry the byte
//! offset where decoding stopped.
//!
//! # Tolerance policy
//!
//! Bit errors are not corrected here - a corrupted epoch is dropped at the
//! framing layer before the decoder sees it. Two truncation shapes are
//! recoverable by design:
//!
//! - a list or map whose stream ends before the declared count is decoded
//!   with the elements present and its `incomplete` flag set;
//! - a stream ending at an expression boundary ends the utterance body (so
//!   any successfully decoded prefix of a stream decodes to the same tree).
//!
//! Truncation inside a token payload is always fatal.
//!
//! # Meta header policy
//!
//! CONFIDENCE, PRIORITY, and TIMESTAMP_META must appear exactly once, in
//! that order. The optional annotations (0x92-0x9E) are each consumed at
//! most once; an unknown or repeated meta code ends the header and starts
//! the body without being consumed. This keeps the header forward
//! compatible at the cost of an unknown 0x9X code opening the body, which
//! is accepted.

use crate::{
    codebook::{
        Escape, FrameControl, Meta, Modality, Pragmatic, Structure, Temporal, TypeMarker,
        base_lookup,
    },
    errors::{Result, WireError},
    expr::{Annotation, Expression, FieldKey, MetaHeader, ModalExtra, Utterance, Value},
    stream::ByteReader,
};

const START_UTTERANCE: u8 = FrameControl::StartUtterance as u8;
const END_UTTERANCE: u8 = FrameControl::EndUtterance as u8;

const BEGIN_STRUCT: u8 = Structure::BeginStruct as u8;
const END_STRUCT: u8 = Structure::EndStruct as u8;
const FIELD_SEP: u8 = Structure::FieldSep as u8;
const BEGIN_LIST: u8 = Structure::BeginList as u8;
const END_LIST: u8 = Structure::EndList as u8;
const BEGIN_MAP: u8 = Structure::BeginMap as u8;
const END_MAP: u8 = Structure::EndMap as u8;
const END_TUPLE: u8 = Structure::EndTuple as u8;
const END_UNION: u8 = Structure::EndUnion as u8;
const END_OPTION: u8 = Structure::EndOption as u8;
const FIELD_ID: u8 = Structure::FieldId as u8;

const META_CONFIDENCE: u8 = Meta::Confidence as u8;
const META_LABEL: u8 = Meta::Label as u8;
const META_CONTEXT_REF: u8 = Meta::ContextRef as u8;

const ESCAPE_L1: u8 = Escape::EscapeL1 as u8;
const ESCAPE_L3: u8 = Escape::EscapeL3 as u8;
const EXTENSION: u8 = Escape::Extension as u8;
const COMMENT: u8 = Escape::Comment as u8;
const NOP: u8 = Escape::Nop as u8;

/// Decode one complete utterance from wire bytes.
///
/// Trailing bytes after END_UTTERANCE are ignored; the decoder stops at the
/// utterance boundary.
///
/// # Errors
///
/// - `WireError::Structural` when the stream does not open with
///   START_UTTERANCE, or a wrong token appears mid-stream
/// - `WireError::MetaMissing` when a mandatory meta field is absent or out
///   of order
/// - `WireError::Truncated` / `WireError::Encoding` from the primitive layer
pub fn decode_utterance(data: &[u8]) -> Result<Utterance> {
    decode_utterance_prefix(data).map(|(utterance, _)| utterance)
}

/// Decode one utterance and report how many bytes it consumed.
///
/// Decoding any successful prefix `data[..consumed]` again yields the same
/// tree, which is what lets utterances be reassembled from epoch payloads
/// one at a time.
///
/// # Errors
///
/// Same conditions as [`decode_utterance`].
pub fn decode_utterance_prefix(data: &[u8]) -> Result<(Utterance, usize)> {
    let mut decoder = Decoder::new(data);
    let utterance = decoder.utterance()?;
    Ok((utterance, decoder.r.offset()))
}

struct Decoder<'a> {
    r: ByteReader<'a>,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { r: ByteReader::new(data) }
    }

    fn utterance(&mut self) -> Result<Utterance> {
        let offset = self.r.offset();
        let code = self.r.take_u8()?;
        if code != START_UTTERANCE {
            return Err(WireError::Structural {
                offset,
                expected: "START_UTTERANCE",
                got: code,
            });
        }

        let meta = self.meta_header()?;

        let mut body = Vec::new();
        loop {
            self.skip_padding()?;
            match self.r.peek() {
                // Stream ended at an expression boundary: tolerated, the
                // epoch layer delimits recovery.
                None => break,
                Some(END_UTTERANCE) => {
                    self.r.take_u8()?;
                    break;
                }
                Some(_) => body.push(self.expression()?),
            }
        }

        Ok(Utterance { meta, body })
    }

    // ── Meta header ──

    fn mandatory_meta(&mut self, expected: Meta, which: &'static str) -> Result<()> {
        match self.r.peek() {
            Some(code) if code == expected.code() => {
                self.r.take_u8()?;
                Ok(())
            }
            Some(_) => Err(WireError::MetaMissing { which }),
            None => Err(WireError::Truncated { offset: self.r.offset(), needed: 1 }),
        }
    }

    fn meta_header(&mut self) -> Result<MetaHeader> {
        self.mandatory_meta(Meta::Confidence, "CONFIDENCE")?;
        let confidence = self.r.take_f16()?;
        self.mandatory_meta(Meta::Priority, "PRIORITY")?;
        let priority = self.r.take_u8()?;
        self.mandatory_meta(Meta::TimestampMeta, "TIMESTAMP_META")?;
        let timestamp_us = self.r.take_i64()?;

        let mut meta = MetaHeader::new(confidence, priority, timestamp_us);
        loop {
            let Some(code) = self.r.peek() else { break };
            let consumed = match Meta::from_u8(code) {
                Some(Meta::SourceAgent) if meta.source_agent.is_none() => {
                    self.r.take_u8()?;
                    meta.source_agent = Some(self.r.take_uuid()?);
                    true
                }
                Some(Meta::DestAgent) if meta.dest_agent.is_none() => {
                    self.r.take_u8()?;
                    meta.dest_agent = Some(self.r.take_uuid()?);
                    true
                }
                Some(Meta::Seqnum) if meta.seqnum.is_none() => {
                    self.r.take_u8()?;
                    meta.seqnum = Some(self.r.take_u32()?);
                    true
                }
                Some(Meta::TraceId) if meta.trace_id.is_none() => {
                    self.r.take_u8()?;
                    meta.trace_id = Some(self.r.take_u64()?);
                    true
                }
                Some(Meta::Ttl) if meta.ttl.is_none() => {
                    self.r.take_u8()?;
                    meta.ttl = Some(self.r.take_u16()?);
                    true
                }
                Some(Meta::Topic) if meta.topic.is_none() => {
                    self.r.take_u8()?;
                    meta.topic = Some(self.r.take_u16()?);
                    true
                }
                Some(Meta::VersionTag) if meta.version_tag.is_none() => {
                    self.r.take_u8()?;
                    meta.version_tag = Some((self.r.take_u16()?, self.r.take_u16()?));
                    true
                }
                // Unknown, repeated, or body-only meta code: the header
                // ends here and the byte belongs to the body.
                _ => false,
            };
            if !consumed {
                break;
            }
        }
        Ok(meta)
    }

    // ── Expressions ──

    /// Consume NOP and COMMENT padding at an expression boundary.
    fn skip_padding(&mut self) -> Result<()> {
        loop {
            match self.r.peek() {
                Some(NOP) => {
                    self.r.take_u8()?;
                }
                Some(COMMENT) => {
                    self.r.take_u8()?;
                    self.r.take_str()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// One expression preceded by optional padding (prefix operands).
    fn operand(&mut self) -> Result<Expression> {
        self.skip_padding()?;
        self.expression()
    }

    fn expression(&mut self) -> Result<Expression> {
        let offset = self.r.offset();
        let code = self.r.take_u8()?;
        match code {
            0x10..=0x1F => self.literal(code, offset),

            BEGIN_STRUCT => self.struct_body(),
            BEGIN_LIST => self.list_body(),
            BEGIN_MAP => self.map_body(),
            END_STRUCT | END_LIST | END_MAP | END_TUPLE | END_UNION | END_OPTION => {
                Err(WireError::Structural { offset, expected: "expression", got: code })
            }

            0x60..=0x6F => {
                let modifier = Temporal::from_u8(code).ok_or(WireError::Structural {
                    offset,
                    expected: "temporal modifier",
                    got: code,
                })?;
                let inner = self.operand()?;
                Ok(Expression::Temporal { modifier, inner: Box::new(inner) })
            }
            0x70..=0x7F => self.modal(code, offset),
            0x80..=0x8F => {
                let act = Pragmatic::from_u8(code).ok_or(WireError::Structural {
                    offset,
                    expected: "pragmatic act",
                    got: code,
                })?;
                let inner = self.operand()?;
                Ok(Expression::Pragmatic { act, inner: Box::new(inner) })
            }

            META_CONFIDENCE => {
                let confidence = self.r.take_f16()?;
                let inner = self.operand()?;
                Ok(Expression::Annotated {
                    annotation: Annotation::Confidence(confidence),
                    inner: Box::new(inner),
                })
            }
            META_LABEL => {
                let text = self.r.take_str()?;
                let inner = self.operand()?;
                Ok(Expression::Annotated {
                    annotation: Annotation::Label(text),
                    inner: Box::new(inner),
                })
            }
            META_CONTEXT_REF => {
                let sct_index = self.r.take_varint()?;
                Ok(Expression::ContextRef { sct_index })
            }

            ESCAPE_L1..=ESCAPE_L3 => {
                let level = code - ESCAPE_L1 + 1;
                let domain_code = self.r.take_u16()?;
                Ok(Expression::DomainRef { level, code: domain_code })
            }
            EXTENSION => {
                let proposed_code = self.r.take_u16()?;
                Ok(Expression::Extension { proposed_code })
            }

            // Operators, quantifiers, stray frame control, reserved range:
            // a single opaque code node.
            _ => Ok(Expression::Opaque {
                code,
                mnemonic: base_lookup(code).mnemonic,
            }),
        }
    }

    fn literal(&mut self, code: u8, offset: usize) -> Result<Expression> {
        let marker = TypeMarker::from_u8(code).ok_or(WireError::Structural {
            offset,
            expected: "type marker",
            got: code,
        })?;
        let value = match marker {
            TypeMarker::Int8 => Value::I8(self.r.take_i8()?),
            TypeMarker::Int16 => Value::I16(self.r.take_i16()?),
            TypeMarker::Int32 => Value::I32(self.r.take_i32()?),
            TypeMarker::Int64 => Value::I64(self.r.take_i64()?),
            TypeMarker::Uint8 => Value::U8(self.r.take_u8()?),
            TypeMarker::Uint16 => Value::U16(self.r.take_u16()?),
            TypeMarker::Uint32 => Value::U32(self.r.take_u32()?),
            TypeMarker::Uint64 => Value::U64(self.r.take_u64()?),
            TypeMarker::Float16 => Value::F16(self.r.take_f16()?),
            TypeMarker::Float32 => Value::F32(self.r.take_f32()?),
            TypeMarker::Float64 => Value::F64(self.r.take_f64()?),
            TypeMarker::Bool => Value::Bool(self.r.take_u8()? != 0),
            TypeMarker::String => Value::Str(self.r.take_str()?),
            TypeMarker::Bytes => Value::Bytes(self.r.take_bytes()?),
            TypeMarker::Timestamp => Value::Timestamp(self.r.take_i64()?),
            TypeMarker::Null => Value::Null,
        };
        Ok(Expression::Literal(value))
    }

    fn modal(&mut self, code: u8, offset: usize) -> Result<Expression> {
        let modality = Modality::from_u8(code).ok_or(WireError::Structural {
            offset,
            expected: "modality",
            got: code,
        })?;
        let extra = match modality {
            Modality::Predicted => Some(ModalExtra::Horizon(self.r.take_f16()?)),
            Modality::Reported => Some(ModalExtra::Reporter(self.r.take_uuid()?)),
            _ => None,
        };
        let inner = self.operand()?;
        Ok(Expression::Modal { modality, inner: Box::new(inner), extra })
    }

    fn struct_body(&mut self) -> Result<Expression> {
        let mut fields: Vec<(FieldKey, Expression)> = Vec::new();
        let mut positional: u16 = 0;
        loop {
            self.skip_padding()?;
            match self.r.peek() {
                None => {
                    return Err(WireError::Truncated { offset: self.r.offset(), needed: 1 });
                }
                Some(END_STRUCT) => {
                    self.r.take_u8()?;
                    break;
                }
                Some(FIELD_SEP) => {
                    self.r.take_u8()?;
                }
                Some(FIELD_ID) => {
                    self.r.take_u8()?;
                    let code = self.r.take_u16()?;
                    self.skip_padding()?;
                    let value = self.expression()?;
                    // Duplicate field codes are last-write-wins: the first
                    // occurrence keeps its position, the value is replaced.
                    let key = FieldKey::Code(code);
                    if let Some(slot) = fields.iter_mut().find(|(k, _)| *k == key) {
                        slot.1 = value;
                    } else {
                        fields.push((key, value));
                    }
                }
                Some(_) => {
                    let value = self.expression()?;
                    fields.push((FieldKey::Index(positional), value));
                    positional += 1;
                }
            }
        }
        Ok(Expression::Struct { fields })
    }

    fn list_body(&mut self) -> Result<Expression> {
        let count = self.r.take_u16()?;
        let mut elements = Vec::new();
        while elements.len() < usize::from(count) {
            self.skip_padding()?;
            match self.r.peek() {
                None | Some(END_LIST) => break,
                Some(_) => elements.push(self.expression()?),
            }
        }
        let closed = self.close_collection(END_LIST, "END_LIST")?;
        let incomplete = !closed || elements.len() < usize::from(count);
        Ok(Expression::List { count, elements, incomplete })
    }

    fn map_body(&mut self) -> Result<Expression> {
        let count = self.r.take_u16()?;
        let mut pairs = Vec::new();
        while pairs.len() < usize::from(count) {
            self.skip_padding()?;
            match self.r.peek() {
                None | Some(END_MAP) => break,
                Some(_) => {
                    let key = self.expression()?;
                    self.skip_padding()?;
                    match self.r.peek() {
                        // A dangling key at end of stream is dropped; the
                        // incomplete flag records the loss.
                        None => break,
                        Some(END_MAP) => {
                            return Err(WireError::Structural {
                                offset: self.r.offset(),
                                expected: "map value",
                                got: END_MAP,
                            });
                        }
                        Some(_) => {
                            let value = self.expression()?;
                            pairs.push((key, value));
                        }
                    }
                }
            }
        }
        let closed = self.close_collection(END_MAP, "END_MAP")?;
        let incomplete = !closed || pairs.len() < usize::from(count);
        Ok(Expression::Map { count, pairs, incomplete })
    }

    /// Consume the collection closer. Returns false when the stream ended
    /// before the closer arrived (the truncated-collection tolerance); a
    /// different token is a structural error.
    fn close_collection(&mut self, closer: u8, expected: &'static str) -> Result<bool> {
        self.skip_padding()?;
        match self.r.peek() {
            None => Ok(false),
            Some(code) if code == closer => {
                self.r.take_u8()?;
                Ok(true)
            }
            Some(got) => Err(WireError::Structural {
                offset: self.r.offset(),
                expected,
                got,
            }),
        }
    }
}
