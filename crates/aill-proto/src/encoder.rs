//! Structural utterance encoder.
//!
//! [`UtteranceBuilder`] is a mutating builder with an explicit lifecycle
//! state machine: operations invalid in the current state fail with
//! [`WireError::BuilderState`] instead of producing a malformed stream.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐ start_utterance ┌────────┐  any body emit  ┌──────┐
//! │ Idle │────────────────>│ Header │────────────────>│ Body │
//! └──────┘                 └────────┘                 └──────┘
//!    ^                          │    end_utterance       │
//!    └──────────────────────────┴────────────────────────┘
//!                         (abort also resets to Idle)
//! ```
//!
//! Meta annotations (destination, sequence number, ...) are only legal in
//! the Header state; the first body emission closes the header. Structure
//! scopes (struct/list/map) are tracked on a stack so a mismatched closer is
//! rejected at the call site rather than surfacing as a decode error on the
//! peer.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use half::f16;

use crate::{
    codebook::{Escape, FrameControl, Meta, Modality, Pragmatic, Structure, Temporal, TypeMarker},
    errors::{Result, WireError},
    expr::{Annotation, Expression, FieldKey, ModalExtra, Utterance, Value},
    stream::ByteWriter,
};

/// Lifecycle state of an [`UtteranceBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderState {
    /// No utterance open.
    #[default]
    Idle,
    /// Meta header open; annotations may still be appended.
    Header,
    /// Body open; header is sealed.
    Body,
}

/// Open structure scope, used to validate closers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Struct,
    List,
    Map,
}

/// Wall-clock microseconds since the Unix epoch.
fn now_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as i64)
        .unwrap_or(0)
}

/// Builder emitting AILL wire bytes for one utterance at a time.
///
/// The builder is reusable: [`UtteranceBuilder::end_utterance`] returns the
/// finished bytes and resets to Idle.
#[derive(Debug, Default)]
pub struct UtteranceBuilder {
    out: ByteWriter,
    state: BuilderState,
    scopes: Vec<Scope>,
}

impl UtteranceBuilder {
    /// Create an idle builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Bytes emitted so far (across the whole builder lifetime).
    #[must_use]
    pub fn current_size(&self) -> usize {
        self.out.len()
    }

    fn code(&mut self, code: u8) {
        self.out.put_u8(code);
    }

    /// Header ops are only legal between start_utterance and the first body
    /// emission.
    fn require_header(&self, op: &'static str) -> Result<()> {
        if self.state == BuilderState::Header {
            Ok(())
        } else {
            Err(WireError::BuilderState { state: self.state, op })
        }
    }

    /// Body ops seal the header on first use.
    fn require_body(&mut self, op: &'static str) -> Result<()> {
        match self.state {
            BuilderState::Idle => Err(WireError::BuilderState { state: self.state, op }),
            BuilderState::Header => {
                self.state = BuilderState::Body;
                Ok(())
            }
            BuilderState::Body => Ok(()),
        }
    }

    fn close_scope(&mut self, expected: Scope, op: &'static str) -> Result<()> {
        if self.scopes.last() == Some(&expected) {
            self.scopes.pop();
            Ok(())
        } else {
            Err(WireError::BuilderState { state: self.state, op })
        }
    }

    /// Begin an utterance: START_UTTERANCE plus the mandatory meta header
    /// (CONFIDENCE, PRIORITY, TIMESTAMP_META in fixed order).
    ///
    /// `timestamp_us` defaults to current wall-clock microseconds.
    ///
    /// # Errors
    ///
    /// - `WireError::BuilderState` if an utterance is already open
    pub fn start_utterance(
        &mut self,
        confidence: f32,
        priority: u8,
        timestamp_us: Option<i64>,
    ) -> Result<&mut Self> {
        if self.state != BuilderState::Idle {
            return Err(WireError::BuilderState { state: self.state, op: "start_utterance" });
        }
        self.code(FrameControl::StartUtterance.code());
        self.code(Meta::Confidence.code());
        self.out.put_f16(f16::from_f32(confidence));
        self.code(Meta::Priority.code());
        self.out.put_u8(priority);
        self.code(Meta::TimestampMeta.code());
        self.out.put_i64(timestamp_us.unwrap_or_else(now_micros));
        self.state = BuilderState::Header;
        Ok(self)
    }

    /// Finish the utterance, returning the wire bytes and resetting to Idle.
    ///
    /// # Errors
    ///
    /// - `WireError::BuilderState` if no utterance is open or a structure
    ///   scope is still unclosed
    pub fn end_utterance(&mut self) -> Result<Bytes> {
        if self.state == BuilderState::Idle {
            return Err(WireError::BuilderState { state: self.state, op: "end_utterance" });
        }
        if !self.scopes.is_empty() {
            return Err(WireError::BuilderState { state: self.state, op: "end_utterance" });
        }
        self.code(FrameControl::EndUtterance.code());
        self.state = BuilderState::Idle;
        Ok(std::mem::take(&mut self.out).into_bytes())
    }

    /// Emit ABORT (0x02) and reset the builder state.
    ///
    /// Already-emitted bytes are not rolled back; the receiver discards the
    /// aborted utterance on seeing the frame control code.
    ///
    /// # Errors
    ///
    /// - `WireError::BuilderState` if no utterance is open
    pub fn abort(&mut self) -> Result<&mut Self> {
        if self.state == BuilderState::Idle {
            return Err(WireError::BuilderState { state: self.state, op: "abort" });
        }
        self.code(FrameControl::Abort.code());
        self.scopes.clear();
        self.state = BuilderState::Idle;
        Ok(self)
    }

    // ── Optional meta annotations (Header state only) ──

    /// DEST_AGENT annotation.
    pub fn dest_agent(&mut self, uuid: &[u8; 16]) -> Result<&mut Self> {
        self.require_header("dest_agent")?;
        self.code(Meta::DestAgent.code());
        self.out.put_uuid(uuid);
        Ok(self)
    }

    /// SOURCE_AGENT annotation.
    pub fn source_agent(&mut self, uuid: &[u8; 16]) -> Result<&mut Self> {
        self.require_header("source_agent")?;
        self.code(Meta::SourceAgent.code());
        self.out.put_uuid(uuid);
        Ok(self)
    }

    /// SEQNUM annotation.
    pub fn seqnum(&mut self, seqnum: u32) -> Result<&mut Self> {
        self.require_header("seqnum")?;
        self.code(Meta::Seqnum.code());
        self.out.put_u32(seqnum);
        Ok(self)
    }

    /// TRACE_ID annotation.
    pub fn trace_id(&mut self, trace_id: u64) -> Result<&mut Self> {
        self.require_header("trace_id")?;
        self.code(Meta::TraceId.code());
        self.out.put_u64(trace_id);
        Ok(self)
    }

    /// TTL annotation.
    pub fn ttl(&mut self, ttl: u16) -> Result<&mut Self> {
        self.require_header("ttl")?;
        self.code(Meta::Ttl.code());
        self.out.put_u16(ttl);
        Ok(self)
    }

    /// TOPIC annotation.
    pub fn topic(&mut self, topic: u16) -> Result<&mut Self> {
        self.require_header("topic")?;
        self.code(Meta::Topic.code());
        self.out.put_u16(topic);
        Ok(self)
    }

    /// VERSION_TAG annotation (major, minor).
    pub fn version_tag(&mut self, major: u16, minor: u16) -> Result<&mut Self> {
        self.require_header("version_tag")?;
        self.code(Meta::VersionTag.code());
        self.out.put_u16(major);
        self.out.put_u16(minor);
        Ok(self)
    }

    // ── Prefix codes ──

    /// Emit a pragmatic act prefix; exactly one expression must follow.
    pub fn pragma(&mut self, act: Pragmatic) -> Result<&mut Self> {
        self.require_body("pragma")?;
        self.code(act.code());
        Ok(self)
    }

    /// Emit a modality prefix; exactly one expression must follow.
    ///
    /// PREDICTED and REPORTED carry extra arguments - use
    /// [`UtteranceBuilder::predicted`] / [`UtteranceBuilder::reported`].
    pub fn modality(&mut self, modality: Modality) -> Result<&mut Self> {
        if matches!(modality, Modality::Predicted | Modality::Reported) {
            return Err(WireError::BuilderState {
                state: self.state,
                op: "modality (PREDICTED/REPORTED need their extra argument)",
            });
        }
        self.require_body("modality")?;
        self.code(modality.code());
        Ok(self)
    }

    /// PREDICTED with its horizon in milliseconds (f16 on the wire).
    pub fn predicted(&mut self, horizon_ms: f32) -> Result<&mut Self> {
        self.require_body("predicted")?;
        self.code(Modality::Predicted.code());
        self.out.put_f16(f16::from_f32(horizon_ms));
        Ok(self)
    }

    /// REPORTED with the 16-byte reporter identifier.
    pub fn reported(&mut self, reporter: &[u8; 16]) -> Result<&mut Self> {
        self.require_body("reported")?;
        self.code(Modality::Reported.code());
        self.out.put_uuid(reporter);
        Ok(self)
    }

    /// Emit a temporal modifier prefix; exactly one expression must follow.
    pub fn temporal(&mut self, modifier: Temporal) -> Result<&mut Self> {
        self.require_body("temporal")?;
        self.code(modifier.code());
        Ok(self)
    }

    // ── Structure ──

    /// BEGIN_STRUCT; fields follow, then [`UtteranceBuilder::end_struct`].
    pub fn begin_struct(&mut self) -> Result<&mut Self> {
        self.require_body("begin_struct")?;
        self.code(Structure::BeginStruct.code());
        self.scopes.push(Scope::Struct);
        Ok(self)
    }

    /// END_STRUCT; fails unless the innermost open scope is a struct.
    pub fn end_struct(&mut self) -> Result<&mut Self> {
        self.close_scope(Scope::Struct, "end_struct")?;
        self.code(Structure::EndStruct.code());
        Ok(self)
    }

    /// FIELD_ID with a 16-bit field code; the field value follows.
    pub fn field(&mut self, field_code: u16) -> Result<&mut Self> {
        if self.scopes.last() != Some(&Scope::Struct) {
            return Err(WireError::BuilderState { state: self.state, op: "field" });
        }
        self.code(Structure::FieldId.code());
        self.out.put_u16(field_code);
        Ok(self)
    }

    /// FIELD_SEP between struct fields (ignored by decoders).
    pub fn field_sep(&mut self) -> Result<&mut Self> {
        if self.scopes.last() != Some(&Scope::Struct) {
            return Err(WireError::BuilderState { state: self.state, op: "field_sep" });
        }
        self.code(Structure::FieldSep.code());
        Ok(self)
    }

    /// BEGIN_LIST with the element count; exactly `count` expressions must
    /// follow, then [`UtteranceBuilder::end_list`].
    pub fn begin_list(&mut self, count: u16) -> Result<&mut Self> {
        self.require_body("begin_list")?;
        self.code(Structure::BeginList.code());
        self.out.put_u16(count);
        self.scopes.push(Scope::List);
        Ok(self)
    }

    /// END_LIST; fails unless the innermost open scope is a list.
    pub fn end_list(&mut self) -> Result<&mut Self> {
        self.close_scope(Scope::List, "end_list")?;
        self.code(Structure::EndList.code());
        Ok(self)
    }

    /// BEGIN_MAP with the pair count; `count` key-value expression pairs
    /// must follow, then [`UtteranceBuilder::end_map`].
    pub fn begin_map(&mut self, count: u16) -> Result<&mut Self> {
        self.require_body("begin_map")?;
        self.code(Structure::BeginMap.code());
        self.out.put_u16(count);
        self.scopes.push(Scope::Map);
        Ok(self)
    }

    /// END_MAP; fails unless the innermost open scope is a map.
    pub fn end_map(&mut self) -> Result<&mut Self> {
        self.close_scope(Scope::Map, "end_map")?;
        self.code(Structure::EndMap.code());
        Ok(self)
    }

    // ── Typed literals ──

    /// TYPE_INT8 literal.
    pub fn int8(&mut self, v: i8) -> Result<&mut Self> {
        self.require_body("int8")?;
        self.code(TypeMarker::Int8.code());
        self.out.put_i8(v);
        Ok(self)
    }

    /// TYPE_INT16 literal.
    pub fn int16(&mut self, v: i16) -> Result<&mut Self> {
        self.require_body("int16")?;
        self.code(TypeMarker::Int16.code());
        self.out.put_i16(v);
        Ok(self)
    }

    /// TYPE_INT32 literal.
    pub fn int32(&mut self, v: i32) -> Result<&mut Self> {
        self.require_body("int32")?;
        self.code(TypeMarker::Int32.code());
        self.out.put_i32(v);
        Ok(self)
    }

    /// TYPE_INT64 literal.
    pub fn int64(&mut self, v: i64) -> Result<&mut Self> {
        self.require_body("int64")?;
        self.code(TypeMarker::Int64.code());
        self.out.put_i64(v);
        Ok(self)
    }

    /// TYPE_UINT8 literal.
    pub fn uint8(&mut self, v: u8) -> Result<&mut Self> {
        self.require_body("uint8")?;
        self.code(TypeMarker::Uint8.code());
        self.out.put_u8(v);
        Ok(self)
    }

    /// TYPE_UINT16 literal.
    pub fn uint16(&mut self, v: u16) -> Result<&mut Self> {
        self.require_body("uint16")?;
        self.code(TypeMarker::Uint16.code());
        self.out.put_u16(v);
        Ok(self)
    }

    /// TYPE_UINT32 literal.
    pub fn uint32(&mut self, v: u32) -> Result<&mut Self> {
        self.require_body("uint32")?;
        self.code(TypeMarker::Uint32.code());
        self.out.put_u32(v);
        Ok(self)
    }

    /// TYPE_UINT64 literal.
    pub fn uint64(&mut self, v: u64) -> Result<&mut Self> {
        self.require_body("uint64")?;
        self.code(TypeMarker::Uint64.code());
        self.out.put_u64(v);
        Ok(self)
    }

    /// TYPE_FLOAT16 literal.
    pub fn float16(&mut self, v: f16) -> Result<&mut Self> {
        self.require_body("float16")?;
        self.code(TypeMarker::Float16.code());
        self.out.put_f16(v);
        Ok(self)
    }

    /// TYPE_FLOAT32 literal.
    pub fn float32(&mut self, v: f32) -> Result<&mut Self> {
        self.require_body("float32")?;
        self.code(TypeMarker::Float32.code());
        self.out.put_f32(v);
        Ok(self)
    }

    /// TYPE_FLOAT64 literal.
    pub fn float64(&mut self, v: f64) -> Result<&mut Self> {
        self.require_body("float64")?;
        self.code(TypeMarker::Float64.code());
        self.out.put_f64(v);
        Ok(self)
    }

    /// TYPE_BOOL literal (0x00 / 0x01 payload).
    pub fn boolean(&mut self, v: bool) -> Result<&mut Self> {
        self.require_body("boolean")?;
        self.code(TypeMarker::Bool.code());
        self.out.put_u8(u8::from(v));
        Ok(self)
    }

    /// TYPE_STRING literal (u16 length prefix + UTF-8).
    pub fn string(&mut self, v: &str) -> Result<&mut Self> {
        self.require_body("string")?;
        self.code(TypeMarker::String.code());
        self.out.put_str(v)?;
        Ok(self)
    }

    /// TYPE_BYTES literal (u16 length prefix + opaque bytes).
    pub fn byte_string(&mut self, v: &[u8]) -> Result<&mut Self> {
        self.require_body("byte_string")?;
        self.code(TypeMarker::Bytes.code());
        self.out.put_bytes(v)?;
        Ok(self)
    }

    /// TYPE_TIMESTAMP literal (i64 microseconds).
    pub fn timestamp(&mut self, v: i64) -> Result<&mut Self> {
        self.require_body("timestamp")?;
        self.code(TypeMarker::Timestamp.code());
        self.out.put_i64(v);
        Ok(self)
    }

    /// TYPE_NULL literal (no payload).
    pub fn null(&mut self) -> Result<&mut Self> {
        self.require_body("null")?;
        self.code(TypeMarker::Null.code());
        Ok(self)
    }

    // ── Convenience: typed lists ──

    /// A complete list of FLOAT32 literals.
    pub fn list_of_float32(&mut self, values: &[f32]) -> Result<&mut Self> {
        let count =
            u16::try_from(values.len()).map_err(|_| WireError::Range { value: values.len() as u64 })?;
        self.begin_list(count)?;
        for &v in values {
            self.float32(v)?;
        }
        self.end_list()
    }

    /// A complete list of INT32 literals.
    pub fn list_of_int32(&mut self, values: &[i32]) -> Result<&mut Self> {
        let count =
            u16::try_from(values.len()).map_err(|_| WireError::Range { value: values.len() as u64 })?;
        self.begin_list(count)?;
        for &v in values {
            self.int32(v)?;
        }
        self.end_list()
    }

    // ── Domain and context references ──

    /// ESCAPE_L1 reference into a standard domain codebook.
    pub fn l1_ref(&mut self, code: u16) -> Result<&mut Self> {
        self.require_body("l1_ref")?;
        self.code(Escape::EscapeL1.code());
        self.out.put_u16(code);
        Ok(self)
    }

    /// ESCAPE_L2 reference into the session-negotiated codebook.
    pub fn l2_ref(&mut self, code: u16) -> Result<&mut Self> {
        self.require_body("l2_ref")?;
        self.code(Escape::EscapeL2.code());
        self.out.put_u16(code);
        Ok(self)
    }

    /// ESCAPE_L3 reference into the ephemeral codebook.
    pub fn l3_ref(&mut self, code: u16) -> Result<&mut Self> {
        self.require_body("l3_ref")?;
        self.code(Escape::EscapeL3.code());
        self.out.put_u16(code);
        Ok(self)
    }

    /// CONTEXT_REF into the session context table (varint index).
    pub fn context_ref(&mut self, sct_index: u32) -> Result<&mut Self> {
        self.require_body("context_ref")?;
        self.code(Meta::ContextRef.code());
        self.out.put_varint(sct_index);
        Ok(self)
    }

    // ── Annotations and extensions ──

    /// Inline CONFIDENCE annotation; one expression must follow.
    pub fn confidence_tag(&mut self, confidence: f32) -> Result<&mut Self> {
        self.require_body("confidence_tag")?;
        self.code(Meta::Confidence.code());
        self.out.put_f16(f16::from_f32(confidence));
        Ok(self)
    }

    /// LABEL annotation; one expression must follow.
    pub fn label(&mut self, text: &str) -> Result<&mut Self> {
        self.require_body("label")?;
        self.code(Meta::Label.code());
        self.out.put_str(text)?;
        Ok(self)
    }

    /// EXTENSION proposing a new code. Its binding (a following LABEL plus
    /// definition struct) is registered by the application out-of-band.
    pub fn extension(&mut self, proposed_code: u16) -> Result<&mut Self> {
        self.require_body("extension")?;
        self.code(Escape::Extension.code());
        self.out.put_u16(proposed_code);
        Ok(self)
    }

    /// COMMENT: a string the decoder consumes and discards.
    pub fn comment(&mut self, text: &str) -> Result<&mut Self> {
        self.require_body("comment")?;
        self.code(Escape::Comment.code());
        self.out.put_str(text)?;
        Ok(self)
    }

    /// NOP: a single padding byte yielding nothing on decode.
    pub fn nop(&mut self) -> Result<&mut Self> {
        self.require_body("nop")?;
        self.code(Escape::Nop.code());
        Ok(self)
    }

    /// Emit any raw operator or reserved code as a single byte.
    pub fn op(&mut self, code: u8) -> Result<&mut Self> {
        self.require_body("op")?;
        self.code(code);
        Ok(self)
    }

    // ── Tree-driven emission ──

    /// Emit a whole expression tree.
    ///
    /// Struct fields keyed by [`FieldKey::Code`] are emitted with FIELD_ID;
    /// positional fields are emitted bare. List and map counts come from the
    /// node's declared `count`, preserving trees decoded from truncated
    /// streams.
    pub fn emit_expression(&mut self, expr: &Expression) -> Result<&mut Self> {
        match expr {
            Expression::Literal(value) => self.emit_value(value),
            Expression::Struct { fields } => {
                self.begin_struct()?;
                for (key, value) in fields {
                    if let FieldKey::Code(code) = key {
                        self.field(*code)?;
                    }
                    self.emit_expression(value)?;
                }
                self.end_struct()
            }
            Expression::List { count, elements, .. } => {
                self.begin_list(*count)?;
                for element in elements {
                    self.emit_expression(element)?;
                }
                self.end_list()
            }
            Expression::Map { count, pairs, .. } => {
                self.begin_map(*count)?;
                for (key, value) in pairs {
                    self.emit_expression(key)?;
                    self.emit_expression(value)?;
                }
                self.end_map()
            }
            Expression::Pragmatic { act, inner } => {
                self.pragma(*act)?;
                self.emit_expression(inner)
            }
            Expression::Modal { modality, inner, extra } => {
                match (*modality, extra) {
                    (Modality::Predicted, Some(ModalExtra::Horizon(h))) => {
                        self.require_body("predicted")?;
                        self.code(Modality::Predicted.code());
                        self.out.put_f16(*h);
                    }
                    (Modality::Reported, Some(ModalExtra::Reporter(uuid))) => {
                        self.reported(uuid)?;
                    }
                    (m, None) => {
                        self.modality(m)?;
                    }
                    _ => {
                        return Err(WireError::BuilderState {
                            state: self.state,
                            op: "emit modality with mismatched extra",
                        });
                    }
                }
                self.emit_expression(inner)
            }
            Expression::Temporal { modifier, inner } => {
                self.temporal(*modifier)?;
                self.emit_expression(inner)
            }
            Expression::DomainRef { level, code } => match level {
                1 => self.l1_ref(*code),
                2 => self.l2_ref(*code),
                3 => self.l3_ref(*code),
                _ => Err(WireError::Range { value: u64::from(*level) }),
            },
            Expression::ContextRef { sct_index } => self.context_ref(*sct_index),
            Expression::Annotated { annotation, inner } => {
                match annotation {
                    Annotation::Confidence(c) => {
                        self.require_body("confidence_tag")?;
                        self.code(Meta::Confidence.code());
                        self.out.put_f16(*c);
                    }
                    Annotation::Label(text) => {
                        self.label(text)?;
                    }
                }
                self.emit_expression(inner)
            }
            Expression::Extension { proposed_code } => self.extension(*proposed_code),
            Expression::Opaque { code, .. } => self.op(*code),
        }
    }

    fn emit_value(&mut self, value: &Value) -> Result<&mut Self> {
        match value {
            Value::I8(v) => self.int8(*v),
            Value::I16(v) => self.int16(*v),
            Value::I32(v) => self.int32(*v),
            Value::I64(v) => self.int64(*v),
            Value::U8(v) => self.uint8(*v),
            Value::U16(v) => self.uint16(*v),
            Value::U32(v) => self.uint32(*v),
            Value::U64(v) => self.uint64(*v),
            Value::F16(v) => self.float16(*v),
            Value::F32(v) => self.float32(*v),
            Value::F64(v) => self.float64(*v),
            Value::Bool(v) => self.boolean(*v),
            Value::Str(v) => self.string(v),
            Value::Bytes(v) => self.byte_string(v),
            Value::Timestamp(v) => self.timestamp(*v),
            Value::Null => self.null(),
        }
    }
}

/// Encode a complete [`Utterance`] tree to wire bytes.
///
/// Optional meta annotations are emitted in the canonical order: dest,
/// source, seqnum, trace id, ttl, topic, version tag.
pub fn encode_utterance(utterance: &Utterance) -> Result<Bytes> {
    let meta = &utterance.meta;
    let mut builder = UtteranceBuilder::new();
    builder.start_utterance(
        meta.confidence.to_f32(),
        meta.priority,
        Some(meta.timestamp_us),
    )?;
    if let Some(uuid) = &meta.dest_agent {
        builder.dest_agent(uuid)?;
    }
    if let Some(uuid) = &meta.source_agent {
        builder.source_agent(uuid)?;
    }
    if let Some(seqnum) = meta.seqnum {
        builder.seqnum(seqnum)?;
    }
    if let Some(trace_id) = meta.trace_id {
        builder.trace_id(trace_id)?;
    }
    if let Some(ttl) = meta.ttl {
        builder.ttl(ttl)?;
    }
    if let Some(topic) = meta.topic {
        builder.topic(topic)?;
    }
    if let Some((major, minor)) = meta.version_tag {
        builder.version_tag(major, minor)?;
    }
    for expr in &utterance.body {
        builder.emit_expression(expr)?;
    }
    builder.end_utterance()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_before_start_is_rejected() {
        let mut b = UtteranceBuilder::new();
        assert_eq!(
            b.int32(1).unwrap_err(),
            WireError::BuilderState { state: BuilderState::Idle, op: "int32" }
        );
    }

    #[test]
    fn end_without_start_is_rejected() {
        let mut b = UtteranceBuilder::new();
        assert!(matches!(
            b.end_utterance(),
            Err(WireError::BuilderState { state: BuilderState::Idle, .. })
        ));
    }

    #[test]
    fn meta_annotation_after_body_is_rejected() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.pragma(Pragmatic::Assert).unwrap();
        b.int32(1).unwrap();
        assert!(matches!(
            b.seqnum(7),
            Err(WireError::BuilderState { state: BuilderState::Body, .. })
        ));
    }

    #[test]
    fn mismatched_closer_is_rejected() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.begin_list(1).unwrap();
        assert!(b.end_struct().is_err());
        // The list is still open, so the utterance cannot end either.
        assert!(b.end_utterance().is_err());
    }

    #[test]
    fn bare_predicted_is_rejected() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        assert!(b.modality(Modality::Predicted).is_err());
        assert!(b.predicted(500.0).is_ok());
    }

    #[test]
    fn abort_resets_state() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.begin_struct().unwrap();
        b.abort().unwrap();
        assert_eq!(b.state(), BuilderState::Idle);
        // A new utterance can start; the ABORT byte stays in the stream.
        assert!(b.start_utterance(1.0, 3, Some(0)).is_ok());
    }

    #[test]
    fn default_timestamp_is_wall_clock() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, None).unwrap();
        let wire = b.end_utterance().unwrap();
        // START + CONFIDENCE(3) + PRIORITY(2) + TIMESTAMP(9) + END
        assert_eq!(wire.len(), 16);
        let ts = i64::from_be_bytes([
            wire[7], wire[8], wire[9], wire[10], wire[11], wire[12], wire[13], wire[14],
        ]);
        assert!(ts > 1_600_000_000_000_000, "timestamp not wall-clock: {ts}");
    }
}
