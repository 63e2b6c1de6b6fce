//! Epoch framing: the transport-layer unit of integrity and retransmission.
//!
//! Wire layout:
//!
//! ```text
//! [u16 seq][u16 len <= 8192][payload: len bytes][u8 crc]
//! ```
//!
//! The CRC-8 covers the first `4 + len` bytes (header plus payload). A CRC
//! mismatch on decode is NOT an error - it is the `crc_ok` flag on
//! [`DecodedEpoch`], so the caller can apply its retransmission policy
//! (NACK_EPOCH) instead of aborting.
//!
//! Sequence numbers wrap at 65536. Senders must keep at most 32768
//! unacknowledged epochs outstanding so the wrap stays unambiguous.

use bytes::Bytes;

use crate::{
    crc::crc8,
    errors::{Result, WireError},
    stream::ByteWriter,
};

/// Maximum payload bytes per epoch.
pub const MAX_EPOCH_PAYLOAD: usize = 8192;

/// seq(2) + len(2) + crc(1): the size of a zero-payload epoch.
const EPOCH_OVERHEAD: usize = 5;

/// A decoded epoch with its CRC verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEpoch {
    /// Sequence number (wrapping u16).
    pub seq: u16,
    /// The payload bytes as framed.
    pub payload: Bytes,
    /// True when the received CRC matches the payload.
    pub crc_ok: bool,
}

/// Write-side framer: partitions a byte stream into CRC-protected epochs.
///
/// Owned by a single producer. Finished epochs queue internally until
/// drained with [`EpochFramer::into_frames`] or [`EpochFramer::drain`].
#[derive(Debug, Default)]
pub struct EpochFramer {
    seq: u16,
    payload: Vec<u8>,
    frames: Vec<Bytes>,
}

impl EpochFramer {
    /// A framer starting at sequence number 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next sequence number to be assigned.
    #[must_use]
    pub fn next_seq(&self) -> u16 {
        self.seq
    }

    /// Number of epochs pending, counting the open payload if non-empty.
    #[must_use]
    pub fn epoch_count(&self) -> usize {
        self.frames.len() + usize::from(!self.payload.is_empty())
    }

    /// Append bytes to the current epoch payload.
    ///
    /// When appending would exceed [`MAX_EPOCH_PAYLOAD`], the current
    /// payload is flushed first; writes larger than one epoch are chunked
    /// across as many epochs as needed.
    pub fn write(&mut self, mut data: &[u8]) {
        if self.payload.len() + data.len() > MAX_EPOCH_PAYLOAD && !self.payload.is_empty() {
            self.flush();
        }
        while data.len() > MAX_EPOCH_PAYLOAD {
            let (chunk, rest) = data.split_at(MAX_EPOCH_PAYLOAD);
            self.payload.extend_from_slice(chunk);
            self.flush();
            data = rest;
        }
        self.payload.extend_from_slice(data);
    }

    /// Finalize the current payload into a framed epoch.
    ///
    /// No-op when the payload is empty. The sequence number increments
    /// (wrapping) after each flushed epoch.
    pub fn flush(&mut self) {
        if self.payload.is_empty() {
            return;
        }
        let payload = std::mem::take(&mut self.payload);
        self.frames.push(frame_epoch(self.seq, &payload));
        self.seq = self.seq.wrapping_add(1);
    }

    /// Flush and drain all queued epochs.
    pub fn drain(&mut self) -> Vec<Bytes> {
        self.flush();
        std::mem::take(&mut self.frames)
    }

    /// Flush and consume the framer, returning all epochs.
    #[must_use]
    pub fn into_frames(mut self) -> Vec<Bytes> {
        self.drain()
    }
}

/// Frame a single payload into epoch wire bytes.
///
/// The payload length is known to fit: callers bound it by
/// [`MAX_EPOCH_PAYLOAD`].
fn frame_epoch(seq: u16, payload: &[u8]) -> Bytes {
    let mut w = ByteWriter::new();
    w.put_u16(seq);
    w.put_u16(payload.len() as u16);
    w.put_raw(payload);
    let crc = crc8(w.as_slice());
    w.put_u8(crc);
    w.into_bytes()
}

/// Encode one epoch directly from a payload.
///
/// # Errors
///
/// - `WireError::Range` if the payload exceeds [`MAX_EPOCH_PAYLOAD`]
pub fn encode_epoch(seq: u16, payload: &[u8]) -> Result<Bytes> {
    if payload.len() > MAX_EPOCH_PAYLOAD {
        return Err(WireError::Range { value: payload.len() as u64 });
    }
    Ok(frame_epoch(seq, payload))
}

/// Decode one epoch starting at `offset` in `buf`.
///
/// Returns the decoded epoch and the number of bytes consumed. A CRC
/// mismatch is reported through [`DecodedEpoch::crc_ok`], never as an
/// error.
///
/// # Errors
///
/// - `WireError::Truncated` when fewer than 5 bytes remain or the declared
///   length overruns the buffer
/// - `WireError::Range` when the declared length exceeds
///   [`MAX_EPOCH_PAYLOAD`]
pub fn decode_epoch(buf: &[u8], offset: usize) -> Result<(DecodedEpoch, usize)> {
    let remaining = buf.len().saturating_sub(offset);
    if remaining < EPOCH_OVERHEAD {
        return Err(WireError::Truncated {
            offset,
            needed: EPOCH_OVERHEAD - remaining,
        });
    }

    let seq = u16::from_be_bytes([buf[offset], buf[offset + 1]]);
    let len = usize::from(u16::from_be_bytes([buf[offset + 2], buf[offset + 3]]));
    if len > MAX_EPOCH_PAYLOAD {
        return Err(WireError::Range { value: len as u64 });
    }

    let total = EPOCH_OVERHEAD + len;
    if remaining < total {
        return Err(WireError::Truncated { offset, needed: total - remaining });
    }

    let covered = &buf[offset..offset + 4 + len];
    let received_crc = buf[offset + 4 + len];
    let payload = Bytes::copy_from_slice(&buf[offset + 4..offset + 4 + len]);

    Ok((
        DecodedEpoch {
            seq,
            payload,
            crc_ok: crc8(covered) == received_crc,
        },
        total,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_epoch_round_trip() {
        let mut framer = EpochFramer::new();
        framer.write(b"Hello AILL");
        let frames = framer.into_frames();
        assert_eq!(frames.len(), 1);

        let (decoded, consumed) = decode_epoch(&frames[0], 0).unwrap();
        assert_eq!(consumed, frames[0].len());
        assert_eq!(decoded.seq, 0);
        assert_eq!(&decoded.payload[..], b"Hello AILL");
        assert!(decoded.crc_ok);
    }

    #[test]
    fn corruption_flips_crc_verdict() {
        let mut framer = EpochFramer::new();
        framer.write(b"test data");
        let frames = framer.into_frames();

        let mut corrupted = frames[0].to_vec();
        corrupted[5] ^= 0xFF;
        let (decoded, _) = decode_epoch(&corrupted, 0).unwrap();
        assert!(!decoded.crc_ok);
    }

    #[test]
    fn sequence_increments_per_flush() {
        let mut framer = EpochFramer::new();
        framer.write(b"one");
        framer.flush();
        framer.write(b"two");
        framer.flush();
        let frames = framer.drain();
        assert_eq!(frames.len(), 2);
        assert_eq!(decode_epoch(&frames[0], 0).unwrap().0.seq, 0);
        assert_eq!(decode_epoch(&frames[1], 0).unwrap().0.seq, 1);
    }

    #[test]
    fn oversized_write_is_chunked() {
        let mut framer = EpochFramer::new();
        framer.write(&vec![0xAB; MAX_EPOCH_PAYLOAD * 2 + 100]);
        let frames = framer.into_frames();
        assert_eq!(frames.len(), 3);
        for frame in &frames[..2] {
            let (decoded, _) = decode_epoch(frame, 0).unwrap();
            assert_eq!(decoded.payload.len(), MAX_EPOCH_PAYLOAD);
            assert!(decoded.crc_ok);
        }
        let (tail, _) = decode_epoch(&frames[2], 0).unwrap();
        assert_eq!(tail.payload.len(), 100);
    }

    #[test]
    fn write_flushes_before_overflowing() {
        let mut framer = EpochFramer::new();
        framer.write(&[0x01; 8000]);
        framer.write(&[0x02; 400]);
        let frames = framer.into_frames();
        assert_eq!(frames.len(), 2);
        let (first, _) = decode_epoch(&frames[0], 0).unwrap();
        let (second, _) = decode_epoch(&frames[1], 0).unwrap();
        assert_eq!(first.payload.len(), 8000);
        assert_eq!(second.payload.len(), 400);
    }

    #[test]
    fn payload_size_boundaries() {
        for size in [0usize, 1, MAX_EPOCH_PAYLOAD] {
            let payload = vec![0x5A; size];
            let frame = encode_epoch(42, &payload).unwrap();
            let (decoded, consumed) = decode_epoch(&frame, 0).unwrap();
            assert_eq!(consumed, size + EPOCH_OVERHEAD);
            assert_eq!(decoded.seq, 42);
            assert_eq!(decoded.payload.len(), size);
            assert!(decoded.crc_ok);
        }
        assert!(matches!(
            encode_epoch(0, &vec![0; MAX_EPOCH_PAYLOAD + 1]),
            Err(WireError::Range { .. })
        ));
    }

    #[test]
    fn truncated_epochs_are_rejected() {
        assert_eq!(
            decode_epoch(&[0x00], 0),
            Err(WireError::Truncated { offset: 0, needed: 4 })
        );

        // Header claims 100 payload bytes; none follow.
        let header = [0x00, 0x01, 0x00, 0x64, 0xAA];
        assert_eq!(
            decode_epoch(&header, 0),
            Err(WireError::Truncated { offset: 0, needed: 100 })
        );
    }

    #[test]
    fn sequence_wraps() {
        let mut framer = EpochFramer::new();
        framer.seq = u16::MAX;
        framer.write(b"wrap");
        framer.flush();
        assert_eq!(framer.next_seq(), 0);
    }

    #[test]
    fn consecutive_epochs_decode_from_one_buffer() {
        let mut framer = EpochFramer::new();
        framer.write(b"first");
        framer.flush();
        framer.write(b"second");
        let frames = framer.into_frames();
        let stream: Vec<u8> = frames.iter().flat_map(|f| f.to_vec()).collect();

        let (first, consumed) = decode_epoch(&stream, 0).unwrap();
        let (second, _) = decode_epoch(&stream, consumed).unwrap();
        assert_eq!(&first.payload[..], b"first");
        assert_eq!(&second.payload[..], b"second");
        assert_eq!(second.seq, 1);
    }
}
