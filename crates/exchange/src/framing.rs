//! Length-prefixed framing
//!
//! Each message is a 4-byte big-endian length followed by exactly that many
//! payload bytes. A frame is written with a single `write_all` and read
//! header first.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use dhec_api::{Error, Result};
use dhec_params::{FRAME_HEADER_LEN, MAX_FRAME_LEN};
use std::io::{self, Read, Write};

/// Write one frame carrying `payload`.
pub fn write_frame<W: Write + ?Sized>(writer: &mut W, payload: &[u8]) -> Result<()> {
    if payload.len() > MAX_FRAME_LEN {
        return Err(Error::serialization(
            "frame encoding",
            format!("payload of {} bytes exceeds the {} byte limit", payload.len(), MAX_FRAME_LEN),
        ));
    }

    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
    frame
        .write_u32::<BigEndian>(payload.len() as u32)
        .map_err(|e| Error::transport("frame encoding", e))?;
    frame.extend_from_slice(payload);

    writer
        .write_all(&frame)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::transport("frame write", e))
}

/// Read one frame, rejecting payloads above the default limit.
pub fn read_frame<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>> {
    read_frame_limited(reader, MAX_FRAME_LEN)
}

/// Read one frame, rejecting payloads longer than `max_len` before
/// allocating for them.
///
/// A stream that ends inside the header or the payload yields
/// `SerializationFailure`; any other I/O error is a `TransportFailure`.
pub fn read_frame_limited<R: Read + ?Sized>(reader: &mut R, max_len: usize) -> Result<Vec<u8>> {
    let len = reader.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            Error::serialization("frame read", "truncated frame header")
        }
        _ => Error::transport("frame read", e),
    })? as usize;

    if len > max_len {
        return Err(Error::serialization(
            "frame read",
            format!("declared length {} exceeds the {} byte limit", len, max_len),
        ));
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::serialization(
            "frame read",
            format!("truncated frame: expected {} payload bytes", len),
        ),
        _ => Error::transport("frame read", e),
    })?;

    Ok(payload)
}
