/*!
Minimal protobuf wire-format support for key format encoding.

Only the pieces the key format schemas use are implemented: base-128
varints, varint-typed scalar fields and length-delimited fields. Writers
emit fields in ascending field-number order and omit zero-valued scalars,
so the output is byte-identical to canonical proto3 serialization of the
same record.
*/

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, format_err};

/// Wire type for varint-encoded scalar fields
const WIRE_VARINT: u64 = 0;

/// Wire type for length-delimited fields (strings, bytes, sub-messages)
const WIRE_LEN: u64 = 2;

/// Append a base-128 varint
pub(crate) fn put_varint(buf: &mut BytesMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

fn put_tag(buf: &mut BytesMut, field: u32, wire_type: u64) {
    put_varint(buf, (u64::from(field) << 3) | wire_type);
}

/// Append a `uint32` field; zero values are omitted
pub(crate) fn put_uint32(buf: &mut BytesMut, field: u32, value: u32) {
    if value != 0 {
        put_tag(buf, field, WIRE_VARINT);
        put_varint(buf, u64::from(value));
    }
}

/// Append an enum field by its declared wire value; zero is omitted
pub(crate) fn put_enum(buf: &mut BytesMut, field: u32, value: i32) {
    if value != 0 {
        put_tag(buf, field, WIRE_VARINT);
        put_varint(buf, i64::from(value) as u64);
    }
}

/// Append a UTF-8 string field; empty strings are omitted
pub(crate) fn put_string(buf: &mut BytesMut, field: u32, value: &str) {
    put_bytes(buf, field, value.as_bytes());
}

/// Append a bytes field; empty values are omitted
pub(crate) fn put_bytes(buf: &mut BytesMut, field: u32, value: &[u8]) {
    if !value.is_empty() {
        put_tag(buf, field, WIRE_LEN);
        put_varint(buf, value.len() as u64);
        buf.put_slice(value);
    }
}

/// Append a sub-message field. Sub-messages carry explicit presence, so an
/// empty body is still written with length zero.
pub(crate) fn put_message(buf: &mut BytesMut, field: u32, body: &[u8]) {
    put_tag(buf, field, WIRE_LEN);
    put_varint(buf, body.len() as u64);
    buf.put_slice(body);
}

/// A single decoded field value
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldValue<'a> {
    /// Varint-typed scalar (uint32, enum)
    Varint(u64),
    /// Length-delimited payload (string, bytes, sub-message)
    LengthDelimited(&'a [u8]),
}

impl<'a> FieldValue<'a> {
    /// Interpret the field as a `uint32`
    pub(crate) fn uint32(self) -> Result<u32> {
        match self {
            FieldValue::Varint(v) => {
                u32::try_from(v).or_else(|_| format_err("uint32 value out of range"))
            }
            FieldValue::LengthDelimited(_) => format_err("expected varint field"),
        }
    }

    /// Interpret the field as an enum wire value
    pub(crate) fn enum_value(self) -> Result<u64> {
        match self {
            FieldValue::Varint(v) => Ok(v),
            FieldValue::LengthDelimited(_) => format_err("expected varint field"),
        }
    }

    /// Interpret the field as a length-delimited payload
    pub(crate) fn bytes(self) -> Result<&'a [u8]> {
        match self {
            FieldValue::Varint(_) => format_err("expected length-delimited field"),
            FieldValue::LengthDelimited(b) => Ok(b),
        }
    }
}

/// Streaming reader over an encoded record's fields
pub(crate) struct FieldReader<'a> {
    buf: &'a [u8],
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            if self.buf.is_empty() {
                return format_err("truncated varint");
            }
            if shift >= 64 {
                return format_err("varint overflow");
            }
            let byte = self.buf.get_u8();
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    /// Read the next (field number, value) pair, or `None` at end of input
    pub(crate) fn next_field(&mut self) -> Result<Option<(u32, FieldValue<'a>)>> {
        if self.buf.is_empty() {
            return Ok(None);
        }
        let tag = self.read_varint()?;
        let field = (tag >> 3) as u32;
        if field == 0 {
            return format_err("field number zero");
        }
        match tag & 0x7 {
            WIRE_VARINT => Ok(Some((field, FieldValue::Varint(self.read_varint()?)))),
            WIRE_LEN => {
                let len = self.read_varint()? as usize;
                if self.buf.len() < len {
                    return format_err("truncated length-delimited field");
                }
                let (head, tail) = self.buf.split_at(len);
                self.buf = tail;
                Ok(Some((field, FieldValue::LengthDelimited(head))))
            }
            other => format_err(format!("unsupported wire type: {}", other)),
        }
    }
}
