/*!
Key format records for the supported AEAD algorithm families.

Each record mirrors the key format message the consuming key-management
system expects for its type URL, and serializes to the exact proto3 wire
bytes. No bounds checking happens here: sizes are encoded as given, and
judging whether a parameter choice is acceptable is left to the
key-generation layer that consumes the template.
*/

use bytes::BytesMut;

use crate::error::{Result, encoding_err, format_err};
use crate::wire::{self, FieldReader};

/// Hash algorithms supported by the HMAC half of AES-CTR-HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// Reserved wire value 0; never valid in a template
    UnknownHash,
    /// SHA-1
    Sha1,
    /// SHA-384
    Sha384,
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
    /// SHA-224
    Sha224,
}

impl Default for HashType {
    fn default() -> Self {
        HashType::UnknownHash
    }
}

impl HashType {
    /// Convert a wire value to a HashType
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            0 => Some(HashType::UnknownHash),
            1 => Some(HashType::Sha1),
            2 => Some(HashType::Sha384),
            3 => Some(HashType::Sha256),
            4 => Some(HashType::Sha512),
            5 => Some(HashType::Sha224),
            _ => None,
        }
    }

    /// Get the declared wire value of this HashType
    pub fn wire_value(&self) -> i32 {
        match self {
            HashType::UnknownHash => 0,
            HashType::Sha1 => 1,
            HashType::Sha384 => 2,
            HashType::Sha256 => 3,
            HashType::Sha512 => 4,
            HashType::Sha224 => 5,
        }
    }

    /// Get the name of the hash algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashType::UnknownHash => "UNKNOWN",
            HashType::Sha1 => "SHA-1",
            HashType::Sha384 => "SHA-384",
            HashType::Sha256 => "SHA-256",
            HashType::Sha512 => "SHA-512",
            HashType::Sha224 => "SHA-224",
        }
    }
}

/// Parameters for AES-EAX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesEaxParams {
    /// Nonce size in bytes
    pub iv_size: u32,
}

impl AesEaxParams {
    fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::new();
        wire::put_uint32(&mut buf, 1, self.iv_size);
        buf
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut params = AesEaxParams::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            if field == 1 {
                params.iv_size = value.uint32()?;
            }
        }
        Ok(params)
    }
}

/// Key format for AES-EAX keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesEaxKeyFormat {
    /// Algorithm parameters
    pub params: AesEaxParams,
    /// Key size in bytes
    pub key_size: u32,
}

impl AesEaxKeyFormat {
    /// Create a new AES-EAX key format
    pub fn new(key_size: u32, iv_size: u32) -> Self {
        Self {
            params: AesEaxParams { iv_size },
            key_size,
        }
    }

    /// Serialize the record to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::new();
        wire::put_message(&mut buf, 1, &self.params.encode());
        wire::put_uint32(&mut buf, 2, self.key_size);
        buf.to_vec()
    }

    /// Parse a record from wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut format = AesEaxKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            match field {
                1 => format.params = AesEaxParams::decode(value.bytes()?)?,
                2 => format.key_size = value.uint32()?,
                _ => {}
            }
        }
        Ok(format)
    }
}

/// Key format for AES-GCM keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesGcmKeyFormat {
    /// Key size in bytes
    pub key_size: u32,
}

impl AesGcmKeyFormat {
    /// Create a new AES-GCM key format
    pub fn new(key_size: u32) -> Self {
        Self { key_size }
    }

    /// Serialize the record to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::new();
        // key_size is field 2; field 1 is retired in the published schema
        wire::put_uint32(&mut buf, 2, self.key_size);
        buf.to_vec()
    }

    /// Parse a record from wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut format = AesGcmKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            if field == 2 {
                format.key_size = value.uint32()?;
            }
        }
        Ok(format)
    }
}

/// Key format for AES-GCM-SIV keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesGcmSivKeyFormat {
    /// Key size in bytes
    pub key_size: u32,
}

impl AesGcmSivKeyFormat {
    /// Create a new AES-GCM-SIV key format
    pub fn new(key_size: u32) -> Self {
        Self { key_size }
    }

    /// Serialize the record to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::new();
        wire::put_uint32(&mut buf, 1, self.key_size);
        buf.to_vec()
    }

    /// Parse a record from wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut format = AesGcmSivKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            if field == 1 {
                format.key_size = value.uint32()?;
            }
        }
        Ok(format)
    }
}

/// Parameters for the AES-CTR half of AES-CTR-HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesCtrParams {
    /// Counter IV size in bytes
    pub iv_size: u32,
}

impl AesCtrParams {
    fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::new();
        wire::put_uint32(&mut buf, 1, self.iv_size);
        buf
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut params = AesCtrParams::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            if field == 1 {
                params.iv_size = value.uint32()?;
            }
        }
        Ok(params)
    }
}

/// Key format for the AES-CTR half of AES-CTR-HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesCtrKeyFormat {
    /// Algorithm parameters
    pub params: AesCtrParams,
    /// Key size in bytes
    pub key_size: u32,
}

impl AesCtrKeyFormat {
    fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::new();
        wire::put_message(&mut buf, 1, &self.params.encode());
        wire::put_uint32(&mut buf, 2, self.key_size);
        buf
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut format = AesCtrKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            match field {
                1 => format.params = AesCtrParams::decode(value.bytes()?)?,
                2 => format.key_size = value.uint32()?,
                _ => {}
            }
        }
        Ok(format)
    }
}

/// Parameters for the HMAC half of AES-CTR-HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HmacParams {
    /// Hash algorithm
    pub hash: HashType,
    /// Authentication tag size in bytes
    pub tag_size: u32,
}

impl HmacParams {
    fn encode(&self) -> Result<BytesMut> {
        if self.hash == HashType::UnknownHash {
            return encoding_err("hash type is not set");
        }
        let mut buf = BytesMut::new();
        wire::put_enum(&mut buf, 1, self.hash.wire_value());
        wire::put_uint32(&mut buf, 2, self.tag_size);
        Ok(buf)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut params = HmacParams::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            match field {
                1 => {
                    let raw = value.enum_value()?;
                    params.hash = match HashType::from_wire(raw) {
                        Some(hash) => hash,
                        None => return format_err(format!("unknown hash type: {}", raw)),
                    };
                }
                2 => params.tag_size = value.uint32()?,
                _ => {}
            }
        }
        Ok(params)
    }
}

/// Key format for the HMAC half of AES-CTR-HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HmacKeyFormat {
    /// Algorithm parameters
    pub params: HmacParams,
    /// Key size in bytes
    pub key_size: u32,
    /// Key format version
    pub version: u32,
}

impl HmacKeyFormat {
    fn encode(&self) -> Result<BytesMut> {
        let mut buf = BytesMut::new();
        wire::put_message(&mut buf, 1, &self.params.encode()?);
        wire::put_uint32(&mut buf, 2, self.key_size);
        wire::put_uint32(&mut buf, 3, self.version);
        Ok(buf)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut format = HmacKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            match field {
                1 => format.params = HmacParams::decode(value.bytes()?)?,
                2 => format.key_size = value.uint32()?,
                3 => format.version = value.uint32()?,
                _ => {}
            }
        }
        Ok(format)
    }
}

/// Key format for AES-CTR-HMAC AEAD keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AesCtrHmacAeadKeyFormat {
    /// Key format of the AES-CTR half
    pub aes_ctr_key_format: AesCtrKeyFormat,
    /// Key format of the HMAC half
    pub hmac_key_format: HmacKeyFormat,
}

impl AesCtrHmacAeadKeyFormat {
    /// Create a new AES-CTR-HMAC key format
    pub fn new(
        aes_key_size: u32,
        iv_size: u32,
        hmac_key_size: u32,
        tag_size: u32,
        hash: HashType,
    ) -> Self {
        Self {
            aes_ctr_key_format: AesCtrKeyFormat {
                params: AesCtrParams { iv_size },
                key_size: aes_key_size,
            },
            hmac_key_format: HmacKeyFormat {
                params: HmacParams { hash, tag_size },
                key_size: hmac_key_size,
                version: 0,
            },
        }
    }

    /// Serialize the record to wire bytes
    ///
    /// Fails with an encoding error if the hash type is `UnknownHash`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::new();
        wire::put_message(&mut buf, 1, &self.aes_ctr_key_format.encode());
        wire::put_message(&mut buf, 2, &self.hmac_key_format.encode()?);
        Ok(buf.to_vec())
    }

    /// Parse a record from wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut format = AesCtrHmacAeadKeyFormat::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, value)) = reader.next_field()? {
            match field {
                1 => format.aes_ctr_key_format = AesCtrKeyFormat::decode(value.bytes()?)?,
                2 => format.hmac_key_format = HmacKeyFormat::decode(value.bytes()?)?,
                _ => {}
            }
        }
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eax_format_encoding() {
        let format = AesEaxKeyFormat::new(16, 16);
        assert_eq!(format.to_bytes(), vec![0x0A, 0x02, 0x08, 0x10, 0x10, 0x10]);
    }

    #[test]
    fn test_gcm_format_encoding() {
        assert_eq!(AesGcmKeyFormat::new(16).to_bytes(), vec![0x10, 0x10]);
        assert_eq!(AesGcmKeyFormat::new(32).to_bytes(), vec![0x10, 0x20]);
    }

    #[test]
    fn test_gcm_siv_format_encoding() {
        assert_eq!(AesGcmSivKeyFormat::new(16).to_bytes(), vec![0x08, 0x10]);
    }

    #[test]
    fn test_ctr_hmac_format_encoding() {
        let format = AesCtrHmacAeadKeyFormat::new(16, 16, 32, 16, HashType::Sha256);
        let expected = vec![
            0x0A, 0x06, 0x0A, 0x02, 0x08, 0x10, 0x10, 0x10, // aes_ctr_key_format
            0x12, 0x08, 0x0A, 0x04, 0x08, 0x03, 0x10, 0x10, 0x10, 0x20, // hmac_key_format
        ];
        assert_eq!(format.to_bytes().unwrap(), expected);
    }

    #[test]
    fn test_zero_sizes_encode_as_given() {
        // Size fields are not validated here; zero simply encodes as absent
        let format = AesEaxKeyFormat::new(0, 0);
        assert_eq!(format.to_bytes(), vec![0x0A, 0x00]);
        let parsed = AesEaxKeyFormat::from_bytes(&format.to_bytes()).unwrap();
        assert_eq!(parsed, format);
    }

    #[test]
    fn test_eax_format_roundtrip() {
        let format = AesEaxKeyFormat::new(32, 12);
        let bytes = format.to_bytes();
        let parsed = AesEaxKeyFormat::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, format);
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_ctr_hmac_format_roundtrip() {
        let format = AesCtrHmacAeadKeyFormat::new(32, 16, 32, 32, HashType::Sha512);
        let bytes = format.to_bytes().unwrap();
        let parsed = AesCtrHmacAeadKeyFormat::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, format);
        assert_eq!(parsed.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_unknown_hash_rejected() {
        let format = AesCtrHmacAeadKeyFormat::new(16, 16, 32, 16, HashType::UnknownHash);
        assert!(format.to_bytes().is_err());
    }

    #[test]
    fn test_unknown_hash_wire_value_rejected_on_decode() {
        // HmacParams with hash = 9, outside the declared enum domain
        let bytes = [0x0A, 0x06, 0x0A, 0x02, 0x08, 0x10, 0x10, 0x10, 0x12, 0x04, 0x0A, 0x02, 0x08, 0x09];
        assert!(AesCtrHmacAeadKeyFormat::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_hash_type_wire_values() {
        for value in 0..=5u64 {
            let hash = HashType::from_wire(value).unwrap();
            assert_eq!(hash.wire_value() as u64, value);
        }
        assert_eq!(HashType::from_wire(6), None);
    }
}
