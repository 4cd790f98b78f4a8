/*!
Key template assembly.

A template pairs a type URL with the encoded key format record for that
URL and an output prefix type. The pairing is fixed by the constructors
below; a URL is never combined with a record belonging to a different
algorithm family.
*/

use bytes::BytesMut;

use crate::constants::{
    AES_CTR_HMAC_AEAD_TYPE_URL, AES_EAX_TYPE_URL, AES_GCM_SIV_TYPE_URL, AES_GCM_TYPE_URL,
    XCHACHA20_POLY1305_TYPE_URL,
};
use crate::error::{Result, format_err, template_err};
use crate::format::{
    AesCtrHmacAeadKeyFormat, AesEaxKeyFormat, AesGcmKeyFormat, AesGcmSivKeyFormat, HashType,
};
use crate::wire::{self, FieldReader};

/// How ciphertext and key-identifier bytes are prefixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPrefixType {
    /// Reserved wire value 0
    UnknownPrefix,
    /// 5-byte prefix: format marker plus big-endian key id
    Tink,
    /// Legacy 5-byte prefix
    Legacy,
    /// No prefix
    Raw,
    /// Crunchy-compatible 5-byte prefix
    Crunchy,
}

impl Default for OutputPrefixType {
    fn default() -> Self {
        OutputPrefixType::UnknownPrefix
    }
}

impl OutputPrefixType {
    /// Convert a wire value to an OutputPrefixType
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            0 => Some(OutputPrefixType::UnknownPrefix),
            1 => Some(OutputPrefixType::Tink),
            2 => Some(OutputPrefixType::Legacy),
            3 => Some(OutputPrefixType::Raw),
            4 => Some(OutputPrefixType::Crunchy),
            _ => None,
        }
    }

    /// Get the declared wire value of this OutputPrefixType
    pub fn wire_value(&self) -> i32 {
        match self {
            OutputPrefixType::UnknownPrefix => 0,
            OutputPrefixType::Tink => 1,
            OutputPrefixType::Legacy => 2,
            OutputPrefixType::Raw => 3,
            OutputPrefixType::Crunchy => 4,
        }
    }
}

/// An immutable descriptor for generating a new key
///
/// The consuming key-management system resolves `type_url` to a key
/// implementation, parses `value` into that implementation's key format,
/// and uses `output_prefix_type` to decide how ciphertexts are tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTemplate {
    /// Type URL identifying the key implementation
    pub type_url: String,
    /// Encoded key format record; empty for parameterless algorithms
    pub value: Vec<u8>,
    /// Ciphertext tagging mode
    pub output_prefix_type: OutputPrefixType,
}

impl KeyTemplate {
    /// Assemble a template from a type URL, an encoded key format record
    /// and an output prefix type
    ///
    /// The type URL must be non-empty; nothing else is checked.
    pub fn assemble(
        type_url: &str,
        value: Vec<u8>,
        output_prefix_type: OutputPrefixType,
    ) -> Result<Self> {
        if type_url.is_empty() {
            return template_err("type URL must not be empty");
        }
        Ok(Self {
            type_url: type_url.to_string(),
            value,
            output_prefix_type,
        })
    }

    /// Serialize the template to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::new();
        wire::put_string(&mut buf, 1, &self.type_url);
        wire::put_bytes(&mut buf, 2, &self.value);
        wire::put_enum(&mut buf, 3, self.output_prefix_type.wire_value());
        buf.to_vec()
    }

    /// Parse a template from wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut type_url = String::new();
        let mut value = Vec::new();
        let mut output_prefix_type = OutputPrefixType::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, field_value)) = reader.next_field()? {
            match field {
                1 => {
                    type_url = match std::str::from_utf8(field_value.bytes()?) {
                        Ok(s) => s.to_string(),
                        Err(_) => return format_err("type URL is not valid UTF-8"),
                    };
                }
                2 => value = field_value.bytes()?.to_vec(),
                3 => {
                    let raw = field_value.enum_value()?;
                    output_prefix_type = match OutputPrefixType::from_wire(raw) {
                        Some(prefix) => prefix,
                        None => return format_err(format!("unknown output prefix type: {}", raw)),
                    };
                }
                _ => {}
            }
        }
        Ok(Self {
            type_url,
            value,
            output_prefix_type,
        })
    }
}

/// Create an AES-EAX key template with the given key and nonce sizes in bytes
pub fn create_aes_eax_key_template(key_size: u32, iv_size: u32) -> Result<KeyTemplate> {
    let format = AesEaxKeyFormat::new(key_size, iv_size);
    KeyTemplate::assemble(AES_EAX_TYPE_URL, format.to_bytes(), OutputPrefixType::Tink)
}

/// Create an AES-GCM key template with the given key size in bytes
pub fn create_aes_gcm_key_template(key_size: u32) -> Result<KeyTemplate> {
    let format = AesGcmKeyFormat::new(key_size);
    KeyTemplate::assemble(AES_GCM_TYPE_URL, format.to_bytes(), OutputPrefixType::Tink)
}

/// Create an AES-GCM-SIV key template with the given key size in bytes
pub fn create_aes_gcm_siv_key_template(key_size: u32) -> Result<KeyTemplate> {
    let format = AesGcmSivKeyFormat::new(key_size);
    KeyTemplate::assemble(AES_GCM_SIV_TYPE_URL, format.to_bytes(), OutputPrefixType::Tink)
}

/// Create an AES-CTR-HMAC AEAD key template
///
/// All sizes are byte counts. Fails with an encoding error if `hash` is
/// `UnknownHash`; sizes are encoded without validation.
pub fn create_aes_ctr_hmac_aead_key_template(
    aes_key_size: u32,
    iv_size: u32,
    hmac_key_size: u32,
    tag_size: u32,
    hash: HashType,
) -> Result<KeyTemplate> {
    let format = AesCtrHmacAeadKeyFormat::new(aes_key_size, iv_size, hmac_key_size, tag_size, hash);
    KeyTemplate::assemble(
        AES_CTR_HMAC_AEAD_TYPE_URL,
        format.to_bytes()?,
        OutputPrefixType::Tink,
    )
}

/// Create an XChaCha20-Poly1305 key template
///
/// The algorithm has a fixed shape, so the template carries no parameters.
pub fn create_xchacha20_poly1305_key_template() -> Result<KeyTemplate> {
    KeyTemplate::assemble(XCHACHA20_POLY1305_TYPE_URL, Vec::new(), OutputPrefixType::Tink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_rejects_empty_type_url() {
        let result = KeyTemplate::assemble("", vec![0x10, 0x10], OutputPrefixType::Tink);
        assert!(result.is_err());
    }

    #[test]
    fn test_constructors_set_tink_prefix() {
        let templates = [
            create_aes_eax_key_template(16, 16).unwrap(),
            create_aes_gcm_key_template(32).unwrap(),
            create_aes_gcm_siv_key_template(16).unwrap(),
            create_aes_ctr_hmac_aead_key_template(16, 16, 32, 16, HashType::Sha256).unwrap(),
            create_xchacha20_poly1305_key_template().unwrap(),
        ];
        for template in &templates {
            assert_eq!(template.output_prefix_type, OutputPrefixType::Tink);
        }
    }

    #[test]
    fn test_xchacha_template_has_no_parameters() {
        let template = create_xchacha20_poly1305_key_template().unwrap();
        assert!(template.value.is_empty());
        assert_eq!(template.type_url, XCHACHA20_POLY1305_TYPE_URL);
    }

    #[test]
    fn test_template_wire_roundtrip() {
        let template = create_aes_gcm_key_template(32).unwrap();
        let bytes = template.to_bytes();
        let parsed = KeyTemplate::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, template);
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_template_wire_layout() {
        let template =
            KeyTemplate::assemble("a", vec![0x10, 0x20], OutputPrefixType::Tink).unwrap();
        let expected = vec![
            0x0A, 0x01, b'a', // type_url
            0x12, 0x02, 0x10, 0x20, // value
            0x18, 0x01, // output_prefix_type = TINK
        ];
        assert_eq!(template.to_bytes(), expected);
    }

    #[test]
    fn test_unknown_prefix_wire_value_rejected_on_decode() {
        let bytes = [0x0A, 0x01, b'a', 0x18, 0x09];
        assert!(KeyTemplate::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_unknown_hash_returns_no_template() {
        let result = create_aes_ctr_hmac_aead_key_template(16, 16, 32, 16, HashType::UnknownHash);
        assert!(result.is_err());
    }
}
