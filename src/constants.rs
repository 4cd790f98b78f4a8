/*!
Stable identifiers shared with the wider key-management system.

Type URLs are matched byte-for-byte by the consumer's key registry. They
are case-sensitive and never change once published.
*/

/// Type URL for AES-EAX keys
pub const AES_EAX_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesEaxKey";

/// Type URL for AES-GCM keys
pub const AES_GCM_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesGcmKey";

/// Type URL for AES-GCM-SIV keys
pub const AES_GCM_SIV_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesGcmSivKey";

/// Type URL for AES-CTR-HMAC AEAD keys
pub const AES_CTR_HMAC_AEAD_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.AesCtrHmacAeadKey";

/// Type URL for XChaCha20-Poly1305 keys
pub const XCHACHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key";
