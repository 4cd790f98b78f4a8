/*!
# AEAD Key Templates

Pre-configured key templates for Tink-compatible AEAD key generation.

A key template names an algorithm family, carries its parameters as an
encoded key format record, and marks how ciphertexts produced under the
resulting key are tagged. The surrounding key-management system consumes
the template as an opaque value: it resolves the type URL to a key
implementation, parses the encoded parameters, and only then generates
key material. This crate builds the descriptors; it implements no
cryptography and validates no key strengths.

To request a 256-bit AES-GCM key from a keyset handle, pass it the
matching catalog entry:

```
use aead_templates::OutputPrefixType;
use aead_templates::catalog::AES256_GCM;

let template = &*AES256_GCM;
assert_eq!(
    template.type_url,
    "type.googleapis.com/google.crypto.tink.AesGcmKey"
);
assert_eq!(template.output_prefix_type, OutputPrefixType::Tink);
```

Templates for uncommon parameter choices are built with the `create_*`
constructors in [`template`].
*/

// Catalog of pre-built templates
pub mod catalog;

// Stable type URL constants
pub mod constants;

// Error handling
pub mod error;

// Key format records and their wire encoding
pub mod format;

// Template assembly
pub mod template;

// Protobuf wire primitives
mod wire;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use format::{
    AesCtrHmacAeadKeyFormat, AesCtrKeyFormat, AesCtrParams, AesEaxKeyFormat, AesEaxParams,
    AesGcmKeyFormat, AesGcmSivKeyFormat, HashType, HmacKeyFormat, HmacParams,
};
pub use template::{
    KeyTemplate, OutputPrefixType, create_aes_ctr_hmac_aead_key_template,
    create_aes_eax_key_template, create_aes_gcm_key_template, create_aes_gcm_siv_key_template,
    create_xchacha20_poly1305_key_template,
};
