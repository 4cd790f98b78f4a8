/*!
Catalog of pre-built AEAD key templates.

The catalog covers the conventional parameter choices so callers do not
hand-pick sizes for common cases. Entries are built once, before any
reference escapes, and are read-only afterwards; concurrent readers need
no locking.
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::format::HashType;
use crate::template::{
    KeyTemplate, create_aes_ctr_hmac_aead_key_template, create_aes_eax_key_template,
    create_aes_gcm_key_template, create_aes_gcm_siv_key_template,
    create_xchacha20_poly1305_key_template,
};

/// 128-bit AES-EAX with a 16-byte nonce
pub static AES128_EAX: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_eax_key_template(16, 16).expect("catalog parameters are valid"));

/// 256-bit AES-EAX with a 16-byte nonce
pub static AES256_EAX: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_eax_key_template(32, 16).expect("catalog parameters are valid"));

/// 128-bit AES-GCM
pub static AES128_GCM: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_gcm_key_template(16).expect("catalog parameters are valid"));

/// 256-bit AES-GCM
pub static AES256_GCM: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_gcm_key_template(32).expect("catalog parameters are valid"));

/// 128-bit AES-GCM-SIV
pub static AES128_GCM_SIV: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_gcm_siv_key_template(16).expect("catalog parameters are valid"));

/// 256-bit AES-GCM-SIV
pub static AES256_GCM_SIV: Lazy<KeyTemplate> =
    Lazy::new(|| create_aes_gcm_siv_key_template(32).expect("catalog parameters are valid"));

/// 128-bit AES-CTR with HMAC-SHA256 (32-byte MAC key, 16-byte tag)
pub static AES128_CTR_HMAC_SHA256: Lazy<KeyTemplate> = Lazy::new(|| {
    create_aes_ctr_hmac_aead_key_template(16, 16, 32, 16, HashType::Sha256)
        .expect("catalog parameters are valid")
});

/// 256-bit AES-CTR with HMAC-SHA256 (32-byte MAC key, 32-byte tag)
pub static AES256_CTR_HMAC_SHA256: Lazy<KeyTemplate> = Lazy::new(|| {
    create_aes_ctr_hmac_aead_key_template(32, 16, 32, 32, HashType::Sha256)
        .expect("catalog parameters are valid")
});

/// XChaCha20-Poly1305
pub static XCHACHA20_POLY1305: Lazy<KeyTemplate> =
    Lazy::new(|| create_xchacha20_poly1305_key_template().expect("catalog parameters are valid"));

static BY_NAME: Lazy<HashMap<&'static str, &'static KeyTemplate>> = Lazy::new(|| {
    let mut templates: HashMap<&'static str, &'static KeyTemplate> = HashMap::new();
    templates.insert("AES128_EAX", &*AES128_EAX);
    templates.insert("AES256_EAX", &*AES256_EAX);
    templates.insert("AES128_GCM", &*AES128_GCM);
    templates.insert("AES256_GCM", &*AES256_GCM);
    templates.insert("AES128_GCM_SIV", &*AES128_GCM_SIV);
    templates.insert("AES256_GCM_SIV", &*AES256_GCM_SIV);
    templates.insert("AES128_CTR_HMAC_SHA256", &*AES128_CTR_HMAC_SHA256);
    templates.insert("AES256_CTR_HMAC_SHA256", &*AES256_CTR_HMAC_SHA256);
    templates.insert("XCHACHA20_POLY1305", &*XCHACHA20_POLY1305);
    templates
});

/// Look up a catalog template by its conventional name
pub fn template_by_name(name: &str) -> Option<&'static KeyTemplate> {
    BY_NAME.get(name).copied()
}

/// List the names of all catalog templates
pub fn list_templates() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BY_NAME.keys().copied().collect();
    names.sort_unstable();
    names
}
