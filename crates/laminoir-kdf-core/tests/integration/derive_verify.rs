//! Full derive → store → verify flow, as an external credential verifier
//! would drive it.

use laminoir_kdf_core::engine::{derive, verify};
use laminoir_kdf_core::params::{CostParameters, CostPreset};
use laminoir_kdf_core::salt::Salt;

/// Small parameters so the suite stays fast; the KAT suite covers
/// reference-scale costs.
fn test_params() -> CostParameters {
    CostParameters::new(64, 2, 2, 32).expect("test params should be valid")
}

#[test]
fn fresh_salt_derive_verify_roundtrip() {
    let params = test_params();
    let salt = Salt::random().expect("salt generation should succeed");

    let key = derive(b"correct horse battery staple", &salt, &params)
        .expect("derive should succeed");
    assert!(
        verify(b"correct horse battery staple", &salt, &params, key.expose())
            .expect("verify should succeed")
    );
}

/// The persisted record is (salt, params, key hex) — everything needed to
/// re-verify after a serde round-trip through storage.
#[test]
fn verification_record_survives_serialization() {
    let params = test_params();
    let salt = Salt::random().expect("salt generation should succeed");
    let key = derive(b"hunter2", &salt, &params).expect("derive should succeed");

    let stored_salt = serde_json::to_string(&salt).expect("salt should serialize");
    let stored_params = serde_json::to_string(&params).expect("params should serialize");
    let stored_key = key.to_hex();

    let restored_salt: Salt = serde_json::from_str(&stored_salt).expect("salt should deserialize");
    let restored_params: CostParameters =
        serde_json::from_str(&stored_params).expect("params should deserialize");
    let restored_key: Vec<u8> = (0..stored_key.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&stored_key[i..i + 2], 16).expect("valid hex"))
        .collect();

    assert!(
        verify(b"hunter2", &restored_salt, &restored_params, &restored_key)
            .expect("verify should succeed")
    );
    assert!(
        !verify(b"hunter3", &restored_salt, &restored_params, &restored_key)
            .expect("verify should succeed")
    );
}

#[test]
fn verify_rejects_wrong_salt() {
    let params = test_params();
    let salt_a = Salt::random().expect("salt generation should succeed");
    let salt_b = Salt::random().expect("salt generation should succeed");
    let key = derive(b"password", &salt_a, &params).expect("derive should succeed");

    assert!(!verify(b"password", &salt_b, &params, key.expose()).expect("verify should succeed"));
}

#[test]
fn verify_rejects_wrong_parameters() {
    let salt = Salt::random().expect("salt generation should succeed");
    let params_a = CostParameters::new(64, 2, 2, 32).expect("params should be valid");
    let params_b = CostParameters::new(128, 2, 2, 32).expect("params should be valid");
    let key = derive(b"password", &salt, &params_a).expect("derive should succeed");

    assert!(!verify(b"password", &salt, &params_b, key.expose()).expect("verify should succeed"));
}

#[test]
fn verify_rejects_wrong_length_stored_key() {
    let params = test_params();
    let salt = Salt::random().expect("salt generation should succeed");
    let key = derive(b"password", &salt, &params).expect("derive should succeed");

    let truncated = &key.expose()[..16];
    assert!(!verify(b"password", &salt, &params, truncated).expect("verify should succeed"));
}

/// The presets must all be derivable as-is. Fast only — Balanced and
/// Maximum would dominate the suite's runtime without adding coverage.
#[test]
fn fast_preset_is_usable_end_to_end() {
    let params = CostPreset::Fast.params();
    let salt = Salt::random().expect("salt generation should succeed");
    let key = derive(b"password", &salt, &params).expect("derive should succeed");
    assert_eq!(key.len(), 32);
    assert!(verify(b"password", &salt, &params, key.expose()).expect("verify should succeed"));
}
