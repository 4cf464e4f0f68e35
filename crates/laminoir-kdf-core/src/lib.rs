//! `laminoir-kdf-core` — Memory-hard key derivation primitives for LAMINOIR.
//!
//! This crate is the audit target: zero network, zero async. It implements
//! the scrypt construction (RFC 7914) — PBKDF2-HMAC-SHA256 expansion,
//! pseudo-randomly indexed memory-hard mixing, PBKDF2 compression — as
//! pure functions over immutable value types. Credential storage, account
//! management, and terminal I/O live with external callers.
//!
//! Components, leaf to root: [`prf`] → [`pbkdf2`] → [`block_mix`] →
//! [`romix`] → [`engine`]. Data flows strictly upward; nothing depends on
//! a component above it.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod params;
pub mod salt;

pub mod prf;

pub mod pbkdf2;

pub mod block_mix;
pub mod romix;

pub mod engine;

pub use engine::{
    derive, derive_with, verify, verify_with, DerivedKey, EngineConfig, DEFAULT_MEMORY_CEILING,
};
pub use error::KdfError;
pub use memory::{disable_core_dumps, LockedRegion, SecretBuffer};
pub use params::{CostParameters, CostPreset, DEFAULT_KEY_LEN, MAX_KEY_LEN};
pub use salt::{Salt, DEFAULT_SALT_LEN, MIN_SALT_LEN};
