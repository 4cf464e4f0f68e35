//! Memory ceiling enforcement.
//!
//! The ceiling check runs before the expansion stretch and before any
//! mixing array exists, so oversized parameters fail without claiming
//! the memory they describe.

use laminoir_kdf_core::engine::{derive_with, verify_with, EngineConfig};
use laminoir_kdf_core::error::KdfError;
use laminoir_kdf_core::params::CostParameters;
use laminoir_kdf_core::salt::Salt;

#[test]
fn derive_fails_fast_above_ceiling() {
    // 1 GiB requirement against a 16 MiB ceiling. If the check did not
    // fire before allocation, this test would need the full gigabyte.
    let params = CostParameters::new(1 << 20, 8, 1, 32).expect("params should be valid");
    let config = EngineConfig {
        memory_ceiling: 16 * 1024 * 1024,
        max_workers: 1,
    };

    let err = derive_with(&config, b"password", &Salt::from_bytes(b"ceiling_salt_16b"), &params)
        .expect_err("derive should refuse oversized parameters");
    match err {
        KdfError::MemoryLimitExceeded { required, ceiling } => {
            assert_eq!(required, 1 << 30);
            assert_eq!(ceiling, 16 * 1024 * 1024);
        }
        other => panic!("expected MemoryLimitExceeded, got {other}"),
    }
}

#[test]
fn parallel_blocks_count_toward_the_ceiling() {
    // Each block needs 1 MiB; p = 4 must be judged as 4 MiB.
    let params = CostParameters::new(1_024, 8, 4, 32).expect("params should be valid");
    let config = EngineConfig {
        memory_ceiling: 2 * 1024 * 1024,
        max_workers: 4,
    };

    let err = derive_with(&config, b"password", &Salt::from_bytes(b"ceiling_salt_16b"), &params)
        .expect_err("peak memory across parallel blocks should be enforced");
    assert!(matches!(err, KdfError::MemoryLimitExceeded { .. }));
}

#[test]
fn verify_enforces_the_same_ceiling() {
    let params = CostParameters::new(1 << 20, 8, 1, 32).expect("params should be valid");
    let config = EngineConfig {
        memory_ceiling: 16 * 1024 * 1024,
        max_workers: 1,
    };

    let result = verify_with(
        &config,
        b"password",
        &Salt::from_bytes(b"ceiling_salt_16b"),
        &params,
        &[0u8; 32],
    );
    assert!(matches!(result, Err(KdfError::MemoryLimitExceeded { .. })));
}

#[test]
fn ceiling_boundary_is_inclusive() {
    let params = CostParameters::new(64, 1, 1, 32).expect("params should be valid");
    let config = EngineConfig {
        memory_ceiling: params.memory_requirement(),
        max_workers: 1,
    };

    derive_with(&config, b"password", &Salt::from_bytes(b"ceiling_salt_16b"), &params)
        .expect("an exact-fit requirement should be allowed");
}
