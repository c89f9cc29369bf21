//! Testing utilities for the param workspace
//!
//! Shared registry fixtures and tracing setup.

#![allow(missing_docs)]

use param_registry::{ParamId, RawValue, Registry};
use tracing_subscriber::EnvFilter;

pub const FLAG_A: ParamId = ParamId(0x0011_0011_0011_0011);
pub const FLAG_B: ParamId = ParamId(0xFF11_0011_0011_0011);

/// Id guaranteed absent from [`demo_registry`]
pub const UNKNOWN: ParamId = ParamId(1234);

pub const FLAG_A_VALUE: RawValue = 123;
pub const FLAG_B_VALUE: RawValue = 555;

/// `{ FLAG_A: 123, FLAG_B: 555 }`
pub fn demo_registry() -> Registry {
    Registry::builder()
        .with(FLAG_A, FLAG_A_VALUE)
        .and_then(|b| b.with(FLAG_B, FLAG_B_VALUE))
        .expect("fixture ids are distinct")
        .build()
}

pub fn registry_with(entries: &[(u64, RawValue)]) -> Registry {
    Registry::from_entries(entries.iter().copied()).expect("fixture ids are distinct")
}

/// Install a test-writer subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
