//! Parameter Registry
//!
//! Immutable mapping from 64-bit parameter identifiers to raw stored values.
//!
//! # Core Concepts
//!
//! - [`ParamId`]: 64-bit parameter identifier
//! - [`RawValue`]: the fixed numeric type every entry is stored as
//! - [`Lookup`]: the read interface consumed by `Load` steps
//! - [`Registry`]: populated once through [`RegistryBuilder`], read-only afterwards
//! - [`RegistryDocument`]: JSON/YAML/TOML form of a registry
//!
//! # Example
//!
//! ```rust
//! use param_registry::{Lookup, ParamId, Registry};
//!
//! let registry = Registry::builder()
//!     .with(0x11u64, 123)
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(registry.lookup(ParamId(0x11)), Some(123));
//! assert_eq!(registry.lookup(ParamId(0x12)), None);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod error;
mod registry;

pub use document::RegistryDocument;
pub use error::RegistryError;
pub use registry::{Lookup, ParamId, RawValue, Registry, RegistryBuilder};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn document_and_builder_agree() {
        let from_doc = Registry::from_json_str(r#"{ "entries": { "0x11": 123, "18": 555 } }"#)
            .unwrap();

        let built = Registry::builder()
            .with(0x11u64, 123)
            .unwrap()
            .with(18u64, 555)
            .unwrap()
            .build();

        assert_eq!(from_doc, built);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
