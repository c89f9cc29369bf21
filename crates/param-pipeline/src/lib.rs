//! Typed Parameter Pipelines
//!
//! Resolves a configuration parameter by running a fixed, ordered chain of
//! steps over an initially absent value, once, at construction.
//!
//! # Core Concepts
//!
//! - [`Source`]: head of a chain; [`Load`] reads the registry and fixes the
//!   carried type, [`Seed`] starts without a lookup
//! - [`Transform`]: type-preserving steps: [`DefaultValue`], [`Min`],
//!   [`Max`], [`Offset`], [`Ratio`]
//! - [`Pipeline`] / [`PipelineBuilder`]: assembly and validation
//! - [`ValidatedPipeline`]: the composer; threads `Option<T>` left to right
//! - [`Parameter`]: resolves once and caches an output of type `O`
//! - [`Adapt`]: builds the output from the final optional value
//!
//! # Example
//!
//! ```rust
//! use param_pipeline::{DefaultValue, Load, Max, Millis, Parameter, Pipeline, Ratio};
//! use param_registry::Registry;
//!
//! let registry = Registry::builder().with(0xBu64, 555).unwrap().build();
//!
//! let pipeline = Pipeline::load(Load::<u16>::new(0xBu64))
//!     .then(DefaultValue::new(1230u32))
//!     .then(Ratio::new(1u32, 10u32).unwrap())
//!     .then(Max::new(160u32))
//!     .validate()
//!     .unwrap();
//!
//! let timeout = Parameter::<Millis<u16>>::new(&registry, &pipeline);
//! assert_eq!(timeout.value().count(), 55);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod clamp;
mod error;
mod fallback;
mod numeric;
mod parameter;
mod pipeline;
mod scale;
mod source;
mod step;
mod units;

pub use clamp::{Max, Min};
pub use error::{PipelineError, StepError};
pub use fallback::DefaultValue;
pub use numeric::{CastTo, Numeric};
pub use parameter::{Adapt, Output, Parameter};
pub use pipeline::{Pipeline, PipelineBuilder, Then, ValidatedPipeline};
pub use scale::{Offset, Ratio};
pub use source::{Load, Seed};
pub use step::{Inspection, Source, StepKind, Transform};
pub use units::{Millis, Secs};

pub use param_registry::{Lookup, ParamId, RawValue, Registry};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building parameters
    pub use crate::{
        Adapt, DefaultValue, Load, Max, Millis, Min, Offset, Parameter, Pipeline, Ratio, Secs,
        Transform,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
