//! Panchang computation for a civil moment and location.
//!
//! Call [`init`] once at process start with the desired [`Settings`], then
//! [`compute`] per request. The global oracle is set exactly once and
//! read-only afterwards; every computation is a pure function of its
//! inputs, so concurrent requests need no coordination.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use panchanga::{CivilMoment, GeoPoint, Settings, compute, init};
//!
//! init(Settings::default()).expect("oracle init");
//! let result = compute(
//!     &CivilMoment::new(2000, 1, 1, 0.0),
//!     &GeoPoint::new(28.6139, 77.2090),
//! )?;
//! println!("{}", serde_json::to_string(&result)?);
//! ```

pub mod compute;
pub mod derive;
pub mod error;
pub mod global;
pub mod result;

pub use compute::{compute, compute_with};
pub use error::{Element, PanchangError};
pub use global::{Settings, init, is_initialized};
pub use result::{LagnaResult, MoonResult, Panchang, TithiResult, YogaResult};

// Re-export the oracle types callers need to build inputs and settings.
pub use panchanga_oracle::{
    AyanamshaSystem, Body, CivilMoment, GeoPoint, Oracle, OracleConfig, RiseSetConfig,
};
