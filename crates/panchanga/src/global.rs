//! Process-wide oracle initialization.
//!
//! The oracle and display settings are set exactly once at startup and
//! treated as read-only afterwards. Every computation requires prior
//! initialization; a second `init` is an error rather than a reconfigure.

use std::sync::OnceLock;

use panchanga_oracle::{AyanamshaSystem, Oracle, OracleConfig, RiseSetConfig};

use crate::error::PanchangError;

/// Startup settings for the process-wide oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Sidereal reference system for ayanamsha-corrected derivations.
    pub ayanamsha: AyanamshaSystem,
    /// Horizon parameters for sunrise/sunset.
    pub rise_set: RiseSetConfig,
    /// Display offset in hours, applied only to sunrise/sunset strings
    /// and the weekday. Default 5.5 (IST).
    pub tz_offset_hours: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            rise_set: RiseSetConfig::default(),
            tz_offset_hours: 5.5,
        }
    }
}

pub(crate) struct Runtime {
    pub oracle: Oracle,
    pub tz_offset_hours: f64,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Initialize the process-wide oracle. Must be called exactly once,
/// before serving any computation.
pub fn init(settings: Settings) -> Result<(), PanchangError> {
    let runtime = Runtime {
        oracle: Oracle::new(OracleConfig {
            ayanamsha: settings.ayanamsha,
            rise_set: settings.rise_set,
        }),
        tz_offset_hours: settings.tz_offset_hours,
    };
    RUNTIME
        .set(runtime)
        .map_err(|_| PanchangError::AlreadyInitialized)
}

/// Whether [`init`] has been called.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

pub(crate) fn runtime() -> Result<&'static Runtime, PanchangError> {
    RUNTIME.get().ok_or(PanchangError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.ayanamsha, AyanamshaSystem::Lahiri);
        assert!((s.tz_offset_hours - 5.5).abs() < 1e-12);
    }
}
