//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output
    Production,
    /// Human-readable output, warnings and errors only
    Quiet,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Default filter directive used when neither `RUST_LOG` nor an explicit
    /// filter is given.
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "cadiff=debug",
            Profile::Production => "cadiff=info",
            Profile::Quiet | Profile::Test => "cadiff=warn",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default filter
///
/// This function should be called once at application startup.
/// Later calls are no-ops.
///
/// # Example
///
/// ```
/// use cadiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    init_with_filter(profile, None);
}

/// Initialize the logging facility with an explicit filter directive
///
/// Precedence: `RUST_LOG`, then `filter`, then the profile default.
/// Logs go to stderr so that report lines on stdout stay clean.
pub fn init_with_filter(profile: Profile, filter: Option<&str>) {
    INIT_ONCE.call_once(|| {
        let directive = filter.unwrap_or(profile.default_filter()).to_string();
        let env_filter =
            || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));
        match profile {
            Profile::Development | Profile::Quiet => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter())
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter())
                    .init();
            }
            Profile::Test => {
                // Test capture is initialized separately via init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init_with_filter(Profile::Test, Some("cadiff=trace"));
    }

    #[test]
    fn test_default_filters() {
        assert_eq!(Profile::Development.default_filter(), "cadiff=debug");
        assert_eq!(Profile::Production.default_filter(), "cadiff=info");
        assert_eq!(Profile::Quiet.default_filter(), "cadiff=warn");
    }
}
