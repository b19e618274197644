//! Maps verbosity, `--loglevel` and `--logformat` onto the logging facility

use cadiff_core::logging_facility::{init_with_filter, Profile};
use cadiff_store::{DiffConfig, LogFormat};

/// Pick the logging profile and filter directive for the merged settings.
///
/// `--loglevel` wins over `-v`. Without either, only warnings are shown.
pub fn logging_setup(settings: &DiffConfig) -> Result<(Profile, String), Box<dyn std::error::Error>> {
    let level = match &settings.loglevel {
        Some(setting) => setting.to_level_filter()?.to_string().to_ascii_lowercase(),
        None => match settings.verbose.unwrap_or(0) {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let profile = match settings.logformat.unwrap_or_default() {
        LogFormat::Json => Profile::Production,
        LogFormat::Text if level == "warn" => Profile::Quiet,
        LogFormat::Text => Profile::Development,
    };

    Ok((profile, format!("cadiff={}", level)))
}

/// Install the global subscriber for this run
pub fn init_logging(settings: &DiffConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (profile, filter) = logging_setup(settings)?;
    init_with_filter(profile, Some(filter.as_str()));
    tracing::debug!(?profile, filter = %filter, "Logging initialized");
    Ok(())
}
