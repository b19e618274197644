//! Diff command: merge config and arguments, resolve sources, run the
//! engine and print the report

use crate::commands::logging::init_logging;
use cadiff_engine::{apply_engine_command, render_json, DiffOptions, EngineCommand};
use cadiff_store::{
    load_config, resolve_sources, DiffConfig, LogFormat, LogLevelSetting, OutputFormat,
};
use clap::{ArgAction, Args};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Files (or glob patterns) to diff: old design first, then new
    pub files: Vec<String>,

    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Set logging output threshold level (number such as 10/20/30 or a name)
    #[arg(long)]
    pub loglevel: Option<LogLevelSetting>,

    /// Set logging output format: text or json
    #[arg(long)]
    pub logformat: Option<LogFormat>,

    /// Read arguments from a YAML (or .toml) config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run in simple test mode on built-in sample designs
    #[arg(long)]
    pub testing: bool,

    /// Report format: text or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Top-level key holding the record array
    #[arg(long)]
    pub records_key: Option<String>,

    /// Field naming a record in the report
    #[arg(long)]
    pub id_field: Option<String>,

    /// Show old and new values of changed fields (`--show-values=false` turns off a configured true)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub show_values: Option<bool>,

    /// Accept designs without a `name` field
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub allow_missing_name: Option<bool>,
}

impl DiffArgs {
    fn overrides(&self) -> DiffConfig {
        DiffConfig {
            files: self.files.clone(),
            loglevel: self.loglevel.clone(),
            logformat: self.logformat,
            records_key: self.records_key.clone(),
            id_field: self.id_field.clone(),
            show_values: self.show_values,
            allow_missing_name: self.allow_missing_name,
            format: self.format,
            verbose: (self.verbose > 0).then_some(self.verbose),
        }
    }
}

fn diff_options(settings: &DiffConfig) -> DiffOptions {
    let defaults = DiffOptions::default();
    DiffOptions {
        records_key: settings.records_key.clone().unwrap_or(defaults.records_key),
        id_field: settings.id_field.clone().unwrap_or(defaults.id_field),
        show_values: settings.show_values.unwrap_or(defaults.show_values),
        allow_missing_name: settings
            .allow_missing_name
            .unwrap_or(defaults.allow_missing_name),
    }
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => DiffConfig::default(),
    };
    let settings = file_config.merge(args.overrides());

    init_logging(&settings)?;
    tracing::debug!(?settings, "Effective settings");

    let options = diff_options(&settings);

    let cmd = if args.testing {
        EngineCommand::SelfTest { options }
    } else {
        if settings.files.is_empty() {
            return Err("no files given; pass two design files or use --testing".into());
        }
        let resolution = resolve_sources(&settings.files)?;
        for pattern in &resolution.unmatched {
            eprintln!(
                "WARNING: File/pattern '{}' does not match any files.",
                pattern
            );
        }
        EngineCommand::Diff {
            sources: resolution.paths,
            options,
        }
    };

    let outcome = apply_engine_command(cmd)?;

    let mut report = match settings.format.unwrap_or_default() {
        OutputFormat::Text => outcome.lines.join("\n"),
        OutputFormat::Json => render_json(&outcome.diff)?,
    };
    report.push('\n');

    match &args.output {
        Some(path) => fs::write(path, report)?,
        None => std::io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        diff: DiffArgs,
    }

    #[test]
    fn test_unset_flags_do_not_override_config() {
        let args = DiffArgs {
            files: Vec::new(),
            verbose: 0,
            loglevel: None,
            logformat: None,
            config: None,
            testing: false,
            format: None,
            output: None,
            records_key: None,
            id_field: None,
            show_values: None,
            allow_missing_name: None,
        };
        let file = DiffConfig {
            files: vec!["a.json".into(), "b.json".into()],
            show_values: Some(true),
            verbose: Some(2),
            ..DiffConfig::default()
        };

        let merged = file.merge(args.overrides());

        assert_eq!(merged.files, vec!["a.json", "b.json"]);
        assert_eq!(merged.show_values, Some(true));
        assert_eq!(merged.verbose, Some(2));
    }

    #[test]
    fn test_diff_options_defaults() {
        let options = diff_options(&DiffConfig::default());
        assert_eq!(options, DiffOptions::default());
    }

    #[test]
    fn test_explicit_false_flag_overrides_config() {
        let cli = TestCli::try_parse_from([
            "cadiff",
            "--show-values=false",
            "--allow-missing-name=false",
        ])
        .unwrap();
        let file = DiffConfig {
            show_values: Some(true),
            allow_missing_name: Some(true),
            ..DiffConfig::default()
        };

        let options = diff_options(&file.merge(cli.diff.overrides()));

        assert!(!options.show_values);
        assert!(!options.allow_missing_name);
    }

    #[test]
    fn test_bare_flag_means_true() {
        let cli = TestCli::try_parse_from([
            "cadiff",
            "--show-values",
            "--allow-missing-name",
            "old.json",
            "new.json",
        ])
        .unwrap();
        assert_eq!(cli.diff.files, vec!["old.json", "new.json"]);
        let options = diff_options(&DiffConfig::default().merge(cli.diff.overrides()));
        assert!(options.show_values);
        assert!(options.allow_missing_name);
    }
}
