use crate::cli::{ComparisonOverrides, ModeFlags};
use crate::error::{CliError, Result};
use eigas::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialFingerprintConfig {
    cutoff: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialScoringConfig {
    #[serde(rename = "gap-penalty")]
    gap_penalty: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialAlignmentMode {
    Global,
    Local,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAlignmentConfig {
    mode: Option<PartialAlignmentMode>,
    #[serde(rename = "max-gaps")]
    max_gaps: Option<usize>,
}

/// Comparison settings as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialComparisonConfig {
    fingerprint: Option<PartialFingerprintConfig>,
    scoring: Option<PartialScoringConfig>,
    alignment: Option<PartialAlignmentConfig>,
}

impl PartialComparisonConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Layers `-S` values, then explicit flags, over the file and builds a validated config.
    pub fn merge_with_cli(
        mut self,
        overrides: &ComparisonOverrides,
    ) -> Result<core_config::ComparisonConfig> {
        self.apply_set_values(&overrides.set_values)?;

        let fingerprint = self.fingerprint.take().unwrap_or_default();
        let scoring = self.scoring.take().unwrap_or_default();
        let alignment = self.alignment.take().unwrap_or_default();

        let mut builder = core_config::ComparisonConfigBuilder::new();
        if let Some(cutoff) = overrides.cutoff.or(fingerprint.cutoff) {
            builder = builder.cutoff(cutoff);
        }
        if let Some(gap_penalty) = overrides.gap_penalty.or(scoring.gap_penalty) {
            builder = builder.gap_penalty(gap_penalty);
        }
        builder = builder.mode(Self::merge_mode(
            overrides.mode,
            overrides.max_gaps,
            alignment,
        ));

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_mode(
        flags: ModeFlags,
        cli_max_gaps: Option<usize>,
        file: PartialAlignmentConfig,
    ) -> core_config::AlignmentMode {
        let local = if flags.local {
            true
        } else if flags.global {
            false
        } else {
            file.mode == Some(PartialAlignmentMode::Local)
        };

        if local {
            let max_gaps = cli_max_gaps
                .or(file.max_gaps)
                .unwrap_or(core_config::DEFAULT_MAX_GAPS);
            core_config::AlignmentMode::Local { max_gaps }
        } else {
            core_config::AlignmentMode::Global
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let invalid = |kind: &str| {
                CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
            };

            match key {
                "fingerprint.cutoff" => {
                    self.fingerprint.get_or_insert_with(Default::default).cutoff =
                        Some(value_str.parse().map_err(|_| invalid("float"))?);
                }
                "scoring.gap-penalty" => {
                    self.scoring
                        .get_or_insert_with(Default::default)
                        .gap_penalty = Some(value_str.parse().map_err(|_| invalid("float"))?);
                }
                "alignment.mode" => {
                    let mode = match value_str {
                        "global" => PartialAlignmentMode::Global,
                        "local" => PartialAlignmentMode::Local,
                        _ => return Err(invalid("mode")),
                    };
                    self.alignment.get_or_insert_with(Default::default).mode = Some(mode);
                }
                "alignment.max-gaps" => {
                    self.alignment.get_or_insert_with(Default::default).max_gaps =
                        Some(value_str.parse().map_err(|_| invalid("integer"))?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use eigas::engine::config::{AlignmentMode, ComparisonConfig};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("eigas.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn align_overrides(extra: &[&str]) -> ComparisonOverrides {
        let mut args = vec!["eigas", "align", "a.txt", "b.txt"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Align(args) => args.overrides,
            _ => panic!("Expected 'align' subcommand"),
        }
    }

    #[test]
    fn missing_file_and_flags_yield_defaults() {
        let config = PartialComparisonConfig::load(None)
            .unwrap()
            .merge_with_cli(&ComparisonOverrides::default())
            .unwrap();
        assert_eq!(config, ComparisonConfig::default());
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [fingerprint]
            cutoff = 10.5

            [scoring]
            gap-penalty = 0.75

            [alignment]
            mode = "local"
            max-gaps = 3
            "#,
        );
        let config = PartialComparisonConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&ComparisonOverrides::default())
            .unwrap();
        assert_eq!(config.cutoff, 10.5);
        assert_eq!(config.scoring.gap_penalty(), 0.75);
        assert_eq!(config.mode, AlignmentMode::Local { max_gaps: 3 });
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [fingerprint]
            cutoff = 10.5 # Will be overridden

            [alignment]
            mode = "local"
            max-gaps = 3 # Will be overridden
            "#,
        );
        let overrides = align_overrides(&["--cutoff", "7.0", "--max-gaps", "1"]);
        let config = PartialComparisonConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&overrides)
            .unwrap();
        assert_eq!(config.cutoff, 7.0);
        assert_eq!(config.mode, AlignmentMode::Local { max_gaps: 1 });

        let overrides = align_overrides(&["--global"]);
        let config = PartialComparisonConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&overrides)
            .unwrap();
        assert_eq!(config.mode, AlignmentMode::Global);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[scoring]\ngap-penalty = 2.0\n");
        let overrides = align_overrides(&[
            "-S",
            "scoring.gap-penalty=0.25",
            "-S",
            "alignment.mode=local",
        ]);
        let config = PartialComparisonConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&overrides)
            .unwrap();
        assert_eq!(config.scoring.gap_penalty(), 0.25);
        assert_eq!(config.mode, AlignmentMode::Local { max_gaps: 0 });
    }

    #[test]
    fn max_gaps_without_local_mode_is_ignored() {
        let overrides = align_overrides(&["--max-gaps", "4"]);
        let config = PartialComparisonConfig::default()
            .merge_with_cli(&overrides)
            .unwrap();
        assert_eq!(config.mode, AlignmentMode::Global);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[scoring]\nmatch-bonus = 2.0\n");
        let result = PartialComparisonConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));

        let overrides = align_overrides(&["-S", "scoring.match-bonus=2.0"]);
        let result = PartialComparisonConfig::default().merge_with_cli(&overrides);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["alignment.max-gaps=-1", "alignment.mode=fast", "cutoff"] {
            let overrides = align_overrides(&["-S", bad]);
            let result = PartialComparisonConfig::default().merge_with_cli(&overrides);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn invalid_values_fail_validation() {
        let overrides = align_overrides(&["--gap-penalty", "0"]);
        let result = PartialComparisonConfig::default().merge_with_cli(&overrides);
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("gap_penalty")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
