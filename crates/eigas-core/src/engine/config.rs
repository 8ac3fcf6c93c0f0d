use thiserror::Error;

pub const DEFAULT_CUTOFF: f64 = 8.0;
pub const DEFAULT_GAP_PENALTY: f64 = 1.0;
pub const DEFAULT_MAX_GAPS: usize = 0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {value} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Costs shared by the global and local recurrences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    gap_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

impl ScoringConfig {
    pub fn new(gap_penalty: f64) -> Result<Self, ConfigError> {
        if !(gap_penalty.is_finite() && gap_penalty > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "gap_penalty",
                value: gap_penalty,
            });
        }
        Ok(Self { gap_penalty })
    }

    #[inline]
    pub fn gap_penalty(&self) -> f64 {
        self.gap_penalty
    }

    /// Global substitution cost.
    #[inline]
    pub fn substitution_cost(&self, a: f64, b: f64) -> f64 {
        (a - b).abs()
    }

    /// Two fingerprint values count as a local match when they differ by less than the gap penalty.
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.gap_penalty
    }

    #[inline]
    pub fn match_bonus(&self) -> f64 {
        2.0 * self.gap_penalty
    }

    /// Local score change for a diagonal step.
    #[inline]
    pub fn local_step(&self, a: f64, b: f64) -> f64 {
        if self.is_close(a, b) {
            self.match_bonus()
        } else {
            -self.gap_penalty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    #[default]
    Global,
    Local {
        max_gaps: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    pub cutoff: f64,
    pub scoring: ScoringConfig,
    pub mode: AlignmentMode,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            scoring: ScoringConfig::default(),
            mode: AlignmentMode::default(),
        }
    }
}

#[derive(Default)]
pub struct ComparisonConfigBuilder {
    cutoff: Option<f64>,
    gap_penalty: Option<f64>,
    mode: Option<AlignmentMode>,
}

impl ComparisonConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn gap_penalty(mut self, penalty: f64) -> Self {
        self.gap_penalty = Some(penalty);
        self
    }
    pub fn mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn global(self) -> Self {
        self.mode(AlignmentMode::Global)
    }
    pub fn local(self, max_gaps: usize) -> Self {
        self.mode(AlignmentMode::Local { max_gaps })
    }

    pub fn build(self) -> Result<ComparisonConfig, ConfigError> {
        let cutoff = self.cutoff.unwrap_or(DEFAULT_CUTOFF);
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "cutoff",
                value: cutoff,
            });
        }
        let scoring = ScoringConfig::new(self.gap_penalty.unwrap_or(DEFAULT_GAP_PENALTY))?;

        Ok(ComparisonConfig {
            cutoff,
            scoring,
            mode: self.mode.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_falls_back_to_defaults() {
        let config = ComparisonConfigBuilder::new().build().unwrap();
        assert_eq!(config, ComparisonConfig::default());
        assert_eq!(config.cutoff, 8.0);
        assert_eq!(config.scoring.gap_penalty(), 1.0);
        assert_eq!(config.mode, AlignmentMode::Global);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ComparisonConfigBuilder::new()
            .cutoff(10.0)
            .gap_penalty(0.5)
            .local(3)
            .build()
            .unwrap();
        assert_eq!(config.cutoff, 10.0);
        assert_eq!(config.scoring.gap_penalty(), 0.5);
        assert_eq!(config.mode, AlignmentMode::Local { max_gaps: 3 });
    }

    #[test]
    fn builder_rejects_non_positive_cutoff() {
        let result = ComparisonConfigBuilder::new().cutoff(0.0).build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "cutoff",
                value: 0.0
            })
        );
    }

    #[test]
    fn builder_rejects_invalid_gap_penalty() {
        let result = ComparisonConfigBuilder::new().gap_penalty(-1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "gap_penalty",
                ..
            })
        ));
        assert!(ScoringConfig::new(f64::NAN).is_err());
        assert!(ScoringConfig::new(0.0).is_err());
        assert_eq!(ScoringConfig::new(0.25).unwrap().gap_penalty(), 0.25);
    }

    #[test]
    fn local_step_rewards_close_values_and_penalizes_others() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.local_step(3.0, 3.5), 2.0);
        assert_eq!(scoring.local_step(3.0, 4.0), -1.0);
        assert_eq!(scoring.local_step(3.0, 5.0), -1.0);
    }

    #[test]
    fn substitution_cost_is_absolute_difference() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.substitution_cost(1.5, 4.0), 2.5);
        assert_eq!(scoring.substitution_cost(4.0, 1.5), 2.5);
    }
}
