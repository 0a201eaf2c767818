//! Engine configuration: scoring weights, idle statuses, and batch limits.
//!
//! Everything has a serde default so a partial TOML file (or none at all)
//! yields the documented behavior.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{FrictionError, Result};

/// Weight applied to each rework signal when computing the friction score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_reopens_weight")]
    pub reopens: f64,

    #[serde(default = "default_loops_weight")]
    pub loops: f64,

    #[serde(default = "default_backtracks_weight")]
    pub backtracks: f64,

    #[serde(default = "default_assignee_changes_weight")]
    pub assignee_changes: f64,

    #[serde(default = "default_idle_days_weight")]
    pub idle_days: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            reopens: default_reopens_weight(),
            loops: default_loops_weight(),
            backtracks: default_backtracks_weight(),
            assignee_changes: default_assignee_changes_weight(),
            idle_days: default_idle_days_weight(),
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        let named = [
            (self.reopens, "reopens"),
            (self.loops, "loops"),
            (self.backtracks, "backtracks"),
            (self.assignee_changes, "assignee_changes"),
            (self.idle_days, "idle_days"),
        ];
        for (weight, name) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FrictionError::config(format!(
                    "scoring weight {name} must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

fn default_reopens_weight() -> f64 {
    2.0
}

fn default_loops_weight() -> f64 {
    1.5
}

fn default_backtracks_weight() -> f64 {
    1.0
}

fn default_assignee_changes_weight() -> f64 {
    0.5
}

fn default_idle_days_weight() -> f64 {
    0.1
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrictionConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Statuses in which no active work is assumed to occur. Case-sensitive
    /// exact match against status names.
    #[serde(default = "default_idle_statuses")]
    pub idle_statuses: Vec<String>,

    /// Successful results at or above this score are ranked as high-friction
    /// in the project report.
    #[serde(default = "default_high_friction_threshold")]
    pub high_friction_threshold: f64,

    /// How many recent issues to sample per project batch.
    #[serde(default = "default_max_issues")]
    pub max_issues: usize,

    /// Cap on concurrent in-flight issue fetches within a batch.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Overall batch deadline; units still pending at the deadline are
    /// reported as failures and the report is best-effort partial.
    #[serde(default = "default_batch_deadline_secs")]
    pub batch_deadline_secs: u64,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            idle_statuses: default_idle_statuses(),
            high_friction_threshold: default_high_friction_threshold(),
            max_issues: default_max_issues(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            batch_deadline_secs: default_batch_deadline_secs(),
        }
    }
}

impl FrictionConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: FrictionConfig = toml::from_str(&raw).map_err(|err| {
            FrictionError::config(format!("failed to parse {}: {err}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path; `None` means the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.max_concurrent_fetches == 0 {
            return Err(FrictionError::config(
                "max_concurrent_fetches must be at least 1",
            ));
        }
        if !self.high_friction_threshold.is_finite() || self.high_friction_threshold < 0.0 {
            return Err(FrictionError::config(format!(
                "high_friction_threshold must be a non-negative number, got {}",
                self.high_friction_threshold
            )));
        }
        Ok(())
    }
}

fn default_idle_statuses() -> Vec<String> {
    vec![
        "To Do".to_string(),
        "Blocked".to_string(),
        "Backlog".to_string(),
    ]
}

fn default_high_friction_threshold() -> f64 {
    5.0
}

fn default_max_issues() -> usize {
    20
}

fn default_max_concurrent_fetches() -> usize {
    8
}

fn default_batch_deadline_secs() -> u64 {
    30
}
