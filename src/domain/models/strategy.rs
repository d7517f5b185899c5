//! Scoring strategies and their fixed weight tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// One of the four independent scoring factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// How soon the task is due
    Urgency,
    /// Caller-assigned importance
    Importance,
    /// Estimated hours of work
    Effort,
    /// How many tasks wait on this one
    Dependents,
}

impl Factor {
    /// Every factor, in weight-table order.
    pub const ALL: [Self; 4] = [Self::Urgency, Self::Importance, Self::Effort, Self::Dependents];
}

/// Raw factor scores for one task, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Urgency score
    pub urgency: f64,
    /// Importance score
    pub importance: f64,
    /// Effort score
    pub effort: f64,
    /// Dependents score
    pub dependents: f64,
}

impl FactorScores {
    /// Score of one factor.
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Urgency => self.urgency,
            Factor::Importance => self.importance,
            Factor::Effort => self.effort,
            Factor::Dependents => self.dependents,
        }
    }
}

/// Weight 4-tuple of a strategy. Every table sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyWeights {
    /// Urgency weight
    pub urgency: f64,
    /// Importance weight
    pub importance: f64,
    /// Effort weight
    pub effort: f64,
    /// Dependents weight
    pub dependents: f64,
}

impl StrategyWeights {
    /// Weight of one factor.
    pub const fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Urgency => self.urgency,
            Factor::Importance => self.importance,
            Factor::Effort => self.effort,
            Factor::Dependents => self.dependents,
        }
    }

    /// Sum of the four weights.
    pub fn total(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependents
    }

    /// Weighted sum of the factor scores, clamped to `[0, 1]`.
    pub fn combine(&self, factors: &FactorScores) -> f64 {
        Factor::ALL
            .iter()
            .map(|&f| self.weight(f) * factors.get(f))
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Strategy selecting which weight table is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced blend of all four factors
    #[default]
    SmartBalance,
    /// Favors low-effort tasks
    FastestWins,
    /// Favors importance
    HighImpact,
    /// Favors the nearest deadlines
    DeadlineDriven,
}

impl Strategy {
    /// Every strategy, in catalogue order.
    pub const ALL: [Self; 4] = [
        Self::SmartBalance,
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
    ];

    /// Wire name, e.g. `smart_balance`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SmartBalance => "smart_balance",
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
        }
    }

    /// Human label used as the explanation prefix.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SmartBalance => "Smart Balance",
            Self::FastestWins => "Fastest Wins",
            Self::HighImpact => "High Impact",
            Self::DeadlineDriven => "Deadline Driven",
        }
    }

    /// Fixed weight table of the strategy.
    pub const fn weights(&self) -> StrategyWeights {
        match self {
            Self::SmartBalance => StrategyWeights {
                urgency: 0.40,
                importance: 0.30,
                effort: 0.20,
                dependents: 0.10,
            },
            Self::FastestWins => StrategyWeights {
                urgency: 0.20,
                importance: 0.0,
                effort: 0.80,
                dependents: 0.0,
            },
            Self::HighImpact => StrategyWeights {
                urgency: 0.30,
                importance: 0.70,
                effort: 0.0,
                dependents: 0.0,
            },
            Self::DeadlineDriven => StrategyWeights {
                urgency: 0.90,
                importance: 0.10,
                effort: 0.0,
                dependents: 0.0,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DomainError;

    /// Exact, case-sensitive match on the wire name. Unknown names are
    /// rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStrategy(s.to_string()))
    }
}
