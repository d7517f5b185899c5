//! `taskrank strategies`

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Strategy, StrategyWeights};

/// One row of the strategy catalogue.
#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    /// Wire name
    pub name: Strategy,
    /// Human label
    pub label: &'static str,
    /// Factor weights
    pub weights: StrategyWeights,
    /// Whether this is the configured default
    pub default: bool,
}

/// Output of `taskrank strategies`.
#[derive(Debug, Serialize)]
pub struct StrategiesOutput {
    /// Every strategy, in table order
    pub strategies: Vec<StrategyInfo>,
    #[serde(skip)]
    default: Strategy,
}

impl StrategiesOutput {
    /// Describe every strategy, marking `default`.
    pub fn new(default: Strategy) -> Self {
        let strategies = Strategy::ALL
            .into_iter()
            .map(|s| StrategyInfo {
                name: s,
                label: s.label(),
                weights: s.weights(),
                default: s == default,
            })
            .collect();
        Self {
            strategies,
            default,
        }
    }
}

impl CommandOutput for StrategiesOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_strategies(self.default)
    }
}

/// Run `taskrank strategies`.
pub fn execute(default: Strategy, json_mode: bool) -> Result<()> {
    output(&StrategiesOutput::new(default), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_json_shape() {
        let out = StrategiesOutput::new(Strategy::HighImpact).to_json();
        let list = out["strategies"].as_array().unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(list[2]["name"], "high_impact");
        assert_eq!(list[2]["default"], true);
        assert_eq!(list[0]["weights"]["urgency"], 0.4);
        assert!(out.get("default").is_none());
    }
}
