/// What counts as hero improving when a card comes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImprovementRule {
    /// The category, primary or secondary has to go up. A better kicker
    /// alone is not an out.
    #[default]
    KickerIgnoring,
    /// Any strictly better hand under `compare`, kickers included.
    FullComparison,
}

/// When an out is marked as dangerous.
///
/// With no villain hand both rules fall back to the board check: the
/// out is dangerous when the 5 card board alone beats hero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DangerRule {
    /// Villain's final hand strictly beats hero's final hand. Ties are safe.
    #[default]
    FinalHandBeats,
    /// Villain's score goes up by at least as much as hero's does.
    VillainGain,
}

/// Knobs for outs enumeration and classification.
///
/// The default is the kicker ignoring, final hand comparison behavior.
/// The other rules are kept so older trainer answers can be reproduced.
///
/// ```
/// use holdem_outs::holdem::{DangerRule, ImprovementRule, OutsConfig};
///
/// let config = OutsConfig::default().with_danger(DangerRule::VillainGain);
/// assert_eq!(ImprovementRule::KickerIgnoring, config.improvement);
/// assert_eq!(DangerRule::VillainGain, config.danger);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutsConfig {
    pub improvement: ImprovementRule,
    pub danger: DangerRule,
}

impl OutsConfig {
    pub fn with_improvement(mut self, improvement: ImprovementRule) -> Self {
        self.improvement = improvement;
        self
    }

    pub fn with_danger(mut self, danger: DangerRule) -> Self {
        self.danger = danger;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: OutsConfig = serde_json::from_str(r#"{"improvement":"full-comparison"}"#).unwrap();
        assert_eq!(ImprovementRule::FullComparison, config.improvement);
        assert_eq!(DangerRule::FinalHandBeats, config.danger);

        let config: OutsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(OutsConfig::default(), config);
    }
}
