//! Placement strategy selection rules.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The rule for choosing which free chunk satisfies a request.
///
/// A strategy is fixed for the lifetime of a run. All three rules scan
/// the free chunks in ascending start order; best- and worst-fit
/// examine every candidate, first-fit stops at the first match. Ties
/// go to the candidate encountered first.
///
/// # Examples
///
/// ```
/// use memfit_core::Strategy;
///
/// let s: Strategy = "best".parse().unwrap();
/// assert_eq!(s, Strategy::BestFit);
/// assert!("buddy".parse::<Strategy>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The first sufficient free chunk in ascending start order.
    FirstFit,
    /// The smallest sufficient free chunk.
    BestFit,
    /// The largest sufficient free chunk.
    WorstFit,
}

impl Strategy {
    /// All strategies, in the order they are conventionally compared.
    pub const ALL: [Strategy; 3] = [Self::FirstFit, Self::BestFit, Self::WorstFit];

    /// The configuration token naming this strategy.
    pub fn token(&self) -> &'static str {
        match self {
            Self::FirstFit => "first",
            Self::BestFit => "best",
            Self::WorstFit => "worst",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-fit", self.token())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::FirstFit),
            "best" => Ok(Self::BestFit),
            "worst" => Ok(Self::WorstFit),
            other => Err(ConfigError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.token().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "next".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStrategy { name } if name == "next"));
    }

    #[test]
    fn display_names() {
        assert_eq!(Strategy::FirstFit.to_string(), "first-fit");
        assert_eq!(Strategy::BestFit.to_string(), "best-fit");
        assert_eq!(Strategy::WorstFit.to_string(), "worst-fit");
    }
}
