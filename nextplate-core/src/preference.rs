//! Caller preferences and the integer weights they translate into.
//!
//! Users state how strongly they care about three signals on a five-step
//! scale. Popularity maps straight onto a weight. Competition and
//! satisfaction are inverted: asking for *very low* competition puts the
//! heaviest weight on the competition-aversion term, and asking for *very
//! low* satisfaction puts the heaviest weight on the underserved-market term.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest weight a caller may assign to a single signal.
pub const MAX_WEIGHT: u8 = 4;

/// Five-step preference scale.
///
/// # Examples
/// ```
/// use nextplate_core::PreferenceLevel;
///
/// let level: PreferenceLevel = "very high".parse().expect("known level");
/// assert_eq!(level.ascending_weight(), 4);
/// assert_eq!(level.descending_weight(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PreferenceLevel {
    /// Lowest step.
    VeryLow,
    /// Second step.
    Low,
    /// Middle step.
    #[default]
    Neutral,
    /// Fourth step.
    High,
    /// Highest step.
    VeryHigh,
}

impl PreferenceLevel {
    /// Return the level as displayed to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Neutral => "neutral",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }

    /// Weight growing with the level: `very low` is 0, `very high` is 4.
    #[must_use]
    pub const fn ascending_weight(self) -> u8 {
        match self {
            Self::VeryLow => 0,
            Self::Low => 1,
            Self::Neutral => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }

    /// Weight shrinking with the level: `very low` is 4, `very high` is 0.
    #[must_use]
    pub const fn descending_weight(self) -> u8 {
        MAX_WEIGHT - self.ascending_weight()
    }
}

impl fmt::Display for PreferenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when parsing an unrecognised preference level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preference level '{0}' (expected very low, low, neutral, high or very high)")]
pub struct ParsePreferenceError(pub String);

impl FromStr for PreferenceLevel {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalised.as_str() {
            "very low" => Ok(Self::VeryLow),
            "low" => Ok(Self::Low),
            "neutral" => Ok(Self::Neutral),
            "high" => Ok(Self::High),
            "very high" => Ok(Self::VeryHigh),
            _ => Err(ParsePreferenceError(s.to_owned())),
        }
    }
}

/// Errors returned by [`ScoreWeights::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightError {
    /// A weight exceeded [`MAX_WEIGHT`].
    #[error("{signal} weight {value} exceeds the maximum of {MAX_WEIGHT}")]
    OutOfRange {
        /// Which signal carried the value.
        signal: &'static str,
        /// Rejected value.
        value: u8,
    },
}

/// Weights for the competition, popularity and satisfaction terms.
///
/// All three are integers in `0..=4`. An all-zero set is representable here
/// but rejected by the scorer, which cannot divide by a zero total.
///
/// # Examples
/// ```
/// use nextplate_core::{PreferenceLevel, ScoreWeights};
///
/// let weights = ScoreWeights::from_preferences(
///     PreferenceLevel::VeryLow,
///     PreferenceLevel::Neutral,
///     PreferenceLevel::High,
/// );
/// assert_eq!(weights.competition(), 4);
/// assert_eq!(weights.popularity(), 2);
/// assert_eq!(weights.satisfaction(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreWeights {
    competition: u8,
    popularity: u8,
    satisfaction: u8,
}

impl ScoreWeights {
    /// Validate and build a weight set.
    ///
    /// # Errors
    /// Returns [`WeightError::OutOfRange`] when any weight exceeds
    /// [`MAX_WEIGHT`].
    pub const fn new(competition: u8, popularity: u8, satisfaction: u8) -> Result<Self, WeightError> {
        if competition > MAX_WEIGHT {
            return Err(WeightError::OutOfRange {
                signal: "competition",
                value: competition,
            });
        }
        if popularity > MAX_WEIGHT {
            return Err(WeightError::OutOfRange {
                signal: "popularity",
                value: popularity,
            });
        }
        if satisfaction > MAX_WEIGHT {
            return Err(WeightError::OutOfRange {
                signal: "satisfaction",
                value: satisfaction,
            });
        }
        Ok(Self {
            competition,
            popularity,
            satisfaction,
        })
    }

    /// Translate user-facing preference levels into weights.
    ///
    /// `competitors` and `satisfaction` describe the level the caller *wants*
    /// to see in the area, so they map onto descending weights.
    #[must_use]
    pub const fn from_preferences(
        competitors: PreferenceLevel,
        popularity: PreferenceLevel,
        satisfaction: PreferenceLevel,
    ) -> Self {
        Self {
            competition: competitors.descending_weight(),
            popularity: popularity.ascending_weight(),
            satisfaction: satisfaction.descending_weight(),
        }
    }

    /// Competition-aversion weight.
    #[must_use]
    pub const fn competition(self) -> u8 {
        self.competition
    }

    /// Popularity-preference weight.
    #[must_use]
    pub const fn popularity(self) -> u8 {
        self.popularity
    }

    /// Satisfaction-preference weight.
    #[must_use]
    pub const fn satisfaction(self) -> u8 {
        self.satisfaction
    }

    /// Report whether every weight is zero, leaving nothing to score by.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.competition == 0 && self.popularity == 0 && self.satisfaction == 0
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::from_preferences(
            PreferenceLevel::Neutral,
            PreferenceLevel::Neutral,
            PreferenceLevel::Neutral,
        )
    }
}
