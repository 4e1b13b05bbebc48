//! Banding of restaurant attributes for the thematic layers.
//!
//! Bands are half-open intervals, so every value falls into exactly one.

use std::fmt;

use nextplate_core::PriceLevel;
use serde::Serialize;

use crate::feature::Colour;

/// Price groups drawn on the price-level layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    /// Levels 1 and 2.
    Cheap,
    /// Level 3.
    Medium,
    /// Level 4.
    Expensive,
}

impl PriceBand {
    /// Band for a price level. Restaurants without a level are not banded.
    #[must_use]
    pub const fn classify(level: Option<PriceLevel>) -> Option<Self> {
        match level {
            None => None,
            Some(PriceLevel::Inexpensive | PriceLevel::Cheap) => Some(Self::Cheap),
            Some(PriceLevel::Medium) => Some(Self::Medium),
            Some(PriceLevel::Expensive) => Some(Self::Expensive),
        }
    }

    /// Marker colour.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Cheap => Colour::Green,
            Self::Medium => Colour::Orange,
            Self::Expensive => Colour::Red,
        }
    }
}

/// Rating groups drawn on the review-score layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    /// Below 4.0.
    Low,
    /// From 4.0 up to but excluding 4.5.
    Average,
    /// 4.5 and above.
    High,
}

impl RatingBand {
    /// Band for a mean rating.
    #[must_use]
    pub fn classify(rating: f64) -> Self {
        if rating < 4.0 {
            Self::Low
        } else if rating < 4.5 {
            Self::Average
        } else {
            Self::High
        }
    }

    /// Marker colour.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Low => Colour::Red,
            Self::Average => Colour::Orange,
            Self::High => Colour::Green,
        }
    }
}

/// Review-count groups drawn on the review-count layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewBand {
    /// Fewer than 50 reviews.
    Low,
    /// 50 to 149 reviews.
    Average,
    /// 150 to 249 reviews.
    High,
    /// 250 reviews or more.
    VeryHigh,
}

impl ReviewBand {
    /// Band for a review count.
    #[must_use]
    pub const fn classify(reviews: u32) -> Self {
        match reviews {
            0..50 => Self::Low,
            50..150 => Self::Average,
            150..250 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Marker colour.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Low => Colour::Red,
            Self::Average => Colour::Orange,
            Self::High => Colour::LightGreen,
            Self::VeryHigh => Colour::Green,
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cheap => "Cheap",
            Self::Medium => "Medium",
            Self::Expensive => "Expensive",
        })
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
        })
    }
}

impl fmt::Display for ReviewBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        })
    }
}
