//! Renderer-neutral map records.

use std::fmt;

use geo::{Point, Polygon};
use serde::Serialize;

use crate::band::{PriceBand, RatingBand, ReviewBand};

/// Marker or outline colour understood by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// Low or unfavourable values.
    Red,
    /// Middle values.
    Orange,
    /// High values on four-band scales.
    LightGreen,
    /// Highest or favourable values.
    Green,
}

/// Drawing hints attached to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    /// Stroke and fill colour; `None` uses the renderer's default marker.
    pub colour: Option<Colour>,
    /// Whether the shape is filled.
    pub filled: bool,
}

impl Style {
    /// Default pin marker.
    pub const MARKER: Self = Self {
        colour: None,
        filled: false,
    };

    /// Outlined circle in `colour`.
    #[must_use]
    pub const fn outline(colour: Colour) -> Self {
        Self {
            colour: Some(colour),
            filled: false,
        }
    }

    /// Filled shape in `colour`.
    #[must_use]
    pub const fn filled(colour: Colour) -> Self {
        Self {
            colour: Some(colour),
            filled: true,
        }
    }
}

/// Thematic layer and the group within it a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "theme", content = "group", rename_all = "snake_case")]
pub enum Layer {
    /// Every filtered restaurant as a pin.
    Overview,
    /// Restaurants grouped by price level.
    PriceLevel(PriceBand),
    /// Restaurants grouped by rating.
    ReviewScore(RatingBand),
    /// Restaurants grouped by review count.
    ReviewCount(ReviewBand),
    /// Outlines of the best clusters.
    BestLocations,
    /// Outlines of the worst clusters.
    WorstLocations,
}

impl Layer {
    /// Legend entry for the layer group.
    #[must_use]
    pub fn legend(self) -> String {
        match self {
            Self::Overview => "Restaurants".to_owned(),
            Self::PriceLevel(band) => band.to_string(),
            Self::ReviewScore(band) => band.to_string(),
            Self::ReviewCount(band) => band.to_string(),
            Self::BestLocations => "Best Locations".to_owned(),
            Self::WorstLocations => "Worst Locations".to_owned(),
        }
    }
}

/// Shape of a feature. Coordinates use `x = longitude`, `y = latitude`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGeometry {
    /// A single restaurant.
    Point(Point<f64>),
    /// A cluster outline.
    Polygon(Polygon<f64>),
}

/// One labelled line of a popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupRow {
    /// Field name.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// Popup text: a bold title followed by labelled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    /// Heading line.
    pub title: String,
    /// Body lines in display order.
    pub rows: Vec<PopupRow>,
}

impl Popup {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn row(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.rows.push(PopupRow {
            label,
            value: value.into(),
        });
        self
    }

    /// Look up a row value by label.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for row in &self.rows {
            write!(f, "\n{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

/// A record handed to the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFeature {
    /// Layer the feature is drawn on.
    pub layer: Layer,
    /// Point or outline.
    pub geometry: FeatureGeometry,
    /// Drawing hints.
    pub style: Style,
    /// Text shown when the feature is selected.
    pub popup: Popup,
}
