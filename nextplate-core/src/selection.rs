//! Caller selectors: district, macro-category and sub-category filters.
//!
//! Each selector either names a concrete value or is the `All` sentinel,
//! meaning the corresponding field is left unconstrained.

use std::fmt;

use crate::District;

/// Sentinel used by callers and data files for "no filter".
pub const ALL: &str = "All";

/// A filter that is either disabled or pinned to one value.
///
/// # Examples
/// ```
/// use nextplate_core::Selector;
///
/// assert!(Selector::parse("All").is_all());
/// assert_eq!(Selector::parse("Thai").as_option().map(String::as_str), Some("Thai"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector<T> {
    /// No filter on this field.
    #[default]
    All,
    /// Only rows whose field matches this value.
    Only(T),
}

impl<T> Selector<T> {
    /// Report whether the selector is the `All` sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Borrow the concrete value, if any.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    /// Transform the concrete value, keeping `All` untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selector<U> {
        match self {
            Self::All => Selector::All,
            Self::Only(value) => Selector::Only(f(value)),
        }
    }
}

impl Selector<String> {
    /// Parse raw input, mapping the `All` sentinel to [`Selector::All`].
    ///
    /// Surrounding whitespace is ignored; an empty string also means `All`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL {
            Self::All
        } else {
            Self::Only(trimmed.to_owned())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// The three selectors applied to one request.
///
/// # Examples
/// ```
/// use nextplate_core::{District, Selection};
///
/// let selection = Selection::all()
///     .with_district(District::new("Champel"))
///     .with_category("European")
///     .with_sub_category("Italian");
/// assert_eq!(selection.sub_category_label(), "italian");
/// assert!(selection.without_sub_category().sub_category.is_all());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// District filter (exact match).
    pub district: Selector<District>,
    /// Macro-category filter (exact match).
    pub category: Selector<String>,
    /// Sub-category filter (substring match on the category tag).
    pub sub_category: Selector<String>,
}

impl Selection {
    /// A selection with every filter disabled.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one district.
    #[must_use]
    pub fn with_district(mut self, district: District) -> Self {
        self.district = Selector::Only(district);
        self
    }

    /// Restrict to one macro-category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Selector::Only(category.into());
        self
    }

    /// Restrict to one sub-category.
    #[must_use]
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Selector::Only(sub_category.into());
        self
    }

    /// Copy of this selection with the sub-category filter disabled.
    #[must_use]
    pub fn without_sub_category(&self) -> Self {
        Self {
            district: self.district.clone(),
            category: self.category.clone(),
            sub_category: Selector::All,
        }
    }

    /// Lower-cased sub-category, or `all` when none is active.
    #[must_use]
    pub fn sub_category_label(&self) -> String {
        self.sub_category
            .as_option()
            .map_or_else(|| "all".to_owned(), |sub| sub.to_lowercase())
    }

    /// Report whether the selection spans every district.
    #[must_use]
    pub const fn is_city_wide(&self) -> bool {
        self.district.is_all()
    }
}

/// Errors raised when a selection names values the dataset does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The district is not part of the dataset's district table.
    #[error("unknown district '{0}'")]
    UnknownDistrict(String),
    /// The macro-category is not part of the taxonomy.
    #[error("unknown restaurant category '{0}'")]
    UnknownCategory(String),
    /// The sub-category does not belong to the selected macro-category.
    #[error("'{sub_category}' is not a sub-category of '{category}'")]
    UnknownSubCategory {
        /// Selected macro-category.
        category: String,
        /// Rejected sub-category.
        sub_category: String,
    },
    /// A sub-category was chosen while the macro-category is `All`.
    #[error("sub-category '{0}' requires a restaurant category")]
    SubCategoryWithoutCategory(String),
    /// The macro-category has no `All` sub-category option.
    #[error("category '{0}' requires an explicit sub-category")]
    SubCategoryRequired(String),
}
