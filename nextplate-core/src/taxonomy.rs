//! Static macro-category to sub-category mapping.
//!
//! The taxonomy drives which sub-categories are selectable once a
//! macro-category is chosen. Some macro-categories are single-cuisine and
//! expose only themselves as a sub-category, without an `All` option.

use crate::{SelectionError, Selector};

/// One macro-category and the sub-categories it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    category: String,
    sub_categories: Vec<String>,
    offers_all: bool,
}

impl TaxonomyEntry {
    /// Macro-category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Selectable sub-categories, excluding the `All` sentinel.
    #[must_use]
    pub fn sub_categories(&self) -> &[String] {
        &self.sub_categories
    }

    /// Whether `All` may be picked as the sub-category.
    #[must_use]
    pub const fn offers_all(&self) -> bool {
        self.offers_all
    }
}

/// Mapping from macro-categories to their sub-categories.
///
/// # Examples
/// ```
/// use nextplate_core::{Selector, Taxonomy};
///
/// let taxonomy = Taxonomy::geneva();
/// let category = Selector::Only("Asian".to_owned());
/// assert!(taxonomy.validate(&category, &Selector::Only("Thai".to_owned())).is_ok());
/// assert!(taxonomy.validate(&category, &Selector::Only("Pizza".to_owned())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Create an empty taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a macro-category whose sub-categories may also be left at `All`.
    #[must_use]
    pub fn with_category(mut self, category: &str, sub_categories: &[&str]) -> Self {
        self.push(category, sub_categories, true);
        self
    }

    /// Add a single-cuisine macro-category whose only sub-category is itself.
    #[must_use]
    pub fn with_single_cuisine(mut self, category: &str) -> Self {
        self.push(category, &[category], false);
        self
    }

    fn push(&mut self, category: &str, sub_categories: &[&str], offers_all: bool) {
        self.entries.push(TaxonomyEntry {
            category: category.to_owned(),
            sub_categories: sub_categories.iter().map(|&sub| sub.to_owned()).collect(),
            offers_all,
        });
    }

    /// The taxonomy used by the Geneva restaurant dataset.
    #[must_use]
    pub fn geneva() -> Self {
        Self::new()
            .with_category(
                "European",
                &["French", "Italian", "Swiss", "Portuguese", "Spanish"],
            )
            .with_category(
                "Asian",
                &["Japanese", "Chinese", "Thai", "Indian", "Other Asian"],
            )
            .with_category(
                "Middle Eastern & African",
                &["Lebanese", "Turkish", "Other Middle Eastern", "African"],
            )
            .with_category(
                "American",
                &["American", "South American", "Mexican", "Hawaiian"],
            )
            .with_category(
                "General",
                &["Restaurant", "Bar / Pub / Bistro", "Café"],
            )
            .with_category(
                "Fast Food",
                &["Pizza", "Hamburger", "Chicken", "Snacks / Take Away"],
            )
            .with_single_cuisine("Steakhouse / Barbecue / Grill")
            .with_single_cuisine("Seafood")
            .with_single_cuisine("Vegan / Vegetarian / Salad")
            .with_single_cuisine("All Other")
    }

    /// Iterate over all macro-categories in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.iter()
    }

    /// Look up a macro-category.
    #[must_use]
    pub fn entry(&self, category: &str) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    /// Check a macro-category/sub-category pair against the taxonomy.
    ///
    /// # Errors
    /// Returns [`SelectionError`] when the macro-category is unknown, the
    /// sub-category does not belong to it, a sub-category is chosen without a
    /// macro-category, or `All` is chosen where the macro-category does not
    /// offer it.
    pub fn validate(
        &self,
        category: &Selector<String>,
        sub_category: &Selector<String>,
    ) -> Result<(), SelectionError> {
        match (category, sub_category) {
            (Selector::All, Selector::All) => Ok(()),
            (Selector::All, Selector::Only(sub)) => {
                Err(SelectionError::SubCategoryWithoutCategory(sub.clone()))
            }
            (Selector::Only(name), sub) => {
                let entry = self
                    .entry(name)
                    .ok_or_else(|| SelectionError::UnknownCategory(name.clone()))?;
                match sub {
                    Selector::All if entry.offers_all => Ok(()),
                    Selector::All => Err(SelectionError::SubCategoryRequired(name.clone())),
                    Selector::Only(sub) if entry.sub_categories.contains(sub) => Ok(()),
                    Selector::Only(sub) => Err(SelectionError::UnknownSubCategory {
                        category: name.clone(),
                        sub_category: sub.clone(),
                    }),
                }
            }
        }
    }
}
