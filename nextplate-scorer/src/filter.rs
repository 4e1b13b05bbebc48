//! Filter engine: apply district and category selectors to restaurants.
//!
//! District and macro-category filters are exact matches. The sub-category
//! filter is a case-sensitive substring search over the free-text category
//! tag. A selector set to `All` leaves its field unconstrained.

use nextplate_core::{Restaurant, Selection, Selector};

/// Report whether `restaurant` satisfies every active selector.
#[must_use]
pub fn matches_selection(restaurant: &Restaurant, selection: &Selection) -> bool {
    let district_ok = match &selection.district {
        Selector::All => true,
        Selector::Only(district) => &restaurant.district == district,
    };
    let category_ok = match &selection.category {
        Selector::All => true,
        Selector::Only(category) => &restaurant.macro_category == category,
    };
    let sub_category_ok = match &selection.sub_category {
        Selector::All => true,
        Selector::Only(sub_category) => restaurant.matches_sub_category(sub_category),
    };
    district_ok && category_ok && sub_category_ok
}

/// Return the restaurants satisfying `selection`, in source order.
///
/// The result is a dense vector, so positions are contiguous from zero. A
/// selector value that matches nothing yields an empty vector.
pub fn filter_restaurants<'a, I>(restaurants: I, selection: &Selection) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| matches_selection(restaurant, selection))
        .collect()
}
