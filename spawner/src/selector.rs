//! Picks the biggest affordable template of a category.
//!
use crate::templates::Template;

/// Returns the template of `category` with the highest cost not exceeding `max_cost`.
///
/// Among templates sharing the highest qualifying cost the one appearing first in `catalog` wins.
/// Returns `None` if the category is unknown or nothing is affordable, including when `max_cost`
/// is zero or negative.
pub fn select_best<'a>(
    category: &str,
    max_cost: i64,
    catalog: &'a [Template],
) -> Option<&'a Template> {
    let mut best: Option<&'a Template> = None;
    for template in catalog
        .iter()
        .filter(|t| t.category() == category)
        .filter(|t| i64::from(t.cost()) <= max_cost)
    {
        match best {
            // strictly greater, so the earliest of equal costs is kept
            Some(b) if b.cost() >= template.cost() => {}
            _ => best = Some(template),
        }
    }
    best
}
