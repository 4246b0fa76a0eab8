//! Graph-type ordering and file-name slugs.

use std::collections::BTreeSet;

/// Graph types the benchmark produces, in report order.
pub const CANONICAL_CATEGORIES: [&str; 3] = ["Dünn", "Dicht", "Unit-Cap"];

/// Order distinct labels: canonical labels that occur first (in canonical
/// order), then every other label sorted.
#[must_use]
pub fn order_categories<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = labels.into_iter().collect();

    let mut ordered: Vec<String> = CANONICAL_CATEGORIES
        .iter()
        .filter(|c| distinct.contains(*c))
        .map(|c| (*c).to_string())
        .collect();

    ordered.extend(
        distinct
            .into_iter()
            .filter(|label| !CANONICAL_CATEGORIES.contains(label))
            .map(str::to_string),
    );
    ordered
}

/// File-name token for a category label.
///
/// Trims, lowercases, transliterates German umlauts and `ß`, then drops
/// hyphens and spaces. Distinct labels may map to the same slug.
#[must_use]
pub fn slug(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            'ü' => out.push_str("ue"),
            'ö' => out.push_str("oe"),
            'ä' => out.push_str("ae"),
            'ß' => out.push_str("ss"),
            '-' | ' ' => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
