//! Working-set derivation.
//!
//! Search, region filter, and sort are one pipeline: the full dataset is
//! filtered by the combined predicate, then ordered. Every change to the
//! [`ViewQuery`] recomputes the working set wholesale from the authoritative
//! dataset; nothing is mutated in place, so the fetch order survives as
//! [`SortMode::Original`] for the lifetime of the process.

use crate::models::Country;

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Fetch order, untouched.
    #[default]
    Original,
    /// Ascending by common name, case-insensitive.
    NameAscending,
    /// Descending by common name, case-insensitive.
    NameDescending,
}

impl SortMode {
    /// Cycle to the next mode (original -> a-z -> z-a -> original).
    pub fn next(self) -> Self {
        match self {
            SortMode::Original => SortMode::NameAscending,
            SortMode::NameAscending => SortMode::NameDescending,
            SortMode::NameDescending => SortMode::Original,
        }
    }

    /// Short label for the controls line.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Original => "fetch order",
            SortMode::NameAscending => "a-z",
            SortMode::NameDescending => "z-a",
        }
    }
}

/// The current search/region/sort selection.
///
/// The working set is a pure function of the dataset and this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against the common name; empty
    /// matches everything.
    pub search: String,
    /// Exact, case-sensitive region to keep; `None` keeps everything.
    pub region: Option<String>,
    pub sort: SortMode,
}

impl ViewQuery {
    /// Combined search + region predicate for a single record.
    pub fn matches(&self, country: &Country) -> bool {
        if let Some(region) = &self.region {
            if country.region != *region {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }

        country
            .name
            .common
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Case-insensitive name comparison used by the sort modes.
fn compare_names(a: &Country, b: &Country) -> std::cmp::Ordering {
    a.name
        .common
        .to_lowercase()
        .cmp(&b.name.common.to_lowercase())
}

/// Derive the working set: indices into `countries`, filtered by the query's
/// predicate and ordered by its sort mode.
///
/// The result is always a subset of the dataset's indices, and for
/// [`SortMode::Original`] preserves their relative order.
pub fn derive_working_set(countries: &[Country], query: &ViewQuery) -> Vec<usize> {
    let mut indices: Vec<usize> = countries
        .iter()
        .enumerate()
        .filter(|(_, c)| query.matches(c))
        .map(|(i, _)| i)
        .collect();

    match query.sort {
        SortMode::Original => {}
        SortMode::NameAscending => {
            indices.sort_by(|&a, &b| compare_names(&countries[a], &countries[b]));
        }
        SortMode::NameDescending => {
            indices.sort_by(|&a, &b| compare_names(&countries[b], &countries[a]));
        }
    }

    indices
}

/// Distinct regions present in the dataset, sorted, for the region selector.
pub fn region_options(countries: &[Country]) -> Vec<String> {
    let mut regions: Vec<String> = countries.iter().map(|c| c.region.clone()).collect();
    regions.sort();
    regions.dedup();
    regions
}
