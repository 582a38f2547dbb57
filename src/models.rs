//! Country record types parsed from the REST Countries payload.
//!
//! The API returns a JSON array of country objects; only the fields the UI
//! needs are modeled here, unknown fields are ignored. Some territories come
//! back without a `capital` array or `subregion`, so those fields are
//! default-tolerant.

use serde::{Deserialize, Deserializer, Serialize};

/// Name block of a country object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// The common, everyday name ("France").
    pub common: String,
    /// The official long form ("French Republic"); some entries omit it.
    #[serde(default)]
    pub official: String,
}

/// Flag image references for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    /// SVG flag URI.
    pub svg: String,
    /// PNG flag URI, when the API provides one.
    #[serde(default)]
    pub png: String,
    /// Alt text describing the flag.
    #[serde(default)]
    pub alt: Option<String>,
}

/// One element of the fetched dataset describing a single country.
///
/// Immutable once parsed; the working set references records by index and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub flags: Flags,
    #[serde(default)]
    pub population: u64,
    pub region: String,
    /// Finer-grained region ("Western Europe"); absent or null for a few
    /// territories (Antarctica).
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub subregion: String,
    /// Capitals; absent or empty for some territories.
    #[serde(default)]
    pub capital: Vec<String>,
}

impl Country {
    /// The first listed capital, if the country has one.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(|s| s.as_str())
    }
}

/// Helper to deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Format a population count with en-IN digit grouping: the last three
/// digits form one group, everything above groups in twos ("13,27,167").
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
