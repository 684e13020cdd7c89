use serde::{Deserialize, Deserializer, Serialize};

pub const EMPTY_PAGE_TITLE: &str = "[No books on this page]";

/// A single record from the upstream catalog.
///
/// Field names on the wire follow the catalog's own document keys, which is
/// also the shape clients of `/search` receive. Upstream records are often
/// partial, so every field falls back to its empty value whether it is
/// absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "author_name", default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(
        rename = "first_publish_year",
        default,
        deserialize_with = "null_as_default"
    )]
    pub release_year: i32,
    #[serde(rename = "language", default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Placeholder returned in place of a page that lies past the last result.
    pub fn empty_page() -> Self {
        Self {
            title: EMPTY_PAGE_TITLE.to_string(),
            authors: vec!["N/A".to_string()],
            release_year: 0,
            languages: vec!["N/A".to_string()],
        }
    }
}
