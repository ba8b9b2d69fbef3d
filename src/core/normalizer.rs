use crate::domain::model::{NormalizedPerson, RawRecord};

/// Returns the last path segment of a self-URL, ignoring one trailing slash.
///
/// `https://swapi.dev/api/people/11/` and `https://swapi.dev/api/people/11`
/// both yield `"11"`. A URL without any slash is returned whole.
pub fn extract_id(self_url: &str) -> &str {
    let trimmed = self_url.strip_suffix('/').unwrap_or(self_url);
    match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Maps an upstream record into the local shape, deriving the id from its self-URL.
pub fn normalize(raw: RawRecord) -> NormalizedPerson {
    let id = extract_id(&raw.url).to_string();
    normalize_with_id(raw, id)
}

/// Same mapping, with the id supplied by the caller.
pub fn normalize_with_id(raw: RawRecord, id: String) -> NormalizedPerson {
    NormalizedPerson {
        id,
        name: raw.name,
        height: raw.height,
        birth_year: raw.birth_year.unwrap_or_default(),
    }
}
