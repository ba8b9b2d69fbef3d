use serde::{Deserialize, Serialize};

/// One page of the upstream people collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<RawRecord>,
}

impl RawPage {
    /// An absent, null or empty `next` reference ends the walk.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.trim().is_empty())
    }
}

/// One upstream person exactly as the source delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub height: String,
    /// Absent or `null` upstream decodes to `None`.
    #[serde(default)]
    pub birth_year: Option<String>,
    pub url: String,
}

/// The local shape served to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPerson {
    pub id: String,
    pub name: String,
    pub height: String,
    #[serde(default)]
    pub birth_year: String,
}
