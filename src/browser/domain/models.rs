use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical catalog entry. Every record coming off the wire is normalized
/// into this shape before anything else looks at it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub title_english: String,
    pub image_url: String,
}

impl MediaItem {
    pub fn new(id: &str, title: &str, title_english: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            title_english: title_english.to_string(),
            image_url: image_url.to_string(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    pub fn has_english_title(&self) -> bool {
        !self.title_english.is_empty()
    }
}

/// Record as served by the listing and search endpoints. The service mixes
/// lower-case and Go-style capitalized keys, so every variant is captured and
/// resolved once in `From<RawMediaRecord> for MediaItem`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawMediaRecord {
    #[serde(default, rename = "_id")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "Title")]
    pub title_upper: Option<String>,
    #[serde(default, rename = "titleEnglish")]
    pub title_english: Option<String>,
    #[serde(default, rename = "TitleEnglish")]
    pub title_english_upper: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "Image")]
    pub image_upper: Option<String>,
}

fn first_non_empty(candidates: [Option<String>; 2]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

impl From<RawMediaRecord> for MediaItem {
    fn from(raw: RawMediaRecord) -> Self {
        Self {
            id: first_non_empty([raw.object_id, raw.id]),
            title: first_non_empty([raw.title, raw.title_upper]),
            title_english: first_non_empty([raw.title_english, raw.title_english_upper]),
            image_url: first_non_empty([raw.image, raw.image_upper]),
        }
    }
}

pub fn normalize_records(records: Vec<RawMediaRecord>) -> Vec<MediaItem> {
    records.into_iter().map(MediaItem::from).collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusLabel {
    Ready,
    Searching,
    SearchApi,
    SearchLocalFallback,
    Selected,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusLabel::Ready => "READY",
            StatusLabel::Searching => "SEARCHING",
            StatusLabel::SearchApi => "SEARCH (API)",
            StatusLabel::SearchLocalFallback => "SEARCH (local fallback)",
            StatusLabel::Selected => "SELECTED",
        };
        f.write_str(label)
    }
}

/// Paths of one catalog family on the service.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CatalogEndpoints {
    pub list_path: &'static str,
    pub search_path: &'static str,
    /// Contains a single `{id}` placeholder.
    pub detail_template: &'static str,
}

impl CatalogEndpoints {
    pub fn detail_path(&self, id: &str) -> String {
        self.detail_template.replace("{id}", id)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogKind {
    Movies,
    Shows,
}

impl CatalogKind {
    pub fn endpoints(&self) -> CatalogEndpoints {
        match self {
            CatalogKind::Movies => CatalogEndpoints {
                list_path: "/api/movie-images",
                search_path: "/api/search",
                detail_template: "/api/movie/{id}",
            },
            CatalogKind::Shows => CatalogEndpoints {
                list_path: "/api/shows/images",
                search_path: "/api/search-shows",
                detail_template: "/api/show/{id}",
            },
        }
    }

    /// Plural noun used in the status bar counter, e.g. `MOVIES: 120`.
    pub fn counter_label(&self) -> &'static str {
        match self {
            CatalogKind::Movies => "MOVIES",
            CatalogKind::Shows => "SHOWS",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            CatalogKind::Movies => "movies",
            CatalogKind::Shows => "shows",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Search,
    Grid,
}

/// One debounced search pass. Only the session with the latest `id` may
/// update the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSession {
    pub id: u64,
    pub query: String,
    pub local_results: Vec<MediaItem>,
    pub remote_pending: bool,
}

// Worker protocol
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Remote(Vec<MediaItem>),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub outcome: SearchOutcome,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WorkerRequest {
    LoadCatalog,
    Search(SearchRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub enum WorkerResponse {
    CatalogLoaded(Vec<MediaItem>),
    CatalogLoadFailed(String),
    Search(SearchResponse),
}
