use serde::{Deserialize, Serialize};
use url::Url;

/// The normalized link-preview document returned to the caller.
///
/// Wire field names are capitalized; `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Preview {
    pub link: Url,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Url>,
    pub video: Option<Url>,
}

impl Preview {
    pub fn empty(link: Url) -> Self {
        Self {
            link,
            title: None,
            description: None,
            image: None,
            video: None,
        }
    }
}

/// Preview field a candidate feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Image,
    Video,
}

/// Where in the markup a candidate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    TitleTag,
    ImageSrcLink,
    OpenGraph,
    TwitterCard,
    EmbedIframe,
}

/// A (field, value) pair pulled from a single markup element. Transient;
/// consumed by precedence resolution.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub field: Field,
    pub source: Source,
    pub value: String,
}

/// Extractor output. Urls are already resolved against the canonical base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Url>,
    pub video: Option<Url>,
}

impl PageMetadata {
    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title.is_some(),
            Field::Description => self.description.is_some(),
            Field::Image => self.image.is_some(),
            Field::Video => self.video.is_some(),
        }
    }
}
