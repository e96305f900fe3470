use url::Url;

use crate::preview::dom::DocumentQuery;
use crate::preview::resolve::resolve_reference;
use crate::preview::types::{Candidate, Field, PageMetadata, Source};
use crate::preview::youtube::YoutubeNormalizer;

/// One step of the extraction precedence. Sources are visited in table
/// order; a non-overriding source only fills fields that are still empty,
/// an overriding source replaces earlier values whenever it has a
/// non-empty candidate of its own.
struct PrecedenceRule {
    source: Source,
    overrides: bool,
}

const PRECEDENCE: &[PrecedenceRule] = &[
    PrecedenceRule {
        source: Source::TitleTag,
        overrides: false,
    },
    PrecedenceRule {
        source: Source::ImageSrcLink,
        overrides: false,
    },
    PrecedenceRule {
        source: Source::OpenGraph,
        overrides: true,
    },
    PrecedenceRule {
        source: Source::TwitterCard,
        overrides: false,
    },
    PrecedenceRule {
        source: Source::EmbedIframe,
        overrides: false,
    },
];

const FIELDS: [Field; 4] = [Field::Title, Field::Description, Field::Image, Field::Video];

pub struct Extractor {
    youtube: YoutubeNormalizer,
    embed_prefix_lower: String,
}

impl Extractor {
    pub fn new(embed_prefix: &str) -> Self {
        Self {
            youtube: YoutubeNormalizer::new(embed_prefix),
            embed_prefix_lower: embed_prefix.to_lowercase(),
        }
    }

    /// Collects candidates in a single pass over the document, then runs
    /// precedence resolution. Absent elements yield `None` fields.
    pub fn extract(&self, doc: &dyn DocumentQuery, base: &Url) -> PageMetadata {
        let candidates = self.collect_candidates(doc);
        self.apply_precedence(&candidates, base)
    }

    fn collect_candidates(&self, doc: &dyn DocumentQuery) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if let Some(title) = doc.elements("title").first() {
            candidates.push(Candidate {
                field: Field::Title,
                source: Source::TitleTag,
                value: title.text().trim().to_string(),
            });
        }

        for link in doc.elements("link") {
            let rel = link.attr("rel").unwrap_or_default().to_lowercase();
            if !rel.starts_with("image_src") {
                continue;
            }
            if let Some(href) = link.attr("href") {
                candidates.push(Candidate {
                    field: Field::Image,
                    source: Source::ImageSrcLink,
                    value: href.to_string(),
                });
                break;
            }
        }

        for meta in doc.elements("meta") {
            let property = meta.attr("property").unwrap_or_default().to_lowercase();
            let (source, field) = match property.as_str() {
                "og:title" => (Source::OpenGraph, Field::Title),
                "og:description" => (Source::OpenGraph, Field::Description),
                "og:image" => (Source::OpenGraph, Field::Image),
                "og:video" => (Source::OpenGraph, Field::Video),
                "twitter:title" => (Source::TwitterCard, Field::Title),
                "twitter:description" => (Source::TwitterCard, Field::Description),
                "twitter:image" => (Source::TwitterCard, Field::Image),
                "twitter:player" => (Source::TwitterCard, Field::Video),
                _ => continue,
            };

            // content may live in either attribute
            let value = meta
                .attr("content")
                .or_else(|| meta.attr("value"))
                .unwrap_or_default();

            candidates.push(Candidate {
                field,
                source,
                value: value.to_string(),
            });
        }

        for iframe in doc.elements("iframe") {
            let src = iframe.attr("src").unwrap_or_default();
            if src.to_lowercase().starts_with(&self.embed_prefix_lower) {
                candidates.push(Candidate {
                    field: Field::Video,
                    source: Source::EmbedIframe,
                    value: src.to_string(),
                });
            }
        }

        candidates
    }

    fn apply_precedence(&self, candidates: &[Candidate], base: &Url) -> PageMetadata {
        let mut meta = PageMetadata::default();

        for rule in PRECEDENCE {
            for field in FIELDS {
                let candidate = candidates
                    .iter()
                    .find(|c| c.source == rule.source && c.field == field && !c.value.is_empty());
                let Some(candidate) = candidate else { continue };

                if !rule.overrides && meta.is_set(field) {
                    continue;
                }

                match field {
                    Field::Title => meta.title = Some(candidate.value.trim().to_string()),
                    Field::Description => meta.description = Some(candidate.value.clone()),
                    // unresolvable references count as absent: the earlier
                    // value survives even under an overriding source
                    Field::Image => {
                        if let Some(image) = resolve_reference(base, &candidate.value) {
                            meta.image = Some(image);
                        }
                    }
                    Field::Video => {
                        if let Some(video) = self.resolve_video(candidate, base) {
                            meta.video = Some(video);
                        }
                    }
                }
            }
        }

        meta
    }

    fn resolve_video(&self, candidate: &Candidate, base: &Url) -> Option<Url> {
        match candidate.source {
            // iframe srcs already carry the canonical embed prefix
            Source::EmbedIframe => Url::parse(&candidate.value).ok(),
            _ => resolve_reference(base, &candidate.value).map(|video| self.youtube.normalize(video)),
        }
    }
}
