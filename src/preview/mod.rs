pub mod dom;
pub mod extract;
pub mod resolve;
pub mod types;
pub mod youtube;

pub use types::Preview;

use url::Url;

use crate::config::Config;
use crate::scrape::{self, ResourceKind};

/// Main entry point: classify the target, fetch and extract when it serves
/// HTML, and assemble the preview document. Never errors; every failure
/// along the way degrades to emptier fields.
pub fn scrape_content(url: &Url, config: &Config) -> Preview {
    let client = match scrape::build_client(&config.scrape) {
        Ok(client) => client,
        Err(err) => {
            log::error!("building http client failed: {err}");
            return Preview::empty(url.clone());
        }
    };

    match scrape::classify(&client, url) {
        (ResourceKind::Html, Some(canonical)) => {
            let extractor = extract::Extractor::new(&config.youtube_embed_prefix);

            let meta = match scrape::fetch_page(&client, &canonical) {
                Some(body) => {
                    let doc = dom::HtmlDocument::parse(&body);
                    extractor.extract(&doc, &canonical)
                }
                None => types::PageMetadata::default(),
            };

            Preview {
                link: canonical,
                title: meta.title,
                description: meta.description,
                image: meta.image,
                video: meta.video,
            }
        }

        (ResourceKind::Image, Some(canonical)) => Preview {
            link: canonical.clone(),
            title: Some(canonical.to_string()),
            description: None,
            image: Some(canonical),
            video: None,
        },

        _ => Preview::empty(url.clone()),
    }
}
