use scraper::{ElementRef, Html, Selector};

/// Read-only view of one markup element.
pub trait ElementView {
    /// Attribute lookup by (lowercase) name.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text content of the element.
    fn text(&self) -> String;
}

/// Tag-level query capability over a parsed document, in document order.
/// Keeps the extractor independent of the underlying parser.
pub trait DocumentQuery {
    fn elements(&self, tag: &str) -> Vec<Box<dyn ElementView + '_>>;
}

/// `scraper`-backed document. Parsing never fails; malformed markup yields
/// a partial tree and simply fewer matches.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }
}

impl DocumentQuery for HtmlDocument {
    fn elements(&self, tag: &str) -> Vec<Box<dyn ElementView + '_>> {
        let selector = match Selector::parse(tag) {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        self.html
            .select(&selector)
            .map(|element| Box::new(HtmlElement { element }) as Box<dyn ElementView + '_>)
            .collect()
    }
}

struct HtmlElement<'a> {
    element: ElementRef<'a>,
}

impl ElementView for HtmlElement<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.element.attr(name)
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }
}
