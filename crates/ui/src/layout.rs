//! Shared root layout and the home page.

use html_escape::{encode_double_quoted_attribute, encode_text};
use mdsite_core::{SearchLink, SiteConfig};

/// Root layout shared by every page.
///
/// Carries the document language, the site title, and the navigation links
/// surfaced in the header and the search dialog.
#[derive(Debug, Clone)]
pub struct RootLayout {
    /// `lang` attribute of the document element.
    pub lang: String,
    /// Site title used for the `<title>` element.
    pub title: String,
    /// Navigation links rendered in the header.
    pub search_links: Vec<SearchLink>,
}

impl RootLayout {
    /// Builds the layout from the site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            lang: config.lang.clone(),
            title: config.title.clone(),
            search_links: config.search_links.clone(),
        }
    }

    /// Wraps pre-rendered page content in the full HTML document.
    ///
    /// `children` is already-rendered HTML and passes through verbatim;
    /// the title, language, and link fields are escaped.
    pub fn render(&self, children: &str) -> String {
        let mut out = String::with_capacity(children.len() + 512);

        out.push_str("<!DOCTYPE html>");
        out.push_str(&format!(
            "<html lang=\"{}\">",
            encode_double_quoted_attribute(&self.lang)
        ));
        out.push_str("<head><meta charset=\"utf-8\"/>");
        out.push_str(&format!("<title>{}</title>", encode_text(&self.title)));
        out.push_str("</head>");
        out.push_str("<body style=\"display: flex; flex-direction: column; min-height: 100vh;\">");

        out.push_str("<nav>");
        for link in &self.search_links {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(&link.href),
                encode_text(&link.label)
            ));
        }
        out.push_str("</nav>");

        out.push_str(children);
        out.push_str("</body></html>");
        out
    }
}

impl Default for RootLayout {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Renders the centered hero of the home page.
pub fn home_page(title: &str) -> String {
    format!(
        "<main style=\"flex: 1; display: flex; flex-direction: column; text-align: center; justify-content: center;\">\
<h1 style=\"font-size: 2rem; font-weight: bold; margin-bottom: 1rem;\">{}</h1>\
</main>",
        encode_text(title)
    )
}
