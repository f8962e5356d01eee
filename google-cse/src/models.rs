use std::collections::HashMap;

use serde::Deserialize;

/// Response from the Custom Search JSON API. `items` is absent entirely
/// when the engine has no matches.
#[derive(Debug, Deserialize)]
pub struct CseResponse {
    #[serde(default)]
    pub items: Vec<WebItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub pagemap: Option<PageMap>,
}

/// Structured page metadata. Metatags are free-form key/value maps, one
/// entry per tag block on the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMap {
    #[serde(default)]
    pub metatags: Vec<HashMap<String, String>>,
}

impl WebItem {
    /// The page's declared `og:type`, read from the first metatag block.
    pub fn og_type(&self) -> Option<&str> {
        self.pagemap
            .as_ref()?
            .metatags
            .first()?
            .get("og:type")
            .map(String::as_str)
    }
}
