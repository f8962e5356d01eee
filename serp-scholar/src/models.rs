use serde::Deserialize;
use serde_json::Value;

/// Envelope of a Google Scholar search via SerpApi. `organic_results`
/// being absent is meaningful to callers, so it stays an Option here.
#[derive(Debug, Deserialize)]
pub struct ScholarResponse {
    pub organic_results: Option<Vec<OrganicResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    /// Authors/venue/year block, passed through untyped.
    pub publication_info: Option<Value>,
    pub inline_links: Option<InlineLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineLinks {
    pub cited_by: Option<CitedBy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CitedBy {
    pub total: Option<u64>,
}

impl OrganicResult {
    /// Citation count, 0 when the cited-by block is absent.
    pub fn citations(&self) -> u64 {
        self.inline_links
            .as_ref()
            .and_then(|links| links.cited_by.as_ref())
            .and_then(|cited| cited.total)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_organic_results() {
        let json = r#"{
            "search_metadata": { "status": "Success" },
            "organic_results": [
                {
                    "title": "CNFET circuit design",
                    "link": "https://scholar.example/paper",
                    "snippet": "We present...",
                    "publication_info": { "summary": "A Author - Journal, 2019" },
                    "inline_links": { "cited_by": { "total": 42 } }
                },
                {
                    "title": "Uncited manuscript",
                    "snippet": "Preprint"
                }
            ]
        }"#;

        let response: ScholarResponse = serde_json::from_str(json).unwrap();
        let results = response.organic_results.unwrap();
        assert_eq!(results[0].citations(), 42);
        assert_eq!(results[1].citations(), 0);
        assert_eq!(results[1].link, "");
        assert!(results[0].publication_info.is_some());
    }

    #[test]
    fn absent_organic_results_stays_none() {
        let response: ScholarResponse =
            serde_json::from_str(r#"{ "error": "Google Scholar hasn't returned any results" }"#)
                .unwrap();
        assert!(response.organic_results.is_none());
    }

    #[test]
    fn cited_by_without_total_counts_zero() {
        let result: OrganicResult = serde_json::from_str(
            r#"{ "title": "t", "inline_links": { "cited_by": {} } }"#,
        )
        .unwrap();
        assert_eq!(result.citations(), 0);
    }
}
