use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct EverythingEnvelope {
    pub(crate) status: Option<String>,
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<ArticleNode>>,
    // Present when status == "error".
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) source: Option<SourceNode>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}
