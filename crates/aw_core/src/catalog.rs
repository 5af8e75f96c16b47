use crate::types::Article;

/// Read-only view over the article corpus. The feed engine and chat
/// responder only ever read through this seam, so a shared catalog is safe
/// to use from any number of concurrent requests.
pub trait ArticleProvider: Send + Sync {
    /// All articles, raw and non-deduplicated, in seed order.
    fn all(&self) -> &[Article];

    /// Lookup against the raw collection.
    fn by_id(&self, id: &str) -> Option<&Article> {
        self.all().iter().find(|article| article.id == id)
    }

    /// Resolves ids in input order, silently dropping unknown ones.
    fn by_ids(&self, ids: &[String]) -> Vec<&Article> {
        ids.iter().filter_map(|id| self.by_id(id)).collect()
    }
}

/// In-memory catalog seeded once at startup.
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Catalog pre-loaded with the bundled AI news corpus, with publish
    /// times anchored to the current instant.
    pub fn seeded() -> Self {
        Self::new(crate::data::seed_articles(chrono::Utc::now()))
    }

    /// Loads an injected corpus from a JSON array of articles.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(Self::new(articles))
    }
}

impl ArticleProvider for ArticleCatalog {
    fn all(&self) -> &[Article] {
        &self.articles
    }
}
