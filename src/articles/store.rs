use dashmap::DashMap;
use tokio::sync::RwLock;

use super::types::{Article, Reply, TitleInfo};
use crate::error::ForumError;

/// In-memory article map plus the home-page title listing.
///
/// Both are only reachable through the methods below. Replies are appended in
/// place under the map's shard lock.
pub struct ArticleStore {
    articles: DashMap<String, Article>,
    titles: RwLock<Vec<TitleInfo>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self {
            articles: DashMap::new(),
            titles: RwLock::new(Vec::new()),
        }
    }

    /// Stores `article` under its title, replacing any previous one, and
    /// appends a listing entry. Returns the replaced article, if any.
    pub async fn publish(&self, article: Article) -> Option<Article> {
        let info = TitleInfo {
            title: article.title.clone(),
            author: article.author.clone(),
        };

        let replaced = self.articles.insert(article.title.clone(), article);
        if replaced.is_some() {
            tracing::warn!("Article '{}' overwritten by a new upload", info.title);
        }

        self.titles.write().await.push(info);
        replaced
    }

    pub fn get(&self, title: &str) -> Option<Article> {
        self.articles.get(title).map(|entry| entry.value().clone())
    }

    /// Appends `reply` to the thread of `title`.
    pub fn append_reply(&self, title: &str, reply: Reply) -> Result<usize, ForumError> {
        let mut article = self
            .articles
            .get_mut(title)
            .ok_or_else(|| ForumError::NotFound(title.to_string()))?;

        article.replies.push(reply);
        Ok(article.replies.len())
    }

    /// Snapshot of the listing in upload order.
    pub async fn titles(&self) -> Vec<TitleInfo> {
        self.titles.read().await.clone()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}
