//! Article Data Types
//!
//! The records kept by the in-memory article store and passed to the views.

/// A posted article with its flat reply thread.
///
/// The title is the article's key: uploading under an existing title replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub content: String,
    /// Replies in the order they were posted.
    pub replies: Vec<Reply>,
}

impl Article {
    pub fn new(title: String, author: String, content: String) -> Self {
        Self {
            title,
            author,
            content,
            replies: Vec::new(),
        }
    }

    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }
}

/// One entry in an article's thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub from_name: String,
    pub content: String,
    /// Empty when the reply addresses the article itself.
    pub to_name: String,
    /// Set iff `to_name` is empty.
    pub is_first: bool,
}

impl Reply {
    pub fn new(from_name: String, to_name: String, content: String) -> Self {
        let is_first = to_name.is_empty();
        Self {
            from_name,
            content,
            to_name,
            is_first,
        }
    }
}

/// Home listing entry. Kept apart from the article map, so a re-uploaded
/// title shows up once per upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleInfo {
    pub title: String,
    pub author: String,
}
