use serde::{Deserialize, Serialize};

/// Occurrences of one exact token across all comments of a post.
///
/// `(post_id, word)` is the natural key in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCount {
    pub post_id: i64,
    pub word: String,
    pub count: i64,
}
