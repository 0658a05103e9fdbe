//! Comment word statistics.
//!
//! One aggregation cycle fetches every post, fetches each post's comments,
//! counts whitespace-separated tokens and upserts the counts. Counts are
//! recomputed from scratch each cycle; rows for words that disappeared are
//! left in place.

mod scheduler;

pub use scheduler::*;

use std::collections::HashMap;
use std::sync::Arc;

use crate::db::Repository;
use crate::models::Comment;
use crate::upstream::ContentClient;

/// Count exact tokens across comment bodies, split on runs of whitespace.
///
/// Tokens are case-sensitive and keep their punctuation.
pub fn count_words(comments: &[Comment]) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for comment in comments {
        for word in comment.body.split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Outcome of one aggregation cycle, for logging.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Post list could not be fetched; nothing was written
    pub aborted: bool,
    pub posts_seen: usize,
    /// Posts whose comments could not be fetched
    pub posts_skipped: usize,
    pub rows_written: usize,
    pub write_failures: usize,
}

/// Runs aggregation cycles against an injected content client and store.
#[derive(Clone)]
pub struct Aggregator {
    source: ContentClient,
    repo: Arc<Repository>,
}

impl Aggregator {
    pub fn new(source: ContentClient, repo: Arc<Repository>) -> Self {
        Self { source, repo }
    }

    /// Run one full cycle. Failures are logged and counted, never returned.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut report = CycleReport::default();

        let posts = match self.source.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!("Skipping statistics cycle, post list unavailable: {}", e);
                report.aborted = true;
                return report;
            }
        };
        report.posts_seen = posts.len();

        for post in &posts {
            let comments = match self.source.fetch_comments(post.id).await {
                Ok(comments) => comments,
                Err(e) => {
                    tracing::warn!(post_id = post.id, "Skipping post, comments unavailable: {}", e);
                    report.posts_skipped += 1;
                    continue;
                }
            };

            for (word, count) in count_words(&comments) {
                match self.repo.upsert_word_count(post.id, &word, count).await {
                    Ok(()) => report.rows_written += 1,
                    Err(e) => {
                        tracing::warn!(post_id = post.id, word = %word, "Failed to store word count: {}", e);
                        report.write_failures += 1;
                    }
                }
            }
        }

        report
    }
}
