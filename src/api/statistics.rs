//! Word statistics API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::WordCount;
use crate::AppState;

/// GET /post/{id}/comments/statistics - Word counts for a post, highest first.
///
/// Always answers 200. An id that is not an integer matches nothing, and a
/// store failure is logged and reported as an empty list.
pub async fn get_post_statistics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<WordCount>> {
    let Ok(post_id) = id.parse::<i64>() else {
        tracing::debug!("Non-numeric post id {:?}, returning no statistics", id);
        return Json(Vec::new());
    };

    match state.repo.list_word_counts(post_id).await {
        Ok(word_counts) => Json(word_counts),
        Err(e) => {
            tracing::error!(post_id, "Failed to read statistics: {}", e);
            Json(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::db::{init_database, Repository};
    use crate::models::WordCount;
    use crate::{create_router, AppState};

    async fn test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", temp_dir.path().join("stats.sqlite").display());
        let pool = init_database(&url).await.unwrap();
        let state = AppState {
            repo: Arc::new(Repository::new(pool)),
        };
        (state, temp_dir)
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<WordCount>) {
        let response = create_router(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_post_is_empty_array() {
        let (state, _temp_dir) = test_state().await;

        let (status, body) = get(state, "/post/42/comments/statistics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_empty_array() {
        let (state, _temp_dir) = test_state().await;
        state.repo.upsert_word_count(1, "word", 1).await.unwrap();

        let (status, body) = get(state, "/post/abc/comments/statistics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_padded_id_is_not_normalised() {
        let (state, _temp_dir) = test_state().await;
        state.repo.upsert_word_count(1, "word", 1).await.unwrap();

        let (status, body) = get(state.clone(), "/post/%201/comments/statistics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = get(state, "/post/1/comments/statistics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 1);
    }

    #[tokio::test]
    async fn test_results_ordered_by_count() {
        let (state, _temp_dir) = test_state().await;
        state.repo.upsert_word_count(7, "low", 1).await.unwrap();
        state.repo.upsert_word_count(7, "high", 9).await.unwrap();
        state.repo.upsert_word_count(7, "mid", 4).await.unwrap();

        let (status, body) = get(state, "/post/7/comments/statistics").await;
        assert_eq!(status, StatusCode::OK);
        let words: Vec<_> = body.iter().map(|wc| wc.word.as_str()).collect();
        assert_eq!(words, vec!["high", "mid", "low"]);
        assert!(body.iter().all(|wc| wc.post_id == 7));
    }
}
