use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ChannelSearchResult, LiveSearchResult, SearchOptions, VideoSearchResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    keyword: String,
    size: Option<u32>,
    offset: Option<u32>,
}

impl SearchQuery {
    /// Pagination from the query string; missing values fall back to the defaults
    fn options(&self) -> Option<SearchOptions> {
        if self.size.is_none() && self.offset.is_none() {
            return None;
        }

        let defaults = SearchOptions::default();
        Some(SearchOptions {
            size: self.size.unwrap_or(defaults.size),
            offset: self.offset.unwrap_or(defaults.offset),
        })
    }
}

/// Handler for video search endpoint
pub async fn videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<VideoSearchResult>> {
    let result = state.search.videos(&params.keyword, params.options()).await?;
    Ok(Json(result))
}

/// Handler for live search endpoint
pub async fn lives(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<LiveSearchResult>> {
    let result = state.search.lives(&params.keyword, params.options()).await?;
    Ok(Json(result))
}

/// Handler for channel search endpoint
pub async fn channels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<ChannelSearchResult>> {
    let result = state.search.channels(&params.keyword, params.options()).await?;
    Ok(Json(result))
}

/// Handler for lounge auto-complete endpoint
pub async fn auto_complete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<String>>> {
    let suggestions = state
        .search
        .search_auto_complete(&params.keyword, params.options())
        .await?;
    Ok(Json(suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(size: Option<u32>, offset: Option<u32>) -> SearchQuery {
        SearchQuery {
            keyword: "foo".to_string(),
            size,
            offset,
        }
    }

    #[test]
    fn test_options_omitted() {
        assert_eq!(query(None, None).options(), None);
    }

    #[test]
    fn test_options_partially_given() {
        assert_eq!(
            query(None, Some(26)).options(),
            Some(SearchOptions {
                size: 13,
                offset: 26
            })
        );
        assert_eq!(
            query(Some(50), None).options(),
            Some(SearchOptions {
                size: 50,
                offset: 0
            })
        );
    }
}
