/// CHZZK search
///
/// Videos, lives and channels come from the service API and share one pagination
/// envelope. Auto-complete lives on the game (lounge) API and returns a bare list.
use crate::{
    config::{default_chzzk_api_url, default_chzzk_game_api_url},
    error::{AppError, AppResult},
    models::{
        ApiAutoCompleteResponse, ApiChannelEntry, ApiLiveEntry, ApiSearchContent,
        ApiSearchResponse, ApiVideoEntry, Channel, ChannelSearchResult, LiveSearchResult,
        SearchOptions, SearchResultLive, SearchResultVideo, VideoSearchResult,
    },
    services::client::ChzzkFetcher,
};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::{fmt::Display, sync::Arc};

/// Base URLs of the two CHZZK API surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub game_api_url: String,
}

impl Endpoints {
    /// Validates both base URLs and strips trailing slashes
    pub fn new(api_url: impl Into<String>, game_api_url: impl Into<String>) -> AppResult<Self> {
        let api_url = normalize_base(api_url.into())?;
        let game_api_url = normalize_base(game_api_url.into())?;

        Ok(Self {
            api_url,
            game_api_url,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: default_chzzk_api_url(),
            game_api_url: default_chzzk_game_api_url(),
        }
    }
}

fn normalize_base(url: String) -> AppResult<String> {
    Url::parse(&url)
        .map_err(|e| AppError::InvalidInput(format!("Invalid base URL {}: {}", url, e)))?;
    Ok(url.trim_end_matches('/').to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Videos,
    Lives,
    Channels,
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchKind::Videos => write!(f, "videos"),
            SearchKind::Lives => write!(f, "lives"),
            SearchKind::Channels => write!(f, "channels"),
        }
    }
}

/// Builds `{base}{path}?keyword=..&size=..&offset=..`, form-encoding the keyword
fn search_url(base: &str, path: &str, keyword: &str, options: SearchOptions) -> AppResult<Url> {
    Url::parse_with_params(
        &format!("{}{}", base, path),
        &[
            ("keyword", keyword.to_string()),
            ("size", options.size.to_string()),
            ("offset", options.offset.to_string()),
        ],
    )
    .map_err(|e| AppError::Internal(format!("Failed to build search URL: {}", e)))
}

#[derive(Clone)]
pub struct ChzzkSearch {
    fetcher: Arc<dyn ChzzkFetcher>,
    endpoints: Endpoints,
}

impl ChzzkSearch {
    pub fn new(fetcher: Arc<dyn ChzzkFetcher>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    async fn search<E: DeserializeOwned>(
        &self,
        kind: SearchKind,
        keyword: &str,
        options: Option<SearchOptions>,
    ) -> AppResult<ApiSearchContent<E>> {
        let url = search_url(
            &self.endpoints.api_url,
            &format!("/service/v1/search/{}", kind),
            keyword,
            options.unwrap_or_default(),
        )?;

        let body = self.fetcher.fetch_json(&url).await?;
        let response: ApiSearchResponse<E> =
            serde_json::from_value(body).map_err(|e| AppError::malformed(kind.to_string(), e))?;

        Ok(response.content)
    }

    /// Searches VODs; each item carries its channel
    pub async fn videos(
        &self,
        keyword: &str,
        options: Option<SearchOptions>,
    ) -> AppResult<VideoSearchResult> {
        let content = self
            .search::<ApiVideoEntry>(SearchKind::Videos, keyword, options)
            .await?;
        let result = content.project(|entry| Ok(SearchResultVideo::from(entry)))?;

        tracing::info!(
            keyword = %keyword,
            results = result.items.len(),
            next_offset = result.next_offset,
            "Video search completed"
        );

        Ok(result)
    }

    /// Searches live broadcasts, decoding each one's embedded playback document
    pub async fn lives(
        &self,
        keyword: &str,
        options: Option<SearchOptions>,
    ) -> AppResult<LiveSearchResult> {
        let content = self
            .search::<ApiLiveEntry>(SearchKind::Lives, keyword, options)
            .await?;
        let result = content.project(SearchResultLive::try_from)?;

        tracing::info!(
            keyword = %keyword,
            results = result.items.len(),
            next_offset = result.next_offset,
            "Live search completed"
        );

        Ok(result)
    }

    pub async fn channels(
        &self,
        keyword: &str,
        options: Option<SearchOptions>,
    ) -> AppResult<ChannelSearchResult> {
        let content = self
            .search::<ApiChannelEntry>(SearchKind::Channels, keyword, options)
            .await?;
        let result = content.project(|entry| Ok(Channel::from(entry)))?;

        tracing::info!(
            keyword = %keyword,
            results = result.items.len(),
            next_offset = result.next_offset,
            "Channel search completed"
        );

        Ok(result)
    }

    /// Lounge name suggestions for a partial keyword
    pub async fn search_auto_complete(
        &self,
        keyword: &str,
        options: Option<SearchOptions>,
    ) -> AppResult<Vec<String>> {
        let url = search_url(
            &self.endpoints.game_api_url,
            "/v2/search/lounges/auto-complete",
            keyword,
            options.unwrap_or_default(),
        )?;

        let body = self.fetcher.fetch_json(&url).await?;
        let response: ApiAutoCompleteResponse =
            serde_json::from_value(body).map_err(|e| AppError::malformed("auto-complete", e))?;

        tracing::info!(
            keyword = %keyword,
            results = response.content.data.len(),
            "Auto-complete completed"
        );

        Ok(response.content.data)
    }
}
