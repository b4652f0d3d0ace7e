use serde::{Deserialize, Serialize};

pub mod channel;
pub mod field;
pub mod live;
pub mod video;

pub use channel::Channel;
pub use field::Field;
pub use live::{ApiLive, Live, SearchResultLive};
pub use video::{SearchResultVideo, Video};

use crate::error::AppResult;

/// Default page size used by the CHZZK web client
pub const DEFAULT_SEARCH_SIZE: u32 = 13;

/// Pagination parameters for a search request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchOptions {
    pub size: u32,
    pub offset: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SEARCH_SIZE,
            offset: 0,
        }
    }
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    /// Page size echoed by the server
    pub size: u32,
    /// Offset to request for the following page
    pub next_offset: u32,
    pub items: Vec<T>,
}

pub type ChannelSearchResult = SearchResult<Channel>;
pub type VideoSearchResult = SearchResult<SearchResultVideo>;
pub type LiveSearchResult = SearchResult<SearchResultLive>;

// ============================================================================
// CHZZK API Types
// ============================================================================

/// Envelope shared by the `/service/v1/search/*` endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchResponse<E> {
    pub content: ApiSearchContent<E>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchContent<E> {
    pub size: u32,
    pub page: ApiPage,
    pub data: Vec<E>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage {
    pub next: ApiNextPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiNextPage {
    pub offset: u32,
}

impl<E> ApiSearchContent<E> {
    /// Projects every entry, keeping the pagination fields
    pub fn project<T, F>(self, f: F) -> AppResult<SearchResult<T>>
    where
        F: FnMut(E) -> AppResult<T>,
    {
        let items = self.data.into_iter().map(f).collect::<AppResult<Vec<T>>>()?;

        Ok(SearchResult {
            size: self.size,
            next_offset: self.page.next.offset,
            items,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideoEntry {
    pub video: Video,
    pub channel: Channel,
}

impl From<ApiVideoEntry> for SearchResultVideo {
    fn from(entry: ApiVideoEntry) -> Self {
        SearchResultVideo {
            video: entry.video,
            channel: entry.channel,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLiveEntry {
    pub live: ApiLive,
    pub channel: Channel,
}

impl TryFrom<ApiLiveEntry> for SearchResultLive {
    type Error = crate::error::AppError;

    fn try_from(entry: ApiLiveEntry) -> Result<Self, Self::Error> {
        let live_playback = entry.live.parse_playback()?;

        Ok(SearchResultLive {
            live: entry.live.live,
            live_playback,
            channel: entry.channel,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiChannelEntry {
    pub channel: Channel,
}

impl From<ApiChannelEntry> for Channel {
    fn from(entry: ApiChannelEntry) -> Self {
        entry.channel
    }
}

/// Envelope of the lounge auto-complete endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAutoCompleteResponse {
    pub content: ApiAutoCompleteContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAutoCompleteContent {
    pub data: Vec<String>,
}
