//! YouTube Data API search client and result formatting.
//!
//! One `search.list` call per tool invocation, capped at [`MAX_RESULTS`]
//! entries, no retry. The formatter turns the typed payload into the
//! plain-text block the model reads.

use serde::Deserialize;
use thiserror::Error;

/// Fixed cap on returned search results.
pub const MAX_RESULTS: u32 = 3;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search request failed with status {0}")]
    Status(reqwest::StatusCode),
}

/// Decoded `search.list` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search result: a video, channel, or playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: ResourceId,
    pub snippet: Snippet,
}

/// Resource identifier; exactly one of the three fields is populated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub playlist_id: Option<String>,
}

/// Display metadata attached to every result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
}

/// Client for the YouTube search endpoint.
pub struct SearchClient {
    http: reqwest::Client,
    api_key: String,
}

impl SearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Run one search query, returning up to [`MAX_RESULTS`] items.
    ///
    /// Non-200 responses and transport errors propagate; there is no retry
    /// or fallback at this layer.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let encoded_query = urlencoding::encode(query);
        let url = format!(
            "{}?key={}&part=snippet&q={}&maxResults={}",
            SEARCH_URL, self.api_key, encoded_query, MAX_RESULTS
        );

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        Ok(response.json().await?)
    }
}

/// Render search results as one text block per item, blank-line separated.
///
/// URL derivation, in priority order: video id builds a watch URL, channel
/// id builds a channel URL from the channel name, playlist id builds a
/// playlist-watch URL. An item with none of the three gets no URL line;
/// that anomaly is logged and the rest of the block is still emitted.
pub fn format_search_results(response: &SearchResponse) -> String {
    let blocks: Vec<String> = response.items.iter().map(format_item).collect();
    blocks.join("\n\n")
}

fn format_item(item: &SearchItem) -> String {
    let snippet = &item.snippet;
    let mut block = format!(
        "Title: {}\nDescription: {}\nChannel: {}\nPublished At: {}\n",
        snippet.title, snippet.description, snippet.channel_title, snippet.published_at
    );

    if let Some(video_id) = &item.id.video_id {
        block.push_str(&format!(
            "Video URL: https://www.youtube.com/watch?v={}\n",
            video_id
        ));
    } else if item.id.channel_id.is_some() {
        block.push_str(&format!(
            "Video URL: https://www.youtube.com/@{}\n",
            snippet.channel_title
        ));
    } else if let Some(playlist_id) = &item.id.playlist_id {
        block.push_str(&format!(
            "Video URL: https://www.youtube.com/watch?v=&list={}\n",
            playlist_id
        ));
    } else {
        tracing::warn!(title = %snippet.title, "search item has no video, channel, or playlist id");
    }

    block
}
