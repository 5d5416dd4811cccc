//! Typed views over the Pixabay search response
//!
//! The API returns camelCase JSON; these types rename the fields the crate
//! relies on and keep everything else in a flattened map so attribute
//! lookup can surface fields this crate does not model explicitly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::ImageSize;

/// Decoded top-level search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of hits accessible through the API for this query
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    /// Total number of matches on Pixabay
    pub total: u64,
    /// The result entries, in API order
    pub hits: Vec<ImageHit>,
}

/// One search result entry
///
/// The API guarantees the identifier, uploader, tag string, and the four
/// size-specific URLs; anything else it returns (likes, views, dimensions,
/// and so on) lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageHit {
    /// Unique image identifier
    pub id: u64,
    /// Uploader's user name
    pub user: String,
    /// Comma-separated tag list
    pub tags: String,
    /// URL of the small preview rendition
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    /// URL of the web-format rendition
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// URL of the standard image
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// URL of the full-resolution large image
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Every other field the API returned for this hit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageHit {
    /// The first tag in the comma-separated tag string
    pub fn first_tag(&self) -> &str {
        self.tags.split(',').next().unwrap_or("").trim()
    }

    /// The URL for the requested resolution variant
    pub fn url_for(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Default => &self.image_url,
            ImageSize::Preview => &self.preview_url,
            ImageSize::Web => &self.webformat_url,
            ImageSize::Large => &self.large_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_hit() -> ImageHit {
        serde_json::from_value(json!({
            "id": 195893,
            "user": "alice",
            "tags": "cat, pet, cute",
            "previewURL": "https://cdn.example/preview.png",
            "webformatURL": "https://cdn.example/web.jpg",
            "imageURL": "https://cdn.example/image.jpg",
            "largeImageURL": "https://cdn.example/large.jpg",
            "views": 7671,
            "likes": 334
        }))
        .unwrap()
    }

    #[test]
    fn response_decodes_camel_case_fields() {
        let response: SearchResponse = serde_json::from_value(json!({
            "totalHits": 500,
            "total": 4692,
            "hits": [],
        }))
        .unwrap();
        assert_eq!(response.total_hits, 500);
        assert_eq!(response.total, 4692);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn hit_keeps_unmodeled_fields() {
        let hit = sample_hit();
        assert_eq!(hit.extra.get("views"), Some(&json!(7671)));
        assert_eq!(hit.extra.get("likes"), Some(&json!(334)));
    }

    #[test]
    fn first_tag_trims_whitespace() {
        let hit = sample_hit();
        assert_eq!(hit.first_tag(), "cat");
    }

    #[test]
    fn first_tag_of_empty_string_is_empty() {
        let mut hit = sample_hit();
        hit.tags = String::new();
        assert_eq!(hit.first_tag(), "");
    }

    #[test]
    fn url_for_selects_size_variant() {
        let hit = sample_hit();
        assert_eq!(hit.url_for(ImageSize::Preview), hit.preview_url);
        assert_eq!(hit.url_for(ImageSize::Web), hit.webformat_url);
        assert_eq!(hit.url_for(ImageSize::Default), hit.image_url);
        assert_eq!(hit.url_for(ImageSize::Large), hit.large_image_url);
    }

    #[test]
    fn missing_required_field_fails_decode() {
        let result: Result<ImageHit, _> = serde_json::from_value(json!({
            "id": 1,
            "user": "bob",
            "tags": "sky",
        }));
        assert!(result.is_err());
    }
}
