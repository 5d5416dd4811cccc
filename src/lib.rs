//! Pixabay image search client
//!
//! A thin client for the [Pixabay API](https://pixabay.com/api/docs/):
//! build a search request, decode the JSON result set, and download
//! selected images to disk.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pixabay_search::{PixabayClient, SearchOptions};
//!
//! let client = PixabayClient::new("your-api-key");
//! let results = client
//!     .search("tiger hd background", &SearchOptions::default())
//!     .await?;
//!
//! // Everything at once, or one image by position:
//! results.download_all("./images").await?;
//! let record = results.get(0)?;
//! println!("uploaded by {}", record.user());
//! record.download("./images", pixabay_search::ImageSize::Web).await?;
//! ```
//!
//! One search is one HTTP round trip; there is no retrying, caching, or
//! pagination iteration. Download directories must already exist.

pub mod client;
pub mod error;
pub mod options;
pub mod results;
pub mod types;

pub use client::{PixabayClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use options::{Category, ImageSize, ImageType, Order, Orientation, SearchOptions};
pub use results::{ImageRecord, ResultSet};
pub use types::{ImageHit, SearchResponse};
