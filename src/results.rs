//! Result set and per-image accessors
//!
//! [`ResultSet`] owns the decoded response and the HTTP client used for
//! image downloads; [`ImageRecord`] is a borrowed view over one hit that
//! knows its own position in the set, so filenames are always derived from
//! a real ordinal.
//!
//! Downloaded files are named `{user}_{first_tag}_{index}{ext}`, where the
//! extension is everything from the final `.` of the fetched URL. The
//! index makes names unique within one call, not across calls.

use std::path::{Path, PathBuf};

use rand::Rng;
use reqwest::Client;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::ImageSize;
use crate::types::{ImageHit, SearchResponse};

/// Field names every hit is guaranteed to expose
const KNOWN_ATTRS: [&str; 7] = [
    "id",
    "user",
    "tags",
    "previewURL",
    "webformatURL",
    "imageURL",
    "largeImageURL",
];

/// The decoded outcome of one search call
#[derive(Debug, Clone)]
pub struct ResultSet {
    response: SearchResponse,
    client: Client,
}

impl ResultSet {
    pub(crate) fn new(response: SearchResponse, client: Client) -> Self {
        Self { response, client }
    }

    /// Number of hits accessible through the API for this query
    pub fn total_hits(&self) -> u64 {
        self.response.total_hits
    }

    /// Total number of matches on Pixabay
    pub fn total(&self) -> u64 {
        self.response.total
    }

    /// Number of hits in this result set
    pub fn len(&self) -> usize {
        self.response.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response.hits.is_empty()
    }

    /// The raw hits, in API order
    pub fn hits(&self) -> &[ImageHit] {
        &self.response.hits
    }

    /// The hit at `index` as an [`ImageRecord`]
    ///
    /// Valid indices are `0..len()`; anything else is
    /// [`Error::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<ImageRecord<'_>> {
        let hit = self
            .response
            .hits
            .get(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.response.hits.len(),
            })?;
        Ok(ImageRecord {
            hit,
            index,
            client: &self.client,
        })
    }

    /// Download the large rendition of every hit into `dir`
    ///
    /// Files are written in hit order, one per entry. `dir` must already
    /// exist. Returns the written paths.
    pub async fn download_all(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = Vec::with_capacity(self.len());

        for (index, hit) in self.response.hits.iter().enumerate() {
            let url = &hit.large_image_url;
            let target = dir.join(image_filename(hit, index, url));
            fetch_to_file(&self.client, url, &target).await?;
            written.push(target);
        }

        tracing::info!("Downloaded {} images to {}", written.len(), dir.display());
        Ok(written)
    }

    /// Download the large rendition of one uniformly random hit into `dir`
    ///
    /// The filename uses the selected hit's own index. Fails with
    /// [`Error::EmptyResultSet`] when there are no hits.
    pub async fn download_random(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        if self.is_empty() {
            return Err(Error::EmptyResultSet);
        }

        let index = rand::thread_rng().gen_range(0..self.len());
        let hit = &self.response.hits[index];
        let url = &hit.large_image_url;
        let target = dir.as_ref().join(image_filename(hit, index, url));
        fetch_to_file(&self.client, url, &target).await?;
        Ok(target)
    }
}

/// Read-only view over one hit, bound to its result set
///
/// Carries the hit's 0-based position so a standalone download can name
/// its file deterministically.
#[derive(Debug, Clone, Copy)]
pub struct ImageRecord<'a> {
    hit: &'a ImageHit,
    index: usize,
    client: &'a Client,
}

impl<'a> ImageRecord<'a> {
    /// Unique image identifier
    pub fn id(&self) -> u64 {
        self.hit.id
    }

    /// Uploader's user name
    pub fn user(&self) -> &str {
        &self.hit.user
    }

    /// Comma-separated tag list
    pub fn tags(&self) -> &str {
        &self.hit.tags
    }

    /// First tag, used in download filenames
    pub fn first_tag(&self) -> &str {
        self.hit.first_tag()
    }

    /// This record's 0-based position in its result set
    pub fn index(&self) -> usize {
        self.index
    }

    /// The underlying hit
    pub fn hit(&self) -> &ImageHit {
        self.hit
    }

    /// Look up any field the API returned for this hit
    ///
    /// Covers both the modeled fields (under their API names, e.g.
    /// `largeImageURL`) and everything in the flattened remainder. Unknown
    /// names fail with [`Error::UnknownAttribute`] listing what is
    /// available.
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        let value = match name {
            "id" => Value::from(self.hit.id),
            "user" => Value::from(self.hit.user.clone()),
            "tags" => Value::from(self.hit.tags.clone()),
            "previewURL" => Value::from(self.hit.preview_url.clone()),
            "webformatURL" => Value::from(self.hit.webformat_url.clone()),
            "imageURL" => Value::from(self.hit.image_url.clone()),
            "largeImageURL" => Value::from(self.hit.large_image_url.clone()),
            other => self
                .hit
                .extra
                .get(other)
                .cloned()
                .ok_or_else(|| Error::UnknownAttribute {
                    name: other.to_string(),
                    available: self.attr_names(),
                })?,
        };
        Ok(value)
    }

    /// Every attribute name this hit exposes
    pub fn attr_names(&self) -> Vec<String> {
        let mut names: Vec<String> = KNOWN_ATTRS.iter().map(|s| s.to_string()).collect();
        names.extend(self.hit.extra.keys().cloned());
        names
    }

    /// Download this image in the requested size into `dir`
    ///
    /// The filename uses this record's position in its result set.
    /// Returns the written path.
    pub async fn download(&self, dir: impl AsRef<Path>, size: ImageSize) -> Result<PathBuf> {
        let url = self.hit.url_for(size);
        let target = dir.as_ref().join(image_filename(self.hit, self.index, url));
        fetch_to_file(self.client, url, &target).await?;
        Ok(target)
    }
}

/// Everything from the final `.` of the URL, or empty if it has none
fn file_extension(url: &str) -> &str {
    url.rfind('.').map(|at| &url[at..]).unwrap_or("")
}

fn image_filename(hit: &ImageHit, index: usize, url: &str) -> String {
    format!(
        "{}_{}_{}{}",
        hit.user,
        hit.first_tag(),
        index,
        file_extension(url)
    )
}

/// Fetch the full body at `url` and write it to `target`
async fn fetch_to_file(client: &Client, url: &str, target: &Path) -> Result<()> {
    tracing::debug!("Fetching {} -> {}", url, target.display());

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            snippet: text.chars().take(200).collect(),
        });
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(user: &str, tags: &str, large_url: &str) -> ImageHit {
        serde_json::from_value(json!({
            "id": 42,
            "user": user,
            "tags": tags,
            "previewURL": "https://cdn.example/p.png",
            "webformatURL": "https://cdn.example/w.jpg",
            "imageURL": "https://cdn.example/i.jpg",
            "largeImageURL": large_url,
        }))
        .unwrap()
    }

    fn result_set(hits: Vec<ImageHit>) -> ResultSet {
        ResultSet::new(
            SearchResponse {
                total_hits: hits.len() as u64,
                total: hits.len() as u64,
                hits,
            },
            Client::new(),
        )
    }

    #[test]
    fn extension_is_taken_from_final_dot() {
        assert_eq!(file_extension("https://cdn.example/photo.jpg"), ".jpg");
        assert_eq!(file_extension("https://cdn.example/a.b/photo.png"), ".png");
        assert_eq!(file_extension("https://cdn-example-com/photo"), "");
    }

    #[test]
    fn filename_joins_user_tag_and_index() {
        let hit = hit("alice", "cat,pet", "https://cdn.example/photo.jpg");
        assert_eq!(image_filename(&hit, 0, &hit.large_image_url), "alice_cat_0.jpg");
        assert_eq!(image_filename(&hit, 17, &hit.large_image_url), "alice_cat_17.jpg");
    }

    #[test]
    fn get_returns_record_at_position() {
        let mut first = hit("alice", "cat,pet", "https://cdn.example/a.jpg");
        first.id = 7;
        let mut second = hit("bob", "sky", "https://cdn.example/b.jpg");
        second.id = 8;
        let set = result_set(vec![first, second]);

        for (index, expected_id) in [(0, 7), (1, 8)] {
            let record = set.get(index).unwrap();
            assert_eq!(record.index(), index);
            assert_eq!(record.get_attr("id").unwrap(), json!(expected_id));
        }
        assert_eq!(set.get(0).unwrap().user(), "alice");
        assert_eq!(set.get(1).unwrap().user(), "bob");
    }

    #[test]
    fn get_out_of_range_reports_valid_range() {
        let set = result_set(vec![hit("alice", "cat", "https://cdn.example/a.jpg")]);
        let err = set.get(1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(err.to_string(), "index 1 out of range, valid range is 0..1");
    }

    #[test]
    fn get_attr_reads_modeled_and_extra_fields() {
        let mut h = hit("alice", "cat,pet", "https://cdn.example/a.jpg");
        h.extra.insert("views".to_string(), json!(1234));
        let set = result_set(vec![h]);
        let record = set.get(0).unwrap();

        assert_eq!(record.get_attr("id").unwrap(), json!(42));
        assert_eq!(record.get_attr("user").unwrap(), json!("alice"));
        assert_eq!(
            record.get_attr("largeImageURL").unwrap(),
            json!("https://cdn.example/a.jpg")
        );
        assert_eq!(record.get_attr("views").unwrap(), json!(1234));
    }

    #[test]
    fn get_attr_unknown_name_lists_available() {
        let set = result_set(vec![hit("alice", "cat", "https://cdn.example/a.jpg")]);
        let err = set.get(0).unwrap().get_attr("nonexistent").unwrap_err();
        match &err {
            Error::UnknownAttribute { name, available } => {
                assert_eq!(name, "nonexistent");
                assert!(available.contains(&"id".to_string()));
                assert!(available.contains(&"largeImageURL".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn download_random_on_empty_set_fails() {
        let set = result_set(vec![]);
        let err = set.download_random("/tmp").await.unwrap_err();
        assert!(matches!(err, Error::EmptyResultSet));
    }
}
