//! Search options and their closed enumerations
//!
//! Every filter the Pixabay search endpoint accepts is represented here as
//! a typed field with a documented default, serialized into the exact query
//! parameter names the API expects. Free-form strings are only used where
//! the API itself is open-ended (the query text and the language code).

use std::str::FromStr;

use crate::error::Error;

/// Kind of image to search for (`image_type` parameter, default `photo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    All,
    #[default]
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::All => "all",
            ImageType::Photo => "photo",
            ImageType::Illustration => "illustration",
            ImageType::Vector => "vector",
        }
    }
}

/// Image orientation filter (`orientation` parameter, default `horizontal`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    All,
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::All => "all",
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Result ordering (`order` parameter, default `popular`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Popular,
    Latest,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Popular => "popular",
            Order::Latest => "latest",
        }
    }
}

/// Content category filter (`category` parameter, default `backgrounds`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Backgrounds,
    Fashion,
    Nature,
    Science,
    Education,
    Feelings,
    Health,
    People,
    Religion,
    Places,
    Animals,
    Industry,
    Computer,
    Food,
    Sports,
    Transportation,
    Travel,
    Buildings,
    Business,
    Music,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Backgrounds => "backgrounds",
            Category::Fashion => "fashion",
            Category::Nature => "nature",
            Category::Science => "science",
            Category::Education => "education",
            Category::Feelings => "feelings",
            Category::Health => "health",
            Category::People => "people",
            Category::Religion => "religion",
            Category::Places => "places",
            Category::Animals => "animals",
            Category::Industry => "industry",
            Category::Computer => "computer",
            Category::Food => "food",
            Category::Sports => "sports",
            Category::Transportation => "transportation",
            Category::Travel => "travel",
            Category::Buildings => "buildings",
            Category::Business => "business",
            Category::Music => "music",
        }
    }
}

/// Which resolution variant of a hit to download
///
/// Each variant maps to one of the four URL fields every hit carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// The standard image (`imageURL`)
    #[default]
    Default,
    /// The small preview (`previewURL`)
    Preview,
    /// The web-format rendition (`webformatURL`)
    Web,
    /// The full-resolution large image (`largeImageURL`)
    Large,
}

impl ImageSize {
    /// The name of the hit field holding this size's URL
    pub fn url_field(&self) -> &'static str {
        match self {
            ImageSize::Default => "imageURL",
            ImageSize::Preview => "previewURL",
            ImageSize::Web => "webformatURL",
            ImageSize::Large => "largeImageURL",
        }
    }
}

impl FromStr for ImageSize {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "default" => Ok(ImageSize::Default),
            "preview" => Ok(ImageSize::Preview),
            "web" => Ok(ImageSize::Web),
            "large" => Ok(ImageSize::Large),
            other => Err(Error::InvalidSize {
                given: other.to_string(),
            }),
        }
    }
}

/// Search filters, each with the API's documented default
///
/// Construct with `SearchOptions::default()` and override the fields you
/// care about:
///
/// ```rust,ignore
/// let options = SearchOptions {
///     per_page: 50,
///     orientation: Orientation::Vertical,
///     ..SearchOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum hits per result page (default: 20)
    pub per_page: u32,
    /// Kind of image (default: photo)
    pub image_type: ImageType,
    /// Content category (default: backgrounds)
    pub category: Category,
    /// Minimum image width in pixels (default: 64)
    pub min_width: u32,
    /// Minimum image height in pixels (default: 64)
    pub min_height: u32,
    /// Orientation filter (default: horizontal)
    pub orientation: Orientation,
    /// Exclude content unsuitable for all audiences (default: true)
    pub safesearch: bool,
    /// Result page number, 1-based (default: 1)
    pub page: u32,
    /// Result ordering (default: popular)
    pub order: Order,
    /// Language code for the query (default: "en")
    pub lang: String,
    /// Only return images selected by Pixabay editors (default: false)
    pub editors_choice: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            per_page: 20,
            image_type: ImageType::Photo,
            category: Category::Backgrounds,
            min_width: 64,
            min_height: 64,
            orientation: Orientation::Horizontal,
            safesearch: true,
            page: 1,
            order: Order::Popular,
            lang: "en".to_string(),
            editors_choice: false,
        }
    }
}

impl SearchOptions {
    /// Serialize into the API's query parameter names, in a fixed order
    pub(crate) fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("image_type", self.image_type.as_str().to_string()),
            ("pretty", "false".to_string()),
            ("category", self.category.as_str().to_string()),
            ("minWidth", self.min_width.to_string()),
            ("minHeight", self.min_height.to_string()),
            ("orientation", self.orientation.as_str().to_string()),
            ("safesearch", self.safesearch.to_string()),
            ("order", self.order.as_str().to_string()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("lang", self.lang.clone()),
            ("editors_choice", self.editors_choice.to_string()),
        ]
    }
}
