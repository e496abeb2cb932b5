use std::{fs::File, io::BufReader, path::PathBuf};

use crate::{
    content::catalog::{Film, PhotoGallery, PricingPage, find_pricing},
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// Bundled hero clip used when no video is uploaded.
pub const DEFAULT_HERO_VIDEO: &str = "/hero-video.mp4";

/// Landing-page content resolved from the content store.
///
/// Every field is optional in the source document; accessors apply the page's fallbacks.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisionContent {
    /// Background video.
    pub hero_video_url: Option<String>,
    /// Left photo frame.
    pub intro_left_url: Option<String>,
    /// Centre photo, used when there is no slideshow.
    pub intro_center_url: Option<String>,
    /// Carousel images.
    pub intro_slideshow_urls: Vec<String>,
    /// Right photo frame.
    pub intro_right_url: Option<String>,
    /// Quotes revealed one at a time.
    pub testimonials: Vec<Testimonial>,
    /// Videos linked from the landing page.
    pub featured_videos: Vec<FeaturedVideo>,
}

/// A client quote.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Quote text.
    pub quote: String,
    /// Who said it.
    pub couple: String,
    /// Where the wedding took place.
    #[serde(default)]
    pub location: Option<String>,
}

/// Thumbnail and link of a featured video.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedVideo {
    /// Poster image.
    pub thumbnail_url: String,
    /// Link to the video.
    pub video_url: String,
}

impl VisionContent {
    /// Hero video, falling back to [`DEFAULT_HERO_VIDEO`].
    pub fn hero_video(&self) -> &str {
        non_empty(self.hero_video_url.as_deref()).unwrap_or(DEFAULT_HERO_VIDEO)
    }

    /// Carousel images: the slideshow if present, else the single centre image.
    pub fn slideshow(&self) -> Vec<&str> {
        let urls: Vec<&str> = self
            .intro_slideshow_urls
            .iter()
            .map(String::as_str)
            .filter(|u| !u.trim().is_empty())
            .collect();
        if !urls.is_empty() {
            return urls;
        }
        non_empty(self.intro_center_url.as_deref())
            .into_iter()
            .collect()
    }

    /// Left frame image, if set and non-blank.
    pub fn intro_left(&self) -> Option<&str> {
        non_empty(self.intro_left_url.as_deref())
    }

    /// Right frame image, if set and non-blank.
    pub fn intro_right(&self) -> Option<&str> {
        non_empty(self.intro_right_url.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Full content-store export: the landing document plus the portfolio collections.
///
/// The landing fields sit at the top level, so a bare landing document also decodes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Landing document.
    #[serde(flatten)]
    pub vision: VisionContent,
    /// Film portfolio.
    #[serde(default)]
    pub films: Vec<Film>,
    /// Photo albums.
    #[serde(default)]
    pub photo_galleries: Vec<PhotoGallery>,
    /// Unlisted pricing pages.
    #[serde(default)]
    pub pricing_pages: Vec<PricingPage>,
}

impl From<VisionContent> for SiteContent {
    fn from(vision: VisionContent) -> Self {
        Self {
            vision,
            ..Self::default()
        }
    }
}

/// Read side of the content store.
pub trait ContentSource {
    /// Landing document.
    fn fetch_vision(&self) -> ScrollcueResult<VisionContent>;
    /// Every film document.
    fn fetch_films(&self) -> ScrollcueResult<Vec<Film>>;
    /// Every photo album.
    fn fetch_photo_galleries(&self) -> ScrollcueResult<Vec<PhotoGallery>>;
    /// Every pricing page.
    fn fetch_pricing_pages(&self) -> ScrollcueResult<Vec<PricingPage>>;
}

/// Content export stored as JSON on disk.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    /// Path of the JSON export.
    pub path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path` on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> ScrollcueResult<SiteContent> {
        let f = File::open(&self.path).map_err(|e| {
            ScrollcueError::fetch(format!("open content '{}': {e}", self.path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ScrollcueError::fetch(format!("decode content '{}': {e}", self.path.display()))
        })
    }
}

impl ContentSource for JsonFileSource {
    fn fetch_vision(&self) -> ScrollcueResult<VisionContent> {
        Ok(self.read()?.vision)
    }

    fn fetch_films(&self) -> ScrollcueResult<Vec<Film>> {
        Ok(self.read()?.films)
    }

    fn fetch_photo_galleries(&self) -> ScrollcueResult<Vec<PhotoGallery>> {
        Ok(self.read()?.photo_galleries)
    }

    fn fetch_pricing_pages(&self) -> ScrollcueResult<Vec<PricingPage>> {
        Ok(self.read()?.pricing_pages)
    }
}

/// Fixed content, handy for tests and previews.
#[derive(Clone, Debug, Default)]
pub struct StaticSource(pub SiteContent);

impl ContentSource for StaticSource {
    fn fetch_vision(&self) -> ScrollcueResult<VisionContent> {
        Ok(self.0.vision.clone())
    }

    fn fetch_films(&self) -> ScrollcueResult<Vec<Film>> {
        Ok(self.0.films.clone())
    }

    fn fetch_photo_galleries(&self) -> ScrollcueResult<Vec<PhotoGallery>> {
        Ok(self.0.photo_galleries.clone())
    }

    fn fetch_pricing_pages(&self) -> ScrollcueResult<Vec<PricingPage>> {
        Ok(self.0.pricing_pages.clone())
    }
}

fn or_default<T: Default>(what: &str, fetched: ScrollcueResult<T>) -> T {
    fetched.unwrap_or_else(|err| {
        tracing::warn!(%err, what, "content fetch failed, rendering default content");
        T::default()
    })
}

/// Fetch the landing document, degrading to defaults on any failure.
pub fn load_or_default(source: &dyn ContentSource) -> VisionContent {
    or_default("vision", source.fetch_vision())
}

/// Film portfolio; an unreachable store yields an empty list.
pub fn load_films_or_default(source: &dyn ContentSource) -> Vec<Film> {
    or_default("films", source.fetch_films())
}

/// Photo albums; an unreachable store yields an empty list.
pub fn load_galleries_or_default(source: &dyn ContentSource) -> Vec<PhotoGallery> {
    or_default("photo galleries", source.fetch_photo_galleries())
}

/// Pricing page by slug. `None` means "page not found", whether the slug is unknown or
/// the store could not be read.
pub fn load_pricing(source: &dyn ContentSource, slug: &str) -> Option<PricingPage> {
    let pages = or_default("pricing pages", source.fetch_pricing_pages());
    let page = find_pricing(&pages, slug).cloned();
    if page.is_none() {
        tracing::debug!(slug, "no pricing page");
    }
    page
}

#[cfg(test)]
#[path = "../../tests/unit/content/vision.rs"]
mod tests;
