//! Portfolio collections: films, photo albums and the unlisted pricing pages.
//!
//! Image and file references arrive already resolved to URLs.

use crate::media::video::VideoEmbed;

/// Pricing pages without an uploaded hero video use this clip.
pub const DEFAULT_PRICING_VIDEO: &str = "/inquire-bg.mp4";
/// Films shown on the home page.
pub const FEATURED_FILM_LIMIT: usize = 2;

/// Content-store slug object.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slug {
    /// Slug text used in URLs.
    pub current: String,
}

/// A published wedding film.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Film {
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: Slug,
    /// YouTube link as entered by the editor.
    pub youtube_url: String,
    /// ISO `YYYY-MM-DD`.
    pub published_at: String,
    /// Uploaded cover image.
    pub custom_thumbnail: Option<String>,
    /// Shown on the home page.
    pub featured: bool,
    /// Short description for the films page.
    pub description: Option<String>,
}

impl Film {
    /// Player for [`Self::youtube_url`], or the placeholder.
    pub fn embed(&self) -> VideoEmbed {
        VideoEmbed::resolve(&self.youtube_url)
    }

    /// Custom cover if set, else the YouTube poster frame.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.custom_thumbnail
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .map(str::to_string)
            .or_else(|| self.embed().thumbnail_url())
    }
}

/// Films with a video link, newest first.
pub fn film_portfolio(films: &[Film]) -> Vec<&Film> {
    let mut out: Vec<&Film> = films
        .iter()
        .filter(|f| !f.youtube_url.trim().is_empty())
        .collect();
    out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    out
}

/// Newest featured films for the home page.
pub fn featured_films(films: &[Film]) -> Vec<&Film> {
    let mut out: Vec<&Film> = films.iter().filter(|f| f.featured).collect();
    out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    out.truncate(FEATURED_FILM_LIMIT);
    out
}

/// Film by slug.
pub fn find_film<'a>(films: &'a [Film], slug: &str) -> Option<&'a Film> {
    films.iter().find(|f| f.slug.current == slug)
}

/// A photo album for one event.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoGallery {
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: Slug,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Image URLs in album order.
    pub images: Vec<String>,
    /// Event date, ISO `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Albums with a slug, most recent event first; undated albums last.
pub fn album_index(albums: &[PhotoGallery]) -> Vec<&PhotoGallery> {
    let mut out: Vec<&PhotoGallery> = albums
        .iter()
        .filter(|a| !a.slug.current.is_empty())
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Album by slug; `None` renders the not-found page.
pub fn find_album<'a>(albums: &'a [PhotoGallery], slug: &str) -> Option<&'a PhotoGallery> {
    albums.iter().find(|a| a.slug.current == slug)
}

/// A priced photo or video package.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Display price, e.g. `$4,000`.
    pub price: String,
    /// One-line description.
    pub description: String,
    /// Included items.
    pub features: Vec<String>,
}

/// One purchasable option within a seasonal tier.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierOption {
    /// Short label such as "Option A".
    pub option_label: Option<String>,
    /// Option name.
    pub option_name: Option<String>,
    /// Display price.
    pub price: Option<String>,
    /// Hours or events covered.
    pub coverage: Option<String>,
    /// Crew on the day.
    pub team: Option<String>,
    /// Photo, video or both.
    pub media_choice: Option<String>,
    /// What the couple receives.
    pub deliverables: Vec<String>,
    /// Who the option suits.
    pub why_it_works: Option<String>,
    /// Largest guest count covered.
    pub guest_cap: Option<String>,
}

/// One collection tier: either a single offer or several labelled options.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tier {
    /// Position in the collection.
    pub tier_number: Option<u32>,
    /// Tier name.
    pub tier_name: Option<String>,
    /// Coverage length.
    pub duration: Option<String>,
    /// One-line pitch.
    pub tagline: Option<String>,
    /// Show [`Self::options`] instead of the `single*` fields.
    pub has_multiple_options: bool,
    /// Price of the single offer.
    pub single_price: Option<String>,
    /// Coverage of the single offer.
    pub single_coverage: Option<String>,
    /// Crew of the single offer.
    pub single_team: Option<String>,
    /// Deliverables of the single offer.
    pub single_deliverables: Vec<String>,
    /// Who the single offer suits.
    pub single_best_for: Option<String>,
    /// Guest cap of the single offer.
    pub single_guest_cap: Option<String>,
    /// Options when the tier has several.
    pub options: Vec<TierOption>,
}

impl Tier {
    /// Tier name, else "Tier {n}".
    pub fn title(&self) -> String {
        match self.tier_name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => name.to_string(),
            None => format!("Tier {}", self.tier_number.unwrap_or_default()),
        }
    }

    /// Offers to display. The `single*` fields form one offer unless the tier is
    /// flagged multi-option and actually lists options.
    pub fn offers(&self) -> Vec<TierOption> {
        if self.has_multiple_options && !self.options.is_empty() {
            return self.options.clone();
        }
        vec![TierOption {
            price: self.single_price.clone(),
            coverage: self.single_coverage.clone(),
            team: self.single_team.clone(),
            deliverables: self.single_deliverables.clone(),
            why_it_works: self.single_best_for.clone(),
            guest_cap: self.single_guest_cap.clone(),
            ..TierOption::default()
        }]
    }
}

/// Seasonal and intimate collection tiers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalCollections {
    /// Section switch, on unless turned off.
    pub enabled: bool,
    /// Heading override.
    pub section_title: Option<String>,
    /// Availability note.
    pub availability: Option<String>,
    /// Tiers in display order.
    pub tiers: Vec<Tier>,
}

impl Default for SeasonalCollections {
    fn default() -> Self {
        Self {
            enabled: true,
            section_title: None,
            availability: None,
            tiers: Vec::new(),
        }
    }
}

impl SeasonalCollections {
    /// Heading, falling back to "Seasonal Collections".
    pub fn title(&self) -> &str {
        self.section_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Seasonal Collections")
    }
}

/// A question on the pricing page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    /// Grouping heading.
    pub category: String,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Unlisted investment guide reached by slug.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPage {
    /// Page title.
    pub title: Option<String>,
    /// Unlisted URL slug.
    pub slug: Slug,
    /// Resolved URL of the uploaded hero video.
    pub video_url: Option<String>,
    /// Film packages.
    pub video_packages: Vec<Package>,
    /// Photography packages.
    pub photo_packages: Vec<Package>,
    /// Optional seasonal section.
    pub seasonal_collections: Option<SeasonalCollections>,
    /// Frequently asked questions.
    pub faqs: Vec<Faq>,
}

impl PricingPage {
    /// Hero video URL, falling back to [`DEFAULT_PRICING_VIDEO`].
    pub fn hero_video(&self) -> &str {
        self.video_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_PRICING_VIDEO)
    }

    /// Seasonal section, when switched on and non-empty.
    pub fn seasonal(&self) -> Option<&SeasonalCollections> {
        self.seasonal_collections
            .as_ref()
            .filter(|s| s.enabled && !s.tiers.is_empty())
    }

    /// FAQs grouped by category, categories in first-seen order.
    pub fn faqs_by_category(&self) -> Vec<(&str, Vec<&Faq>)> {
        let mut groups: Vec<(&str, Vec<&Faq>)> = Vec::new();
        for faq in &self.faqs {
            match groups.iter_mut().find(|(c, _)| *c == faq.category) {
                Some((_, list)) => list.push(faq),
                None => groups.push((faq.category.as_str(), vec![faq])),
            }
        }
        groups
    }
}

/// Pricing page by slug.
pub fn find_pricing<'a>(pages: &'a [PricingPage], slug: &str) -> Option<&'a PricingPage> {
    pages.iter().find(|p| p.slug.current == slug)
}

#[cfg(test)]
#[path = "../../tests/unit/content/catalog.rs"]
mod tests;
