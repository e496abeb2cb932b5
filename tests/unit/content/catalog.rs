use super::*;

fn film(title: &str, url: &str, published_at: &str, featured: bool) -> Film {
    Film {
        title: title.to_string(),
        slug: Slug {
            current: title.to_lowercase(),
        },
        youtube_url: url.to_string(),
        published_at: published_at.to_string(),
        featured,
        ..Film::default()
    }
}

#[test]
fn film_decodes_camel_case_and_resolves_embed() {
    let json = r#"{
        "title": "Ana & Ben",
        "slug": { "current": "ana-ben" },
        "youtubeUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "publishedAt": "2025-03-01"
    }"#;
    let f: Film = serde_json::from_str(json).unwrap();
    assert!(!f.featured);
    assert_eq!(
        f.embed(),
        VideoEmbed::Embedded {
            id: "dQw4w9WgXcQ".to_string(),
            src: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        }
    );
    assert_eq!(
        f.thumbnail_url().as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
    );
}

#[test]
fn custom_thumbnail_wins_and_bad_links_show_placeholder() {
    let mut f = film("Cris", "https://vimeo.com/12345", "2024-01-01", false);
    assert_eq!(f.embed(), VideoEmbed::Unavailable);
    assert_eq!(f.thumbnail_url(), None);

    f.custom_thumbnail = Some("cover.jpg".to_string());
    assert_eq!(f.thumbnail_url().as_deref(), Some("cover.jpg"));
}

#[test]
fn portfolio_drops_unlinked_films_and_sorts_newest_first() {
    let films = vec![
        film("Old", "https://youtu.be/aaaaaaaaaaa", "2023-05-01", false),
        film("Draft", "", "2025-06-01", true),
        film("New", "https://youtu.be/bbbbbbbbbbb", "2025-01-10", false),
    ];
    let shown = film_portfolio(&films);
    let titles: Vec<&str> = shown.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);
    assert_eq!(
        find_film(&films, "old").map(|f| f.published_at.as_str()),
        Some("2023-05-01")
    );
}

#[test]
fn home_page_features_two_latest() {
    let films = vec![
        film("A", "https://youtu.be/aaaaaaaaaaa", "2022-01-01", true),
        film("B", "https://youtu.be/bbbbbbbbbbb", "2025-01-01", true),
        film("C", "https://youtu.be/ccccccccccc", "2026-01-01", false),
        film("D", "https://youtu.be/ddddddddddd", "2024-01-01", true),
    ];
    let shown = featured_films(&films);
    let titles: Vec<&str> = shown.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "D"]);
}

#[test]
fn albums_sort_by_event_date_and_resolve_by_slug() {
    let json = r#"[
        { "title": "Spring", "slug": { "current": "spring" }, "date": "2024-04-02", "images": ["1.jpg", "2.jpg"] },
        { "title": "Unsorted", "slug": { "current": "unsorted" } },
        { "title": "No slug", "date": "2026-01-01" },
        { "title": "Winter", "slug": { "current": "winter" }, "coverImage": "w.jpg", "date": "2025-12-20" }
    ]"#;
    let albums: Vec<PhotoGallery> = serde_json::from_str(json).unwrap();
    let index = album_index(&albums);
    let titles: Vec<&str> = index.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Winter", "Spring", "Unsorted"]);
    assert_eq!(find_album(&albums, "spring").unwrap().images.len(), 2);
    assert!(find_album(&albums, "summer").is_none());
}

#[test]
fn tier_shows_options_only_when_flagged_and_present() {
    let mut tier = Tier {
        tier_number: Some(2),
        single_price: Some("$2,400".to_string()),
        single_deliverables: vec!["Highlight film".to_string()],
        single_best_for: Some("Elopements".to_string()),
        options: vec![TierOption {
            option_label: Some("A".to_string()),
            price: Some("$3,000".to_string()),
            ..TierOption::default()
        }],
        ..Tier::default()
    };
    assert_eq!(tier.title(), "Tier 2");
    let single = tier.offers();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].price.as_deref(), Some("$2,400"));
    assert_eq!(single[0].why_it_works.as_deref(), Some("Elopements"));

    tier.has_multiple_options = true;
    tier.tier_name = Some("The Intimate".to_string());
    assert_eq!(tier.title(), "The Intimate");
    assert_eq!(tier.offers()[0].option_label.as_deref(), Some("A"));

    tier.options.clear();
    assert_eq!(tier.offers()[0].price.as_deref(), Some("$2,400"));
}

#[test]
fn pricing_page_applies_fallbacks() {
    let json = r#"{
        "title": "Investment Guide 2025",
        "slug": { "current": "2025" },
        "videoPackages": [{ "name": "Story", "price": "$4,000", "features": ["Drone"] }],
        "seasonalCollections": { "tiers": [{ "tierNumber": 1 }] },
        "faqs": [
            { "category": "Booking", "question": "Deposit?", "answer": "30%" },
            { "category": "Delivery", "question": "When?", "answer": "8 weeks" },
            { "category": "Booking", "question": "Travel?", "answer": "Yes" }
        ]
    }"#;
    let page: PricingPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.hero_video(), DEFAULT_PRICING_VIDEO);
    assert_eq!(page.video_packages[0].features, vec!["Drone"]);

    let seasonal = page.seasonal().unwrap();
    assert_eq!(seasonal.title(), "Seasonal Collections");

    let groups = page.faqs_by_category();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Booking");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].1[0].answer, "8 weeks");
}

#[test]
fn disabled_or_empty_seasonal_section_is_hidden() {
    let mut page = PricingPage {
        video_url: Some("https://cdn.example.test/guide.mp4".to_string()),
        seasonal_collections: Some(SeasonalCollections {
            enabled: false,
            tiers: vec![Tier::default()],
            ..SeasonalCollections::default()
        }),
        ..PricingPage::default()
    };
    assert_eq!(page.hero_video(), "https://cdn.example.test/guide.mp4");
    assert!(page.seasonal().is_none());

    page.seasonal_collections = Some(SeasonalCollections::default());
    assert!(page.seasonal().is_none());
    assert!(find_pricing(std::slice::from_ref(&page), "").is_some());
}
