//! Scrollcue turns a scroll position into per-element animation state.
//!
//! A page is described as a [`Timeline`] of named [`Segment`]s placed on a normalized
//! `[0, 1]` progress axis. Each frame:
//!
//! - a [`ProgressMapper`] normalizes and smooths the raw scroll offset
//! - the [`Evaluator`] computes every segment's envelope and effect outputs
//! - a [`SceneDirector`] pushes those outputs into bound [`RenderTarget`]s and notifies
//!   [`ScrollObserver`]s about navigation visibility
//!
//! Evaluation is a pure function of progress; the same progress always yields the same
//! [`EvaluationResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod content;
pub(crate) mod eval;
pub(crate) mod inquiry;
pub(crate) mod media;
pub(crate) mod progress;
/// Scene assembly: configuration, render targets, and the per-frame director.
pub mod scene;
pub(crate) mod timeline;

pub use crate::foundation::core::{Progress, ProgressRange, Vec2};
pub use crate::foundation::error::{ScrollcueError, ScrollcueResult};
pub use crate::foundation::math::{clamp01, damp, inverse_lerp, lerp};

pub use crate::animation::curve::{Curve, CurveKey, InterpMode, Lerp};
pub use crate::animation::ease::Ease;
pub use crate::content::catalog::{
    DEFAULT_PRICING_VIDEO, FEATURED_FILM_LIMIT, Faq, Film, Package, PhotoGallery, PricingPage,
    SeasonalCollections, Slug, Tier, TierOption, album_index, featured_films, film_portfolio,
    find_album, find_film, find_pricing,
};
pub use crate::content::popup::PopupGate;
pub use crate::content::vision::{
    ContentSource, DEFAULT_HERO_VIDEO, FeaturedVideo, JsonFileSource, SiteContent, StaticSource,
    Testimonial, VisionContent, load_films_or_default, load_galleries_or_default, load_or_default,
    load_pricing,
};
pub use crate::eval::evaluator::{EvaluationResult, Evaluator, SegmentOutput, Timeline};
pub use crate::inquiry::commercial::{CommercialDocument, CommercialInquiry, CommercialService};
pub use crate::inquiry::contact::ContactInquiry;
pub use crate::inquiry::crm::{
    CrmLead, CrmTransport, DEFAULT_WORKSPACE, HttpReply, SubmissionResponse, couple_name, submit,
};
pub use crate::inquiry::wedding::{REFERRAL_OPTIONS, ProjectType, ServiceType, WeddingInquiry};
pub use crate::inquiry::wizard::{GENERIC_SUBMIT_ERROR, StepForm, StepInfo, SubmitStatus, Wizard};
pub use crate::media::video::{VideoEmbed, youtube_id};
pub use crate::progress::direction::{DirectionTracker, NavVisibility, ScrollDirection};
pub use crate::progress::mapper::ProgressMapper;
pub use crate::scene::config::SceneConfig;
pub use crate::scene::director::{FrameControl, SceneDirector, run_frames};
pub use crate::scene::landing::landing_scene;
pub use crate::scene::observer::{FnObserver, ScrollObserver};
pub use crate::scene::target::{
    ElementStyle, NodeTarget, ParallaxChannel, RenderTarget, SceneNode, Shared, StyleTarget,
    TargetRegistry, shared,
};
pub use crate::timeline::effect::{EffectOutput, EffectSpec, reveal_char_count};
pub use crate::timeline::segment::{Envelope, RampPhase, Segment, SegmentBounds};
pub use crate::timeline::sequence::{SequenceSpec, sequential_reveal, slots};
