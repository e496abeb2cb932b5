//! The scroll-driven landing scene: logo intro, photo grid, typed headline, testimonials,
//! call to action, all over a background video whose opacity follows its own curve.

use std::f64::consts::PI;

use crate::{
    animation::curve::Curve,
    content::vision::VisionContent,
    foundation::core::ProgressRange,
    scene::config::SceneConfig,
    timeline::{effect::EffectSpec, segment::Segment, sequence::SequenceSpec},
};

/// Logo intro.
pub const HERO: &str = "hero";
/// Logo coming back with the call to action.
pub const HERO_RETURN: &str = "hero-return";
/// "Scroll" hint under the logo.
pub const SCROLL_HINT: &str = "scroll-hint";
/// Background video opacity.
pub const BACKGROUND: &str = "background";
/// Photo grid group.
pub const PHOTOS: &str = "photos";
/// Left photo frame.
pub const INTRO_LEFT: &str = "intro-left";
/// Right photo frame.
pub const INTRO_RIGHT: &str = "intro-right";
/// Centre carousel.
pub const CAROUSEL: &str = "carousel";
/// "Capturing" title.
pub const CAPTURING: &str = "capturing";
/// Typed headline.
pub const READY: &str = "ready";
/// Testimonial ids are `testimonial-{i}`.
pub const TESTIMONIAL_PREFIX: &str = "testimonial";
/// Call to action.
pub const CTA: &str = "cta";

/// Text typed out by [`READY`].
pub const READY_HEADLINE: &str = "Ready to tell your story?";

/// Horizontal spacing between carousel frames, in scene units.
pub const CAROUSEL_SPACING: f64 = 1.2;

/// Landing scene for `content`. Optional frames and testimonials only appear when present.
pub fn landing_scene(content: &VisionContent) -> SceneConfig {
    let fade_in_slide = |enter: f64, exit: f64| EffectSpec::Offset { enter, exit };

    let mut segments = vec![
        // logo, fully visible at the top, gone by 0.2; spins 2 turns per unit progress
        Segment::new(HERO, 0.0, 0.0, 0.2)
            .with_effect(EffectSpec::Opacity)
            .with_effect(EffectSpec::Parallax {
                base: 0.0,
                rate: 4.0 * PI,
                from: 0.0,
            }),
        Segment::new(HERO_RETURN, 1.0, 0.2, 0.1).with_effect(EffectSpec::Opacity),
        Segment::new(SCROLL_HINT, 0.0, 0.2, 0.1)
            .with_effect(EffectSpec::Opacity)
            .with_effect(EffectSpec::Parallax {
                base: 0.0,
                rate: 100.0,
                from: 0.0,
            }),
        Segment::new(BACKGROUND, 0.5, 1.0, 0.0).with_effect(EffectSpec::Curve {
            curve: Curve::linear([
                (0.1, 0.0),
                (0.2, 0.2),
                (0.5, 0.2),
                (0.6, 1.0),
                (0.8, 1.0),
                (0.95, 0.1),
            ]),
        }),
        Segment::new(PHOTOS, 0.375, 0.15, 0.1).with_effect(EffectSpec::Opacity),
        Segment::new(CAPTURING, 0.35, 0.1, 0.1)
            .with_effect(EffectSpec::Opacity)
            .with_effect(fade_in_slide(50.0, -50.0)),
        Segment::new(READY, 0.65, 0.1, 0.1)
            .with_effect(EffectSpec::Opacity)
            .with_effect(fade_in_slide(50.0, -50.0))
            .with_effect(EffectSpec::TextReveal {
                text: READY_HEADLINE.to_string(),
                reveal: ProgressRange {
                    start: 0.5,
                    end: 0.7,
                },
            }),
        Segment::new(CTA, 1.0, 0.2, 0.15)
            .with_effect(EffectSpec::Opacity)
            .with_effect(fade_in_slide(50.0, 0.0)),
    ];

    if content.intro_left().is_some() {
        segments.push(
            Segment::new(INTRO_LEFT, 0.375, 0.15, 0.1)
                .with_effect(EffectSpec::Opacity)
                .with_effect(EffectSpec::Parallax {
                    base: -1.3,
                    rate: -12.0,
                    from: 0.25,
                }),
        );
    }

    // right frame stays put; it only fades with the grid
    if content.intro_right().is_some() {
        segments.push(
            Segment::new(INTRO_RIGHT, 0.375, 0.15, 0.1).with_effect(EffectSpec::Opacity),
        );
    }

    if !content.slideshow().is_empty() {
        segments.push(
            Segment::new(CAROUSEL, 0.375, 0.15, 0.1)
                .with_effect(EffectSpec::Opacity)
                .with_effect(EffectSpec::Parallax {
                    base: 0.0,
                    rate: -8.0,
                    from: 0.25,
                }),
        );
    }

    let sequences = if content.testimonials.is_empty() {
        Vec::new()
    } else {
        vec![SequenceSpec {
            id_prefix: TESTIMONIAL_PREFIX.to_string(),
            range: ProgressRange {
                start: 0.55,
                end: 0.95,
            },
            count: content.testimonials.len(),
            fade_fraction: crate::timeline::sequence::DEFAULT_FADE_FRACTION,
            effects: vec![
                EffectSpec::Opacity,
                EffectSpec::Drift {
                    from: 20.0,
                    to: -20.0,
                },
            ],
        }]
    };

    SceneConfig {
        segments,
        sequences,
        ..SceneConfig::default()
    }
}

/// Resting x position of each carousel frame before parallax is added.
pub fn carousel_positions(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| -0.3 + i as f64 * CAROUSEL_SPACING)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/landing.rs"]
mod tests;
