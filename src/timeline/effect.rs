use crate::{
    animation::curve::Curve,
    foundation::core::{Progress, ProgressRange},
    foundation::error::ScrollcueResult,
    foundation::math::{inverse_lerp, lerp},
    timeline::segment::{Envelope, RampPhase, SegmentBounds},
};

/// How a segment's envelope maps onto a concrete visual parameter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectSpec {
    /// Envelope value passed straight through.
    Opacity,
    /// Slide in from `enter`, settle at zero on the plateau, slide out to `exit`.
    Offset {
        /// Offset ahead of the segment.
        enter: f64,
        /// Offset past the segment.
        exit: f64,
    },
    /// Typewriter prefix over its own progress range.
    TextReveal {
        /// Full text.
        text: String,
        /// Progress range over which the prefix grows.
        reveal: ProgressRange,
    },
    /// Linear travel from `from` to `to` across the whole segment extent.
    Drift {
        /// Value at the start of the fade-in.
        from: f64,
        /// Value at the end of the fade-out.
        to: f64,
    },
    /// `base + rate * max(0, progress - from)`. Unbounded; used for parallax and spin.
    Parallax {
        /// Value until `from`.
        base: f64,
        /// Change per unit of progress.
        rate: f64,
        /// Progress where movement starts.
        from: f64,
    },
    /// Free-form curve sampled at the raw progress.
    Curve {
        /// Curve over the whole progress axis.
        curve: Curve<f64>,
    },
}

/// Evaluated value of one [`EffectSpec`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectOutput {
    /// Opacity in `[0, 1]`.
    Opacity {
        /// Output value.
        value: f64,
    },
    /// Directional offset.
    Offset {
        /// Output value.
        value: f64,
    },
    /// Revealed prefix.
    Text {
        /// Visible characters.
        text: String,
        /// Number of visible characters.
        chars: usize,
    },
    /// Drift position.
    Drift {
        /// Output value.
        value: f64,
    },
    /// Parallax or rotation value.
    Parallax {
        /// Output value.
        value: f64,
    },
    /// Sampled curve value.
    Curve {
        /// Output value.
        value: f64,
    },
}

impl EffectOutput {
    /// Scalar payload, if the output has one.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Opacity { value }
            | Self::Offset { value }
            | Self::Drift { value }
            | Self::Parallax { value }
            | Self::Curve { value } => Some(*value),
            Self::Text { .. } => None,
        }
    }
}

impl EffectSpec {
    /// Check nested ranges and curves.
    pub fn validate(&self) -> ScrollcueResult<()> {
        match self {
            Self::TextReveal { reveal, .. } => reveal.validate(),
            Self::Curve { curve } => curve.validate(),
            Self::Opacity | Self::Offset { .. } | Self::Drift { .. } | Self::Parallax { .. } => {
                Ok(())
            }
        }
    }

    /// Output for one frame, given the segment's envelope and bounds.
    pub fn evaluate(
        &self,
        envelope: Envelope,
        bounds: SegmentBounds,
        progress: Progress,
    ) -> ScrollcueResult<EffectOutput> {
        Ok(match self {
            Self::Opacity => EffectOutput::Opacity {
                value: envelope.value,
            },
            Self::Offset { enter, exit } => EffectOutput::Offset {
                value: directional_offset(envelope, *enter, *exit),
            },
            Self::TextReveal { text, reveal } => {
                let chars = reveal_char_count(text, *reveal, progress);
                EffectOutput::Text {
                    text: text.chars().take(chars).collect(),
                    chars,
                }
            }
            Self::Drift { from, to } => {
                let t = inverse_lerp(bounds.start_fade_in, bounds.end_fade_out, progress.get());
                EffectOutput::Drift {
                    value: lerp(*from, *to, t),
                }
            }
            Self::Parallax { base, rate, from } => EffectOutput::Parallax {
                value: base + rate * (progress.get() - from).max(0.0),
            },
            Self::Curve { curve } => EffectOutput::Curve {
                value: curve.sample(progress)?,
            },
        })
    }
}

/// Driven by the linear ramp position, not the eased envelope value.
fn directional_offset(envelope: Envelope, enter: f64, exit: f64) -> f64 {
    match envelope.phase {
        RampPhase::Before => enter,
        RampPhase::Entering => lerp(enter, 0.0, envelope.ramp),
        RampPhase::Plateau => 0.0,
        RampPhase::Exiting => lerp(0.0, exit, envelope.ramp),
        RampPhase::After => exit,
    }
}

/// `floor(len * t)` characters, `t` being the clamped position within `reveal`.
///
/// Pure in progress: scrolling back snaps to the shorter prefix.
pub fn reveal_char_count(text: &str, reveal: ProgressRange, progress: Progress) -> usize {
    let len = text.chars().count();
    let t = reveal.local(progress);
    (((len as f64) * t).floor() as usize).min(len)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/effect.rs"]
mod tests;
