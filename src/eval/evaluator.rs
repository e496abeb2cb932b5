use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::Progress,
    foundation::error::{ScrollcueError, ScrollcueResult},
    timeline::effect::EffectOutput,
    timeline::segment::{Envelope, Segment},
};

/// Validated, ordered set of segments with unique ids. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Validate every segment and reject duplicate ids.
    pub fn new(segments: Vec<Segment>) -> ScrollcueResult<Self> {
        let mut seen = BTreeSet::new();
        for seg in &segments {
            seg.validate()?;
            if !seen.insert(seg.id.as_str()) {
                return Err(ScrollcueError::configuration(format!(
                    "duplicate segment id '{}'",
                    seg.id
                )));
            }
        }
        Ok(Self { segments })
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment by id.
    pub fn get(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` when the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Instantaneous state of every segment at one progress value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct EvaluationResult {
    /// Progress the result was computed for.
    pub progress: Progress,
    /// Per-segment state keyed by id.
    pub segments: BTreeMap<String, SegmentOutput>,
}

/// Envelope and effect outputs of one segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentOutput {
    /// Trapezoid visibility.
    pub envelope: Envelope,
    /// One output per effect, in effect order.
    pub outputs: Vec<EffectOutput>,
}

impl SegmentOutput {
    /// First opacity output.
    pub fn opacity(&self) -> Option<f64> {
        self.outputs.iter().find_map(|o| match o {
            EffectOutput::Opacity { value } => Some(*value),
            _ => None,
        })
    }

    /// First offset or drift output.
    pub fn offset(&self) -> Option<f64> {
        self.outputs.iter().find_map(|o| match o {
            EffectOutput::Offset { value } | EffectOutput::Drift { value } => Some(*value),
            _ => None,
        })
    }

    /// First parallax output.
    pub fn parallax(&self) -> Option<f64> {
        self.outputs.iter().find_map(|o| match o {
            EffectOutput::Parallax { value } => Some(*value),
            _ => None,
        })
    }

    /// First curve output.
    pub fn curve(&self) -> Option<f64> {
        self.outputs.iter().find_map(|o| match o {
            EffectOutput::Curve { value } => Some(*value),
            _ => None,
        })
    }

    /// Revealed text, if the segment has a text reveal.
    pub fn text(&self) -> Option<&str> {
        self.outputs.iter().find_map(|o| match o {
            EffectOutput::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl EvaluationResult {
    /// State of segment `id`.
    pub fn get(&self, id: &str) -> Option<&SegmentOutput> {
        self.segments.get(id)
    }

    /// Envelope value for `id`.
    pub fn value(&self, id: &str) -> Option<f64> {
        self.get(id).map(|s| s.envelope.value)
    }

    /// Opacity output of `id`.
    pub fn opacity(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(SegmentOutput::opacity)
    }

    /// Offset or drift output of `id`.
    pub fn offset(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(SegmentOutput::offset)
    }

    /// Revealed text of `id`.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(SegmentOutput::text)
    }

    /// Ids with a non-zero envelope.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|(_, s)| s.envelope.value > 0.0)
            .map(|(id, _)| id.as_str())
    }
}

/// Stateless timeline evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate every segment at `progress`. Same input, same output.
    #[tracing::instrument(skip(timeline), fields(segments = timeline.len()))]
    pub fn evaluate(timeline: &Timeline, progress: Progress) -> ScrollcueResult<EvaluationResult> {
        let mut segments = BTreeMap::new();
        for seg in timeline.segments() {
            segments.insert(seg.id.clone(), eval_segment(seg, progress)?);
        }
        Ok(EvaluationResult { progress, segments })
    }
}

fn eval_segment(seg: &Segment, progress: Progress) -> ScrollcueResult<SegmentOutput> {
    let envelope = seg.envelope(progress);
    let bounds = seg.bounds();
    let outputs = seg
        .effects
        .iter()
        .map(|fx| fx.evaluate(envelope, bounds, progress))
        .collect::<ScrollcueResult<Vec<_>>>()
        .map_err(|e| ScrollcueError::evaluation(format!("segment '{}': {e}", seg.id)))?;
    Ok(SegmentOutput { envelope, outputs })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
