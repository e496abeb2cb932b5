use crate::{
    foundation::core::ProgressRange,
    foundation::error::{ScrollcueError, ScrollcueResult},
    timeline::{effect::EffectSpec, segment::Segment},
};

/// Share of each slot spent on one fade ramp.
pub const DEFAULT_FADE_FRACTION: f64 = 0.15;

/// N items revealed one at a time across a shared progress range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceSpec {
    /// Items are named `{id_prefix}-{index}`.
    pub id_prefix: String,
    /// Progress range shared by all items.
    pub range: ProgressRange,
    /// Number of items.
    pub count: usize,
    /// Share of each slot spent on one ramp, within `[0, 0.5]`.
    #[serde(default = "default_fade_fraction")]
    pub fade_fraction: f64,
    /// Applied to every item.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

fn default_fade_fraction() -> f64 {
    DEFAULT_FADE_FRACTION
}

impl SequenceSpec {
    /// Id of item `index`.
    pub fn item_id(&self, index: usize) -> String {
        format!("{}-{index}", self.id_prefix)
    }

    /// Check the prefix, range and fade fraction.
    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.id_prefix.trim().is_empty() {
            return Err(ScrollcueError::configuration(
                "sequence id_prefix must be non-empty",
            ));
        }
        self.range.validate()?;
        validate_fade_fraction(self.fade_fraction)
    }

    /// Expand into one segment per item.
    pub fn segments(&self) -> ScrollcueResult<Vec<Segment>> {
        self.validate()?;
        let ids: Vec<String> = (0..self.count).map(|i| self.item_id(i)).collect();
        sequential_reveal(&ids, self.range, self.fade_fraction, &self.effects)
    }
}

fn validate_fade_fraction(fade_fraction: f64) -> ScrollcueResult<()> {
    if !(0.0..=0.5).contains(&fade_fraction) {
        return Err(ScrollcueError::configuration(format!(
            "sequence fade_fraction must be within [0, 0.5], got {fade_fraction}"
        )));
    }
    Ok(())
}

/// Equal slots of `range`, one per item.
pub fn slots(range: ProgressRange, n: usize) -> Vec<ProgressRange> {
    range.split(n)
}

/// One segment per id, each centred in its slot so that fade margins stay inside it.
pub fn sequential_reveal(
    ids: &[String],
    range: ProgressRange,
    fade_fraction: f64,
    effects: &[EffectSpec],
) -> ScrollcueResult<Vec<Segment>> {
    range.validate()?;
    validate_fade_fraction(fade_fraction)?;

    Ok(ids
        .iter()
        .zip(slots(range, ids.len()))
        .map(|(id, slot)| {
            let width = slot.len();
            let mut seg = Segment::new(
                id.clone(),
                slot.start + width / 2.0,
                width * (1.0 - 2.0 * fade_fraction),
                width * fade_fraction,
            );
            seg.effects = effects.to_vec();
            seg
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
