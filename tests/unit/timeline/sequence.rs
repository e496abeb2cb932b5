use super::*;
use crate::foundation::core::Progress;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("t-{i}")).collect()
}

#[test]
fn three_items_get_equal_slots() {
    let range = ProgressRange::new(0.55, 0.95).unwrap();
    let s = slots(range, 3);
    assert!((s[0].end - 0.683_333).abs() < 1e-4);
    assert!((s[1].end - 0.816_667).abs() < 1e-4);
    assert_eq!(s[2].end, 0.95);
    for slot in &s {
        assert!((slot.len() - 0.133_333).abs() < 1e-4);
    }
}

#[test]
fn segments_stay_inside_their_slots() {
    let range = ProgressRange::new(0.55, 0.95).unwrap();
    let segs = sequential_reveal(&ids(3), range, 0.15, &[]).unwrap();
    for (seg, slot) in segs.iter().zip(slots(range, 3)) {
        let b = seg.bounds();
        assert!(b.start_fade_in >= slot.start - 1e-12);
        assert!(b.end_fade_out <= slot.end + 1e-12);
        assert!((seg.fade_width - slot.len() * 0.15).abs() < 1e-12);
        assert!((seg.active_width - slot.len() * 0.7).abs() < 1e-12);
    }
}

#[test]
fn at_most_adjacent_items_are_visible_together() {
    let range = ProgressRange::new(0.55, 0.95).unwrap();
    let segs = sequential_reveal(&ids(3), range, 0.15, &[]).unwrap();
    for i in 0..=2000 {
        let p = Progress::new(i as f64 / 2000.0);
        let visible: Vec<usize> = segs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.envelope(p).value > 0.0)
            .map(|(idx, _)| idx)
            .collect();
        assert!(visible.len() <= 2, "at {p:?}: {visible:?}");
        if let [a, b] = visible[..] {
            assert_eq!(b - a, 1, "non-adjacent items visible at {p:?}");
        }
    }
}

#[test]
fn each_item_reaches_full_visibility_at_slot_centre() {
    let range = ProgressRange::new(0.55, 0.95).unwrap();
    let segs = sequential_reveal(&ids(4), range, 0.15, &[EffectSpec::Opacity]).unwrap();
    for (seg, slot) in segs.iter().zip(slots(range, 4)) {
        let mid = Progress::new(slot.start + slot.len() / 2.0);
        assert_eq!(seg.envelope(mid).value, 1.0);
        assert_eq!(seg.effects, vec![EffectSpec::Opacity]);
    }
}

#[test]
fn sequence_expands_ids_and_rejects_bad_fraction() {
    let seq = SequenceSpec {
        id_prefix: "testimonial".to_string(),
        range: ProgressRange::new(0.55, 0.95).unwrap(),
        count: 2,
        fade_fraction: 0.15,
        effects: vec![],
    };
    let segs = seq.segments().unwrap();
    assert_eq!(segs[0].id, "testimonial-0");
    assert_eq!(segs[1].id, "testimonial-1");

    let bad = SequenceSpec {
        fade_fraction: 0.6,
        ..seq
    };
    assert!(bad.segments().is_err());
}

#[test]
fn empty_sequence_yields_no_segments() {
    let range = ProgressRange::new(0.2, 0.4).unwrap();
    assert!(sequential_reveal(&[], range, 0.15, &[]).unwrap().is_empty());
}
