use super::*;
use crate::foundation::core::ProgressRange;
use crate::timeline::effect::EffectSpec;

fn timeline() -> Timeline {
    Timeline::new(vec![
        Segment::new("hero", 0.0, 0.0, 0.2).with_effect(EffectSpec::Opacity),
        Segment::new("capturing", 0.35, 0.1, 0.1)
            .with_effect(EffectSpec::Opacity)
            .with_effect(EffectSpec::Offset {
                enter: 50.0,
                exit: -50.0,
            }),
        Segment::new("ready", 0.65, 0.1, 0.1).with_effect(EffectSpec::TextReveal {
            text: "Ready".to_string(),
            reveal: ProgressRange::new(0.5, 0.7).unwrap(),
        }),
    ])
    .unwrap()
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Timeline::new(vec![
        Segment::new("a", 0.2, 0.1, 0.1),
        Segment::new("a", 0.5, 0.1, 0.1),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate segment id"));
}

#[test]
fn evaluates_every_segment() {
    let tl = timeline();
    let r = Evaluator::evaluate(&tl, Progress::new(0.35)).unwrap();
    assert_eq!(r.segments.len(), 3);
    assert_eq!(r.opacity("capturing"), Some(1.0));
    assert_eq!(r.offset("capturing"), Some(0.0));
    assert_eq!(r.value("hero"), Some(0.0));
    assert_eq!(r.text("ready"), Some(""));
    assert_eq!(r.visible().collect::<Vec<_>>(), vec!["capturing"]);
}

#[test]
fn hero_visible_at_top_and_gone_at_end() {
    let tl = timeline();
    assert_eq!(
        Evaluator::evaluate(&tl, Progress::ZERO).unwrap().value("hero"),
        Some(1.0)
    );
    assert_eq!(
        Evaluator::evaluate(&tl, Progress::ONE).unwrap().value("hero"),
        Some(0.0)
    );
}

#[test]
fn evaluation_is_a_pure_function_of_progress() {
    let tl = timeline();
    let a = Evaluator::evaluate(&tl, Progress::new(0.62)).unwrap();
    let _ = Evaluator::evaluate(&tl, Progress::new(0.9)).unwrap();
    let b = Evaluator::evaluate(&tl, Progress::new(0.62)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_curves_fail_timeline_validation() {
    let bad = Segment::new("bg", 0.5, 0.5, 0.0).with_effect(EffectSpec::Curve {
        curve: crate::animation::curve::Curve {
            keys: vec![],
            mode: Default::default(),
            default: None,
        },
    });
    assert!(Timeline::new(vec![bad]).is_err());
}
