use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::progress::direction::NavVisibility;
use crate::scene::observer::FnObserver;
use crate::scene::target::{ElementStyle, SceneNode, StyleTarget, NodeTarget, shared};
use crate::timeline::effect::EffectSpec;
use crate::timeline::segment::Segment;

fn timeline() -> Timeline {
    Timeline::new(vec![
        Segment::new("hero", 0.0, 0.0, 0.2).with_effect(EffectSpec::Opacity),
        Segment::new("title", 0.5, 0.1, 0.1)
            .with_effect(EffectSpec::Opacity)
            .with_effect(EffectSpec::Offset {
                enter: 50.0,
                exit: -50.0,
            }),
    ])
    .unwrap()
}

fn director() -> SceneDirector {
    SceneDirector::new(timeline(), ProgressMapper::new(1.0))
}

#[test]
fn tick_pushes_outputs_to_bound_targets() {
    let mut d = director();
    let title = shared(ElementStyle::default());
    let hero = shared(SceneNode::default());
    d.bind("title", Box::new(StyleTarget::new(title.clone())));
    d.bind("hero", Box::new(NodeTarget::new(hero.clone())));

    assert_eq!(d.tick(0.0, 1000.0), FrameControl::Continue);
    assert_eq!(hero.borrow().opacity, 1.0);
    assert_eq!(title.borrow().opacity, 0.0);
    assert_eq!(title.borrow().translate_y, 50.0);

    d.tick(500.0, 1000.0);
    assert_eq!(hero.borrow().opacity, 0.0);
    assert!(!hero.borrow().visible);
    assert_eq!(title.borrow().opacity, 1.0);
    assert_eq!(title.borrow().translate_y, 0.0);
    assert_eq!(d.last_progress(), Some(Progress::new(0.5)));
}

#[test]
fn missing_targets_are_skipped() {
    let mut d = director();
    assert_eq!(d.tick(250.0, 1000.0), FrameControl::Continue);
    assert_eq!(d.last_result().segments.len(), 2);
}

#[test]
fn unmount_stops_the_frame_loop() {
    let mut d = director();
    let hero = shared(SceneNode::default());
    d.bind("hero", Box::new(NodeTarget::new(hero.clone())));
    d.tick(0.0, 1000.0);
    d.unmount();
    assert!(!d.is_mounted());
    assert_eq!(d.tick(900.0, 1000.0), FrameControl::Stop);
    // no further writes after unmount
    assert_eq!(hero.borrow().opacity, 1.0);
    assert_eq!(d.last_progress(), Some(Progress::ZERO));
}

#[test]
fn observers_receive_nav_toggles() {
    let events: Rc<RefCell<Vec<NavVisibility>>> = Rc::default();
    let sink = events.clone();

    let mut d = director();
    d.subscribe(Box::new(FnObserver(move |e: &NavVisibility| {
        sink.borrow_mut().push(*e)
    })));

    d.tick(0.0, 1000.0);
    d.tick(300.0, 1000.0);
    d.tick(400.0, 1000.0);
    d.tick(200.0, 1000.0);

    let seen: Vec<bool> = events.borrow().iter().map(|e| e.visible).collect();
    assert_eq!(seen, vec![true, false, true]);
}

#[test]
fn run_frames_counts_until_unmount() {
    let mut d = director();
    let n = run_frames(&mut d, (0..10).map(|i| (i as f64 * 100.0, 1000.0)));
    assert_eq!(n, 10);

    d.unmount();
    assert_eq!(run_frames(&mut d, [(0.0, 1000.0)]), 0);
}

#[test]
fn damping_lags_behind_raw_input() {
    let mut d = SceneDirector::new(timeline(), ProgressMapper::new(0.1));
    d.tick(0.0, 1000.0);
    d.tick(1000.0, 1000.0);
    let p = d.last_progress().unwrap().get();
    assert!(p > 0.0 && p < 0.2);
}

#[test]
fn direction_follows_last_movement() {
    let mut d = director();
    assert_eq!(d.direction(), None);
    d.tick(0.0, 1000.0);
    d.tick(300.0, 1000.0);
    assert_eq!(d.direction(), Some(ScrollDirection::Down));
    d.tick(100.0, 1000.0);
    assert_eq!(d.direction(), Some(ScrollDirection::Up));
}
