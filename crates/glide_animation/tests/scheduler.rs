mod common;

use common::{Slide, SlideSlots};
use glide_animation::{AnimationConfig, AnimationScheduler, ImplicitAnimationState};
use std::time::Duration;

type SlideState = ImplicitAnimationState<SlideSlots>;

#[test]
fn advance_reports_only_moving_nodes() {
    let mut scheduler = AnimationScheduler::new();
    let moving = scheduler.insert(SlideState::new(Slide::new(0.0, 100)));
    let idle = scheduler.insert(SlideState::new(Slide::new(0.0, 100)));

    scheduler
        .get_mut::<SlideState>(moving)
        .unwrap()
        .update(Slide::new(5.0, 100));
    assert!(scheduler.has_active_animations());

    let changed = scheduler.advance(Duration::from_millis(16));
    assert_eq!(changed.as_slice(), &[moving]);
    assert!(!changed.contains(&idle));

    scheduler.advance(Duration::from_millis(200));
    assert!(!scheduler.has_active_animations());
    assert!(scheduler.advance(Duration::from_millis(16)).is_empty());
    assert_eq!(
        scheduler.get::<SlideState>(moving).unwrap().resolve().offset,
        5.0
    );
}

#[test]
fn removing_an_animating_node_drops_it() {
    let mut scheduler = AnimationScheduler::new();
    let id = scheduler.insert(SlideState::new(Slide::new(0.0, 100)));
    scheduler
        .get_mut::<SlideState>(id)
        .unwrap()
        .update(Slide::new(1.0, 100));
    scheduler.advance(Duration::from_millis(10));

    assert!(scheduler.remove(id));
    assert!(!scheduler.contains(id));
    assert!(scheduler.get::<SlideState>(id).is_none());
    assert!(!scheduler.has_active_animations());
    assert!(scheduler.advance(Duration::from_millis(10)).is_empty());
    assert!(!scheduler.remove(id));
    assert!(scheduler.is_empty());
}

#[test]
fn step_uses_target_fps() {
    let config = AnimationConfig {
        target_fps: 10,
        ..AnimationConfig::default()
    };
    let mut scheduler = AnimationScheduler::from_config(&config);
    assert_eq!(scheduler.frame_duration(), Duration::from_millis(100));

    let id = scheduler.insert(SlideState::new(Slide::new(0.0, 400)));
    scheduler
        .get_mut::<SlideState>(id)
        .unwrap()
        .update(Slide::new(4.0, 400));
    scheduler.step();
    let state = scheduler.get::<SlideState>(id).unwrap();
    assert!((state.resolve().offset - 1.0).abs() < 1e-4);
}

#[test]
fn wrong_type_lookup_is_none() {
    let mut scheduler = AnimationScheduler::new();
    let id = scheduler.insert(SlideState::new(Slide::new(0.0, 100)));
    assert!(scheduler.get::<ImplicitAnimationState<OtherSlots>>(id).is_none());
    assert_eq!(scheduler.describe(id).unwrap().label, "slide");
}

#[derive(Default)]
struct OtherSlots;

impl glide_animation::ImplicitlyAnimated for OtherSlots {
    type Description = Slide;
    type Output = ();
    const LABEL: &'static str = "other";

    fn for_each_tween<V: glide_animation::TweenVisitor>(&mut self, _desc: &Slide, _visitor: &mut V) {}

    fn resolve(&self, _desc: &Slide, _t: f32) {}
}

#[test]
fn first_wall_clock_tick_does_not_jump() {
    let mut scheduler = AnimationScheduler::new();
    let id = scheduler.insert(SlideState::new(Slide::new(0.0, 100)));
    std::thread::sleep(Duration::from_millis(20));
    scheduler
        .get_mut::<SlideState>(id)
        .unwrap()
        .update(Slide::new(10.0, 100));

    assert!(scheduler.tick().is_empty());
    assert_eq!(scheduler.get::<SlideState>(id).unwrap().progress(), 0.0);
    assert!(scheduler.has_active_animations());
}
