use approx::assert_relative_eq;
use art_timeline::TimelineError;
use art_timeline::api::{
    DragFactorPolicy, PointerTarget, ScrollDirection, TimelineEngine, TimelineEngineConfig,
    ViewportOffsetController,
};
use art_timeline::core::{TimelineNode, YearAxis};
use art_timeline::detail::NullDetailPresenter;
use art_timeline::storage::InMemorySessionStore;

fn engine(config: TimelineEngineConfig) -> TimelineEngine<NullDetailPresenter, InMemorySessionStore> {
    TimelineEngine::new(
        NullDetailPresenter::default(),
        InMemorySessionStore::new(),
        config,
    )
    .expect("engine init")
}

#[test]
fn step_scroll_left_twice_then_zero_drag_keeps_offset() {
    let mut controller = ViewportOffsetController::default();
    controller.step_scroll(ScrollDirection::Left);
    controller.step_scroll(ScrollDirection::Left);
    assert_relative_eq!(controller.offset(), 100.0);

    controller.begin_drag();
    let offset = controller.drag_by(0.0, 1000.0, 4.0).expect("drag");
    controller.end_drag();
    assert_relative_eq!(offset, 100.0);
    assert_relative_eq!(controller.offset(), 100.0);
}

#[test]
fn step_scroll_right_moves_negative() {
    let mut controller = ViewportOffsetController::new(25.0);
    assert_relative_eq!(controller.step_scroll(ScrollDirection::Right), -25.0);
    assert_relative_eq!(controller.step_percent(), 25.0);
}

#[test]
fn drag_is_relative_to_offset_at_drag_start() {
    let mut controller = ViewportOffsetController::default();
    controller.step_scroll(ScrollDirection::Left);
    controller.begin_drag();
    controller.drag_by(50.0, 1000.0, 4.0).expect("first move");
    let offset = controller.drag_by(100.0, 1000.0, 4.0).expect("second move");
    // 50 + (100 / 1000) * 100 * 4
    assert_relative_eq!(offset, 90.0);
    controller.end_drag();

    controller.begin_drag();
    let offset = controller.drag_by(-25.0, 1000.0, 4.0).expect("next drag");
    assert_relative_eq!(offset, 80.0);
}

#[test]
fn drag_rejects_invalid_container_width() {
    let mut controller = ViewportOffsetController::default();
    controller.begin_drag();
    for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = controller.drag_by(10.0, width, 4.0).expect_err("invalid width");
        assert!(matches!(err, TimelineError::InvalidContainerWidth { .. }));
    }
    assert_relative_eq!(controller.offset(), 0.0);
}

#[test]
fn center_on_year_then_snapshot_restore() {
    let axis = YearAxis::new(1872, 1924);
    let mut controller = ViewportOffsetController::default();
    let offset = controller.center_on_axis_year(axis, 1907);
    assert_relative_eq!(axis.position(1907, offset), 50.0, epsilon = 1e-9);

    let saved = controller.snapshot();
    controller.step_scroll(ScrollDirection::Left);
    controller.restore(saved).expect("restore");
    assert_relative_eq!(controller.offset(), saved);
    assert!(controller.restore(f64::NAN).is_err());
}

#[test]
fn engine_drag_commits_final_value_without_snap_back() {
    let mut engine = engine(TimelineEngineConfig::new(1000.0));
    engine.set_nodes(vec![
        TimelineNode::new("imp", 1872, "Impressionism"),
        TimelineNode::new("sur", 1924, "Surrealism"),
    ]);

    engine.pointer_down(PointerTarget::Track, 500.0).expect("down");
    engine.pointer_move(520.0).expect("move");
    engine.pointer_move(550.0).expect("move");
    engine.pointer_up();
    assert_relative_eq!(engine.offset(), 20.0);

    engine.pointer_down(PointerTarget::Track, 100.0).expect("down");
    engine.pointer_move(75.0).expect("move");
    engine.pointer_up();
    assert_relative_eq!(engine.offset(), 10.0);
}

#[test]
fn engine_drag_uses_span_scaled_factor() {
    let config = TimelineEngineConfig::new(1000.0).with_drag_factor(DragFactorPolicy::ScaledBySpan {
        base_factor: 4.0,
        reference_span_years: 104.0,
    });
    let mut engine = engine(config);
    engine.set_nodes(vec![
        TimelineNode::new("imp", 1872, "Impressionism"),
        TimelineNode::new("sur", 1924, "Surrealism"),
    ]);
    assert_relative_eq!(engine.drag_factor(), 2.0);

    engine.pointer_down(PointerTarget::Track, 0.0).expect("down");
    engine.pointer_move(100.0).expect("move");
    engine.pointer_up();
    assert_relative_eq!(engine.offset(), 20.0);
}

#[test]
fn engine_step_scroll_and_resize_validation() {
    let mut engine = engine(TimelineEngineConfig::default());
    assert_relative_eq!(engine.step_scroll(ScrollDirection::Left), 50.0);
    assert_relative_eq!(engine.step_scroll(ScrollDirection::Left), 100.0);
    assert!(engine.resize(0.0).is_err());
    engine.resize(640.0).expect("resize");
    assert_relative_eq!(engine.container_width_px(), 640.0);
}

#[test]
fn zero_length_gesture_after_drag_keeps_committed_offset() {
    let mut engine = engine(TimelineEngineConfig::new(800.0));
    engine.pointer_down(PointerTarget::Track, 300.0).expect("down");
    engine.pointer_move(340.0).expect("move");
    engine.pointer_up();
    let committed = engine.offset();
    // (40 / 800) * 100 * 4
    assert_relative_eq!(committed, 20.0);

    engine.pointer_down(PointerTarget::Track, 123.0).expect("down");
    engine.pointer_up();
    assert_relative_eq!(engine.offset(), committed);
}
