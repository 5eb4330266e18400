use approx::assert_relative_eq;
use art_timeline::TimelineError;
use art_timeline::api::{
    ClickOutcome, RestoreOutcome, ScrollBehavior, TimelineEngine, TimelineEngineConfig,
    ViewCommand,
};
use art_timeline::core::TimelineNode;
use art_timeline::detail::{DetailCall, NullDetailPresenter};
use art_timeline::storage::{InMemorySessionStore, SessionStore};

type Engine = TimelineEngine<NullDetailPresenter, InMemorySessionStore>;

fn movements() -> Vec<TimelineNode> {
    vec![
        TimelineNode::new("imp", 1872, "Impressionism"),
        TimelineNode::new("cub", 1907, "Cubism"),
        TimelineNode::new("sur", 1924, "Surrealism"),
    ]
}

fn mounted_engine() -> Engine {
    let mut engine = TimelineEngine::new(
        NullDetailPresenter::default(),
        InMemorySessionStore::new(),
        TimelineEngineConfig::default(),
    )
    .expect("engine init");
    engine.set_nodes(movements());
    engine.mount();
    engine
}

#[test]
fn click_selects_shows_detail_and_schedules_smooth_scroll() {
    let mut engine = mounted_engine();
    let outcome = engine.click_node("cub").expect("click");
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            node_id: "cub".to_owned()
        }
    );
    assert_eq!(engine.selected(), Some("cub"));
    assert_eq!(engine.highlighted(), Some("cub"));
    assert_eq!(engine.presenter().open_node(), Some("cub"));
    assert_relative_eq!(engine.node_position("cub").expect("cub"), 50.0, epsilon = 1e-9);
    // View state is saved before the selection moves the offset.
    assert_eq!(engine.store().get("timeline_position").as_deref(), Some("0"));

    assert!(engine.advance_time(299).is_empty());
    assert_eq!(
        engine.advance_time(1),
        vec![ViewCommand::ScrollNodeIntoView {
            node_id: "cub".to_owned(),
            behavior: ScrollBehavior::Smooth
        }]
    );
}

#[test]
fn clicking_selected_node_toggles_it_off() {
    let mut engine = mounted_engine();
    engine.click_node("imp").expect("select");
    let outcome = engine.click_node("imp").expect("deselect");
    assert_eq!(
        outcome,
        ClickOutcome::Deselected {
            node_id: "imp".to_owned()
        }
    );
    assert_eq!(engine.selected(), None);
    assert_eq!(
        engine.presenter().calls,
        vec![DetailCall::Show("imp".to_owned()), DetailCall::Close]
    );
}

#[test]
fn selecting_another_node_moves_selection() {
    let mut engine = mounted_engine();
    engine.click_node("imp").expect("select imp");
    engine.click_node("sur").expect("select sur");
    assert_eq!(engine.selected(), Some("sur"));
    assert_eq!(engine.highlighted(), Some("sur"));
    let selected: Vec<_> = engine
        .node_positions()
        .into_iter()
        .filter(|position| position.selected)
        .map(|position| position.id)
        .collect();
    assert_eq!(selected, ["sur"]);
}

#[test]
fn unknown_node_click_is_an_error() {
    let mut engine = mounted_engine();
    let err = engine.click_node("dada").expect_err("unknown node");
    assert!(matches!(err, TimelineError::UnknownNode { ref id } if id == "dada"));
    assert_eq!(engine.selected(), None);
}

#[test]
fn close_detail_clears_selection() {
    let mut engine = mounted_engine();
    engine.click_node("cub").expect("select");
    engine.close_detail();
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.highlighted(), None);
    assert_eq!(engine.presenter().open_node(), None);
}

#[test]
fn detail_page_round_trip_returns_to_node() {
    let mut engine = mounted_engine();
    engine.open_detail_page("sur").expect("open page");
    assert_eq!(
        engine.store().get("last_viewed_art_movement").as_deref(),
        Some("sur")
    );
    assert_eq!(
        engine.presenter().calls.last(),
        Some(&DetailCall::Navigate("sur".to_owned()))
    );
    engine.unmount();

    let (presenter, store) = engine.into_parts();
    let mut engine = TimelineEngine::new(presenter, store, TimelineEngineConfig::default())
        .expect("engine init");
    engine.set_nodes(movements());
    assert_eq!(
        engine.mount(),
        RestoreOutcome::FocusedNode {
            node_id: "sur".to_owned()
        }
    );
    assert_relative_eq!(engine.node_position("sur").expect("sur"), 50.0, epsilon = 1e-9);
}

#[test]
fn detail_page_for_unknown_node_writes_nothing() {
    let mut engine = mounted_engine();
    assert!(engine.open_detail_page("dada").is_err());
    assert_eq!(engine.store().get("last_viewed_art_movement"), None);
    assert!(engine.presenter().calls.is_empty());
}

#[test]
fn reload_without_selected_node_closes_detail() {
    let mut engine = mounted_engine();
    engine.click_node("cub").expect("select");
    engine.set_nodes(vec![TimelineNode::new("imp", 1872, "Impressionism")]);
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.highlighted(), None);
    assert_eq!(engine.presenter().open_node(), None);
    assert!(engine.advance_time(1_000).is_empty());
}
