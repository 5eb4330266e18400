use approx::assert_relative_eq;
use art_timeline::api::{NavigationOutcome, TimelineEngine, TimelineEngineConfig};
use art_timeline::core::TimelineNode;
use art_timeline::detail::NullDetailPresenter;
use art_timeline::storage::InMemorySessionStore;

fn engine() -> TimelineEngine<NullDetailPresenter, InMemorySessionStore> {
    let mut engine = TimelineEngine::new(
        NullDetailPresenter::default(),
        InMemorySessionStore::new(),
        TimelineEngineConfig::default(),
    )
    .expect("engine init");
    engine.set_nodes(vec![
        TimelineNode::new("imp", 1872, "Impressionism")
            .with_artists(["Claude Monet", "Berthe Morisot"])
            .with_description("Light and color in everyday scenes."),
        TimelineNode::new("cub", 1907, "Cubism").with_artists(["Pablo Picasso", "Georges Braque"]),
        TimelineNode::new("sur", 1924, "Surrealism")
            .with_style_movement("Dada offshoot")
            .with_artists(["Salvador Dali"]),
        TimelineNode::new("pop", 1955, "Pop Art").with_artists(["Andy Warhol"]),
    ]);
    engine.mount();
    engine
}

#[test]
fn search_matches_title_artist_description_and_movement() {
    let mut engine = engine();
    assert_eq!(engine.set_search_term("PICASSO"), 1);
    assert_eq!(engine.set_search_term("everyday"), 1);
    assert_eq!(engine.set_search_term("dada"), 1);
    assert_eq!(engine.set_search_term("ism"), 3);
    assert_eq!(engine.clear_search(), 4);
}

#[test]
fn axis_follows_visible_nodes() {
    let mut engine = engine();
    assert_eq!(engine.axis().min_year(), 1872);
    assert_eq!(engine.axis().max_year(), 1955);

    engine.set_search_term("ism");
    let axis = engine.axis();
    assert_eq!((axis.min_year(), axis.max_year()), (1872, 1924));
    let ids: Vec<_> = engine.node_positions().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["imp", "cub", "sur"]);
    assert_relative_eq!(engine.node_position("sur").expect("sur"), 100.0, epsilon = 1e-9);
}

#[test]
fn empty_result_uses_default_axis() {
    let mut engine = engine();
    assert_eq!(engine.set_search_term("baroque"), 0);
    let axis = engine.axis();
    assert_eq!((axis.min_year(), axis.max_year()), (1800, 2023));
    assert!(engine.node_positions().is_empty());
    assert_eq!(engine.year_marks().len(), 21);
}

#[test]
fn deep_link_to_filtered_out_node_clears_search() {
    let mut engine = engine();
    engine.set_search_term("monet");
    let outcome = engine.apply_query("style=cubism");
    assert!(matches!(
        outcome,
        NavigationOutcome::Focused { ref node_id, .. } if node_id == "cub"
    ));
    assert_eq!(engine.search_term(), "");

    let snapshot = engine.snapshot();
    let cub = snapshot.node("cub").expect("cub rendered");
    assert_relative_eq!(cub.percent, 50.0, epsilon = 1e-9);
    assert!(cub.highlighted);
    assert_eq!(snapshot.highlighted.as_deref(), Some("cub"));
}

#[test]
fn deep_link_to_visible_node_keeps_search() {
    let mut engine = engine();
    engine.set_search_term("ism");
    engine.apply_query("style=surrealism");
    assert_eq!(engine.search_term(), "ism");
    assert_relative_eq!(engine.node_position("sur").expect("sur"), 50.0, epsilon = 1e-9);
}

#[test]
fn year_mark_click_only_considers_visible_nodes() {
    let mut engine = engine();
    engine.set_search_term("warhol");
    let outcome = engine.focus_year(1900);
    assert!(matches!(
        outcome,
        NavigationOutcome::Focused { ref node_id, .. } if node_id == "pop"
    ));
}

#[test]
fn reload_keeps_search_term() {
    let mut engine = engine();
    engine.set_search_term("cub");
    engine.set_nodes(vec![
        TimelineNode::new("cub", 1907, "Cubism"),
        TimelineNode::new("fut", 1909, "Futurism"),
    ]);
    assert_eq!(engine.search_term(), "cub");
    assert_eq!(engine.visible_nodes().count(), 1);
}
