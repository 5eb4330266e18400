use art_timeline::api::{StorageKeys, TimelineEngine, TimelineEngineConfig};
use art_timeline::core::{JsonNodeSource, NodeSource, StaticNodeSource, TimelineNode};
use art_timeline::detail::NullDetailPresenter;
use art_timeline::error::TimelineResult;
use art_timeline::storage::InMemorySessionStore;
use art_timeline::TimelineError;

struct FailingSource;

impl NodeSource for FailingSource {
    fn fetch_nodes(&mut self) -> TimelineResult<Vec<TimelineNode>> {
        Err(TimelineError::Source("backend unavailable".to_owned()))
    }
}

fn engine() -> TimelineEngine<NullDetailPresenter, InMemorySessionStore> {
    TimelineEngine::new(
        NullDetailPresenter::default(),
        InMemorySessionStore::new(),
        TimelineEngineConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn json_payload_loads_camel_case_fields() {
    let payload = r#"{
        "data": [
            {
                "id": "sur",
                "year": 1924,
                "title": "Surrealism",
                "styleMovement": "Surrealist",
                "artists": ["Salvador Dali", "Rene Magritte"],
                "images": ["dali.jpg"]
            },
            { "id": "imp", "year": 1872, "title": "Impressionism" }
        ]
    }"#;
    let mut engine = engine();
    let count = engine
        .load_nodes(&mut JsonNodeSource::new(payload))
        .expect("load nodes");
    assert_eq!(count, 2);
    let ids: Vec<_> = engine.nodes().iter().map(|node| node.id.as_str()).collect();
    assert_eq!(ids, ["imp", "sur"]);
    let sur = &engine.nodes()[1];
    assert_eq!(sur.style_movement.as_deref(), Some("Surrealist"));
    assert_eq!(sur.artists.len(), 2);
    assert!(engine.nodes()[0].description.is_empty());
}

#[test]
fn failed_fetch_keeps_previous_dataset() {
    let mut engine = engine();
    engine
        .load_nodes(&mut StaticNodeSource::new(vec![TimelineNode::new(
            "cub", 1907, "Cubism",
        )]))
        .expect("static load");

    let err = engine.load_nodes(&mut FailingSource).expect_err("fetch fails");
    assert!(matches!(err, TimelineError::Source(_)));
    assert_eq!(engine.nodes().len(), 1);
    assert_eq!(engine.nodes()[0].id, "cub");

    let parse_err = engine
        .load_nodes(&mut JsonNodeSource::new("not json"))
        .expect_err("parse fails");
    assert!(matches!(parse_err, TimelineError::Source(_)));
    assert_eq!(engine.nodes().len(), 1);
}

#[test]
fn duplicate_ids_are_dropped_on_load() {
    let mut engine = engine();
    let count = engine.set_nodes(vec![
        TimelineNode::new("cub", 1907, "Cubism"),
        TimelineNode::new("cub", 1911, "Cubism again"),
        TimelineNode::new("fut", 1909, "Futurism"),
    ]);
    assert_eq!(count, 2);
    assert_eq!(engine.nodes()[0].title, "Cubism");
}

#[test]
fn invalid_configs_are_rejected_at_construction() {
    let invalid = [
        TimelineEngineConfig::new(0.0),
        TimelineEngineConfig::default().with_scroll_step_percent(f64::NAN),
        TimelineEngineConfig::default().with_thumbnail_drag_factor(-1.0),
        TimelineEngineConfig::default().with_click_slop_px(f64::INFINITY),
        TimelineEngineConfig::default().with_default_year_range(2000, 1900),
        TimelineEngineConfig::default().with_storage_keys(StorageKeys {
            offset: "same".to_owned(),
            scroll_top: "same".to_owned(),
            last_viewed_node: "marker".to_owned(),
        }),
    ];
    for config in invalid {
        let result = TimelineEngine::new(
            NullDetailPresenter::default(),
            InMemorySessionStore::new(),
            config,
        );
        assert!(result.is_err());
    }
}
