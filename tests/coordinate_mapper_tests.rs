use art_timeline::core::{
    CENTER_PERCENT, NodeDataset, TimelineNode, YearAxis, centering_offset, position, year_marks,
};

#[test]
fn position_is_linear_in_year_and_offset() {
    let axis = YearAxis::new(1872, 1924);
    assert!((axis.position(1872, 0.0) - 0.0).abs() <= 1e-9);
    assert!((axis.position(1924, 0.0) - 100.0).abs() <= 1e-9);
    assert!((axis.position(1898, 0.0) - 50.0).abs() <= 1e-9);
    assert!((axis.position(1898, 12.5) - 62.5).abs() <= 1e-9);
}

#[test]
fn out_of_range_positions_are_returned_unclamped() {
    let value = position(2100.0, 1800.0, 100.0, -50.0);
    assert!((value - 250.0).abs() <= 1e-9);
    let negative = position(1700.0, 1800.0, 100.0, 0.0);
    assert!((negative + 100.0).abs() <= 1e-9);
}

#[test]
fn centering_offset_places_year_at_center() {
    let offset = centering_offset(1907.0, 1872.0, 52.0);
    assert!((position(1907.0, 1872.0, 52.0, offset) - CENTER_PERCENT).abs() <= 1e-9);
    assert!((offset - (50.0 - 35.0 / 52.0 * 100.0)).abs() <= 1e-9);
}

#[test]
fn single_year_dataset_uses_unit_time_range() {
    let dataset = NodeDataset::new(vec![
        TimelineNode::new("a", 1900, "A"),
        TimelineNode::new("b", 1900, "B"),
    ]);
    let axis = dataset.axis();
    assert_eq!(axis.span_years(), 0);
    assert_eq!(axis.time_range(), 1.0);
    assert!(axis.position(1900, 0.0).is_finite());
    assert!(axis.year_marks(20).is_empty());
}

#[test]
fn year_marks_include_both_ends_and_round() {
    let marks = year_marks(1872, 1924, 20);
    assert_eq!(marks.len(), 21);
    assert_eq!(marks.first().copied(), Some(1872));
    assert_eq!(marks.last().copied(), Some(1924));
    // 1872 + 52 * 1 / 20 = 1874.6
    assert_eq!(marks[1], 1875);
    assert!(marks.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn year_marks_with_custom_divisions() {
    assert_eq!(year_marks(1800, 2000, 4).as_slice(), &[1800, 1850, 1900, 1950, 2000]);
    assert!(year_marks(1800, 2000, 0).is_empty());
}
