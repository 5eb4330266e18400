pub mod coordinate;
pub mod dataset;
pub mod source;
pub mod types;

pub use coordinate::{
    CENTER_PERCENT, DEFAULT_YEAR_MARK_DIVISIONS, YearAxis, YearMarks, centering_offset, position,
    year_marks, year_percent,
};
pub use dataset::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, NodeDataset};
pub use source::{JsonNodeSource, NodeSource, StaticNodeSource};
pub use types::{NodePosition, TimelineNode, YearMarkPosition};
