//! Detail-view collaborator invoked when a node is selected.

mod null_presenter;

pub use null_presenter::{DetailCall, NullDetailPresenter};

use crate::core::TimelineNode;

/// Host-side detail renderer. The engine expects no return value.
pub trait DetailPresenter {
    /// Shows the inline detail panel for `node`.
    fn show_detail(&mut self, node: &TimelineNode);

    fn close_detail(&mut self) {}

    /// Leaves the timeline for the node's full detail page.
    fn navigate_to_detail(&mut self, _node: &TimelineNode) {}
}
