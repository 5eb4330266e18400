use serde::{Deserialize, Serialize};

use crate::core::TimelineNode;

use super::DetailPresenter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailCall {
    Show(String),
    Close,
    Navigate(String),
}

/// Headless presenter that records every invocation.
#[derive(Debug, Default)]
pub struct NullDetailPresenter {
    pub calls: Vec<DetailCall>,
}

impl NullDetailPresenter {
    /// Id of the last node shown and not closed since.
    #[must_use]
    pub fn open_node(&self) -> Option<&str> {
        match self.calls.last()? {
            DetailCall::Show(id) => Some(id.as_str()),
            DetailCall::Close | DetailCall::Navigate(_) => None,
        }
    }
}

impl DetailPresenter for NullDetailPresenter {
    fn show_detail(&mut self, node: &TimelineNode) {
        self.calls.push(DetailCall::Show(node.id.clone()));
    }

    fn close_detail(&mut self) {
        self.calls.push(DetailCall::Close);
    }

    fn navigate_to_detail(&mut self, node: &TimelineNode) {
        self.calls.push(DetailCall::Navigate(node.id.clone()));
    }
}
