use indexmap::IndexSet;
use tracing::warn;

use super::coordinate::YearAxis;
use super::types::TimelineNode;

/// Axis bounds used before any node is loaded.
pub const DEFAULT_MIN_YEAR: i32 = 1800;
pub const DEFAULT_MAX_YEAR: i32 = 2023;

/// Ordered, read-only node collection plus the active search filter.
///
/// Nodes are held in ascending-year order; equal years keep the order in which
/// they arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDataset {
    nodes: Vec<TimelineNode>,
    search_term: String,
    visible: Vec<usize>,
}

impl NodeDataset {
    #[must_use]
    pub fn new(nodes: Vec<TimelineNode>) -> Self {
        let nodes = canonicalize_nodes(nodes);
        let visible = (0..nodes.len()).collect();
        Self {
            nodes,
            search_term: String::new(),
            visible,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes, ascending by year.
    #[must_use]
    pub fn nodes(&self) -> &[TimelineNode] {
        &self.nodes
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the search term and recomputes the visible subset.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        let needle = self.search_term.trim().to_lowercase();
        self.visible = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches_search(&needle))
            .map(|(index, _)| index)
            .collect();
    }

    /// Nodes passing the search filter, ascending by year.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &TimelineNode> {
        self.visible.iter().map(|&index| &self.nodes[index])
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_nodes().any(|node| node.id == id)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TimelineNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Axis spanning the visible nodes, or the default range when none are visible.
    #[must_use]
    pub fn axis(&self) -> YearAxis {
        self.axis_or(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR)
    }

    #[must_use]
    pub fn axis_or(&self, default_min_year: i32, default_max_year: i32) -> YearAxis {
        match (self.visible.first(), self.visible.last()) {
            (Some(&first), Some(&last)) => {
                YearAxis::new(self.nodes[first].year, self.nodes[last].year)
            }
            _ => YearAxis::new(default_min_year, default_max_year),
        }
    }

    /// Matches `title`/`style_movement` case-insensitively: exact first, then containment.
    #[must_use]
    pub fn find_by_style(&self, style: &str) -> Option<&TimelineNode> {
        let needle = style.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.nodes
            .iter()
            .find(|node| node.matches_style_exact(&needle))
            .or_else(|| {
                self.nodes
                    .iter()
                    .find(|node| node.matches_style_partial(&needle))
            })
    }

    /// Node with the smallest `|node.year - year|`; ties go to the earlier node.
    #[must_use]
    pub fn nearest_to_year(&self, year: i32) -> Option<&TimelineNode> {
        nearest_to_year(self.nodes.iter(), year)
    }

    /// Same as [`Self::nearest_to_year`] restricted to visible nodes.
    #[must_use]
    pub fn nearest_visible_to_year(&self, year: i32) -> Option<&TimelineNode> {
        nearest_to_year(self.visible_nodes(), year)
    }
}

fn nearest_to_year<'a, I>(nodes: I, year: i32) -> Option<&'a TimelineNode>
where
    I: IntoIterator<Item = &'a TimelineNode>,
{
    let mut best: Option<(&TimelineNode, i64)> = None;
    for node in nodes {
        let distance = (i64::from(node.year) - i64::from(year)).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((node, distance)),
        }
    }
    best.map(|(node, _)| node)
}

fn canonicalize_nodes(nodes: Vec<TimelineNode>) -> Vec<TimelineNode> {
    let mut seen = IndexSet::with_capacity(nodes.len());
    let mut canonical = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.clone()) {
            warn!(id = %node.id, "dropping timeline node with duplicate id");
            continue;
        }
        canonical.push(node);
    }
    canonical.sort_by_key(|node| node.year);
    canonical
}
