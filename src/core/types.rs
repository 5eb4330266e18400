use serde::{Deserialize, Serialize};

/// A single art-movement entry positioned on the year axis.
///
/// Field names follow the camelCase JSON served by the movements endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineNode {
    pub id: String,
    pub year: i32,
    pub title: String,
    #[serde(default)]
    pub style_movement: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl TimelineNode {
    #[must_use]
    pub fn new(id: impl Into<String>, year: i32, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            year,
            title: title.into(),
            style_movement: None,
            description: String::new(),
            artists: Vec::new(),
            images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_style_movement(mut self, style_movement: impl Into<String>) -> Self {
        self.style_movement = Some(style_movement.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists = artists.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive equality against `title` or `style_movement`.
    #[must_use]
    pub fn matches_style_exact(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase() == needle_lower
            || self
                .style_movement
                .as_deref()
                .is_some_and(|style| style.to_lowercase() == needle_lower)
    }

    /// Case-insensitive containment against `title` or `style_movement`.
    #[must_use]
    pub fn matches_style_partial(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .style_movement
                .as_deref()
                .is_some_and(|style| style.to_lowercase().contains(needle_lower))
    }

    /// Search filter predicate. `term_lower` must already be lowercase.
    #[must_use]
    pub fn matches_search(&self, term_lower: &str) -> bool {
        if term_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(term_lower)
            || self.description.to_lowercase().contains(term_lower)
            || self
                .artists
                .iter()
                .any(|artist| artist.to_lowercase().contains(term_lower))
            || self
                .style_movement
                .as_deref()
                .is_some_and(|style| style.to_lowercase().contains(term_lower))
    }
}

/// Where a node currently sits on the rendered axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: String,
    pub year: i32,
    pub percent: f64,
    pub highlighted: bool,
    pub selected: bool,
}

/// A tick label on the year axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMarkPosition {
    pub year: i32,
    pub percent: f64,
}
