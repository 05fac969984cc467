//! Presentation model as returned by the generation service.
//!
//! DESIGN
//! ======
//! `Slide` is strongly typed internally (`SlideBody` is one variant per
//! rendering shape) but travels as the loose JSON object the service emits:
//! a `type` tag plus a `content` field whose shape depends on the tag, and an
//! optional `table_data` block. The `WireSlide` shim converts in both
//! directions so exports send back what generation returned.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const UNTITLED_SLIDE: &str = "Untitled Slide";

// =============================================================================
// THEME
// =============================================================================

/// Four color tokens applied to the preview surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub secondary_color: String,
}

// =============================================================================
// PRESENTATION
// =============================================================================

/// Client-held copy of a generated presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationPreview {
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "complete_theme", skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub slides: Vec<Slide>,
}

impl PresentationPreview {
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Highest valid slide index; `0` for an empty deck.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a theme only when all four tokens are present. A partial theme is
/// dropped instead of failing the whole presentation.
fn complete_theme<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Theme>, D::Error> {
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match Theme::deserialize(&raw) {
        Ok(theme) => Ok(Some(theme)),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring incomplete presentation theme");
            Ok(None)
        }
    }
}

// =============================================================================
// SLIDE
// =============================================================================

/// One slide. Exactly one body variant applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireSlide", into = "WireSlide")]
pub struct Slide {
    pub title: String,
    pub body: SlideBody,
    pub layout: Option<String>,
    /// Speaker notes.
    pub notes: Option<String>,
    pub visual_notes: Option<String>,
}

impl Slide {
    #[must_use]
    pub fn new(title: impl Into<String>, body: SlideBody) -> Self {
        Self { title: title.into(), body, layout: None, notes: None, visual_notes: None }
    }
}

/// Rendering shape of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    /// Large title; the subtitle comes from the presentation.
    Title,
    /// Row 0 is the header. Rows may differ in length.
    Table { rows: Vec<Vec<String>> },
    Bullets { points: Vec<String> },
}

impl SlideBody {
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Table { .. } => "table",
            Self::Bullets { .. } => "content",
        }
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WireSlide {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_data: Option<WireTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visual_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireTable {
    #[serde(default)]
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl TryFrom<WireSlide> for Slide {
    type Error = String;

    fn try_from(wire: WireSlide) -> Result<Self, Self::Error> {
        let title = wire.title.unwrap_or_else(|| UNTITLED_SLIDE.to_owned());
        let body = match wire.kind.as_deref() {
            Some("title") => SlideBody::Title,
            Some("table") => {
                let rows = match wire.table_data {
                    Some(table) => std::iter::once(table.headers).chain(table.rows).collect(),
                    None => table_rows(&title, wire.content)?,
                };
                SlideBody::Table { rows }
            }
            _ => SlideBody::Bullets { points: bullet_points(&title, wire.content)? },
        };
        Ok(Self { title, body, layout: wire.layout, notes: wire.notes, visual_notes: wire.visual_notes })
    }
}

impl From<Slide> for WireSlide {
    fn from(slide: Slide) -> Self {
        let kind = Some(slide.body.type_tag().to_owned());
        let (content, table_data) = match slide.body {
            SlideBody::Title => (None, None),
            SlideBody::Bullets { points } => (Some(Value::from(points)), None),
            SlideBody::Table { rows } => {
                let content = Value::from(rows.iter().map(|row| Value::from(row.clone())).collect::<Vec<_>>());
                let mut rows = rows.into_iter();
                let headers = rows.next().unwrap_or_default();
                (Some(content), Some(WireTable { headers, rows: rows.collect() }))
            }
        };
        Self {
            title: Some(slide.title),
            kind,
            layout: slide.layout,
            content,
            table_data,
            notes: slide.notes,
            visual_notes: slide.visual_notes,
        }
    }
}

fn bullet_points(title: &str, content: Option<Value>) -> Result<Vec<String>, String> {
    match content {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) => Ok(vec![text]),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                other => Err(format!("slide '{title}': bullet must be a string, got {other}")),
            })
            .collect(),
        Some(other) => Err(format!("slide '{title}': content must be a list, got {other}")),
    }
}

fn table_rows(title: &str, content: Option<Value>) -> Result<Vec<Vec<String>>, String> {
    match content {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(rows)) => rows
            .into_iter()
            .map(|row| {
                serde_json::from_value::<Vec<String>>(row)
                    .map_err(|e| format!("slide '{title}': table row must be a list of strings ({e})"))
            })
            .collect(),
        Some(other) => Err(format!("slide '{title}': table content must be a list of rows, got {other}")),
    }
}
