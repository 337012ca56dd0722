//! Frontend Models
//!
//! Ramen entries from the bundled dataset, persisted checklist rows and
//! the filter controls owned by the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder shown for missing optional fields
pub const NOT_AVAILABLE: &str = "N/A";

/// One ramen restaurant from the bundled dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "googleMap", default)]
    pub google_map: String,
    #[serde(default)]
    pub reservation: Option<String>,
    #[serde(default)]
    pub waiting: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    /// Any further fields; searchable but not displayed
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// All field values joined with `,` for free-text search.
    ///
    /// Order: name, map link, reservation, waiting, tags, then extra fields
    /// by key. Absent optional fields and an empty map link are skipped.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.name.clone()];
        if !self.google_map.is_empty() {
            parts.push(self.google_map.clone());
        }
        parts.extend(
            [&self.reservation, &self.waiting, &self.tags]
                .into_iter()
                .flatten()
                .cloned(),
        );
        parts.extend(self.extra.values().map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }));
        parts.join(",")
    }

    pub fn display_reservation(&self) -> String {
        or_placeholder(&self.reservation)
    }

    pub fn display_waiting(&self) -> String {
        or_placeholder(&self.waiting)
    }

    pub fn display_tags(&self) -> String {
        or_placeholder(&self.tags)
    }
}

fn or_placeholder(field: &Option<String>) -> String {
    match field {
        Some(value) if !value.is_empty() => value.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Persisted per-entry state (matches the stored JSON shape)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRow {
    pub id: usize,
    pub value: bool,
    /// Recomputed every pass, so absent in old saves is fine
    #[serde(rename = "isHidden", default)]
    pub is_hidden: bool,
}

impl ChecklistRow {
    /// Unchecked, visible row
    pub fn new(id: usize) -> Self {
        Self { id, value: false, is_hidden: false }
    }
}

/// Tri-state "eaten" filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eaten {
    /// No filtering on checked state
    #[default]
    Default,
    /// Only checked rows
    Yes,
    /// Only unchecked rows
    No,
}

/// Selector options: (variant, label)
pub const EATEN_OPTIONS: &[(Eaten, &str)] = &[
    (Eaten::Default, "全部"),
    (Eaten::Yes, "已吃"),
    (Eaten::No, "未吃"),
];

impl Eaten {
    /// Value used for `<option value=..>`
    pub fn option_value(self) -> &'static str {
        match self {
            Eaten::Default => "default",
            Eaten::Yes => "yes",
            Eaten::No => "no",
        }
    }

    /// Parse an `<option>` value; unknown values fall back to `Default`
    pub fn from_option_value(value: &str) -> Self {
        match value {
            "yes" => Eaten::Yes,
            "no" => Eaten::No,
            _ => Eaten::Default,
        }
    }
}

/// Filter controls supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlOption {
    pub eaten: Eaten,
    pub search: String,
}
