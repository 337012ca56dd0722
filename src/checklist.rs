//! Checklist Store
//!
//! Per-entry checked state: rehydration from storage, toggling, merging of
//! derived visibility, and persistence.

use crate::models::ChecklistRow;

/// Storage key holding the serialized checklist
pub const STORAGE_KEY: &str = "checkList";

// ========================
// Rehydration
// ========================

/// Why persisted state was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Malformed(String),
    LengthMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Malformed(msg) => write!(f, "Malformed checklist: {}", msg),
            InvalidReason::LengthMismatch { expected, found } => {
                write!(f, "Checklist has {} rows, dataset has {}", found, expected)
            }
        }
    }
}

impl std::error::Error for InvalidReason {}

/// Result of validating persisted state against the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rehydrated {
    Valid(Vec<ChecklistRow>),
    Invalid(InvalidReason),
}

/// Validate persisted JSON against a dataset of `len` entries.
///
/// Missing or blank input is read as an empty checklist. Row ids are
/// renumbered to their positions; checked values are kept.
pub fn rehydrate(raw: Option<&str>, len: usize) -> Rehydrated {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => "[]",
    };

    let mut rows: Vec<ChecklistRow> = match serde_json::from_str(raw) {
        Ok(rows) => rows,
        Err(e) => return Rehydrated::Invalid(InvalidReason::Malformed(e.to_string())),
    };

    if rows.len() != len {
        return Rehydrated::Invalid(InvalidReason::LengthMismatch {
            expected: len,
            found: rows.len(),
        });
    }

    for (i, row) in rows.iter_mut().enumerate() {
        row.id = i;
    }

    Rehydrated::Valid(rows)
}

/// All-unchecked, all-visible checklist of `len` rows
pub fn fresh(len: usize) -> Vec<ChecklistRow> {
    (0..len).map(ChecklistRow::new).collect()
}

/// Persisted rows when valid, otherwise a fresh checklist
pub fn initialize(raw: Option<&str>, len: usize) -> Vec<ChecklistRow> {
    match rehydrate(raw, len) {
        Rehydrated::Valid(rows) => rows,
        Rehydrated::Invalid(_) => fresh(len),
    }
}

// ========================
// Transformations
// ========================

/// Copy of `rows` with row `index` set to `value`; out of range is a no-op
pub fn toggle(rows: &[ChecklistRow], index: usize, value: bool) -> Vec<ChecklistRow> {
    let mut next = rows.to_vec();
    if let Some(row) = next.get_mut(index) {
        row.value = value;
    }
    next
}

/// Copy of `rows` carrying the freshly derived hidden flags
pub fn merge_hidden(rows: &[ChecklistRow], hidden: &[bool]) -> Vec<ChecklistRow> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| ChecklistRow {
            is_hidden: hidden.get(i).copied().unwrap_or(row.is_hidden),
            ..*row
        })
        .collect()
}

/// Counts shown in the host status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChecklistSummary {
    pub total: usize,
    pub checked: usize,
    pub visible: usize,
}

pub fn summarize(rows: &[ChecklistRow]) -> ChecklistSummary {
    ChecklistSummary {
        total: rows.len(),
        checked: rows.iter().filter(|r| r.value).count(),
        visible: rows.iter().filter(|r| !r.is_hidden).count(),
    }
}

// ========================
// Persistence
// ========================

/// Storage access failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable(String),
    Serialize(String),
    Write(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialize failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Key-value slot the checklist is read from and written to
pub trait ChecklistStorage {
    /// Raw persisted JSON, if any
    fn load(&self) -> Option<String>;

    fn save(&self, json: &str) -> Result<(), StorageError>;
}

/// Serialize and write the full checklist
pub fn persist<S: ChecklistStorage + ?Sized>(
    storage: &S,
    rows: &[ChecklistRow],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(rows).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.save(&json)
}

/// Browser `window.localStorage` under [`STORAGE_KEY`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl ChecklistStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, json: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(STORAGE_KEY, json)
            .map_err(|e: wasm_bindgen::JsValue| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory slot for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    slot: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl ChecklistStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, json: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(json.to_string());
        Ok(())
    }
}
