//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{ChecklistRow, ControlOption, Eaten};

/// Host-side state: the filter controls it owns and the checklist
/// last reported by the data panel
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Filter controls passed down to the data panel
    pub control_option: ControlOption,
    /// Snapshot of the last reported checklist (checked + hidden per row)
    pub check_list: Vec<ChecklistRow>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_search(store: &AppStore, search: String) {
    store.control_option().write().search = search;
}

pub fn store_set_eaten(store: &AppStore, eaten: Eaten) {
    store.control_option().write().eaten = eaten;
}

/// Replace the reported checklist snapshot
pub fn store_update_check_list(store: &AppStore, rows: Vec<ChecklistRow>) {
    *store.check_list().write() = rows;
}
