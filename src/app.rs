//! Ramen Checklist App
//!
//! Host shell: owns the filter controls and observes the checklist the
//! data panel reports.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::summarize;
use crate::components::{ControlPanel, DataPanel};
use crate::dataset::load_dataset;
use crate::models::ChecklistRow;
use crate::store::{store_update_check_list, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let entries = match load_dataset() {
        Ok(entries) => {
            web_sys::console::log_1(&format!("[APP] Loaded {} entries", entries.len()).into());
            entries
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] {}", e).into());
            Vec::new()
        }
    };
    let entries = StoredValue::new(entries);

    let control_option = Signal::derive(move || store.control_option().get());
    let update_check_list = Callback::new(move |rows: Vec<ChecklistRow>| {
        store_update_check_list(&store, rows);
    });

    let summary = move || {
        let s = store.check_list().with(|rows| summarize(rows));
        format!("顯示 {} / {} 間，已吃 {} 間", s.visible, s.total, s.checked)
    };

    view! {
        <main class="ts-container">
            <h1 class="ts-header is-huge">"拉麵清單"</h1>
            <ControlPanel />
            <p class="ts-text is-secondary item-count">{summary}</p>
            <DataPanel
                entries=entries
                control_option=control_option
                update_check_list=update_check_list
            />
        </main>
    }
}
