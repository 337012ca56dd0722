//! Control Panel Component
//!
//! Search box and eaten selector; writes straight into the app store.

use leptos::prelude::*;

use crate::models::{Eaten, EATEN_OPTIONS};
use crate::store::{store_set_eaten, store_set_search, use_app_store, AppStateStoreFields};

#[component]
pub fn ControlPanel() -> impl IntoView {
    let store = use_app_store();
    let search = move || store.control_option().with(|c| c.search.clone());
    let eaten = move || store.control_option().with(|c| c.eaten);

    view! {
        <div class="ts-wrap control-panel">
            <div class="ts-input is-start-icon">
                <span class="ts-icon is-magnifying-glass-icon"></span>
                <input
                    type="text"
                    placeholder="搜尋店名、標籤..."
                    prop:value=search
                    on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                />
            </div>
            <div class="ts-select">
                <select on:change=move |ev| store_set_eaten(&store, Eaten::from_option_value(&event_target_value(&ev)))>
                    {EATEN_OPTIONS.iter().map(|(option, label)| {
                        let option = *option;
                        view! {
                            <option value=option.option_value() selected=move || eaten() == option>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
