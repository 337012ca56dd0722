//! Ramen Row Component
//!
//! One restaurant in the data panel table.

use leptos::prelude::*;

use crate::models::Entry;

/// A single table row; hidden rows stay mounted with `u-hidden`
#[component]
pub fn RamenRow(
    idx: usize,
    entry: Entry,
    #[prop(into)] hidden: Signal<bool>,
    #[prop(into)] checked: Signal<bool>,
    /// Called with (row index, new checked value)
    #[prop(into)] on_toggle: Callback<(usize, bool)>,
) -> impl IntoView {
    let reservation = entry.display_reservation();
    let waiting = entry.display_waiting();
    let tags = entry.display_tags();
    let name = if entry.google_map.is_empty() {
        view! { <span>{entry.name}</span> }.into_any()
    } else {
        view! {
            <a href=entry.google_map target="_blank" rel="noreferrer">
                {entry.name}
            </a>
        }.into_any()
    };

    view! {
        <tr
            id=format!("ramen-info-item-{}", idx)
            class=move || if hidden.get() { "u-hidden" } else { "" }
        >
            <td>
                <label class="ts-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || checked.get()
                        on:change=move |ev| on_toggle.run((idx, event_target_checked(&ev)))
                    />
                </label>
            </td>
            <td class="mobile:u-hidden">
                <span class="ts-icon is-battery-full-icon"></span>
            </td>
            <td>{name}</td>
            <td>{reservation}</td>
            <td>{waiting}</td>
            <td class="mobile:u-hidden">{tags}</td>
        </tr>
    }
}
