//! Data Panel Component
//!
//! Renders the restaurant table, keeps the persisted checklist in sync and
//! reports (checked, hidden) per row to the host.

use leptos::prelude::*;

use crate::checklist::{initialize, rehydrate, toggle, ChecklistStorage, LocalStorage, Rehydrated};
use crate::components::RamenRow;
use crate::models::{ChecklistRow, ControlOption, Entry};
use crate::ready::mark_content_ready;
use crate::visibility::{check_alignment, run_pass};

/// Column headings
pub const STR_OPENING: &str = "營業";
pub const STR_NAME: &str = "店名";
pub const STR_RESERVATION: &str = "訂位";
pub const STR_WAITING: &str = "等候時間";
pub const STR_TAGS: &str = "標籤";

#[component]
pub fn DataPanel(
    entries: StoredValue<Vec<Entry>>,
    #[prop(into)] control_option: Signal<ControlOption>,
    /// Receives the merged checklist after every derivation pass
    #[prop(into)] update_check_list: Callback<Vec<ChecklistRow>>,
) -> impl IntoView {
    let len = entries.with_value(|data| data.len());

    // Rehydrate once at mount
    let saved = LocalStorage.load();
    if let Rehydrated::Invalid(reason) = rehydrate(saved.as_deref(), len) {
        web_sys::console::warn_1(&format!("[DataPanel] Discarding saved checklist: {}", reason).into());
    }
    let initial = initialize(saved.as_deref(), len);
    let (hidden_flags, set_hidden_flags) = signal(initial.iter().map(|row| row.is_hidden).collect::<Vec<_>>());
    let (check_list, set_check_list) = signal(initial);

    // Derive visibility whenever controls or checked values change
    Effect::new(move |_| {
        let controls = control_option.get();
        let rows = check_list.get();
        let (pass, saved) = entries.with_value(|data| {
            if let Err(e) = check_alignment(&rows, data) {
                web_sys::console::error_1(&format!("[DataPanel] {}", e).into());
            }
            run_pass(&LocalStorage, &rows, &controls, data)
        });
        if let Err(e) = saved {
            web_sys::console::error_1(&format!("[DataPanel] Failed to save checklist: {}", e).into());
        }

        set_hidden_flags.set(pass.hidden);
        update_check_list.run(pass.merged);
    });

    // Dismiss the loading skeleton after first render
    Effect::new(move |_| mark_content_ready());

    let on_toggle = Callback::new(move |(idx, value): (usize, bool)| {
        let next = check_list.with_untracked(|rows| {
            if idx >= rows.len() {
                web_sys::console::warn_1(&format!("[DataPanel] Toggle index {} out of range", idx).into());
            }
            toggle(rows, idx, value)
        });
        set_check_list.set(next);
    });

    let rows_view = entries.with_value(|data| {
        data.iter()
            .cloned()
            .enumerate()
            .map(|(idx, entry)| {
                let hidden = Memo::new(move |_| hidden_flags.with(|h| h.get(idx).copied().unwrap_or(false)));
                let checked = Memo::new(move |_| check_list.with(|rows| rows.get(idx).is_some_and(|r| r.value)));
                view! {
                    <RamenRow idx=idx entry=entry hidden=hidden checked=checked on_toggle=on_toggle />
                }
            })
            .collect_view()
    });

    view! {
        <div class="ts-box">
            <table class="ts-table is-celled is-striped">
                <thead>
                    <tr>
                        <th class="is-collapsed"></th>
                        <th class="is-collapsed mobile:u-hidden">{STR_OPENING}</th>
                        <th>{STR_NAME}</th>
                        <th>{STR_RESERVATION}</th>
                        <th>{STR_WAITING}</th>
                        <th class="mobile:u-hidden">{STR_TAGS}</th>
                    </tr>
                </thead>
                <tbody id="ramen-info-list">
                    {rows_view}
                </tbody>
            </table>
            <div class="ts-wrap is-center-aligned">
                <div id="skeleton" class="ts-loading"></div>
            </div>
        </div>
    }
}
