use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::components::format::{date_input_value, format_date, parse_end_date, parse_start_date};
use crate::list::{Filters, ListController, ListRecord, StatusFilter};
use crate::models::Ledger;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusTab {
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// One tab per status option, each with the number of rows (before any
/// other filter) it would show.
pub fn status_tabs<R: ListRecord>(
    controller: &ListController<R>,
    options: &[(StatusFilter<R::Status>, &'static str)],
) -> Vec<StatusTab> {
    options
        .iter()
        .map(|(status, label)| StatusTab {
            label: *label,
            count: controller.status_count(*status),
            active: controller.filters.status == *status,
        })
        .collect()
}

#[component]
pub fn StatusTabs(
    #[prop(into)] tabs: Signal<Vec<StatusTab>>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="status-tabs" role="tablist">
            {move || {
                tabs.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, tab)| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=if tab.active { "tab active" } else { "tab" }
                                on:click=move |_| on_select.run(index)
                            >
                                {tab.label}
                                <span class=format!("label label-{}", tab.label.to_lowercase())>
                                    {tab.count}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Keyword, date range and (for transactions) ledger inputs.
///
/// An end date before the start date is flagged inline; the date stage of
/// the filter is skipped until the range is fixed.
#[component]
pub fn FilterToolbar(
    #[prop(into)] keyword: Signal<String>,
    #[prop(into)] start_date: Signal<Option<DateTime<Utc>>>,
    #[prop(into)] end_date: Signal<Option<DateTime<Utc>>>,
    #[prop(into)] date_error: Signal<bool>,
    on_keyword: Callback<String>,
    on_start_date: Callback<Option<DateTime<Utc>>>,
    on_end_date: Callback<Option<DateTime<Utc>>>,
    #[prop(default = None)] ledgers: Option<Signal<Vec<Ledger>>>,
    #[prop(default = None)] on_toggle_ledger: Option<Callback<Ledger>>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    let ledger_select = ledgers.zip(on_toggle_ledger).map(|(selected, on_toggle)| {
        view! {
            <fieldset class="ledger-select">
                <legend>"Ledger"</legend>
                {Ledger::ALL
                    .iter()
                    .copied()
                    .map(|ledger| {
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.get().contains(&ledger)
                                    on:change=move |_| on_toggle.run(ledger)
                                />
                                {ledger.as_str()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
        }
    });

    view! {
        <div class="filter-toolbar">
            {ledger_select}

            <div class="form-group">
                <label>"Start date"</label>
                <input
                    type="date"
                    prop:value=move || date_input_value(start_date.get())
                    on:change=move |ev| on_start_date.run(parse_start_date(&event_target_value(&ev)))
                />
            </div>

            <div class="form-group">
                <label>"End date"</label>
                <input
                    type="date"
                    class=move || if date_error.get() { "input-error" } else { "" }
                    prop:value=move || date_input_value(end_date.get())
                    on:change=move |ev| on_end_date.run(parse_end_date(&event_target_value(&ev)))
                />
                <Show when=move || date_error.get()>
                    <small class="field-error">"End date must be later than start date"</small>
                </Show>
            </div>

            <div class="form-group form-group-grow">
                <input
                    type="search"
                    placeholder=placeholder
                    prop:value=move || keyword.get()
                    on:input=move |ev| on_keyword.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Keyword,
    Status,
    Ledger(Ledger),
    Dates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub kind: ChipKind,
    pub label: String,
}

/// Chips for every active filter, in toolbar order.
pub fn filter_chips<S: Copy>(
    filters: &Filters<S>,
    status_label: impl Fn(S) -> &'static str,
) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    if let StatusFilter::Only(status) = filters.status {
        chips.push(FilterChip {
            kind: ChipKind::Status,
            label: format!("Status: {}", status_label(status)),
        });
    }

    for ledger in &filters.ledgers {
        chips.push(FilterChip {
            kind: ChipKind::Ledger(*ledger),
            label: format!("Ledger: {}", ledger.as_str()),
        });
    }

    if filters.start_date.is_some() && filters.end_date.is_some() {
        chips.push(FilterChip {
            kind: ChipKind::Dates,
            label: format!(
                "Date: {} - {}",
                format_date(filters.start_date),
                format_date(filters.end_date)
            ),
        });
    }

    if !filters.keyword.is_empty() {
        chips.push(FilterChip {
            kind: ChipKind::Keyword,
            label: format!("Keyword: {}", filters.keyword),
        });
    }

    chips
}

pub fn remove_chip<R: ListRecord>(controller: &mut ListController<R>, kind: ChipKind) {
    match kind {
        ChipKind::Keyword => controller.set_keyword(String::new()),
        ChipKind::Status => controller.set_status(StatusFilter::All),
        ChipKind::Ledger(ledger) => controller.toggle_ledger(ledger),
        ChipKind::Dates => {
            controller.set_start_date(None);
            controller.set_end_date(None);
        }
    }
}

/// Result count and removable chips, shown while any filter is active.
#[component]
pub fn FiltersResult(
    #[prop(into)] chips: Signal<Vec<FilterChip>>,
    #[prop(into)] total: Signal<usize>,
    on_remove: Callback<ChipKind>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !chips.get().is_empty()>
            <div class="filters-result">
                <p class="result-count">
                    <strong>{move || total.get()}</strong>
                    " results found"
                </p>
                <div class="chips">
                    {move || {
                        chips
                            .get()
                            .into_iter()
                            .map(|chip| {
                                let kind = chip.kind;
                                view! {
                                    <span class="chip">
                                        {chip.label}
                                        <button
                                            class="btn-close"
                                            type="button"
                                            on:click=move |_| on_remove.run(kind)
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="btn btn-secondary btn-inline"
                        type="button"
                        on:click=move |_| on_reset.run(())
                    >
                        "Clear"
                    </button>
                </div>
            </div>
        </Show>
    }
}
