//! Table building blocks shared by the list views.

use std::fmt::Debug;

use leptos::prelude::*;

use crate::list::records::ColumnDef;
use crate::list::{Order, ROWS_PER_PAGE_OPTIONS};

const ROW_HEIGHT: usize = 56;
const DENSE_ROW_HEIGHT: usize = 36;

/// Header row: select-all checkbox, one sortable cell per column, then
/// `trailing` plain cells (status, actions).
#[component]
pub fn TableHeadCustom<C>(
    #[prop(into)] order_by: Signal<C>,
    #[prop(into)] order: Signal<Order>,
    #[prop(into)] row_count: Signal<usize>,
    #[prop(into)] num_selected: Signal<usize>,
    on_sort: Callback<C>,
    on_select_all: Callback<bool>,
    #[prop(optional)] trailing: Vec<&'static str>,
) -> impl IntoView
where
    C: ColumnDef + Debug + Send + Sync,
{
    let all_checked = move || {
        let rows = row_count.get();
        rows > 0 && num_selected.get() == rows
    };
    let indeterminate = move || {
        let selected = num_selected.get();
        selected > 0 && selected < row_count.get()
    };

    view! {
        <thead>
            <tr>
                <th class="col-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=all_checked
                        prop:indeterminate=indeterminate
                        on:change=move |ev| on_select_all.run(event_target_checked(&ev))
                    />
                </th>
                {C::ALL
                    .iter()
                    .copied()
                    .map(|column| {
                        let active = move || order_by.get() == column;
                        let arrow = move || match (active(), order.get()) {
                            (false, _) => "",
                            (true, Order::Asc) => "▲",
                            (true, Order::Desc) => "▼",
                        };
                        view! {
                            <th
                                class=move || if active() { "sortable active" } else { "sortable" }
                                data-column=column.id()
                                on:click=move |_| on_sort.run(column)
                            >
                                {column.label()}
                                <span class="sort-arrow">{arrow}</span>
                            </th>
                        }
                    })
                    .collect_view()}
                {trailing.into_iter().map(|label| view! { <th>{label}</th> }).collect_view()}
            </tr>
        </thead>
    }
}

/// Bar shown above the table while rows are selected.
#[component]
pub fn TableSelectedAction(
    #[prop(into)] num_selected: Signal<usize>,
    #[prop(into)] row_count: Signal<usize>,
    on_select_all: Callback<bool>,
    on_action: Callback<()>,
    action_label: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || { num_selected.get() > 0 }>
            <div class="table-selected-action">
                <input
                    type="checkbox"
                    prop:checked=move || num_selected.get() == row_count.get()
                    prop:indeterminate=move || num_selected.get() < row_count.get()
                    on:change=move |ev| on_select_all.run(event_target_checked(&ev))
                />
                <span class="selected-count">{move || num_selected.get()}" selected"</span>
                <button
                    class="btn btn-danger btn-inline"
                    type="button"
                    on:click=move |_| on_action.run(())
                >
                    {action_label}
                </button>
            </div>
        </Show>
    }
}

/// Placeholder row when there is nothing to show.
#[component]
pub fn TableNoData(
    #[prop(into)] not_found: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    colspan: usize,
) -> impl IntoView {
    let message = move || {
        if loading.get() {
            Some("Loading...")
        } else if not_found.get() {
            Some("No results found")
        } else if empty.get() {
            Some("No data")
        } else {
            None
        }
    };

    view! {
        {move || {
            message()
                .map(|text| {
                    view! {
                        <tr class="no-data">
                            <td colspan=colspan.to_string()>
                                <p class="empty-state">{text}</p>
                            </td>
                        </tr>
                    }
                })
        }}
    }
}

/// Filler keeping the last page as tall as a full one.
#[component]
pub fn TableEmptyRows(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] dense: Signal<bool>,
    colspan: usize,
) -> impl IntoView {
    view! {
        {move || {
            let rows = count.get();
            (rows > 0)
                .then(|| {
                    let row_height = if dense.get() { DENSE_ROW_HEIGHT } else { ROW_HEIGHT };
                    view! {
                        <tr class="empty-rows" style=format!("height: {}px", rows * row_height)>
                            <td colspan=colspan.to_string()></td>
                        </tr>
                    }
                })
        }}
    }
}

/// Page navigation, rows-per-page select and dense toggle.
#[component]
pub fn TablePaginationCustom(
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] rows_per_page: Signal<usize>,
    #[prop(into)] dense: Signal<bool>,
    on_change_page: Callback<usize>,
    on_change_rows_per_page: Callback<usize>,
    on_change_dense: Callback<bool>,
) -> impl IntoView {
    let range = move || {
        let total = total.get();
        if total == 0 {
            return "0 of 0".to_string();
        }
        let from = page.get() * rows_per_page.get() + 1;
        let to = (from + rows_per_page.get() - 1).min(total);
        format!("{from}–{to} of {total}")
    };
    let is_last = move || (page.get() + 1) * rows_per_page.get() >= total.get();

    view! {
        <div class="table-pagination">
            <label class="dense-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || dense.get()
                    on:change=move |ev| on_change_dense.run(event_target_checked(&ev))
                />
                "Dense"
            </label>

            <div class="pagination-controls">
                <label>
                    "Rows per page: "
                    <select
                        prop:value=move || rows_per_page.get().to_string()
                        on:change=move |ev| {
                            if let Ok(rows) = event_target_value(&ev).parse::<usize>() {
                                on_change_rows_per_page.run(rows);
                            }
                        }
                    >
                        {ROWS_PER_PAGE_OPTIONS
                            .iter()
                            .map(|option| {
                                let value = option.to_string();
                                view! { <option value=value.clone()>{value.clone()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>

                <span class="page-range">{range}</span>

                <button
                    class="btn btn-secondary btn-inline"
                    type="button"
                    disabled=move || page.get() == 0
                    on:click=move |_| on_change_page.run(page.get_untracked().saturating_sub(1))
                >
                    "‹"
                </button>
                <button
                    class="btn btn-secondary btn-inline"
                    type="button"
                    disabled=is_last
                    on:click=move |_| on_change_page.run(page.get_untracked() + 1)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
