use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::CacheKey;
use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::filters::{
    filter_chips, remove_chip, status_tabs, ChipKind, FilterToolbar, FiltersResult, StatusTabs,
};
use crate::components::table::{
    TableEmptyRows, TableHeadCustom, TableNoData, TablePaginationCustom, TableSelectedAction,
};
use crate::components::toast::Toaster;
use crate::components::use_remote::{use_table_prefs, CacheRegistry, FetchState};
use crate::list::records::ColumnDef;
use crate::list::{
    DeleteTarget, ListController, ListRecord, RowActions, RowBackend, StatusFilter, SyncState,
};
use crate::models::Ledger;

/// Actions of a list view as wired in the browser.
pub type ViewActions<B> = RowActions<B, Toaster, CacheRegistry>;

/// Static description of one list view.
#[derive(Clone)]
pub struct ListViewConfig<R: ListRecord> {
    pub title: &'static str,
    /// Browser storage key for rows-per-page and density.
    pub storage_key: &'static str,
    pub placeholder: &'static str,
    pub status_options: Vec<(StatusFilter<R::Status>, &'static str)>,
    pub status_label: fn(R::Status) -> &'static str,
    /// Shows the ledger multi-select.
    pub with_ledgers: bool,
    /// Non-sortable headers rendered after the sortable columns.
    pub extra_headers: Vec<&'static str>,
    /// Button text of the delete actions, e.g. "Revoke".
    pub action_label: &'static str,
    /// Cells between the checkbox and the actions cell.
    pub render_cells: fn(&R) -> AnyView,
    /// Content of the expanded row, if the record has any.
    pub render_details: Option<fn(&R) -> AnyView>,
}

/// Filterable, sortable, paginated table over one collection with single
/// and bulk delete behind a confirmation dialog.
#[component]
pub fn ListView<R, B>(
    controller: RwSignal<ListController<R>>,
    state: RwSignal<FetchState>,
    actions: ViewActions<B>,
    config: ListViewConfig<R>,
) -> impl IntoView
where
    R: ListRecord + Send + Sync,
    R::Column: ColumnDef + Send + Sync,
    R::Status: Send + Sync,
    B: RowBackend + Copy + Send + Sync + 'static,
{
    let ListViewConfig {
        title,
        storage_key,
        placeholder,
        status_options,
        status_label,
        with_ledgers,
        extra_headers,
        action_label,
        render_cells,
        render_details,
    } = config;

    let set_prefs = use_table_prefs(storage_key, controller);
    let expanded = RwSignal::new(None::<String>);
    let labels = actions.labels;

    let colspan = R::Column::ALL.len() + extra_headers.len() + 2;

    // ===== Derived state =====

    // Rows carry the snapshot generation so refetched rows render again.
    let page_rows = Memo::new(move |_| {
        controller.with(|c| {
            let generation = c.store.generation();
            c.page_rows()
                .into_iter()
                .map(|row| (generation, row))
                .collect::<Vec<_>>()
        })
    });
    let total = Memo::new(move |_| controller.with(|c| c.filtered().len()));

    let order_by = Signal::derive(move || controller.with(|c| c.table.order_by));
    let order = Signal::derive(move || controller.with(|c| c.table.order));
    let page = Signal::derive(move || controller.with(|c| c.table.page));
    let rows_per_page = Signal::derive(move || controller.with(|c| c.table.rows_per_page));
    let dense = Signal::derive(move || controller.with(|c| c.table.dense));
    let num_selected = Signal::derive(move || controller.with(|c| c.table.selected.len()));
    let row_count = Signal::derive(move || total.get());

    let loading = Signal::derive(move || {
        state.get().is_loading() && !controller.with(|c| c.store.is_loaded())
    });
    let not_found = Signal::derive(move || controller.with(|c| c.not_found()));
    let empty = Signal::derive(move || {
        controller.with(|c| c.store.is_loaded() && !c.filters.can_reset()) && total.get() == 0
    });
    let empty_rows = Signal::derive(move || {
        let total = total.get();
        controller.with(|c| c.table.empty_rows(total))
    });
    let reconciling =
        move || controller.with(|c| c.store.sync_state() == SyncState::Reconciling);

    // ===== Filters =====

    let tab_options = status_options.clone();
    let tabs = Signal::derive(move || controller.with(|c| status_tabs(c, &tab_options)));
    let on_select_tab = Callback::new(move |index: usize| {
        if let Some((status, _)) = status_options.get(index) {
            let status = *status;
            controller.update(|c| c.set_status(status));
        }
    });

    let keyword = Signal::derive(move || controller.with(|c| c.filters.keyword.clone()));
    let start_date = Signal::derive(move || controller.with(|c| c.filters.start_date));
    let end_date = Signal::derive(move || controller.with(|c| c.filters.end_date));
    let date_error = Signal::derive(move || controller.with(|c| c.filters.date_error()));

    let on_keyword =
        Callback::new(move |value: String| controller.update(|c| c.set_keyword(value)));
    let on_start_date = Callback::new(move |value: Option<DateTime<Utc>>| {
        controller.update(|c| c.set_start_date(value))
    });
    let on_end_date = Callback::new(move |value: Option<DateTime<Utc>>| {
        controller.update(|c| c.set_end_date(value))
    });

    let (ledgers, on_toggle_ledger) = if with_ledgers {
        (
            Some(Signal::derive(move || controller.with(|c| c.filters.ledgers.clone()))),
            Some(Callback::new(move |ledger: Ledger| {
                controller.update(|c| c.toggle_ledger(ledger))
            })),
        )
    } else {
        (None, None)
    };

    let chips =
        Signal::derive(move || controller.with(|c| filter_chips(&c.filters, status_label)));
    let on_remove_chip =
        Callback::new(move |kind: ChipKind| controller.update(|c| remove_chip(c, kind)));
    let on_reset_filters = Callback::new(move |_: ()| controller.update(|c| c.reset_filters()));

    // ===== Table =====

    let on_sort =
        Callback::new(move |column: R::Column| controller.update(|c| c.table.on_sort(column)));
    let on_select_all =
        Callback::new(move |checked: bool| controller.update(|c| c.select_all(checked)));
    let on_change_page =
        Callback::new(move |page: usize| controller.update(|c| c.table.on_change_page(page)));

    let on_change_rows_per_page = Callback::new(move |rows: usize| {
        controller.update(|c| c.table.on_change_rows_per_page(rows));
        set_prefs.set(controller.with_untracked(|c| c.table.prefs()));
    });
    let on_change_dense = Callback::new(move |value: bool| {
        controller.update(|c| c.table.on_change_dense(value));
        set_prefs.set(controller.with_untracked(|c| c.table.prefs()));
    });

    // ===== Delete dialog =====

    let on_delete_selected = Callback::new(move |_: ()| {
        controller.update(|c| {
            c.open_delete_selected();
        })
    });

    let dialog_open = Signal::derive(move || controller.with(|c| c.dialog.is_open()));
    let dialog_deleting = Signal::derive(move || controller.with(|c| c.dialog.is_deleting()));
    let dialog_content = Signal::derive(move || {
        controller.with(|c| match c.dialog.target() {
            Some(DeleteTarget::Single(_)) => {
                format!("Are you sure want to {} this {}?", labels.verb, labels.singular)
            }
            Some(DeleteTarget::Selected(ids)) => format!(
                "Are you sure want to {} {} {}?",
                labels.verb,
                ids.len(),
                if ids.len() == 1 { labels.singular } else { labels.plural }
            ),
            None => String::new(),
        })
    });

    let on_confirm = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = actions.confirm::<R, _>(&controller).await;
        });
    });
    let on_cancel = Callback::new(move |_: ()| {
        controller.update(|c| {
            c.dialog.cancel();
        })
    });

    let mut headers = extra_headers;
    headers.push("");

    view! {
        <div class="panel list-view">
            <div class="list-header">
                <h2>{title}</h2>
                <Show when=reconciling>
                    <span class="sync-indicator">"Refreshing..."</span>
                </Show>
            </div>

            <StatusTabs tabs=tabs on_select=on_select_tab />

            <FilterToolbar
                keyword=keyword
                start_date=start_date
                end_date=end_date
                date_error=date_error
                on_keyword=on_keyword
                on_start_date=on_start_date
                on_end_date=on_end_date
                ledgers=ledgers
                on_toggle_ledger=on_toggle_ledger
                placeholder=placeholder
            />

            <FiltersResult
                chips=chips
                total=total
                on_remove=on_remove_chip
                on_reset=on_reset_filters
            />

            <TableSelectedAction
                num_selected=num_selected
                row_count=row_count
                on_select_all=on_select_all
                on_action=on_delete_selected
                action_label=action_label
            />

            <table class=move || if dense.get() { "list-table dense" } else { "list-table" }>
                <TableHeadCustom
                    order_by=order_by
                    order=order
                    row_count=row_count
                    num_selected=num_selected
                    on_sort=on_sort
                    on_select_all=on_select_all
                    trailing=headers
                />
                <tbody>
                    <For
                        each=move || page_rows.get()
                        key=|(generation, row): &(u64, R)| (*generation, row.id().to_string())
                        children=move |(_, row): (u64, R)| {
                            let id = row.id().to_string();
                            let has_details = render_details.is_some();

                            let selected = {
                                let id = id.clone();
                                move || controller.with(|c| c.table.is_selected(&id))
                            };
                            let toggle_selected = {
                                let id = id.clone();
                                move |_| controller.update(|c| c.table.on_select_row(&id))
                            };
                            let open_delete = {
                                let id = id.clone();
                                move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    controller.update(|c| {
                                        c.open_delete_row(id.clone());
                                    });
                                }
                            };
                            let toggle_expanded = {
                                let id = id.clone();
                                move |_| {
                                    if has_details {
                                        expanded.update(|current| {
                                            if current.as_deref() == Some(id.as_str()) {
                                                *current = None;
                                            } else {
                                                *current = Some(id.clone());
                                            }
                                        });
                                    }
                                }
                            };
                            let details = {
                                let id = id.clone();
                                let row = row.clone();
                                move || {
                                    let render = render_details?;
                                    (expanded.get().as_deref() == Some(id.as_str())).then(|| {
                                        view! {
                                            <tr class="row-details">
                                                <td colspan=colspan.to_string()>{render(&row)}</td>
                                            </tr>
                                        }
                                    })
                                }
                            };

                            let selected_class = selected.clone();
                            view! {
                                <tr
                                    class=move || if selected_class() { "list-row selected" } else { "list-row" }
                                    on:click=toggle_expanded
                                >
                                    <td class="col-checkbox" on:click=|ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            prop:checked=selected
                                            on:change=toggle_selected
                                        />
                                    </td>
                                    {render_cells(&row)}
                                    <td class="col-actions">
                                        <button
                                            class="btn btn-danger btn-inline"
                                            type="button"
                                            on:click=open_delete
                                        >
                                            {action_label}
                                        </button>
                                    </td>
                                </tr>
                                {details}
                            }
                        }
                    />
                    <TableEmptyRows count=empty_rows dense=dense colspan=colspan />
                    <TableNoData
                        not_found=not_found
                        empty=empty
                        loading=loading
                        colspan=colspan
                    />
                </tbody>
            </table>

            <TablePaginationCustom
                total=total
                page=page
                rows_per_page=rows_per_page
                dense=dense
                on_change_page=on_change_page
                on_change_rows_per_page=on_change_rows_per_page
                on_change_dense=on_change_dense
            />

            <ConfirmDeleteDialog
                open=dialog_open
                deleting=dialog_deleting
                content=dialog_content
                title=action_label
                action_label=action_label
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </div>
    }
}

/// Badge for a status or flag cell.
pub fn badge(label: &'static str) -> AnyView {
    view! { <span class=format!("badge badge-{}", label.to_lowercase())>{label}</span> }.into_any()
}

/// Refetch handler for a failed page.
pub fn retry(cache: CacheRegistry, keys: &'static [CacheKey]) -> Callback<()> {
    use crate::cache::Invalidate;

    Callback::new(move |_| {
        for key in keys {
            cache.invalidate(*key);
        }
    })
}
