use leptos::prelude::*;

/// Modal asking to confirm a delete. Buttons are disabled while the
/// request runs; the dialog closes once it resolved.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] content: Signal<String>,
    title: &'static str,
    action_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| {
                if !deleting.get_untracked() {
                    on_cancel.run(());
                }
            }>
                <div
                    class="dialog"
                    role="alertdialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h3 class="dialog-title">{title}</h3>
                    <p class="dialog-content">{move || content.get()}</p>
                    <div class="dialog-actions">
                        <button
                            class="btn btn-secondary"
                            type="button"
                            disabled=move || deleting.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-danger"
                            type="button"
                            disabled=move || deleting.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if deleting.get() { "Working..." } else { action_label }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
