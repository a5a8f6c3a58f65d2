use leptos::prelude::*;

use crate::errors::DashboardError;

/// Replaces a page whose data could not be fetched.
#[component]
pub fn FailedView(#[prop(into)] error: Signal<Option<DashboardError>>, on_retry: Callback<()>) -> impl IntoView {
    let message = move || {
        error
            .get()
            .map(|err| match err {
                DashboardError::Transport { .. } => {
                    "The wallet service could not be reached.".to_string()
                }
                other => other.reason(),
            })
            .unwrap_or_default()
    };

    view! {
        <div class="panel failed-view">
            <h2>"Something went wrong"</h2>
            <p class="error-message">{message}</p>
            <button class="btn btn-primary" type="button" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
