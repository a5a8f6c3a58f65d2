use leptos::prelude::*;

use crate::components::use_toaster;
#[cfg(not(feature = "ssr"))]
use crate::notify::Notifier;

/// Copies `value` to the clipboard. Sits inside clickable rows, so the click
/// does not propagate.
#[component]
pub fn CopyButton(value: String) -> impl IntoView {
    let toaster = use_toaster();

    let copy = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();

        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&value);
                toaster.info("Copied to clipboard");
            }
        }
        #[cfg(feature = "ssr")]
        let _ = (&value, toaster);
    };

    view! {
        <button class="btn btn-secondary btn-inline" type="button" on:click=copy>
            "Copy"
        </button>
    }
}
