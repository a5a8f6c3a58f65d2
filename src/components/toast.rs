use leptos::prelude::*;

use crate::notify::{Notifier, NotifyLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NotifyLevel,
    pub message: String,
}

/// Toast stack shared through context; implements [`Notifier`].
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, level: NotifyLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        // Auto-dismiss after 5 seconds
        #[cfg(not(feature = "ssr"))]
        {
            let toaster = *self;
            set_timeout(
                move || toaster.dismiss(id),
                std::time::Duration::from_secs(5),
            );
        }
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-stack">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span>{toast.message}</span>
                            <button
                                class="btn-close"
                                type="button"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
