use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use poshujan_shared::toast::TOAST_DURATION_MS;

use crate::state::AppState;

/// The `#toast` element. Every new message arms its own hide timer; only the
/// timer of the latest message actually hides it.
#[component]
pub fn ToastView() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let generation = use_memo(move || app.read().toast.generation());

    use_effect(move || {
        let current = *generation.read();
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            app.write().toast.hide(current);
        });
    });

    let (text, display) = {
        let state = app.read();
        let display = if state.toast.is_visible() { "block" } else { "none" };
        (state.toast.text().to_string(), display)
    };

    rsx! {
        div {
            id: "toast",
            class: "toast",
            style: "display: {display};",
            "{text}"
        }
    }
}
