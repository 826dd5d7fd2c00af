use dioxus::logger::tracing;
use dioxus::prelude::*;
use poshujan_shared::session::LoginOutcome;

use crate::auth::{attempt_login, RemoteAuthenticator};
use crate::state::AppState;
use crate::storage::LocalStorageFlag;

#[component]
pub fn LoginPanel() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);

    if !app.read().login_panel_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "login-backdrop",
            onclick: move |_| app.write().hide_popups(),

            div {
                id: "loginBox",
                class: "login-box",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h2 { "Login" }
                form {
                    onsubmit: move |evt: Event<FormData>| {
                        evt.prevent_default();
                        if *pending.read() {
                            return;
                        }
                        let user = username.read().clone();
                        let pass = password.read().clone();
                        pending.set(true);
                        spawn(async move {
                            let outcome = attempt_login(&RemoteAuthenticator, &user, &pass).await;
                            if let LoginOutcome::Unavailable(reason) = &outcome {
                                tracing::warn!(%reason, "Login request failed");
                            }
                            if outcome == LoginOutcome::Accepted {
                                password.set(String::new());
                            }
                            app.write().apply_login(&outcome, &mut LocalStorageFlag);
                            pending.set(false);
                        });
                    },
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt: Event<FormData>| username.set(evt.value()),
                    }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt: Event<FormData>| password.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: *pending.read(),
                        "Masuk"
                    }
                }
            }
        }
    }
}
