use dioxus::prelude::*;
use poshujan_shared::session::Visibility;

use crate::state::AppState;
use crate::storage::LocalStorageFlag;
use crate::Route;

#[component]
pub fn NavBar() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let visibility = app.read().visibility();
    let login_display = Visibility::display(visibility.login_button);
    let profile_display = Visibility::display(visibility.profile_area);
    let menu_display = Visibility::display(visibility.gated_menu);

    rsx! {
        div { class: "header",
            h1 {
                Link { to: Route::Home {}, "Peta Pos Hujan" }
            }
            nav { class: "menu",
                span {
                    id: "menuPosHujan",
                    style: "display: {menu_display};",
                    Link { to: Route::PostListing {}, "Pos Hujan" }
                }
            }
            div { class: "account",
                button {
                    id: "loginBtn",
                    style: "display: {login_display};",
                    onclick: move |_| app.write().open_login_panel(),
                    "Login"
                }
                span {
                    id: "profileArea",
                    style: "display: {profile_display};",
                    span { class: "profile-name", "Admin" }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            app.write().logout(&mut LocalStorageFlag);
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
