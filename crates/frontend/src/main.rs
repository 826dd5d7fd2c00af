mod api;
mod auth;
mod components;
mod leaflet;
mod markers;
mod pages;
mod state;
mod storage;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use components::login_panel::LoginPanel;
use components::nav_bar::NavBar;
use components::toast::ToastView;
use state::{AppState, Catalog};
use storage::LocalStorageFlag;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/pos")]
    PostListing {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            NavBar {}
            div { class: "content",
                Outlet::<Route> {}
            }
            LoginPanel {}
            ToastView {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::map_page::MapPage {}
    }
}

#[component]
fn PostListing() -> Element {
    rsx! {
        pages::post_list::PostList {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    let mut app = use_context_provider(|| Signal::new(AppState::load(&LocalStorageFlag)));
    let mut catalog = use_context_provider(|| Signal::new(Catalog::default()));

    // Districts and posts are fetched once; an empty catalog just shows no markers.
    let _catalog_loader = use_resource(move || async move {
        match api::fetch_catalog().await {
            Ok((index, posts)) => {
                tracing::info!(
                    districts = index.districts().len(),
                    posts = posts.len(),
                    "Catalog loaded"
                );
                catalog.set(Catalog { index, posts });
            }
            Err(e) => {
                tracing::error!(error = %e, "Catalog request failed");
                app.write()
                    .notify(format!("Data pos hujan gagal dimuat: {}", e));
            }
        }
    });

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
