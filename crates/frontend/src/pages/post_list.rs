use dioxus::prelude::*;
use poshujan_shared::models::ObservationPost;

use crate::state::{AppState, Catalog};
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct PostRow {
    pub name: String,
    pub district: String,
    pub subdistrict: String,
    pub latitude: String,
    pub longitude: String,
}

pub fn post_rows(posts: &[ObservationPost]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            name: p.name.clone(),
            district: p.district.clone(),
            subdistrict: p.subdistrict.clone(),
            latitude: format!("{:.4}", p.latitude),
            longitude: format!("{:.4}", p.longitude),
        })
        .collect()
}

/// Listing of every observation post, only for logged-in users.
#[component]
pub fn PostList() -> Element {
    let app = use_context::<Signal<AppState>>();
    let catalog = use_context::<Signal<Catalog>>();

    if !app.read().session.is_logged_in() {
        return rsx! {
            div { class: "panel notice",
                p { "Silakan login untuk melihat daftar pos hujan." }
                Link { to: Route::Home {}, "Kembali ke peta" }
            }
        };
    }

    let rows = post_rows(&catalog.read().posts);

    rsx! {
        div { class: "panel post-list",
            h2 { "Daftar Pos Hujan" }
            if rows.is_empty() {
                p { class: "empty", "Belum ada data pos hujan." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Nama" }
                            th { "Kabupaten" }
                            th { "Kecamatan" }
                            th { "Lintang" }
                            th { "Bujur" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr { key: "{row.name}",
                                td { "{row.name}" }
                                td { "{row.district}" }
                                td { "{row.subdistrict}" }
                                td { "{row.latitude}" }
                                td { "{row.longitude}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
