use dioxus::logger::tracing;
use poshujan_shared::filter::{self, PostFilter, SelectOption};
use poshujan_shared::models::{AdministrativeIndex, ObservationPost};
use poshujan_shared::session::{LoginOutcome, SessionState, Visibility, MSG_LOGOUT_OK};
use poshujan_shared::toast::Toast;

use crate::storage::FlagStore;

/// Static map data fetched once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub index: AdministrativeIndex,
    pub posts: Vec<ObservationPost>,
}

/// All mutable UI state of the map page, owned by a single signal.
///
/// Methods that show a transient message return its generation, which the
/// caller hands to the hide timer. `redraw_counter` is bumped by every filter
/// action so the map redraws even when the filter value did not change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub filter: PostFilter,
    pub toast: Toast,
    pub login_panel_open: bool,
    pub redraw_counter: u64,
}

impl AppState {
    pub fn load(store: &impl FlagStore) -> Self {
        AppState {
            session: SessionState::from_flag(store.read().as_deref()),
            ..Default::default()
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.session.visibility()
    }

    pub fn notify(&mut self, text: impl Into<String>) -> u64 {
        self.toast.show(text)
    }

    pub fn hide_popups(&mut self) {
        self.login_panel_open = false;
    }

    pub fn open_login_panel(&mut self) {
        self.hide_popups();
        self.login_panel_open = true;
    }

    pub fn apply_login(&mut self, outcome: &LoginOutcome, store: &mut impl FlagStore) -> u64 {
        let next = self.session.after_login(outcome);
        if next.is_logged_in() && !self.session.is_logged_in() {
            if let Err(e) = store.set() {
                tracing::warn!(error = %e, "Session flag not persisted");
            }
        }
        if *outcome == LoginOutcome::Accepted {
            self.hide_popups();
        }
        self.session = next;
        self.notify(outcome.message())
    }

    pub fn logout(&mut self, store: &mut impl FlagStore) -> u64 {
        self.session = self.session.after_logout();
        if let Err(e) = store.clear() {
            tracing::warn!(error = %e, "Session flag not removed, reload may restore the login");
        }
        self.hide_popups();
        self.notify(MSG_LOGOUT_OK)
    }

    pub fn select_district(&mut self, district: impl Into<String>) {
        self.filter.select_district(district);
        self.request_redraw();
    }

    pub fn select_subdistrict(&mut self, subdistrict: impl Into<String>) {
        self.filter.select_subdistrict(subdistrict);
        self.request_redraw();
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_counter = self.redraw_counter.wrapping_add(1);
    }

    pub fn subdistrict_options(&self, index: &AdministrativeIndex) -> Vec<SelectOption> {
        filter::subdistrict_options(index, &self.filter.district)
    }
}
