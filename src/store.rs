//! Global Application State Store
//!
//! Session user and the parent's selected child. Hydrated from local
//! storage on boot, written through on every change, cleared on logout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthService;
use crate::models::{Role, SessionUser, Student};
use crate::storage::BrowserStorage;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, `None` when signed out
    pub user: Option<SessionUser>,
    /// Child a parent is currently looking at
    pub selected_child: Option<Student>,
    /// Children linked to the parent account
    pub children: Vec<Student>,
}

impl AppState {
    /// Restore the persisted session
    pub fn hydrate() -> Self {
        let auth = AuthService::new(BrowserStorage);
        Self {
            user: auth.current_user(),
            selected_child: auth.selected_child(),
            children: Vec::new(),
        }
    }
}

pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_user(store: &AppStore) -> Option<SessionUser> {
    store.user().get()
}

pub fn store_role(store: &AppStore) -> Option<Role> {
    store.user().with(|u| u.as_ref().and_then(|u| u.role()))
}

pub fn store_token(store: &AppStore) -> Option<String> {
    store.user().with_untracked(|u| u.as_ref().and_then(|u| u.access_token.clone()))
}

pub fn store_login(store: &AppStore, user: SessionUser) {
    AuthService::new(BrowserStorage).save_user(&user);
    *store.user().write() = Some(user);
}

pub fn store_logout(store: &AppStore) {
    AuthService::new(BrowserStorage).logout();
    *store.user().write() = None;
    *store.selected_child().write() = None;
    *store.children().write() = Vec::new();
}

pub fn store_selected_child(store: &AppStore) -> Option<Student> {
    store.selected_child().get()
}

pub fn store_select_child(store: &AppStore, child: Option<Student>) {
    AuthService::new(BrowserStorage).set_selected_child(child.as_ref());
    *store.selected_child().write() = child;
}

/// Replace the children list, keeping the selection if it is still linked
/// and otherwise selecting the first child.
pub fn store_set_children(store: &AppStore, children: Vec<Student>) {
    let current = store.selected_child().get_untracked();
    let next = current
        .filter(|c| children.iter().any(|s| s.id == c.id))
        .or_else(|| children.first().cloned());
    *store.children().write() = children;
    if next != store.selected_child().get_untracked() {
        store_select_child(store, next);
    }
}

pub fn store_children(store: &AppStore) -> Vec<Student> {
    store.children().get()
}
