//! Auth Service
//!
//! Session user, role and the parent's selected child, mirrored to a
//! key-value store so a reload keeps the session.

use crate::chat_history::ChatHistory;
use crate::models::{Role, SessionUser, Student};
use crate::storage::{load_json, save_json, KeyValueStore, ROLE_KEY, SELECTED_CHILD_KEY, USER_KEY};

pub struct AuthService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        load_json(&self.store, USER_KEY)
    }

    /// Role string as stored; falls back to the user's `app_metadata.role`
    pub fn role(&self) -> Option<Role> {
        self.store
            .get(ROLE_KEY)
            .and_then(|r| Role::parse(&r))
            .or_else(|| self.current_user().and_then(|u| u.role()))
    }

    pub fn save_user(&self, user: &SessionUser) {
        save_json(&self.store, USER_KEY, user);
        match user.role() {
            Some(role) => self.store.set(ROLE_KEY, role.as_str()),
            None => self.store.remove(ROLE_KEY),
        }
    }

    pub fn selected_child(&self) -> Option<Student> {
        load_json(&self.store, SELECTED_CHILD_KEY)
    }

    pub fn set_selected_child(&self, child: Option<&Student>) {
        match child {
            Some(child) => save_json(&self.store, SELECTED_CHILD_KEY, child),
            None => self.store.remove(SELECTED_CHILD_KEY),
        }
    }

    /// Drop everything tied to the session, chat history included
    pub fn logout(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(ROLE_KEY);
        self.store.remove(SELECTED_CHILD_KEY);
        ChatHistory::new(&self.store, 1).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppMetadata, ChatTurn};
    use crate::storage::{MemoryStorage, AI_MESSAGES_KEY};

    fn nurse() -> SessionUser {
        SessionUser {
            id: "n-1".into(),
            email: Some("yta@truong.edu.vn".into()),
            app_metadata: AppMetadata { role: "nurse".into() },
            ..Default::default()
        }
    }

    fn child() -> Student {
        Student {
            id: "s-1".into(),
            name: "Nguyễn An".into(),
            dob: None,
            class_name: Some("3A".into()),
            gender: None,
            profile_img_url: None,
        }
    }

    #[test]
    fn test_save_and_restore_user() {
        let auth = AuthService::new(MemoryStorage::new());
        assert_eq!(auth.current_user(), None);
        auth.save_user(&nurse());
        assert_eq!(auth.current_user(), Some(nurse()));
        assert_eq!(auth.role(), Some(Role::Nurse));
    }

    #[test]
    fn test_role_falls_back_to_app_metadata() {
        let store = MemoryStorage::new();
        save_json(&store, USER_KEY, &nurse());
        let auth = AuthService::new(store);
        assert_eq!(auth.role(), Some(Role::Nurse));
    }

    #[test]
    fn test_logout_clears_session_and_child() {
        let auth = AuthService::new(MemoryStorage::new());
        auth.save_user(&nurse());
        auth.set_selected_child(Some(&child()));
        assert_eq!(auth.selected_child(), Some(child()));

        auth.logout();
        assert_eq!(auth.current_user(), None);
        assert_eq!(auth.role(), None);
        assert_eq!(auth.selected_child(), None);
    }

    #[test]
    fn test_logout_forgets_previous_chat() {
        let store = MemoryStorage::new();
        ChatHistory::new(&store, 50).push(ChatTurn::user("Con tôi bị dị ứng"));
        let auth = AuthService::new(&store);
        auth.save_user(&nurse());

        auth.logout();
        assert_eq!(store.get(AI_MESSAGES_KEY), None);
        assert!(ChatHistory::new(&store, 50).load().is_empty());
    }
}
