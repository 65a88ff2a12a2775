//! Mock Authentication
//!
//! Credentials are checked against the registered-users list in the
//! key/value store. There is no hashing and no session token: the logged-in
//! user is simply a profile written under its own key.

use legal_core::KeyValueStore;
use legal_core::storage::{keys, load_json, save_json};

use crate::error::{AccountError, Result};
use crate::user::{Registration, StoredUser, User};

/// Login state for one app instance
pub struct AuthService<S> {
    store: S,
    current: Option<User>,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Start logged out, ignoring any stored login
    pub const fn signed_out(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Restore the logged-in user, if any
    pub fn load(store: S) -> Result<Self> {
        let current: Option<User> = load_json(&store, keys::CURRENT_USER)?;
        if let Some(user) = &current {
            tracing::debug!(user_id = %user.id, "Restored logged-in user");
        }
        Ok(Self { store, current })
    }

    fn users(&self) -> Result<Vec<StoredUser>> {
        Ok(load_json(&self.store, keys::USERS)?.unwrap_or_default())
    }

    fn set_current(&mut self, user: User) -> Result<&User> {
        save_json(&self.store, keys::CURRENT_USER, &user)?;
        Ok(self.current.insert(user))
    }

    /// Log in with an exact email/password match
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let found = self
            .users()?
            .into_iter()
            .find(|u| u.matches(email, password));

        match found {
            Some(stored) => {
                tracing::info!(user_id = %stored.user.id, "User logged in");
                self.set_current(stored.user)
            }
            None => {
                tracing::debug!("Login rejected");
                Err(AccountError::InvalidCredentials(email.to_string()))
            }
        }
    }

    /// Register a new account and log it in
    pub fn register(&mut self, registration: Registration) -> Result<&User> {
        let mut users = self.users()?;
        if users.iter().any(|u| u.user.email == registration.email) {
            return Err(AccountError::EmailTaken(registration.email));
        }

        let stored = StoredUser::from_registration(registration);
        let user = stored.user.clone();
        users.push(stored);
        save_json(&self.store, keys::USERS, &users)?;

        tracing::info!(user_id = %user.id, user_type = user.user_type.as_str(), "User registered");
        self.set_current(user)
    }

    /// Forget the logged-in user
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.store.remove(keys::CURRENT_USER)?;
        Ok(())
    }

    pub const fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserType;
    use legal_core::MemoryStore;

    fn registration(email: &str) -> Registration {
        Registration {
            full_name: "Grace Hopper".into(),
            email: email.into(),
            password: "cobol".into(),
            city: "Arlington".into(),
            state: "Virginia".into(),
            country: "United States".into(),
            user_type: UserType::Consumer,
            ..Default::default()
        }
    }

    #[test]
    fn test_register_logs_in() {
        let mut auth = AuthService::load(MemoryStore::new()).unwrap();
        assert!(!auth.is_authenticated());

        let user = auth.register(registration("grace@example.com")).unwrap();
        assert_eq!(user.full_name, "Grace Hopper");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut auth = AuthService::load(MemoryStore::new()).unwrap();
        auth.register(registration("grace@example.com")).unwrap();
        auth.logout().unwrap();

        let err = auth.register(registration("grace@example.com")).unwrap_err();
        assert!(matches!(err, AccountError::EmailTaken(_)));
        assert_eq!(err.user_message(), "User with this email already exists");
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_and_logout() {
        let mut auth = AuthService::load(MemoryStore::new()).unwrap();
        auth.register(registration("grace@example.com")).unwrap();
        auth.logout().unwrap();
        assert!(auth.current_user().is_none());

        let err = auth.login("grace@example.com", "fortran").unwrap_err();
        assert_eq!(err.user_message(), "Invalid email or password");

        let user = auth.login("grace@example.com", "cobol").unwrap();
        assert_eq!(user.city, "Arlington");
    }
}
