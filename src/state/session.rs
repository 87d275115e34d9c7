//! Process-wide authentication session.
//!
//! DESIGN
//! ======
//! The WASM runtime is single-threaded, so the session lives in a
//! `thread_local` cell rather than behind a lock. The API layer reads the
//! token fresh on every request; login/logout persist through localStorage
//! so the session survives reloads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage;

const STORAGE_KEY: &str = "agency_console_session";

/// Persisted session payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Establish a session from a successful login response.
pub fn login(token: String, user: User) {
    let session = Session {
        token: Some(token),
        user: Some(user),
    };
    storage::save_json(STORAGE_KEY, &session);
    SESSION.with(|cell| *cell.borrow_mut() = session);
}

/// Clear the session and its persisted copy.
pub fn logout() {
    storage::remove(STORAGE_KEY);
    SESSION.with(|cell| *cell.borrow_mut() = Session::default());
}

/// Load a previously persisted session, if any. Called once at mount.
pub fn restore() {
    if let Some(session) = storage::load_json::<Session>(STORAGE_KEY) {
        SESSION.with(|cell| *cell.borrow_mut() = session);
    }
}

/// Current bearer token, read fresh at request time.
pub fn token() -> Option<String> {
    SESSION.with(|cell| cell.borrow().token.clone())
}

/// Currently logged-in user.
pub fn user() -> Option<User> {
    SESSION.with(|cell| cell.borrow().user.clone())
}

pub fn is_authenticated() -> bool {
    SESSION.with(|cell| cell.borrow().token.is_some())
}
