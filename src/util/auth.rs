//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components under the authenticated layout should apply identical
//! unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session;

/// Redirect to `/login` whenever no session is present.
pub fn install_unauth_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session::is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
