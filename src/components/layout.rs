//! Authenticated shell: sidebar navigation, header, routed content.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session;
use crate::util::auth::install_unauth_redirect;

struct NavItem {
    path: &'static str,
    label: &'static str,
}

struct NavSection {
    title: &'static str,
    items: &'static [NavItem],
}

const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "메인",
        items: &[NavItem { path: "/", label: "대시보드" }],
    },
    NavSection {
        title: "기능",
        items: &[
            NavItem { path: "/series", label: "시리즈" },
            NavItem { path: "/activation", label: "정품등록" },
            NavItem { path: "/download", label: "다운로드" },
            NavItem { path: "/shipments", label: "출고 관리" },
        ],
    },
];

/// Whether a nav item matches the current location. The root item only
/// matches exactly so it doesn't shadow every other route.
fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

/// Header label for the current location.
fn active_label(current: &str) -> &'static str {
    SECTIONS
        .iter()
        .flat_map(|section| section.items)
        .find(|item| is_active(current, item.path))
        .map_or("Agency Console", |item| item.label)
}

/// Sidebar + header shell around the routed page content.
/// Redirects to `/login` when no session is present.
#[component]
pub fn Layout() -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(navigate.clone());

    let location = use_location();
    let pathname = move || location.pathname.get();

    let on_logout = move |_| {
        session::logout();
        navigate("/login", NavigateOptions::default());
    };

    let user_email = move || session::user().map_or_else(String::new, |u| u.email);

    view! {
        <div class="shell">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <div class="sidebar__brand-mark">"A"</div>
                    <span class="sidebar__brand-name">"Agency Console"</span>
                </div>

                <nav class="sidebar__nav">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="sidebar__section">
                                    <div class="sidebar__section-title">{section.title}</div>
                                    {section
                                        .items
                                        .iter()
                                        .map(|item| {
                                            let path = item.path;
                                            view! {
                                                <a
                                                    href=path
                                                    class=move || {
                                                        if is_active(&pathname(), path) {
                                                            "sidebar__link sidebar__link--active"
                                                        } else {
                                                            "sidebar__link"
                                                        }
                                                    }
                                                >
                                                    {item.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="sidebar__footer">
                    <div class="sidebar__user">{user_email}</div>
                    <button class="sidebar__logout" on:click=on_logout>
                        "로그아웃"
                    </button>
                </div>
            </aside>

            <main class="shell__main">
                <header class="shell__header">
                    <h1>{move || active_label(&pathname())}</h1>
                </header>
                <div class="shell__content">
                    <Outlet/>
                </div>
            </main>
        </div>
    }
}
