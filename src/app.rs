//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};

use crate::components::layout::Layout;
use crate::components::toast::Toast;
use crate::pages::activation::ActivationPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::download::DownloadPage;
use crate::pages::login::LoginPage;
use crate::pages::series::SeriesPage;
use crate::pages::shipments::ShipmentsPage;
use crate::state::queries::QueryVersions;
use crate::state::session;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Restores any persisted session, provides the shared toast and
/// query-version contexts, and sets up client-side routing. Authenticated
/// pages live under [`Layout`], which redirects to `/login` without a
/// session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    session::restore();

    let toast = RwSignal::new(ToastState::default());
    let queries = RwSignal::new(QueryVersions::default());
    provide_context(toast);
    provide_context(queries);

    view! {
        <Title text="Agency Console"/>

        <Toast/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("series") view=SeriesPage/>
                    <Route path=StaticSegment("activation") view=ActivationPage/>
                    <Route path=StaticSegment("download") view=DownloadPage/>
                    <Route path=StaticSegment("shipments") view=ShipmentsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
