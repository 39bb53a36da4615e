use crate::domain::a025_longview::ui::landing::model::{
    fallback_path, LandingSection, LONGVIEW_BASE_PATH,
};
use crate::domain::a025_longview::ui::landing::{
    LongviewClientsView, LongviewLanding, LongviewPlansView,
};
use crate::layout::navigation::redirect_options;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::{path, StaticSegment};

#[component]
fn ReplaceWith(path: String) -> impl IntoView {
    log::info!("redirecting to '{}'", path);
    view! { <Redirect path=path options=redirect_options() /> }
}

/// Everything lives under `/longview`; other paths are sent there. Child
/// routes are exact and strict, unknown sub-paths land on Clients.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let to_clients = move || view! { <ReplaceWith path=fallback_path(LONGVIEW_BASE_PATH) /> };

    view! {
        <main class="app-main">
            <Routes fallback=|| view! { <ReplaceWith path=LONGVIEW_BASE_PATH.to_string() /> }>
                <ParentRoute
                    path=path!("/longview")
                    view=|| view! { <LongviewLanding base_url=LONGVIEW_BASE_PATH /> }
                >
                    <Route
                        path=StaticSegment(LandingSection::Clients.slug())
                        view=LongviewClientsView
                    />
                    <Route
                        path=StaticSegment(LandingSection::PlanDetails.slug())
                        view=LongviewPlansView
                    />
                    <Route path=path!("") view=to_clients />
                    <Route path=path!("/*any") view=to_clients />
                </ParentRoute>
            </Routes>
        </main>
    }
}
