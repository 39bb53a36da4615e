//! Longview landing page: breadcrumb, docs link, tab bar and the routed
//! Clients / Plan Details views.

use super::model::{
    active_tab_index, clients_subscriptions, handle_tab_change, landing_tabs, LONGVIEW_DOCS_URL,
};
use crate::domain::a025_longview::api;
use crate::domain::a025_longview::ui::clients::LongviewClients;
use crate::domain::a025_longview::ui::plans::LongviewPlans;
use crate::layout::navigation::use_navigator;
use crate::shared::api_request::{use_api_request, ApiRequest};
use crate::shared::components::breadcrumb::Breadcrumb;
use crate::shared::components::documentation_button::DocumentationButton;
use crate::shared::components::tab_bar::TabBar;
use crate::shared::lazy_view::LazyView;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LANDING;
use contracts::domain::a025_longview_subscription::LongviewSubscription;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

type SubscriptionsRequest = ApiRequest<Vec<LongviewSubscription>>;

/// Parent route view. The subscription request lives here, so switching
/// between child routes does not fetch again.
#[component]
pub fn LongviewLanding(
    /// Path this page is mounted under, e.g. `/longview`.
    #[prop(into)]
    base_url: String,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigator = use_navigator();
    let subscriptions = use_api_request(api::fetch_subscriptions);
    provide_context::<SubscriptionsRequest>(subscriptions);

    let tabs = StoredValue::new(landing_tabs(&base_url));

    let active = Signal::derive(move || {
        tabs.with_value(|tabs| pathname.with(|p| active_tab_index(tabs, p)))
    });

    let on_tab_change = Callback::new(move |index: usize| {
        tabs.with_value(|tabs| handle_tab_change(tabs, index, &navigator));
    });

    view! {
        <PageFrame page_id="a025_longview--landing" category=PAGE_CAT_LANDING>
            <div class="page__header">
                <div class="page__header-left">
                    <Breadcrumb pathname=pathname label_title="Longview" remove_crumb_x=1 />
                </div>
                <div class="page__header-right">
                    <DocumentationButton href=LONGVIEW_DOCS_URL />
                </div>
            </div>
            <TabBar tabs=tabs.get_value() active=active on_change=on_tab_change />
            <div class="page__content">
                <Outlet />
            </div>
        </PageFrame>
    }
}

fn use_subscriptions() -> SubscriptionsRequest {
    expect_context::<SubscriptionsRequest>()
}

/// Child route `<base>/clients`.
#[component]
pub fn LongviewClientsView() -> impl IntoView {
    let subscriptions = use_subscriptions();
    let pathname = use_location().pathname;

    view! {
        <LazyView loader=move || async move {
            ViewFn::from(move || {
                move || {
                    let data = subscriptions.state.with(clients_subscriptions);
                    view! { <LongviewClients subscriptions_data=data pathname=pathname /> }
                }
            })
        } />
    }
}

/// Child route `<base>/plan-details`.
#[component]
pub fn LongviewPlansView() -> impl IntoView {
    let subscriptions = use_subscriptions();

    view! {
        <LazyView loader=move || async move {
            ViewFn::from(move || view! { <LongviewPlans subscription_request=subscriptions /> })
        } />
    }
}
