use crate::shared::api_request::{ApiRequest, RequestState};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a025_longview_subscription::LongviewSubscription;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub enum PlansContent {
    Loading,
    Error(String),
    Empty,
    Plans(Vec<LongviewSubscription>),
}

impl PlansContent {
    pub fn from_state(state: &RequestState<Vec<LongviewSubscription>>) -> Self {
        match state {
            RequestState::Pending => PlansContent::Loading,
            RequestState::Failed(e) => PlansContent::Error(e.clone()),
            RequestState::Loaded(plans) if plans.is_empty() => PlansContent::Empty,
            RequestState::Loaded(plans) => PlansContent::Plans(plans.clone()),
        }
    }
}

#[component]
pub fn LongviewPlans(subscription_request: ApiRequest<Vec<LongviewSubscription>>) -> impl IntoView {
    let last_updated = move || {
        subscription_request
            .last_updated
            .get()
            .map(|ts| format!("Updated {}", ts.format("%Y-%m-%d %H:%M:%S UTC")))
    };

    view! {
        <PageFrame page_id="a025_longview--plans" category=PAGE_CAT_DETAIL>
            <div class="page__content">
                {move || match subscription_request.state.with(PlansContent::from_state) {
                    PlansContent::Loading => view! { <Spinner /> }.into_any(),
                    PlansContent::Error(e) => view! {
                        <div
                            class="warning-box"
                            style="background: var(--color-error-50); border-color: var(--color-error-100);"
                            data-qa-plans-error=""
                        >
                            <span class="warning-box__icon" style="color: var(--color-error);">
                                {icon("alert-triangle")}
                            </span>
                            <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                        </div>
                    }
                    .into_any(),
                    PlansContent::Empty => view! {
                        <p class="empty-state">"No Longview plans are available."</p>
                    }
                    .into_any(),
                    PlansContent::Plans(plans) => view! {
                        <table class="table longview-plans">
                            <thead>
                                <tr>
                                    <th>"Plan"</th>
                                    <th>"Clients"</th>
                                    <th>"Price"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {plans
                                    .into_iter()
                                    .map(|plan| {
                                        let price = plan.monthly_price_label();
                                        view! {
                                            <tr data-qa-plan=plan.id>
                                                <td>{icon("credit-card")} " " {plan.label}</td>
                                                <td>{plan.clients_included}</td>
                                                <td>{price}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
                <div class="longview-plans__updated">{last_updated}</div>
            </div>
        </PageFrame>
    }
}
