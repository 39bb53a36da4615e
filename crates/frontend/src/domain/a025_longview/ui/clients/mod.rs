use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a025_longview_subscription::LongviewSubscription;
use leptos::prelude::*;

/// Total number of clients covered by all subscriptions.
pub fn total_clients_included(subscriptions: &[LongviewSubscription]) -> u32 {
    subscriptions.iter().map(|s| s.clients_included).sum()
}

/// `pathname` with its last segment replaced by `segment`.
pub fn sibling_path(pathname: &str, segment: &str) -> String {
    let trimmed = pathname.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(pos) => format!("{}/{}", &trimmed[..pos], segment),
        None => format!("/{}", segment),
    }
}

#[component]
pub fn LongviewClients(
    subscriptions_data: Vec<LongviewSubscription>,
    #[prop(into)] pathname: Signal<String>,
) -> impl IntoView {
    let total = total_clients_included(&subscriptions_data);
    let plans_href = move || pathname.with(|p| sibling_path(p, "plan-details"));

    view! {
        <PageFrame page_id="a025_longview--clients" category=PAGE_CAT_LIST>
            <div class="page__content">
                {if subscriptions_data.is_empty() {
                    view! {
                        <div class="empty-state" data-qa-clients-empty="">
                            {icon("users")}
                            <p>"No Longview plans available yet."</p>
                            <a class="button button--secondary" href=plans_href>
                                "View plan details"
                            </a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="longview-clients">
                            <p class="longview-clients__summary" data-qa-clients-total="">
                                {format!(
                                    "{} plan(s) available, up to {} clients",
                                    subscriptions_data.len(),
                                    total
                                )}
                            </p>
                            <ul class="longview-clients__plans">
                                {subscriptions_data
                                    .into_iter()
                                    .map(|sub| view! {
                                        <li data-qa-subscription=sub.id.clone()>
                                            {format!("{} ({} clients)", sub.label, sub.clients_included)}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
