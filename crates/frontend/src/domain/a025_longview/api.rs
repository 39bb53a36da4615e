use contracts::domain::a025_longview_subscription::LongviewSubscription;
use contracts::shared::resource_page::ResourcePage;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all Longview subscription plans
pub async fn fetch_subscriptions() -> Result<Vec<LongviewSubscription>, String> {
    let response = Request::get(&api_url("/api/longview/subscriptions"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch Longview subscriptions: HTTP {}",
            response.status()
        ));
    }

    let page = response
        .json::<ResourcePage<LongviewSubscription>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    log::debug!("fetched {} Longview subscriptions", page.data.len());
    Ok(page.into_data())
}
