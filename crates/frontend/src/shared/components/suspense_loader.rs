use leptos::prelude::*;
use thaw::*;

/// Placeholder shown while a deferred view is loading.
#[component]
pub fn SuspenseLoader() -> impl IntoView {
    view! {
        <div class="suspense-loader" role="progressbar" aria-busy="true">
            <Spinner />
        </div>
    }
}
