//! Deferred view loading with a placeholder.
//!
//! `LazyView` awaits its loader under a `Suspense` boundary and shows the
//! spinner until the loader resolves to a [`ViewFn`]. A loader still pending
//! when the boundary is disposed is dropped with it.

use crate::shared::components::suspense_loader::SuspenseLoader;
use leptos::prelude::*;
use std::future::Future;

#[component]
pub fn LazyView<L, Fut>(loader: L) -> impl IntoView
where
    L: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ViewFn> + Send + 'static,
{
    view! {
        <Suspense fallback=|| view! { <SuspenseLoader /> }>
            {move || {
                let pending = loader();
                Suspend::new(async move { pending.await.run() })
            }}
        </Suspense>
    }
}
