use leptos::prelude::*;

/// Display label paired with the absolute path the tab navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub title: &'static str,
    pub route_name: String,
}

#[component]
pub fn TabBar(
    tabs: Vec<TabDescriptor>,
    /// Index of the active tab, `None` when the path matches no tab.
    #[prop(into)]
    active: Signal<Option<usize>>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="page__tabs" role="tablist">
            {tabs
                .into_iter()
                .enumerate()
                .map(|(index, tab)| {
                    view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=move || active.get() == Some(index)
                            role="tab"
                            aria-selected=move || (active.get() == Some(index)).to_string()
                            data-qa-tab=tab.title
                            on:click=move |_| on_change.run(index)
                        >
                            {tab.title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
