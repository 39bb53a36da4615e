use crate::shared::icons::icon;
use leptos::prelude::*;

/// Outbound link to product documentation, opened in a new tab.
#[component]
pub fn DocumentationButton(href: &'static str) -> impl IntoView {
    view! {
        <a
            class="button button--secondary documentation-button"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            data-qa-docs-link=""
        >
            {icon("book-open")}
            <span>"Docs"</span>
        </a>
    }
}
