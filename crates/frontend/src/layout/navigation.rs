use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::sync::Arc;

/// Navigation capability injected into pages instead of calling the router
/// directly.
pub trait Navigator {
    /// Pushes a new history entry.
    fn navigate_to(&self, path: &str);
}

type NavigateFn = Arc<dyn Fn(&str, NavigateOptions)>;

/// [`Navigator`] backed by `leptos_router`'s `use_navigate`.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, path: &str) {
        log::debug!("navigate: push '{}'", path);
        self.navigate
            .with_value(|navigate| navigate(path, NavigateOptions::default()));
    }
}

/// Must be called under `<Router>`.
pub fn use_navigator() -> BrowserNavigator {
    let navigate: NavigateFn = Arc::new(use_navigate());
    BrowserNavigator {
        navigate: StoredValue::new_local(navigate),
    }
}

/// Options for redirects: the current history entry is replaced.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}
