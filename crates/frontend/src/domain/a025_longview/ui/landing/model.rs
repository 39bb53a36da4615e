//! Tab resolution for the Longview landing page.
//!
//! NB: the tabs and the child routes in `routes::routes` must stay in 1:1
//! correspondence; both are built from `LandingSection::ALL`.

use crate::layout::navigation::Navigator;
use crate::shared::api_request::RequestState;
use crate::shared::components::tab_bar::TabDescriptor;
use contracts::domain::a025_longview_subscription::LongviewSubscription;

pub const LONGVIEW_BASE_PATH: &str = "/longview";
pub const LONGVIEW_DOCS_URL: &str = "https://www.linode.com/docs/platform/longview/longview/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    Clients,
    PlanDetails,
}

impl LandingSection {
    pub const ALL: [LandingSection; 2] = [LandingSection::Clients, LandingSection::PlanDetails];

    pub fn title(self) -> &'static str {
        match self {
            LandingSection::Clients => "Clients",
            LandingSection::PlanDetails => "Plan Details",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            LandingSection::Clients => "clients",
            LandingSection::PlanDetails => "plan-details",
        }
    }

    pub fn path(self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.slug())
    }
}

pub fn landing_tabs(base_url: &str) -> Vec<TabDescriptor> {
    LandingSection::ALL
        .iter()
        .map(|section| TabDescriptor {
            title: section.title(),
            route_name: section.path(base_url),
        })
        .collect()
}

/// Index of the tab whose route equals `pathname`. Like the child routes this
/// is exact and strict: deeper paths and a trailing slash select no tab.
pub fn active_tab_index(tabs: &[TabDescriptor], pathname: &str) -> Option<usize> {
    tabs.iter().position(|tab| tab.route_name == pathname)
}

/// Pushes the route of the selected tab.
pub fn handle_tab_change(tabs: &[TabDescriptor], index: usize, navigator: &dyn Navigator) {
    match tabs.get(index) {
        Some(tab) => {
            log::info!("longview: switching to tab '{}'", tab.title);
            navigator.navigate_to(&tab.route_name);
        }
        None => log::warn!("longview: tab index {} out of range", index),
    }
}

/// Where paths under `base_url` without a view are sent.
pub fn fallback_path(base_url: &str) -> String {
    LandingSection::Clients.path(base_url)
}

/// Subscriptions handed to the Clients view: the loaded list, or empty while
/// pending or failed.
pub fn clients_subscriptions(
    state: &RequestState<Vec<LongviewSubscription>>,
) -> Vec<LongviewSubscription> {
    state.data().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_longview_subscription::LongviewPrice;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        pushed: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.pushed.borrow_mut().push(path.to_string());
        }
    }

    fn subscription(n: u32) -> LongviewSubscription {
        LongviewSubscription {
            id: format!("longview-{}", n),
            label: format!("Longview Pro {} pack", n),
            clients_included: n,
            price: LongviewPrice {
                hourly: 0.03,
                monthly: 20.0,
            },
        }
    }

    #[test]
    fn test_tabs_follow_base_url() {
        let tabs = landing_tabs("/longview");
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Clients");
        assert_eq!(tabs[0].route_name, "/longview/clients");
        assert_eq!(tabs[1].title, "Plan Details");
        assert_eq!(tabs[1].route_name, "/longview/plan-details");
    }

    #[test]
    fn test_active_tab_index() {
        let tabs = landing_tabs(LONGVIEW_BASE_PATH);
        assert_eq!(active_tab_index(&tabs, "/longview/clients"), Some(0));
        assert_eq!(active_tab_index(&tabs, "/longview/plan-details"), Some(1));
        assert_eq!(active_tab_index(&tabs, "/longview"), None);
        assert_eq!(active_tab_index(&tabs, "/longview/unknown"), None);
        assert_eq!(active_tab_index(&tabs, "/longview/clientsx"), None);
        assert_eq!(active_tab_index(&tabs, "/linodes"), None);
        assert_eq!(active_tab_index(&tabs, "/longview/clients/"), None);
        assert_eq!(active_tab_index(&tabs, "/longview/clients/x"), None);
        assert_eq!(active_tab_index(&tabs, "/longview/plan-details/extra"), None);
        assert_eq!(active_tab_index(&tabs, "/Longview/Clients"), None);
    }

    #[test]
    fn test_active_tab_follows_section_routes() {
        let base = LONGVIEW_BASE_PATH;
        let tabs = landing_tabs(base);
        for (i, section) in LandingSection::ALL.iter().enumerate() {
            assert_eq!(active_tab_index(&tabs, &section.path(base)), Some(i));
        }
        // paths the router sends to the fallback never highlight a tab
        assert_eq!(active_tab_index(&tabs, &format!("{}/", fallback_path(base))), None);
    }

    #[test]
    fn test_tab_click_pushes_once() {
        let tabs = landing_tabs(LONGVIEW_BASE_PATH);
        for (i, tab) in tabs.iter().enumerate() {
            let nav = RecordingNavigator::default();
            handle_tab_change(&tabs, i, &nav);
            assert_eq!(*nav.pushed.borrow(), vec![tab.route_name.clone()]);
        }
    }

    #[test]
    fn test_tab_click_out_of_range_is_ignored() {
        let tabs = landing_tabs(LONGVIEW_BASE_PATH);
        let nav = RecordingNavigator::default();
        handle_tab_change(&tabs, 7, &nav);
        assert!(nav.pushed.borrow().is_empty());
    }

    #[test]
    fn test_fallback_is_clients_tab() {
        let tabs = landing_tabs("/longview");
        assert_eq!(fallback_path("/longview"), "/longview/clients");
        assert_eq!(active_tab_index(&tabs, &fallback_path("/longview")), Some(0));
    }

    #[test]
    fn test_clients_receive_loaded_subscriptions() {
        let subs: Vec<_> = (1..=3).map(subscription).collect();
        let state = RequestState::Loaded(subs.clone());
        assert_eq!(clients_subscriptions(&state), subs);
    }

    #[test]
    fn test_clients_receive_empty_list_until_loaded() {
        assert!(clients_subscriptions(&RequestState::Pending).is_empty());
        assert!(clients_subscriptions(&RequestState::Failed("HTTP 401".into())).is_empty());
    }
}
