use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the last (current) crumb
    pub href: Option<String>,
}

/// Builds crumbs from a pathname.
///
/// `remove_crumb_x` drops the segment at that 1-based position before the
/// crumbs are built. The last segment is rendered as `label_title` when given.
pub fn build_crumbs(
    pathname: &str,
    label_title: Option<&str>,
    remove_crumb_x: Option<usize>,
) -> Vec<Crumb> {
    let mut segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    if let Some(x) = remove_crumb_x {
        if x >= 1 && x <= segments.len() {
            segments.remove(x - 1);
        }
    }

    let Some((last, parents)) = segments.split_last() else {
        return label_title
            .map(|t| {
                vec![Crumb {
                    label: t.to_string(),
                    href: None,
                }]
            })
            .unwrap_or_default();
    };

    let mut crumbs: Vec<Crumb> = parents
        .iter()
        .enumerate()
        .map(|(i, segment)| Crumb {
            label: segment_label(segment),
            href: Some(format!("/{}", parents[..=i].join("/"))),
        })
        .collect();

    crumbs.push(Crumb {
        label: label_title
            .map(str::to_string)
            .unwrap_or_else(|| segment_label(last)),
        href: None,
    });
    crumbs
}

fn segment_label(segment: &str) -> String {
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    let text = decoded.replace('-', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Breadcrumb(
    #[prop(into)] pathname: Signal<String>,
    #[prop(optional)] label_title: Option<&'static str>,
    #[prop(optional)] remove_crumb_x: Option<usize>,
) -> impl IntoView {
    let crumbs = move || build_crumbs(&pathname.get(), label_title, remove_crumb_x);

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <ol class="breadcrumb__list">
                {move || {
                    crumbs()
                        .into_iter()
                        .map(|crumb| match crumb.href {
                            Some(href) => view! {
                                <li class="breadcrumb__item">
                                    <a class="breadcrumb__link" href=href>{crumb.label}</a>
                                    <span class="breadcrumb__separator">"/"</span>
                                </li>
                            }
                            .into_any(),
                            None => view! {
                                <li class="breadcrumb__item breadcrumb__item--current">
                                    <h1 class="page__title" data-qa-label-title="">{crumb.label}</h1>
                                </li>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(crumbs: &[Crumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_landing_shows_only_label() {
        let crumbs = build_crumbs("/longview/clients", Some("Longview"), Some(1));
        assert_eq!(
            crumbs,
            vec![Crumb {
                label: "Longview".to_string(),
                href: None
            }]
        );
    }

    #[test]
    fn test_parents_become_links() {
        let crumbs = build_crumbs("/longview/clients/lv-42", None, None);
        assert_eq!(labels(&crumbs), vec!["Longview", "Clients", "Lv 42"]);
        assert_eq!(crumbs[0].href.as_deref(), Some("/longview"));
        assert_eq!(crumbs[1].href.as_deref(), Some("/longview/clients"));
        assert_eq!(crumbs[2].href, None);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let crumbs = build_crumbs("/longview/plan-details", None, Some(5));
        assert_eq!(labels(&crumbs), vec!["Longview", "Plan details"]);
    }

    #[test]
    fn test_percent_encoded_segment() {
        let crumbs = build_crumbs("/longview/my%20client", None, None);
        assert_eq!(crumbs[1].label, "My client");
    }

    #[test]
    fn test_root_path() {
        assert!(build_crumbs("/", None, None).is_empty());
        assert_eq!(labels(&build_crumbs("/", Some("Longview"), None)), vec!["Longview"]);
    }
}
