//! Page category constants.
//!
//! Every page root declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a025_longview--landing"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector into IDE search and you land in `domain/a025_longview/`.

/// Section landing page with a tab bar and routed sub-views.
pub const PAGE_CAT_LANDING: &str = "landing";

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view for a single record or plan.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LANDING, PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
