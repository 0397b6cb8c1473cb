//! Root wrapper of every section page
//!
//! The root element gets `id="{entity}--list"` (e.g. `"a001_sales--list"`),
//! so the id copied from the DOM inspector leads to `domain/a001_sales/`.

use leptos::prelude::*;

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id `{}` does not follow entity--category", page_id);
    }
    let category = page_id.split_once("--").map(|(_, c)| c).unwrap_or_default();

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_sales--list"));
        assert!(!is_valid_page_id("a001_sales"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_sales--"));
    }
}
