//! End-to-end checks through the public API: config file → context →
//! breadcrumbs and pager output, the way the portal shell wires them.

use portal_nav::config::{self, DEFAULT_CONFIG_FILE};
use portal_nav::pagination::{PageItem, Pagination, pagination_range};
use portal_nav::{NavContext, breadcrumbs, output, render};
use std::fs;
use tempfile::TempDir;

fn context_from(toml: &str) -> NavContext {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, toml).unwrap();
    config::load_config(&path).unwrap().context().unwrap()
}

#[test]
fn member_portal_trail_from_config() {
    let ctx = context_from(
        r#"
[routes]
"/members/[memberId]" = "Member Detail"
"/members/[memberId]/claims/[claimId]" = "Claim"
"#,
    );
    let trail = breadcrumbs("/members/12345/claims/C-77?tab=eob", &ctx);
    let labels: Vec<&str> = trail.iter().map(|b| b.label.as_str()).collect();
    let paths: Vec<&str> = trail.iter().map(|b| b.path.as_str()).collect();
    assert_eq!(labels, vec!["Members", "Member Detail", "Claims", "Claim"]);
    assert_eq!(
        paths,
        vec![
            "/members",
            "/members/12345",
            "/members/12345/claims",
            "/members/12345/claims/C-77",
        ]
    );
}

#[test]
fn configured_acronyms_drive_labels() {
    let ctx = context_from(
        r#"
[title_case]
acronyms = ["EOB", "HSA"]
"#,
    );
    let trail = breadcrumbs("/benefits/hsa-eob-summary", &ctx);
    assert_eq!(trail[1].label, "HSA EOB Summary");
}

#[test]
fn default_context_handles_documented_cases() {
    let ctx = NavContext::default();
    assert!(breadcrumbs("/", &ctx).is_empty());
    assert_eq!(breadcrumbs("/faq-page", &ctx)[0].label, "FAQ Page");
    let trail = breadcrumbs("/settings/profile", &ctx);
    assert_eq!(trail[0].label, "Settings");
    assert_eq!(trail[1].path, "/settings/profile");
}

#[test]
fn breadcrumb_paths_are_prefix_stable() {
    let ctx = context_from(
        r#"
[routes]
"/docs/[...slug]" = "Document"
"#,
    );
    let full = breadcrumbs("/docs/plans/2024/", &ctx);
    assert_eq!(full.len(), 3);
    for (i, entry) in full.iter().enumerate() {
        assert_eq!(breadcrumbs(&entry.path, &ctx), full[..=i]);
    }
}

#[test]
fn pager_range_text_and_html_agree() {
    let pagination = Pagination::new(100, 10).unwrap().with_page(5);
    let items = pagination.range().unwrap();
    assert_eq!(items, pagination_range(100, 10, 5, 1).unwrap());

    let text = output::format_pagination(&pagination).unwrap();
    assert_eq!(text[0], "1 ... 4 [5] 6 ... 10");

    let html = render::render_pager(&pagination, "/claims").unwrap().into_string();
    for n in items.iter().filter_map(PageItem::page).filter(|&n| n != 5) {
        assert!(html.contains(&format!(r#"href="/claims?page={n}""#)));
    }
}

#[test]
fn config_page_size_zero_is_rejected_before_paging() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[pagination]\npage_size = 0\n").unwrap();
    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn every_range_has_first_and_last_page() {
    for total in 1..=300 {
        for page in [0, 1, 2, 5, 9, 15, 31, 100] {
            let items = pagination_range(total, 10, page, 1).unwrap();
            let pages = total.div_ceil(10);
            assert_eq!(items.first(), Some(&PageItem::Page(1)));
            assert_eq!(items.last(), Some(&PageItem::Page(pages)));
        }
    }
}
