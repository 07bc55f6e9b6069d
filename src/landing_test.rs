use super::*;

/// Opening tags (`<a ...>`) for the given element name, in document order.
fn open_tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("<{name}");
    let mut tags = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&prefix) {
        let after = &rest[start + prefix.len()..];
        let boundary = after.chars().next();
        let Some(end) = after.find('>') else { break };
        if matches!(boundary, Some(' ' | '>')) {
            tags.push(&rest[start..start + prefix.len() + end + 1]);
        }
        rest = &after[end + 1..];
    }
    tags
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

// =============================================================================
// structure
// =============================================================================

#[test]
fn exactly_one_heading_with_title() {
    let html = render();
    assert_eq!(open_tags(&html, "h1").len(), 1, "{html}");
    assert!(html.contains(">🌾 АгроДанные КЗ</h1>"), "{html}");
}

#[test]
fn root_is_main() {
    let html = render();
    assert!(html.starts_with("<main"), "{html}");
    assert!(html.ends_with("</main>"), "{html}");
}

#[test]
fn subtitle_and_version_in_order() {
    let html = render();
    let subtitle = html.find(">Система управления фермерским хозяйством</p>").expect("subtitle");
    let version = html.find(">Версия 2.0 - Modern Full-Stack</p>").expect("version label");
    assert!(subtitle < version);
    assert_eq!(open_tags(&html, "p").len(), 2);
}

#[test]
fn exactly_two_links() {
    assert_eq!(open_tags(&render(), "a").len(), 2);
}

// =============================================================================
// navigation
// =============================================================================

#[test]
fn login_link_navigates_same_context() {
    let html = render();
    let login = open_tags(&html, "a")[0];
    assert_eq!(attr(login, "href"), Some("/login"));
    assert_eq!(attr(login, "target"), None);
    assert_eq!(attr(login, "rel"), None);
    assert!(html.contains(">Войти</a>"));
}

#[test]
fn docs_link_opens_isolated_context() {
    let html = render();
    let docs = open_tags(&html, "a")[1];
    assert_eq!(attr(docs, "href"), Some("/api/v1/docs"));
    assert_eq!(attr(docs, "target"), Some("_blank"));
    assert_eq!(attr(docs, "rel"), Some("noopener noreferrer"));
    assert!(html.contains(">API Docs</a>"));
}

#[test]
fn login_link_precedes_docs_link() {
    let html = render();
    let login = html.find(">Войти</a>").expect("login link");
    let docs = html.find(">API Docs</a>").expect("docs link");
    assert!(login < docs);
}

// =============================================================================
// determinism
// =============================================================================

#[test]
fn render_is_idempotent() {
    assert_eq!(render(), render());
}

#[test]
fn document_is_idempotent() {
    assert_eq!(document(), document());
}

// =============================================================================
// document
// =============================================================================

#[test]
fn document_declares_russian_utf8() {
    let doc = document();
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(r#"<html lang="ru">"#));
    assert!(doc.contains(r#"<meta charset="utf-8">"#));
    assert!(doc.contains("<title>🌾 АгроДанные КЗ</title>"));
}

#[test]
fn document_embeds_rendered_fragment() {
    let doc = document();
    assert!(doc.contains(&format!("<body>{}</body>", render())));
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn open_tags_skips_longer_tag_names() {
    let html = r#"<abbr>x</abbr><a href="/x">y</a>"#;
    assert_eq!(open_tags(html, "a"), vec![r#"<a href="/x">"#]);
}
