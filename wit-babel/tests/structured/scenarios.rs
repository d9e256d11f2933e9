//! Whole-document behaviour of structured output

use crate::common::{structured_error, to_structured};
use wit_babel::{convert, ConvertError, ConvertOptions, OutputMode};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn sibling_bullets_share_one_unnumbered_list() {
    let html = to_structured("* a\n* b\n");

    assert_eq!(count(&html, "<ul"), 1);
    assert_eq!(count(&html, "</ul>"), 1);
    assert_eq!(count(&html, "<ol"), 0);
    assert_eq!(count(&html, r#"<li class="wit-item""#), 2);
    // unnumbered items show the literal bullet instead of the browser marker
    assert!(html.contains("<p>* a</p>"));
    assert!(html.contains("<p>* b</p>"));
    assert!(html.contains(r#"style="list-style-type: none""#));
    assert!(!html.contains("1."));
    assert!(!html.contains("<style>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn numbered_branch_opens_and_closes_nested_level() {
    let html = to_structured("1* a\n1** b\n1* c\n");
    let lines: Vec<&str> = html.lines().collect();

    let a = lines
        .iter()
        .position(|line| line.contains(r#"data-wit-content="wit-1-1">"#))
        .unwrap();
    assert!(lines[a].starts_with(r#"<ol class="wit-nest wit-root" id="witroot_1">"#));
    // the parent stays open while its child list follows
    assert!(lines[a].ends_with("<p>a</p>"));
    assert!(lines[a + 1].starts_with(r#"<ol class="wit-nest" data-wit-for="wit-1-1">"#));
    assert!(lines[a + 1].contains(r#"data-wit-content="wit-1-1-1""#));
    assert!(lines[a + 2].starts_with("</ol></li>"));
    assert!(lines[a + 2].contains(r#"data-wit-content="wit-1-2""#));
    assert_eq!(lines[a + 3], "</ol>");
}

#[test]
fn numbered_documents_carry_assets_once() {
    let html = to_structured("1* a\n\n\n1* b\n");

    assert_eq!(count(&html, "<style>"), 1);
    assert_eq!(count(&html, "<script>"), 1);
    assert!(html.starts_with("<style>"));
    assert!(html.trim_end().ends_with("</script>"));
}

#[test]
fn collapsed_option_reaches_the_script() {
    let source = "1* a\n1** b\n";
    let collapsed = convert(
        source,
        &ConvertOptions::new(OutputMode::Structured).with_collapsed(true),
    )
    .unwrap();
    let expanded = to_structured(source);

    assert!(collapsed.contains("var collapseAll = true;"));
    assert!(expanded.contains("var collapseAll = false;"));
}

#[test]
fn duplicate_identifier_cites_second_line() {
    let err = structured_error("*{dup} first\n* other\n*{dup} second\n");
    assert_eq!(
        err,
        ConvertError::DuplicateIdentifier {
            id: "dup".to_string(),
            line: 3,
            first_line: 1,
        }
    );
    assert_eq!(err.line(), Some(3));
}

#[test]
fn undefined_reference_is_fatal() {
    let err = structured_error("@{missing}\n");
    assert_eq!(
        err,
        ConvertError::UndefinedReference {
            id: "missing".to_string(),
            line: Some(1),
        }
    );
}

#[test]
fn malformed_identifier_is_fatal() {
    let err = structured_error("* fine\n*{not valid} item\n");
    assert!(matches!(
        err,
        ConvertError::MalformedIdentifier { line: 2, .. }
    ));
}

#[test]
fn one_blank_line_keeps_the_list_open() {
    let html = to_structured("* a\n\n* b\n");

    assert_eq!(count(&html, "<ul"), 1);
    assert!(!html.contains("\n\n"));
}

#[test]
fn two_blank_lines_close_the_list_before_they_are_emitted() {
    let html = to_structured("* a\n\n\n* b\n");

    assert_eq!(count(&html, "<ul"), 2);
    assert!(html.contains("</ul>\n\n\n"));
    assert!(html.contains(r#"id="witroot_2""#));
}

#[test]
fn fenced_bullets_are_copied_verbatim() {
    let source = "```\n* not an item\n1* nor this @{ref}\n```\n";
    assert_eq!(to_structured(source), source);
}

#[test]
fn text_around_lists_is_untouched() {
    let html = to_structured("Intro line\n* a\nOutro line\n");
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(lines[0], "Intro line");
    assert_eq!(lines[2], "</ul>");
    assert_eq!(lines[3], "Outro line");
}

#[test]
fn identifiers_become_anchors_and_references_links() {
    let html = to_structured("See @{second}.\n\n1* one\n1*{second} two\n");

    assert!(html.contains(r##"See <a href="#second">§2</a>."##));
    assert!(html.contains(r#"<a name="second"></a><p>two</p>"#));
}

#[test]
fn continuation_is_merged_into_its_item() {
    let html = to_structured("* first\n    second\n* next\n");
    let lines: Vec<&str> = html.lines().collect();

    assert!(lines[0].ends_with("<p>* first</p>"));
    assert_eq!(lines[1], "<br><p>second</p></li>");
    assert!(lines[2].contains("<p>* next</p>"));
}

#[test]
fn inline_markup_is_rendered() {
    let html = to_structured("* some *emphasis* here\n");
    assert!(html.contains("<p>* some <em>emphasis</em> here</p>"));
}

#[test]
fn references_with_underscores_link_to_their_items() {
    let html = to_structured("1*{_intro_} Intro\n1* See @{_intro_} above\n");

    assert!(html.contains(r#"<a name="_intro_"></a><p>Intro</p>"#));
    assert!(html.contains(r##"<p>See <a href="#_intro_">§1</a> above</p>"##));
    assert!(!html.contains("<em>"));
}

#[test]
fn dunder_references_link_to_their_items() {
    let html = to_structured("1* one\n1*{__init__} two\n1* back to @{__init__}\n");

    assert!(html.contains(r##"<p>back to <a href="#__init__">§2</a></p>"##));
    assert!(!html.contains("<strong>"));
}

#[test]
fn undefined_reference_with_underscores_is_fatal() {
    let err = structured_error("* See @{_nope_} here\n");
    assert_eq!(
        err,
        ConvertError::UndefinedReference {
            id: "_nope_".to_string(),
            line: Some(1),
        }
    );

    let err = structured_error("* one\n* calls @{__init__}\n");
    assert_eq!(
        err,
        ConvertError::UndefinedReference {
            id: "__init__".to_string(),
            line: Some(2),
        }
    );
}

#[test]
fn references_mixed_with_emphasis_still_resolve() {
    let html = to_structured("1*{_a_} first\n1* *see* @{_a_} **now**\n");

    assert!(html.contains(
        r##"<p><em>see</em> <a href="#_a_">§1</a> <strong>now</strong></p>"##
    ));
}

#[test]
fn item_text_never_becomes_block_markup() {
    let html = to_structured("1* 1986. A year\n1* # Title\n1* > quote\n");

    assert!(!html.contains("<ol start"));
    assert!(!html.contains("<h1>"));
    assert!(!html.contains("<blockquote>"));
    assert_eq!(count(&html, "<ol"), 1);
    assert!(html.contains("<p>1986. A year</p>"));
    assert!(html.contains("<p># Title</p>"));
    assert!(html.contains("<p>&gt; quote</p>"));
}
