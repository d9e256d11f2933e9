//! Plain-text output of whole documents

use crate::common::to_plain;
use insta::assert_snapshot;
use wit_babel::{convert, ConvertError, ConvertOptions, OutputMode};

#[test]
fn numbered_branch() {
    assert_snapshot!(to_plain("1* a\n1** b\n1* c\n"), @r"
1. a
    1.1. b
2. c
");
}

#[test]
fn unnumbered_outline_keeps_glyphs() {
    assert_snapshot!(to_plain("* a\n* b\n\t* nested\n"), @r"
* a
* b
    * nested
");
}

#[test]
fn unnumbered_child_inside_numbered_branch() {
    assert_snapshot!(to_plain("1* setup\n1** step\n1* next\n    * optional note\n"), @r"
1. setup
    1.1. step
2. next
    * optional note
");
}

#[test]
fn references_and_continuations() {
    let source = "\
Read @{install} first.

1* Overview
1*{install} Installation
    run the installer
1** Verify
";
    assert_snapshot!(to_plain(source), @r"
Read §2 first.

1. Overview
2. Installation
    run the installer
    2.1. Verify
");
}

#[test]
fn inline_markup_is_left_alone() {
    assert_eq!(to_plain("* *emphasis* and `code`\n"), "* *emphasis* and `code`\n");
}

#[test]
fn blank_lines_and_fences() {
    let source = "* a\n\n* b\n\n\n```\n* raw\n```\n";
    assert_eq!(to_plain(source), "* a\n* b\n\n\n```\n* raw\n```\n");
}

#[test]
fn errors_do_not_depend_on_mode() {
    let err = convert("*{a} one\n*{a} two\n", &ConvertOptions::new(OutputMode::Plain)).unwrap_err();
    assert!(matches!(err, ConvertError::DuplicateIdentifier { line: 2, .. }));
}

#[test]
fn level_kind_is_fixed_when_opened() {
    assert_eq!(to_plain("1* a\n    * b\n1** c\n"), "1. a\n    * b\n    * c\n");
}
