//! Integration tests for the comment/whitespace stripper.

use super::helpers::{
    load_fixture, HIGHLIGHT_LINKS_MINIFIED, NO_SEMICOLONS_MINIFIED, WORD_COUNT_MINIFIED,
};
use minifylet::minify::{strip, LiteralKind};

fn min(input: &str) -> String {
    strip(input).unwrap().into_string()
}

#[test]
fn highlight_links_fixture() {
    assert_eq!(min(&load_fixture("highlight_links.js")), HIGHLIGHT_LINKS_MINIFIED);
}

#[test]
fn word_count_fixture_drops_prefix_and_keeps_regex() {
    let output = min(&load_fixture("word_count.js"));
    insta::assert_snapshot!(output, @r#"var text=String(window.getSelection());var words=text.split(/\s+/).filter(function(w){return w.length>0;});alert("Words: "+words.length);"#);
    assert_eq!(output, WORD_COUNT_MINIFIED);
}

#[test]
fn no_semicolons_fixture_keeps_statement_breaks() {
    assert_eq!(min(&load_fixture("no_semicolons.js")), NO_SEMICOLONS_MINIFIED);
}

#[test]
fn regex_followed_by_operator_keyword_stays_separate() {
    let source = "var ok = /a/ instanceof RegExp\nvar has = /b/ in cache\n";
    let output = min(source);
    assert_eq!(output, "var ok=/a/ instanceof RegExp\nvar has=/b/ in cache");
    assert_eq!(min(&output), output);
}

#[test]
fn stripping_twice_changes_nothing() {
    for name in ["highlight_links.js", "word_count.js", "no_semicolons.js"] {
        let once = min(&load_fixture(name));
        assert_eq!(min(&once), once, "fixture {}", name);
    }
}

#[test]
fn comment_markers_never_survive_without_literals() {
    let inputs = [
        "a = 1; // one\nb = 2; /* two */ c = 3;",
        "/* lead */ f( x /* arg */ ) // tail",
        "x = y / z // ratio\n/* done */",
        "if (a) {\n  // nothing\n}\n",
    ];
    for input in inputs {
        let output = min(input);
        assert!(!output.contains("//"), "{:?} -> {:?}", input, output);
        assert!(!output.contains("/*"), "{:?} -> {:?}", input, output);
    }
}

#[test]
fn string_contents_are_verbatim() {
    let inputs = [
        r#"var s = "/* fake comment */";"#,
        r#"var s = "a // b";"#,
        r#"var s = "  lots   of   space  ";"#,
        "var s = 'https://example.com/#top';",
    ];
    for input in inputs {
        let start = input.find(&['"', '\''][..]).unwrap();
        let end = input.rfind(&['"', '\''][..]).unwrap();
        let literal = &input[start..=end];
        assert!(min(input).contains(literal), "{}", input);
    }
}

#[test]
fn unterminated_string_fixture_reports_location() {
    let err = strip(&load_fixture("unterminated_string.js")).unwrap_err();
    assert_eq!(err.kind, LiteralKind::String);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 16);
    assert_eq!(
        err.to_string(),
        "Malformed source: unterminated string literal starting at line 1, column 16"
    );
}

#[test]
fn non_ascii_text_survives() {
    assert_eq!(min("alert( 'héllo wörld ✓' );"), "alert('héllo wörld ✓');");
}

#[test]
fn crlf_line_endings() {
    assert_eq!(min("var a = 1\r\nvar b = 2\r\n"), "var a=1\nvar b=2");
}
