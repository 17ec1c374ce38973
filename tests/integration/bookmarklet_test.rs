//! Integration tests for wrapping and URL encoding.

use super::helpers::{
    load_fixture, percent_decode, HIGHLIGHT_LINKS_MINIFIED, WORD_COUNT_MINIFIED,
};
use minifylet::bookmarklet::wrap::{WRAP_PREFIX, WRAP_SUFFIX};
use minifylet::bookmarklet::{encode, wrap, JAVASCRIPT_SCHEME};
use minifylet::minify::strip;

#[test]
fn wrapped_fixture_contains_minified_code_exactly() {
    let code = strip(&load_fixture("highlight_links.js")).unwrap();
    let wrapped = wrap(code, true);
    assert_eq!(
        wrapped.as_str(),
        format!("{}{}{}", WRAP_PREFIX, HIGHLIGHT_LINKS_MINIFIED, WRAP_SUFFIX)
    );
}

#[test]
fn encoding_decodes_back_to_wrapped_code() {
    let sources = [
        load_fixture("highlight_links.js"),
        load_fixture("word_count.js"),
        load_fixture("no_semicolons.js"),
        "alert('100% ‘smart’ done #1 <b>');".to_string(),
    ];
    for source in sources {
        let wrapped = wrap(strip(&source).unwrap(), true);
        let encoded = encode(&wrapped);
        assert_eq!(percent_decode(encoded.as_str()), wrapped.as_str());
        assert!(
            encoded
                .as_str()
                .chars()
                .all(|c| c == '%' || encode::is_url_safe(c)),
            "{}",
            encoded
        );
    }
}

#[test]
fn highlight_links_url() {
    let wrapped = wrap(strip(&load_fixture("highlight_links.js")).unwrap(), true);
    assert_eq!(
        encode(&wrapped).url(),
        "javascript:void((function(){(function(){var%20links=document.querySelectorAll('a');for(var%20i=0;i%3Clinks.length;i++){links[i].style.background=%22yellow%22;}%0Aalert(links.length+'%20links');})();})())"
    );
}

#[test]
fn word_count_url_without_wrap() {
    let wrapped = wrap(strip(&load_fixture("word_count.js")).unwrap(), false);
    assert_eq!(wrapped.as_str(), WORD_COUNT_MINIFIED);
    insta::assert_snapshot!(encode(&wrapped).url(), @r"javascript:var%20text=String(window.getSelection());var%20words=text.split(/\s+/).filter(function(w){return%20w.length%3E0;});alert(%22Words:%20%22+words.length);");
}

#[test]
fn url_starts_with_scheme_once() {
    let wrapped = wrap(strip("javascript:alert(1)").unwrap(), false);
    let url = encode(&wrapped).url();
    assert!(url.starts_with(JAVASCRIPT_SCHEME));
    assert_eq!(url.matches(JAVASCRIPT_SCHEME).count(), 1);
    assert_eq!(url, "javascript:alert(1)");
}
