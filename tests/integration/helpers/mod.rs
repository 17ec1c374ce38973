//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Reverse `%XX` escapes, for checking that encoding loses nothing.
pub fn percent_decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
            out.push(u8::from_str_radix(hex, 16).unwrap());
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}

/// Minified output of `highlight_links.js`.
pub const HIGHLIGHT_LINKS_MINIFIED: &str = "(function(){var links=document.querySelectorAll('a');for(var i=0;i<links.length;i++){links[i].style.background=\"yellow\";}\nalert(links.length+' links');})();";

/// Minified output of `word_count.js`.
pub const WORD_COUNT_MINIFIED: &str = "var text=String(window.getSelection());var words=text.split(/\\s+/).filter(function(w){return w.length>0;});alert(\"Words: \"+words.length);";

/// Minified output of `no_semicolons.js`.
pub const NO_SEMICOLONS_MINIFIED: &str =
    "const title=document.title\nconst url=location.href;[title,url].forEach(function(part){console.log(part)})";
