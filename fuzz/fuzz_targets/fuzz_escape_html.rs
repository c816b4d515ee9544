//! Fuzz target: HTML escaping of arbitrary text.
//!
//! Verifies that escaping never panics and that no markup-significant
//! character survives into the output.

#![no_main]

use libfuzzer_sys::fuzz_target;

use folio_core::escape_html;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let escaped = escape_html(&text);
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert!(!escaped.contains('"'));
});
