//! Fuzz target: submission validation over arbitrary field content.
//!
//! Verifies that validation never panics and stays idempotent no
//! matter what bytes end up in the form fields.

#![no_main]

use libfuzzer_sys::fuzz_target;

use folio_core::{validate, SubmissionDraft};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.splitn(4, '\n');
    let draft = SubmissionDraft {
        name: parts.next().unwrap_or_default().to_owned(),
        email: parts.next().unwrap_or_default().to_owned(),
        phone_no: parts.next().unwrap_or_default().to_owned(),
        message: parts.next().unwrap_or_default().to_owned(),
    };

    let first = validate(&draft);
    let second = validate(&draft);
    assert_eq!(first, second, "validation must be idempotent");
});
