//! Fuzz target: JSON deserialization of `SubmissionDraft`.
//!
//! Verifies that arbitrary byte sequences fed to the JSON parser
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;

use folio_core::SubmissionDraft;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; we only care that this never panics.
    let _ = serde_json::from_slice::<SubmissionDraft>(data);
});
