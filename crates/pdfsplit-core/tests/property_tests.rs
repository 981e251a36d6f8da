//! Property-based tests for pdfsplit-core
//!
//! Exercises the selection and flow state with proptest.

use pdfsplit_core::{ApiConfig, PageSelection, SplitterError, SplitterState, UploadResponse};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn loaded_state(page_count: u32) -> SplitterState<u8> {
    let mut state = SplitterState::new(ApiConfig::default());
    state.choose_file(Some(0));
    state.begin_submit().unwrap();
    state.complete_upload(UploadResponse {
        pdf_base64: "X".to_string(),
        filename: "doc.pdf".to_string(),
    });
    state.viewer.set_page_count(page_count);
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Selection
    // ============================================================

    #[test]
    fn selection_is_pages_toggled_odd_times(toggles in prop::collection::vec(1u32..20, 0..60)) {
        let mut sel = PageSelection::new();
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for &page in &toggles {
            sel.toggle(page);
            *counts.entry(page).or_default() += 1;
        }

        let expected: BTreeSet<u32> = counts
            .into_iter()
            .filter(|(_, n)| n % 2 == 1)
            .map(|(p, _)| p)
            .collect();
        let actual: BTreeSet<u32> = sel.as_slice().iter().copied().collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(sel.len(), sel.as_slice().iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn selection_stays_within_page_count(
        page_count in 1u32..15,
        toggles in prop::collection::vec(0u32..20, 0..40),
    ) {
        let mut state = loaded_state(page_count);
        for page in toggles {
            let result = state.viewer.toggle(page);
            if page == 0 || page > page_count {
                let is_out_of_range = matches!(result, Err(SplitterError::PageOutOfRange { .. }));
                prop_assert!(is_out_of_range);
            }
        }
        prop_assert!(state.viewer.selection().as_slice().iter().all(|&p| p >= 1 && p <= page_count));
    }

    #[test]
    fn shrinking_page_count_prunes_selection(
        toggles in prop::collection::vec(1u32..20, 0..40),
        new_count in 0u32..20,
    ) {
        let mut state = loaded_state(20);
        for page in toggles {
            state.viewer.toggle(page).unwrap();
        }
        state.viewer.set_page_count(new_count);
        prop_assert!(state.viewer.selection().as_slice().iter().all(|&p| p <= new_count));
    }

    // ============================================================
    // Flow
    // ============================================================

    #[test]
    fn choosing_a_file_always_clears_uploaded(file in proptest::option::of(any::<u8>())) {
        let mut state = loaded_state(3);
        prop_assert!(state.upload.is_uploaded());
        state.choose_file(file);
        prop_assert!(!state.upload.is_uploaded());
        prop_assert!(state.viewer.selection().is_empty());
    }

    #[test]
    fn extraction_body_follows_selection(toggles in prop::collection::vec(1u32..10, 1..20)) {
        let mut state = loaded_state(10);
        for &page in &toggles {
            state.viewer.toggle(page).unwrap();
        }
        let expected = state.viewer.selection().to_vec();

        match state.begin_download() {
            Ok(req) => {
                prop_assert_eq!(req.filename.as_str(), "./uploads/doc.pdf");
                prop_assert_eq!(req.page_numbers, expected);
                state.viewer.complete_download();
                prop_assert!(state.viewer.selection().is_empty());
            }
            Err(err) => {
                prop_assert_eq!(err, SplitterError::EmptySelection);
                prop_assert!(expected.is_empty());
            }
        }
    }
}
