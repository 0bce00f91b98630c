//! Property tests for the discussion UI state store.

use proptest::prelude::*;

use campus_model::{DiscussionFilter, DiscussionSort};
use campus_state::DiscussionUiState;

fn filter_strategy() -> impl Strategy<Value = DiscussionFilter> {
    prop_oneof![
        Just(DiscussionFilter::All),
        Just(DiscussionFilter::Unanswered),
    ]
}

fn sort_strategy() -> impl Strategy<Value = DiscussionSort> {
    prop_oneof![
        Just(DiscussionSort::Recent),
        Just(DiscussionSort::Oldest),
        Just(DiscussionSort::Popular),
        Just(DiscussionSort::Unanswered),
    ]
}

proptest! {
    /// Toggling any thread twice restores the expanded set exactly.
    #[test]
    fn double_toggle_restores_expanded_set(
        seeded in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 0..8),
        target in "[a-z][a-z0-9]{0,6}",
    ) {
        let mut state = DiscussionUiState::new();
        for id in &seeded {
            state.toggle_thread(id);
        }

        let mut observed: Vec<String> = seeded.clone();
        observed.push(target.clone());
        let before: Vec<bool> = observed.iter().map(|id| state.is_expanded(id)).collect();

        state.toggle_thread(&target);
        state.toggle_thread(&target);

        let after: Vec<bool> = observed.iter().map(|id| state.is_expanded(id)).collect();
        prop_assert_eq!(before, after);
    }

    /// Interleaved filter/sort writes never leak into each other.
    #[test]
    fn filter_and_sort_writes_are_independent(
        writes in proptest::collection::vec(
            prop_oneof![
                filter_strategy().prop_map(|f| (Some(f), None::<DiscussionSort>)),
                sort_strategy().prop_map(|s| (None::<DiscussionFilter>, Some(s))),
            ],
            1..16,
        ),
    ) {
        let mut state = DiscussionUiState::new();
        let mut expected_filter = DiscussionFilter::default();
        let mut expected_sort = DiscussionSort::default();

        for (filter, sort) in writes {
            if let Some(filter) = filter {
                state.filter = filter;
                expected_filter = filter;
            }
            if let Some(sort) = sort {
                state.sort = sort;
                expected_sort = sort;
            }
            prop_assert_eq!(state.filter, expected_filter);
            prop_assert_eq!(state.sort, expected_sort);
        }
    }
}
