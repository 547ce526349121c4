//! Property-based tests for the owned collection and the ledger.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::collection::OwnedCollection;
    use crate::ledger::BorrowLedger;
    use crate::record::{Book, Member};
    use proptest::prelude::*;

    fn book_strategy() -> impl Strategy<Value = Book> {
        ("[A-Za-z0-9 ]{1,12}", "[A-Za-z]{1,10}").prop_map(|(title, author)| Book::new(title, author))
    }

    // ============================================================================
    // OwnedCollection property tests
    // ============================================================================

    proptest! {
        /// Property: any number of adds, past any initial capacity, keeps insertion order
        #[test]
        fn growth_preserves_order(
            values in prop::collection::vec(any::<u32>(), 0..200),
            initial in 0usize..8,
        ) {
            let mut collection = OwnedCollection::with_capacity(initial);
            for value in &values {
                prop_assert!(collection.add(*value).is_ok());
            }
            prop_assert_eq!(collection.as_slice(), values.as_slice());
            prop_assert!(collection.capacity() >= collection.len());
        }

        /// Property: capacity only ever doubles or jumps to the requested size
        #[test]
        fn growth_follows_doubling_policy(count in 1usize..100) {
            let mut collection = OwnedCollection::new();
            let mut expected = collection.capacity();
            for i in 0..count {
                if i == expected {
                    expected *= 2;
                }
                collection.add(i).unwrap();
                prop_assert_eq!(collection.capacity(), expected);
            }
        }

        /// Property: removing position i leaves the others in order, without gaps
        #[test]
        fn removal_is_stable(
            values in prop::collection::vec(any::<u16>(), 1..50),
            index in any::<prop::sample::Index>(),
        ) {
            let target = index.index(values.len());
            // Tag each value with its position so duplicates stay distinguishable
            let mut collection = OwnedCollection::new();
            for (position, value) in values.iter().enumerate() {
                collection.add((position, *value)).unwrap();
            }

            prop_assert!(collection.remove(|(position, _)| *position == target));

            let mut expected: Vec<(usize, u16)> = values.iter().copied().enumerate().collect();
            expected.remove(target);
            prop_assert_eq!(collection.len(), values.len() - 1);
            prop_assert_eq!(collection.as_slice(), expected.as_slice());
        }

        /// Property: a failed add never changes the collection
        #[test]
        fn failed_add_leaves_collection_unchanged(limit in 1usize..20) {
            let mut collection = OwnedCollection::with_capacity(1).with_capacity_limit(limit);
            for i in 0..limit {
                collection.add(i).unwrap();
            }
            let before = collection.as_slice().to_vec();

            let err = collection.add(usize::MAX).unwrap_err();
            prop_assert_eq!(err.into_inner(), usize::MAX);
            prop_assert_eq!(collection.as_slice(), before.as_slice());
        }
    }

    // ============================================================================
    // BorrowLedger property tests
    // ============================================================================

    proptest! {
        /// Property: borrow followed by return restores the member's loans
        #[test]
        fn borrow_then_return_round_trips(
            existing in prop::collection::vec(book_strategy(), 0..10),
            book in book_strategy(),
        ) {
            let member = Member::new("Alice", "M1");
            let mut ledger = BorrowLedger::new();
            for loan in &existing {
                ledger.borrow(&member, loan.clone());
            }
            let before = ledger.view_borrowed(&member);

            ledger.borrow(&member, book.clone());
            prop_assert!(ledger.return_book(&member, &book));

            let mut before = before;
            let mut after = ledger.view_borrowed(&member);
            if existing.iter().any(|loan| loan.same_work(&book)) {
                // An earlier equal loan is the one returned: same loans, new order
                before.sort_by_key(|b| (b.title.clone(), b.author.clone()));
                after.sort_by_key(|b| (b.title.clone(), b.author.clone()));
            }
            prop_assert_eq!(after, before);
        }

        /// Property: clearing a member twice never fails and leaves no entry
        #[test]
        fn clear_entry_is_idempotent(loans in prop::collection::vec(book_strategy(), 0..5)) {
            let member = Member::new("Bob", "M2");
            let mut ledger = BorrowLedger::new();
            for loan in loans {
                ledger.borrow(&member, loan);
            }

            ledger.clear_entry(&member);
            prop_assert!(!ledger.has_entry(&member));
            prop_assert_eq!(ledger.clear_entry(&member), None);
            prop_assert!(!ledger.has_entry(&member));
        }
    }
}
