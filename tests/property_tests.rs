//! Property tests for the universally-quantified display contracts.

use proptest::prelude::*;
use proptest::test_runner::Config;

use voltmarket_profiles::currency;
use voltmarket_profiles::profile::{categorize, Transaction, TransactionStatus};
use voltmarket_profiles::rating::star_breakdown;

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn currency_format_parse_round_trips(amount in 0i64..=1_000_000_000_000, include_symbol: bool) {
        let formatted = currency::format(amount, include_symbol);
        prop_assert_eq!(currency::parse(&formatted), amount);
    }

    #[test]
    fn currency_format_groups_every_three_digits(amount in 0i64..=1_000_000_000_000) {
        let formatted = currency::format(amount, false);
        for group in formatted.split('.').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
        prop_assert!(!formatted.starts_with('.'));
    }

    #[test]
    fn star_slots_always_sum_to_five(rating in -100.0f64..100.0) {
        let stars = star_breakdown(rating);
        prop_assert_eq!(stars.full + stars.half + stars.empty, 5);
    }

    #[test]
    fn categorize_is_a_partition(statuses in prop::collection::vec(0u8..3, 0..64)) {
        let transactions: Vec<Transaction> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| Transaction {
                id: i as i64,
                amount: 1_000,
                status: match s {
                    0 => TransactionStatus::Active,
                    1 => TransactionStatus::Sold,
                    _ => TransactionStatus::Completed,
                },
                closed_at: None,
                listing: None,
            })
            .collect();

        let input_ids: Vec<i64> = transactions.iter().map(|tx| tx.id).collect();
        let buckets = categorize(transactions);

        // Union of buckets equals the input set: nothing lost, nothing
        // duplicated, every row in the bucket matching its status.
        let mut output_ids: Vec<i64> = buckets
            .active
            .iter()
            .chain(buckets.sold.iter())
            .chain(buckets.completed.iter())
            .map(|tx| tx.id)
            .collect();
        output_ids.sort_unstable();
        prop_assert_eq!(output_ids, input_ids);
        prop_assert!(buckets.active.iter().all(|tx| tx.status == TransactionStatus::Active));
        prop_assert!(buckets.sold.iter().all(|tx| tx.status == TransactionStatus::Sold));
        prop_assert!(buckets.completed.iter().all(|tx| tx.status == TransactionStatus::Completed));
    }
}
