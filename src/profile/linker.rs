//! Review-to-order linkage.

use crate::currency;

use super::model::{OrderLink, Review, Transaction};

/// Resolve a review's order linkage.
///
/// Precedence: a present reference with a resolved order yields
/// [`OrderLink::Resolved`]; a present reference without a resolution is
/// surfaced as [`OrderLink::Unresolved`] carrying the raw id, never folded
/// into `None`; only a review issued outside any order yields
/// [`OrderLink::None`], regardless of what resolution was supplied.
pub fn link_order(review: &Review, resolved: Option<&Transaction>) -> OrderLink {
    let Some(order_ref) = review.order_ref else {
        return OrderLink::None;
    };

    match resolved {
        Some(order) => OrderLink::Resolved {
            order_id: order.id,
            amount: currency::format(order.amount, true),
            listing: order.listing.clone(),
        },
        None => OrderLink::Unresolved { order_id: order_ref },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::{ListingSummary, TransactionStatus};

    fn review(order_ref: Option<i64>) -> Review {
        Review {
            id: 1,
            rating: 5.0,
            comment: None,
            reviewer_name: "Le Hoa".into(),
            order_ref,
            created_at: None,
            updated_at: None,
        }
    }

    fn order(listing: Option<ListingSummary>) -> Transaction {
        Transaction {
            id: 31,
            amount: 450_000_000,
            status: TransactionStatus::Completed,
            closed_at: None,
            listing,
        }
    }

    #[test]
    fn test_resolved_with_listing() {
        let listing = ListingSummary {
            brand: "VinFast".into(),
            model: "VF 8".into(),
            year: Some(2022),
        };
        let link = link_order(&review(Some(31)), Some(&order(Some(listing.clone()))));
        assert_eq!(
            link,
            OrderLink::Resolved {
                order_id: 31,
                amount: "450.000.000 ₫".into(),
                listing: Some(listing),
            }
        );
    }

    #[test]
    fn test_resolved_with_dangling_listing_keeps_id_and_amount() {
        let link = link_order(&review(Some(31)), Some(&order(None)));
        match link {
            OrderLink::Resolved {
                order_id,
                amount,
                listing,
            } => {
                assert_eq!(order_id, 31);
                assert_eq!(amount, "450.000.000 ₫");
                assert!(listing.is_none());
            }
            other => panic!("expected resolved link, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_carries_raw_reference() {
        let link = link_order(&review(Some(99)), None);
        assert_eq!(link, OrderLink::Unresolved { order_id: 99 });
    }

    #[test]
    fn test_no_reference_yields_none_even_when_resolution_supplied() {
        assert_eq!(link_order(&review(None), None), OrderLink::None);
        assert_eq!(link_order(&review(None), Some(&order(None))), OrderLink::None);
    }
}
