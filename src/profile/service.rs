//! Profile aggregation engine.
//!
//! The engine is a pure, synchronous computation over already-fetched
//! inputs: it performs no I/O, holds no shared state, and every call owns
//! its inputs and produces a fresh summary, so concurrent aggregations for
//! different parties need no coordination. Fetching, caching and retry
//! policy belong to the upstream client.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{BuyerProfileRecord, Party, ReviewRecord, SellerProfileRecord};
use crate::rating::{self, star_breakdown, RatingSummary};

use super::linker::link_order;
use super::model::{
    PartyRole, ProfileSummary, Review, ReviewDisplay, Transaction, TransactionBuckets,
    TransactionStatus,
};

/// How many recent reviews a profile carries. Matches the bound the
/// marketplace applies to its profile payloads.
pub const DEFAULT_RECENT_REVIEW_LIMIT: usize = 5;

/// Aggregation failures. Degraded linkage and malformed amounts are not
/// errors; the only terminal failure is a missing party record.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{role} profile not found")]
    PartyNotFound { role: PartyRole },
}

/// Partition transactions into status buckets.
///
/// The partition follows the status field exactly as supplied; no inference
/// from timestamps. Every transaction lands in exactly one bucket and none
/// are dropped.
pub fn categorize(transactions: Vec<Transaction>) -> TransactionBuckets {
    let mut buckets = TransactionBuckets::default();
    for tx in transactions {
        match tx.status {
            TransactionStatus::Active => buckets.active.push(tx),
            TransactionStatus::Sold => buckets.sold.push(tx),
            TransactionStatus::Completed => buckets.completed.push(tx),
        }
    }
    buckets
}

/// Mean rating over a full review collection.
pub fn rating_summary(reviews: &[Review]) -> RatingSummary {
    rating::summarize(reviews.iter().map(|r| r.rating))
}

/// Split wire review records into engine reviews plus the orders that were
/// resolved for them, keyed by review id.
pub fn decompose_reviews(records: &[ReviewRecord]) -> (Vec<Review>, HashMap<i64, Transaction>) {
    let mut reviews = Vec::with_capacity(records.len());
    let mut resolved = HashMap::new();

    for record in records {
        reviews.push(Review {
            id: record.id,
            rating: record.rating,
            comment: record.comment.clone(),
            reviewer_name: record.reviewer.full_name.clone(),
            order_ref: record.order_id.or_else(|| record.order.as_ref().map(|o| o.id)),
            created_at: record.created_at,
            updated_at: record.updated_at,
        });
        if let Some(order) = &record.order {
            resolved.insert(
                record.id,
                Transaction::from_order(order, TransactionStatus::Completed),
            );
        }
    }

    (reviews, resolved)
}

/// Raw, already-fetched inputs for one aggregation call.
#[derive(Debug, Clone)]
pub struct AggregationInput {
    pub role: PartyRole,
    pub party: Option<Party>,
    pub transactions: Vec<Transaction>,
    /// Full review history when available, otherwise the bounded sample the
    /// upstream serves (pair it with `reported_summary` in that case).
    pub reviews: Vec<Review>,
    /// Orders resolved per review id; reviews absent here degrade to the
    /// unresolved link state.
    pub resolved_orders: HashMap<i64, Transaction>,
    /// Server-supplied aggregate, the source of truth when the review list
    /// is only a sample.
    pub reported_summary: Option<RatingSummary>,
}

impl AggregationInput {
    /// Input with no party and empty history, useful as a starting point.
    pub fn empty(role: PartyRole) -> Self {
        Self {
            role,
            party: None,
            transactions: Vec::new(),
            reviews: Vec::new(),
            resolved_orders: HashMap::new(),
            reported_summary: None,
        }
    }

    /// Decompose a buyer profile envelope. Purchases arrive pre-filtered to
    /// successful (`CLOSED`) orders.
    pub fn from_buyer_record(record: BuyerProfileRecord) -> Self {
        let (reviews, resolved_orders) = decompose_reviews(&record.reviews);
        Self {
            role: PartyRole::Buyer,
            party: record.buyer,
            transactions: record
                .successful_purchases
                .iter()
                .map(|order| Transaction::from_order(order, TransactionStatus::Completed))
                .collect(),
            reviews,
            resolved_orders,
            reported_summary: Some(RatingSummary {
                average: record.average_rating,
                total: record.total_reviews,
            }),
        }
    }

    /// Decompose a seller profile envelope. Listing collections arrive
    /// pre-partitioned by status; the categorizer re-derives the buckets
    /// from the merged list so the partition has a single owner.
    pub fn from_seller_record(record: SellerProfileRecord) -> Self {
        let (reviews, resolved_orders) = decompose_reviews(&record.reviews);
        let transactions = record
            .active_listings
            .iter()
            .map(|listing| Transaction::from_listing(listing, TransactionStatus::Active))
            .chain(
                record
                    .sold_listings
                    .iter()
                    .map(|listing| Transaction::from_listing(listing, TransactionStatus::Sold)),
            )
            .collect();
        Self {
            role: PartyRole::Seller,
            party: record.seller,
            transactions,
            reviews,
            resolved_orders,
            reported_summary: Some(RatingSummary {
                average: record.average_rating,
                total: record.total_reviews,
            }),
        }
    }
}

/// The aggregation engine.
#[derive(Debug, Clone)]
pub struct ProfileEngine {
    recent_limit: usize,
}

impl Default for ProfileEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_REVIEW_LIMIT)
    }
}

impl ProfileEngine {
    pub fn new(recent_limit: usize) -> Self {
        Self { recent_limit }
    }

    /// Aggregate one party's raw entities into a display-ready summary.
    ///
    /// Fails only when the party record is absent; missing transaction and
    /// review collections are empty inputs, not errors. The rating summary
    /// comes from the server-supplied aggregate when present (the review
    /// list may be a bounded sample), otherwise it is computed over the
    /// supplied reviews as the full history.
    pub fn aggregate(&self, input: AggregationInput) -> Result<ProfileSummary, ProfileError> {
        let AggregationInput {
            role,
            party,
            transactions,
            reviews,
            resolved_orders,
            reported_summary,
        } = input;

        let party = party.ok_or(ProfileError::PartyNotFound { role })?;

        let mut summary = reported_summary.unwrap_or_else(|| rating_summary(&reviews));
        let buckets = categorize(transactions);

        let recent: Vec<ReviewDisplay> = reviews
            .iter()
            .take(self.recent_limit)
            .map(|review| display_review(review, resolved_orders.get(&review.id)))
            .collect();

        // A bounded sample can never outnumber the full history.
        if (summary.total as usize) < recent.len() {
            summary.total = recent.len() as u32;
        }

        Ok(ProfileSummary {
            party,
            role,
            rating: summary.into(),
            counts: buckets.counts(),
            transactions: buckets,
            recent_reviews: recent,
        })
    }

    /// Display rows for a full review listing, unbounded.
    pub fn review_history(
        &self,
        reviews: &[Review],
        resolved_orders: &HashMap<i64, Transaction>,
    ) -> Vec<ReviewDisplay> {
        reviews
            .iter()
            .map(|review| display_review(review, resolved_orders.get(&review.id)))
            .collect()
    }
}

fn display_review(review: &Review, resolved: Option<&Transaction>) -> ReviewDisplay {
    let edited = match (review.created_at, review.updated_at) {
        (Some(created), Some(updated)) => updated != created,
        (None, Some(_)) => true,
        _ => false,
    };

    ReviewDisplay {
        id: review.id,
        rating: review.rating,
        stars: star_breakdown(review.rating),
        comment: review.comment.clone(),
        reviewer_name: review.reviewer_name.clone(),
        created_at: review.created_at,
        updated_at: review.updated_at,
        edited,
        order: link_order(review, resolved),
    }
}
