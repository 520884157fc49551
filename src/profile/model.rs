//! Data types produced and consumed by the profile engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency;
use crate::models::{ListingRecord, OrderRecord, Party};
use crate::rating::{RatingSummary, StarBreakdown};

/// Which side of the marketplace a profile describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Buyer,
    Seller,
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyRole::Buyer => f.write_str("buyer"),
            PartyRole::Seller => f.write_str("seller"),
        }
    }
}

/// Transaction status classification, exactly as supplied by the
/// marketplace. Listings are `ACTIVE` or `SOLD`; orders that went through
/// are `CLOSED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Active,
    Sold,
    Completed,
}

impl TransactionStatus {
    /// Map an upstream status string to its classification.
    pub fn classify(status: &str) -> Option<Self> {
        if status.eq_ignore_ascii_case("active") {
            Some(TransactionStatus::Active)
        } else if status.eq_ignore_ascii_case("sold") {
            Some(TransactionStatus::Sold)
        } else if status.eq_ignore_ascii_case("closed") || status.eq_ignore_ascii_case("completed")
        {
            Some(TransactionStatus::Completed)
        } else {
            None
        }
    }
}

/// Compact listing line shown in link outcomes and bucket entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
}

impl ListingSummary {
    /// Single-line title, e.g. `"VinFast VF 8 2022"`.
    pub fn title(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", self.brand, self.model, year),
            None => format!("{} {}", self.brand, self.model),
        }
    }
}

impl From<&ListingRecord> for ListingSummary {
    fn from(record: &ListingRecord) -> Self {
        Self {
            brand: record.brand.clone(),
            model: record.model.clone(),
            year: record.year,
        }
    }
}

/// A party's transaction as the engine sees it: one row of purchase or
/// listing history with its amount already coerced to whole-unit VND.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: i64,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Absent when the listing reference is dangling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingSummary>,
}

impl Transaction {
    /// Build from an order record. `fallback` covers records whose status
    /// field was stripped by the upstream serializer (purchase buckets
    /// arrive pre-filtered to `CLOSED`).
    pub fn from_order(record: &OrderRecord, fallback: TransactionStatus) -> Self {
        Self {
            id: record.id,
            amount: currency::coerce(record.amount.as_ref()),
            status: record
                .status
                .as_deref()
                .and_then(TransactionStatus::classify)
                .unwrap_or(fallback),
            closed_at: record.closed_at,
            listing: record.listing.as_ref().map(ListingSummary::from),
        }
    }

    /// Build from a standalone listing record (seller history). The listing
    /// is its own subject, so the summary is always present and the amount
    /// is the asking price.
    pub fn from_listing(record: &ListingRecord, fallback: TransactionStatus) -> Self {
        Self {
            id: record.id,
            amount: currency::coerce(record.price.as_ref()),
            status: record
                .status
                .as_deref()
                .and_then(TransactionStatus::classify)
                .unwrap_or(fallback),
            closed_at: None,
            listing: Some(ListingSummary::from(record)),
        }
    }
}

/// Review as the engine consumes it, decomposed from the wire record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: f64,
    pub comment: Option<String>,
    pub reviewer_name: String,
    /// Bare reference to the order this review was issued for.
    pub order_ref: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Linkage between a review and the order it was issued for.
///
/// `Unresolved` and `None` are distinct on purpose: a dangling-but-known
/// reference renders as a disabled placeholder, a review with no purchase
/// behind it renders no order section at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrderLink {
    /// Reference resolved to a live order.
    Resolved {
        order_id: i64,
        /// Formatted VND amount, ready for display.
        amount: String,
        /// Absent when the order's listing reference is itself dangling.
        #[serde(skip_serializing_if = "Option::is_none")]
        listing: Option<ListingSummary>,
    },
    /// Reference present but the order could not be resolved.
    Unresolved { order_id: i64 },
    /// The review was not issued for any order.
    None,
}

impl OrderLink {
    pub fn is_resolved(&self) -> bool {
        matches!(self, OrderLink::Resolved { .. })
    }
}

/// A review with its star decomposition and link outcome, ready for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDisplay {
    pub id: i64,
    pub rating: f64,
    pub stars: StarBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub reviewer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set when the review was edited after creation.
    pub edited: bool,
    pub order: OrderLink,
}

/// Partitioned transaction history. Every transaction lands in exactly one
/// bucket; the presentation layer picks which bucket to show for the
/// party's role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionBuckets {
    pub active: Vec<Transaction>,
    pub sold: Vec<Transaction>,
    pub completed: Vec<Transaction>,
}

impl TransactionBuckets {
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            active: self.active.len(),
            sold: self.sold.len(),
            completed: self.completed.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.sold.len() + self.completed.len()
    }
}

/// Bucket sizes, precomputed so tab headers never re-count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub active: usize,
    pub sold: usize,
    pub completed: usize,
}

/// Rating summary in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingView {
    pub average: f64,
    /// One-decimal display form of the average.
    pub display: String,
    pub stars: StarBreakdown,
    pub total_reviews: u32,
}

impl From<RatingSummary> for RatingView {
    fn from(summary: RatingSummary) -> Self {
        Self {
            average: summary.average,
            display: summary.display_average(),
            stars: summary.stars(),
            total_reviews: summary.total,
        }
    }
}

/// The aggregate root: one party's display-ready profile. Built fresh per
/// aggregation call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub party: Party,
    pub role: PartyRole,
    pub rating: RatingView,
    pub counts: BucketCounts,
    pub transactions: TransactionBuckets,
    /// Bounded sample of the party's most recent reviews.
    pub recent_reviews: Vec<ReviewDisplay>,
}

/// A party's full review history with its computed rating summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewHistory {
    pub rating: RatingView,
    pub reviews: Vec<ReviewDisplay>,
}
