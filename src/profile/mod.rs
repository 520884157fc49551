//! Profile aggregation: categorized transactions, linked reviews and the
//! display-ready [`ProfileSummary`].

mod linker;
mod model;
mod service;

pub use linker::link_order;
pub use model::{
    BucketCounts, ListingSummary, OrderLink, PartyRole, ProfileSummary, RatingView, Review,
    ReviewDisplay, ReviewHistory, Transaction, TransactionBuckets, TransactionStatus,
};
pub use service::{
    categorize, decompose_reviews, rating_summary, AggregationInput, ProfileEngine, ProfileError,
    DEFAULT_RECENT_REVIEW_LIMIT,
};
