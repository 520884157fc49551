//! Wire models for records fetched from the upstream marketplace API.
//!
//! These mirror the JSON the marketplace serves for profile views. Fields
//! default aggressively: a missing collection is an empty one, a missing
//! amount coerces to zero at the point of use, and a missing reviewer
//! renders as an empty display name. Only the party record itself is
//! load-bearing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::AmountValue;

/// Generic API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Buyer or seller identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Listing record, either standalone (seller profile buckets) or embedded
/// in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: i64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub price: Option<AmountValue>,
    #[serde(default, rename = "batteryCapacityKWh")]
    pub battery_capacity_kwh: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Order (purchase) record. `listing` is absent when the listing was
/// deleted after the sale, leaving a dangling reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: i64,
    #[serde(default)]
    pub amount: Option<AmountValue>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub listing: Option<ListingRecord>,
}

/// Reviewer identity as embedded in reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: String,
}

/// Review record.
///
/// `order_id` is the bare reference set whenever the review was issued for
/// an order; `order` is only present when the upstream managed to resolve
/// that reference. The two travel separately so a broken join is still
/// identifiable downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer: Reviewer,
    #[serde(default)]
    pub order: Option<OrderRecord>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Buyer profile envelope as served by the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProfileRecord {
    #[serde(default)]
    pub buyer: Option<Party>,
    #[serde(default)]
    pub successful_purchases: Vec<OrderRecord>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

/// Seller profile envelope as served by the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfileRecord {
    #[serde(default)]
    pub seller: Option<Party>,
    #[serde(default)]
    pub active_listings: Vec<ListingRecord>,
    #[serde(default)]
    pub sold_listings: Vec<ListingRecord>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_profile_deserializes() {
        let json = r#"{
            "buyer": {"id": 7, "fullName": "Tran Minh", "email": "minh@example.com", "phone": "0901234567"},
            "successfulPurchases": [
                {"id": 31, "amount": 450000000, "status": "CLOSED", "closedAt": "2025-05-02T09:30:00Z",
                 "listing": {"id": 12, "brand": "VinFast", "model": "VF 8", "year": 2022, "price": 450000000, "batteryCapacityKWh": 82}}
            ],
            "averageRating": 4.5,
            "totalReviews": 12,
            "reviews": [
                {"id": 3, "rating": 5, "comment": "Thanh toan nhanh", "reviewer": {"id": 2, "fullName": "Le Hoa"},
                 "orderId": 31, "order": {"id": 31, "amount": 450000000}, "createdAt": "2025-05-03T10:00:00Z"}
            ]
        }"#;

        let record: BuyerProfileRecord = serde_json::from_str(json).unwrap();
        let buyer = record.buyer.unwrap();
        assert_eq!(buyer.id, 7);
        assert_eq!(buyer.full_name, "Tran Minh");
        assert_eq!(record.successful_purchases.len(), 1);
        assert_eq!(record.total_reviews, 12);
        assert_eq!(record.reviews[0].order_id, Some(31));
        assert!(record.reviews[0].order.is_some());
    }

    #[test]
    fn test_seller_profile_missing_collections_default_empty() {
        let json = r#"{"seller": {"id": 9, "fullName": "Pham Duc", "email": "duc@example.com"}}"#;
        let record: SellerProfileRecord = serde_json::from_str(json).unwrap();
        assert!(record.active_listings.is_empty());
        assert!(record.sold_listings.is_empty());
        assert!(record.reviews.is_empty());
        assert_eq!(record.total_reviews, 0);
        assert_eq!(record.average_rating, 0.0);
    }

    #[test]
    fn test_review_with_bare_reference_only() {
        let json = r#"{"id": 5, "rating": 4, "orderId": 99}"#;
        let review: ReviewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(review.order_id, Some(99));
        assert!(review.order.is_none());
        assert_eq!(review.reviewer.full_name, "");
    }

    #[test]
    fn test_order_amount_tolerates_string_and_null() {
        let json = r#"{"id": 1, "amount": "1.200.000", "status": "CLOSED"}"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(crate::currency::coerce(order.amount.as_ref()), 1_200_000);

        let json = r#"{"id": 2, "amount": null}"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert!(order.amount.is_none());
        assert_eq!(crate::currency::coerce(order.amount.as_ref()), 0);
    }
}
