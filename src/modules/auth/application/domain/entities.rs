use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Loyalty tier of a shopper. Drives the cart discount and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyStatus {
    Gold,
    Silver,
    Bronze,
    #[default]
    Simple,
}

impl LoyaltyStatus {
    /// Fraction of the cart total that gets knocked off.
    pub fn discount_rate(&self) -> f64 {
        match self {
            LoyaltyStatus::Gold => 0.75,
            LoyaltyStatus::Silver => 0.50,
            LoyaltyStatus::Bronze => 0.25,
            LoyaltyStatus::Simple => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyStatus::Gold => "gold",
            LoyaltyStatus::Silver => "silver",
            LoyaltyStatus::Bronze => "bronze",
            LoyaltyStatus::Simple => "simple",
        }
    }

    /// Anything we don't recognize is treated as "simple" (no discount)
    /// rather than rejected, matching the storage default.
    pub fn parse(value: &str) -> Self {
        match value {
            "gold" => LoyaltyStatus::Gold,
            "silver" => LoyaltyStatus::Silver,
            "bronze" => LoyaltyStatus::Bronze,
            _ => LoyaltyStatus::Simple,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i16,
    pub phone: String,
    pub image_path: Option<String>,
    pub status: LoyaltyStatus,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_rates_per_tier() {
        assert_eq!(LoyaltyStatus::Gold.discount_rate(), 0.75);
        assert_eq!(LoyaltyStatus::Silver.discount_rate(), 0.50);
        assert_eq!(LoyaltyStatus::Bronze.discount_rate(), 0.25);
        assert_eq!(LoyaltyStatus::Simple.discount_rate(), 0.0);
    }

    #[test]
    fn unrecognized_status_falls_back_to_simple() {
        assert_eq!(LoyaltyStatus::parse("platinum"), LoyaltyStatus::Simple);
        assert_eq!(LoyaltyStatus::parse(""), LoyaltyStatus::Simple);
        assert_eq!(LoyaltyStatus::parse("gold"), LoyaltyStatus::Gold);
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for status in [
            LoyaltyStatus::Gold,
            LoyaltyStatus::Silver,
            LoyaltyStatus::Bronze,
            LoyaltyStatus::Simple,
        ] {
            assert_eq!(LoyaltyStatus::parse(status.as_str()), status);
        }
    }
}
