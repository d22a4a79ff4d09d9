use crate::auth::application::domain::entities::LoyaltyStatus;

/// Line total in catalog price units.
pub fn line_total(price: i64, quantity: i32) -> i64 {
    price * quantity as i64
}

/// Cart total after the loyalty discount: sum of line totals scaled by
/// (1 - discount). Fractional results are real (a 75% discount on 250
/// leaves 62.5), so the total is an f64 even though prices are integers.
pub fn total_price(lines: &[(i64, i32)], status: LoyaltyStatus) -> f64 {
    let raw: i64 = lines.iter().map(|(price, qty)| line_total(*price, *qty)).sum();
    raw as f64 * (1.0 - status.discount_rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies() {
        assert_eq!(line_total(100, 2), 200);
        assert_eq!(line_total(50, 1), 50);
        assert_eq!(line_total(0, 10), 0);
    }

    #[test]
    fn gold_member_pays_a_quarter() {
        // (100*2 + 50*1) * (1 - 0.75) = 250 * 0.25 = 62.5
        let lines = [(100, 2), (50, 1)];
        assert_eq!(total_price(&lines, LoyaltyStatus::Gold), 62.5);
    }

    #[test]
    fn silver_and_bronze_scale_accordingly() {
        let lines = [(100, 2), (50, 1)];
        assert_eq!(total_price(&lines, LoyaltyStatus::Silver), 125.0);
        assert_eq!(total_price(&lines, LoyaltyStatus::Bronze), 187.5);
    }

    #[test]
    fn simple_status_pays_full_price() {
        let lines = [(100, 2), (50, 1)];
        assert_eq!(total_price(&lines, LoyaltyStatus::Simple), 250.0);
    }

    #[test]
    fn unrecognized_status_means_no_discount() {
        let lines = [(100, 2), (50, 1)];
        assert_eq!(total_price(&lines, LoyaltyStatus::parse("platinum")), 250.0);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(total_price(&[], LoyaltyStatus::Gold), 0.0);
    }
}
