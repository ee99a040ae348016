/// Currency symbol prefixed to every price.
const CURRENCY_SYMBOL: &str = "$";

/// Formats a price with two decimal places, e.g. `$109.95`.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price:.2}")
}

/// Formats an average rating rounded to one decimal place, e.g. `3.9`.
pub fn format_rating(rate: f64) -> String {
    format!("{rate:.1}")
}

/// Formats a rating together with the number of ratings it is based on, as
/// shown in the product details, e.g. `3.9 (120)`.
pub fn format_rating_summary(rate: f64, count: u64) -> String {
    format!("{} ({count})", format_rating(rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(7.0), "$7.00");
    }

    #[test]
    fn ratings_have_one_decimal() {
        assert_eq!(format_rating(4.76), "4.8");
        assert_eq!(format_rating(0.0), "0.0");
        assert_eq!(format_rating_summary(3.9, 120), "3.9 (120)");
    }
}
