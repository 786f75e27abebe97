//! Shared pricing arithmetic for subscription and discount displays

/// Amount saved per year by paying yearly instead of monthly
///
/// Never negative: a yearly price above 12x monthly reads as zero savings.
pub fn yearly_savings(monthly_price: f64, yearly_price: f64) -> f64 {
    (monthly_price * 12.0 - yearly_price).max(0.0)
}

/// Discount percentage of `discounted` relative to `original`, rounded
///
/// Returns 0 for free/invalid originals and for markups.
pub fn discount_percent(original: f64, discounted: f64) -> u32 {
    if original <= 0.0 || discounted >= original {
        return 0;
    }
    (((original - discounted) / original) * 100.0).round() as u32
}

/// Format an amount with its currency code, two decimals
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency} {amount:.2}")
}
