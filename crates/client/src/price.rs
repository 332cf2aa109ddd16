//! Display-price formatting for the cosmetic currency toggle.

use skynova_core::catalog::Currency;

/// Format a USD demo price in the selected display currency.
///
/// Conversion uses the fixed demo rate from [`Currency::rate`]; this is
/// presentation only and never feeds back into filtering, which always
/// runs against the stored USD values.
pub fn format_price(usd: f64, currency: Currency) -> String {
    format!("{}{:.2}", currency.symbol(), usd * currency.rate())
}
