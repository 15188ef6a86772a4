//! Price formatting for listing cards and map markers.

use itertools::Itertools;

/// `1250000` -> `"$1,250,000"`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string().chars().collect::<Vec<_>>();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .join(",");
    format!("${grouped}")
}

/// Short form for map markers: `"$1.3M"`, `"$850K"`, `"$900"`.
pub fn format_price_compact(price: u64) -> String {
    let (value, suffix) = match price {
        1_000_000.. => (price as f64 / 1_000_000.0, "M"),
        1_000.. => (price as f64 / 1_000.0, "K"),
        _ => return format!("${price}"),
    };
    let formatted = format!("{value:.1}");
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("${formatted}{suffix}")
}
