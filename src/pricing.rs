//! Display strings for consultant rates stored in pence.

const CONTACT_FOR_RATES: &str = "Contact for rates";

/// Formats an amount in pence as whole pounds, e.g. `150000` -> `£1,500`.
pub fn format_price(pence: i64) -> String {
    let pounds = (pence as f64 / 100.0).round() as i64;
    let digits = pounds.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if pounds < 0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

pub fn format_hourly_rate(pence: i64) -> String {
    format!("{}/hr", format_price(pence))
}

pub fn format_project_range(min_pence: i64, max_pence: Option<i64>) -> String {
    match max_pence.filter(|max| *max != 0) {
        Some(max) => format!("{} - {}", format_price(min_pence), format_price(max)),
        None => format!("From {}", format_price(min_pence)),
    }
}

/// Rate fields that drive [`pricing_display`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateCard {
    pub hourly_rate: Option<i32>,
    pub project_rate_min: Option<i32>,
    pub project_rate_max: Option<i32>,
    pub show_rates: bool,
}

/// Summarises the rates a consultant chose to publish.
pub fn pricing_display(rates: &RateCard) -> String {
    if !rates.show_rates {
        return CONTACT_FOR_RATES.to_string();
    }

    let mut parts = Vec::new();

    if let Some(hourly) = rates.hourly_rate.filter(|r| *r != 0) {
        parts.push(format_hourly_rate(i64::from(hourly)));
    }

    if let Some(min) = rates.project_rate_min.filter(|r| *r != 0) {
        parts.push(format!(
            "Projects {}",
            format_project_range(i64::from(min), rates.project_rate_max.map(i64::from))
        ));
    }

    if parts.is_empty() {
        CONTACT_FOR_RATES.to_string()
    } else {
        parts.join(" • ")
    }
}
