//! Stock-level thresholds for display.

/// Fewer days than this left counts as running low
pub const LOW_DAYS_THRESHOLD: f64 = 3.0;

/// Quantities at or below this (but above zero) count as running low
pub const LOW_QUANTITY_THRESHOLD: u32 = 1;

/// Level names double as CSS class suffixes (`level-low`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Ok,
    Low,
    Empty,
    Unknown,
}

impl StockLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Ok => "ok",
            StockLevel::Low => "low",
            StockLevel::Empty => "empty",
            StockLevel::Unknown => "unknown",
        }
    }
}

pub fn quantity_level(quantity: u32) -> StockLevel {
    match quantity {
        0 => StockLevel::Empty,
        q if q <= LOW_QUANTITY_THRESHOLD => StockLevel::Low,
        _ => StockLevel::Ok,
    }
}

pub fn days_level(days_left: Option<f64>) -> StockLevel {
    match days_left {
        None => StockLevel::Unknown,
        Some(d) if d.is_nan() => StockLevel::Unknown,
        Some(d) if d <= 0.0 => StockLevel::Empty,
        Some(d) if d < LOW_DAYS_THRESHOLD => StockLevel::Low,
        Some(_) => StockLevel::Ok,
    }
}

/// Text shown under an item for its estimate
pub fn days_left_label(days_left: Option<f64>) -> String {
    match days_left {
        Some(d) if d.is_finite() => format!("あと{d:.1}日"),
        _ => "残日数未計算".to_string(),
    }
}
