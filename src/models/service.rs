use serde::Serialize;

pub const QUOTE_REQUIRED_LABEL: &str = "Quote on request";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitPrice {
    Fixed(u32),
    QuoteRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub display_name: &'static str,
    pub unit_price: UnitPrice,
}

impl Service {
    pub fn price_label(&self) -> String {
        match self.unit_price {
            UnitPrice::Fixed(amount) => format_brl(u64::from(amount)),
            UnitPrice::QuoteRequired => QUOTE_REQUIRED_LABEL.to_string(),
        }
    }

    pub fn total_for(&self, guests: u32) -> Total {
        match self.unit_price {
            UnitPrice::Fixed(amount) => Total::Amount(u64::from(amount) * u64::from(guests)),
            UnitPrice::QuoteRequired => Total::QuoteRequired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Total {
    Amount(u64),
    QuoteRequired,
    NoServiceSelected,
}

impl Total {
    pub fn amount(&self) -> Option<u64> {
        match self {
            Total::Amount(amount) => Some(*amount),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Total::Amount(amount) => format_brl(*amount),
            Total::QuoteRequired => QUOTE_REQUIRED_LABEL.to_string(),
            Total::NoServiceSelected => "Select a service".to_string(),
        }
    }
}

pub fn format_brl(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {grouped}")
}
