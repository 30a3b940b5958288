use crate::models::WeightKg;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit attached to a shipment quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    #[default]
    Kg,
    Tonnes,
    /// Countable items (bags, sheets, pieces). Converted to weight through a
    /// product's unit weight when one is known.
    Units,
}

impl QuantityUnit {
    /// Unit named by the first word after the number; anything after that
    /// word is free text ("2 tonnes of bricks").
    fn from_suffix(suffix: &str) -> Self {
        let word = suffix
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_end_matches(|c: char| !c.is_alphanumeric());
        match word.to_lowercase().as_str() {
            "" | "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => QuantityUnit::Kg,
            "t" | "mt" | "ton" | "tons" | "tonne" | "tonnes" => QuantityUnit::Tonnes,
            _ => QuantityUnit::Units,
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityUnit::Kg => write!(f, "kg"),
            QuantityUnit::Tonnes => write!(f, "t"),
            QuantityUnit::Units => write!(f, "units"),
        }
    }
}

/// A shipment quantity parsed once at the request boundary.
///
/// `amount` is `None` when the input carried no digits at all, which is only
/// usable when a product lookup supplies the weight (the count defaults to 1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Quantity {
    pub amount: Option<f64>,
    pub unit: QuantityUnit,
}

impl Quantity {
    pub fn kg(amount: f64) -> Result<Self, String> {
        if !amount.is_finite() {
            return Err("Weight must be a finite number".to_string());
        }
        if amount < 0.0 {
            return Err("Weight cannot be negative".to_string());
        }
        Ok(Quantity {
            amount: Some(amount),
            unit: QuantityUnit::Kg,
        })
    }

    /// Parse a loosely formatted quantity such as `"500 units"`, `"1.2 t"`,
    /// `"750kg"` or `"1,200 bags"`. Only the first number in the text counts.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let text = raw.trim();
        let Some(mut start) = text.find(|c: char| c.is_ascii_digit()) else {
            return Ok(Quantity {
                amount: None,
                unit: QuantityUnit::from_suffix(text),
            });
        };
        // ".5 t" is half a tonne, but "No.5" is not a fraction
        if let Some(head) = text[..start].strip_suffix('.') {
            if !head.ends_with(|c: char| c.is_alphanumeric()) {
                start -= 1;
            }
        }

        let prefix = &text[..start];
        if prefix.trim_end().ends_with('-') {
            return Err(format!("Quantity cannot be negative: '{}'", raw));
        }

        let mut digits = String::from("0");
        let mut end = start;
        let mut seen_dot = false;
        let bytes = text.as_bytes();
        while end < bytes.len() {
            let b = bytes[end];
            let next_is_digit = bytes.get(end + 1).is_some_and(|n| n.is_ascii_digit());
            match b {
                b'0'..=b'9' => digits.push(b as char),
                // Thousands separator, only between digit groups
                b',' if !seen_dot && next_is_digit => {}
                b'.' if !seen_dot && next_is_digit => {
                    seen_dot = true;
                    digits.push('.');
                }
                _ => break,
            }
            end += 1;
        }

        let amount: f64 = digits
            .parse()
            .map_err(|_| format!("Invalid quantity: '{}'", raw))?;
        if !amount.is_finite() {
            return Err(format!("Quantity is too large: '{}'", raw));
        }

        Ok(Quantity {
            amount: Some(amount),
            unit: QuantityUnit::from_suffix(&text[end..]),
        })
    }

    /// Whole item count used with a product's unit weight: the integer part
    /// of the amount, or 1 when no amount was given.
    pub fn unit_count(&self) -> u64 {
        match self.amount {
            Some(amount) => amount.trunc() as u64,
            None => 1,
        }
    }

    /// Interpret the quantity as a weight. Unit counts without a product
    /// weight are taken as kilograms.
    pub fn to_weight_kg(&self) -> Result<WeightKg, String> {
        let amount = self
            .amount
            .ok_or_else(|| "Weight must contain a numeric quantity".to_string())?;
        match self.unit {
            QuantityUnit::Kg | QuantityUnit::Units => WeightKg::new(amount),
            QuantityUnit::Tonnes => WeightKg::from_tonnes(amount),
        }
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse(s)
    }
}

/// Weight as it arrives over the wire: a bare number of kilograms or a
/// free-form string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WeightInput {
    Kilograms(f64),
    Text(String),
}

impl WeightInput {
    pub fn to_quantity(&self) -> Result<Quantity, String> {
        match self {
            WeightInput::Kilograms(kg) => Quantity::kg(*kg),
            WeightInput::Text(text) => Quantity::parse(text),
        }
    }
}

impl From<f64> for WeightInput {
    fn from(kg: f64) -> Self {
        WeightInput::Kilograms(kg)
    }
}

impl From<&str> for WeightInput {
    fn from(text: &str) -> Self {
        WeightInput::Text(text.to_string())
    }
}
