//! Lenient decoding of model output into `ParsedIngredient`s.
//!
//! Models are loose about shapes: quantities arrive as numbers or strings,
//! modifiers as a string or a list, and a batch as a bare array or wrapped
//! in an object. All of those are accepted.

use pantry_core::errors::ParserError;
use pantry_core::{ParsedIngredient, Quantity};
use pantry_units::UnitTable;
use serde::Deserialize;

use crate::patterns::{push_modifier, quantity};

#[derive(Debug, Deserialize)]
struct WireIngredient {
    #[serde(default)]
    quantity: Option<WireAmount>,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    modifiers: Option<WireModifiers>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireModifiers {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireBatch {
    List(Vec<WireIngredient>),
    Wrapped {
        #[serde(alias = "items", alias = "results")]
        ingredients: Vec<WireIngredient>,
    },
    Single(WireIngredient),
}

impl WireBatch {
    fn into_items(self) -> Vec<WireIngredient> {
        match self {
            Self::List(items) | Self::Wrapped { ingredients: items } => items,
            Self::Single(item) => vec![item],
        }
    }
}

/// Decode a response to a single-line prompt.
pub fn decode_single(response: &str, line: &str) -> Result<ParsedIngredient, ParserError> {
    let item = parse_wire(response)?
        .into_items()
        .into_iter()
        .next()
        .ok_or_else(|| ParserError::MalformedResponse {
            reason: "empty response".to_string(),
        })?;
    Ok(to_parsed(item, line))
}

/// Decode a response to a batch prompt. Items beyond `lines` are dropped;
/// a shorter result is returned as-is for the caller to complete.
pub fn decode_batch(response: &str, lines: &[String]) -> Result<Vec<ParsedIngredient>, ParserError> {
    let items = parse_wire(response)?.into_items();
    Ok(items
        .into_iter()
        .zip(lines)
        .map(|(item, line)| to_parsed(item, line))
        .collect())
}

fn parse_wire(response: &str) -> Result<WireBatch, ParserError> {
    let trimmed = response.trim();
    if let Ok(batch) = serde_json::from_str::<WireBatch>(trimmed) {
        return Ok(batch);
    }
    // Prose or code fences around the JSON.
    let start = trimmed.find(['[', '{']);
    let end = trimmed.rfind([']', '}']);
    let json = match (start, end) {
        (Some(s), Some(e)) if e > s => &trimmed[s..=e],
        _ => {
            return Err(ParserError::MalformedResponse {
                reason: format!("no JSON in response: {}", preview(trimmed)),
            })
        }
    };
    serde_json::from_str(json).map_err(|e| ParserError::MalformedResponse {
        reason: format!("{e}: {}", preview(json)),
    })
}

fn preview(text: &str) -> String {
    text.chars().take(120).collect()
}

fn to_parsed(item: WireIngredient, line: &str) -> ParsedIngredient {
    let mut modifiers = Vec::new();
    match item.modifiers {
        Some(WireModifiers::One(text)) => {
            for piece in text.split(',') {
                push_modifier(&mut modifiers, piece);
            }
        }
        Some(WireModifiers::Many(list)) => {
            for piece in &list {
                push_modifier(&mut modifiers, piece);
            }
        }
        None => {}
    }

    let unit = item
        .unit
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .map(|u| {
            UnitTable::standard()
                .canonical_name(&u)
                .map_or_else(|| u.to_lowercase(), str::to_string)
        });

    ParsedIngredient {
        quantity: item.quantity.and_then(to_quantity),
        unit,
        name: item
            .name
            .map(|n| n.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
            .unwrap_or_default(),
        modifiers,
        raw_text: line.to_string(),
    }
}

/// Models answer 0 for "to taste"; that is an absent amount, not zero.
fn to_quantity(amount: WireAmount) -> Option<Quantity> {
    let value = match amount {
        WireAmount::Number(x) if x.is_finite() && x > 0.0 => {
            Quantity::from_decimal_str(&format!("{x}"))
        }
        WireAmount::Number(_) => None,
        WireAmount::Text(text) => {
            let text = quantity::normalize_text(&text);
            quantity::leading_amount(&text).map(|(q, _)| q)
        }
    }?;
    (!value.is_zero()).then_some(value)
}
