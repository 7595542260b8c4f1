use std::fmt;
use std::str::FromStr;

use fraction::Fraction;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ConversionError;

/// Exact, non-negative rational amount of an ingredient.
///
/// Backed by `fraction::Fraction` so that sums such as `1/3 + 2/3` stay exact
/// until the single round-up at the end of aggregation. A `Quantity` is never
/// infinite or NaN: every constructor rejects a zero denominator.
///
/// Arithmetic is checked. Numerator and denominator are `u64`, so a sum or
/// product of very large amounts returns `None` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(Fraction);

impl Quantity {
    /// Create `numer / denom`. Returns `None` for a zero denominator.
    pub fn new(numer: u64, denom: u64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        Some(Self(Fraction::new(numer, denom)))
    }

    /// A whole number of units.
    pub fn whole(value: u64) -> Self {
        Self(Fraction::new(value, 1u64))
    }

    pub fn zero() -> Self {
        Self::whole(0)
    }

    /// Reduced numerator and denominator.
    pub fn parts(&self) -> (u64, u64) {
        let numer = self.0.numer().copied().unwrap_or(0);
        let denom = self.0.denom().copied().unwrap_or(1);
        (numer, denom)
    }

    pub fn is_zero(&self) -> bool {
        self.parts().0 == 0
    }

    /// Lossy conversion for display and metrics only.
    pub fn to_f64(&self) -> f64 {
        let (n, d) = self.parts();
        n as f64 / d as f64
    }

    /// Build from a wide ratio, reducing first. `None` when the reduced
    /// parts do not fit in `u64` or the denominator is zero.
    fn from_wide(numer: u128, denom: u128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        let numer = u64::try_from(numer / g).ok()?;
        let denom = u64::try_from(denom / g).ok()?;
        Self::new(numer, denom)
    }

    fn wide_parts(&self) -> (u128, u128) {
        let (n, d) = self.parts();
        (u128::from(n), u128::from(d))
    }

    /// Exact sum, or `None` on overflow.
    pub fn checked_add(&self, rhs: &Quantity) -> Option<Quantity> {
        let (a, b) = self.wide_parts();
        let (c, d) = rhs.wide_parts();
        let numer = a.checked_mul(d)?.checked_add(c.checked_mul(b)?)?;
        Self::from_wide(numer, b.checked_mul(d)?)
    }

    /// Exact product, or `None` on overflow.
    pub fn checked_mul(&self, rhs: &Quantity) -> Option<Quantity> {
        let (a, b) = self.wide_parts();
        let (c, d) = rhs.wide_parts();
        Self::from_wide(a.checked_mul(c)?, b.checked_mul(d)?)
    }

    /// Divide, returning `None` when `rhs` is zero or the result overflows.
    pub fn checked_div(&self, rhs: &Quantity) -> Option<Quantity> {
        if rhs.is_zero() {
            return None;
        }
        let (a, b) = self.wide_parts();
        let (c, d) = rhs.wide_parts();
        Self::from_wide(a.checked_mul(d)?, b.checked_mul(c)?)
    }

    /// Sum of all items, or `None` if any partial sum overflows.
    pub fn checked_sum<'a, I>(items: I) -> Option<Quantity>
    where
        I: IntoIterator<Item = &'a Quantity>,
    {
        items
            .into_iter()
            .try_fold(Quantity::zero(), |acc, q| acc.checked_add(q))
    }

    /// Round up to the next multiple of `step`. A zero step leaves the value unchanged.
    ///
    /// Values already on the grid are returned as-is, so rounding is idempotent.
    /// `None` when the rounded value does not fit.
    pub fn ceil_to(&self, step: &Quantity) -> Option<Quantity> {
        let (sn, sd) = step.wide_parts();
        if sn == 0 {
            return Some(self.clone());
        }
        let (n, d) = self.wide_parts();
        // self / step = (n * sd) / (d * sn)
        let steps = n.checked_mul(sd)?.div_ceil(d.checked_mul(sn)?);
        Self::from_wide(steps.checked_mul(sn)?, sd)
    }

    /// Parse a plain decimal such as `1.25` or `.5` exactly.
    pub fn from_decimal_str(input: &str) -> Option<Self> {
        let s = input.trim();
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
            || frac_part.len() > 12
        {
            return None;
        }
        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        if frac_part.is_empty() {
            return Some(Self::whole(whole));
        }
        let denom = 10u64.checked_pow(frac_part.len() as u32)?;
        let frac: u64 = frac_part.parse().ok()?;
        let numer = whole.checked_mul(denom)?.checked_add(frac)?;
        Self::new(numer, denom)
    }

    /// Compact form used for serialization: `3`, `3/4`, `7/2`.
    pub fn to_ratio_string(&self) -> String {
        let (n, d) = self.parts();
        if d == 1 {
            n.to_string()
        } else {
            format!("{n}/{d}")
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::whole(value)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Mixed-number display: `2`, `3/4`, `1 1/2`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, d) = self.parts();
        let whole = n / d;
        let rem = n % d;
        match (whole, rem) {
            (w, 0) => write!(f, "{w}"),
            (0, r) => write!(f, "{r}/{d}"),
            (w, r) => write!(f, "{w} {r}/{d}"),
        }
    }
}

/// Accepts `3`, `1.5`, `3/4`, and mixed numbers `1 1/2`.
impl FromStr for Quantity {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConversionError::InvalidQuantity {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut total = Quantity::zero();
        for part in trimmed.split_whitespace() {
            let value = match part.split_once('/') {
                Some((n, d)) => {
                    let n: u64 = n.trim().parse().map_err(|_| invalid())?;
                    let d: u64 = d.trim().parse().map_err(|_| invalid())?;
                    Quantity::new(n, d).ok_or_else(invalid)?
                }
                None => Quantity::from_decimal_str(part).ok_or_else(invalid)?,
            };
            total = total.checked_add(&value).ok_or_else(invalid)?;
        }
        Ok(total)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_ratio_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(u64),
            Float(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(n) => Ok(Quantity::whole(n)),
            Repr::Float(x) => {
                if !x.is_finite() || x < 0.0 {
                    return Err(serde::de::Error::custom(format!(
                        "quantity must be a finite non-negative number, got {x}"
                    )));
                }
                Quantity::from_decimal_str(&x.to_string())
                    .ok_or_else(|| serde::de::Error::custom(format!("unrepresentable quantity {x}")))
            }
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u64, d: u64) -> Quantity {
        Quantity::new(n, d).unwrap()
    }

    #[test]
    fn zero_denominator_rejected() {
        assert!(Quantity::new(1, 0).is_none());
    }

    #[test]
    fn ceil_to_quarter() {
        assert_eq!(q(1, 3).ceil_to(&q(1, 4)), Some(q(1, 2)));
        assert_eq!(q(3, 1).ceil_to(&q(1, 4)), Some(q(3, 1)));
        assert_eq!(q(13, 4).ceil_to(&q(1, 4)), Some(q(13, 4)));
        assert_eq!(q(33, 17).ceil_to(&q(1, 4)), Some(q(2, 1)));
    }

    #[test]
    fn ceil_to_zero_step_is_identity() {
        assert_eq!(q(1, 3).ceil_to(&Quantity::zero()), Some(q(1, 3)));
    }

    #[test]
    fn ceil_to_reports_overflow() {
        let huge = Quantity::new(u64::MAX - 1, 3).unwrap();
        assert_eq!(huge.ceil_to(&q(1, 1)), Some(q(6_148_914_691_236_517_205, 1)));
        assert_eq!(Quantity::whole(u64::MAX).ceil_to(&q(2, 1)), None);
    }

    #[test]
    fn checked_arithmetic_stays_exact() {
        assert_eq!(q(1, 3).checked_add(&q(2, 3)), Some(q(1, 1)));
        assert_eq!(q(3, 4).checked_mul(&q(2, 3)), Some(q(1, 2)));
        assert_eq!(q(1, 2).checked_div(&q(1, 4)), Some(q(2, 1)));
        assert_eq!(Quantity::checked_sum(&[q(1, 4), q(1, 4), q(1, 2)]), Some(q(1, 1)));
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Quantity::whole(u64::MAX);
        assert_eq!(max.checked_add(&q(1, 1)), None);
        assert_eq!(max.checked_mul(&q(2, 1)), None);
        assert_eq!(max.checked_div(&q(1, 2)), None);
        assert_eq!(Quantity::checked_sum(&[max.clone(), max]), None);
        // Large parts that reduce back into range are fine.
        assert_eq!(q(u64::MAX, 2).checked_mul(&q(2, 1)), Some(Quantity::whole(u64::MAX)));
    }

    #[test]
    fn oversized_mixed_number_is_rejected() {
        let text = format!("{} 1/2", u64::MAX);
        assert!(text.parse::<Quantity>().is_err());
    }

    #[test]
    fn display_mixed_numbers() {
        assert_eq!(q(3, 2).to_string(), "1 1/2");
        assert_eq!(q(3, 4).to_string(), "3/4");
        assert_eq!(q(4, 2).to_string(), "2");
        assert_eq!(Quantity::zero().to_string(), "0");
    }

    #[test]
    fn parses_mixed_and_decimal() {
        assert_eq!("1 1/2".parse::<Quantity>().unwrap(), q(3, 2));
        assert_eq!("1.25".parse::<Quantity>().unwrap(), q(5, 4));
        assert_eq!(".5".parse::<Quantity>().unwrap(), q(1, 2));
        assert!("1/0".parse::<Quantity>().is_err());
        assert!("abc".parse::<Quantity>().is_err());
    }

    #[test]
    fn serde_roundtrip_uses_ratio_string() {
        let json = serde_json::to_string(&q(7, 2)).unwrap();
        assert_eq!(json, "\"7/2\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q(7, 2));
        let from_float: Quantity = serde_json::from_str("0.25").unwrap();
        assert_eq!(from_float, q(1, 4));
    }
}
