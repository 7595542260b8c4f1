//! Exact conversion between units of the same kind, plus density-backed
//! volume/weight conversion for registered ingredients.

use pantry_core::errors::ConversionError;
use pantry_core::{Quantity, UnitKind};
use tracing::trace;

use crate::density::DensityTable;
use crate::table::{UnitDef, UnitTable};

/// Label used in errors for a line with no unit ("3 eggs").
const NO_UNIT: &str = "count";

/// Converts quantities between units. Stateless apart from its tables.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    units: &'static UnitTable,
    densities: DensityTable,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(DensityTable::standard().clone())
    }
}

impl UnitConverter {
    pub fn new(densities: DensityTable) -> Self {
        Self {
            units: UnitTable::standard(),
            densities,
        }
    }

    pub fn units(&self) -> &'static UnitTable {
        self.units
    }

    pub fn densities(&self) -> &DensityTable {
        &self.densities
    }

    /// Convert `quantity` from one unit to another of the same kind.
    ///
    /// Identical units always succeed, including unknown ones and the
    /// absent unit of a bare count. Count units only convert to themselves.
    pub fn convert(
        &self,
        quantity: &Quantity,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Quantity, ConversionError> {
        if same_unit(from, to) {
            return Ok(quantity.clone());
        }
        let (from_def, to_def) = match (self.resolve(from)?, self.resolve(to)?) {
            (Some(f), Some(t)) => (f, t),
            _ => return Err(incompatible(from, to)),
        };
        if from_def.name == to_def.name {
            return Ok(quantity.clone());
        }
        if from_def.kind != to_def.kind || from_def.kind == UnitKind::Count {
            return Err(incompatible(from, to));
        }
        rescale(quantity, from_def, to_def).ok_or_else(|| overflow(from, to))
    }

    /// Like `convert`, but may bridge volume and weight when `base` has a
    /// registered density.
    pub fn convert_ingredient(
        &self,
        quantity: &Quantity,
        from: Option<&str>,
        to: Option<&str>,
        base: &str,
    ) -> Result<Quantity, ConversionError> {
        match self.convert(quantity, from, to) {
            Err(ConversionError::Incompatible { .. }) => {}
            other => return other,
        }
        let (Some(from_def), Some(to_def)) = (self.resolve(from)?, self.resolve(to)?) else {
            return Err(incompatible(from, to));
        };
        let Some(grams_per_ml) = self.densities.grams_per_ml(base) else {
            return Err(incompatible(from, to));
        };
        // Fold the factors into one ratio first so only the final product
        // can overflow.
        let ratio = match (from_def.kind, to_def.kind) {
            (UnitKind::Volume, UnitKind::Weight) => from_def
                .factor()
                .checked_mul(&grams_per_ml)
                .and_then(|f| f.checked_div(&to_def.factor())),
            (UnitKind::Weight, UnitKind::Volume) => from_def
                .factor()
                .checked_div(&grams_per_ml)
                .and_then(|f| f.checked_div(&to_def.factor())),
            _ => return Err(incompatible(from, to)),
        };
        let converted = ratio.and_then(|r| quantity.checked_mul(&r));
        trace!(base, from = ?from, to = ?to, "density conversion");
        converted.ok_or_else(|| overflow(from, to))
    }

    /// Whether `convert_ingredient` would succeed for this pair.
    pub fn can_convert(&self, from: Option<&str>, to: Option<&str>, base: &str) -> bool {
        self.convert_ingredient(&Quantity::whole(1), from, to, base)
            .is_ok()
    }

    /// Kind of a stored unit; see `UnitTable::kind_of`.
    pub fn kind_of(&self, unit: Option<&str>) -> UnitKind {
        self.units.kind_of(unit)
    }

    fn resolve(&self, unit: Option<&str>) -> Result<Option<&'static UnitDef>, ConversionError> {
        match unit {
            None => Ok(None),
            Some(u) => self
                .units
                .get(u)
                .or_else(|| self.units.lookup(u))
                .map(Some)
                .ok_or_else(|| ConversionError::UnknownUnit {
                    unit: u.to_string(),
                }),
        }
    }
}

fn same_unit(from: Option<&str>, to: Option<&str>) -> bool {
    match (from, to) {
        (None, None) => true,
        (Some(a), Some(b)) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    }
}

fn rescale(quantity: &Quantity, from: &UnitDef, to: &UnitDef) -> Option<Quantity> {
    quantity.checked_mul(&from.factor().checked_div(&to.factor())?)
}

fn overflow(from: Option<&str>, to: Option<&str>) -> ConversionError {
    ConversionError::Overflow {
        from: from.unwrap_or(NO_UNIT).to_string(),
        to: to.unwrap_or(NO_UNIT).to_string(),
    }
}

fn incompatible(from: Option<&str>, to: Option<&str>) -> ConversionError {
    ConversionError::Incompatible {
        from: from.unwrap_or(NO_UNIT).to_string(),
        to: to.unwrap_or(NO_UNIT).to_string(),
    }
}
