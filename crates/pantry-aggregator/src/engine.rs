//! Aggregator: owns the components of a generation and runs the pipeline.

use pantry_classifier::CategoryClassifier;
use pantry_core::config::{DisplayUnitPolicy, PantryConfig};
use pantry_core::errors::PantryResult;
use pantry_core::traits::IIngredientParser;
use pantry_core::{ParsedRecipe, RecipeLines};
use pantry_normalizer::Normalizer;
use pantry_units::UnitConverter;
use tracing::debug;

use crate::pipeline::{self, PipelineContext, RoundingPolicy};
use crate::shopping_list::ShoppingList;

/// Builds shopping lists from parsed recipes.
///
/// All behavior comes from the `PantryConfig` given at construction. A
/// generation holds no state between calls, so one aggregator can serve
/// any number of requests.
#[derive(Debug, Clone)]
pub struct Aggregator {
    normalizer: Normalizer,
    converter: UnitConverter,
    classifier: CategoryClassifier,
    rounding: RoundingPolicy,
    display_unit: DisplayUnitPolicy,
}

impl Aggregator {
    /// Validate `config` and build the components it describes.
    pub fn new(config: &PantryConfig) -> PantryResult<Self> {
        config.validate()?;
        let aggregator = Self {
            normalizer: Normalizer::from_config(&config.normalizer),
            converter: UnitConverter::default(),
            classifier: CategoryClassifier::from_config(&config.categories),
            rounding: RoundingPolicy::from_config(&config.rounding)?,
            display_unit: config.aggregator.display_unit,
        };
        debug!(
            rules = aggregator.normalizer.policy().rule_count(),
            display_unit = ?aggregator.display_unit,
            "Aggregator ready"
        );
        Ok(aggregator)
    }

    /// Replace the unit converter, e.g. to register extra densities.
    pub fn with_converter(mut self, converter: UnitConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    /// Aggregate already-parsed recipes.
    pub fn generate(&self, recipes: &[ParsedRecipe]) -> ShoppingList {
        let ctx = PipelineContext {
            normalizer: &self.normalizer,
            converter: &self.converter,
            classifier: &self.classifier,
            rounding: &self.rounding,
            display_unit: self.display_unit,
        };
        pipeline::run_pipeline(recipes, &ctx)
    }

    /// Parse raw recipe lines with `parser`, then aggregate.
    pub fn generate_from_lines(
        &self,
        parser: &dyn IIngredientParser,
        recipes: &[RecipeLines],
    ) -> ShoppingList {
        let parsed = pantry_parser::parse_recipes(parser, recipes);
        self.generate(&parsed)
    }
}
