//! Estimation engine: validate → function points → buffers → dev-weeks → options → recommendation.

use rayon::prelude::*;

use estimator_core::config::EstimatorConfig;
use estimator_core::errors::{ConfigError, EstimationResult};
use estimator_core::models::{ComputedEstimate, Estimate, FeatureLibraryEntry, RequirementsInput};
use estimator_core::traits::FeatureSource;
use estimator_core::validation::validate_requirements;

use crate::buffers;
use crate::catalog::FeatureCatalog;
use crate::function_points;
use crate::options;

/// Turns a requirements record and a feature library snapshot into an estimate.
///
/// Holds only the immutable configuration, so one engine can serve any number
/// of concurrent estimates.
#[derive(Debug, Clone, Default)]
pub struct EstimationEngine {
    config: EstimatorConfig,
}

impl EstimationEngine {
    /// Create an engine, rejecting an invalid configuration up front.
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        EstimatorConfig::validate(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate against a library snapshot given as plain entries.
    pub fn estimate(
        &self,
        input: &RequirementsInput,
        library: &[FeatureLibraryEntry],
    ) -> EstimationResult<Estimate> {
        validate_requirements(input)?;
        let catalog = FeatureCatalog::from_entries(library.iter().cloned());
        Ok(self.compute(input, &catalog))
    }

    /// Estimate against a prebuilt catalog.
    pub fn estimate_with_catalog(
        &self,
        input: &RequirementsInput,
        catalog: &FeatureCatalog,
    ) -> EstimationResult<Estimate> {
        validate_requirements(input)?;
        Ok(self.compute(input, catalog))
    }

    /// Read the library once from `source`, then estimate.
    pub fn estimate_from_source(
        &self,
        input: &RequirementsInput,
        source: &dyn FeatureSource,
    ) -> EstimationResult<Estimate> {
        validate_requirements(input)?;
        let catalog = FeatureCatalog::from_entries(source.load_features()?);
        Ok(self.compute(input, &catalog))
    }

    /// Estimate many independent records in parallel against one catalog.
    /// Results are in input order; one invalid record does not fail the others.
    pub fn estimate_batch(
        &self,
        inputs: &[RequirementsInput],
        catalog: &FeatureCatalog,
    ) -> Vec<EstimationResult<Estimate>> {
        inputs
            .par_iter()
            .map(|input| self.estimate_with_catalog(input, catalog))
            .collect()
    }

    /// Run the pipeline on an already-validated record.
    pub fn compute(&self, input: &RequirementsInput, catalog: &FeatureCatalog) -> Estimate {
        let config = &self.config;

        let total_fp = function_points::count(input, catalog, &config.function_points);
        let breakdown = buffers::compute_breakdown(input, &config.buffers);
        let adjusted_fp = total_fp * breakdown.total;
        let dev_weeks = buffers::dev_weeks(adjusted_fp, config.function_points.fp_to_dev_week);

        let mut quote_options = options::build(dev_weeks, input, total_fp, config);
        let recommended = options::pick_recommended(&quote_options, input.budget.amount);
        quote_options.set_recommended(recommended);

        tracing::info!(
            features = input.features.len(),
            total_fp,
            buffer = breakdown.total,
            dev_weeks,
            recommended = %recommended,
            "estimate computed"
        );

        Estimate {
            computed: ComputedEstimate {
                total_fp,
                adjusted_fp,
                dev_weeks,
                buffers: breakdown,
            },
            options: quote_options,
        }
    }
}
