#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `CatBoost` scoring backend for the wage predictor.
//!
//! Wraps the official `CatBoost` Rust package, which evaluates `.cbm`
//! artifacts through `libcatboostmodel`. Numeric and categorical columns
//! are handed over separately, each in its schema order.

use std::path::Path;

use wage_predictor_inference::{FeatureRow, ModelError, WageModel, ensure_artifact};

/// Loads the `CatBoost` artifact at `path`.
///
/// Matches [`wage_predictor_inference::ModelLoader`], so it can be passed
/// straight to the server.
///
/// # Errors
///
/// * [`ModelError::NotFound`] if no file exists at `path`
/// * [`ModelError::Load`] if the artifact cannot be parsed
/// * [`ModelError::SchemaMismatch`] if the artifact expects a different
///   feature layout
pub fn load(path: &Path) -> Result<Box<dyn WageModel>, ModelError> {
    ensure_artifact(path)?;
    Ok(Box::new(CatBoostWageModel::load(path)?))
}

/// A loaded `CatBoost` regressor.
pub struct CatBoostWageModel {
    model: catboost::Model,
}

impl CatBoostWageModel {
    /// Loads a `.cbm` artifact and checks that its feature layout matches
    /// [`FeatureRow`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Load`] if the artifact cannot be parsed, or
    /// [`ModelError::SchemaMismatch`] if it expects a different number of
    /// numeric or categorical features.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model = catboost::Model::load(path).map_err(|e| ModelError::Load {
            path: path.display().to_string(),
            message: format!("{e:?}"),
        })?;

        let float_count = model.get_float_features_count();
        let cat_count = model.get_cat_features_count();
        if float_count != FeatureRow::FLOAT_FEATURES.len()
            || cat_count != FeatureRow::CAT_FEATURES.len()
        {
            return Err(ModelError::SchemaMismatch {
                path: path.display().to_string(),
                message: format!(
                    "expected {} numeric and {} categorical features, artifact has {float_count} and {cat_count}",
                    FeatureRow::FLOAT_FEATURES.len(),
                    FeatureRow::CAT_FEATURES.len(),
                ),
            });
        }

        log::info!(
            "Loaded CatBoost model with {} trees ({float_count} numeric, {cat_count} categorical features)",
            model.get_tree_count(),
        );

        Ok(Self { model })
    }
}

impl WageModel for CatBoostWageModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let predictions = self
            .model
            .calc_model_prediction(vec![row.float_features()], vec![row.cat_features()])
            .map_err(|e| ModelError::Inference {
                message: format!("{e:?}"),
            })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference {
                message: "model returned no prediction".to_string(),
            })
    }

    fn model_type(&self) -> &'static str {
        "CatBoost Regressor"
    }
}
