#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hourly wage inference.
//!
//! Turns a validated [`PredictionRequest`] into the model's [`FeatureRow`],
//! scores it with a [`WageModel`] and scales the raw output into an hourly
//! wage. The model predicts wages in cents, so the result is divided by
//! 100 and reported in whole dollars.

pub mod features;
pub mod model;
pub mod request;

use std::fmt;

use thiserror::Error;
pub use wage_predictor_labour_models::EncodingError;

pub use features::FeatureRow;
pub use model::{DEFAULT_MODEL_PATH, ModelLoader, WageModel, ensure_artifact};
pub use request::{PredictionRequest, Tenure, UsualHours};

/// A request value that violates its allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A numeric field is outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Query parameter name.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Inclusive lower bound.
        min: String,
        /// Inclusive upper bound.
        max: String,
    },
}

/// Errors raised while loading or evaluating the wage model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model artifact does not exist.
    #[error("Model artifact not found at {path}")]
    NotFound {
        /// Path that was probed.
        path: String,
    },

    /// The model artifact exists but could not be loaded.
    #[error("Failed to load model artifact {path}: {message}")]
    Load {
        /// Path of the artifact.
        path: String,
        /// Description of what went wrong.
        message: String,
    },

    /// The artifact was produced for a different feature schema.
    #[error("Model artifact {path} does not match the feature schema: {message}")]
    SchemaMismatch {
        /// Path of the artifact.
        path: String,
        /// Description of the mismatch.
        message: String,
    },

    /// The scoring library failed on a row.
    #[error("Inference error: {message}")]
    Inference {
        /// Description of what went wrong.
        message: String,
    },
}

/// Errors that can occur while serving a prediction.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A selection could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The model failed to score the row.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// The scaled output of one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    /// Raw model output, in cents per hour.
    pub raw: f64,
    /// Estimated hourly wage in dollars.
    pub hourly_wage: f64,
}

impl PredictionResult {
    /// Scales a raw model output into dollars.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        Self {
            raw,
            hourly_wage: raw / 100.0,
        }
    }

    /// The wage rounded to whole dollars, e.g. `"$24"`.
    #[must_use]
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.0}", self.hourly_wage)
    }
}

/// Encodes `request`, scores it with `model` and scales the result.
///
/// # Errors
///
/// * [`PredictionError::Encoding`] if a selection has no model code
/// * [`PredictionError::Model`] if the model fails to score the row
pub fn predict(
    model: &dyn WageModel,
    request: &PredictionRequest,
) -> Result<PredictionResult, PredictionError> {
    score(model, FeatureRow::encode(request))
}

fn score(
    model: &dyn WageModel,
    encoded: Result<FeatureRow, EncodingError>,
) -> Result<PredictionResult, PredictionError> {
    let row = encoded?;
    log::debug!("Scoring feature row: {row:?}");

    let raw = model.predict(&row)?;
    let result = PredictionResult::from_raw(raw);
    log::debug!("Raw prediction {raw} -> {result}");

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use wage_predictor_labour_models::{Occupation, Province};

    use super::*;

    /// Returns a fixed score and records every row it sees.
    struct StubModel {
        score: f64,
        rows: Mutex<Vec<FeatureRow>>,
    }

    impl StubModel {
        fn new(score: f64) -> Self {
            Self {
                score,
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    impl WageModel for StubModel {
        fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
            self.rows.lock().unwrap().push(row.clone());
            Ok(self.score)
        }

        fn model_type(&self) -> &'static str {
            "Stub"
        }
    }

    struct FailingModel;

    impl WageModel for FailingModel {
        fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
            Err(ModelError::Inference {
                message: "bad row".to_string(),
            })
        }

        fn model_type(&self) -> &'static str {
            "Failing"
        }
    }

    #[test]
    fn output_is_scaled_to_whole_dollars() {
        let model = StubModel::new(2400.0);
        let result = predict(&model, &PredictionRequest::default()).unwrap();

        assert!((result.hourly_wage - 24.0).abs() < f64::EPSILON);
        assert_eq!(result.formatted(), "$24");
    }

    #[test]
    fn formatting_rounds_to_nearest_dollar() {
        assert_eq!(PredictionResult::from_raw(2449.0).formatted(), "$24");
        assert_eq!(PredictionResult::from_raw(2451.0).formatted(), "$25");
        assert_eq!(PredictionResult::from_raw(3187.6).formatted(), "$32");
    }

    #[test]
    fn model_receives_encoded_row() {
        let model = StubModel::new(1800.0);
        let request = PredictionRequest {
            occupation: Occupation::Engineering,
            province: Province::Quebec,
            usual_hours: UsualHours::new(40.0).unwrap(),
            ..PredictionRequest::default()
        };

        predict(&model, &request).unwrap();

        let rows = model.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].noc_43, "12");
        assert_eq!(rows[0].prov, "24");
        assert!((rows[0].uhrsmain - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prediction_is_idempotent() {
        let model = StubModel::new(2733.3);
        let request = PredictionRequest::default();

        let first = predict(&model, &request).unwrap();
        let second = predict(&model, &request).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.formatted(), second.formatted());

        let rows = model.rows.lock().unwrap();
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn encoding_failure_skips_the_model() {
        let model = StubModel::new(2400.0);
        let err = score(
            &model,
            Err(EncodingError::MissingMapping {
                attribute: "occupation",
                label: "Legislative and senior management occupations".to_string(),
            }),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PredictionError::Encoding(EncodingError::MissingMapping { .. })
        ));
        assert!(model.rows.lock().unwrap().is_empty());
    }

    #[test]
    fn model_failure_is_surfaced() {
        let err = predict(&FailingModel, &PredictionRequest::default()).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::Model(ModelError::Inference { .. })
        ));
    }
}
