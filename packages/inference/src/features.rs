//! The encoded feature row submitted to the wage model.

use serde::Serialize;
use wage_predictor_labour_models::{Attribute, EncodingError};

use crate::request::PredictionRequest;

/// A single encoded row in the model's training schema.
///
/// Serializes with the schema's column names, so the JSON form is exactly
/// the row the model scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    /// Occupation code.
    #[serde(rename = "NOC_43")]
    pub noc_43: &'static str,
    /// Industry code.
    #[serde(rename = "NAICS_21")]
    pub naics_21: &'static str,
    /// Education ordinal, 0-6.
    #[serde(rename = "EDUC")]
    pub educ: u8,
    /// Tenure in months.
    #[serde(rename = "TENURE")]
    pub tenure: u8,
    /// Establishment size code.
    #[serde(rename = "ESTSIZE")]
    pub estsize: &'static str,
    /// Gender code.
    #[serde(rename = "GENDER")]
    pub gender: &'static str,
    /// Age band code.
    #[serde(rename = "AGE_12")]
    pub age_12: &'static str,
    /// Province code.
    #[serde(rename = "PROV")]
    pub prov: &'static str,
    /// Union status code.
    #[serde(rename = "UNION")]
    pub union: &'static str,
    /// Usual weekly hours, in tenths of an hour.
    #[serde(rename = "UHRSMAIN")]
    pub uhrsmain: f64,
}

impl FeatureRow {
    /// Names of the numeric columns, in [`Self::float_features`] order.
    pub const FLOAT_FEATURES: [&'static str; 3] = ["EDUC", "TENURE", "UHRSMAIN"];

    /// Names of the categorical columns, in [`Self::cat_features`] order.
    pub const CAT_FEATURES: [&'static str; 7] = [
        "NOC_43", "NAICS_21", "ESTSIZE", "GENDER", "AGE_12", "PROV", "UNION",
    ];

    /// Encodes a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::MissingMapping`] if any selection has no
    /// model code.
    pub fn encode(request: &PredictionRequest) -> Result<Self, EncodingError> {
        Ok(Self {
            noc_43: request.occupation.code()?,
            naics_21: request.industry.code()?,
            educ: request.education.ordinal()?,
            tenure: request.tenure.months(),
            estsize: request.establishment_size.code()?,
            gender: request.gender.code()?,
            age_12: request.age.code()?,
            prov: request.province.code()?,
            union: request.union.code()?,
            uhrsmain: request.usual_hours.tenths(),
        })
    }

    /// Numeric columns as the scoring library takes them.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn float_features(&self) -> Vec<f32> {
        vec![
            f32::from(self.educ),
            f32::from(self.tenure),
            self.uhrsmain as f32,
        ]
    }

    /// Categorical columns as the scoring library takes them.
    #[must_use]
    pub fn cat_features(&self) -> Vec<String> {
        [
            self.noc_43,
            self.naics_21,
            self.estsize,
            self.gender,
            self.age_12,
            self.prov,
            self.union,
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}
