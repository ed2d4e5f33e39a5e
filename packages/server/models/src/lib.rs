#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the wage predictor server.
//!
//! Query parameters deserialize straight into the labour taxonomy enums,
//! so an unknown label is rejected before any encoding happens. Numeric
//! bounds are checked by [`PredictQueryParams::into_request`].

use serde::{Deserialize, Serialize};
use wage_predictor_inference::{InputError, PredictionRequest, Tenure, UsualHours};
use wage_predictor_labour_models::{
    AgeGroup, Attribute, Education, EstablishmentSize, Gender, Industry, Occupation, Province,
    UnionStatus,
};

/// Query parameters for the predict endpoint.
///
/// Every parameter is optional and falls back to the documented default.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictQueryParams {
    /// Occupation label.
    #[serde(default)]
    pub occupation: Occupation,
    /// Industry label.
    #[serde(default)]
    pub industry: Industry,
    /// Education label.
    #[serde(default)]
    pub education: Education,
    /// Employment duration in months.
    #[serde(default = "default_tenure")]
    pub tenure: i64,
    /// Establishment size label.
    #[serde(default, rename = "establishmentsize")]
    pub establishment_size: EstablishmentSize,
    /// Gender label.
    #[serde(default)]
    pub gender: Gender,
    /// Age band label.
    #[serde(default)]
    pub age: AgeGroup,
    /// Province label.
    #[serde(default)]
    pub province: Province,
    /// Union status label.
    #[serde(default)]
    pub union: UnionStatus,
    /// Usual weekly hours.
    #[serde(default = "default_usual_hours", rename = "usualhours")]
    pub usual_hours: f64,
}

fn default_tenure() -> i64 {
    i64::from(Tenure::DEFAULT.months())
}

const fn default_usual_hours() -> f64 {
    UsualHours::DEFAULT.hours()
}

impl PredictQueryParams {
    /// Validates the numeric parameters and builds a [`PredictionRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] if `tenure` or `usualhours` is
    /// outside its bounds.
    pub fn into_request(self) -> Result<PredictionRequest, InputError> {
        Ok(PredictionRequest {
            occupation: self.occupation,
            industry: self.industry,
            education: self.education,
            tenure: Tenure::new(self.tenure)?,
            establishment_size: self.establishment_size,
            gender: self.gender,
            age: self.age,
            province: self.province,
            union: self.union,
            usual_hours: UsualHours::new(self.usual_hours)?,
        })
    }
}

/// Response from the predict endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiPrediction {
    /// Estimated hourly wage, formatted as whole dollars (e.g. `"$24"`).
    #[serde(rename = "Predicted Hourly Wage")]
    pub predicted_hourly_wage: String,
}

/// Static service descriptor returned by the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiServiceInfo {
    /// Application name.
    pub app_name: String,
    /// Published API version.
    pub version: String,
    /// Model family.
    pub model_type: String,
    /// Model author.
    pub author: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Short error category.
    pub error: String,
    /// The violated constraint, for client errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Documentation of the predict endpoint and its parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAttributes {
    /// Service title.
    pub title: String,
    /// Service description.
    pub description: String,
    /// Model disclosure attached to the predict endpoint.
    pub disclosure: String,
    /// Accepted query parameters, in request order.
    pub parameters: Vec<ApiParameter>,
}

/// One query parameter of the predict endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    /// Query parameter name.
    pub name: String,
    /// Human description.
    pub description: String,
    /// Accepted values.
    #[serde(flatten)]
    pub domain: ApiParameterDomain,
}

/// The set of values a parameter accepts.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ApiParameterDomain {
    /// One of a closed set of labels.
    Categorical {
        /// Accepted labels, in declaration order.
        labels: Vec<String>,
        /// Label used when the parameter is omitted.
        default: String,
    },
    /// An integer within inclusive bounds.
    Integer {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Value used when the parameter is omitted.
        default: i64,
    },
    /// A number within inclusive bounds.
    Number {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// Value used when the parameter is omitted.
        default: f64,
    },
}

impl ApiParameter {
    /// Describes a categorical attribute.
    #[must_use]
    pub fn categorical<T: Attribute + Default>() -> Self {
        Self {
            name: T::PARAM.to_string(),
            description: T::DESCRIPTION.to_string(),
            domain: ApiParameterDomain::Categorical {
                labels: T::labels().iter().map(ToString::to_string).collect(),
                default: T::default().label().to_string(),
            },
        }
    }

    /// Describes every predict parameter, in request order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::categorical::<Occupation>(),
            Self::categorical::<Industry>(),
            Self::categorical::<Education>(),
            Self {
                name: "tenure".to_string(),
                description: "Employment duration in months".to_string(),
                domain: ApiParameterDomain::Integer {
                    min: Tenure::MIN,
                    max: Tenure::MAX,
                    default: default_tenure(),
                },
            },
            Self::categorical::<EstablishmentSize>(),
            Self::categorical::<Gender>(),
            Self::categorical::<AgeGroup>(),
            Self::categorical::<Province>(),
            Self::categorical::<UnionStatus>(),
            Self {
                name: "usualhours".to_string(),
                description: "Total weekly hours".to_string(),
                domain: ApiParameterDomain::Number {
                    min: UsualHours::MIN,
                    max: UsualHours::MAX,
                    default: default_usual_hours(),
                },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: serde_json::Value) -> Result<PredictQueryParams, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn omitted_params_fall_back_to_defaults() {
        let request = params(serde_json::json!({}))
            .unwrap()
            .into_request()
            .unwrap();
        assert_eq!(request, PredictionRequest::default());
    }

    #[test]
    fn labels_and_renamed_fields_are_accepted() {
        let request = params(serde_json::json!({
            "occupation": "Professional occupations in law",
            "establishmentsize": "More than 500 employees",
            "age": "70 and over",
            "usualhours": 37.5,
            "tenure": 240,
        }))
        .unwrap()
        .into_request()
        .unwrap();

        assert_eq!(request.occupation, Occupation::Law);
        assert_eq!(request.establishment_size, EstablishmentSize::MoreThan500);
        assert_eq!(request.age, AgeGroup::Age70Plus);
        assert_eq!(request.tenure.months(), 240);
        assert!((request.usual_hours.hours() - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_province_is_rejected() {
        let err = params(serde_json::json!({ "province": "Yukon" })).unwrap_err();
        assert!(err.to_string().contains("unknown variant `Yukon`"), "{err}");
    }

    #[test]
    fn numeric_bounds_are_enforced() {
        for (tenure, ok) in [(0, true), (240, true), (-1, false), (241, false)] {
            let result = params(serde_json::json!({ "tenure": tenure }))
                .unwrap()
                .into_request();
            assert_eq!(result.is_ok(), ok, "tenure={tenure}");
        }

        for (hours, ok) in [(0.1, true), (99.0, true), (0.0, false), (100.0, false)] {
            let result = params(serde_json::json!({ "usualhours": hours }))
                .unwrap()
                .into_request();
            assert_eq!(result.is_ok(), ok, "usualhours={hours}");
        }
    }

    #[test]
    fn prediction_uses_display_key() {
        let body = ApiPrediction {
            predicted_hourly_wage: "$24".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "Predicted Hourly Wage": "$24" })
        );
    }

    #[test]
    fn parameters_are_documented_in_request_order() {
        let names: Vec<String> = ApiParameter::all().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "occupation",
                "industry",
                "education",
                "tenure",
                "establishmentsize",
                "gender",
                "age",
                "province",
                "union",
                "usualhours",
            ]
        );

        let province = serde_json::to_value(ApiParameter::categorical::<Province>()).unwrap();
        assert_eq!(province["type"], "categorical");
        assert_eq!(province["default"], "Newfoundland and Labrador");
        assert_eq!(province["labels"].as_array().unwrap().len(), 10);
    }
}
