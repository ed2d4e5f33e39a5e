//! HTTP handler functions for the wage predictor API.

use std::sync::Arc;

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use wage_predictor_server_models::{
    ApiAttributes, ApiError, ApiHealth, ApiParameter, ApiPrediction, ApiServiceInfo,
    PredictQueryParams,
};

use crate::AppState;

const APP_NAME: &str = "Hourly Wage Predictor";
const API_VERSION: &str = "1.0.0";
const MODEL_TYPE: &str = "CatBoost Regressor";
const AUTHOR: &str = "Yelly Camara";

const TITLE: &str = "Canadian Hourly Wage Predictor";
const DESCRIPTION: &str = "Trained on Statistics Canada Labour Force Survey Microdata Files";
const DISCLOSURE: &str = "Model Disclosure: This model predicts hourly wages based on \
    historical trends. Our analysis indicates higher variance in predictions for men and \
    highly educated professionals.";

fn invalid_input(detail: String) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiError {
        error: "Invalid input".to_string(),
        detail: Some(detail),
    })
}

/// Rejects malformed query strings (unknown labels, non-numeric values)
/// with a 422 naming the violated constraint.
pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected query for {}: {err}", req.path());
    let response = invalid_input(err.to_string());
    InternalError::from_response(err, response).into()
}

/// `GET /`
///
/// Returns the static service descriptor.
pub async fn info() -> HttpResponse {
    HttpResponse::Ok().json(ApiServiceInfo {
        app_name: APP_NAME.to_string(),
        version: API_VERSION.to_string(),
        model_type: MODEL_TYPE.to_string(),
        author: AUTHOR.to_string(),
    })
}

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /attributes`
///
/// Documents the predict endpoint: its disclosure and every accepted
/// parameter with its labels or bounds.
pub async fn attributes() -> HttpResponse {
    HttpResponse::Ok().json(ApiAttributes {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        disclosure: DISCLOSURE.to_string(),
        parameters: ApiParameter::all(),
    })
}

/// `GET /predict`
///
/// Predicts the hourly wage for one set of attributes.
pub async fn predict(
    state: web::Data<AppState>,
    params: web::Query<PredictQueryParams>,
) -> HttpResponse {
    let request = match params.into_inner().into_request() {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejected prediction request: {e}");
            return invalid_input(e.to_string());
        }
    };

    // Scoring is CPU-bound and the backend call is synchronous.
    let model = Arc::clone(&state.model);
    let scored =
        web::block(move || wage_predictor_inference::predict(model.as_ref(), &request)).await;

    match scored {
        Ok(Ok(result)) => HttpResponse::Ok().json(ApiPrediction {
            predicted_hourly_wage: result.formatted(),
        }),
        Ok(Err(e)) => {
            log::error!("Failed to predict hourly wage: {e}");
            prediction_failed()
        }
        Err(e) => {
            log::error!("Prediction task did not complete: {e}");
            prediction_failed()
        }
    }
}

fn prediction_failed() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiError {
        error: "Prediction failed".to_string(),
        detail: None,
    })
}
