#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hourly wage predictor API server, scoring with `CatBoost`.
//!
//! Configuration comes from `BIND_ADDR`, `PORT` and `MODEL_PATH`; log
//! verbosity from `RUST_LOG`.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    wage_predictor_server::run_server(wage_predictor_catboost::load).await
}
