//! Trained wage model abstraction.
//!
//! The rest of the service only ever holds an `Arc<dyn WageModel>`, so the
//! scoring library stays behind this trait and tests can score with a
//! stub. Backends that link a native scoring library live in their own
//! package and hand the server a [`ModelLoader`].

use std::path::Path;

use crate::ModelError;
use crate::features::FeatureRow;

/// Default location of the trained model artifact, relative to the
/// installation root.
pub const DEFAULT_MODEL_PATH: &str = "models/model_v1.cbm";

/// Loads a model artifact from disk.
pub type ModelLoader = fn(&Path) -> Result<Box<dyn WageModel>, ModelError>;

/// A trained regression model that scores one encoded row.
///
/// Implementations are immutable once loaded and are shared read-only
/// across request handlers.
pub trait WageModel: Send + Sync {
    /// Scores a single feature row, returning the raw model output.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Inference`] if the scoring library rejects
    /// the row.
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;

    /// Human-readable name of the model family.
    fn model_type(&self) -> &'static str;
}

/// Checks that a model artifact exists at `path`.
///
/// # Errors
///
/// Returns [`ModelError::NotFound`] if no file exists at `path`.
pub fn ensure_artifact(path: &Path) -> Result<(), ModelError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ModelError::NotFound {
            path: path.display().to_string(),
        })
    }
}
