use thiserror::Error;

/// Everything this back-end can fail with. Lowering itself is total; errors
/// only arise at the serialization boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Format selector outside the supported set. Raised before any output
    /// is produced; compilation is all-or-nothing.
    #[error("unsupported output format `{0}` (expected `json` or `yaml`)")]
    UnsupportedFormat(String),

    #[error("failed to serialize schema document as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize schema document as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
