use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyKind {
    File,
    Dir,
}

/// One entry of the deployment table: a file or directory under the vehicle
/// data directory and the place the driving stack expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyStep {
    /// Path relative to the vehicle data directory.
    pub source: String,
    /// Destination template; may contain placeholder tokens such as `<ros>`.
    pub target: String,
    pub kind: CopyKind,
}

impl CopyStep {
    pub fn file(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            kind: CopyKind::File,
        }
    }

    pub fn dir(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            kind: CopyKind::Dir,
        }
    }
}
