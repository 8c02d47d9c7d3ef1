pub mod manager;
pub mod paths;

pub use crate::domain::model::{CopyKind, CopyStep};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
