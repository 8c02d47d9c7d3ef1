use crate::core::{paths, ConfigProvider, CopyKind, Result};
use crate::utils::error::SwitchError;
use crate::utils::fs::{copy_dir_recursive, copy_file};
use std::path::Path;

pub struct VehicleManager<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> VehicleManager<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Makes the given vehicle's data the active configuration by copying its
    /// files and param directories over the locations the stack reads from.
    ///
    /// Fails only when the vehicle data directory itself is missing. A copy
    /// step that fails (entry absent, permissions) is logged and skipped so
    /// the remaining steps still run.
    pub fn use_vehicle<P: AsRef<Path>>(&self, vehicle_data_path: P) -> Result<()> {
        let data_dir = vehicle_data_path.as_ref();
        if !data_dir.is_dir() {
            tracing::error!("Cannot find vehicle data: {}", data_dir.display());
            return Err(SwitchError::VehicleDataMissing {
                path: data_dir.display().to_string(),
            });
        }

        for step in self.config.copy_steps() {
            let source = data_dir.join(&step.source);
            let target = paths::resolve_target(&step.target, &self.config);

            tracing::debug!("Copying {} -> {}", source.display(), target.display());
            let copied = match step.kind {
                CopyKind::File => copy_file(&source, &target),
                CopyKind::Dir => copy_dir_recursive(&source, &target),
            };
            if let Err(e) = copied {
                tracing::warn!(
                    "Failed to copy {} -> {}: {}",
                    source.display(),
                    target.display(),
                    e
                );
            }
        }

        Ok(())
    }
}
