use crate::core::{paths, ConfigProvider, CopyStep};
use crate::utils::error::{Result, SwitchError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment layout: where target path templates resolve, and which entries
/// of the vehicle data directory go where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub deploy: DeployConfig,
    #[serde(rename = "copy")]
    pub copy_steps: Vec<CopyStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Root substituted for the `<ros>` placeholder in target templates.
    #[serde(default = "default_ros_root")]
    pub ros_root: String,
    /// Base directory for relative target paths.
    #[serde(default = "default_stack_root")]
    pub stack_root: String,
}

fn default_ros_root() -> String {
    "/opt/ros".to_string()
}

fn default_stack_root() -> String {
    ".".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            ros_root: default_ros_root(),
            stack_root: default_stack_root(),
        }
    }
}

impl Default for TomlConfig {
    /// The stock layout: vehicle and control params into the stack's conf
    /// locations, sensor launch files and param directories into the ROS
    /// install, and the static vehicle info for OTA usage.
    fn default() -> Self {
        Self {
            deploy: DeployConfig::default(),
            copy_steps: vec![
                CopyStep::file(
                    "vehicle_param.pb.txt",
                    "modules/common/data/vehicle_param.pb.txt",
                ),
                CopyStep::file(
                    "calibration_table.pb.txt",
                    "modules/control/conf/control_conf.pb.txt",
                ),
                CopyStep::file(
                    "start_velodyne.launch",
                    "<ros>/share/velodyne/launch/start_velodyne.launch",
                ),
                CopyStep::dir("velodyne_params", "<ros>/share/velodyne_pointcloud/params"),
                CopyStep::dir("camera_params", "modules/perception/data/params"),
                CopyStep::file(
                    "gnss_params/gnss_driver.launch",
                    "<ros>/share/gnss_driver/launch/gnss_driver.launch",
                ),
                CopyStep::file(
                    "gnss_params/gnss_conf_mkz.txt",
                    "<ros>/share/gnss_driver/conf/gnss_conf_mkz.txt",
                ),
                CopyStep::file("vehicle_info.pb.txt", "modules/tools/ota/vehicle_info.pb.txt"),
            ],
        }
    }
}

const KNOWN_TOKENS: &[&str] = &["ros"];

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SwitchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SwitchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR_NAME}` occurrences with environment values; unset
    /// variables are left verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("deploy.ros_root", &self.deploy.ros_root)?;
        validate_path("deploy.stack_root", &self.deploy.stack_root)?;

        if self.copy_steps.is_empty() {
            return Err(SwitchError::MissingConfigError {
                field: "copy".to_string(),
            });
        }

        for step in &self.copy_steps {
            validate_non_empty_string("copy.source", &step.source)?;
            validate_path("copy.target", &step.target)?;

            for token in paths::placeholder_tokens(&step.target) {
                if !KNOWN_TOKENS.contains(&token.as_str()) {
                    return Err(SwitchError::InvalidConfigValueError {
                        field: "copy.target".to_string(),
                        value: step.target.clone(),
                        reason: format!(
                            "Unknown placeholder token: <{}>. Known tokens: {}",
                            token,
                            KNOWN_TOKENS.join(", ")
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn ros_root(&self) -> &str {
        &self.deploy.ros_root
    }

    fn stack_root(&self) -> &str {
        &self.deploy.stack_root
    }

    fn copy_steps(&self) -> &[CopyStep] {
        &self.copy_steps
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CopyKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_layout() {
        let toml_content = r#"
[deploy]
ros_root = "/opt/ros/indigo"
stack_root = "/apollo"

[[copy]]
source = "vehicle_param.pb.txt"
target = "modules/common/data/vehicle_param.pb.txt"
kind = "file"

[[copy]]
source = "velodyne_params"
target = "<ros>/share/velodyne_pointcloud/params"
kind = "dir"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.deploy.ros_root, "/opt/ros/indigo");
        assert_eq!(config.deploy.stack_root, "/apollo");
        assert_eq!(config.copy_steps.len(), 2);
        assert_eq!(config.copy_steps[0].kind, CopyKind::File);
        assert_eq!(config.copy_steps[1].kind, CopyKind::Dir);
    }

    #[test]
    fn test_deploy_section_defaults() {
        let toml_content = r#"
[[copy]]
source = "vehicle_param.pb.txt"
target = "modules/common/data/vehicle_param.pb.txt"
kind = "file"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.deploy.ros_root, "/opt/ros");
        assert_eq!(config.deploy.stack_root, ".");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_STACK_ROOT", "/opt/stack");

        let toml_content = r#"
[deploy]
stack_root = "${TEST_STACK_ROOT}"

[[copy]]
source = "vehicle_param.pb.txt"
target = "modules/common/data/vehicle_param.pb.txt"
kind = "file"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.deploy.stack_root, "/opt/stack");

        std::env::remove_var("TEST_STACK_ROOT");
    }

    #[test]
    fn test_default_layout_matches_stock_table() {
        let config = TomlConfig::default();

        assert_eq!(config.copy_steps.len(), 8);
        assert_eq!(config.copy_steps[0].source, "vehicle_param.pb.txt");
        assert_eq!(
            config.copy_steps[0].target,
            "modules/common/data/vehicle_param.pb.txt"
        );
        assert_eq!(
            config.copy_steps[3].target,
            "<ros>/share/velodyne_pointcloud/params"
        );
        assert_eq!(config.copy_steps[3].kind, CopyKind::Dir);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_copy_table() {
        let config = TomlConfig {
            deploy: DeployConfig::default(),
            copy_steps: vec![],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_placeholder() {
        let config = TomlConfig {
            deploy: DeployConfig::default(),
            copy_steps: vec![CopyStep::file(
                "gnss_params/gnss_driver.launch",
                "<catkin>/share/gnss_driver/launch/gnss_driver.launch",
            )],
        };

        let result = config.validate();
        assert!(matches!(
            result,
            Err(SwitchError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_source() {
        let config = TomlConfig {
            deploy: DeployConfig::default(),
            copy_steps: vec![CopyStep::file("", "modules/common/data/a.txt")],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[deploy]
ros_root = "/opt/ros/indigo"

[[copy]]
source = "vehicle_info.pb.txt"
target = "modules/tools/ota/vehicle_info.pb.txt"
kind = "file"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.deploy.ros_root, "/opt/ros/indigo");
        assert_eq!(config.copy_steps.len(), 1);
    }
}
