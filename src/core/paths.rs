use crate::core::ConfigProvider;
use regex::Regex;
use std::path::{Path, PathBuf};

const TOKEN_PATTERN: &str = r"<([a-z_]+)>";

/// Replaces every `<token>` occurrence with its configured root
/// (e.g. `<ros>/share/velodyne` with `ros_root = /opt/ros` becomes
/// `/opt/ros/share/velodyne`). Tokens without a configured value are
/// left verbatim.
pub fn translate_path(template: &str, roots: &[(&str, &str)]) -> String {
    let re = Regex::new(TOKEN_PATTERN).unwrap();

    let result = re.replace_all(template, |caps: &regex::Captures| {
        let token = &caps[1];
        roots
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, root)| (*root).to_string())
            .unwrap_or_else(|| format!("<{}>", token))
    });

    result.to_string()
}

/// Lists the placeholder tokens appearing in a target template, in order.
pub fn placeholder_tokens(template: &str) -> Vec<String> {
    let re = Regex::new(TOKEN_PATTERN).unwrap();
    re.captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Resolves a target template into a concrete path: placeholder tokens are
/// translated first, then relative results are anchored on the configured
/// stack root. Absolute results pass through unchanged.
pub fn resolve_target<C: ConfigProvider>(template: &str, config: &C) -> PathBuf {
    let translated = translate_path(template, &[("ros", config.ros_root())]);
    let path = Path::new(&translated);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(config.stack_root()).join(path)
    }
}
