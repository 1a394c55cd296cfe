//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradetrack configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradetrackConfig {
    /// Gradebook data file.
    #[serde(default = "default_gradebook_path")]
    pub gradebook_path: PathBuf,
    /// CSV export target.
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
    /// Accept scores above the maximum.
    #[serde(default)]
    pub allow_extra_credit: bool,
    /// Weight given to an exam recorded without `--weight`.
    #[serde(default = "default_exam_weight")]
    pub default_exam_weight: f64,
}

fn default_gradebook_path() -> PathBuf {
    PathBuf::from("gradebook.toml")
}
fn default_export_path() -> PathBuf {
    PathBuf::from("grades.csv")
}
fn default_exam_weight() -> f64 {
    1.0
}

impl Default for GradetrackConfig {
    fn default() -> Self {
        Self {
            gradebook_path: default_gradebook_path(),
            export_path: default_export_path(),
            allow_extra_credit: false,
            default_exam_weight: default_exam_weight(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is, never scanned again. An
/// unset variable is an error.
fn resolve_env_vars(s: &str) -> Result<String> {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        let value = std::env::var(var_name)
            .with_context(|| format!("environment variable '{var_name}' is not set"))?;
        result.push_str(&rest[..start]);
        result.push_str(&value);
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}

fn resolve_path(p: &Path) -> Result<PathBuf> {
    let resolved = resolve_env_vars(&p.to_string_lossy())
        .with_context(|| format!("failed to resolve path: {}", p.display()))?;
    Ok(PathBuf::from(resolved))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradetrack.toml` in the current directory
/// 2. `~/.config/gradetrack/config.toml`
///
/// Environment variable overrides: `GRADETRACK_GRADEBOOK`, `GRADETRACK_EXPORT`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradetrackConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradetrack.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradetrackConfig::default(),
    };

    if let Ok(p) = std::env::var("GRADETRACK_GRADEBOOK") {
        config.gradebook_path = PathBuf::from(p);
    }
    if let Ok(p) = std::env::var("GRADETRACK_EXPORT") {
        config.export_path = PathBuf::from(p);
    }

    config.gradebook_path = resolve_path(&config.gradebook_path)?;
    config.export_path = resolve_path(&config.export_path)?;

    Ok(config)
}

fn parse_config(content: &str) -> Result<GradetrackConfig> {
    let config: GradetrackConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.default_exam_weight.is_finite() && config.default_exam_weight >= 0.0,
        "default_exam_weight must be a non-negative number"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradetrack"))
}
