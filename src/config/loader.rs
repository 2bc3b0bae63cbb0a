//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{RentalError, RentalResult};

use super::types::AgencyConfig;

/// Project config location, relative to the project root
pub const PROJECT_CONFIG_PATH: &str = ".rental/config.toml";
/// User config location, relative to the platform config directory
pub const USER_CONFIG_PATH: &str = "rental-core/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RentalResult<(AgencyConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for error and warning locations.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> RentalResult<(AgencyConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: AgencyConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RentalError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> AgencyConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_PATH))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match AgencyConfig::load(&path) {
            Ok(config) => {
                log::debug!("loaded configuration from {}", path.display());
                return with_env_overrides(config);
            }
            Err(e) => log::warn!("ignoring configuration {}: {}", path.display(), e),
        }
    }

    with_env_overrides(AgencyConfig::default())
}

/// Apply environment variable overrides (RENTAL_* prefix)
pub fn with_env_overrides(config: AgencyConfig) -> AgencyConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`; unparseable values are ignored
pub fn with_overrides_from<F>(mut config: AgencyConfig, lookup: F) -> AgencyConfig
where
    F: Fn(&str) -> Option<String>,
{
    // RENTAL_MAINTENANCE_KM_THRESHOLD
    if let Some(val) = lookup("RENTAL_MAINTENANCE_KM_THRESHOLD") {
        match val.trim().parse::<f64>() {
            Ok(km) if km.is_finite() && km >= 0.0 => config.maintenance.km_threshold = km,
            _ => log::warn!("ignoring RENTAL_MAINTENANCE_KM_THRESHOLD={}", val),
        }
    }

    // RENTAL_LOYALTY_MIN_RENTALS
    if let Some(val) = lookup("RENTAL_LOYALTY_MIN_RENTALS") {
        match val.trim().parse::<usize>() {
            Ok(n) => config.loyalty.min_rentals = n,
            Err(_) => log::warn!("ignoring RENTAL_LOYALTY_MIN_RENTALS={}", val),
        }
    }

    // RENTAL_APPLY_LOYALTY_DISCOUNT
    if let Some(val) = lookup("RENTAL_APPLY_LOYALTY_DISCOUNT") {
        match val.trim().to_lowercase().as_str() {
            "true" | "1" => config.pricing.apply_loyalty_discount = true,
            "false" | "0" => config.pricing.apply_loyalty_discount = false,
            _ => log::warn!("ignoring RENTAL_APPLY_LOYALTY_DISCOUNT={}", val),
        }
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_PATH))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "maintenance",
        "km_threshold",
        "loyalty",
        "min_rentals",
        "pricing",
        "apply_loyalty_discount",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
