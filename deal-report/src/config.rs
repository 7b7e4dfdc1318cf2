use std::path::PathBuf;

use anyhow::{Context, Result};
use shared::models::FilterCriteria;

/// Report configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DEAL_DATA_DIR | ./data | directory holding deals.json / commissions.json |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_JSON | false | emit logs as JSON lines |
/// | LOG_DIR | (unset) | daily rolling log file directory |
/// | AGENT_ID | (unset) | restrict commissions to one sales agent |
/// | FILTER_START_DATE | (unset) | inclusive lower date bound (YYYY-MM-DD) |
/// | FILTER_END_DATE | (unset) | inclusive upper date bound (YYYY-MM-DD) |
/// | FILTER_SALES_AGENT | (unset) | exact sales agent name |
/// | FILTER_DESK_MANAGER | (unset) | exact desk manager name |
/// | FILTER_VEHICLE_MODEL | (unset) | exact vehicle model |
///
/// # Example
///
/// ```ignore
/// DEAL_DATA_DIR=/srv/export FILTER_START_DATE=2025-05-05 cargo run -p deal-report
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<PathBuf>,
    /// Commissions are fetched for this agent only when set
    pub agent_id: Option<i64>,
    pub criteria: FilterCriteria,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let agent_id = get("AGENT_ID")
            .map(|raw| {
                raw.parse::<i64>()
                    .with_context(|| format!("AGENT_ID must be an integer, got {raw:?}"))
            })
            .transpose()?;

        let log_json = match get("LOG_JSON").as_deref() {
            None => false,
            Some(raw) => raw
                .parse::<bool>()
                .with_context(|| format!("LOG_JSON must be true or false, got {raw:?}"))?,
        };

        Ok(Self {
            data_dir: get("DEAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json,
            log_dir: get("LOG_DIR").map(PathBuf::from),
            agent_id,
            criteria: FilterCriteria {
                start_date: get("FILTER_START_DATE"),
                end_date: get("FILTER_END_DATE"),
                sales_agent_name: get("FILTER_SALES_AGENT"),
                desk_manager_name: get("FILTER_DESK_MANAGER"),
                vehicle_model: get("FILTER_VEHICLE_MODEL"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.agent_id, None);
        assert!(config.criteria.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DEAL_DATA_DIR", "/srv/export"),
            ("LOG_LEVEL", "deal_view=debug"),
            ("LOG_JSON", "true"),
            ("AGENT_ID", " 7 "),
            ("FILTER_START_DATE", "2025-05-05"),
            ("FILTER_SALES_AGENT", "Jane"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/export"));
        assert_eq!(config.log_level, "deal_view=debug");
        assert!(config.log_json);
        assert_eq!(config.agent_id, Some(7));
        assert_eq!(
            config.criteria,
            FilterCriteria::new()
                .with_start_date("2025-05-05")
                .with_sales_agent("Jane")
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("AGENT_ID", ""), ("FILTER_VEHICLE_MODEL", "  ")]).unwrap();
        assert_eq!(config.agent_id, None);
        assert_eq!(config.criteria.vehicle_model, None);
    }

    #[test]
    fn test_bad_agent_id_is_rejected() {
        let err = config_from(&[("AGENT_ID", "jane")]).unwrap_err();
        assert!(err.to_string().contains("AGENT_ID"));
    }

    #[test]
    fn test_bad_log_json_is_rejected() {
        assert!(config_from(&[("LOG_JSON", "yes")]).is_err());
    }
}
