use contracts::enums::ResourceKind;
use serde::Deserialize;
use std::collections::HashMap;

/// Settings of the in-memory record source
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// Simulated response time for resources without an override
    #[serde(default)]
    pub default_latency_ms: u32,

    /// Per-resource overrides keyed by table key (`"sales.invoices"`)
    #[serde(default)]
    pub latency_ms: HashMap<String, u32>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
default_latency_ms = 300

[latency_ms]
"sales.orders" = 350
"sales.quotes" = 250
"purchases.invoices" = 350
"purchases.vendors" = 250
"inventory.warehouses" = 250
"inventory.stores" = 350
"dashboard.recent" = 400
"reports" = 500
"#;

/// Latency key of the dashboard stat cards
pub const DASHBOARD_STATS_KEY: &str = "dashboard.stats";
/// Latency key of the period report
pub const REPORTS_KEY: &str = "reports";

impl SourceConfig {
    /// Parse a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the embedded configuration, falling back to no latency when it
    /// cannot be parsed
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => {
                log::debug!(
                    "source config loaded: default {}ms, {} overrides",
                    config.default_latency_ms,
                    config.latency_ms.len()
                );
                config
            }
            Err(err) => {
                log::error!("invalid embedded source config: {}", err);
                Self::instant()
            }
        }
    }

    /// No simulated latency at all
    pub fn instant() -> Self {
        Self {
            default_latency_ms: 0,
            latency_ms: HashMap::new(),
        }
    }

    pub fn latency_for(&self, kind: ResourceKind) -> u32 {
        self.latency_for_key(&kind.table_key())
    }

    /// Latency of a fetch that is not a record list
    pub fn latency_for_key(&self, key: &str) -> u32 {
        self.latency_ms
            .get(key)
            .copied()
            .unwrap_or(self.default_latency_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ContactScope;

    #[test]
    fn test_default_config_loads() {
        let config = SourceConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.default_latency_ms, 300);
        assert_eq!(config.latency_for(ResourceKind::SalesInvoices), 300);
        assert_eq!(config.latency_for(ResourceKind::SalesOrders), 350);
    }

    #[test]
    fn test_embedded_latencies_stay_in_range() {
        let config = SourceConfig::load();
        for kind in ResourceKind::all() {
            let latency = config.latency_for(kind);
            assert!((250..=500).contains(&latency), "{:?}: {}", kind, latency);
        }
    }

    #[test]
    fn test_dashboard_and_report_latencies() {
        let config = SourceConfig::load();
        assert_eq!(config.latency_for(ResourceKind::RecentTransactions), 400);
        assert_eq!(config.latency_for_key(DASHBOARD_STATS_KEY), 300);
        assert_eq!(config.latency_for_key(REPORTS_KEY), 500);
    }

    #[test]
    fn test_contact_scopes_share_latency() {
        let config = SourceConfig::load();
        assert_eq!(
            config.latency_for(ResourceKind::Contacts(ContactScope::Customers)),
            config.latency_for(ResourceKind::Contacts(ContactScope::All))
        );
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let config = SourceConfig::from_toml("").unwrap();
        assert_eq!(config, SourceConfig::instant());
        assert_eq!(config.latency_for(ResourceKind::Stores), 0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SourceConfig::from_toml("default_latency_ms = \"fast\"").is_err());
    }
}
