use std::env;
use std::path::PathBuf;

use tracing::info;

/// Subscriber destinations, loaded from environment variables.
/// Every setting has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub audit_log_path: PathBuf,
    pub recommendations_path: PathBuf,
    pub notifications_path: PathBuf,
    pub notify_recipient: String,
    pub console: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            audit_log_path: lookup("CATALOG_AUDIT_LOG")
                .unwrap_or_else(|| "audit.log".to_string())
                .into(),
            recommendations_path: lookup("CATALOG_RECOMMENDATIONS")
                .unwrap_or_else(|| "recommendations.json".to_string())
                .into(),
            notifications_path: lookup("CATALOG_NOTIFICATIONS")
                .unwrap_or_else(|| "notifications.log".to_string())
                .into(),
            notify_recipient: lookup("CATALOG_NOTIFY_RECIPIENT")
                .unwrap_or_else(|| "admin@catalog.local".to_string()),
            console: lookup("CATALOG_CONSOLE")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    pub fn log(&self) {
        info!(
            audit_log = %self.audit_log_path.display(),
            recommendations = %self.recommendations_path.display(),
            notifications = %self.notifications_path.display(),
            recipient = %self.notify_recipient,
            console = self.console,
            "Loaded config"
        );
    }
}

/// Anything but an explicit off value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
