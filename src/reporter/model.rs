use serde::{Deserialize, Serialize};

use super::MONIKER_FALLBACK_CHARS;

/// One entry of the reporter registry, as collaborators push it.
/// Optional fields default to empty/zero so partial registry payloads
/// still deserialize into a fully-populated record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterRecord {
    pub address: String,
    /// Display name; empty falls back to a truncated address.
    #[serde(default)]
    pub moniker: String,
    /// Bonded stake, same unit and scale as the network total.
    pub power: u64,
    /// Fraction of rewards the reporter keeps, in [0, 1]. The rest goes
    /// to delegating selectors (passed through, not modeled here).
    #[serde(default)]
    pub commission_rate: f64,
}

impl ReporterRecord {
    /// Moniker, or the first characters of the address + "..." when empty.
    pub fn display_name(&self) -> String {
        if self.moniker.is_empty() {
            let head: String = self.address.chars().take(MONIKER_FALLBACK_CHARS).collect();
            format!("{head}...")
        } else {
            self.moniker.clone()
        }
    }
}

/// A reporter with its APR figured against the current snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ReporterApr {
    pub address: String,
    pub moniker: String,
    pub power: u64,
    pub apr_percent: f64,
    pub commission_rate_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::ReporterRecord;

    #[test]
    fn display_name_prefers_the_moniker() {
        let r = ReporterRecord {
            address: "rep1qqqqqqqqqqqqqqqq".into(),
            moniker: "my-node".into(),
            power: 1,
            commission_rate: 0.1,
        };
        assert_eq!(r.display_name(), "my-node");
    }

    #[test]
    fn empty_moniker_falls_back_to_truncated_address() {
        let r = ReporterRecord {
            address: "rep1qqqqqqqqqqqqqqqq".into(),
            moniker: String::new(),
            power: 1,
            commission_rate: 0.0,
        };
        assert_eq!(r.display_name(), "rep1qqqqq...");
    }

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let r: ReporterRecord =
            serde_json::from_str(r#"{"address": "rep1abc", "power": 42}"#).unwrap();
        assert_eq!(r.moniker, "");
        assert_eq!(r.commission_rate, 0.0);
        assert_eq!(r.power, 42);
    }
}
