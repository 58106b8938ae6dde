use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    contact::{controller::DEFAULT_RESTORE_MS, NotificationTiming, RelayConfig},
    motion::{CounterConfig, RevealOptions, ScrollConfig},
};

/// Tunables for the page's interaction layer. Missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealOptions,
    pub scroll: ScrollConfig,
    pub counter: CounterConfig,
    pub skill_bar_delay_ms: u64,
    /// Bars also fill this long after the page has loaded.
    pub skill_bar_load_delay_ms: u64,
    pub submit_restore_ms: u64,
    pub notification: NotificationTiming,
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealOptions::default(),
            scroll: ScrollConfig::default(),
            counter: CounterConfig::default(),
            skill_bar_delay_ms: 200,
            skill_bar_load_delay_ms: 500,
            submit_restore_ms: DEFAULT_RESTORE_MS,
            notification: NotificationTiming::default(),
            relay: RelayConfig::from_env(),
        }
    }
}

impl SiteConfig {
    pub fn skill_bar_delay(&self) -> Duration {
        Duration::from_millis(self.skill_bar_delay_ms)
    }

    pub fn skill_bar_load_delay(&self) -> Duration {
        Duration::from_millis(self.skill_bar_load_delay_ms)
    }

    pub fn submit_restore(&self) -> Duration {
        Duration::from_millis(self.submit_restore_ms)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = SiteConfig::default();
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.scroll.scrolled_after, 100.0);
        assert_eq!(config.scroll.back_to_top_after, 500.0);
        assert_eq!(config.counter.duration_ms, 2000.0);
        assert_eq!(config.skill_bar_delay(), Duration::from_millis(200));
        assert_eq!(config.submit_restore(), Duration::from_secs(3));
        assert_eq!(config.notification.hold_ms, 5000);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config: SiteConfig = serde_json::from_value(json!({
            "scroll": { "orb_speed": 0.2 },
            "submit_restore_ms": 1500
        }))
        .unwrap();
        assert_eq!(config.scroll.orb_speed, 0.2);
        assert_eq!(config.scroll.hero_speed, 0.5);
        assert_eq!(config.submit_restore(), Duration::from_millis(1500));
        assert_eq!(config.counter, CounterConfig::default());
    }
}
