use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Intersection observer settings shared by every revealable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that has to be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport. The negative bottom margin fires
    /// the reveal slightly before the element is fully on screen.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

/// What a reveal does besides adding the `visible` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Plain,
    /// The stats container; starts the counters.
    Stats,
    /// The skills section; fills the progress bars.
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(usize);

#[derive(Debug)]
struct ObservedElement {
    kind: RevealKind,
    revealed: bool,
}

/// Tracks the one-time "revealed" flag of every observed element.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    elements: Vec<ObservedElement>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, kind: RevealKind) -> RevealHandle {
        self.elements.push(ObservedElement {
            kind,
            revealed: false,
        });
        RevealHandle(self.elements.len() - 1)
    }

    /// Registers only elements that exist on the page.
    pub fn observe_present<T>(&mut self, element: Option<T>, kind: RevealKind) -> Option<(T, RevealHandle)> {
        element.map(|el| (el, self.observe(kind)))
    }

    /// Feeds one intersection change. Returns the element's kind the first
    /// time it becomes visible and `None` for every later change.
    pub fn intersect(&mut self, handle: RevealHandle, is_intersecting: bool) -> Option<RevealKind> {
        let element = self.elements.get_mut(handle.0)?;
        if !is_intersecting || element.revealed {
            return None;
        }
        element.revealed = true;
        log::debug!("revealed element {} ({:?})", handle.0, element.kind);
        Some(element.kind)
    }

    pub fn is_revealed(&self, handle: RevealHandle) -> bool {
        self.elements
            .get(handle.0)
            .map(|e| e.revealed)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::motion::{counter::CounterGroup, skill_bar::SkillBars, testing::RecordingSink};
    use crate::schedule::testing::ManualScheduler;

    #[test]
    fn reveal_fires_once_per_element() {
        let mut registry = RevealRegistry::new();
        let card = registry.observe(RevealKind::Plain);
        assert!(!registry.is_revealed(card));

        assert_eq!(registry.intersect(card, false), None);
        assert_eq!(registry.intersect(card, true), Some(RevealKind::Plain));
        assert!(registry.is_revealed(card));
        assert_eq!(registry.intersect(card, false), None);
        assert_eq!(registry.intersect(card, true), None);
    }

    #[test]
    fn elements_reveal_independently() {
        let mut registry = RevealRegistry::new();
        let a = registry.observe(RevealKind::Plain);
        let b = registry.observe(RevealKind::Skills);

        assert_eq!(registry.intersect(a, true), Some(RevealKind::Plain));
        assert!(!registry.is_revealed(b));
        assert_eq!(registry.intersect(b, true), Some(RevealKind::Skills));
    }

    #[test]
    fn missing_container_is_skipped() {
        let mut registry = RevealRegistry::new();
        assert!(registry
            .observe_present(None::<()>, RevealKind::Stats)
            .is_none());
        assert!(registry.is_empty());

        let (el, handle) = registry
            .observe_present(Some("about-stats"), RevealKind::Stats)
            .expect("present element is registered");
        assert_eq!(el, "about-stats");
        assert_eq!(registry.intersect(handle, true), Some(RevealKind::Stats));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn repeated_stats_intersection_starts_counters_once() {
        let scheduler = ManualScheduler::new();
        let mut registry = RevealRegistry::new();
        let stats = registry.observe(RevealKind::Stats);
        let mut counters = CounterGroup::default();
        let sink = RecordingSink::default();
        counters.register(Some(42), sink.clone());

        let mut starts = 0;
        for _ in 0..2 {
            if let Some(RevealKind::Stats) = registry.intersect(stats, true) {
                if counters.start(&scheduler) {
                    starts += 1;
                }
            }
        }
        assert_eq!(starts, 1);
        scheduler.run_frames_until_idle(1000);
        assert_eq!(sink.last().as_deref(), Some("42"));
    }

    #[test]
    fn repeated_skills_intersection_animates_bars_once() {
        let scheduler = ManualScheduler::new();
        let mut registry = RevealRegistry::new();
        let skills = registry.observe(RevealKind::Skills);
        let mut bars = SkillBars::new(Duration::from_millis(200));
        let sink = RecordingSink::default();
        bars.register(Some("90"), sink.clone());

        for _ in 0..2 {
            if let Some(RevealKind::Skills) = registry.intersect(skills, true) {
                bars.animate(&scheduler);
            }
        }
        scheduler.advance_ms(1000);
        assert_eq!(sink.values(), vec!["90%".to_string()]);
    }
}
