use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::schedule::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Navbar switches to its compact style past this offset.
    pub scrolled_after: f64,
    pub back_to_top_after: f64,
    /// How far ahead of a section's top it already counts as active.
    pub section_lookahead: f64,
    /// Height of the fixed navbar, subtracted from anchor targets.
    pub anchor_offset: f64,
    pub hero_speed: f64,
    pub orb_speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 100.0,
            back_to_top_after: 500.0,
            section_lookahead: 100.0,
            anchor_offset: 70.0,
            hero_speed: 0.5,
            orb_speed: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub scrolled: bool,
    pub back_to_top: bool,
}

impl ScrollConfig {
    pub fn chrome(&self, offset: f64) -> ChromeState {
        ChromeState {
            scrolled: offset > self.scrolled_after,
            back_to_top: offset > self.back_to_top_after,
        }
    }

    /// Scroll position for an in-page anchor whose target sits at `offset_top`.
    pub fn anchor_top(&self, offset_top: f64) -> f64 {
        offset_top - self.anchor_offset
    }

    pub fn speed(&self, layer: ParallaxLayer) -> f64 {
        match layer {
            ParallaxLayer::HeroBackground => self.hero_speed,
            ParallaxLayer::GradientOrb => self.orb_speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxLayer {
    HeroBackground,
    GradientOrb,
}

pub fn parallax_transform(offset: f64, speed: f64) -> String {
    let y = 0.0 - offset * speed;
    format!("translateY({y}px)")
}

/// Allows at most one pending animation-frame request.
#[derive(Debug, Default)]
pub struct FrameGate {
    in_flight: Cell<bool>,
}

impl FrameGate {
    /// Claims the gate. False while a frame is already pending.
    pub fn try_acquire(&self) -> bool {
        !self.in_flight.replace(true)
    }

    pub fn release(&self) {
        self.in_flight.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionMark {
    pub id: String,
    pub top: f64,
}

/// The last section, in document order, whose top minus `lookahead` has
/// been scrolled past.
pub fn active_section(sections: &[SectionMark], offset: f64, lookahead: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if offset >= section.top - lookahead {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// A nav link is active when its `#id` href names the active section.
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    matches!((href.strip_prefix('#'), active), (Some(id), Some(active)) if id == active)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub chrome: ChromeState,
    pub active: Option<String>,
    /// Offset change since the previous scroll event.
    pub delta: f64,
    /// Whether this event scheduled a parallax frame.
    pub parallax_scheduled: bool,
}

/// Scroll state for the page: last offset and the parallax frame gate.
#[derive(Debug)]
pub struct ScrollTracker {
    config: ScrollConfig,
    last_offset: Cell<f64>,
    gate: Rc<FrameGate>,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            last_offset: Cell::new(0.0),
            gate: Rc::new(FrameGate::default()),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }

    /// Handles one scroll event. Chrome and active section are recomputed
    /// right away; `parallax` runs on the next frame unless one is pending.
    pub fn on_scroll<S, F>(
        &self,
        offset: f64,
        sections: &[SectionMark],
        scheduler: &S,
        parallax: F,
    ) -> ScrollUpdate
    where
        S: Scheduler,
        F: FnOnce() + 'static,
    {
        let delta = offset - self.last_offset.replace(offset);
        let parallax_scheduled = self.gate.try_acquire();
        if parallax_scheduled {
            let gate = self.gate.clone();
            scheduler.next_frame(Box::new(move || {
                parallax();
                gate.release();
            }));
        }
        ScrollUpdate {
            chrome: self.config.chrome(offset),
            active: active_section(sections, offset, self.config.section_lookahead)
                .map(str::to_string),
            delta,
            parallax_scheduled,
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::schedule::testing::ManualScheduler;

    fn sections(marks: &[(&str, f64)]) -> Vec<SectionMark> {
        marks
            .iter()
            .map(|(id, top)| SectionMark {
                id: id.to_string(),
                top: *top,
            })
            .collect()
    }

    #[test]
    fn navbar_threshold_is_strict() {
        let config = ScrollConfig::default();
        assert!(!config.chrome(0.0).scrolled);
        assert!(!config.chrome(100.0).scrolled);
        assert!(config.chrome(100.5).scrolled);
        assert!(config.chrome(5000.0).scrolled);
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        let config = ScrollConfig::default();
        assert!(!config.chrome(499.0).back_to_top);
        assert!(!config.chrome(500.0).back_to_top);
        assert!(config.chrome(501.0).back_to_top);
        assert_eq!(
            config.chrome(300.0),
            ChromeState {
                scrolled: true,
                back_to_top: false
            }
        );
    }

    #[test]
    fn parallax_moves_against_scroll() {
        let config = ScrollConfig::default();
        assert_eq!(
            parallax_transform(200.0, config.speed(ParallaxLayer::HeroBackground)),
            "translateY(-100px)"
        );
        assert_eq!(
            parallax_transform(100.0, config.speed(ParallaxLayer::GradientOrb)),
            "translateY(-30px)"
        );
    }

    #[test]
    fn later_section_wins_tie() {
        let marks = sections(&[("home", 0.0), ("about", 700.0), ("skills", 720.0)]);
        assert_eq!(active_section(&marks, 650.0, 100.0), Some("skills"));
        assert_eq!(active_section(&marks, 599.0, 100.0), Some("home"));
        assert_eq!(active_section(&marks, 600.0, 100.0), Some("about"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let marks = sections(&[("about", 400.0)]);
        assert_eq!(active_section(&marks, 0.0, 100.0), None);
        assert_eq!(active_section(&[], 1000.0, 100.0), None);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let marks = sections(&[("home", 0.0), ("about", 500.0), ("contact", 520.0)]);
        let links = ["#home", "#about", "#contact"];
        let active = active_section(&marks, 480.0, 100.0);
        let flags: Vec<bool> = links.iter().map(|l| is_link_active(l, active)).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert!(!is_link_active("/resume.pdf", Some("resume.pdf")));
        assert!(!is_link_active("#home", None));
    }

    #[test]
    fn anchor_lands_below_navbar() {
        assert_eq!(ScrollConfig::default().anchor_top(1070.0), 1000.0);
    }

    #[test]
    fn scroll_burst_coalesces_into_one_frame() {
        let scheduler = ManualScheduler::new();
        let tracker = ScrollTracker::default();
        let runs = Rc::new(RefCell::new(0));

        let mut scheduled = 0;
        for offset in [10.0, 20.0, 30.0, 40.0] {
            let runs = runs.clone();
            let update = tracker.on_scroll(offset, &[], &scheduler, move || {
                *runs.borrow_mut() += 1
            });
            scheduled += update.parallax_scheduled as usize;
        }
        assert_eq!(scheduled, 1);
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.run_frame();
        assert_eq!(*runs.borrow(), 1);

        let runs_after = runs.clone();
        let update = tracker.on_scroll(50.0, &[], &scheduler, move || {
            *runs_after.borrow_mut() += 1
        });
        assert!(update.parallax_scheduled);
        scheduler.run_frame();
        assert_eq!(*runs.borrow(), 2);
    }

    #[test]
    fn scroll_update_reports_delta_and_state() {
        let scheduler = ManualScheduler::new();
        let tracker = ScrollTracker::default();
        let marks = sections(&[("home", 0.0), ("about", 800.0)]);

        let first = tracker.on_scroll(750.0, &marks, &scheduler, || {});
        assert_eq!(first.delta, 750.0);
        assert_eq!(first.active.as_deref(), Some("about"));
        assert!(first.chrome.scrolled && first.chrome.back_to_top);

        let second = tracker.on_scroll(50.0, &marks, &scheduler, || {});
        assert_eq!(second.delta, -700.0);
        assert_eq!(second.active.as_deref(), Some("home"));
        assert_eq!(tracker.last_offset(), 50.0);
    }

    #[test]
    fn gate_allows_one_claim_until_released() {
        let gate = FrameGate::default();
        assert!(gate.try_acquire());
        assert!(gate.is_pending());
        assert!(!gate.try_acquire());
        gate.release();
        assert!(gate.try_acquire());
    }
}
