use std::time::Duration;

use super::Sink;
use crate::schedule::Scheduler;

/// Reads a bar's `data-percent`. Missing or malformed values become 0 and
/// anything outside 0..=100 is clamped.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    match raw.map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
        Some(p) if p.is_finite() => p.clamp(0.0, 100.0),
        _ => {
            log::warn!("skill bar percentage {raw:?} is not a number, using 0");
            0.0
        }
    }
}

pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

/// Progress bars in the skills section.
///
/// `animate` is not guarded: a second call schedules the same widths again.
#[derive(Debug, Clone)]
pub struct SkillBars<D> {
    delay: Duration,
    bars: Vec<(f64, D)>,
}

impl<D> SkillBars<D> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            bars: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

impl<D: Sink> SkillBars<D> {
    pub fn register(&mut self, percent: Option<&str>, sink: D) {
        self.bars.push((parse_percent(percent), sink));
    }

    pub fn animate<S: Scheduler>(&self, scheduler: &S) {
        for (percent, sink) in &self.bars {
            let width = width_style(*percent);
            let sink = sink.clone();
            scheduler.after(self.delay, Box::new(move || sink.apply(width)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::RecordingSink;
    use crate::schedule::testing::ManualScheduler;

    #[test]
    fn widths_apply_after_delay() {
        let scheduler = ManualScheduler::new();
        let rust = RecordingSink::default();
        let css = RecordingSink::default();
        let mut bars = SkillBars::new(Duration::from_millis(200));
        bars.register(Some("95"), rust.clone());
        bars.register(Some("72.5"), css.clone());

        bars.animate(&scheduler);
        scheduler.advance_ms(199);
        assert!(rust.values().is_empty());
        scheduler.advance_ms(1);
        assert_eq!(rust.values(), vec!["95%"]);
        assert_eq!(css.values(), vec!["72.5%"]);
    }

    #[test]
    fn second_call_reapplies_same_widths() {
        let scheduler = ManualScheduler::new();
        let sink = RecordingSink::default();
        let mut bars = SkillBars::new(Duration::from_millis(200));
        bars.register(Some("80"), sink.clone());

        bars.animate(&scheduler);
        bars.animate(&scheduler);
        scheduler.advance_ms(200);
        assert_eq!(sink.values(), vec!["80%", "80%"]);
    }

    #[test]
    fn missing_or_bad_percent_defaults_to_zero() {
        assert_eq!(parse_percent(None), 0.0);
        assert_eq!(parse_percent(Some("")), 0.0);
        assert_eq!(parse_percent(Some("lots")), 0.0);
        assert_eq!(parse_percent(Some("NaN")), 0.0);
        assert_eq!(width_style(parse_percent(None)), "0%");
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(parse_percent(Some("140")), 100.0);
        assert_eq!(parse_percent(Some("-5")), 0.0);
        assert_eq!(parse_percent(Some(" 60 ")), 60.0);
    }
}
