use serde::{Deserialize, Serialize};

use super::Sink;
use crate::schedule::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Assumed frame interval used to size the per-frame increment.
    pub frame_ms: f64,
    /// Targets at or above this get a trailing `+` once finished.
    pub plus_suffix_from: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            frame_ms: 16.0,
            plus_suffix_from: 1000,
        }
    }
}

/// Parses a counter's `data-target` attribute the way `parseInt` would:
/// leading whitespace and sign, then digits, ignoring anything after them.
pub fn parse_target(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = rest
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| &rest[..=i])?;
    digits.parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    Finished(String),
}

impl CounterFrame {
    pub fn text(&self) -> &str {
        match self {
            Self::Running(s) | Self::Finished(s) => s,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    plus_suffix_from: i64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, config: &CounterConfig) -> Self {
        let frames = config.duration_ms / config.frame_ms;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            plus_suffix_from: config.plus_suffix_from,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Advances one frame. Targets of zero or below finish on the first frame.
    pub fn advance(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.final_text());
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running((self.current.floor() as i64).to_string())
        } else {
            self.finished = true;
            CounterFrame::Finished(self.final_text())
        }
    }

    pub fn final_text(&self) -> String {
        if self.target >= self.plus_suffix_from {
            format!("{}+", self.target)
        } else {
            self.target.to_string()
        }
    }
}

/// Renders a frame now and keeps requesting frames until the counter finishes.
pub fn run_counter<S, D>(scheduler: S, mut animation: CounterAnimation, sink: D)
where
    S: Scheduler + Clone + 'static,
    D: Sink,
{
    let frame = animation.advance();
    let finished = frame.is_finished();
    sink.apply(frame.text().to_string());
    if !finished {
        let next = scheduler.clone();
        scheduler.next_frame(Box::new(move || run_counter(next, animation, sink)));
    }
}

/// All counters in the stats block, started together at most once.
#[derive(Debug, Clone)]
pub struct CounterGroup<D> {
    started: bool,
    config: CounterConfig,
    counters: Vec<(i64, D)>,
}

impl<D> Default for CounterGroup<D> {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl<D> CounterGroup<D> {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            started: false,
            config,
            counters: Vec::new(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl<D: Sink> CounterGroup<D> {
    /// Counters without a usable target keep whatever text they render.
    pub fn register(&mut self, target: Option<i64>, sink: D) {
        match target {
            Some(target) => self.counters.push((target, sink)),
            None => log::warn!("stat counter without a numeric target skipped"),
        }
    }

    /// Starts every registered counter. Returns false if already started.
    pub fn start<S>(&mut self, scheduler: &S) -> bool
    where
        S: Scheduler + Clone + 'static,
    {
        if self.started {
            return false;
        }
        self.started = true;
        log::debug!("starting {} stat counters", self.counters.len());
        for (target, sink) in &self.counters {
            let animation = CounterAnimation::new(*target, &self.config);
            run_counter(scheduler.clone(), animation, sink.clone());
        }
        true
    }
}
