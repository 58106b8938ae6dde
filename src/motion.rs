pub mod counter;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod skill_bar;

pub use counter::{CounterAnimation, CounterConfig, CounterFrame, CounterGroup};
pub use reveal::{RevealHandle, RevealKind, RevealOptions, RevealRegistry};
pub use scroll::{ChromeState, FrameGate, ParallaxLayer, ScrollConfig, ScrollTracker, SectionMark};
pub use skill_bar::SkillBars;

/// Where an animation writes its output: counter text, a bar width, a transform.
pub trait Sink: Clone + 'static {
    fn apply(&self, value: String);
}
