//! Page-turn state machine for the two-page spread.

use log::{debug, info};

use crate::{
    content::{Page, PageSource},
    input::{InputEvent, InputProvider},
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, ControlState, NavigationView, PageView,
        Screen, VisualStyle, ZonesView,
    },
};

mod one_shot;

pub use one_shot::OneShot;

/// Delay between an accepted turn and the page index changing.
pub const DEFAULT_TURN_DELAY_MS: u16 = 400;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnDirection {
    Forward,
    Backward,
}

impl TurnDirection {
    fn animation(self) -> AnimationKind {
        match self {
            Self::Forward => AnimationKind::TurnForward,
            Self::Backward => AnimationKind::TurnBackward,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// What happened to a turn request. Rejections are not errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnOutcome {
    Accepted,
    /// Another turn is in flight; the request was dropped, not queued.
    IgnoredInFlight,
    /// Already on the first (backward) or last (forward) page.
    IgnoredAtBound,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub turn_delay_ms: u16,
    pub style: VisualStyle,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            turn_delay_ms: DEFAULT_TURN_DELAY_MS,
            style: VisualStyle::default(),
        }
    }
}

impl ReaderConfig {
    pub const fn with_turn_delay_ms(mut self, turn_delay_ms: u16) -> Self {
        self.turn_delay_ms = turn_delay_ms;
        self
    }

    pub const fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }
}

pub struct Reader<PS, IN>
where
    PS: PageSource,
    IN: InputProvider,
{
    pages: PS,
    input: IN,
    config: ReaderConfig,
    current_page: u16,
    direction: TurnDirection,
    commit: OneShot,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
}

include!("runtime.rs");
include!("input.rs");
include!("navigation.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
