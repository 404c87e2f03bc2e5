//! App-level view models and animation metadata.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisualStyle {
    /// Light text on a dark panel.
    pub inverted: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    TurnForward,
    TurnBackward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// One visible page of the spread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageView<'a> {
    /// 1-based page number.
    pub number: u16,
    pub content: &'a str,
    pub title: Option<&'a str>,
    pub is_last_page: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlState {
    Enabled,
    Disabled,
}

impl ControlState {
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Navigation bar under the spread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationView {
    pub previous: ControlState,
    pub next: ControlState,
    /// 1-based index of the right-hand page.
    pub current: u16,
    pub total: u16,
}

/// Full-height tap zones over each page. A hidden zone does not react.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZonesView {
    pub left_visible: bool,
    pub right_visible: bool,
}

/// App-level view model consumed by board/HAL renderer.
pub enum Screen<'a> {
    Spread {
        title: &'a str,
        byline: &'a str,
        left: Option<PageView<'a>>,
        right: Option<PageView<'a>>,
        navigation: NavigationView,
        zones: ZonesView,
        style: VisualStyle,
        animation: Option<AnimationFrame>,
    },
}
