//! Input abstraction layer.

pub mod mock;

/// Logical actions consumed by the reader.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Encoder step clockwise: the "next" control.
    RotateCw,
    /// Encoder step counter-clockwise: the "previous" control.
    RotateCcw,
    Press,
    /// Tap on the zone covering the left page.
    TapLeft,
    /// Tap on the zone covering the right page.
    TapRight,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
