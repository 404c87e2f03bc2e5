use embedded_hal::digital::InputPin;
use log::debug;

use storybook_core::input::{InputEvent, InputProvider};

use super::{debounce::Debouncer, rotary::level_active};

#[derive(Debug, Clone, Copy)]
pub struct EdgePadConfig {
    active_low: bool,
    debounce_polls: u8,
}

impl Default for EdgePadConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl EdgePadConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug)]
pub enum EdgePadError<LeftErr, RightErr> {
    Left(LeftErr),
    Right(RightErr),
}

/// Touch or push pads on the outer edges of the spread. A debounced press
/// on either pad reports a tap on that side.
#[derive(Debug)]
pub struct EdgePads<L, R> {
    left: L,
    right: R,
    config: EdgePadConfig,
    left_state: Debouncer,
    right_state: Debouncer,
    pending_event: Option<InputEvent>,
}

impl<L, R> EdgePads<L, R>
where
    L: InputPin,
    R: InputPin,
{
    pub fn new(
        mut left: L,
        mut right: R,
        config: EdgePadConfig,
    ) -> Result<Self, EdgePadError<L::Error, R::Error>> {
        let left_high = left.is_high().map_err(EdgePadError::Left)?;
        let right_high = right.is_high().map_err(EdgePadError::Right)?;

        Ok(Self {
            left,
            right,
            config,
            left_state: Debouncer::new(
                level_active(left_high, config.active_low),
                config.debounce_polls,
            ),
            right_state: Debouncer::new(
                level_active(right_high, config.active_low),
                config.debounce_polls,
            ),
            pending_event: None,
        })
    }
}

impl<L, R> InputProvider for EdgePads<L, R>
where
    L: InputPin,
    R: InputPin,
{
    type Error = EdgePadError<L::Error, R::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending_event.take() {
            return Ok(Some(event));
        }

        let left_high = self.left.is_high().map_err(EdgePadError::Left)?;
        let right_high = self.right.is_high().map_err(EdgePadError::Right)?;

        let left_tap = self
            .left_state
            .update(level_active(left_high, self.config.active_low))
            == Some(true);
        let right_tap = self
            .right_state
            .update(level_active(right_high, self.config.active_low))
            == Some(true);

        if left_tap || right_tap {
            debug!("edge pads: left={} right={}", left_tap, right_tap);
        }

        match (left_tap, right_tap) {
            (true, true) => {
                self.pending_event = Some(InputEvent::TapRight);
                Ok(Some(InputEvent::TapLeft))
            }
            (true, false) => Ok(Some(InputEvent::TapLeft)),
            (false, true) => Ok(Some(InputEvent::TapRight)),
            (false, false) => Ok(None),
        }
    }
}
