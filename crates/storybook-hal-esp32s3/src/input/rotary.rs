use embedded_hal::digital::InputPin;

use storybook_core::input::{InputEvent, InputProvider};

use super::debounce::Debouncer;

// Quadrature transitions indexed by (prev_ab << 2) | curr_ab.
// Valid single-step transitions count +1/-1; skipped states count 0.
const QUADRATURE_TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

#[derive(Debug, Clone, Copy)]
pub struct RotaryConfig {
    direction_inverted: bool,
    button_active_low: bool,
    button_debounce_polls: u8,
    transitions_per_step: u8,
}

impl Default for RotaryConfig {
    fn default() -> Self {
        Self {
            direction_inverted: false,
            button_active_low: true,
            button_debounce_polls: 3,
            transitions_per_step: 4,
        }
    }
}

impl RotaryConfig {
    pub const fn with_direction_inverted(mut self, direction_inverted: bool) -> Self {
        self.direction_inverted = direction_inverted;
        self
    }

    pub const fn with_button_active_low(mut self, button_active_low: bool) -> Self {
        self.button_active_low = button_active_low;
        self
    }

    pub const fn with_button_debounce_polls(mut self, button_debounce_polls: u8) -> Self {
        self.button_debounce_polls = button_debounce_polls;
        self
    }

    pub const fn with_transitions_per_step(mut self, transitions_per_step: u8) -> Self {
        self.transitions_per_step = transitions_per_step;
        self
    }
}

/// Detent direction reported by [`QuadratureDecoder`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    Positive,
    Negative,
}

/// Accumulates A/B transitions into detent steps.
#[derive(Debug, Clone, Copy)]
pub struct QuadratureDecoder {
    prev_ab: u8,
    accum: i8,
    transitions_per_step: i8,
}

impl QuadratureDecoder {
    pub fn new(a_high: bool, b_high: bool, transitions_per_step: u8) -> Self {
        Self {
            prev_ab: ab_from_levels(a_high, b_high),
            accum: 0,
            transitions_per_step: transitions_per_step.clamp(1, i8::MAX as u8) as i8,
        }
    }

    pub fn update(&mut self, a_high: bool, b_high: bool) -> Option<Step> {
        let curr_ab = ab_from_levels(a_high, b_high);
        if curr_ab == self.prev_ab {
            return None;
        }

        let idx = ((self.prev_ab << 2) | curr_ab) as usize;
        self.prev_ab = curr_ab;
        self.accum = self.accum.saturating_add(QUADRATURE_TRANSITIONS[idx]);

        if self.accum >= self.transitions_per_step {
            self.accum = 0;
            return Some(Step::Positive);
        }
        if self.accum <= -self.transitions_per_step {
            self.accum = 0;
            return Some(Step::Negative);
        }

        None
    }
}

#[derive(Debug)]
pub enum RotaryInputError<ClkErr, DtErr, SwErr> {
    Clk(ClkErr),
    Dt(DtErr),
    Sw(SwErr),
}

type RotaryResult<ClkErr, DtErr, SwErr, T> = Result<T, RotaryInputError<ClkErr, DtErr, SwErr>>;

/// Rotary encoder with push switch. Clockwise detents turn forward.
#[derive(Debug)]
pub struct RotaryInput<CLK, DT, SW> {
    clk: CLK,
    dt: DT,
    sw: SW,
    config: RotaryConfig,
    decoder: QuadratureDecoder,
    button: Debouncer,
    pending_event: Option<InputEvent>,
}

impl<CLK, DT, SW> RotaryInput<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    pub fn new(
        mut clk: CLK,
        mut dt: DT,
        mut sw: SW,
        config: RotaryConfig,
    ) -> RotaryResult<CLK::Error, DT::Error, SW::Error, Self> {
        let clk_high = clk.is_high().map_err(RotaryInputError::Clk)?;
        let dt_high = dt.is_high().map_err(RotaryInputError::Dt)?;
        let sw_high = sw.is_high().map_err(RotaryInputError::Sw)?;

        let pressed = level_active(sw_high, config.button_active_low);

        Ok(Self {
            clk,
            dt,
            sw,
            config,
            decoder: QuadratureDecoder::new(clk_high, dt_high, config.transitions_per_step),
            button: Debouncer::new(pressed, config.button_debounce_polls),
            pending_event: None,
        })
    }

    fn poll_button(
        &mut self,
    ) -> RotaryResult<CLK::Error, DT::Error, SW::Error, Option<InputEvent>> {
        let sw_high = self.sw.is_high().map_err(RotaryInputError::Sw)?;
        let pressed = level_active(sw_high, self.config.button_active_low);

        Ok(match self.button.update(pressed) {
            Some(true) => Some(InputEvent::Press),
            _ => None,
        })
    }

    fn poll_rotation(
        &mut self,
    ) -> RotaryResult<CLK::Error, DT::Error, SW::Error, Option<InputEvent>> {
        let clk_high = self.clk.is_high().map_err(RotaryInputError::Clk)?;
        let dt_high = self.dt.is_high().map_err(RotaryInputError::Dt)?;

        Ok(self
            .decoder
            .update(clk_high, dt_high)
            .map(|step| self.rotation_event(step)))
    }

    fn rotation_event(&self, step: Step) -> InputEvent {
        let clockwise = (step == Step::Positive) != self.config.direction_inverted;

        if clockwise {
            InputEvent::RotateCw
        } else {
            InputEvent::RotateCcw
        }
    }
}

impl<CLK, DT, SW> InputProvider for RotaryInput<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    type Error = RotaryInputError<CLK::Error, DT::Error, SW::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending_event.take() {
            return Ok(Some(event));
        }

        let button_event = self.poll_button()?;
        let rotation_event = self.poll_rotation()?;

        match (button_event, rotation_event) {
            (Some(button), Some(rotation)) => {
                self.pending_event = Some(rotation);
                Ok(Some(button))
            }
            (button, rotation) => Ok(button.or(rotation)),
        }
    }
}

#[inline]
fn ab_from_levels(a_high: bool, b_high: bool) -> u8 {
    ((a_high as u8) << 1) | (b_high as u8)
}

#[inline]
pub(crate) fn level_active(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}
