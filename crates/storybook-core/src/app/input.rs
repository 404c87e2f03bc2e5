impl<PS, IN> Reader<PS, IN>
where
    PS: PageSource,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("input: provider error, dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::RotateCw => {
                let _ = self.activate_control(TurnDirection::Forward, now_ms);
            }
            InputEvent::RotateCcw => {
                let _ = self.activate_control(TurnDirection::Backward, now_ms);
            }
            InputEvent::TapRight => {
                let _ = self.tap_zone(TurnDirection::Forward, now_ms);
            }
            InputEvent::TapLeft => {
                let _ = self.tap_zone(TurnDirection::Backward, now_ms);
            }
            InputEvent::Press => debug!("input: press has no action on the spread"),
        }
    }

    /// Previous/next control. A disabled control does nothing.
    pub fn activate_control(&mut self, direction: TurnDirection, now_ms: u64) -> TurnOutcome {
        let state = match direction {
            TurnDirection::Forward => self.next_control(),
            TurnDirection::Backward => self.previous_control(),
        };

        if !state.is_enabled() {
            debug!("input: {} control disabled", direction.as_str());
            return if self.is_transitioning() {
                TurnOutcome::IgnoredInFlight
            } else {
                TurnOutcome::IgnoredAtBound
            };
        }

        self.request_turn(direction, now_ms)
    }

    /// Tap on the zone over the right page (forward) or left page (backward).
    /// A hidden zone does not react.
    pub fn tap_zone(&mut self, direction: TurnDirection, now_ms: u64) -> TurnOutcome {
        let zones = self.zones();
        let visible = match direction {
            TurnDirection::Forward => zones.right_visible,
            TurnDirection::Backward => zones.left_visible,
        };

        if !visible {
            debug!("input: {} zone hidden", direction.as_str());
            return TurnOutcome::IgnoredAtBound;
        }

        self.request_turn(direction, now_ms)
    }
}
