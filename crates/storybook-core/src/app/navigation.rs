impl<PS, IN> Reader<PS, IN>
where
    PS: PageSource,
    IN: InputProvider,
{
    /// Starts a page turn. The page index only changes when the deferred
    /// commit fires `turn_delay_ms` later, from [`Reader::tick`].
    pub fn request_turn(&mut self, direction: TurnDirection, now_ms: u64) -> TurnOutcome {
        if self.commit.is_armed() {
            debug!(
                "turn: dropped {} request, turn in flight until {:?}",
                direction.as_str(),
                self.commit.due_ms()
            );
            return TurnOutcome::IgnoredInFlight;
        }

        let at_bound = match direction {
            TurnDirection::Forward => self.is_last_page(),
            TurnDirection::Backward => self.is_first_page(),
        };
        if at_bound {
            debug!(
                "turn: dropped {} request at page {}/{}",
                direction.as_str(),
                self.current_page.saturating_add(1),
                self.page_count()
            );
            return TurnOutcome::IgnoredAtBound;
        }

        if !self.commit.arm(now_ms, self.config.turn_delay_ms) {
            return TurnOutcome::IgnoredInFlight;
        }

        self.direction = direction;
        self.start_transition(direction.animation(), now_ms, self.config.turn_delay_ms);
        self.pending_redraw = true;
        info!(
            "turn: {} from page {}/{} commit_at_ms={}",
            direction.as_str(),
            self.current_page.saturating_add(1),
            self.page_count(),
            now_ms.saturating_add(self.config.turn_delay_ms as u64)
        );

        TurnOutcome::Accepted
    }

    fn fire_due_commit(&mut self, now_ms: u64) {
        if !self.commit.fire_if_due(now_ms) {
            return;
        }

        let last_index = self.last_index();
        match self.direction {
            TurnDirection::Forward if self.current_page < last_index => self.current_page += 1,
            TurnDirection::Backward if self.current_page > 0 => self.current_page -= 1,
            _ => {}
        }

        self.transition = None;
        self.pending_redraw = true;
        info!(
            "turn: settled on page {}/{}",
            self.current_page.saturating_add(1),
            self.page_count()
        );
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }
}
