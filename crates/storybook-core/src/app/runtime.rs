impl<PS, IN> Reader<PS, IN>
where
    PS: PageSource,
    IN: InputProvider,
{
    pub fn new(pages: PS, input: IN, config: ReaderConfig) -> Self {
        info!(
            "reader: story ready pages={} turn_delay_ms={}",
            pages.page_count(),
            config.turn_delay_ms
        );

        Self {
            pages,
            input,
            config,
            current_page: 0,
            direction: TurnDirection::Forward,
            commit: OneShot::new(),
            pending_redraw: true,
            transition: None,
        }
    }

    /// Advances the reader to `now_ms`.
    ///
    /// A commit that came due since the last tick is applied before new
    /// input is read, so an event polled after the deadline sees the
    /// settled page.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.fire_due_commit(now_ms);
        self.process_inputs(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn config(&self) -> ReaderConfig {
        self.config
    }
}
