impl<PS, IN> Reader<PS, IN>
where
    PS: PageSource,
    IN: InputProvider,
{
    pub fn page_count(&self) -> u16 {
        self.pages.page_count()
    }

    pub fn current_page_index(&self) -> u16 {
        self.current_page
    }

    pub fn is_transitioning(&self) -> bool {
        self.commit.is_armed()
    }

    /// Direction of the in-flight turn, or of the last accepted one.
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    /// Deadline of the pending commit, when a turn is in flight.
    pub fn pending_commit_ms(&self) -> Option<u64> {
        self.commit.due_ms()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_index()
    }

    fn last_index(&self) -> u16 {
        self.page_count().saturating_sub(1)
    }

    /// Page before the current one; absent on the first page.
    pub fn left_page(&self) -> Option<Page<'_>> {
        if self.current_page == 0 {
            return None;
        }

        self.pages.page_at(self.current_page - 1)
    }

    pub fn right_page(&self) -> Option<Page<'_>> {
        self.pages.page_at(self.current_page)
    }

    pub fn previous_control(&self) -> ControlState {
        ControlState::from_enabled(!self.is_first_page() && !self.is_transitioning())
    }

    pub fn next_control(&self) -> ControlState {
        ControlState::from_enabled(!self.is_last_page() && !self.is_transitioning())
    }

    /// Zones are hidden at the matching bound but stay shown mid-turn.
    pub fn zones(&self) -> ZonesView {
        ZonesView {
            left_visible: !self.is_first_page(),
            right_visible: !self.is_last_page(),
        }
    }

    pub fn navigation(&self) -> NavigationView {
        NavigationView {
            previous: self.previous_control(),
            next: self.next_control(),
            current: self.current_page.saturating_add(1),
            total: self.page_count(),
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let left = if self.current_page == 0 {
            None
        } else {
            self.page_view(self.current_page - 1)
        };

        f(Screen::Spread {
            title: self.pages.title(),
            byline: self.pages.byline(),
            left,
            right: self.page_view(self.current_page),
            navigation: self.navigation(),
            zones: self.zones(),
            style: self.config.style,
            animation: self.transition_frame(now_ms),
        });
    }

    fn page_view(&self, index: u16) -> Option<PageView<'_>> {
        self.pages.page_at(index).map(|page| PageView {
            number: index.saturating_add(1),
            content: page.content,
            title: page.title,
            is_last_page: page.is_last_page,
        })
    }
}
