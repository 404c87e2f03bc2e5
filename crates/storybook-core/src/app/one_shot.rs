/// Single-shot deadline polled against a caller-supplied clock.
///
/// Arming while armed is refused, so at most one deadline is ever pending.
/// There is no cancel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OneShot {
    due_ms: Option<u64>,
}

impl OneShot {
    pub const fn new() -> Self {
        Self { due_ms: None }
    }

    /// Returns `false` and leaves the deadline untouched when already armed.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u16) -> bool {
        if self.due_ms.is_some() {
            return false;
        }

        self.due_ms = Some(now_ms.saturating_add(delay_ms as u64));
        true
    }

    pub const fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub const fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Disarms and returns `true` once `now_ms` reaches the deadline.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = OneShot::new();

        assert!(timer.arm(100, 400));
        assert_eq!(timer.due_ms(), Some(500));
        assert!(!timer.fire_if_due(499));
        assert!(timer.fire_if_due(500));
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(501));
    }

    #[test]
    fn rearm_while_pending_is_refused() {
        let mut timer = OneShot::new();

        assert!(timer.arm(0, 400));
        assert!(!timer.arm(200, 400));
        assert_eq!(timer.due_ms(), Some(400));
    }

    #[test]
    fn late_poll_still_fires() {
        let mut timer = OneShot::new();

        assert!(timer.arm(0, 10));
        assert!(timer.fire_if_due(10_000));
        assert!(timer.arm(10_000, 10));
    }
}
