/// Poll-count debouncer for a single switch.
///
/// A new level is accepted once it has been read on `threshold` consecutive
/// polls after it first appeared.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    raw: bool,
    stable: bool,
    stable_count: u8,
    threshold: u8,
}

impl Debouncer {
    pub const fn new(initial: bool, threshold: u8) -> Self {
        Self {
            raw: initial,
            stable: initial,
            stable_count: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    pub const fn is_active(&self) -> bool {
        self.stable
    }

    /// Feeds one sample. Returns the new stable level when it changes.
    pub fn update(&mut self, level: bool) -> Option<bool> {
        if level == self.raw {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.raw = level;
            self.stable_count = 0;
        }

        if self.stable_count >= self.threshold && self.stable != self.raw {
            self.stable = self.raw;
            return Some(self.stable);
        }

        None
    }
}
