//! Four-phase typing loop behind the hero subtitle.
//!
//! The machine is deterministic: callers pass a unit random value when asking
//! for the next delay, and drive [`TypingCycler::tick`] from a timer.

pub const TYPE_DELAY_MS: (u32, u32) = (100, 200);
pub const DELETE_DELAY_MS: (u32, u32) = (50, 100);
pub const PAUSE_FULL_MS: u32 = 2_000;
pub const PAUSE_EMPTY_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypingCycler {
    roles: &'static [&'static str],
    role_index: usize,
    prefix_len: usize,
    phase: Phase,
}

impl TypingCycler {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            role_index: 0,
            prefix_len: 0,
            phase: Phase::Typing,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn current_role(&self) -> &'static str {
        self.roles.get(self.role_index).copied().unwrap_or("")
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// The visible prefix, cut on a char boundary.
    pub fn displayed(&self) -> &'static str {
        let role = self.current_role();
        match role.char_indices().nth(self.prefix_len) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    pub fn tick(&mut self) {
        if self.roles.is_empty() {
            return;
        }

        match self.phase {
            Phase::Typing => {
                let len = self.role_len();
                if self.prefix_len < len {
                    self.prefix_len += 1;
                }
                if self.prefix_len >= len {
                    self.phase = Phase::PausedFull;
                }
            }
            Phase::PausedFull => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.prefix_len = self.prefix_len.saturating_sub(1);
                if self.prefix_len == 0 {
                    self.phase = Phase::PausedEmpty;
                }
            }
            Phase::PausedEmpty => {
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.prefix_len = 0;
                self.phase = Phase::Typing;
            }
        }
    }

    /// Delay before the next tick; `jitter` is a unit random value.
    pub fn next_delay_ms(&self, jitter: f64) -> u32 {
        match self.phase {
            Phase::Typing => jittered(TYPE_DELAY_MS, jitter),
            Phase::PausedFull => PAUSE_FULL_MS,
            Phase::Deleting => jittered(DELETE_DELAY_MS, jitter),
            Phase::PausedEmpty => PAUSE_EMPTY_MS,
        }
    }
}

fn jittered((low, high): (u32, u32), jitter: f64) -> u32 {
    let jitter = if jitter.is_finite() { jitter.clamp(0.0, 1.0) } else { 0.0 };
    let span = high - low;
    let offset = (jitter * f64::from(span)).floor() as u32;
    low + offset.min(span - 1)
}
