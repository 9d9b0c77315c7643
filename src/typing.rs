//! Typewriter effect cycling through a list of roles.

pub const TYPE_MS: i32 = 70;
pub const DELETE_MS: i32 = 35;
pub const HOLD_FULL_MS: i32 = 2200;
pub const HOLD_EMPTY_MS: i32 = 400;
pub const START_DELAY_MS: i32 = 1200;

#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance by one character. Returns the text to show and the delay
    /// before the next step, or `None` if there are no roles.
    pub fn step(&mut self) -> Option<(String, i32)> {
        let current = self.roles.get(self.role)?;
        let len = current.chars().count();

        let delay = if !self.deleting {
            self.chars = (self.chars + 1).min(len);
            if self.chars == len {
                self.deleting = true;
                HOLD_FULL_MS
            } else {
                TYPE_MS
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            if self.chars == 0 {
                self.deleting = false;
                self.role = (self.role + 1) % self.roles.len();
                HOLD_EMPTY_MS
            } else {
                DELETE_MS
            }
        };

        let text = current.chars().take(self.chars).collect();
        Some((text, delay))
    }
}
