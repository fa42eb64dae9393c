//! Transient Notification State
//!
//! Each `show` bumps the generation; a pending hide only applies to the
//! generation it was scheduled for, so newer toasts are never cut short.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toast {
    pub message: Option<String>,
    generation: u64,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Hide the toast if `generation` is still the latest one
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
