//! Raw platform events and input normalization
//!
//! The event pump lives outside the crate; whatever windowing layer drives
//! the game forwards its events here as [`RawEvent`]s. The collector maps
//! them onto the small normalized vocabulary the state machine understands
//! and folds them into one [`TickInput`] per frame. Codes the game does not
//! use are ignored silently.

use crate::sim::TickInput;

/// SDL-style keycode for space
pub const KEY_SPACE: u32 = 32;
/// Keycode for "r"
pub const KEY_R: u32 = 114;
/// Keycode for the right-arrow key
pub const KEY_RIGHT: u32 = 0x4000_004F;
/// Primary (left) pointer button
pub const BUTTON_PRIMARY: u8 = 1;

/// Raw event as delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// Window close / process interrupt
    Quit,
    KeyDown(u32),
    PointerDown(u8),
}

/// Normalized internal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    FlapRequested,
    StartRequested,
    RestartRequested,
    NudgeRequested,
}

/// Map one raw event to its normalized events. Space and the primary pointer
/// button request both a start and a flap - the state machine honors
/// whichever fits the current phase. Unknown codes map to nothing.
pub fn normalize(raw: RawEvent) -> &'static [InputEvent] {
    match raw {
        RawEvent::Quit => &[InputEvent::Quit],
        RawEvent::KeyDown(KEY_SPACE) | RawEvent::PointerDown(BUTTON_PRIMARY) => {
            &[InputEvent::FlapRequested, InputEvent::StartRequested]
        }
        RawEvent::KeyDown(KEY_R) => &[InputEvent::RestartRequested],
        RawEvent::KeyDown(KEY_RIGHT) => &[InputEvent::NudgeRequested],
        _ => &[],
    }
}

/// Folds raw events into one [`TickInput`] per frame
#[derive(Debug, Default)]
pub struct InputCollector {
    frame: TickInput,
    quit: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw event from the platform event pump
    pub fn push(&mut self, raw: RawEvent) {
        for event in normalize(raw) {
            self.apply(*event);
        }
    }

    /// Feed one already-normalized event
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::FlapRequested => self.frame.flap = true,
            InputEvent::StartRequested => self.frame.start = true,
            InputEvent::RestartRequested => self.frame.restart = true,
            InputEvent::NudgeRequested => self.frame.nudge += 1,
        }
    }

    /// Clean-shutdown request; sticky once seen
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Take this frame's folded input, clearing the one-shot flags for the
    /// next frame
    pub fn drain(&mut self) -> TickInput {
        std::mem::take(&mut self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_requests_flap_and_start() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::KeyDown(KEY_SPACE));

        let frame = inputs.drain();
        assert!(frame.flap);
        assert!(frame.start);
        assert!(!frame.restart);
    }

    #[test]
    fn test_pointer_matches_space() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::PointerDown(BUTTON_PRIMARY));

        let frame = inputs.drain();
        assert!(frame.flap);
        assert!(frame.start);
    }

    #[test]
    fn test_unknown_codes_are_ignored() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::KeyDown(999));
        inputs.push(RawEvent::PointerDown(3));

        let frame = inputs.drain();
        assert!(!frame.flap && !frame.start && !frame.restart);
        assert_eq!(frame.nudge, 0);
        assert!(!inputs.quit_requested());
    }

    #[test]
    fn test_nudges_accumulate_within_a_frame() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::KeyDown(KEY_RIGHT));
        inputs.push(RawEvent::KeyDown(KEY_RIGHT));

        assert_eq!(inputs.drain().nudge, 2);
        // Drained: next frame starts clean
        assert_eq!(inputs.drain().nudge, 0);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::Quit);
        inputs.drain();
        assert!(inputs.quit_requested());
    }

    #[test]
    fn test_restart_key() {
        let mut inputs = InputCollector::new();
        inputs.push(RawEvent::KeyDown(KEY_R));
        assert!(inputs.drain().restart);
    }
}
