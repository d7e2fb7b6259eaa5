use crossterm::{
    cursor::Show,
    event::PopKeyboardEnhancementFlags,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io::Write;

/// Puts the terminal back the way we found it. Every step runs even when an
/// earlier one fails, so the shell is never left in raw mode.
pub fn restore_terminal<W: Write>(out: &mut W, pop_keyboard_flags: bool) {
    if let Err(err) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {err}");
    }
    if pop_keyboard_flags && let Err(err) = execute!(out, PopKeyboardEnhancementFlags) {
        log::warn!("Failed to pop keyboard enhancement flags: {err}");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {err}");
    }
    if let Err(err) = execute!(out, Show) {
        log::warn!("Failed to show cursor: {err}");
    }
}
