//! Handing the principal back to the application that opened this page.
//!
//! When the page was opened with a `redirectScheme`, the caller is waiting for a
//! credential. The principal is delivered by copying `<prefix>:<principal>` to the
//! clipboard, telling the user, and closing the window.

use crate::error::handoff::HandoffError;

pub const HANDOFF_NOTICE: &str =
    "Principal ID copied to clipboard. You can return to the application and paste it.";

/// The parts of the hosting environment the hand-off needs.
pub trait HandoffHost {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), HandoffError>;

    fn notify(&mut self, message: &str);

    fn close_window(&mut self);
}

/// Copies the token, notifies the user and closes the window, in that order.
/// Nothing after the clipboard write runs if the write fails.
pub fn deliver<H: HandoffHost>(host: &mut H, token: &str) -> Result<(), HandoffError> {
    host.copy_to_clipboard(token)?;
    host.notify(HANDOFF_NOTICE);
    host.close_window();
    Ok(())
}
