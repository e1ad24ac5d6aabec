use slog::{debug, info, Logger};
use whoami_core::error::handoff::HandoffError;
use whoami_core::handoff::HandoffHost;

/// Hand-off through the system clipboard. Closing the "window" ends the command once it
/// has finished rendering.
pub struct TerminalHost {
    logger: Logger,
    closed: bool,
}

impl TerminalHost {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl HandoffHost for TerminalHost {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), HandoffError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| HandoffError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| HandoffError::ClipboardUnavailable(e.to_string()))?;
        debug!(self.logger, "Copied hand-off token to the clipboard");
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        info!(self.logger, "{}", message);
    }

    fn close_window(&mut self) {
        debug!(self.logger, "Closing window");
        self.closed = true;
    }
}
