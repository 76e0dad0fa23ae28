//! Document load stages, as reported by `document.readyState`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Browsers only report the three lowercase values; anything else is
    /// treated as still loading so setup waits for the next event.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "interactive" => ReadyState::Interactive,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Loading,
        }
    }

    /// Structural content is parsed; `DOMContentLoaded` has fired or is firing.
    pub fn content_ready(self) -> bool {
        self != ReadyState::Loading
    }

    /// Subresources are done too; the window `load` event has fired.
    pub fn fully_loaded(self) -> bool {
        self == ReadyState::Complete
    }
}
