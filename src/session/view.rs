use super::Session;
use tracing::debug;

/// Which half of the screen is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Store,
    Advisor,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Store => "Store",
            Mode::Advisor => "Advisor",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    mode: Mode,
}

impl ViewState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(super) fn reset(&mut self) {
        self.mode = Mode::Store;
    }
}

impl Session {
    pub fn mode(&self) -> Mode {
        self.view.mode()
    }

    /// Switches the active tab. Tabs only exist while there is a catalog to
    /// show, so this is refused for an empty catalog.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.catalog.is_empty() {
            debug!(?mode, "mode change ignored: catalog is empty");
            return false;
        }
        self.view.mode = mode;
        true
    }

    /// Store tab notification: the advisor has picked something.
    pub fn has_recommendation(&self) -> bool {
        self.catalog.has_recommendation()
    }

    /// Goes from the advisor back to the store when there is a pick to look at.
    pub fn jump_to_recommendation(&mut self) -> bool {
        if !self.has_recommendation() {
            return false;
        }
        self.set_mode(Mode::Store)
    }
}
