use crate::position::Side;
use crate::state::{OpenState, SidedState};

/// Open state of a modal dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialog {
    is_open: bool,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts open or closed, as given by the `open` prop.
    pub fn with_open(is_open: bool) -> Self {
        Self { is_open }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        if !self.is_open {
            tracing::debug!("dialog opened");
        }
        self.is_open = true;
    }

    pub fn close(&mut self) {
        if self.is_open {
            tracing::debug!("dialog closed");
        }
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn state(&self) -> OpenState {
        OpenState {
            is_open: self.is_open,
        }
    }
}

/// A dialog that slides in from a screen edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    dialog: Dialog,
    side: Side,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(SidedState::SHEET.side)
    }
}

impl Sheet {
    pub fn new(side: Side) -> Self {
        Self {
            dialog: Dialog::new(),
            side,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn open(&mut self) {
        self.dialog.open();
    }

    pub fn close(&mut self) {
        self.dialog.close();
    }

    pub fn toggle(&mut self) {
        self.dialog.toggle();
    }

    pub fn state(&self) -> SidedState {
        SidedState {
            is_open: self.is_open(),
            side: self.side,
        }
    }
}
