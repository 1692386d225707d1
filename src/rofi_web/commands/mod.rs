use crate::model::Link;
use crate::rofi::Menu;

pub mod gh;
pub mod render;
pub mod resolve;

/// What a single script-mode invocation has been asked to do.
///
/// Rofi runs the script without an argument to get the menu, and again with
/// the picked row's text once the user selects something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Render,
    Resolve {
        selection: String,
        payload: Option<String>,
    },
}

impl Mode {
    pub fn from_invocation(selection: Option<String>, payload: Option<String>) -> Self {
        match selection {
            None => Mode::Render,
            Some(selection) => Mode::Resolve {
                selection,
                payload: payload.filter(|p| !p.is_empty()),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub menu: Option<Menu>,
    pub opened: Option<Link>,
}

impl CmdResult {
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_opened(mut self, link: Link) -> Self {
        self.opened = Some(link);
        self
    }
}
