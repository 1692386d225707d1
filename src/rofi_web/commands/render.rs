use crate::commands::CmdResult;
use crate::config::RofiWebConfig;
use crate::error::Result;
use crate::rofi::Menu;
use crate::store::LinkStore;

pub fn run<S: LinkStore>(store: &S, config: &RofiWebConfig, list: &str) -> Result<CmdResult> {
    let links = store.get_list(list)?;
    log::info!("Rendering {} links from list '{}'", links.len(), list);
    let menu = Menu::from_links(&links, config.accent_color());
    Ok(CmdResult::default().with_menu(menu))
}
