use crate::error::{RofiWebError, Result};
use crate::model::Link;
use crate::rofi::{decode_payload, visible_name};
use crate::store::LinkStore;

/// Turns a Rofi selection back into the link it was rendered from.
///
/// A non-empty `payload` (the row's `info`, via `ROFI_INFO`) is decoded
/// directly and takes precedence over `selection`. Otherwise the link name is
/// recovered from the visible row text and looked up in `list`; the first
/// link with that name wins.
pub fn run<S: LinkStore>(
    store: &S,
    list: &str,
    selection: &str,
    payload: Option<&str>,
) -> Result<Link> {
    if let Some(payload) = payload.filter(|p| !p.is_empty()) {
        log::info!("Resolving selection from ROFI_INFO payload");
        return decode_payload(payload);
    }

    let name = visible_name(selection);
    log::info!("Resolving selection '{}' in list '{}' by name", name, list);

    store
        .get_list(list)?
        .into_iter()
        .find(|link| link.name == name)
        .ok_or_else(|| RofiWebError::SelectionNotFound {
            list: list.to_string(),
            name: name.to_string(),
        })
}
