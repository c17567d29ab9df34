//! User preference slots stored next to the note snapshot.

use crate::model::theme::Theme;
use crate::repo::kv_repo::KvRepository;
use crate::repo::RepoResult;
use log::{info, warn};

/// Slot holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Reads the theme; missing or unreadable values fall back to `Light`.
pub fn load_theme<K: KvRepository + ?Sized>(kv: &K) -> Theme {
    match kv.get(THEME_STORAGE_KEY) {
        Ok(Some(value)) => Theme::parse_lenient(&value),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("event=theme_load module=repo status=degraded error={err}");
            Theme::default()
        }
    }
}

pub fn save_theme<K: KvRepository + ?Sized>(kv: &K, theme: Theme) -> RepoResult<()> {
    kv.set(THEME_STORAGE_KEY, theme.as_str())?;
    info!(
        "event=theme_save module=repo status=ok theme={}",
        theme.as_str()
    );
    Ok(())
}
