//! ライト/ダークテーマ

use crate::models::Theme;
use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::storage::KeyValueStore;

const THEME_KEY: &str = "study_timetable_theme";
const DARK_CLASS: &str = "dark";

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// 保存済みの設定 → OSの配色設定 → ライト の順で決定
pub fn initial_theme(storage: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    storage
        .get(THEME_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn save_theme(storage: &dyn KeyValueStore, theme: Theme) {
    if let Err(e) = storage.set(THEME_KEY, theme.as_str()) {
        log_warn("theme", &e.to_string());
    }
}

/// prefers-color-scheme: dark
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// <html> に dark クラスを付け外し
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
    if result.is_ok() {
        log_info("theme", &format!("{} theme applied", theme.as_str()));
    }
}
