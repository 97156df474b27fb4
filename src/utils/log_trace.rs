//! 時系列トレースログ
//! 保存・編集・テーマ切替の操作を記録し、後から確認できるようにする

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 500;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "study_timetable_log_trace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub category: String, // "storage", "timetable", "edit", "theme"
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Default)]
pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    pub fn log(
        &mut self,
        level: Level,
        category: &str,
        message: &str,
        data: Option<serde_json::Value>,
    ) {
        let entry = LogEntry {
            timestamp: now_iso(),
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        console_out(level, &format!("[{}] {}", category, message));

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        self.save_to_storage();
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    #[cfg(target_arch = "wasm32")]
    fn load_from_storage(&mut self) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Ok(Some(json_str)) = storage.get_item(STORAGE_KEY) {
            if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                self.logs = logs.into_iter().collect();
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_storage(&mut self) {}

    #[cfg(target_arch = "wasm32")]
    fn save_to_storage(&self) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let json_str = serde_json::to_string(&self.logs).unwrap_or_else(|_| "[]".to_string());
            let _ = storage.set_item(STORAGE_KEY, &json_str);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to_storage(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn console_out(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_out(level: Level, line: &str) {
    if level != Level::Info {
        eprintln!("{}", line);
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: RefCell<LogTrace> = RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Info, category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Info, category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Warn, category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Error, category, message, None));
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| trace.borrow_mut().clear());
}

pub fn recent_logs(n: usize) -> Vec<LogEntry> {
    LOG_TRACE.with(|trace| {
        let logs = trace.borrow().get_logs();
        let skip = logs.len().saturating_sub(n);
        logs.into_iter().skip(skip).collect()
    })
}
