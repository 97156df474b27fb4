//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// 時間割データ構造
// ============================================

/// 空きコマを表す値
pub const EMPTY_SLOT: &str = "-";

/// 1日あたりのコマ数（表のヘッダー列数と共通）
pub const SLOT_COUNT: usize = 6;

/// 曜日（表示順）
pub const WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// 保存データのスキーマバージョン
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub day: String,
    pub slots: Vec<String>,
}

impl Row {
    pub fn new(day: &str, slots: [&str; SLOT_COUNT]) -> Self {
        Self {
            day: day.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    pub rows: Vec<Row>,
}

impl Timetable {
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            rows: vec![
                Row::new(
                    "Monday",
                    [
                        "math_theory",
                        "math_theory",
                        "physics_theory",
                        "-",
                        "-",
                        "-",
                    ],
                ),
                Row::new(
                    "Tuesday",
                    [
                        "python_theory",
                        "python_theory",
                        "network_fund",
                        "-",
                        "-",
                        "-",
                    ],
                ),
                Row::new(
                    "Wednesday",
                    [
                        "physics_theory",
                        "physics_theory",
                        "project_req",
                        "-",
                        "-",
                        "-",
                    ],
                ),
                Row::new(
                    "Thursday",
                    [
                        "js_theory",
                        "js_theory",
                        "vue_theory",
                        "-",
                        "-",
                        "-",
                    ],
                ),
                Row::new(
                    "Friday",
                    [
                        "react_theory",
                        "react_theory",
                        "version_control",
                        "-",
                        "-",
                        "-",
                    ],
                ),
                Row::new(
                    "Saturday",
                    [
                        "machine_learning",
                        "machine_learning",
                        "blockchain",
                        "blockchain",
                        "nosql",
                        "qa_devops",
                    ],
                ),
                Row::new(
                    "Sunday",
                    [
                        "math_theory",
                        "math_theory",
                        "machine_learning",
                        "blockchain",
                        "windows_server",
                        "graphics_design",
                    ],
                ),
            ],
        }
    }
}

/// LocalStorageに書き込む形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTimetable {
    pub version: u32,
    pub rows: Timetable,
}

// ============================================
// 科目カタログ
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseEntry {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// コマの表示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDisplay {
    Empty,
    Course(&'static CourseEntry),
    Unknown,
}

// ============================================
// UI状態
// ============================================

/// 編集状態（同時に編集できる行は1つだけ）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { row: usize, staged: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Info => "toast-info",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}
