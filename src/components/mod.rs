//! UIコンポーネントモジュール

pub mod course_cell;
pub mod log_panel;
pub mod theme_toggle;
pub mod timetable_table;
pub mod toast;

pub use course_cell::{CourseCell, CourseSelect};
pub use log_panel::LogPanel;
pub use theme_toggle::ThemeToggle;
pub use timetable_table::TimetableTable;
pub use toast::{show_toast, ToastStack};
