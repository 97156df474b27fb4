//! 科目カタログ
//!
//! 選択可能な科目の一覧と、コマの値から表示形式への変換

use crate::models::{CourseEntry, SlotDisplay, EMPTY_SLOT};

/// 科目一覧（プルダウンの表示順）
pub const COURSES: &[CourseEntry] = &[
    CourseEntry { id: "math_theory", display_name: "Mathematics (Theory)" },
    CourseEntry { id: "physics_theory", display_name: "Physics (Theory)" },
    CourseEntry { id: "python_theory", display_name: "Python (Theory)" },
    CourseEntry { id: "network_fund", display_name: "Network Fundamentals" },
    CourseEntry { id: "project_req", display_name: "Project Requirement Analysis" },
    CourseEntry { id: "js_theory", display_name: "JavaScript (Theory)" },
    CourseEntry { id: "vue_theory", display_name: "Vue.js (Theory)" },
    CourseEntry { id: "react_theory", display_name: "React (Theory)" },
    CourseEntry { id: "version_control", display_name: "Version Control" },
    CourseEntry { id: "machine_learning", display_name: "Machine Learning" },
    CourseEntry { id: "blockchain", display_name: "Blockchain" },
    CourseEntry { id: "nosql", display_name: "NoSQL" },
    CourseEntry { id: "qa_devops", display_name: "QA & DevOps" },
    CourseEntry { id: "windows_server", display_name: "Windows Server" },
    CourseEntry { id: "graphics_design", display_name: "Graphics Design" },
];

/// 科目アイコン（表示名キー）
const ICONS: &[(&str, &str)] = &[
    ("Mathematics (Theory)", "https://img.icons8.com/color/24/000000/math.png"),
    ("Physics (Theory)", "https://img.icons8.com/color/24/000000/physics.png"),
    ("Python (Theory)", "https://img.icons8.com/color/24/000000/python.png"),
    ("Network Fundamentals", "https://img.icons8.com/ios-filled/24/000000/network.png"),
    ("Project Requirement Analysis", "https://img.icons8.com/ios-filled/24/000000/analysis.png"),
    ("JavaScript (Theory)", "https://img.icons8.com/color/24/000000/javascript.png"),
    ("Vue.js (Theory)", "https://img.icons8.com/color/24/000000/vue-js.png"),
    ("React (Theory)", "https://img.icons8.com/color/24/000000/react-native.png"),
    ("Version Control", "https://img.icons8.com/ios-filled/24/000000/git.png"),
    ("Machine Learning", "https://img.icons8.com/color/24/000000/artificial-intelligence.png"),
    ("Blockchain", "https://img.icons8.com/color/24/000000/blockchain.png"),
    ("NoSQL", "https://img.icons8.com/ios-filled/24/000000/database.png"),
    ("QA & DevOps", "https://img.icons8.com/ios-filled/24/000000/qa.png"),
    ("Windows Server", "https://img.icons8.com/ios-filled/24/000000/windows-10.png"),
    ("Graphics Design", "https://img.icons8.com/color/24/000000/design.png"),
];

/// コマの値を表示形式に変換（カタログにない値は Unknown）
pub fn resolve(slot: &str) -> SlotDisplay {
    if slot == EMPTY_SLOT {
        return SlotDisplay::Empty;
    }
    COURSES
        .iter()
        .find(|c| c.id == slot)
        .map(SlotDisplay::Course)
        .unwrap_or(SlotDisplay::Unknown)
}

pub fn icon_for(display_name: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, url)| *url)
}

/// 列ヘッダー "1st Hour" など（n は1始まり）
pub fn hour_label(n: usize) -> String {
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{} Hour", n, suffix)
}
