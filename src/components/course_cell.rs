//! コマ表示・科目選択コンポーネント

use leptos::*;

use crate::catalog::{icon_for, resolve, COURSES};
use crate::models::{SlotDisplay, EMPTY_SLOT};
use crate::utils::log_trace::log_error;
use crate::TimetableContext;

/// 確定済みコマの表示（アイコン + 科目名）
#[component]
pub fn CourseCell(value: String) -> impl IntoView {
    match resolve(&value) {
        SlotDisplay::Empty => view! {
            <span class="slot-empty">"-"</span>
        }.into_view(),
        SlotDisplay::Course(course) => view! {
            <div class="course">
                {icon_for(course.display_name).map(|src| view! {
                    <img class="course-icon" src=src alt=format!("{} logo", course.display_name) />
                })}
                <span>{course.display_name}</span>
            </div>
        }.into_view(),
        SlotDisplay::Unknown => view! {
            <span class="slot-unknown" title=value>"Unknown course"</span>
        }.into_view(),
    }
}

/// 編集中コマの科目プルダウン
#[component]
pub fn CourseSelect(position: usize, value: String) -> impl IntoView {
    let ctx = use_context::<TimetableContext>().expect("TimetableContext not found");

    let on_change = move |ev: web_sys::Event| {
        let selected = event_target_value(&ev);
        ctx.session.update(|session| {
            if let Err(e) = session.set_slot(position, &selected) {
                log_error("edit", &e.to_string());
            }
        });
    };

    // カタログにない値は選択肢に残して表示する
    let unknown = (resolve(&value) == SlotDisplay::Unknown).then(|| value.clone());

    view! {
        <select class="course-select" on:change=on_change>
            <option value=EMPTY_SLOT selected={value == EMPTY_SLOT}>"-"</option>
            {COURSES.iter().map(|course| {
                let selected = value == course.id;
                view! {
                    <option value=course.id selected=selected>{course.display_name}</option>
                }
            }).collect_view()}
            {unknown.map(|v| view! {
                <option value=v.clone() selected=true>"Unknown course (" {v} ")"</option>
            })}
        </select>
    }
}
