//! 時間割テーブルコンポーネント
//!
//! 行ごとの編集開始・保存・キャンセルをストアと編集セッションに橋渡しする

use leptos::*;

use super::{show_toast, CourseCell, CourseSelect};
use crate::catalog::hour_label;
use crate::error::SessionError;
use crate::models::{EditSession, Row, ToastKind, SLOT_COUNT};
use crate::utils::log_trace::log_error;
use crate::TimetableContext;

fn day_name(ctx: TimetableContext, index: usize) -> String {
    ctx.store
        .with_untracked(|s| s.timetable().row(index).map(|r| r.day.clone()))
        .unwrap_or_else(|| format!("row {}", index + 1))
}

fn begin_edit(ctx: TimetableContext, index: usize) {
    let mut session = ctx.session.get_untracked();
    let result = ctx.store.with_untracked(|s| session.begin(s.timetable(), index));
    match result {
        Ok(_) => ctx.session.set(session),
        Err(e) => {
            log_error("edit", &e.to_string());
            show_toast(ctx.toasts, e.to_string(), ToastKind::Error);
        }
    }
}

fn save_edit(ctx: TimetableContext) {
    let mut session = ctx.session.get_untracked();
    let mut outcome = Err(SessionError::NotEditing);
    ctx.store.update(|store| outcome = session.commit(store));
    ctx.session.set(session);

    match outcome {
        Ok(row) => show_toast(
            ctx.toasts,
            format!("Timetable updated for {}", day_name(ctx, row)),
            ToastKind::Success,
        ),
        Err(e) => {
            log_error("edit", &e.to_string());
            show_toast(ctx.toasts, format!("Could not save: {}", e), ToastKind::Error);
        }
    }
}

fn cancel_edit(ctx: TimetableContext) {
    ctx.session.update(|s| {
        s.cancel();
    });
    show_toast(ctx.toasts, "Edit cancelled", ToastKind::Info);
}

fn reset_timetable(ctx: TimetableContext) {
    ctx.session.set(EditSession::Idle);
    let mut outcome = Ok(());
    ctx.store.update(|store| outcome = store.reset().map(|_| ()));
    match outcome {
        Ok(()) => show_toast(ctx.toasts, "Timetable reset to default", ToastKind::Info),
        Err(e) => {
            log_error("timetable", &e.to_string());
            show_toast(ctx.toasts, format!("Could not save: {}", e), ToastKind::Error);
        }
    }
}

#[component]
pub fn TimetableTable() -> impl IntoView {
    let ctx = use_context::<TimetableContext>().expect("TimetableContext not found");

    view! {
        <div class="table-wrapper">
            <table class="timetable">
                <thead>
                    <tr>
                        <th>"Day"</th>
                        {(1..=SLOT_COUNT)
                            .map(|n| view! { <th>{hour_label(n)}</th> })
                            .collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || ctx.store.with(|s| s.timetable().rows.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, row)| view! { <TimetableRow index=index row=row /> })
                        .collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan={SLOT_COUNT + 2}>
                            <button class="reset-btn" on:click=move |_| reset_timetable(ctx)>
                                "Reset to default"
                            </button>
                        </td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[component]
fn TimetableRow(index: usize, row: Row) -> impl IntoView {
    let ctx = use_context::<TimetableContext>().expect("TimetableContext not found");
    let is_editing = move || ctx.session.with(|s| s.editing_row() == Some(index));
    let Row { day, slots } = row;

    view! {
        <tr class=move || if is_editing() { "editing" } else { "" }>
            <td class="day">{day}</td>

            {move || if is_editing() {
                let staged = ctx
                    .session
                    .with(|s| s.staged().map(|v| v.to_vec()).unwrap_or_default());
                staged.into_iter().enumerate().map(|(position, value)| view! {
                    <td class="slot slot-edit">
                        <CourseSelect position=position value=value />
                    </td>
                }).collect_view()
            } else {
                slots.iter().map(|slot| view! {
                    <td class="slot">
                        <CourseCell value=slot.clone() />
                    </td>
                }).collect_view()
            }}

            <td class="actions">
                {move || if is_editing() {
                    view! {
                        <button class="save-btn" title="Save" on:click=move |_| save_edit(ctx)>
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            title="Cancel"
                            on:click=move |_| cancel_edit(ctx)
                        >
                            "✕"
                        </button>
                    }.into_view()
                } else {
                    view! {
                        <button
                            class="edit-btn"
                            title="Edit Courses"
                            on:click=move |_| begin_edit(ctx, index)
                        >
                            "✎"
                        </button>
                    }.into_view()
                }}
            </td>
        </tr>
    }
}
