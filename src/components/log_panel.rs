//! 操作ログパネル（フッターの折りたたみ表示）

use leptos::*;

use crate::utils::log_trace::{clear_logs, recent_logs, Level, LogEntry};

const VISIBLE_ENTRIES: usize = 20;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<LogEntry>::new());

    let refresh = move |_| set_entries.set(recent_logs(VISIBLE_ENTRIES));
    let on_clear = move |_| {
        clear_logs();
        set_entries.set(Vec::new());
    };

    view! {
        <details class="log-panel">
            <summary on:click=refresh>"Activity log"</summary>
            <ul class="log-list">
                {move || entries.get().into_iter().rev().map(|entry| {
                    let level = match entry.level {
                        Level::Info => "log-info",
                        Level::Warn => "log-warn",
                        Level::Error => "log-error",
                    };
                    view! {
                        <li class=level>
                            <span class="log-time">{entry.timestamp}</span>
                            <span class="log-category">"[" {entry.category} "]"</span>
                            <span class="log-message">{entry.message}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button class="log-clear" on:click=on_clear>"Clear log"</button>
        </details>
    }
}
