//! テーマ切替ボタン

use leptos::*;

use crate::models::Theme;
use crate::theme::save_theme;
use crate::TimetableContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<TimetableContext>().expect("TimetableContext not found");

    let on_toggle = move |_| {
        let next = ctx.theme.get_untracked().toggle();
        ctx.theme.set(next);
        ctx.storage.with_value(|storage| save_theme(&**storage, next));
    };

    view! {
        <div class="theme-bar">
            <button class="theme-toggle" on:click=on_toggle aria-label="Toggle Dark Mode">
                {move || match ctx.theme.get() {
                    Theme::Dark => "☀",
                    Theme::Light => "☾",
                }}
            </button>
        </div>
    }
}
