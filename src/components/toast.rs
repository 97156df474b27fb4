//! トースト通知コンポーネント

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::ToastKind;
use crate::notify::{ToastQueue, TOAST_LIFETIME_MS};
use crate::TimetableContext;

/// トーストを表示し、一定時間後に自動で閉じる
pub fn show_toast(toasts: RwSignal<ToastQueue>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let mut id = 0;
    toasts.update(|q| id = q.push(message, kind));
    spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toasts.update(|q| q.dismiss(id));
    });
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<TimetableContext>().expect("TimetableContext not found");
    let toasts = ctx.toasts;

    view! {
        <div class="toast-stack">
            {move || toasts.with(|q| q.items().to_vec()).into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div
                        class=format!("toast {}", toast.kind.class())
                        on:click=move |_| toasts.update(|q| q.dismiss(id))
                    >
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
