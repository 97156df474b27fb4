use leptos::*;
use std::rc::Rc;

mod catalog;
mod components;
mod error;
mod models;
mod notify;
mod session;
mod store;
mod theme;
mod utils;

use components::{LogPanel, ThemeToggle, TimetableTable, ToastStack};
use models::{EditSession, Theme};
use notify::ToastQueue;
use store::TimetableStore;
use utils::storage::{browser_storage, KeyValueStore};

// ============================================
// アプリ全体で共有する状態
// ============================================

#[derive(Clone, Copy)]
pub struct TimetableContext {
    pub store: RwSignal<TimetableStore>,
    pub session: RwSignal<EditSession>,
    pub toasts: RwSignal<ToastQueue>,
    pub theme: RwSignal<Theme>,
    pub storage: StoredValue<Rc<dyn KeyValueStore>>,
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let storage = browser_storage();
    let store = TimetableStore::load(storage.clone());
    let initial_theme = theme::initial_theme(&*storage, theme::prefers_dark());

    let ctx = TimetableContext {
        store: create_rw_signal(store),
        session: create_rw_signal(EditSession::default()),
        toasts: create_rw_signal(ToastQueue::default()),
        theme: create_rw_signal(initial_theme),
        storage: store_value(storage),
    };
    provide_context(ctx);

    create_effect(move |_| theme::apply_theme(ctx.theme.get()));

    view! {
        <div class="app">
            <div class="container">
                <ThemeToggle />
                <h1 class="app-title">"📚 Weekly Study Timetable"</h1>
                <TimetableTable />
                <LogPanel />
            </div>
            <ToastStack />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
