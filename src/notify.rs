//! トースト通知キュー

use crate::models::{Toast, ToastKind};

/// 同時に表示するトーストの上限
pub const MAX_TOASTS: usize = 5;
/// 自動で閉じるまでの時間
pub const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    /// 追加して id を返す。上限を超えたら古いものから消す
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, message: message.into(), kind });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
