//! 行編集セッション
//!
//! 編集中の1行分のコマを確定まで別バッファに保持する。
//! 別の行で編集を始めると、保存していない編集は破棄される。

use crate::error::SessionError;
use crate::models::{EditSession, Timetable, EMPTY_SLOT};
use crate::store::TimetableStore;
use crate::utils::log_trace::{log_info, log_warn};

impl EditSession {
    pub fn editing_row(&self) -> Option<usize> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { row, .. } => Some(*row),
        }
    }

    pub fn staged(&self) -> Option<&[String]> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { staged, .. } => Some(staged),
        }
    }

    /// 編集開始。破棄された編集中の行があればそのインデックスを返す
    pub fn begin(
        &mut self,
        timetable: &Timetable,
        row: usize,
    ) -> Result<Option<usize>, SessionError> {
        let source = timetable.row(row).ok_or(SessionError::NoSuchRow(row))?;
        let discarded = self.editing_row().filter(|&prev| prev != row);
        if let Some(prev) = discarded {
            log_warn("edit", &format!("unsaved edit of row {} discarded", prev));
        }
        *self = EditSession::Editing {
            row,
            staged: source.slots.clone(),
        };
        log_info("edit", &format!("editing {}", source.day));
        Ok(discarded)
    }

    /// 空文字は空きコマとして扱う。カタログにない値もそのまま受け付ける
    pub fn set_slot(&mut self, position: usize, value: &str) -> Result<(), SessionError> {
        let EditSession::Editing { staged, .. } = self else {
            return Err(SessionError::NotEditing);
        };
        let slot = staged
            .get_mut(position)
            .ok_or(SessionError::SlotOutOfRange(position))?;
        *slot = if value.is_empty() { EMPTY_SLOT.to_string() } else { value.to_string() };
        Ok(())
    }

    /// 編集内容をストアに確定して Idle に戻る
    pub fn commit(&mut self, store: &mut TimetableStore) -> Result<usize, SessionError> {
        let EditSession::Editing { row, staged } = std::mem::take(self) else {
            return Err(SessionError::NotEditing);
        };
        store.commit_row(row, staged)?;
        Ok(row)
    }

    pub fn cancel(&mut self) -> Option<usize> {
        let row = self.editing_row();
        if row.is_some() {
            log_info("edit", "edit cancelled");
        }
        *self = EditSession::Idle;
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STORAGE_KEY;
    use crate::utils::storage::{KeyValueStore, MemoryStore};
    use std::rc::Rc;

    fn fresh() -> (Rc<MemoryStore>, TimetableStore) {
        let storage = Rc::new(MemoryStore::default());
        let store = TimetableStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_begin_then_cancel_leaves_store_unchanged() {
        let (_storage, store) = fresh();
        for i in 0..7 {
            let mut session = EditSession::default();
            session.begin(store.timetable(), i).unwrap();
            session.set_slot(0, "nosql").unwrap();
            assert_eq!(session.cancel(), Some(i));
            assert_eq!(session, EditSession::Idle);
            assert_eq!(store.timetable(), &Timetable::default());
        }
    }

    #[test]
    fn test_commit_writes_only_edited_slot() {
        for i in 0..7 {
            for k in 0..6 {
                let (_storage, mut store) = fresh();
                let mut session = EditSession::default();
                session.begin(store.timetable(), i).unwrap();
                session.set_slot(k, "windows_server").unwrap();
                assert_eq!(session.commit(&mut store).unwrap(), i);

                let defaults = Timetable::default();
                let t = store.timetable();
                assert_eq!(t.rows[i].slots[k], "windows_server");
                for (j, row) in t.rows.iter().enumerate() {
                    if j != i {
                        assert_eq!(row, &defaults.rows[j]);
                    }
                }
                assert_eq!(session, EditSession::Idle);
            }
        }
    }

    #[test]
    fn test_begin_other_row_discards_staged_edit() {
        let (storage, mut store) = fresh();
        let mut session = EditSession::default();
        session.begin(store.timetable(), 1).unwrap();
        session.set_slot(5, "blockchain").unwrap();

        assert_eq!(session.begin(store.timetable(), 4).unwrap(), Some(1));
        assert_eq!(session.editing_row(), Some(4));
        assert_eq!(session.staged().unwrap(), store.timetable().rows[4].slots.as_slice());
        assert_eq!(store.timetable(), &Timetable::default());
        assert!(storage.get(STORAGE_KEY).is_none());

        session.commit(&mut store).unwrap();
        assert_eq!(store.timetable().rows[1].slots[5], "-");
    }

    #[test]
    fn test_begin_same_row_restarts_from_committed() {
        let (_storage, store) = fresh();
        let mut session = EditSession::default();
        session.begin(store.timetable(), 0).unwrap();
        session.set_slot(0, "nosql").unwrap();
        assert_eq!(session.begin(store.timetable(), 0).unwrap(), None);
        assert_eq!(session.staged().unwrap()[0], "math_theory");
    }

    #[test]
    fn test_monday_scenario() {
        let (storage, mut store) = fresh();
        let mut session = EditSession::default();
        session.begin(store.timetable(), 0).unwrap();
        session.set_slot(3, "network_fund").unwrap();
        session.commit(&mut store).unwrap();

        let expected = ["math_theory", "math_theory", "physics_theory", "network_fund", "-", "-"];
        assert_eq!(store.timetable().rows[0].slots, expected);

        let reloaded = TimetableStore::load(storage);
        assert_eq!(reloaded.timetable().rows[0].slots, expected);
    }

    #[test]
    fn test_set_slot_accepts_unknown_and_maps_empty() {
        let (_storage, store) = fresh();
        let mut session = EditSession::default();
        session.begin(store.timetable(), 5).unwrap();
        session.set_slot(0, "not_a_course").unwrap();
        session.set_slot(1, "").unwrap();
        let staged = session.staged().unwrap();
        assert_eq!(staged[0], "not_a_course");
        assert_eq!(staged[1], "-");
    }

    #[test]
    fn test_errors() {
        let (_storage, mut store) = fresh();
        let mut session = EditSession::default();
        assert!(matches!(session.set_slot(0, "nosql"), Err(SessionError::NotEditing)));
        assert!(matches!(session.commit(&mut store), Err(SessionError::NotEditing)));
        assert!(matches!(session.begin(store.timetable(), 7), Err(SessionError::NoSuchRow(7))));
        assert_eq!(session, EditSession::Idle);

        session.begin(store.timetable(), 0).unwrap();
        assert!(matches!(session.set_slot(6, "nosql"), Err(SessionError::SlotOutOfRange(6))));
        assert_eq!(session.cancel(), Some(0));
        assert_eq!(session.cancel(), None);
    }
}
