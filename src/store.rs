//! 時間割ストア
//!
//! 確定済みの時間割を保持し、変更のたびにLocalStorageへ全体を書き戻す

use std::rc::Rc;

use crate::error::StoreError;
use crate::models::{StoredTimetable, Timetable, SCHEMA_VERSION};
use crate::utils::log_trace::{log_info, log_info_with_data, log_warn};
use crate::utils::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "study_timetable";

#[derive(Clone)]
pub struct TimetableStore {
    storage: Rc<dyn KeyValueStore>,
    timetable: Timetable,
}

impl TimetableStore {
    /// 保存済みデータから読み込む。無い・壊れている・バージョン違いなら初期時間割
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let timetable = match storage.get(STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<StoredTimetable>(&json) {
                Ok(stored) if stored.version == SCHEMA_VERSION => {
                    log_info("storage", "timetable restored");
                    stored.rows
                }
                Ok(stored) => {
                    log_warn(
                        "storage",
                        &format!("unsupported schema version {}, using default", stored.version),
                    );
                    Timetable::default()
                }
                Err(e) => {
                    log_warn(
                        "storage",
                        &format!("stored timetable unreadable ({}), using default", e),
                    );
                    Timetable::default()
                }
            },
            None => Timetable::default(),
        };
        Self { storage, timetable }
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// 1行分のコマを差し替えて保存
    ///
    /// 保存に失敗してもメモリ上の変更は残る
    pub fn commit_row(
        &mut self,
        index: usize,
        slots: Vec<String>,
    ) -> Result<&Timetable, StoreError> {
        let row = self
            .timetable
            .rows
            .get_mut(index)
            .ok_or(StoreError::RowOutOfRange(index))?;
        row.slots = slots;
        log_info_with_data(
            "timetable",
            &format!("{} updated", row.day),
            serde_json::json!({ "row": index, "slots": row.slots }),
        );
        self.persist()?;
        Ok(&self.timetable)
    }

    /// 初期時間割に戻して保存
    pub fn reset(&mut self) -> Result<&Timetable, StoreError> {
        self.timetable = Timetable::default();
        log_info("timetable", "reset to default");
        self.persist()?;
        Ok(&self.timetable)
    }

    pub fn persist(&self) -> Result<(), StoreError> {
        let stored = StoredTimetable {
            version: SCHEMA_VERSION,
            rows: self.timetable.clone(),
        };
        let json = serde_json::to_string(&stored)?;
        self.storage.set(STORAGE_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SessionError, StorageError};
    use crate::models::{EditSession, Row};
    use crate::utils::storage::MemoryStore;

    /// 書き込みが常に失敗するストア（容量超過を想定）
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn slots(values: [&str; 6]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_empty_storage_gives_default() {
        let store = TimetableStore::load(Rc::new(MemoryStore::default()));
        assert_eq!(store.timetable(), &Timetable::default());
    }

    #[test]
    fn test_load_garbage_gives_default() {
        let storage = Rc::new(MemoryStore::default());
        storage.set(STORAGE_KEY, "{not json").unwrap();
        let store = TimetableStore::load(storage);
        assert_eq!(store.timetable(), &Timetable::default());
    }

    #[test]
    fn test_load_legacy_free_text_gives_default() {
        let storage = Rc::new(MemoryStore::default());
        storage
            .set(
                STORAGE_KEY,
                r#"[{"day":"Monday","slots":["Mathematics (Theory)","-","-","-","-","-"]}]"#,
            )
            .unwrap();
        let store = TimetableStore::load(storage);
        assert_eq!(store.timetable(), &Timetable::default());
    }

    #[test]
    fn test_load_other_version_gives_default() {
        let storage = Rc::new(MemoryStore::default());
        storage.set(STORAGE_KEY, r#"{"version":3,"rows":[]}"#).unwrap();
        let store = TimetableStore::load(storage);
        assert_eq!(store.timetable(), &Timetable::default());
    }

    #[test]
    fn test_load_accepts_short_row_as_is() {
        let storage = Rc::new(MemoryStore::default());
        storage
            .set(STORAGE_KEY, r#"{"version":2,"rows":[{"day":"Monday","slots":["nosql"]}]}"#)
            .unwrap();
        let store = TimetableStore::load(storage);
        assert_eq!(store.timetable().rows.len(), 1);
        assert_eq!(store.timetable().rows[0].slots, vec!["nosql".to_string()]);
    }

    #[test]
    fn test_persist_then_load_roundtrip() {
        let storage = Rc::new(MemoryStore::default());
        let mut store = TimetableStore::load(storage.clone());
        store
            .commit_row(6, slots(["-", "-", "-", "-", "-", "unknown_course"]))
            .unwrap();

        let reloaded = TimetableStore::load(storage);
        assert_eq!(reloaded.timetable(), store.timetable());
        assert_eq!(reloaded.timetable().rows[6].slots[5], "unknown_course");
    }

    #[test]
    fn test_commit_replaces_only_one_row() {
        let storage = Rc::new(MemoryStore::default());
        let mut store = TimetableStore::load(storage.clone());
        let before = store.timetable().clone();

        let updated = store.commit_row(2, slots(["nosql", "-", "-", "-", "-", "-"])).unwrap();
        for (i, row) in updated.rows.iter().enumerate() {
            if i == 2 {
                assert_eq!(row.slots[0], "nosql");
                assert_eq!(row.day, "Wednesday");
            } else {
                assert_eq!(row, &before.rows[i]);
            }
        }
        assert!(storage.get(STORAGE_KEY).is_some());
    }

    #[test]
    fn test_commit_out_of_range_is_rejected() {
        let storage = Rc::new(MemoryStore::default());
        let mut store = TimetableStore::load(storage.clone());
        let err = store.commit_row(7, slots(["-"; 6])).unwrap_err();
        assert!(matches!(err, StoreError::RowOutOfRange(7)));
        assert_eq!(store.timetable(), &Timetable::default());
        assert!(storage.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_reset_restores_default() {
        let storage = Rc::new(MemoryStore::default());
        let mut store = TimetableStore::load(storage.clone());
        store.commit_row(0, slots(["-"; 6])).unwrap();
        store.reset().unwrap();

        let reloaded = TimetableStore::load(storage);
        assert_eq!(reloaded.timetable(), &Timetable::default());
        assert_eq!(
            reloaded.timetable().rows[0],
            Row::new(
                "Monday",
                ["math_theory", "math_theory", "physics_theory", "-", "-", "-"]
            )
        );
    }

    #[test]
    fn test_failed_write_keeps_commit_in_memory() {
        let mut store = TimetableStore::load(Rc::new(FullStore));
        let err = store.commit_row(0, slots(["nosql"; 6])).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Write { .. })));
        assert_eq!(store.timetable().rows[0].slots, ["nosql"; 6]);
        assert_eq!(store.timetable().rows[1], Timetable::default().rows[1]);
    }

    #[test]
    fn test_failed_write_ends_edit_session() {
        let mut store = TimetableStore::load(Rc::new(FullStore));
        let mut session = EditSession::default();
        session.begin(store.timetable(), 3).unwrap();
        session.set_slot(2, "blockchain").unwrap();

        let err = session.commit(&mut store).unwrap_err();
        assert!(matches!(err, SessionError::Store(StoreError::Storage(_))));
        assert_eq!(session, EditSession::Idle);
        assert_eq!(store.timetable().rows[3].slots[2], "blockchain");
    }
}
