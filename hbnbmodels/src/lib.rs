//! HBNB domain model crate.
//!
//! This crate contains the read-only domain entities served by the web
//! front end (`state`, `city`) and the storage collaborator (`storage`)
//! they are loaded through. The web crate only ever talks to storage
//! through the narrow `Storage` trait: fetch everything of one kind,
//! fetch one by id, release the handle. These modules are intentionally
//! minimal and focus on what the front end displays rather than being a
//! general-purpose persistence layer.
//!
/// State entity
pub mod state;
/// City entity
pub mod city;
/// Storage trait and the file/memory backends
pub mod storage;

pub use city::City;
pub use state::State;
pub use storage::{FileStorage, MemoryStorage, Model, Record, Storage};

#[cfg(test)]
mod tests {
    use crate::{City, FileStorage, MemoryStorage, Record, State, Storage};
    use std::fs;
    use std::path::PathBuf;

    fn temp_data_file(contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("hbnb_store_{}_{stamp}.json", std::process::id()));
        fs::write(&path, contents).expect("write data file");
        path
    }

    /// Records keep the original on-disk shape, `__class__` tag included
    #[test]
    fn record_json_shape() {
        let rec = Record::State(State {
            id: "421a55f4".into(),
            name: "California".into(),
        });
        let json = serde_json::to_string(&rec).expect("serialize");
        assert!(json.contains("\"__class__\":\"State\""));
        assert!(json.contains("\"name\":\"California\""));

        let back: Record = serde_json::from_str(&json).expect("deserialize");
        match back {
            Record::State(s) => assert_eq!(s.name, "California"),
            Record::City(_) => panic!("wrong variant"),
        }
    }

    /// Extra fields written by the original project (timestamps) must not
    /// break loading
    #[test]
    fn file_storage_ignores_unknown_fields() {
        let path = temp_data_file(
            r#"{"State.s1": {"__class__": "State", "id": "s1", "name": "Arizona",
                "created_at": "2017-09-28T21:03:54.052298"}}"#,
        );
        let store = FileStorage::open(&path).expect("open");
        let states = store.all::<State>();
        assert_eq!(states.len(), 1);
        assert_eq!(states["s1"].name, "Arizona");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn file_storage_all_and_get_by_kind() {
        let path = temp_data_file(
            r#"{
                "State.s1": {"__class__": "State", "id": "s1", "name": "Texas"},
                "City.c1": {"__class__": "City", "id": "c1", "name": "Austin", "state_id": "s1"}
            }"#,
        );
        let store = FileStorage::open(&path).expect("open");

        assert_eq!(store.all::<State>().len(), 1);
        assert_eq!(store.all::<City>().len(), 1);
        assert_eq!(store.get::<State>("s1").expect("state").name, "Texas");
        assert_eq!(store.get::<City>("c1").expect("city").state_id, "s1");
        // ids do not cross kinds
        assert!(store.get::<City>("s1").is_none());
        assert!(store.get::<State>("missing").is_none());
        fs::remove_file(&path).ok();
    }

    /// close() re-syncs from the backing file
    #[test]
    fn file_storage_close_reloads() {
        let path = temp_data_file(r#"{}"#);
        let store = FileStorage::open(&path).expect("open");
        assert!(store.all::<State>().is_empty());

        fs::write(
            &path,
            r#"{"State.s1": {"__class__": "State", "id": "s1", "name": "Ohio"}}"#,
        )
        .expect("rewrite data file");
        store.close();
        assert_eq!(store.all::<State>().len(), 1);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let mut path = std::env::temp_dir();
        path.push("hbnb_store_does_not_exist.json");
        let store = FileStorage::open(&path).expect("open");
        assert!(store.all::<State>().is_empty());
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut store = MemoryStorage::default();
        store.insert(Record::State(State {
            id: "s1".into(),
            name: "Nevada".into(),
        }));
        store.insert(Record::City(City {
            id: "c1".into(),
            name: "Reno".into(),
            state_id: "s1".into(),
        }));

        assert_eq!(store.get::<State>("s1").expect("state").name, "Nevada");
        assert_eq!(store.all::<City>()["c1"].name, "Reno");
        store.close();
        // close is a no-op for the in-memory backend
        assert_eq!(store.all::<State>().len(), 1);
    }
}
