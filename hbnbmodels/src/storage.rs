//! Storage collaborator for the HBNB front end.
//!
//! Defines the narrow `Storage` trait the web handlers consume
//! (`all`/`get`/`close`) and two backends: `FileStorage`, which mirrors
//! the original project's JSON object file, and `MemoryStorage` for
//! programmatic setups and tests. Both hand out clones; nothing in the
//! front end can reach into the store and mutate it.
//!
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::{City, State};

/// One stored object, tagged with its entity kind.
///
/// The on-disk form matches the original data files:
/// `{"__class__": "State", "id": "...", "name": "..."}`. Fields this
/// crate does not model (timestamps) are ignored on load.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "__class__")]
pub enum Record {
    State(State),
    City(City),
}

impl Record {
    /// Storage key in the original `Kind.id` form.
    pub fn key(&self) -> String {
        match self {
            Self::State(s) => format!("{}.{}", State::NAME, s.id),
            Self::City(c) => format!("{}.{}", City::NAME, c.id),
        }
    }
}

/// Per-entity glue letting storage be generic over the entity kind.
pub trait Model: Sized + Clone {
    /// Kind name used in storage keys and the `__class__` tag.
    const NAME: &'static str;

    /// Unique id of this instance.
    fn id(&self) -> &str;

    /// Extract an instance of this kind from a record, if it is one.
    fn from_record(record: &Record) -> Option<Self>;
}

impl Model for State {
    const NAME: &'static str = "State";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_record(record: &Record) -> Option<Self> {
        match record {
            Record::State(s) => Some(s.clone()),
            Record::City(_) => None,
        }
    }
}

impl Model for City {
    const NAME: &'static str = "City";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_record(record: &Record) -> Option<Self> {
        match record {
            Record::City(c) => Some(c.clone()),
            Record::State(_) => None,
        }
    }
}

/// The storage interface the web front end consumes.
///
/// Read-only plus a lifecycle hook: handlers fetch whole kinds or single
/// instances and the teardown middleware calls `close` once per request.
pub trait Storage: Send + Sync + 'static {
    /// All stored instances of one kind, keyed by id.
    fn all<T: Model>(&self) -> HashMap<String, T>;

    /// One instance of one kind by id.
    fn get<T: Model>(&self, id: &str) -> Option<T>;

    /// Release the handle after a request. Backends decide what that
    /// means; it must never fail the request.
    fn close(&self);
}

/// JSON-file-backed store.
///
/// Loads the whole object file into memory at open and serves reads from
/// there. `close` re-syncs from the file, so edits made to the file
/// between requests become visible, like the original FileStorage whose
/// close delegated to reload.
pub struct FileStorage {
    path: PathBuf,
    objects: RwLock<HashMap<String, Record>>,
}

impl FileStorage {
    /// Open a store backed by `path`. A missing file is an empty store;
    /// a present but malformed file is an error.
    pub fn open(path: &Path) -> io::Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
            objects: RwLock::new(HashMap::new()),
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the backing file, replacing the in-memory map.
    pub fn reload(&self) -> io::Result<()> {
        let loaded = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str::<HashMap<String, Record>>(&text)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        let mut objects = self.objects.write().expect("storage lock poisoned");
        *objects = loaded;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn all<T: Model>(&self) -> HashMap<String, T> {
        let objects = self.objects.read().expect("storage lock poisoned");
        objects
            .values()
            .filter_map(T::from_record)
            .map(|obj| (obj.id().to_owned(), obj))
            .collect()
    }

    fn get<T: Model>(&self, id: &str) -> Option<T> {
        let objects = self.objects.read().expect("storage lock poisoned");
        objects
            .get(&format!("{}.{id}", T::NAME))
            .and_then(T::from_record)
    }

    fn close(&self) {
        // Teardown runs on every exit path; a failed re-read keeps the
        // previous snapshot rather than failing the response.
        let _ = self.reload();
    }
}

/// Map-backed store with no backing file. `close` is a no-op.
#[derive(Default)]
pub struct MemoryStorage {
    objects: HashMap<String, Record>,
}

impl MemoryStorage {
    /// Add one record, replacing any record with the same kind and id.
    pub fn insert(&mut self, record: Record) {
        self.objects.insert(record.key(), record);
    }
}

impl Storage for MemoryStorage {
    fn all<T: Model>(&self) -> HashMap<String, T> {
        self.objects
            .values()
            .filter_map(T::from_record)
            .map(|obj| (obj.id().to_owned(), obj))
            .collect()
    }

    fn get<T: Model>(&self, id: &str) -> Option<T> {
        self.objects
            .get(&format!("{}.{id}", T::NAME))
            .and_then(T::from_record)
    }

    fn close(&self) {}
}
