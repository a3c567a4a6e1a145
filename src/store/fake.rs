//! In-memory [`SettingsStore`] for tests.

use super::{SettingsStore, StoreError};
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

type Addr = (String, String);

fn addr(schema: &str, key: &str) -> Addr {
    (schema.to_owned(), key.to_owned())
}

/// Values keyed by `(schema, key)`. Every successful or failed `set` is
/// appended to [`FakeStore::sets`].
#[derive(Default)]
pub struct FakeStore {
    values: RefCell<HashMap<Addr, String>>,
    failing_gets: HashMap<Addr, String>,
    failing_sets: HashSet<Addr>,
    sets: RefCell<Vec<(String, String, String)>>,
}

impl FakeStore {
    pub fn with(mut self, schema: &str, key: &str, value: &str) -> Self {
        self.values.get_mut().insert(addr(schema, key), value.to_owned());
        self
    }

    /// Make `get` fail after emitting `partial` on stdout.
    pub fn failing_get(mut self, schema: &str, key: &str, partial: &str) -> Self {
        self.failing_gets.insert(addr(schema, key), partial.to_owned());
        self
    }

    pub fn failing_set(mut self, schema: &str, key: &str) -> Self {
        self.failing_sets.insert(addr(schema, key));
        self
    }

    pub fn value(&self, schema: &str, key: &str) -> Option<String> {
        self.values.borrow().get(&addr(schema, key)).cloned()
    }

    pub fn sets(&self) -> Vec<(String, String, String)> {
        self.sets.borrow().clone()
    }

    fn failed(op: &'static str, schema: &str, key: &str, stdout: &str) -> StoreError {
        StoreError::Failed {
            op,
            schema: schema.to_owned(),
            key: key.to_owned(),
            code: Some(1),
            stdout: stdout.to_owned(),
            stderr: "No such key".to_owned(),
        }
    }
}

impl SettingsStore for FakeStore {
    fn get(&self, schema: &str, key: &str) -> Result<String, StoreError> {
        let at = addr(schema, key);
        if let Some(partial) = self.failing_gets.get(&at) {
            return Err(Self::failed("get", schema, key, partial));
        }
        match self.values.borrow().get(&at) {
            // gsettings terminates its output with a newline.
            Some(v) => Ok(format!("{v}\n")),
            None => Err(Self::failed("get", schema, key, "")),
        }
    }

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.sets
            .borrow_mut()
            .push((schema.to_owned(), key.to_owned(), value.to_owned()));

        let at = addr(schema, key);
        if self.failing_sets.contains(&at) {
            return Err(Self::failed("set", schema, key, ""));
        }
        self.values.borrow_mut().insert(at, value.to_owned());
        Ok(())
    }
}
