use taskpad_core::{
  KeyValueStorage,
  MemoryStorage,
  StorageError
};

/// `window.localStorage`, or an
/// in-memory stand-in when the browser
/// refuses to provide one (private
/// windows, sandboxed frames). With the
/// stand-in, tasks last only until the
/// page is closed.
#[derive(Debug, Clone)]
pub enum BrowserStorage {
  Local(web_sys::Storage),
  Memory(MemoryStorage)
}

impl BrowserStorage {
  pub fn open() -> Self {
    let local = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });

    match local {
      | Some(storage) => {
        Self::Local(storage)
      }
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           tasks will not persist"
        );
        Self::Memory(MemoryStorage::new())
      }
    }
  }
}

impl KeyValueStorage for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    match self {
      | Self::Local(storage) => storage
        .get_item(key)
        .map_err(|err| {
          StorageError::Unavailable(
            format!("{err:?}")
          )
        }),
      | Self::Memory(storage) => {
        storage.get_item(key)
      }
    }
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    match self {
      | Self::Local(storage) => storage
        .set_item(key, value)
        .map_err(|err| {
          StorageError::Rejected {
            key:    key.to_string(),
            reason: format!("{err:?}")
          }
        }),
      | Self::Memory(storage) => {
        storage.set_item(key, value)
      }
    }
  }

  fn remove_item(
    &self,
    key: &str
  ) -> Result<(), StorageError> {
    match self {
      | Self::Local(storage) => storage
        .remove_item(key)
        .map_err(|err| {
          StorageError::Rejected {
            key:    key.to_string(),
            reason: format!("{err:?}")
          }
        }),
      | Self::Memory(storage) => {
        storage.remove_item(key)
      }
    }
  }
}
