use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StorageError;

/// String key/value facility the task
/// collection is persisted into.
/// Mirrors the shape of the browser's
/// `localStorage`: whole values,
/// last write wins.
pub trait KeyValueStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError>;

  /// Removing an absent key is not an
  /// error.
  fn remove_item(
    &self,
    key: &str
  ) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the
/// same entries, like two handles on
/// one `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  items: Rc<RefCell<BTreeMap<String, String>>>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.items.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.borrow().is_empty()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    Ok(
      self
        .items
        .borrow()
        .get(key)
        .cloned()
    )
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    self
      .items
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    Ok(())
  }

  fn remove_item(
    &self,
    key: &str
  ) -> Result<(), StorageError> {
    self.items.borrow_mut().remove(key);
    Ok(())
  }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
  use std::fs;
  use std::io::{
    ErrorKind,
    Write
  };
  use std::path::{
    Path,
    PathBuf
  };

  use tempfile::NamedTempFile;
  use tracing::debug;

  use super::KeyValueStorage;
  use crate::error::StorageError;

  /// One file per key inside `dir`.
  /// Writes go through a temp file in
  /// the same directory and a rename.
  #[derive(Debug, Clone)]
  pub struct FileStorage {
    dir: PathBuf
  }

  impl FileStorage {
    pub fn new(
      dir: impl Into<PathBuf>
    ) -> Self {
      Self {
        dir: dir.into()
      }
    }

    pub fn dir(&self) -> &Path {
      &self.dir
    }

    pub fn path_for(
      &self,
      key: &str
    ) -> PathBuf {
      let file_name: String = key
        .chars()
        .map(|c| {
          if c.is_ascii_alphanumeric()
            || matches!(
              c,
              '.' | '-' | '_'
            )
          {
            c
          } else {
            '_'
          }
        })
        .collect();
      self
        .dir
        .join(format!("{file_name}.json"))
    }
  }

  impl KeyValueStorage for FileStorage {
    fn get_item(
      &self,
      key: &str
    ) -> Result<Option<String>, StorageError>
    {
      let path = self.path_for(key);
      if !path.exists() {
        return Ok(None);
      }
      debug!(file = %path.display(), "reading storage entry");
      fs::read_to_string(&path)
        .map(Some)
        .map_err(|source| {
          StorageError::Io {
            key: key.to_string(),
            source
          }
        })
    }

    fn set_item(
      &self,
      key: &str,
      value: &str
    ) -> Result<(), StorageError> {
      let io_err = |source: std::io::Error| {
        StorageError::Io {
          key: key.to_string(),
          source
        }
      };

      fs::create_dir_all(&self.dir)
        .map_err(io_err)?;

      let path = self.path_for(key);
      let mut temp =
        NamedTempFile::new_in(&self.dir)
          .map_err(io_err)?;
      temp
        .write_all(value.as_bytes())
        .map_err(io_err)?;
      temp.flush().map_err(io_err)?;
      temp
        .persist(&path)
        .map_err(|err| io_err(err.error))?;

      debug!(file = %path.display(), bytes = value.len(), "wrote storage entry");
      Ok(())
    }

    fn remove_item(
      &self,
      key: &str
    ) -> Result<(), StorageError> {
      let path = self.path_for(key);
      match fs::remove_file(&path) {
        | Ok(()) => {
          debug!(file = %path.display(), "removed storage entry");
          Ok(())
        }
        | Err(source)
          if source.kind()
            == ErrorKind::NotFound =>
        {
          Ok(())
        }
        | Err(source) => {
          Err(StorageError::Io {
            key: key.to_string(),
            source
          })
        }
      }
    }
  }
}
