use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::SessionUser;

/// Key the session is stored under.
pub const SESSION_KEY: &str = "currentUser";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to {operation} session file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("session data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the session survives between runs.
pub trait SessionStorage {
    fn load(&self) -> Result<Option<SessionUser>, SessionError>;
    fn save(&self, user: &SessionUser) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session storage that lives as long as the value.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    user: RefCell<Option<SessionUser>>,
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<SessionUser>, SessionError> {
        Ok(self.user.borrow().clone())
    }

    fn save(&self, user: &SessionUser) -> Result<(), SessionError> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.user.borrow_mut().take();
        Ok(())
    }
}

/// Session storage in a small JSON document keyed by [`SESSION_KEY`].
///
/// Other keys in the document are preserved. A missing file means no
/// session. A document that cannot be read is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, SessionError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(SessionError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// The document to build the next write on; unreadable content is discarded.
    fn document_for_write(&self) -> Map<String, Value> {
        self.read_document().unwrap_or_else(|err| {
            warn!(
                path = %self.path.display(),
                error = %err,
                "replacing unreadable session file"
            );
            Map::new()
        })
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err("create directory", parent))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let written = write_synced(&temp_path, &bytes).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(io_err("replace", &self.path))
        });
        if let Err(err) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        debug!(path = %self.path.display(), "session file written");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), SessionError> {
    let mut file = File::create(path).map_err(io_err("create", path))?;
    file.write_all(bytes).map_err(io_err("write", path))?;
    file.sync_all().map_err(io_err("sync", path))
}

fn io_err(
    operation: &'static str,
    path: &Path,
) -> impl FnOnce(io::Error) -> SessionError + use<> {
    let path = path.to_path_buf();
    move |source| SessionError::Io {
        operation,
        path,
        source,
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<SessionUser>, SessionError> {
        let mut document = self.read_document()?;
        match document.remove(SESSION_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    fn save(&self, user: &SessionUser) -> Result<(), SessionError> {
        let mut document = self.document_for_write();
        document.insert(SESSION_KEY.to_string(), serde_json::to_value(user)?);
        self.write_document(&document)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let Ok(mut document) = self.read_document() else {
            return self.write_document(&Map::new());
        };
        if document.remove(SESSION_KEY).is_none() {
            return Ok(());
        }
        self.write_document(&document)
    }
}
