//! Application state for the staff roster.
//!
//! - [`ProfileStore`] owns the canonical profile collection and the live query
//!   parameters, and keeps the derived view current after every change.
//! - [`SessionGate`] guards mutations behind a login. The bundled
//!   [`StaticCredentialGate`] checks a fixed credential list and is a
//!   placeholder for a real identity backend.
//!
//! Both are plain owned values; the presentation layer creates them and
//! passes them where they are needed.

pub mod session;
pub mod store;

pub use session::{
    Credential, FileSessionStorage, MemorySessionStorage, SESSION_KEY, SessionError, SessionGate,
    SessionStorage, SessionUser, StaticCredentialGate, default_credentials,
};
pub use store::{LOAD_ERROR_MESSAGE, ProfileStore, StoreSnapshot};
