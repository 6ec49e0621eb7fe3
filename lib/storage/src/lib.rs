//! In-memory session storage and CSV import/export.

pub mod csv_io;
pub mod manager;
pub mod session;

pub use csv_io::{export_csv, export_csv_string, import_csv, import_csv_file, EXPORT_FILE_NAME};
pub use manager::{SessionLimits, SessionManager, DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL};
pub use session::{Session, SessionInfo};
