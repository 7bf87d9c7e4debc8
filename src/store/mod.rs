//! SQLite-backed credential store
//!
//! Owns the `users` table and answers exactly one question: do this
//! username and password match a stored record, and if so with which
//! role. Storage errors never escape to callers; they are logged and the
//! operation degrades to a no-op (init) or a miss (authenticate), so the
//! application keeps running even with a broken database file.
//!
//! Passwords are compared as plaintext strings. This is a demo
//! credential table, not a production login; see DESIGN.md.

use std::path::{Path, PathBuf};

use log::{error, warn};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::core::Role;

/// The four fixed accounts inserted on first initialization
const SEED_ACCOUNTS: [(&str, &str, &str, &str); 4] = [
    ("admin", "admin123", "admin", "admin@example.com"),
    ("engineer", "engineer123", "engineer", "engineer@example.com"),
    ("technician", "tech123", "technician", "tech@example.com"),
    ("manager", "manager123", "manager", "manager@example.com"),
];

#[derive(Debug, Error)]
enum StoreError {
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("could not create data directory: {0}")]
    CreateDir(#[from] std::io::Error),
}

/// Handle to the credential table.
///
/// Holds only the database path; a connection is opened and closed per
/// call. There is no pooling and no cross-call transaction.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the per-user data directory
    pub fn open_default() -> Self {
        match Self::default_path() {
            Ok(path) => Self::new(path),
            Err(e) => {
                // Fall back to the working directory rather than failing
                error!("Falling back to ./pipemon.db: {}", e);
                Self::new("pipemon.db")
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> Result<PathBuf, StoreError> {
        let dirs = directories::ProjectDirs::from("com", "github.pipemon", "pipemon")
            .ok_or(StoreError::NoDataDir)?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Ok(dirs.data_dir().join("pipemon.db"))
    }

    /// Ensure the users table exists and is seeded.
    ///
    /// Idempotent: the seed rows are only inserted when the table is
    /// empty. Errors are logged and swallowed; a failed initialization
    /// leaves the store empty, and every login simply misses.
    pub fn initialize(&self) {
        if let Err(e) = self.try_initialize() {
            error!("Credential store initialization failed: {}", e);
        }
    }

    fn try_initialize(&self) -> Result<(), StoreError> {
        let conn = Connection::open(&self.path)?;

        conn.execute(
            "create table if not exists users (
                id integer primary key autoincrement,
                username text unique not null,
                password text not null,
                role text not null,
                email text
            )",
            [],
        )?;

        let count: i64 = conn.query_row("select count(1) from users", [], |r| r.get(0))?;
        if count == 0 {
            for (username, password, role, email) in SEED_ACCOUNTS {
                conn.execute(
                    "insert into users (username, password, role, email) values (?1, ?2, ?3, ?4)",
                    params![username, password, role, email],
                )?;
            }
        }

        Ok(())
    }

    /// Check credentials against the stored records.
    ///
    /// Exact string match on both fields; returns the stored role on a
    /// hit and `None` for unknown username, wrong password, or any
    /// storage error. Read-only.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        let role_text = match self.query_role(username, password) {
            Ok(role_text) => role_text?,
            Err(e) => {
                error!("Authentication query failed: {}", e);
                return None;
            }
        };

        let role = Role::parse(&role_text);
        if role.is_none() {
            warn!(
                "User '{}' has unrecognized role '{}', treating as login failure",
                username, role_text
            );
        }
        role
    }

    fn query_role(&self, username: &str, password: &str) -> Result<Option<String>, StoreError> {
        let conn = Connection::open(&self.path)?;
        let mut stmt =
            conn.prepare("select role from users where username = ?1 and password = ?2")?;
        let mut rows = stmt.query(params![username, password])?;
        if let Some(row) = rows.next()? {
            let role: String = row.get(0)?;
            return Ok(Some(role));
        }
        Ok(None)
    }

    #[cfg(test)]
    fn user_count(&self) -> Result<i64, StoreError> {
        let conn = Connection::open(&self.path)?;
        Ok(conn.query_row("select count(1) from users", [], |r| r.get(0))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MonitorState, SensorStatus};

    /// Store backed by a throwaway database file, removed on drop
    struct TempStore {
        store: CredentialStore,
    }

    impl TempStore {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "pipemon-test-{}-{}.db",
                tag,
                std::process::id()
            ));
            let _ = std::fs::remove_file(&path);
            let store = CredentialStore::new(path);
            store.initialize();
            Self { store }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(self.store.path());
        }
    }

    #[test]
    fn test_seed_accounts_authenticate() {
        let t = TempStore::new("seed");
        assert_eq!(t.store.authenticate("admin", "admin123"), Some(Role::Admin));
        assert_eq!(
            t.store.authenticate("engineer", "engineer123"),
            Some(Role::Engineer)
        );
        assert_eq!(
            t.store.authenticate("technician", "tech123"),
            Some(Role::Technician)
        );
        assert_eq!(
            t.store.authenticate("manager", "manager123"),
            Some(Role::Manager)
        );
    }

    #[test]
    fn test_bad_credentials_miss() {
        let t = TempStore::new("miss");
        assert_eq!(t.store.authenticate("admin", "wrong"), None);
        assert_eq!(t.store.authenticate("nobody", "admin123"), None);
        assert_eq!(t.store.authenticate("", ""), None);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let t = TempStore::new("idempotent");
        t.store.initialize();
        assert_eq!(t.store.user_count().unwrap(), 4);
    }

    #[test]
    fn test_unrecognized_role_is_a_miss() {
        let t = TempStore::new("badrole");
        let conn = Connection::open(t.store.path()).unwrap();
        conn.execute(
            "insert into users (username, password, role, email) values ('eve', 'eve123', 'superuser', null)",
            [],
        )
        .unwrap();
        drop(conn);
        assert_eq!(t.store.authenticate("eve", "eve123"), None);
    }

    #[test]
    fn test_missing_database_directory_fails_quietly() {
        let store = CredentialStore::new("/nonexistent-dir/pipemon.db");
        store.initialize();
        assert_eq!(store.authenticate("admin", "admin123"), None);
    }

    #[test]
    fn test_engineer_login_to_submerged_reading() {
        // Full flow: authenticate, open the shell state, simulate water
        // on sensor 2, observe the derived status.
        let t = TempStore::new("scenario");
        let role = t.store.authenticate("engineer", "engineer123").unwrap();
        assert!(role.can_simulate());

        let mut state = MonitorState::new(role);
        assert!(state
            .sensors()
            .iter()
            .all(|s| s.status == SensorStatus::Normal));

        state.simulate_water(1, 750);
        assert_eq!(state.sensors()[1].status, SensorStatus::FullySubmerged);
    }
}
