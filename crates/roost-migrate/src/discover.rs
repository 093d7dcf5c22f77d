//! Migration file discovery
//!
//! Lists the `.sql` files in a migrations directory in the order the
//! runner must consider them.

use std::path::{Path, PathBuf};

/// A migration file found on disk.
///
/// Re-derived on every run; whether it has been applied is looked up in
/// the ledger, never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// File name, e.g. `001_create_users.sql`; doubles as the ledger key
    pub name: String,
    /// Full path used to read the SQL content
    pub path: PathBuf,
}

/// List all `.sql` files in `dir`, ascending by file name.
///
/// Callers encode ordering in zero-padded numeric prefixes (`001_`,
/// `002_`, ...); plain byte-wise name comparison is the only ordering
/// primitive. Non-files and files without the `.sql` extension are
/// ignored. A missing or unreadable directory yields an empty list so a
/// deployment with nothing to apply still boots.
pub fn discover<P: AsRef<Path>>(dir: P) -> Vec<MigrationFile> {
    let dir = dir.as_ref();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(
                dir = %dir.display(),
                error = %e,
                "migrations directory not readable, nothing to apply"
            );
            return Vec::new();
        }
    };

    let mut files: Vec<MigrationFile> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            Some(MigrationFile { name, path })
        })
        .collect();

    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}
