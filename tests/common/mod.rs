//! Shared fixtures for CLI tests

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

pub const ADDRESS_BOOK: (&str, &str, &str) = (
    "HomeDomain",
    "Library/AddressBook/AddressBook.sqlitedb",
    "31bb7ba8914766d4ba40d6dfb6113c8b614be442",
);
pub const CHAT_STORAGE: (&str, &str, &str) = (
    "AppDomainGroup-group.net.whatsapp.WhatsApp.shared",
    "ChatStorage.sqlite",
    "7c7fba66680ef796b916b067077cc246adacf01d",
);
pub const SMS: (&str, &str, &str) = (
    "HomeDomain",
    "Library/SMS/sms.db",
    "3d0d7e5fb2ce288813306e4d4636395e047a3d28",
);

/// Create `root/identifier` with a Manifest.db listing `files` and their contents
pub fn make_backup(root: &Path, identifier: &str, files: &[((&str, &str, &str), &[u8])]) -> PathBuf {
    let dir = root.join(identifier);
    fs::create_dir_all(&dir).unwrap();

    let conn = Connection::open(dir.join("Manifest.db")).unwrap();
    conn.execute_batch(
        "CREATE TABLE Files (fileID TEXT PRIMARY KEY, domain TEXT, relativePath TEXT, flags INTEGER, file BLOB);",
    )
    .unwrap();

    for ((domain, relative_path, file_id), contents) in files {
        conn.execute(
            "INSERT INTO Files VALUES (?1, ?2, ?3, 1, NULL)",
            params![file_id, domain, relative_path],
        )
        .unwrap();
        let shard = dir.join(&file_id[..2]);
        fs::create_dir_all(&shard).unwrap();
        fs::write(shard.join(file_id), contents).unwrap();
    }

    dir
}

/// The single run directory created under `output_root`
pub fn only_run_dir(output_root: &Path) -> PathBuf {
    let mut dirs: Vec<_> = fs::read_dir(output_root)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(dirs.len(), 1, "expected exactly one run directory");
    dirs.remove(0)
}
