//! Fixture backups for unit tests

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use rusqlite::{params, Connection};

use crate::backup::{INFO_PLIST, MANIFEST_DB};
use crate::extract::MANIFEST_PLIST;
use crate::models::{WantedFile, WANTED_FILES};

/// fileIDs real devices use for the wanted files (SHA-1 of `domain-path`)
pub fn known_file_id(wanted: &WantedFile) -> &'static str {
    match wanted.output_name {
        "AddressBook.sqlite" => "31bb7ba8914766d4ba40d6dfb6113c8b614be442",
        "ChatStorage.sqlite" => "7c7fba66680ef796b916b067077cc246adacf01d",
        "sms.db" => "3d0d7e5fb2ce288813306e4d4636395e047a3d28",
        other => panic!("no known fileID for {}", other),
    }
}

pub fn wanted(output_name: &str) -> &'static WantedFile {
    WANTED_FILES
        .iter()
        .find(|w| w.output_name == output_name)
        .unwrap()
}

struct Entry {
    domain: String,
    relative_path: String,
    file_id: String,
    flags: i64,
    contents: Option<Vec<u8>>,
}

/// Builds a backup directory with a real `Manifest.db`
pub struct FixtureBackup {
    dir: PathBuf,
    entries: Vec<Entry>,
    encrypted: Option<bool>,
}

impl FixtureBackup {
    pub fn new(root: &Path, identifier: &str) -> Self {
        Self {
            dir: root.join(identifier),
            entries: Vec::new(),
            encrypted: None,
        }
    }

    /// Add a wanted file under its real fileID, with content on disk
    pub fn with_wanted(self, output_name: &str, contents: &[u8]) -> Self {
        let wanted = wanted(output_name);
        self.with_entry(
            wanted.domain,
            wanted.relative_path,
            known_file_id(wanted),
            Some(contents),
        )
    }

    /// Add every wanted file
    pub fn with_all_wanted(self) -> Self {
        WANTED_FILES.iter().fold(self, |fixture, w| {
            fixture.with_wanted(w.output_name, w.output_name.as_bytes())
        })
    }

    /// Add a manifest row; `contents` of `None` leaves the file off disk
    pub fn with_entry(
        mut self,
        domain: &str,
        relative_path: &str,
        file_id: &str,
        contents: Option<&[u8]>,
    ) -> Self {
        self.entries.push(Entry {
            domain: domain.into(),
            relative_path: relative_path.into(),
            file_id: file_id.into(),
            flags: 1,
            contents: contents.map(<[u8]>::to_vec),
        });
        self
    }

    /// Add a directory row, which the manifest loader must ignore
    pub fn with_directory(mut self, domain: &str, relative_path: &str, file_id: &str) -> Self {
        self.entries.push(Entry {
            domain: domain.into(),
            relative_path: relative_path.into(),
            file_id: file_id.into(),
            flags: 2,
            contents: None,
        });
        self
    }

    pub fn with_manifest_plist(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub fn build(self) -> PathBuf {
        fs::create_dir_all(&self.dir).unwrap();

        let conn = Connection::open(self.dir.join(MANIFEST_DB)).unwrap();
        conn.execute_batch(
            "CREATE TABLE Files (
                fileID TEXT PRIMARY KEY,
                domain TEXT,
                relativePath TEXT,
                flags INTEGER,
                file BLOB
            );",
        )
        .unwrap();

        for entry in &self.entries {
            conn.execute(
                "INSERT INTO Files (fileID, domain, relativePath, flags, file)
                 VALUES (?1, ?2, ?3, ?4, NULL)",
                params![entry.file_id, entry.domain, entry.relative_path, entry.flags],
            )
            .unwrap();

            if let Some(contents) = &entry.contents {
                let shard = self.dir.join(&entry.file_id[..2]);
                fs::create_dir_all(&shard).unwrap();
                fs::write(shard.join(&entry.file_id), contents).unwrap();
            }
        }
        drop(conn);

        if let Some(encrypted) = self.encrypted {
            fs::write(
                self.dir.join(MANIFEST_PLIST),
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>IsEncrypted</key>
    <{}/>
    <key>Version</key>
    <string>10.0</string>
</dict>
</plist>
"#,
                    encrypted
                ),
            )
            .unwrap();
        }

        self.dir
    }
}

pub fn set_manifest_mtime(backup_dir: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(
        backup_dir.join(MANIFEST_DB),
        FileTime::from_unix_time(unix_seconds, 0),
    )
    .unwrap();
}

/// Write an `Info.plist`; `last_backup` is an ISO-8601 UTC timestamp
pub fn write_info_plist(backup_dir: &Path, device_name: &str, product_version: &str, last_backup: &str) {
    fs::write(
        backup_dir.join(INFO_PLIST),
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Build Version</key>
    <string>20D47</string>
    <key>Device Name</key>
    <string>{}</string>
    <key>Last Backup Date</key>
    <date>{}</date>
    <key>Product Name</key>
    <string>iPhone 14 Pro</string>
    <key>Product Version</key>
    <string>{}</string>
    <key>Unique Identifier</key>
    <string>00008030-001A2B3C4D5E6F70</string>
</dict>
</plist>
"#,
            device_name, last_backup, product_version
        ),
    )
    .unwrap();
}
