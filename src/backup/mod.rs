//! Backup discovery for iosextract
//!
//! Locates device backups under a backup root and reads the device details
//! each one records.
//!
//! # Layout
//!
//! A backup root holds one directory per device backup, named by the backup
//! identifier:
//!
//! ```text
//! Backup/
//! └── 00008030-001A2B3C4D5E6F70/
//!     ├── Info.plist
//!     ├── Manifest.db
//!     ├── Manifest.plist
//!     ├── 31/31bb7ba8914766d4ba40d6dfb6113c8b614be442
//!     └── ...
//! ```

mod device;
mod locator;

pub use device::{load_device_info, INFO_PLIST};
pub use locator::{most_recent, BackupLocator, MANIFEST_DB};
