//! Backup model
//!
//! Represents one device snapshot directory and the device details recorded
//! in its `Info.plist`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Device details from a backup's `Info.plist`
///
/// Every field is optional: older backups and some device types omit keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub build_version: Option<String>,
    pub device_name: Option<String>,
    pub display_name: Option<String>,
    pub guid: Option<String>,
    pub iccid: Option<String>,
    pub imei: Option<String>,
    pub imei_2: Option<String>,
    /// Recorded by the device in UTC
    pub last_backup_date: Option<DateTime<Utc>>,
    pub meid: Option<String>,
    pub phone_number: Option<String>,
    pub product_name: Option<String>,
    pub product_type: Option<String>,
    /// iOS version, e.g. "16.3"
    pub product_version: Option<String>,
    pub serial_number: Option<String>,
    pub target_identifier: Option<String>,
    pub unique_identifier: Option<String>,
}

impl DeviceInfo {
    /// Present string fields, labelled with their `Info.plist` key, in key order
    pub fn labelled_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Build Version", &self.build_version),
            ("Device Name", &self.device_name),
            ("Display Name", &self.display_name),
            ("GUID", &self.guid),
            ("ICCID", &self.iccid),
            ("IMEI", &self.imei),
            ("IMEI 2", &self.imei_2),
            ("MEID", &self.meid),
            ("Phone Number", &self.phone_number),
            ("Product Name", &self.product_name),
            ("Product Type", &self.product_type),
            ("Product Version", &self.product_version),
            ("Serial Number", &self.serial_number),
            ("Target Identifier", &self.target_identifier),
            ("Unique Identifier", &self.unique_identifier),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// One backup directory found under the backup root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    /// Directory name, the device backup identifier
    pub identifier: String,
    /// Full path to the backup directory
    pub path: PathBuf,
    /// `Last Backup Date` from `Info.plist`, else the manifest's mtime
    pub last_modified: DateTime<Utc>,
    /// `None` when `Info.plist` is missing or unreadable
    pub device: Option<DeviceInfo>,
}

impl Backup {
    /// Human-readable name: the device name when known, else the identifier
    pub fn display_name(&self) -> &str {
        self.device
            .as_ref()
            .and_then(|d| d.device_name.as_deref())
            .unwrap_or(&self.identifier)
    }

    /// Whether `last_modified` is the device's recorded backup date rather
    /// than the manifest's mtime
    pub fn has_recorded_date(&self) -> bool {
        self.device
            .as_ref()
            .map_or(false, |d| d.last_backup_date.is_some())
    }
}
