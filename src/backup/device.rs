//! Device details from `Info.plist`

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use plist::{Dictionary, Value};

use crate::models::DeviceInfo;

/// File written by iTunes/Finder next to the manifest
pub const INFO_PLIST: &str = "Info.plist";

/// Read `Info.plist` from a backup directory
///
/// Returns `None` (after logging) when the file is missing or unreadable;
/// device details are informational and never block extraction.
pub fn load_device_info(backup_dir: &Path) -> Option<DeviceInfo> {
    let path = backup_dir.join(INFO_PLIST);
    if !path.is_file() {
        tracing::info!(dir = %backup_dir.display(), "no Info.plist found");
        return None;
    }

    let value = match Value::from_file(&path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read Info.plist");
            return None;
        }
    };

    match value.as_dictionary() {
        Some(dict) => Some(device_info_from_dict(dict)),
        None => {
            tracing::warn!(path = %path.display(), "Info.plist is not a dictionary");
            None
        }
    }
}

fn device_info_from_dict(dict: &Dictionary) -> DeviceInfo {
    let text = |key: &str| dict.get(key).and_then(Value::as_string).map(str::to_owned);

    DeviceInfo {
        build_version: text("Build Version"),
        device_name: text("Device Name"),
        display_name: text("Display Name"),
        guid: text("GUID"),
        iccid: text("ICCID"),
        imei: text("IMEI"),
        imei_2: text("IMEI 2"),
        last_backup_date: dict
            .get("Last Backup Date")
            .and_then(Value::as_date)
            .map(|date| DateTime::<Utc>::from(SystemTime::from(date))),
        meid: text("MEID"),
        phone_number: text("Phone Number"),
        product_name: text("Product Name"),
        product_type: text("Product Type"),
        product_version: text("Product Version"),
        serial_number: text("Serial Number"),
        target_identifier: text("Target Identifier"),
        unique_identifier: text("Unique Identifier"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_info_plist;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_load_device_info() {
        let temp = TempDir::new().unwrap();
        write_info_plist(temp.path(), "Ada's iPhone", "16.3", "2022-03-11T01:47:03Z");

        let info = load_device_info(temp.path()).unwrap();
        assert_eq!(info.device_name.as_deref(), Some("Ada's iPhone"));
        assert_eq!(info.product_version.as_deref(), Some("16.3"));
        assert_eq!(info.product_name.as_deref(), Some("iPhone 14 Pro"));
        assert_eq!(
            info.last_backup_date,
            Some(Utc.with_ymd_and_hms(2022, 3, 11, 1, 47, 3).unwrap())
        );
        assert!(info.meid.is_none());
    }

    #[test]
    fn test_missing_info_plist() {
        let temp = TempDir::new().unwrap();
        assert!(load_device_info(temp.path()).is_none());
    }

    #[test]
    fn test_corrupt_info_plist() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INFO_PLIST), "definitely not a plist").unwrap();
        assert!(load_device_info(temp.path()).is_none());
    }
}
