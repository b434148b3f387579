//! Wanted files
//!
//! The fixed set of databases pulled out of every backup. Adding a target is
//! a new row in [`WANTED_FILES`].

use std::fmt;

/// A logical file inside a backup and the name it is copied out under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WantedFile {
    /// Short description for listings
    pub label: &'static str,
    /// Manifest domain, e.g. `HomeDomain`
    pub domain: &'static str,
    /// Path relative to the domain root
    pub relative_path: &'static str,
    /// File name in the output directory
    pub output_name: &'static str,
}

impl fmt::Display for WantedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.domain, self.relative_path)
    }
}

pub const WANTED_FILES: &[WantedFile] = &[
    WantedFile {
        label: "Contacts",
        domain: "HomeDomain",
        relative_path: "Library/AddressBook/AddressBook.sqlitedb",
        output_name: "AddressBook.sqlite",
    },
    WantedFile {
        label: "WhatsApp chats",
        domain: "AppDomainGroup-group.net.whatsapp.WhatsApp.shared",
        relative_path: "ChatStorage.sqlite",
        output_name: "ChatStorage.sqlite",
    },
    WantedFile {
        label: "Messages",
        domain: "HomeDomain",
        relative_path: "Library/SMS/sms.db",
        output_name: "sms.db",
    },
];
