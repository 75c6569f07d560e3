// Save files: one JSON object per phone book, keyed by personal number.
//
//   {
//      "8(916)123-45-67": {
//         "last_name": "...",
//         "first_name": "...",
//         "surname": "...",
//         "organisation_name": "...",
//         "phone_work": "..."
//      }
//   }

use crate::contact::Contact;
use crate::error::{BookError, BookResult};
use crate::phone::normalize_phone;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File used when the user leaves the name blank.
pub const DEFAULT_SAVE_FILE: &str = "save_book.json";

/// Per-contact value stored under the personal number key. Older files may
/// carry `null` for any field.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
struct ContactRecord {
    last_name: Option<String>,
    first_name: Option<String>,
    surname: Option<String>,
    organisation_name: Option<String>,
    phone_work: Option<String>,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        ContactRecord {
            last_name: Some(contact.last_name.clone()),
            first_name: Some(contact.first_name.clone()),
            surname: Some(contact.surname.clone()),
            organisation_name: Some(contact.organisation_name.clone()),
            phone_work: Some(contact.work_phone.clone()),
        }
    }
}

impl ContactRecord {
    fn into_contact(self, personal_phone: &str) -> Contact {
        Contact {
            personal_phone: normalize_phone(personal_phone),
            last_name: self.last_name.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            organisation_name: self.organisation_name.unwrap_or_default(),
            work_phone: self.phone_work.unwrap_or_default(),
        }
    }
}

/// Directory of save files.
#[derive(Debug, Clone)]
pub struct SaveDir {
    dir: PathBuf,
}

impl SaveDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SaveDir { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// File name for a save typed by the user: blank means the default file,
    /// `.json` is added when missing.
    pub fn file_name(name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            DEFAULT_SAVE_FILE.to_string()
        } else if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        }
    }

    /// Write `contacts` under `name`, creating the directory if needed.
    pub fn save(&self, name: &str, contacts: &[Contact]) -> BookResult<PathBuf> {
        let path = self.dir.join(Self::file_name(name));

        let mut book = Map::new();
        for contact in contacts {
            let record = serde_json::to_value(ContactRecord::from(contact))
                .map_err(|e| BookError::storage(&path, e.into()))?;
            book.insert(contact.personal_phone.clone(), record);
        }

        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        book.serialize(&mut ser)
            .map_err(|e| BookError::storage(&path, e.into()))?;

        fs::create_dir_all(&self.dir).map_err(|e| BookError::storage(&self.dir, e))?;
        fs::File::create(&path)
            .and_then(|mut file| file.write_all(&out))
            .map_err(|e| BookError::storage(&path, e))?;

        info!(path = %path.display(), count = contacts.len(), "Phone book saved");
        Ok(path)
    }

    /// Names of the `*.json` files in the directory, sorted. A missing
    /// directory has no saves.
    pub fn list(&self) -> BookResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BookError::storage(&self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BookError::storage(&self.dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| BookError::storage(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(".json") {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read the save called `file_name`; blank means the default file.
    pub fn load(&self, file_name: &str) -> BookResult<Vec<Contact>> {
        let file_name = if file_name.trim().is_empty() {
            DEFAULT_SAVE_FILE
        } else {
            file_name.trim()
        };
        let path = self.dir.join(file_name);

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Save file not found");
                return Err(BookError::FileNotFound(path));
            }
            Err(e) => return Err(BookError::storage(path, e)),
        };

        let malformed = |reason: String| BookError::MalformedSave {
            path: path.clone(),
            reason,
        };

        let book: Map<String, Value> =
            serde_json::from_slice(&data).map_err(|e| malformed(e.to_string()))?;

        // Keys are unique as written but may collide once normalized.
        let mut contacts: Vec<Contact> = Vec::with_capacity(book.len());
        for (phone, value) in book {
            let record: ContactRecord = serde_json::from_value(value)
                .map_err(|e| malformed(format!("entry {phone}: {e}")))?;
            let contact = record.into_contact(&phone);
            if contacts
                .iter()
                .any(|c| c.personal_phone == contact.personal_phone)
            {
                warn!(
                    path = %path.display(),
                    phone = %contact.personal_phone,
                    "Duplicate personal number in save"
                );
                return Err(malformed(format!(
                    "personal number {} appears more than once",
                    contact.personal_phone
                )));
            }
            contacts.push(contact);
        }

        info!(path = %path.display(), count = contacts.len(), "Phone book loaded");
        Ok(contacts)
    }
}
