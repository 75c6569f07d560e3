// Contact record and the field accessor table shared by search, update
// and the table renderer.

use crate::phone::normalize_phone;
use std::fmt;

/// One phone book entry, identified by its personal phone number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub personal_phone: String,
    pub last_name: String,
    pub first_name: String,
    /// Patronymic.
    pub surname: String,
    pub organisation_name: String,
    pub work_phone: String,
}

impl Contact {
    /// Create a contact with only the personal number set (normalized).
    pub fn new(personal_phone: &str) -> Self {
        Contact {
            personal_phone: normalize_phone(personal_phone),
            ..Default::default()
        }
    }

    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        field.set(&mut self, value.into());
        self
    }
}

/// A named contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    LastName,
    FirstName,
    Surname,
    PersonalPhone,
    WorkPhone,
    Organisation,
}

/// Accepted spellings for each field, lower case, English and Russian.
const FIELD_NAMES: &[(ContactField, &[&str])] = &[
    (
        ContactField::LastName,
        &["last name", "last_name", "lastname", "family name", "фамилия", "фамилию"],
    ),
    (
        ContactField::FirstName,
        &["first name", "first_name", "firstname", "name", "имя"],
    ),
    (
        ContactField::Surname,
        &["surname", "patronymic", "middle name", "отчество"],
    ),
    (
        ContactField::PersonalPhone,
        &[
            "personal phone",
            "personal_phone",
            "personal",
            "mobile",
            "phone",
            "number",
            "номер",
            "сотовый",
            "сотовый номер",
            "личный",
            "личный номер",
            "телефон",
        ],
    ),
    (
        ContactField::WorkPhone,
        &[
            "work phone",
            "work_phone",
            "phone_work",
            "work",
            "рабочий",
            "рабочий номер",
            "телефон рабочий",
        ],
    ),
    (
        ContactField::Organisation,
        &[
            "organisation",
            "organization",
            "organisation name",
            "organisation_name",
            "company",
            "организация",
            "организацию",
            "имя организации",
            "название организации",
        ],
    ),
];

impl ContactField {
    /// All fields in prompt and display order.
    pub const ALL: [ContactField; 6] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::Surname,
        ContactField::PersonalPhone,
        ContactField::WorkPhone,
        ContactField::Organisation,
    ];

    /// Resolve a user supplied field name or synonym.
    pub fn from_name(name: &str) -> Option<ContactField> {
        let name = name.trim().to_lowercase();
        FIELD_NAMES
            .iter()
            .find(|(_, names)| names.contains(&name.as_str()))
            .map(|(field, _)| *field)
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::LastName => "Last name",
            ContactField::FirstName => "First name",
            ContactField::Surname => "Surname",
            ContactField::PersonalPhone => "Personal phone",
            ContactField::WorkPhone => "Work phone",
            ContactField::Organisation => "Organisation",
        }
    }

    pub fn get(self, contact: &Contact) -> &str {
        match self {
            ContactField::LastName => &contact.last_name,
            ContactField::FirstName => &contact.first_name,
            ContactField::Surname => &contact.surname,
            ContactField::PersonalPhone => &contact.personal_phone,
            ContactField::WorkPhone => &contact.work_phone,
            ContactField::Organisation => &contact.organisation_name,
        }
    }

    /// Store `value` in the field. Personal numbers are normalized first.
    pub fn set(self, contact: &mut Contact, value: String) {
        match self {
            ContactField::LastName => contact.last_name = value,
            ContactField::FirstName => contact.first_name = value,
            ContactField::Surname => contact.surname = value,
            ContactField::PersonalPhone => contact.personal_phone = normalize_phone(&value),
            ContactField::WorkPhone => contact.work_phone = value,
            ContactField::Organisation => contact.organisation_name = value,
        }
    }

    /// Canonical form of a query value for this field.
    pub fn normalize_query(self, value: &str) -> String {
        match self {
            ContactField::PersonalPhone => normalize_phone(value),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
