// Exact-match search over the contact store.
//
// A contact scores one point per criterion whose value equals the matching
// field exactly. Results are ordered by score, best first, and contacts that
// score nothing are dropped.

use crate::contact::{Contact, ContactField};
use tracing::debug;

/// A field to compare and the value it must equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub field: ContactField,
    pub value: String,
}

impl Criterion {
    /// Build a criterion, normalizing the value the way the field stores it.
    pub fn new(field: ContactField, value: &str) -> Self {
        Criterion {
            field,
            value: field.normalize_query(value),
        }
    }

    fn matches(&self, contact: &Contact) -> bool {
        self.field.get(contact) == self.value
    }
}

/// One search hit: the contact's position in the store and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub score: usize,
}

/// Result of splitting a criteria list typed by the user.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedCriteria {
    /// Recognized fields in canonical order, each once.
    pub fields: Vec<ContactField>,
    /// Names that matched no field.
    pub unknown: Vec<String>,
}

/// Split a comma separated list of criterion names into fields.
pub fn parse_criteria(input: &str) -> ParsedCriteria {
    let mut parsed = ParsedCriteria::default();
    for name in input.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match ContactField::from_name(name) {
            Some(field) => {
                if !parsed.fields.contains(&field) {
                    parsed.fields.push(field);
                }
            }
            None => parsed.unknown.push(name.to_string()),
        }
    }
    parsed.fields.sort();
    parsed
}

/// Number of criteria the contact satisfies.
pub fn score(contact: &Contact, criteria: &[Criterion]) -> usize {
    criteria.iter().filter(|c| c.matches(contact)).count()
}

/// Score every contact and keep those with at least one match, best first.
///
/// The sort is stable, so contacts with equal scores keep store order.
pub fn search(contacts: &[Contact], criteria: &[Criterion]) -> Vec<Match> {
    let mut matches: Vec<Match> = contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| Match {
            index,
            score: score(contact, criteria),
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.retain(|m| m.score > 0);

    debug!(
        criteria = criteria.len(),
        scanned = contacts.len(),
        found = matches.len(),
        "Search finished"
    );
    matches
}
