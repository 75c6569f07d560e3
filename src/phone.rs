// Personal phone number normalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional `+7`/`8` prefix, a code starting with 4, 8 or 9 (optionally in
/// parentheses), then seven digits.
static RU_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+7|8)?\(?([489][0-9]{2})\)?([0-9]{3})([0-9]{2})([0-9]{2})$")
        .expect("Failed to compile phone number regex")
});

/// Bring a Russian mobile or landline number to `8(916)123-45-67` form.
///
/// Anything that does not look like such a number is returned unchanged,
/// including numbers that are already formatted.
///
/// # Example
///
/// ```
/// use phonebook_cli::phone::normalize_phone;
///
/// assert_eq!(normalize_phone("89161234567"), "8(916)123-45-67");
/// assert_eq!(normalize_phone("+79161234567"), "+7(916)123-45-67");
/// assert_eq!(normalize_phone("ext. 42"), "ext. 42");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    match RU_NUMBER_REGEX.captures(raw) {
        Some(caps) => {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            format!(
                "{}({}){}-{}-{}",
                prefix, &caps[2], &caps[3], &caps[4], &caps[5]
            )
        }
        None => raw.to_string(),
    }
}
