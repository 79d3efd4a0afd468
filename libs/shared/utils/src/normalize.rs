//! Comparison keys for Arabic clinic and specialty names.
//!
//! Doctor records carry a free-text specialty ("القلب") while clinics carry a
//! display name ("عيادة القلب والأوعية الدموية"). Neither side is a foreign
//! key, so they are matched by reducing both to a key and testing substring
//! containment.

use shared_config::MatchingMode;

const CLINIC_WORD: &str = "عيادة";
const DEPARTMENT_WORD: &str = "قسم";
const DEFINITE_ARTICLE: &str = "ال";
const DROPPED_LETTERS: [char; 2] = ['ة', 'ه'];
const ALEF_VARIANTS: [char; 3] = ['أ', 'إ', 'آ'];
const ALEF: char = 'ا';

fn normalize_pass(text: &str) -> String {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if ALEF_VARIANTS.contains(&c) { ALEF } else { c })
        .collect::<String>()
        .to_lowercase();

    compact
        .replace(CLINIC_WORD, "")
        .replace(DEPARTMENT_WORD, "")
        .replace(&DROPPED_LETTERS[..], "")
        .replace(DEFINITE_ARTICLE, "")
}

/// Reduces a label to its comparison key. Absent input yields "".
///
/// Removals can expose new matches (stripping a space may join "ا" and "ل"),
/// so the pass runs until the key stops changing.
pub fn normalize_name(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut current = text.trim().to_string();
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Containment in either direction between two already-normalized keys.
///
/// An empty key is contained in everything; strict matching treats it as no
/// match instead.
pub fn keys_match(left: &str, right: &str, mode: MatchingMode) -> bool {
    if mode == MatchingMode::Strict && (left.is_empty() || right.is_empty()) {
        return false;
    }
    left.contains(right) || right.contains(left)
}

/// Normalizes both labels and compares their keys.
pub fn names_match(left: Option<&str>, right: Option<&str>, mode: MatchingMode) -> bool {
    keys_match(&normalize_name(left), &normalize_name(right), mode)
}
