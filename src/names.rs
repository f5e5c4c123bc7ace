// src/names.rs
//
// Author-name grammar. GREC authors are typed by hand in every style
// imaginable ("Smith J", "J. R. Doe", "RAMON GARCIA LOPEZ", "Doe, J.R.");
// everything is reduced to "Lastname, F." (or "Lastname, F.M.").

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::sanitize::normalize_ws;

/// "Smith J", "Doe J R", "Frost RA" (anywhere after leading words).
static SURNAME_INITIALS: LazyLock<Regex> = regex!(r"^.*?(\S\S+)\s+(\S\S?)(?:\s+(\S))?$");

/// "J Smith", "J R Doe", "RA Frost".
static INITIALS_SURNAME: LazyLock<Regex> = regex!(r"^(\S\S?)\s+(?::?(\S)\s+)?(\S\S+)");

/// "John Smith", "Ralph Albert Frost".
static GIVEN_SURNAME: LazyLock<Regex> = regex!(r"^(\S+)\s+(?::?(\S+)\s+)?(\S+)");

/// A whole string that is exactly one surname-initials name.
static ONE_NAME: LazyLock<Regex> = regex!(r"^(\S\S+)\s+(\S\S?)(?:\s+(\S))?$");

/// Separators: semicolon plus English/Catalan/Spanish conjunctions.
static SPLIT_SEMI: LazyLock<Regex> = regex!(r";| and | i | amb | y ");
static SPLIT_COMMA: LazyLock<Regex> = regex!(r",| and | i | amb | y ");
/// No bare " i ": without a separator it is too likely an initial.
static SPLIT_CONJ: LazyLock<Regex> = regex!(r" and | amb | y ");

/// Normalize one author name to `"Lastname, F."`.
///
/// Dots and commas are blanked first, so already-normalized names come
/// back unchanged. A single token is returned as-is.
pub fn normalize_author_name(name: &str) -> String {
    let name = blank_punct(name);
    if name.is_empty() {
        return name;
    }

    if let Some(c) = SURNAME_INITIALS.captures(&name) {
        return surname_first(&c);
    }
    if let Some(c) = INITIALS_SURNAME.captures(&name) {
        return initials_first(&c);
    }
    if GIVEN_SURNAME.is_match(&name) {
        if is_upper(&name) {
            return upper_full_name(&name).unwrap_or(name);
        }
        if let Some(c) = GIVEN_SURNAME.captures(&name) {
            return given_names_first(&c);
        }
    }
    name
}

/// Split a raw author field into names and normalize each one.
pub fn normalize_author_list(raw: &str) -> Vec<String> {
    let pieces: Vec<String> = if raw.contains(';') {
        SPLIT_SEMI.split(raw).map(str::to_owned).collect()
    } else if raw.contains(',') {
        let blanked = blank_punct(raw);
        if ONE_NAME.is_match(&blanked) {
            SPLIT_CONJ.split(&blanked).map(str::to_owned).collect()
        } else {
            SPLIT_COMMA.split(raw).map(str::to_owned).collect()
        }
    } else {
        SPLIT_CONJ.split(raw).map(str::to_owned).collect()
    };

    pieces
        .iter()
        .map(|p| blank_punct(p))
        .filter(|p| !p.is_empty())
        .map(|p| normalize_author_name(&p))
        .collect()
}

/* ---------- rules ---------- */

fn surname_first(c: &Captures<'_>) -> String {
    let surname = &c[1];
    let given = &c[2];
    match c.get(3) {
        Some(second) => format!("{surname}, {given}.{}.", second.as_str()),
        None => format!("{surname}, {}", initials(given)),
    }
}

fn initials_first(c: &Captures<'_>) -> String {
    let given = &c[1];
    let surname = &c[3];
    match c.get(2) {
        Some(second) => format!("{surname}, {given}.{}.", second.as_str()),
        None => format!("{surname}, {}", initials(given)),
    }
}

fn given_names_first(c: &Captures<'_>) -> String {
    let first = initial(&c[1]);
    let surname = &c[3];
    match c.get(2) {
        Some(middle) => format!("{surname}, {first}.{}.", initial(middle.as_str())),
        None => format!("{surname}, {first}."),
    }
}

/// All-caps records come from the Spanish/Catalan staff directory:
/// given name(s) first, then two surnames. The first surname wins.
fn upper_full_name(name: &str) -> Option<String> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.len() {
        4 | 5 => Some(format!(
            "{}, {}.{}.",
            capitalize(tokens[2]),
            initial(tokens[0]),
            initial(tokens[1])
        )),
        2 | 3 => Some(format!("{}, {}.", capitalize(tokens[1]), initial(tokens[0]))),
        _ => None,
    }
}

/* ---------- helpers ---------- */

/// "J" → "J.", "RA" → "R.A."
fn initials(token: &str) -> String {
    token.chars().flat_map(|ch| [ch, '.']).collect()
}

fn initial(token: &str) -> char {
    token.chars().next().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}

/// At least one cased letter and no lowercase ones.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

fn blank_punct(s: &str) -> String {
    normalize_ws(&s.replace(['.', ','], " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_then_initials() {
        assert_eq!(normalize_author_name("Smith J"), "Smith, J.");
        assert_eq!(normalize_author_name("Doe J R"), "Doe, J.R.");
        assert_eq!(normalize_author_name("Frost RA"), "Frost, R.A.");
    }

    #[test]
    fn initials_then_surname() {
        assert_eq!(normalize_author_name("J Smith"), "Smith, J.");
        assert_eq!(normalize_author_name("J R Doe"), "Doe, J.R.");
        assert_eq!(normalize_author_name("RA Frost"), "Frost, R.A.");
        assert_eq!(normalize_author_name("J. R. Doe"), "Doe, J.R.");
    }

    #[test]
    fn full_given_names() {
        assert_eq!(normalize_author_name("John Smith"), "Smith, J.");
        assert_eq!(normalize_author_name("Ralph Albert Frost"), "Frost, R.A.");
        assert_eq!(normalize_author_name("Cèsar Fernández"), "Fernández, C.");
    }

    #[test]
    fn uppercase_directory_names() {
        assert_eq!(normalize_author_name("RAMON BEJAR"), "Bejar, R.");
        assert_eq!(normalize_author_name("RAMON BEJAR TORRES"), "Bejar, R.");
        assert_eq!(normalize_author_name("JUAN CARLOS GARCIA LOPEZ"), "Garcia, J.C.");
        assert_eq!(normalize_author_name("JOSEP MARIA RIBO BALUST"), "Ribo, J.M.");
    }

    #[test]
    fn single_token_untouched() {
        assert_eq!(normalize_author_name("Anonymous"), "Anonymous");
        assert_eq!(normalize_author_name("   "), "");
    }

    #[test]
    fn normalized_names_are_fixed_points() {
        for n in ["Smith, J.", "Doe, J.R.", "Frost, R.A."] {
            assert_eq!(normalize_author_name(n), n);
        }
    }

    #[test]
    fn list_split_on_semicolons_and_conjunctions() {
        assert_eq!(
            normalize_author_list("Smith, J.; Doe, J.R. and Frost RA"),
            vec!["Smith, J.", "Doe, J.R.", "Frost, R.A."]
        );
        assert_eq!(
            normalize_author_list("Planes J; Gil R i Valls M"),
            vec!["Planes, J.", "Gil, R.", "Valls, M."]
        );
    }

    #[test]
    fn list_split_on_commas() {
        assert_eq!(
            normalize_author_list("J Smith, R Doe amb M Valls"),
            vec!["Smith, J.", "Doe, R.", "Valls, M."]
        );
    }

    #[test]
    fn single_comma_name_is_not_split() {
        assert_eq!(normalize_author_list("Smith, J."), vec!["Smith, J."]);
        assert_eq!(normalize_author_list("Doe, J.R."), vec!["Doe, J.R."]);
    }

    #[test]
    fn list_without_separators() {
        assert_eq!(normalize_author_list("John Smith y Maria Lopez"), vec!["Smith, J.", "Lopez, M."]);
        assert_eq!(normalize_author_list("Smith J"), vec!["Smith, J."]);
    }

    #[test]
    fn empty_pieces_dropped() {
        assert_eq!(normalize_author_list("Smith J; ; Doe R;"), vec!["Smith, J.", "Doe, R."]);
        assert!(normalize_author_list("").is_empty());
    }
}
