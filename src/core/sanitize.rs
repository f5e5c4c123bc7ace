// src/core/sanitize.rs

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::config::consts::MAX_LABEL_CHARS;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Bold label text → record key. `"Títol:"` → `"Títol"`.
/// `None` when the text is too long to be a label (a bolded sentence).
pub fn clean_label(raw: &str) -> Option<String> {
    if raw.chars().count() >= MAX_LABEL_CHARS {
        return None;
    }
    let label = raw.trim().trim_end_matches(':').trim_end();
    if label.is_empty() { None } else { Some(s!(label)) }
}

/// Canonical decomposition with every combining mark dropped.
/// `"Dvořák"` → `"Dvorak"`.
pub fn remove_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Person-URI segment: drop commas, dots and spaces, fold accents.
/// `"Ferré, J.M."` → `"FerreJM"`.
pub fn htmlize(s: &str) -> String {
    let squeezed: String = s.chars().filter(|c| !matches!(c, ',' | '.' | ' ')).collect();
    remove_accents(&squeezed)
}
