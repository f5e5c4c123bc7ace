// src/record.rs
//
// One scraped detail page: label → value, exactly as the page labels it
// (Catalan field names). Classification looks only at which labels exist.

use std::collections::BTreeMap;

use serde::Serialize;

// Field labels the rest of the pipeline cares about
pub const ID: &str = "Id. GREC";
pub const TITLE: &str = "Títol";
pub const YEAR: &str = "Any";
pub const AUTHORS: &str = "Autors";
pub const AUTHOR: &str = "Autor";
pub const DIRECTOR: &str = "Director";
pub const ISSN: &str = "ISSN";
pub const ISBN: &str = "ISBN";
pub const JOURNAL: &str = "Revista";
pub const VOLUME: &str = "Volum";
pub const FIRST_PAGE: &str = "Pàgina inicial";
pub const LAST_PAGE: &str = "Pàgina final";
pub const REFERENCE: &str = "Referència";
pub const PUBLISHER: &str = "Editorial";
pub const GRADE: &str = "Qualificació";
pub const SCHOOL: &str = "Facultat";
pub const UNIVERSITY: &str = "Universitat";
pub const CONGRESS: &str = "Congrés";
pub const UNESCO: &str = "Unesco";
pub const EU_CODE: &str = "Codi UE";
pub const NAME: &str = "Nom";
pub const ORGANISATION: &str = "Organisme";
pub const TEAM: &str = "Equip investigador";
pub const PRINCIPAL: &str = "Investigador principal";
pub const SECONDARY: &str = "Investigadors secundaris";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    List(Vec<String>),
}

impl Field {
    pub fn empty() -> Self {
        Field::Text(s!())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Field::Text(t) => t.is_empty(),
            Field::List(v) => v.is_empty(),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s!(s))
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<Vec<String>> for Field {
    fn from(v: Vec<String>) -> Self {
        Field::List(v)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later labels overwrite earlier ones, like the page reads top to bottom.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<Field>) {
        self.fields.insert(label.into(), value.into());
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&Field> {
        self.fields.get(label)
    }

    /// Non-empty text value of `label`.
    pub fn text(&self, label: &str) -> Option<&str> {
        match self.fields.get(label) {
            Some(Field::Text(t)) if !t.is_empty() => Some(t.as_str()),
            _ => None,
        }
    }

    /// List value of `label`; a lone text value counts as a one-name list.
    pub fn names(&self, label: &str) -> Vec<&str> {
        match self.fields.get(label) {
            Some(Field::List(v)) => v.iter().map(String::as_str).filter(|s| !s.is_empty()).collect(),
            Some(Field::Text(t)) if !t.is_empty() => vec![t.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.text(ID)
    }

    pub fn kind(&self) -> PubKind {
        PubKind::classify(self)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PubKind {
    JournalArticle,
    BookChapter,
    Thesis,
    CongressPaper,
    ResearchProject,
    EuropeanProject,
    Contract,
}

impl PubKind {
    /// Marker label → kind, checked in order; first hit wins.
    const MARKERS: [(&'static str, PubKind); 6] = [
        (ISSN, PubKind::JournalArticle),
        (ISBN, PubKind::BookChapter),
        (GRADE, PubKind::Thesis),
        (CONGRESS, PubKind::CongressPaper),
        (UNESCO, PubKind::ResearchProject),
        (EU_CODE, PubKind::EuropeanProject),
    ];

    pub fn classify(record: &Record) -> PubKind {
        Self::MARKERS
            .iter()
            .find(|(label, _)| record.contains(label))
            .map(|(_, kind)| *kind)
            .unwrap_or(PubKind::Contract)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PubKind::JournalArticle => "journal article",
            PubKind::BookChapter => "book chapter",
            PubKind::Thesis => "thesis",
            PubKind::CongressPaper => "congress paper",
            PubKind::ResearchProject => "research project",
            PubKind::EuropeanProject => "european project",
            PubKind::Contract => "contract",
        }
    }
}
