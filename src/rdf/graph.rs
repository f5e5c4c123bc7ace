// src/rdf/graph.rs

use std::collections::BTreeSet;

use crate::config::consts::{NS_DC, NS_RDF, NS_RDFS, NS_UNI};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Iri(String),
    Literal(String),
}

impl Term {
    pub fn iri(s: impl Into<String>) -> Self {
        Term::Iri(s.into())
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Term::Literal(s.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

/// Set semantics: adding the same triple twice keeps one.
/// Iteration is sorted (subject, predicate, object).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    ns: Namespaces,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) {
        self.triples.insert(Triple {
            subject: s!(subject),
            predicate: s!(predicate),
            object,
        });
    }

    /// Add a literal, skipping empty values.
    pub fn add_literal(&mut self, subject: &str, predicate: &str, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.add(subject, predicate, Term::literal(v));
        }
    }

    pub fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.triples.iter().any(|t| t.subject == subject && t.predicate == predicate && &t.object == object)
    }

    /// Objects of every `(subject, predicate, _)` triple.
    pub fn objects<'a>(&'a self, subject: &'a str, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples grouped by subject, in subject order.
    pub fn by_subject(&self) -> Vec<(&str, Vec<&Triple>)> {
        let mut out: Vec<(&str, Vec<&Triple>)> = Vec::new();
        for t in &self.triples {
            match out.last_mut() {
                Some((s, group)) if *s == t.subject => group.push(t),
                _ => out.push((t.subject.as_str(), vec![t])),
            }
        }
        out
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.ns
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// Prefix bindings used when writing qualified names.
#[derive(Clone, Debug)]
pub struct Namespaces {
    bindings: Vec<(&'static str, &'static str)>,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            bindings: vec![("dc", NS_DC), ("rdf", NS_RDF), ("rdfs", NS_RDFS), ("uni", NS_UNI)],
        }
    }
}

impl Namespaces {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.bindings.iter().copied()
    }

    /// `"http://purl.org/dc/elements/1.1/title"` → `"dc:title"`.
    pub fn qname(&self, iri: &str) -> Option<String> {
        self.bindings.iter().find_map(|(prefix, ns)| {
            iri.strip_prefix(ns)
                .filter(|local| is_xml_name(local))
                .map(|local| format!("{prefix}:{local}"))
        })
    }
}

fn is_xml_name(local: &str) -> bool {
    let mut chars = local.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Well-known terms.
pub mod vocab {
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const DC_YEAR: &str = "http://purl.org/dc/elements/1.1/year";
    pub const DC_AUTHOR: &str = "http://purl.org/dc/elements/1.1/author";
    pub const DC_UNIVERSITY: &str = "http://purl.org/dc/elements/1.1/University";
    pub const DC_IDENTIFIER: &str = "http://purl.org/dc/elements/1.1/identifier";

    // SWRC
    pub const ARTICLE: &str = "http://swrc.ontoware.org/ontology#Article";
    pub const JOURNAL: &str = "http://swrc.ontoware.org/ontology#Journal";
    pub const BOOK: &str = "http://swrc.ontoware.org/ontology#Book";
    pub const THESIS: &str = "http://swrc.ontoware.org/ontology#Thesis";
    pub const PROJECT: &str = "http://swrc.ontoware.org/ontology#Project";
    pub const RESEARCH_PROJECT: &str = "http://swrc.ontoware.org/ontology#ResearchProject";
    pub const AUTHORS: &str = "http://swrc.ontoware.org/ontology#authors";
    pub const IS_PART_OF: &str = "http://swrc.ontoware.org/ontology#isPartOf";
    pub const ISSN: &str = "http://swrc.ontoware.org/ontology#ISSN";
    pub const ISBN: &str = "http://swrc.ontoware.org/ontology#ISBN";
    pub const PAGES: &str = "http://swrc.ontoware.org/ontology#pages";
    pub const VOLUME: &str = "http://swrc.ontoware.org/ontology#volume";
    pub const EDITOR: &str = "http://swrc.ontoware.org/ontology#editor";
    pub const SUPERVISOR: &str = "http://swrc.ontoware.org/ontology#supervisor";
    pub const SCHOOL: &str = "http://swrc.ontoware.org/ontology#school";
    pub const MEETING: &str = "http://swrc.ontoware.org/ontology#Meeting";
    pub const HEAD: &str = "http://swrc.ontoware.org/ontology#head";
    pub const MEMBER: &str = "http://swrc.ontoware.org/ontology#member";
    pub const FINANCED_BY: &str = "http://swrc.ontoware.org/ontology#financedBy";
}
