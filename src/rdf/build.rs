// src/rdf/build.rs
//
// Record → triples, one builder per publication kind. Values that are
// missing or empty on the page are simply not emitted.

use crate::config::consts::{URI_BOOK, URI_JOURNAL, URI_PERSON, URI_PUB};
use crate::core::sanitize::htmlize;
use crate::record::{self, PubKind, Record};

use super::graph::vocab::*;
use super::graph::{Graph, Term};

/// Mints the URIs of everything the graph talks about.
#[derive(Clone, Debug)]
pub struct Minter {
    base: String,
}

impl Minter {
    pub fn new(base: &str) -> Self {
        Self { base: s!(base.trim_end_matches('/')) }
    }

    pub fn publication(&self, id: &str) -> String {
        join!(&self.base, "/", URI_PUB, "/", id.trim())
    }

    pub fn person(&self, name: &str) -> String {
        join!(&self.base, "/", URI_PERSON, "/", &htmlize(name))
    }

    pub fn journal(&self, issn: &str) -> String {
        join!(&self.base, "/", URI_JOURNAL, "/", issn.trim())
    }

    pub fn book(&self, isbn: &str) -> String {
        join!(&self.base, "/", URI_BOOK, "/", isbn.trim())
    }
}

pub fn records_to_graph(records: &[Record], minter: &Minter) -> Graph {
    let mut g = Graph::new();
    let added = records.iter().filter(|r| add_record(&mut g, r, minter)).count();
    logf!("Graph built: {added}/{} records, {} triples", records.len(), g.len());
    g
}

/// Add one record. Returns `false` when the record has no GREC id to
/// mint a URI from.
pub fn add_record(g: &mut Graph, rec: &Record, minter: &Minter) -> bool {
    let Some(id) = rec.id() else {
        logw!("Record without {:?} skipped ({} fields)", record::ID, rec.len());
        return false;
    };
    let subject = minter.publication(id);
    let b = Builder { g, rec, minter, subject: &subject };

    match rec.kind() {
        PubKind::JournalArticle => b.journal_article(),
        PubKind::BookChapter => b.book_chapter(),
        PubKind::Thesis => b.thesis(),
        PubKind::CongressPaper => b.congress_paper(),
        kind @ (PubKind::ResearchProject | PubKind::EuropeanProject | PubKind::Contract) => b.project(kind),
    }
    true
}

struct Builder<'a> {
    g: &'a mut Graph,
    rec: &'a Record,
    minter: &'a Minter,
    subject: &'a str,
}

impl Builder<'_> {
    fn journal_article(mut self) {
        self.typed(ARTICLE);
        self.literal(DC_YEAR, record::YEAR);
        self.literal(DC_TITLE, record::TITLE);
        self.authors_literal(record::AUTHORS);

        if let Some(issn) = self.rec.text(record::ISSN) {
            let journal = self.minter.journal(issn);
            self.g.add(self.subject, IS_PART_OF, Term::iri(&journal));
            self.g.add(&journal, RDF_TYPE, Term::iri(JOURNAL));
            self.g.add_literal(&journal, RDFS_LABEL, self.rec.text(record::JOURNAL));
            self.g.add_literal(&journal, ISSN, Some(issn));
        }

        self.pages();
        self.literal(VOLUME, record::VOLUME);
        self.people(DC_AUTHOR, record::AUTHORS);
    }

    fn book_chapter(mut self) {
        self.typed(ARTICLE);
        self.literal(DC_TITLE, record::TITLE);
        self.literal(DC_YEAR, record::YEAR);
        self.authors_literal(record::AUTHORS);
        self.pages();
        self.literal(VOLUME, record::VOLUME);
        self.people(DC_AUTHOR, record::AUTHORS);

        if let Some(isbn) = self.rec.text(record::ISBN) {
            let book = self.minter.book(isbn);
            self.g.add(self.subject, IS_PART_OF, Term::iri(&book));
            self.g.add(&book, RDF_TYPE, Term::iri(BOOK));
            self.g.add_literal(&book, RDFS_LABEL, self.rec.text(record::REFERENCE));
            self.g.add_literal(&book, ISBN, Some(isbn));
            self.g.add_literal(&book, EDITOR, self.rec.text(record::PUBLISHER));
        }
    }

    fn thesis(mut self) {
        self.typed(THESIS);
        self.people(DC_AUTHOR, record::AUTHOR);
        self.people(SUPERVISOR, record::DIRECTOR);
        self.literal(DC_TITLE, record::TITLE);
        self.literal(DC_YEAR, record::YEAR);
        self.literal(SCHOOL, record::SCHOOL);
        self.literal(DC_UNIVERSITY, record::UNIVERSITY);
    }

    fn congress_paper(mut self) {
        self.typed(ARTICLE);
        self.people(DC_AUTHOR, record::AUTHORS);
        self.literal(DC_TITLE, record::TITLE);
        self.literal(DC_YEAR, record::YEAR);
        self.authors_literal(record::AUTHORS);
        self.literal(MEETING, record::CONGRESS);
    }

    fn project(mut self, kind: PubKind) {
        let class = match kind {
            PubKind::Contract => PROJECT,
            _ => RESEARCH_PROJECT,
        };
        self.typed(class);
        self.literal(DC_TITLE, record::TITLE);
        self.literal(DC_YEAR, record::YEAR);
        self.literal(DC_IDENTIFIER, record::EU_CODE);
        self.people(HEAD, record::PRINCIPAL);
        self.people(MEMBER, record::SECONDARY);

        let funder = self.rec.text(record::ORGANISATION).or_else(|| self.rec.text(record::NAME));
        self.g.add_literal(self.subject, FINANCED_BY, funder);
    }

    /* ---------- helpers ---------- */

    fn typed(&mut self, class: &str) {
        self.g.add(self.subject, RDF_TYPE, Term::iri(class));
    }

    fn literal(&mut self, predicate: &str, label: &str) {
        self.g.add_literal(self.subject, predicate, self.rec.text(label));
    }

    /// `uni:authors "Smith, J.; Doe, R."`
    fn authors_literal(&mut self, label: &str) {
        let names = self.rec.names(label);
        if !names.is_empty() {
            self.g.add(self.subject, AUTHORS, Term::literal(names.join("; ")));
        }
    }

    /// Link every name under `label` as a person node with a label.
    fn people(&mut self, predicate: &str, label: &str) {
        for name in self.rec.names(label) {
            let person = self.minter.person(name);
            self.g.add(self.subject, predicate, Term::iri(&person));
            self.g.add(&person, RDFS_LABEL, Term::literal(name));
        }
    }

    /// `uni:pages "first-last"` when either end is known.
    fn pages(&mut self) {
        let first = self.rec.text(record::FIRST_PAGE);
        let last = self.rec.text(record::LAST_PAGE);
        if first.is_some() || last.is_some() {
            let range = join!(first.unwrap_or(""), "-", last.unwrap_or(""));
            self.g.add(self.subject, PAGES, Term::literal(range));
        }
    }
}
