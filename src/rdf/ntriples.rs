// src/rdf/ntriples.rs

use super::graph::{Graph, Term};

/// One `<s> <p> o .` line per triple, in graph order (sorted).
pub fn to_ntriples(g: &Graph) -> String {
    let mut out = String::with_capacity(g.len() * 96);
    for t in g.triples() {
        let object = match &t.object {
            Term::Iri(iri) => join!("<", iri, ">"),
            Term::Literal(text) => join!("\"", &escape(text), "\""),
        };
        out.push_str(&format!("<{}> <{}> {} .\n", t.subject, t.predicate, object));
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
