// src/rdf/mod.rs
//! Minimal triple store used as a serialization sink: records go in through
//! [`build`], text comes out through [`xml`] (RDF/XML) or [`ntriples`].

pub mod build;
pub mod graph;
pub mod ntriples;
pub mod xml;

pub use build::{Minter, records_to_graph};
pub use graph::{Graph, Namespaces, Term, Triple};
