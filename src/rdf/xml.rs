// src/rdf/xml.rs
//
// Pretty RDF/XML: one element per subject, typed node elements for
// subjects with exactly one rdf:type, rdf:resource for IRI objects.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};

use super::graph::vocab::RDF_TYPE;
use super::graph::{Graph, Namespaces, Term, Triple};

const DESCRIPTION: &str = "rdf:Description";

pub fn to_rdf_xml(g: &Graph) -> Result<String> {
    let ns = g.namespaces();
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("rdf:RDF");
    for (prefix, iri) in ns.iter() {
        root.push_attribute((format!("xmlns:{prefix}").as_str(), iri));
    }
    w.write_event(Event::Start(root))?;

    for (subject, triples) in g.by_subject() {
        write_subject(&mut w, ns, subject, &triples)?;
    }

    w.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;

    let mut bytes = w.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_subject(
    w: &mut Writer<Vec<u8>>,
    ns: &Namespaces,
    subject: &str,
    triples: &[&Triple],
) -> Result<()> {
    let types: Vec<&str> = triples
        .iter()
        .filter(|t| t.predicate == RDF_TYPE)
        .filter_map(|t| match &t.object {
            Term::Iri(iri) => Some(iri.as_str()),
            Term::Literal(_) => None,
        })
        .collect();

    // Typed node element only when the type is unambiguous
    let typed = match types.as_slice() {
        [only] => ns.qname(only),
        _ => None,
    };
    let elem = typed.clone().unwrap_or_else(|| s!(DESCRIPTION));

    let mut start = BytesStart::new(elem.as_str());
    start.push_attribute(("rdf:about", subject));
    w.write_event(Event::Start(start))?;

    for t in triples {
        if typed.is_some() && t.predicate == RDF_TYPE {
            continue;
        }
        let pred = ns
            .qname(&t.predicate)
            .ok_or_else(|| Error::UnboundNamespace(t.predicate.clone()))?;

        match &t.object {
            Term::Iri(iri) => {
                let mut e = BytesStart::new(pred.as_str());
                e.push_attribute(("rdf:resource", iri.as_str()));
                w.write_event(Event::Empty(e))?;
            }
            Term::Literal(text) => {
                w.write_event(Event::Start(BytesStart::new(pred.as_str())))?;
                w.write_event(Event::Text(BytesText::new(text)))?;
                w.write_event(Event::End(BytesEnd::new(pred.as_str())))?;
            }
        }
    }

    w.write_event(Event::End(BytesEnd::new(elem.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::graph::vocab::*;

    fn sample() -> Graph {
        let mut g = Graph::new();
        let s = "http://x/pub/1";
        g.add(s, RDF_TYPE, Term::iri(ARTICLE));
        g.add(s, DC_TITLE, Term::literal("Tom & Jerry <3"));
        g.add(s, DC_AUTHOR, Term::iri("http://x/person/SmithJ"));
        g.add("http://x/person/SmithJ", RDFS_LABEL, Term::literal("Smith, J."));
        g
    }

    #[test]
    fn header_and_namespaces() {
        let xml = to_rdf_xml(&sample()).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(xml.contains(r#"xmlns:dc="http://purl.org/dc/elements/1.1/""#));
        assert!(xml.contains(r#"xmlns:uni="http://swrc.ontoware.org/ontology#""#));
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn typed_node_and_escaping() {
        let xml = to_rdf_xml(&sample()).unwrap();
        assert!(xml.contains(r#"<uni:Article rdf:about="http://x/pub/1">"#));
        assert!(!xml.contains("rdf:type"));
        assert!(xml.contains("Tom &amp; Jerry &lt;3</dc:title>"));
        assert!(xml.contains(r#"<dc:author rdf:resource="http://x/person/SmithJ"/>"#));
        assert!(xml.contains(r#"<rdf:Description rdf:about="http://x/person/SmithJ">"#));
        assert!(xml.contains("<rdfs:label>Smith, J.</rdfs:label>"));
    }

    #[test]
    fn two_types_fall_back_to_description() {
        let mut g = Graph::new();
        g.add("http://x/a", RDF_TYPE, Term::iri(ARTICLE));
        g.add("http://x/a", RDF_TYPE, Term::iri(THESIS));
        let xml = to_rdf_xml(&g).unwrap();
        assert!(xml.contains(r#"<rdf:Description rdf:about="http://x/a">"#));
        assert!(xml.contains(r#"<rdf:type rdf:resource="http://swrc.ontoware.org/ontology#Thesis"/>"#));
    }

    #[test]
    fn unbound_predicate_is_error() {
        let mut g = Graph::new();
        g.add("http://x/a", "http://example.org/p", Term::literal("v"));
        assert!(matches!(to_rdf_xml(&g), Err(Error::UnboundNamespace(_))));
    }
}
