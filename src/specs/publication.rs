// src/specs/publication.rs
//
// Detail page → Record. The page is a loose stack of `<b>Label:</b> value`
// pairs; a few labels keep their value somewhere else (next cell, or a set
// of researcher links).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{ancestor, first_text, following_text, parent_element, text_of};
use crate::core::sanitize::clean_label;
use crate::names::{normalize_author_list, normalize_author_name};
use crate::record::{self, Field, Record};

static BOLD: LazyLock<Selector> = selector!("b");
static TD: LazyLock<Selector> = selector!("td");
static RESEARCHER: LazyLock<Selector> = selector!("a.inves");

/// Every bold label on the page with its value. Never fails: a label whose
/// value cannot be read is kept with an empty value.
pub fn extract_record(doc: &Html) -> Record {
    let mut rec = Record::new();

    for b in doc.select(&BOLD) {
        let Some(label) = first_text(b).as_deref().and_then(clean_label) else {
            continue;
        };
        if read_field(b, &label, &mut rec).is_none() {
            logd!("Field {label:?} unreadable, keeping it empty");
            rec.insert(label, Field::empty());
        }
    }
    rec
}

fn read_field(b: ElementRef<'_>, label: &str, rec: &mut Record) -> Option<()> {
    match label {
        record::AUTHORS | record::AUTHOR | record::DIRECTOR => {
            let raw = following_text(b)?;
            rec.insert(label, normalize_author_list(&raw));
        }
        record::NAME | record::ORGANISATION => {
            // <tr><td><b>Nom:</b></td><td>value</td></tr>
            let row = ancestor(b, "tr")?;
            let cell = row.select(&TD).nth(1)?;
            rec.insert(label, text_of(cell));
        }
        record::TEAM => {
            let container = parent_element(b)?;
            let team: Vec<String> = container
                .select(&RESEARCHER)
                .map(|a| normalize_author_name(&text_of(a)))
                .filter(|n| !n.is_empty())
                .collect();
            let (principal, secondary) = team.split_first()?;
            rec.insert(record::PRINCIPAL, principal.as_str());
            rec.insert(record::SECONDARY, secondary.to_vec());
        }
        _ => {
            let value = following_text(b)?;
            rec.insert(label, value);
        }
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, PubKind};

    const ARTICLE: &str = r#"
        <html><body>
        <table>
          <tr><td><b>Id. GREC:</b> 12345</td></tr>
          <tr><td><b>Títol:</b>  Solving   MaxSAT by resolution </td></tr>
          <tr><td><b>Autors:</b> Ansótegui C; Bejar R and Fernàndez C</td></tr>
          <tr><td><b>Revista:</b> Artificial Intelligence</td></tr>
          <tr><td><b>ISSN:</b> 0004-3702</td></tr>
          <tr><td><b>Volum:</b> 175</td></tr>
          <tr><td><b>Pàgina inicial:</b> 10</td></tr>
          <tr><td><b>Pàgina final:</b></td></tr>
          <tr><td><b>Any:</b> 2011</td></tr>
        </table>
        <p><b>Aquest text en negreta és massa llarg per ser una etiqueta</b> res</p>
        </body></html>
    "#;

    #[test]
    fn reads_article_fields() {
        let rec = extract_record(&Html::parse_document(ARTICLE));
        assert_eq!(rec.id(), Some("12345"));
        assert_eq!(rec.text(record::TITLE), Some("Solving MaxSAT by resolution"));
        assert_eq!(rec.text(record::JOURNAL), Some("Artificial Intelligence"));
        assert_eq!(rec.text(record::ISSN), Some("0004-3702"));
        assert_eq!(rec.text(record::YEAR), Some("2011"));
        assert_eq!(
            rec.names(record::AUTHORS),
            vec!["Ansótegui, C.", "Bejar, R.", "Fernàndez, C."]
        );
        assert_eq!(rec.kind(), PubKind::JournalArticle);
    }

    #[test]
    fn missing_value_kept_empty() {
        let rec = extract_record(&Html::parse_document(ARTICLE));
        assert_eq!(rec.get(record::LAST_PAGE), Some(&Field::empty()));
    }

    #[test]
    fn long_bold_text_ignored() {
        let rec = extract_record(&Html::parse_document(ARTICLE));
        assert!(rec.labels().all(|l| !l.starts_with("Aquest")));
        assert_eq!(rec.len(), 9);
    }

    const PROJECT: &str = r##"
        <html><body>
        <table>
          <tr><td><b>Id. GREC:</b> 777</td></tr>
          <tr><td><b>Títol:</b> Constraint reasoning</td></tr>
          <tr><td><b>Nom:</b></td><td>Projecte   MINECO</td></tr>
          <tr><td><b>Organisme:</b></td><td>Ministerio de Economía</td></tr>
          <tr><td><b>Equip investigador:</b>
                <a class="inves" href="#">Ramon Béjar</a>,
                <a class="inves" href="#">MANYA F</a>,
                <a class="inves" href="#">Carles Mateu</a></td></tr>
          <tr><td><b>Unesco:</b> 1203</td></tr>
        </table>
        </body></html>
    "##;

    #[test]
    fn reads_project_fields() {
        let rec = extract_record(&Html::parse_document(PROJECT));
        assert_eq!(rec.text(record::NAME), Some("Projecte MINECO"));
        assert_eq!(rec.text(record::ORGANISATION), Some("Ministerio de Economía"));
        assert_eq!(rec.text(record::PRINCIPAL), Some("Béjar, R."));
        assert_eq!(rec.names(record::SECONDARY), vec!["MANYA, F.", "Mateu, C."]);
        assert!(!rec.contains(record::TEAM));
        assert_eq!(rec.kind(), PubKind::ResearchProject);
    }

    #[test]
    fn team_without_researchers_is_empty_field() {
        let doc = Html::parse_document(
            "<table><tr><td><b>Equip investigador:</b> cap</td></tr></table>",
        );
        let rec = extract_record(&doc);
        assert_eq!(rec.get(record::TEAM), Some(&Field::empty()));
        assert!(!rec.contains(record::PRINCIPAL));
    }

    #[test]
    fn name_outside_table_is_empty_field() {
        let doc = Html::parse_document("<p><b>Nom:</b> loose text</p>");
        let rec = extract_record(&doc);
        assert_eq!(rec.get(record::NAME), Some(&Field::empty()));
    }
}
