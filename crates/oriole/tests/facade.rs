//! Smoke test: the prelude surface is enough for typical queries.

use std::io::Write;

use oriole::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn query_pages_and_rows_through_the_prelude() {
    // Notebook side: parse a snapshot directly.
    let tree = oriole::XmlTree::parse(
        r#"<Notebook ID="n1" name="N" path="p">
            <Section ID="s1" name="S" path="ps">
                <Page ID="pg1" name="P1" lastModifiedTime="2024-06-01T12:00:00Z"/>
                <Page ID="pg2" name="P2"/>
            </Section>
        </Notebook>"#,
    )
    .unwrap();
    let pages = oriole_onenote::parser::parse_pages(&tree).unwrap();
    let recent: Vec<_> = pages
        .iter()
        .filter(|p| p.last_modified.timestamp() > 0)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(recent, vec!["P1"]);

    // Tabular side: load a CSV and query it.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"Player,Score\nAda,10\nGrace,12\n").unwrap();

    let provider = ExcelProvider::open_csv(&path, &CsvCursorOptions::default()).unwrap();
    let total: i64 = provider
        .rows()
        .iter()
        .filter_map(|r| r.get_by_name("Score").and_then(CellValue::as_i64))
        .sum();
    assert_eq!(total, 22);
    assert_eq!(provider.columns()[1].header, "B");
}
