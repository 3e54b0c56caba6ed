//! Hierarchy snapshot parser.
//!
//! Converts a host hierarchy snapshot into [`Notebook`]/[`Section`]/[`Page`]
//! objects. Two access patterns share the same per-node parse functions,
//! steered by an "expand" flag: the nested walk ([`parse_notebooks`])
//! builds the tree top-down, and the flat walk ([`parse_pages`]) collects
//! pages and reconstructs their ancestry bottom-up. Search results come
//! back from the host as a pruned but still-nested snapshot, so they go
//! through the flat walk too.

use chrono::{DateTime, Utc};
use oriole_core::Color;

use crate::error::{HierarchyError, Result};
use crate::model::{Notebook, Page, Section};
use crate::xml::{NodeRef, XmlTree};

/// Element names of the hierarchy schema.
pub mod elem {
    pub const NOTEBOOK: &str = "Notebook";
    pub const SECTION_GROUP: &str = "SectionGroup";
    pub const SECTION: &str = "Section";
    pub const PAGE: &str = "Page";
}

/// Attribute names of the hierarchy schema. Centralized so schema drift
/// is a one-place edit.
pub mod attr {
    pub const ID: &str = "ID";
    pub const NAME: &str = "name";
    pub const NICKNAME: &str = "nickname";
    pub const PATH: &str = "path";
    pub const COLOR: &str = "color";
    pub const ENCRYPTED: &str = "encrypted";
    pub const PAGE_LEVEL: &str = "pageLevel";
    pub const DATE_TIME: &str = "dateTime";
    pub const LAST_MODIFIED_TIME: &str = "lastModifiedTime";
}

/// Parse every `Notebook` under the document root, each fully expanded
/// with sections and pages. This is the full-hierarchy walk.
pub fn parse_notebooks(tree: &XmlTree) -> Result<Vec<Notebook>> {
    tree.root()
        .descendants_named(elem::NOTEBOOK)
        .into_iter()
        .map(|node| parse_notebook(node, true))
        .collect()
}

/// Parse every `Page` under every notebook's sections, in document order,
/// each with its ancestry attached. This is the flat walk used for
/// "all pages" and search-result snapshots.
pub fn parse_pages(tree: &XmlTree) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    for notebook in tree.root().descendants_named(elem::NOTEBOOK) {
        for section in notebook.descendants_named(elem::SECTION) {
            for page in section.children_named(elem::PAGE) {
                pages.push(parse_page(page, true)?);
            }
        }
    }
    Ok(pages)
}

/// Parse one `Notebook` element.
///
/// With `include_sections`, every `Section` descendant is expanded with
/// its pages; section groups are transparent containers and never appear
/// in the output.
pub fn parse_notebook(node: NodeRef<'_>, include_sections: bool) -> Result<Notebook> {
    let sections = if include_sections {
        node.descendants_named(elem::SECTION)
            .into_iter()
            .map(|section| parse_section(section, true))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(Notebook {
        id: required(node, attr::ID)?,
        name: required(node, attr::NAME)?,
        nickname: node.attribute(attr::NICKNAME).unwrap_or_default().to_string(),
        path: required(node, attr::PATH)?,
        color: parse_color(node),
        sections,
    })
}

/// Parse one `Section` element, optionally with its direct `Page` children.
pub fn parse_section(node: NodeRef<'_>, include_pages: bool) -> Result<Section> {
    let pages = if include_pages {
        node.children_named(elem::PAGE)
            .map(|page| parse_page(page, false))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(Section {
        id: required(node, attr::ID)?,
        name: required(node, attr::NAME)?,
        path: required(node, attr::PATH)?,
        // The host emits lowercase "true"/"false" or omits the attribute;
        // anything but the exact literal "true" means not encrypted.
        encrypted: node.attribute(attr::ENCRYPTED) == Some("true"),
        color: parse_color(node),
        pages,
    })
}

/// Parse one `Page` element.
///
/// With `include_ancestors`, the owning section (the page's immediate
/// parent) and the owning notebook (found by walking up past any
/// section-group wrappers) are attached, each parsed without their own
/// children to avoid re-expanding siblings.
pub fn parse_page(node: NodeRef<'_>, include_ancestors: bool) -> Result<Page> {
    let (section, notebook) = if include_ancestors {
        let section_node = node
            .parent()
            .filter(|parent| parent.name() == elem::SECTION)
            .ok_or_else(|| {
                HierarchyError::Malformed(format!(
                    "page '{}' has no owning section",
                    node.attribute(attr::ID).unwrap_or("?")
                ))
            })?;
        let notebook_node = notebook_ancestor(section_node).ok_or_else(|| {
            HierarchyError::Malformed(format!(
                "section '{}' has no owning notebook",
                section_node.attribute(attr::ID).unwrap_or("?")
            ))
        })?;
        (
            Some(parse_section(section_node, false)?),
            Some(parse_notebook(notebook_node, false)?),
        )
    } else {
        (None, None)
    };

    Ok(Page {
        id: required(node, attr::ID)?,
        name: required(node, attr::NAME)?,
        level: parse_level(node.attribute(attr::PAGE_LEVEL)),
        created: parse_timestamp(node.attribute(attr::DATE_TIME)),
        last_modified: parse_timestamp(node.attribute(attr::LAST_MODIFIED_TIME)),
        section,
        notebook,
    })
}

/// Walk upward from a section, skipping section-group wrappers, to the
/// owning `Notebook` element.
fn notebook_ancestor(section: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let mut current = section.parent()?;
    while current.name() == elem::SECTION_GROUP {
        current = current.parent()?;
    }
    (current.name() == elem::NOTEBOOK).then_some(current)
}

fn required(node: NodeRef<'_>, attribute: &'static str) -> Result<String> {
    node.attribute(attribute)
        .map(str::to_string)
        .ok_or_else(|| HierarchyError::MissingAttribute {
            element: node.name().to_string(),
            attribute,
        })
}

fn parse_color(node: NodeRef<'_>) -> Option<Color> {
    node.attribute(attr::COLOR).and_then(Color::from_html)
}

/// Best-effort integer conversion: unparsable or missing means level 0.
fn parse_level(value: Option<&str>) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Best-effort timestamp conversion: unparsable or missing means the
/// minimum representable instant, never an error.
fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn tree(xml: &str) -> XmlTree {
        XmlTree::parse(xml).unwrap()
    }

    const HIERARCHY: &str = r##"<one:Notebooks xmlns:one="http://schemas.microsoft.com/office/onenote/2013/onenote">
        <one:Notebook ID="n1" name="Work" nickname="wk" path="C:\n1" color="#ADE792">
            <one:Section ID="s1" name="Inbox" path="C:\n1\s1.one" color="none">
                <one:Page ID="p1" name="Todo" pageLevel="1" dateTime="2020-01-01T00:00:00Z" lastModifiedTime="2020-01-02T00:00:00Z"/>
                <one:Page ID="p2" name="Notes" pageLevel="2"/>
            </one:Section>
            <one:SectionGroup ID="g1" name="Archive" path="C:\n1\g1">
                <one:SectionGroup ID="g2" name="Old" path="C:\n1\g1\g2">
                    <one:Section ID="s2" name="2019" path="C:\n1\g1\g2\s2.one" encrypted="true">
                        <one:Page ID="p3" name="Summary"/>
                    </one:Section>
                </one:SectionGroup>
            </one:SectionGroup>
        </one:Notebook>
        <one:Notebook ID="n2" name="Home" path="C:\n2" color="none">
            <one:Section ID="s3" name="Recipes" path="C:\n2\s3.one" encrypted="false"/>
        </one:Notebook>
    </one:Notebooks>"##;

    #[test]
    fn test_full_hierarchy_walk() {
        let notebooks = parse_notebooks(&tree(HIERARCHY)).unwrap();
        assert_eq!(notebooks.len(), 2);

        let work = &notebooks[0];
        assert_eq!(work.id, "n1");
        assert_eq!(work.nickname, "wk");
        assert_eq!(work.color, Some(Color::rgb(0xAD, 0xE7, 0x92)));

        // Section groups are transparent: s2 sits beside s1.
        let ids: Vec<_> = work.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);

        assert_eq!(work.sections[0].pages.len(), 2);
        assert_eq!(work.sections[1].pages.len(), 1);
        // Pages inside the nested walk carry no ancestry.
        assert!(work.sections[0].pages[0].section.is_none());
        assert!(work.sections[0].pages[0].notebook.is_none());

        let home = &notebooks[1];
        assert_eq!(home.color, None);
        assert_eq!(home.nickname, "");
    }

    #[test]
    fn test_include_sections_false_yields_empty_sections() {
        let t = tree(HIERARCHY);
        let node = t.root().descendants_named(elem::NOTEBOOK)[0];
        let notebook = parse_notebook(node, false).unwrap();
        assert!(notebook.sections.is_empty());
    }

    #[test]
    fn test_encrypted_is_a_literal_string_match() {
        let t = tree(HIERARCHY);
        let sections = t.root().descendants_named(elem::SECTION);
        assert!(!parse_section(sections[0], false).unwrap().encrypted); // absent
        assert!(parse_section(sections[1], false).unwrap().encrypted); // "true"
        assert!(!parse_section(sections[2], false).unwrap().encrypted); // "false"

        // Only the exact lowercase literal counts.
        let t = tree(r#"<Section ID="s" name="S" path="p" encrypted="True"/>"#);
        let node = t.root().children().next().unwrap();
        assert!(!parse_section(node, false).unwrap().encrypted);
    }

    #[test]
    fn test_page_value_defaults() {
        let t = tree(HIERARCHY);
        let pages = parse_pages(&t).unwrap();

        let p1 = &pages[0];
        assert_eq!(p1.level, 1);
        assert_eq!(p1.created, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(p1.last_modified, Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap());

        // p3 has no level or timestamps: safe defaults, never an error.
        let p3 = &pages[2];
        assert_eq!(p3.level, 0);
        assert_eq!(p3.created, DateTime::<Utc>::MIN_UTC);
        assert_eq!(p3.last_modified, DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_unparsable_level_and_timestamp_fall_back() {
        let t = tree(
            r#"<Notebook ID="n" name="N" path="p">
                <Section ID="s" name="S" path="ps">
                    <Page ID="p" name="P" pageLevel="abc" dateTime="not a date"/>
                </Section>
            </Notebook>"#,
        );
        let page = &parse_pages(&t).unwrap()[0];
        assert_eq!(page.level, 0);
        assert_eq!(page.created, DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_flat_walk_reconstructs_ancestry() {
        let pages = parse_pages(&tree(HIERARCHY)).unwrap();
        let ids: Vec<_> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);

        // p3 lives in a section nested two groups deep; the walk upward
        // still lands on n1.
        let p3 = &pages[2];
        let section = p3.section.as_ref().unwrap();
        assert_eq!(section.id, "s2");
        assert!(section.encrypted);
        assert!(section.pages.is_empty()); // ancestors are not re-expanded
        let notebook = p3.notebook.as_ref().unwrap();
        assert_eq!(notebook.id, "n1");
        assert!(notebook.sections.is_empty());
    }

    #[test]
    fn test_round_trip_nested_flatten_matches_flat_walk() {
        let t = tree(HIERARCHY);
        let mut nested: Vec<String> = parse_notebooks(&t)
            .unwrap()
            .into_iter()
            .flat_map(|n| n.sections)
            .flat_map(|s| s.pages)
            .map(|p| p.id)
            .collect();
        let mut flat: Vec<String> = parse_pages(&t).unwrap().into_iter().map(|p| p.id).collect();
        nested.sort();
        flat.sort();
        assert_eq!(nested, flat);
    }

    #[test]
    fn test_missing_required_attribute_is_fatal() {
        let t = tree(r#"<Notebook ID="n1" nickname="x" path="p"/>"#);
        let node = t.root().children().next().unwrap();
        let err = parse_notebook(node, false).unwrap_err();
        match err {
            HierarchyError::MissingAttribute { element, attribute } => {
                assert_eq!(element, "Notebook");
                assert_eq!(attribute, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_orphan_page_is_malformed() {
        // A page directly under a notebook has no owning section.
        let t = tree(
            r#"<Notebook ID="n" name="N" path="p">
                <Page ID="pg" name="P"/>
            </Notebook>"#,
        );
        let node = t.root().children().next().unwrap().children().next().unwrap();
        assert!(matches!(
            parse_page(node, true),
            Err(HierarchyError::Malformed(_))
        ));
        // Without ancestors the same page parses fine.
        assert!(parse_page(node, false).is_ok());
    }

    #[test]
    fn test_spec_scenario() {
        let t = tree(
            r#"<Notebook ID="n1" name="N" nickname="nn" path="p" color="none">
                <Section ID="s1" name="S" path="ps" encrypted="true">
                    <Page ID="pg1" name="P1" pageLevel="0" dateTime="2020-01-01T00:00:00Z" lastModifiedTime="2020-01-02T00:00:00Z"/>
                </Section>
            </Notebook>"#,
        );
        let pages = parse_pages(&t).unwrap();
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.id, "pg1");
        let section = page.section.as_ref().unwrap();
        assert_eq!(section.id, "s1");
        assert!(section.encrypted);
        let notebook = page.notebook.as_ref().unwrap();
        assert_eq!(notebook.id, "n1");
        assert_eq!(notebook.color, None);
    }
}
