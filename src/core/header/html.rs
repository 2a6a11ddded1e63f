//! HTML pipeline: DOM parse, grouped-header row build, prepend splice
//!
//! Unlike the LaTeX path, HTML is handled structurally: the markup is parsed
//! into a DOM, the new row is built as nodes of the same document, and the
//! whole tree is re-serialized. The new row becomes the first child of the
//! header section so it sits above every existing header row.

use sxd_document::dom::{Document, Element};
use sxd_document::{parser, writer};

use super::spec::CanonicalHeaderRow;
use crate::utils::error::{AugmentError, AugmentResult};

/// Splice a grouped-header row into HTML table markup
///
/// Cross-checks the bottommost existing header row against the renderer's
/// column count before touching the tree.
pub fn insert_header_row(
    markup: &str,
    row: &CanonicalHeaderRow,
    column_count: usize,
) -> AugmentResult<String> {
    let package = parser::parse(markup).map_err(|e| {
        AugmentError::structural(format!("table markup is not parseable: {:?}", e))
    })?;
    let doc = package.as_document();

    let table = find_table(&doc)?;
    let header = find_header_section(table)?;

    let bottom_row = last_header_row(header)?;
    let cell_count = cell_children(bottom_row).len();
    if cell_count != column_count {
        return Err(AugmentError::column_mismatch(column_count, cell_count));
    }

    let new_row = build_row(&doc, row);
    prepend_child(header, new_row);

    serialize(&doc)
}

/// Locate the `<table>` element: the document root, or one level below a
/// wrapper element
fn find_table<'d>(doc: &Document<'d>) -> AugmentResult<Element<'d>> {
    let root = doc
        .root()
        .children()
        .into_iter()
        .find_map(|c| c.element())
        .ok_or_else(|| AugmentError::structural("markup has no root element"))?;

    if root.name().local_part() == "table" {
        return Ok(root);
    }
    element_children(root)
        .into_iter()
        .find(|e| e.name().local_part() == "table")
        .ok_or_else(|| AugmentError::structural("no <table> element found in markup"))
}

/// Locate the header section of a table
///
/// Named search for `<thead>` first. Positional fallback for trees whose
/// header section is unnamed: the first element child, else the second
/// (tables that lead with a caption), accepted only if it actually contains
/// a row of `<th>` cells.
fn find_header_section(table: Element<'_>) -> AugmentResult<Element<'_>> {
    let children = element_children(table);

    if let Some(thead) = children.iter().find(|e| e.name().local_part() == "thead") {
        return Ok(*thead);
    }

    children
        .into_iter()
        .take(2)
        .find(|section| contains_th_row(*section))
        .ok_or_else(|| AugmentError::structural("no header section found in <table>"))
}

fn contains_th_row(section: Element<'_>) -> bool {
    element_children(section)
        .into_iter()
        .filter(|e| e.name().local_part() == "tr")
        .any(|tr| {
            element_children(tr)
                .into_iter()
                .any(|cell| cell.name().local_part() == "th")
        })
}

/// The bottommost existing header row
fn last_header_row(header: Element<'_>) -> AugmentResult<Element<'_>> {
    element_children(header)
        .into_iter()
        .filter(|e| e.name().local_part() == "tr")
        .last()
        .ok_or_else(|| AugmentError::structural("header section contains no rows"))
}

fn cell_children(tr: Element<'_>) -> Vec<Element<'_>> {
    element_children(tr)
        .into_iter()
        .filter(|e| matches!(e.name().local_part(), "th" | "td"))
        .collect()
}

fn element_children(element: Element<'_>) -> Vec<Element<'_>> {
    element
        .children()
        .into_iter()
        .filter_map(|c| c.element())
        .collect()
}

/// Build the new `<tr>` of centered `<th colspan>` cells as nodes of `doc`
fn build_row<'d>(doc: &Document<'d>, row: &CanonicalHeaderRow) -> Element<'d> {
    let tr = doc.create_element("tr");
    for cell in row.cells() {
        let th = doc.create_element("th");
        th.set_attribute_value("style", "text-align: center;");
        th.set_attribute_value("colspan", &cell.span.to_string());
        th.append_child(doc.create_text(&cell.label));
        tr.append_child(th);
    }
    tr
}

/// Insert `new_child` as the first child of `parent`
///
/// The DOM only appends, so the new node is appended first and the original
/// children are re-appended behind it in their original order.
fn prepend_child(parent: Element<'_>, new_child: Element<'_>) {
    let existing = parent.children();
    parent.append_child(new_child);
    for child in existing {
        parent.append_child(child);
    }
}

/// Re-serialize the tree, dropping the XML declaration the writer emits
fn serialize(doc: &Document<'_>) -> AugmentResult<String> {
    let mut out = Vec::new();
    writer::format_document(doc, &mut out)
        .map_err(|e| AugmentError::structural(format!("markup serialization failed: {}", e)))?;
    let text = String::from_utf8(out)
        .map_err(|e| AugmentError::structural(format!("markup is not valid UTF-8: {}", e)))?;

    if text.starts_with("<?xml") {
        if let Some(end) = text.find("?>") {
            return Ok(text[end + 2..].trim_start_matches('\n').to_string());
        }
    }
    Ok(text)
}
