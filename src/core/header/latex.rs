//! LaTeX pipeline: grouped-header fragment rendering and text splice
//!
//! LaTeX has no canonical parse tree here, so the pipeline is purely
//! line-oriented text composition: render the `\multicolumn` row plus its
//! partial rules, then splice the fragment into the markup right after the
//! table's opening rule token.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::RuleStyle;
use super::spec::CanonicalHeaderRow;
use super::HeaderOptions;
use crate::utils::error::{AugmentError, AugmentResult};

lazy_static! {
    static ref HLINE_RE: Regex = Regex::new(r"\\hline").unwrap();
    static ref TOPRULE_RE: Regex = Regex::new(r"\\toprule").unwrap();
}

/// Escape special LaTeX characters in a group label
fn escape_latex(text: &str) -> String {
    text.replace('\\', "\\textbackslash{}")
        .replace('&', "\\&")
        .replace('%', "\\%")
        .replace('$', "\\$")
        .replace('#', "\\#")
        .replace('_', "\\_")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('~', "\\textasciitilde{}")
        .replace('^', "\\textasciicircum{}")
}

/// Alignment spec for the cell at `index` of `count` group cells
///
/// Booktabs tables carry no vertical borders. Plain tables border the first
/// cell on the right, the last on the left, and interior cells on both sides;
/// the first-position test wins when a single cell is both.
fn cell_alignment(style: RuleStyle, index: usize, count: usize) -> &'static str {
    match style {
        RuleStyle::Booktabs => "c",
        RuleStyle::Plain => {
            if index == 0 {
                "c|"
            } else if index == count - 1 {
                "|c"
            } else {
                "|c|"
            }
        }
    }
}

/// Render the grouped-header fragment: the `\multicolumn` row and, on the
/// next line, the partial rules underlining each non-blank group
pub fn render_header_fragment(
    row: &CanonicalHeaderRow,
    style: RuleStyle,
    options: &HeaderOptions,
) -> String {
    let count = row.cells().len();
    let cells: Vec<String> = row
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let label = if options.escape {
                escape_latex(&cell.label)
            } else {
                cell.label.clone()
            };
            format!(
                "\\multicolumn{{{}}}{{{}}}{{{}}}",
                cell.span,
                cell_alignment(style, i, count),
                label
            )
        })
        .collect();

    let mut fragment = cells.join(" & ");
    fragment.push_str(" \\\\");

    if options.line {
        // Blank labels suppress their own underline.
        let mut rules = Vec::new();
        let mut start = 1usize;
        for cell in row.cells() {
            let end = start + cell.span - 1;
            if !cell.label.trim().is_empty() {
                rules.push(style.partial_rule(start, end));
            }
            start += cell.span;
        }
        if !rules.is_empty() {
            fragment.push('\n');
            fragment.push_str(&rules.join(" "));
        }
    }

    fragment
}

/// Splice the rendered fragment into existing LaTeX markup
///
/// The fragment lands on the line after the first occurrence of the resolved
/// top-rule token. Only the first match is substituted: the opening rule is
/// the table's first rule, and any later occurrences belong to nested or
/// following content. Markup without the token fails before any mutation.
pub fn insert_header_row(
    markup: &str,
    row: &CanonicalHeaderRow,
    style: RuleStyle,
    options: &HeaderOptions,
) -> AugmentResult<String> {
    let top_rule_re: &Regex = match style {
        RuleStyle::Plain => &HLINE_RE,
        RuleStyle::Booktabs => &TOPRULE_RE,
    };

    let rule_match = top_rule_re.find(markup).ok_or_else(|| {
        AugmentError::structural(format!(
            "top rule token '{}' not found in LaTeX markup",
            style.top_rule()
        ))
    })?;

    let fragment = render_header_fragment(row, style, options);

    let mut out = String::with_capacity(markup.len() + fragment.len() + 1);
    out.push_str(&markup[..rule_match.end()]);
    out.push('\n');
    out.push_str(&fragment);
    out.push_str(&markup[rule_match.end()..]);
    Ok(out)
}
