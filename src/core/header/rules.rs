//! Horizontal-rule token families for LaTeX tables
//!
//! A table either uses the generic `\hline` family or the booktabs family
//! with distinct top/mid/bottom rules and no vertical borders. The style is
//! derived from the renderer's metadata on every call, never stored.

/// Which horizontal-rule command family a LaTeX table uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStyle {
    /// Generic `\hline` / `\cline` rules
    #[default]
    Plain,
    /// Booktabs `\toprule` / `\cmidrule` rules
    Booktabs,
}

impl RuleStyle {
    /// Resolve the style from the renderer's booktabs flag
    pub fn from_meta(booktabs: bool) -> Self {
        if booktabs {
            RuleStyle::Booktabs
        } else {
            RuleStyle::Plain
        }
    }

    /// The table's opening rule token
    pub fn top_rule(&self) -> &'static str {
        match self {
            RuleStyle::Plain => "\\hline",
            RuleStyle::Booktabs => "\\toprule",
        }
    }

    /// Partial rule under columns `start..=end` (1-indexed, inclusive)
    pub fn partial_rule(&self, start: usize, end: usize) -> String {
        match self {
            RuleStyle::Plain => format!("\\cline{{{}-{}}}", start, end),
            // Column-padded midrule so adjacent group rules do not touch
            RuleStyle::Booktabs => format!("\\cmidrule(l{{3pt}}r{{3pt}}){{{}-{}}}", start, end),
        }
    }
}
