//! Equation kinds and the patterns that recognize them.
//!
//! Each kind owns one regular expression. All of them run with
//! dot-matches-newline and a lazy body, so a span is the shortest text
//! between an opening and a closing delimiter, line breaks included.

use crate::error::MathmaskError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$(.+?)\$").expect("valid regex literal"));

// The asterisk is optional on each tag independently, so
// `\begin{equation}...\end{equation*}` still matches.
static EQUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{equation\*?\}(.+?)\\end\{equation\*?\}")
        .expect("valid regex literal")
});

static ALIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{align\*?\}(.+?)\\end\{align\*?\}").expect("valid regex literal")
});

/// The kind of equation span a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquationKind {
    /// Inline math between single dollar signs (`$...$`)
    Inline,
    /// `equation` / `equation*` environment
    Equation,
    /// `align` / `align*` environment
    Align,
}

impl EquationKind {
    /// Every kind, in the order the rules are applied.
    pub const ALL: [EquationKind; 3] = [
        EquationKind::Inline,
        EquationKind::Equation,
        EquationKind::Align,
    ];

    /// Short lower-case name, as used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            EquationKind::Inline => "inline",
            EquationKind::Equation => "equation",
            EquationKind::Align => "align",
        }
    }

    /// Human-readable description of what the rule matches.
    pub fn description(&self) -> &'static str {
        match self {
            EquationKind::Inline => "inline math between $ delimiters",
            EquationKind::Equation => "\\begin{equation} ... \\end{equation} blocks",
            EquationKind::Align => "\\begin{align} ... \\end{align} blocks",
        }
    }

    /// The compiled pattern for this kind.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            EquationKind::Inline => &INLINE,
            EquationKind::Equation => &EQUATION,
            EquationKind::Align => &ALIGN,
        }
    }
}

impl std::fmt::Display for EquationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquationKind {
    type Err = MathmaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inline" => Ok(EquationKind::Inline),
            "equation" => Ok(EquationKind::Equation),
            "align" => Ok(EquationKind::Align),
            _ => Err(MathmaskError::UnknownKind(s.to_string())),
        }
    }
}
