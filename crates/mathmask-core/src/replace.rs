//! The replacement engine.
//!
//! Rules run one after another in [`EquationKind::ALL`] order, and each
//! rule sees the output of the one before it. A `$` inside an `equation`
//! body is therefore already gone (or has already swallowed text) by the
//! time the `equation` rule runs.

use crate::rules::EquationKind;
use log::debug;
use regex::Captures;

/// Placeholder used when the caller does not supply one.
pub const DEFAULT_PLACEHOLDER: &str = "[EQUATION]";

/// Replace every recognized equation span in `text` with `placeholder`.
///
/// The placeholder is inserted literally: `$1` or `${name}` in it are not
/// expanded. Unmatched delimiters are left in place. Never fails.
///
/// # Example
///
/// ```
/// use mathmask_core::replace_equations;
///
/// assert_eq!(replace_equations("Start $x+y$ end.", "<MATH>"), "Start <MATH> end.");
/// ```
pub fn replace_equations(text: &str, placeholder: &str) -> String {
    let mut result = text.to_string();
    for kind in EquationKind::ALL {
        result = apply_rule(kind, &result, placeholder).0;
    }
    result
}

/// [`replace_equations`] with [`DEFAULT_PLACEHOLDER`].
pub fn replace_equations_default(text: &str) -> String {
    replace_equations(text, DEFAULT_PLACEHOLDER)
}

/// Run one rule over `text`, returning the new text and the number of spans replaced.
fn apply_rule(kind: EquationKind, text: &str, placeholder: &str) -> (String, usize) {
    let mut count = 0usize;
    let replaced = kind.pattern().replace_all(text, |_: &Captures<'_>| {
        count += 1;
        placeholder
    });
    (replaced.into_owned(), count)
}

/// Number of spans replaced per equation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceStats {
    counts: [usize; 3],
}

impl ReplaceStats {
    fn slot(kind: EquationKind) -> usize {
        match kind {
            EquationKind::Inline => 0,
            EquationKind::Equation => 1,
            EquationKind::Align => 2,
        }
    }

    /// Spans replaced by the rule for `kind`.
    pub fn count(&self, kind: EquationKind) -> usize {
        self.counts[Self::slot(kind)]
    }

    /// Spans replaced across all rules.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// True if nothing was replaced.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Add another set of counts into this one.
    pub fn absorb(&mut self, other: &ReplaceStats) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    fn record(&mut self, kind: EquationKind, count: usize) {
        self.counts[Self::slot(kind)] += count;
    }
}

impl std::fmt::Display for ReplaceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = EquationKind::ALL
            .iter()
            .map(|kind| format!("{}={}", kind, self.count(*kind)))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// A configured replacement pass: a placeholder plus the kinds to replace.
///
/// Enabled rules always run in canonical order, whatever order they were
/// listed in.
///
/// # Example
///
/// ```
/// use mathmask_core::{EquationKind, Replacer};
///
/// let replacer = Replacer::new("<M>").with_kinds([EquationKind::Inline]);
/// let text = r"$a$ \begin{equation}b\end{equation}";
/// assert_eq!(replacer.replace(text), r"<M> \begin{equation}b\end{equation}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacer {
    placeholder: String,
    kinds: Vec<EquationKind>,
}

impl Default for Replacer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Replacer {
    /// Create a replacer with every rule enabled.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            kinds: EquationKind::ALL.to_vec(),
        }
    }

    /// Restrict the replacer to the given kinds.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EquationKind>) -> Self {
        let mut kinds: Vec<EquationKind> = kinds.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        self.kinds = kinds;
        self
    }

    /// The placeholder inserted for each span.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Enabled kinds, in application order.
    pub fn kinds(&self) -> &[EquationKind] {
        &self.kinds
    }

    /// Replace spans in `text`.
    pub fn replace(&self, text: &str) -> String {
        self.replace_with_stats(text).0
    }

    /// Replace spans in `text`, also reporting how many each rule replaced.
    pub fn replace_with_stats(&self, text: &str) -> (String, ReplaceStats) {
        let mut stats = ReplaceStats::default();
        let mut result = text.to_string();
        for &kind in &self.kinds {
            let (next, count) = apply_rule(kind, &result, &self.placeholder);
            debug!(
                "rule {} ({}): replaced {} span(s)",
                kind,
                kind.description(),
                count
            );
            stats.record(kind, count);
            result = next;
        }
        (result, stats)
    }
}
