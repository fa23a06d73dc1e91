//! Property-based tests for mathmask.
//!
//! These tests use proptest to generate random documents and verify
//! the replacement laws that hold regardless of content.

use proptest::prelude::*;

use mathmask_core::{replace_equations, replace_equations_default, EquationKind, Replacer};

/// Generate text that contains no `$` and no backslash, so no delimiter can appear.
fn delimiter_free_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 \n\t{}*&=^_+()\[\]]{0,200}").unwrap()
}

/// Generate a LaTeX-ish fragment, including whole delimiters.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex(r"[a-z0-9 \n{}*&=^_+]{0,12}").unwrap(),
        Just("$".to_string()),
        Just(r"\begin{equation}".to_string()),
        Just(r"\begin{equation*}".to_string()),
        Just(r"\end{equation}".to_string()),
        Just(r"\end{equation*}".to_string()),
        Just(r"\begin{align}".to_string()),
        Just(r"\begin{align*}".to_string()),
        Just(r"\end{align}".to_string()),
        Just(r"\end{align*}".to_string()),
        Just(r"\\".to_string()),
    ]
}

/// Generate a document assembled from fragments.
fn latex_document() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..30).prop_map(|parts| parts.concat())
}

/// Generate a placeholder that cannot complete a delimiter with its neighbours.
fn safe_placeholder() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z<>\[\] ]{1,12}").unwrap()
}

proptest! {
    /// Text without delimiters comes back unchanged.
    #[test]
    fn delimiter_free_text_is_unchanged(text in delimiter_free_text()) {
        prop_assert_eq!(replace_equations_default(&text), text);
    }

    /// Replacing twice is the same as replacing once.
    #[test]
    fn replacement_is_idempotent(doc in latex_document(), placeholder in safe_placeholder()) {
        let once = replace_equations(&doc, &placeholder);
        let twice = replace_equations(&once, &placeholder);
        prop_assert_eq!(twice, once);
    }

    /// The function never panics, whatever the input.
    #[test]
    fn replacement_is_total(doc in any::<String>(), placeholder in any::<String>()) {
        let _ = replace_equations(&doc, &placeholder);
    }

    /// A full replacer behaves exactly like the free function.
    #[test]
    fn replacer_matches_function(doc in latex_document(), placeholder in safe_placeholder()) {
        let replacer = Replacer::new(placeholder.clone());
        prop_assert_eq!(replacer.replace(&doc), replace_equations(&doc, &placeholder));
    }

    /// Listing kinds in any order yields the canonical order.
    #[test]
    fn kind_order_is_canonical(kinds in prop::collection::vec(
        prop::sample::select(EquationKind::ALL.to_vec()), 0..6
    )) {
        let replacer = Replacer::default().with_kinds(kinds);
        let applied = replacer.kinds();
        prop_assert!(applied.windows(2).all(|w| w[0] < w[1]));
    }

    /// Empty stats mean the text came back untouched, and vice versa.
    #[test]
    fn stats_reflect_changes(doc in latex_document()) {
        let (out, stats) = Replacer::new("@").replace_with_stats(&doc);
        prop_assert_eq!(stats.is_empty(), out == doc);
    }

    /// Output never contains more `$` than the input.
    #[test]
    fn dollars_never_increase(doc in latex_document()) {
        let out = replace_equations_default(&doc);
        prop_assert!(out.matches('$').count() <= doc.matches('$').count());
    }
}
