//! Built-in SMath function names.
//!
//! Function tokens naming one of these carry `preserve="true"` so the
//! consuming application does not let the user rename them.

use std::collections::HashSet;
use std::sync::OnceLock;

pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "abs", "acos", "asin", "atan", "augment", "ceil", "cinterp", "col", "cols", "concat", "cos",
    "csort", "denom", "description", "det", "diff", "el", "eval", "exp", "floor", "for",
    "identity", "if", "im", "int", "length", "line", "linterp", "ln", "log", "mat", "max", "min",
    "mod", "num2str", "numer", "numstr", "polyroots", "product", "range", "re", "reverse", "round",
    "row", "rows", "sign", "sin", "solve", "sort", "sqrt", "stack", "submatrix", "sum", "sys",
    "tan", "tr", "transpose", "while",
];

fn builtin_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| BUILTIN_FUNCTIONS.iter().copied().collect())
}

/// Returns `true` when `name` is a built-in function. Matching is case-sensitive,
/// like SMath identifiers.
pub fn is_builtin(name: &str) -> bool {
    builtin_set().contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_unique() {
        let mut sorted = BUILTIN_FUNCTIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, BUILTIN_FUNCTIONS);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_builtin("abs"));
        assert!(is_builtin("mat"));
        assert!(!is_builtin("ABS"));
        assert!(!is_builtin("myFunc"));
    }
}
