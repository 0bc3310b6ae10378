//! Matrix construction and matrix function wrappers.

use super::builder::{flatten_args, lit};
use super::{call, Element, Expr, Literal};
use crate::error::{BuildError, ShapeError};

/// Builds `mat(cells..., rows, cols)` from row-major cells.
///
/// Each cell is one stack value regardless of how many tokens it spans, so the
/// function arity is `rows * cols + 2`.
pub fn matrix<R, C>(rows: R) -> Result<Expr, BuildError>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: Into<Literal>,
{
    let rows: Vec<Vec<Literal>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(lit).collect())
        .collect();

    let Some(first) = rows.first() else {
        return Err(ShapeError::NoRows.into());
    };
    let n_cols = first.len();
    for (idx, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(ShapeError::EmptyRow { row: idx }.into());
        }
        if row.len() != n_cols {
            return Err(ShapeError::RaggedRow {
                row: idx,
                expected: n_cols,
                found: row.len(),
            }
            .into());
        }
    }
    let n_rows = rows.len();

    let (mut elements, cells) = flatten_args(rows.into_iter().flatten());
    elements.push(Element::operand(n_rows.to_string()));
    elements.push(Element::operand(n_cols.to_string()));
    elements.push(Element::function("mat", cells + 2));
    Ok(Expr::from_elements(elements))
}

/// Column vector (`n x 1` matrix).
pub fn column_vector<I>(items: I) -> Result<Expr, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    matrix(items.into_iter().map(|item| [item]))
}

/// `el(M, i)` or `el(M, i, j)`.
pub fn element_at<I>(matrix: impl Into<Literal>, indices: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    call("el", std::iter::once(lit(matrix)).chain(indices.into_iter().map(lit)))
}

pub fn row_count(matrix: impl Into<Literal>) -> Expr {
    call("rows", [lit(matrix)])
}

pub fn column_count(matrix: impl Into<Literal>) -> Expr {
    call("cols", [lit(matrix)])
}

pub fn row_at(matrix: impl Into<Literal>, index: impl Into<Literal>) -> Expr {
    call("row", [lit(matrix), lit(index)])
}

pub fn column_at(matrix: impl Into<Literal>, index: impl Into<Literal>) -> Expr {
    call("col", [lit(matrix), lit(index)])
}

pub fn transpose(matrix: impl Into<Literal>) -> Expr {
    call("transpose", [lit(matrix)])
}

pub fn determinant(matrix: impl Into<Literal>) -> Expr {
    call("det", [lit(matrix)])
}

pub fn trace(matrix: impl Into<Literal>) -> Expr {
    call("tr", [lit(matrix)])
}

pub fn identity(n: impl Into<Literal>) -> Expr {
    call("identity", [lit(n)])
}

/// Appends matrices horizontally.
pub fn augment(a: impl Into<Literal>, b: impl Into<Literal>) -> Expr {
    call("augment", [lit(a), lit(b)])
}

/// Stacks any number of matrices vertically.
pub fn stack<I>(matrices: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    call("stack", matrices)
}

pub fn sort_by_column(matrix: impl Into<Literal>, column: impl Into<Literal>) -> Expr {
    call("csort", [lit(matrix), lit(column)])
}

pub fn polynomial_roots(coefficients: impl Into<Literal>) -> Expr {
    call("polyroots", [lit(coefficients)])
}

pub fn cubic_interpolate(
    data: impl Into<Literal>,
    col_x: impl Into<Literal>,
    col_y: impl Into<Literal>,
) -> Expr {
    call("cinterp", [lit(data), lit(col_x), lit(col_y)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::variable;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_by_two_matrix() {
        let m = matrix([[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.values(), vec!["1", "2", "3", "4", "2", "2", "mat"]);
        let f = m.last().unwrap();
        assert_eq!(f.args, Some(6));
        assert!(f.is_preserved());
        assert!(m.is_complete());
    }

    #[test]
    fn cells_may_be_compound_expressions() {
        let x = variable("x");
        let m = matrix(vec![vec![x.add(1), x.multiply(2)]]).unwrap();
        assert_eq!(m.values(), vec!["x", "1", "+", "x", "2", "*", "1", "2", "mat"]);
        assert_eq!(m.last().unwrap().args, Some(4));
        assert!(m.is_complete());
    }

    #[test]
    fn shape_errors() {
        let empty: Vec<Vec<i32>> = Vec::new();
        assert_eq!(matrix(empty), Err(BuildError::Shape(ShapeError::NoRows)));

        let empty_row: Vec<Vec<i32>> = vec![vec![1], vec![]];
        assert_eq!(
            matrix(empty_row),
            Err(BuildError::Shape(ShapeError::EmptyRow { row: 1 }))
        );

        let ragged = vec![vec![1, 2], vec![3]];
        assert_eq!(
            matrix(ragged),
            Err(BuildError::Shape(ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn column_vector_is_n_by_one() {
        let v = column_vector([1, 2, 3]).unwrap();
        assert_eq!(v.values(), vec!["1", "2", "3", "3", "1", "mat"]);
        assert_eq!(v.last().unwrap().args, Some(5));
    }

    #[test]
    fn wrappers_map_to_smath_names() {
        let names: Vec<String> = [
            element_at("M", [1, 2]),
            row_count("M"),
            column_count("M"),
            row_at("M", 1),
            column_at("M", 1),
            transpose("M"),
            determinant("M"),
            trace("M"),
            identity(3),
            augment("A", "B"),
            stack(["A", "B", "C"]),
            sort_by_column("M", 0),
            polynomial_roots("p"),
            cubic_interpolate("D", 0, 1),
        ]
        .iter()
        .map(|e| e.last().unwrap().value.clone())
        .collect();
        assert_eq!(
            names,
            vec![
                "el", "rows", "cols", "row", "col", "transpose", "det", "tr", "identity",
                "augment", "stack", "csort", "polyroots", "cinterp"
            ]
        );
        assert_eq!(element_at("M", [1, 2]).last().unwrap().args, Some(3));
        assert_eq!(stack(["A", "B", "C"]).last().unwrap().args, Some(3));
    }
}
