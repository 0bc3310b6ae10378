use proptest::prelude::*;
use smath_model::expr::control::{for_with_range, if_then_else, line, range, sum, while_loop};
use smath_model::expr::functions::{abs, integral, modulo, sqrt};
use smath_model::expr::matrix::matrix;
use smath_model::expr::{assign, attach_unit, call, number, text_literal, variable};
use smath_model::Expr;

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,5}".prop_map(variable),
        any::<i32>().prop_map(number),
        (-1.0e6f64..1.0e6).prop_map(number),
        "[a-z ]{0,8}".prop_map(text_literal),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(4, 64, 4, |inner| {
        let arithmetic = prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.add(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.power(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| &a / &b),
            inner.clone().prop_map(|a| -a),
            inner.clone().prop_map(|a| a.factorial().grouped()),
            inner.clone().prop_map(|a| attach_unit(a, "kN")),
            inner.clone().prop_map(abs),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| modulo(a, sqrt(b))),
        ];
        let structural = prop_oneof![
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| if_then_else(c.greater(0), t, e)),
            (inner.clone(), inner.clone()).prop_map(|(c, b)| while_loop(c, assign("x", b))),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| sum(a, "k", 1, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| integral(a, "x", 0, b)),
            proptest::collection::vec(inner.clone(), 0..4).prop_map(|args| call("f", args)),
            proptest::collection::vec(inner.clone(), 0..4).prop_map(line),
            (inner.clone(), inner.clone())
                .prop_map(|(end, body)| for_with_range("i", range(1, end), body)),
            (inner.clone(), inner.clone(), inner.clone(), inner)
                .prop_map(|(a, b, c, d)| matrix([[a, b], [c, d]]).unwrap()),
        ];
        prop_oneof![arithmetic, structural]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn combinators_always_close_to_one_value(e in expr()) {
        prop_assert_eq!(e.stack_depth(), Some(1), "unbalanced: {}", e);
    }

    #[test]
    fn assignment_of_any_expr_is_complete(e in expr()) {
        let stmt = assign("result", &e);
        prop_assert!(stmt.is_complete());
        prop_assert_eq!(stmt.len(), e.len() + 2);
    }
}
