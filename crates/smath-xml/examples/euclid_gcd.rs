//! Build the Euclidean GCD worksheet and save it as an SMath Studio `.sm` file.
//!
//! ## Usage
//!
//! ```bash
//! # Write to the system temp directory
//! cargo run -p smath-xml --example euclid_gcd
//!
//! # Write to a chosen path
//! cargo run -p smath-xml --example euclid_gcd -- out/gcd.sm
//! ```

use std::path::{Path, PathBuf};

use smath_model::expr::control::{if_then_else, line, while_loop};
use smath_model::expr::functions::{abs, modulo};
use smath_model::expr::{assign, evaluate, variable};
use smath_model::regions::ResultAction;
use smath_model::{MathRegion, Region, Worksheet};
use smath_xml::{WorksheetExt, WriteError};

fn main() {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("euclid_gcd.sm"));

    if let Err(err) = run(&path) {
        eprintln!("failed to write {}: {err}", path.display());
        std::process::exit(1);
    }
    eprintln!("wrote {}", path.display());
}

fn run(path: &Path) -> Result<(), WriteError> {
    let mut ws = Worksheet::new("Euclidean algorithm (calculating the GCD)", "FCC");

    ws.add(Region::title("Euclidean algorithm\n(calculating the GCD)"));
    ws.add(Region::section("Input data:"));
    ws.add(MathRegion::new(assign("a", 20405)));
    ws.add(MathRegion::new(assign("b", 84645)));

    ws.add(Region::section("Calculation:"));
    ws.add(MathRegion::new(assign("x", abs("a"))));
    ws.add(MathRegion::new(assign("y", abs("b"))));

    let x = variable("x");
    let y = variable("y");
    let step = if_then_else(
        x.greater(&y),
        assign("x", modulo("x", "y")),
        assign("y", modulo("y", "x")),
    );
    let condition = x.not_equal(0).logical_and(y.not_equal(0));
    ws.add(MathRegion::new(line([
        while_loop(condition, step),
        assign("GCD", &x + &y),
    ])));

    ws.add(Region::section("Result:"));
    ws.add(MathRegion::new(evaluate("GCD")).with_result(ResultAction::Numeric));

    ws.add(Region::section("Control:"));
    ws.add(MathRegion::new(variable("a") / "GCD"));
    ws.add(MathRegion::new(variable("b") / "GCD"));

    ws.save(path)
}
