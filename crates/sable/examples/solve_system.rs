//! Solving a linear system and factoring its matrix.
//!
//! Run with: cargo run --example solve_system

use sable::linalg::io::write_matrix;
use sable::prelude::*;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn main() {
    // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
    let mut system = Matrix::from_rows(vec![
        vec![q(2), q(1), q(-1), q(8)],
        vec![q(-3), q(-1), q(2), q(-11)],
        vec![q(-2), q(1), q(2), q(-3)],
    ]);

    eliminate(&mut system).expect("system has non-zero pivots");

    println!("reduced system:");
    let mut out = Vec::new();
    write_matrix(&mut out, &system).unwrap();
    print!("{}", String::from_utf8(out).unwrap());

    let coefficients = Matrix::from_rows(vec![
        vec![q(2), q(1), q(-1)],
        vec![q(-3), q(-1), q(2)],
        vec![q(-2), q(1), q(2)],
    ]);

    println!("det = {}", det(&coefficients).unwrap());

    let factors = ldu(&coefficients).unwrap();
    let mut out = Vec::new();
    write_matrix(&mut out, &factors.d).unwrap();
    println!("pivot diagonal:");
    print!("{}", String::from_utf8(out).unwrap());

    let mut inv = coefficients.clone();
    inverse(&mut inv).unwrap();
    assert_eq!(inv.mm(&coefficients).unwrap(), Matrix::identity(3));
    println!("inverse verified against the identity");
}
