#![feature(test)]
extern crate test;
use cardano::{Cubic, Quadratic};
use test::Bencher;

fn from_roots(x1: f64, x2: f64, x3: f64) -> Cubic {
    let b = -(x1 + x2 + x3);
    let c = x1 * x2 + x1 * x3 + x2 * x3;
    let d = -x1 * x2 * x3;
    Cubic::new(1.0, b, c, d).unwrap()
}

#[bench]
fn bench_cubic_three_real(bb: &mut Bencher) {
    let p = from_roots(1.0, 2.0, 3.0);

    bb.iter(|| test::black_box(p).real_roots())
}

#[bench]
fn bench_cubic_one_real(bb: &mut Bencher) {
    let p = Cubic::new(1.0, -7.0, 41.0, -87.0).unwrap();

    bb.iter(|| test::black_box(p).roots())
}

#[bench]
fn bench_quadratic_complex(bb: &mut Bencher) {
    let q = Quadratic::new(1.0, 3.0, 16.0);

    bb.iter(|| test::black_box(q).complex_roots())
}
