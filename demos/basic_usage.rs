// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging
// Set RUST_LOG=trace to see saturation events.

use fix64::prelude::*;
use rust_decimal::Decimal;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Fix64 Example ===\n");

    // Construction
    let a = Fix64::from_integer(7);
    let b = Fix64::from_f64(2.5);
    let c = Fix64::from_decimal(Decimal::new(-1125, 3)).unwrap_or(Fix64::ZERO);
    println!("a = {}, b = {}, c = {}", a, b, c);
    println!("raw(b) = {:#x}\n", b.raw_value());

    // Arithmetic
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * c = {}", a * c);
    println!("a / b = {}", a / b);
    println!("a % b = {}\n", a % b);

    // Saturation
    println!("=== Saturation ===");
    println!("MAX + 1      = {:?}", Fix64::MAX + Fix64::ONE);
    println!("MIN - 1      = {:?}", Fix64::MIN - Fix64::ONE);
    println!("-MIN         = {:?}", -Fix64::MIN);
    println!("MAX * 2      = {:?}", Fix64::MAX * Fix64::from_integer(2));
    println!("MAX.fast_add = {:?}\n", Fix64::MAX.fast_add(Fix64::ONE));

    // Errors
    println!("=== Errors ===");
    println!("abs(MIN)     = {:?}", Fix64::MIN.abs());
    println!("sqrt(-1)     = {:?}", Fix64::NEG_ONE.sqrt());
    println!("1 / 0        = {:?}\n", Fix64::ONE.checked_div(Fix64::ZERO));

    // Math functions
    println!("=== Math ===");
    println!("sqrt(2)      = {}", Fix64::from_integer(2).sqrt().unwrap_or(Fix64::ZERO));
    println!("round(2.5)   = {}", b.round());
    println!("floor(c)     = {}", c.floor());
    println!("ceil(c)      = {}", c.ceil());

    println!("\n=== Sine Table ===");
    for i in 0..=8 {
        let angle = Fix64::PI * Fix64::from_integer(i) / Fix64::from_integer(4);
        let fixed = angle.sin();
        let error = (fixed.to_f64() - angle.to_f64().sin()).abs();
        println!("sin({:>10.6}) = {:>10.7}  (error {:.1e})", angle.to_f64(), fixed.to_f64(), error);
    }
}
