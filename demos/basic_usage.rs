// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// trace events emitted for rejected input.

use money_amount::numeric::policy::{HalfEven, Up};
use money_amount::prelude::*;
use std::cmp::Ordering;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Money Amount Example ===\n");

    // Parse and print
    let price: Amount<Usd> = "19.99".parse()?;
    println!("Price:           {}", price);
    println!("Price (2 dp):    {:.2}", price);
    println!("Price (no tag):  {:#}", price);

    // Checked arithmetic
    let mut cart = price.checked_mul_int(3)?;
    cart.try_add_assign(Amount::<Usd>::from_f64(4.5)?)?;
    println!("Cart total:      {}", cart);
    println!("Whole units:     {}", cart.to_whole_units_string()?);

    // Same multiplier, different rounding policy
    let third = 1.0 / 3.0;
    let half_up = Amount::<Usd>::from_integer(300)?.checked_mul_f64(third)?;
    let up = Amount::<Usd, 4, Up>::from_integer(300)?.checked_mul_f64(third)?;
    println!("\n300 x 1/3 (HALF_UP): {}", half_up);
    println!("300 x 1/3 (UP):      {}", up);

    // Display rounding
    let tie = Amount::<Eur, 4, HalfEven>::from_scaled(12_250);
    println!("\n{} shown with 2 dp under HALF_EVEN: {:.2}", tie, tie);

    // Comparison across precisions
    let cents: Dollars = "1.01".parse()?;
    let fine: Amount<Usd> = "1.0001".parse()?;
    let relation = match cents.compare_to(&fine)? {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("\n{} {} {}", cents, relation, fine);

    // Failures are values, never wrapped results
    println!("\nMAX + 1:         {:?}", Amount::<Usd>::MAX.checked_add(Amount::<Usd>::ONE));
    println!("Parse \"-1\":      {:?}", "-1".parse::<Amount<Usd>>());
    println!("Format \"x\":      {:?}", price.format_with("x"));

    // Standalone rounding engine
    println!("\nround(1005, 1, HALF_UP)   = {:?}", round(1005, 1, RoundingMode::HalfUp));
    println!("round(1005, 1, HALF_DOWN) = {:?}", round(1005, 1, RoundingMode::HalfDown));

    println!("\n=== Example Complete ===");
    Ok(())
}
