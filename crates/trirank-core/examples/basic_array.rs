//! Basic array creation and arithmetic examples.
//!
//! This example demonstrates the core functionality of trirank-core:
//! - Creating arrays with different initialization methods
//! - Accessing array properties (rank, shape, strides, size)
//! - Indexing and modifying elements
//! - Broadcasting arithmetic, transforms and products
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_array
//! ```

use anyhow::Result;
use trirank_core::{matmul, Array, PrintOptions, Relu};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== trirank-core: Basic Array Examples ===\n");

    example_creation()?;
    example_indexing()?;
    example_broadcasting()?;
    example_products()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Array Creation ---");

    let zeros = Array::zeros(&[2, 3])?;
    println!("zeros {:?}:\n{}", zeros.shape(), zeros);

    let sevens = Array::full(&[2, 2], 7.0)?;
    println!("full(7.0) {:?}:\n{}", sevens.shape(), sevens);

    let range = Array::arange(5, 10)?;
    println!("arange(5, 10): {}", range);

    let noise = Array::random(&[2, 3], -2.0, 3.0)?;
    let opts = PrintOptions {
        precision: Some(3),
        ..PrintOptions::default()
    };
    println!("random in [-2, 3):\n{}", noise.render(&opts));
    Ok(())
}

fn example_indexing() -> Result<()> {
    println!("--- Example 2: Properties and Indexing ---");

    let mut cube = Array::arange(0, 24)?.into_view(&[2, 3, 4])?;
    println!("  shape:   {:?}", cube.shape());
    println!("  strides: {:?}", cube.strides());
    println!("  dims:    {}", cube.dims());
    println!("  numel:   {}", cube.numel());

    cube[(1, 2, 3)] = -1.0;
    println!("  cube[(1, 2, 3)] = {}", cube[(1, 2, 3)]);

    match cube.at((2, 0, 0)) {
        Ok(value) => println!("  unexpected value {value}"),
        Err(err) => println!("  out of range: {err}"),
    }
    println!();
    Ok(())
}

fn example_broadcasting() -> Result<()> {
    println!("--- Example 3: Broadcasting ---");

    let grid = Array::ones(&[2, 3])?;
    let row = Array::from_slice(&[10.0, 20.0, 30.0], &[1, 3])?;
    let col = Array::from_slice(&[-100.0, 100.0], &[2, 1])?;

    let shifted = (&(&grid + &row)? + &col)?;
    println!("ones + row + col:\n{}", shifted);
    println!("relu:\n{}", shifted.apply(&Relu));
    println!("halved:\n{}", 0.5 * &shifted);
    Ok(())
}

fn example_products() -> Result<()> {
    println!("--- Example 4: Products ---");

    let a = Array::arange(1, 7)?.into_view(&[2, 3])?;
    let b = Array::arange(1, 7)?.into_view(&[3, 2])?;
    println!("(2, 3) x (3, 2):\n{}", matmul(&a, &b)?);

    let v = Array::from_slice(&[1.0, 2.0, 3.0], &[3])?;
    println!("v . v = {}", v.dot(&v)?);
    Ok(())
}
