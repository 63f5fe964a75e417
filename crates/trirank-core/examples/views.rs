//! Ownership-transferring shape operations.
//!
//! This example demonstrates:
//! - `view` reinterpreting a buffer without copying
//! - `unsqueeze` inserting axes of extent 1
//! - The empty state left behind by a move
//! - `concat` producing a fresh buffer
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example views
//! ```

use anyhow::Result;
use trirank_core::Array;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== trirank-core: Views and Shape Operations ===\n");

    example_view()?;
    example_unsqueeze()?;
    example_concat()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_view() -> Result<()> {
    println!("--- Example 1: View ---");

    let mut flat = Array::arange(0, 12)?;
    let ptr = flat.as_slice().as_ptr();

    let grid = flat.view(&[3, 4])?;
    println!("grid {:?}:\n{}", grid.shape(), grid);
    println!("  same buffer: {}", grid.as_slice().as_ptr() == ptr);
    println!("  source after view: numel = {}, dims = {}", flat.numel(), flat.dims());

    // A failed view leaves the source untouched
    let mut grid = grid;
    if let Err(err) = grid.view(&[5, 2]) {
        println!("  rejected: {err}");
    }
    println!("  grid still {:?}\n", grid.shape());
    Ok(())
}

fn example_unsqueeze() -> Result<()> {
    println!("--- Example 2: Unsqueeze ---");

    let v = Array::from_slice(&[1.0, 2.0, 3.0], &[3])?;
    let row = v.clone().into_unsqueeze(0)?;
    let col = v.into_unsqueeze(1)?;
    println!("row {:?}: {}", row.shape(), row);
    println!("col {:?}:\n{}", col.shape(), col);

    let outer = (&col * &row)?;
    println!("col * row:\n{}", outer);

    let mut cube = outer.into_unsqueeze(0)?;
    if let Err(err) = cube.unsqueeze(0) {
        println!("  rejected: {err}\n");
    }
    Ok(())
}

fn example_concat() -> Result<()> {
    println!("--- Example 3: Concat ---");

    let a = Array::ones(&[2, 3])?;
    let b = Array::zeros(&[2, 3])?;

    let rows = Array::concat([&a, &b], 0)?;
    println!("along axis 0 {:?}:\n{}", rows.shape(), rows);

    let cols = Array::concat([&a, &b], 1)?;
    println!("along axis 1 {:?}:\n{}", cols.shape(), cols);
    Ok(())
}
