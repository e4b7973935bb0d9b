//! Liskov Substitution
//! Example: Any Shape Works Where a Shape Is Expected
//!
//! Run with: cargo run --example p3_liskov_substitution

use colored::Colorize;
use std::io::{self, Write};

use solid::logging;
use solid::shape::{print_area, total_area, Circle, Rectangle, Shape};

fn main() -> solid::Result<()> {
    logging::init();
    let mut out = io::stdout().lock();

    let rect = Rectangle::new(3.5, 2.0);
    let circle = Circle::new(5.0);

    // Usage: print_area only knows about &dyn Shape.
    writeln!(out, "{}", "=== Substitutable Shapes ===".bold())?;
    print_area(&rect, &mut out)?;
    print_area(&circle, &mut out)?;

    writeln!(out, "\n{}", "=== Heterogeneous Collection ===".bold())?;
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(rect), Box::new(circle)];
    for shape in &shapes {
        writeln!(out, "{}: {:.2}", shape.name(), shape.area())?;
    }
    writeln!(out, "Total area: {:.2}", total_area(&shapes))?;

    Ok(())
}
