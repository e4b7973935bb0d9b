//! Liskov substitution: any `Shape` can stand in for another in `print_area`.

use std::f64::consts::PI;
use std::io::Write;

use crate::error::Result;

pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

pub fn print_area(shape: &dyn Shape, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Area: {}", shape.area())?;
    Ok(())
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        let rect = Rectangle::new(3.5, 2.0);
        assert_eq!(rect.area(), 7.0);
        assert_eq!(rect.name(), "Rectangle");
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(5.0);
        assert!((circle.area() - 78.539_816_339_744_83).abs() < 1e-9);
    }

    #[test]
    fn test_print_area_accepts_any_shape() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(3.5, 2.0)), Box::new(Circle::new(1.0))];
        let mut out = Vec::new();
        for shape in &shapes {
            print_area(shape.as_ref(), &mut out).unwrap();
        }
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Area: 7");
        assert_eq!(lines[1], format!("Area: {}", PI));
    }

    #[test]
    fn test_total_area() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(2.0, 3.0)),
            Box::new(Rectangle::new(1.0, 4.0)),
        ];
        assert_eq!(total_area(&shapes), 10.0);
        assert_eq!(total_area(&[]), 0.0);
    }
}
