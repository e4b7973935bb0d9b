//! # SOLID Principles in Rust
//!
//! Small, self-contained illustrations of the five object-oriented design
//! principles, expressed with traits and ownership instead of inheritance:
//!
//! ## Single Responsibility / Interface Segregation
//! - One narrow trait per capability (`Print`, `Scan`, `Fax`)
//! - One provider per trait (`Printer`, `Scanner`, `FaxMachine`)
//! - Devices that own their providers and forward to them
//!
//! ## Open/Closed
//! - `notify_all` works for any `Notification`, including ones added later
//!
//! ## Liskov Substitution
//! - `print_area` accepts any `Shape`
//!
//! ## Dependency Inversion
//! - `DataManager` is generic over `Database`; the backend is injected
//!
//! Every operation writes its lines to a caller-supplied `std::io::Write`.
//!
//! Run the walkthroughs with: `cargo run --bin solid -- [srp|ocp|lsp|isp|dip|all]`
//! or `cargo run --example <name>`

pub mod capability;
pub mod config;
pub mod database;
pub mod demo;
pub mod device;
pub mod error;
pub mod logging;
pub mod notification;
pub mod shape;

pub use capability::{Fax, FaxMachine, Print, Printer, Scan, Scanner};
pub use config::SolidConfig;
pub use device::{DeviceInfo, MultiFunctionDevice, PrintFaxDevice, PrintScanDevice};
pub use error::{Result, SolidError};
