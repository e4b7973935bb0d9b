//! Single Responsibility
//! Example: Devices Composed from One-Job Providers
//!
//! Run with: cargo run --example p1_single_responsibility

use colored::Colorize;
use std::io::{self, Write};

use solid::{
    logging, DeviceInfo, Fax, FaxMachine, Print, PrintFaxDevice, PrintScanDevice, Printer, Scan,
    Scanner,
};

fn main() -> solid::Result<()> {
    logging::init();
    let mut out = io::stdout().lock();

    // Usage: each provider does one job; the device only forwards.
    writeln!(out, "{}", "=== Print & Scan ===".bold())?;
    let office = PrintScanDevice::new(Printer::new(), Scanner::new());
    writeln!(out, "{}", office.info())?;
    office.print("Document A", &mut out)?;
    office.scan("Document A", &mut out)?;

    writeln!(out, "\n{}", "=== Print & Fax ===".bold())?;
    let front_desk = PrintFaxDevice::new(Printer::new(), FaxMachine::new());
    writeln!(out, "{}", front_desk.info())?;
    front_desk.print("Document B", &mut out)?;
    front_desk.fax("Document B", &mut out)?;

    // The printer is the same type in both devices; changing how printing
    // works touches Printer only.
    let (printer, _scanner) = office.into_parts();
    writeln!(out, "\n{}", "=== Printer Taken Back Out ===".bold())?;
    printer.print("Document C", &mut out)?;

    Ok(())
}
