//! Interface Segregation
//! Example: Narrow Capabilities Instead of One Fat Interface
//!
//! Run with: cargo run --example p4_interface_segregation

use colored::Colorize;
use std::io::{self, Write};

use solid::{logging, Fax, FaxMachine, MultiFunctionDevice, Print, Printer, Scan, Scanner};

// Only needs printing, so it only asks for Print.
fn print_cover_sheet(printer: &dyn Print, out: &mut dyn Write) -> solid::Result<()> {
    printer.print("Cover sheet", out)
}

fn main() -> solid::Result<()> {
    logging::init();
    let mut out = io::stdout().lock();

    let label = "MultiFunctionPrinter";
    let mfp = MultiFunctionDevice::new(
        Printer::labelled(label),
        Scanner::labelled(label),
        FaxMachine::labelled(label),
    );
    let simple = Printer::labelled("SimplePrinter");

    writeln!(out, "{}", "=== Multi-Function Device ===".bold())?;
    mfp.print("Document 1", &mut out)?;
    mfp.scan("Document 1", &mut out)?;
    mfp.fax("Document 1", &mut out)?;

    // SimplePrinter has no scan() or fax(); there is nothing to stub out.
    writeln!(out, "\n{}", "=== Simple Printer ===".bold())?;
    simple.print("Document 2", &mut out)?;

    writeln!(out, "\n{}", "=== Either Works Where Print Is Needed ===".bold())?;
    print_cover_sheet(&mfp, &mut out)?;
    print_cover_sheet(&simple, &mut out)?;

    Ok(())
}
