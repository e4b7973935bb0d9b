//! Devices composed from independently-owned capability providers.
//!
//! A device owns one provider per capability it supports and forwards each
//! call unchanged. It implements a capability trait only when it holds a
//! provider for it: `PrintFaxDevice` has no `scan`, and asking for one is a
//! compile error rather than a runtime check.

use std::io::Write;

use log::debug;

use crate::capability::{Fax, Print, Scan};
use crate::error::Result;

pub trait DeviceInfo {
    fn info(&self) -> &str;
}

/// Prints and scans. There is no fax provider, so there is no `fax`.
///
/// ```
/// use solid::{Print, PrintScanDevice, Printer, Scan, Scanner};
///
/// let device = PrintScanDevice::new(Printer::new(), Scanner::new());
/// let mut out: Vec<u8> = Vec::new();
/// device.print("A", &mut out).unwrap();
/// device.scan("A", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Printing: A\nScanning: A\n");
/// ```
///
/// With `Fax` in scope, faxing still does not compile:
///
/// ```compile_fail,E0599
/// use solid::{Fax, PrintScanDevice, Printer, Scanner};
///
/// let device = PrintScanDevice::new(Printer::new(), Scanner::new());
/// let mut out: Vec<u8> = Vec::new();
/// device.fax("A", &mut out).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrintScanDevice<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Print, S: Scan> PrintScanDevice<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        PrintScanDevice { printer, scanner }
    }

    pub fn into_parts(self) -> (P, S) {
        (self.printer, self.scanner)
    }
}

impl<P, S> DeviceInfo for PrintScanDevice<P, S> {
    fn info(&self) -> &str {
        "Print & Scan Device"
    }
}

impl<P: Print, S> Print for PrintScanDevice<P, S> {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding print", self.info());
        self.printer.print(document, out)
    }
}

impl<P, S: Scan> Scan for PrintScanDevice<P, S> {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding scan", self.info());
        self.scanner.scan(document, out)
    }
}

/// Prints and faxes. There is no scanner, so there is no `scan`.
///
/// ```
/// use solid::{Fax, FaxMachine, Print, PrintFaxDevice, Printer};
///
/// let device = PrintFaxDevice::new(Printer::new(), FaxMachine::new());
/// let mut out: Vec<u8> = Vec::new();
/// device.print("B", &mut out).unwrap();
/// device.fax("B", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Printing: B\nFaxing: B\n");
/// ```
///
/// With `Scan` in scope, scanning still does not compile:
///
/// ```compile_fail,E0599
/// use solid::{FaxMachine, PrintFaxDevice, Printer, Scan};
///
/// let device = PrintFaxDevice::new(Printer::new(), FaxMachine::new());
/// let mut out: Vec<u8> = Vec::new();
/// device.scan("B", &mut out).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrintFaxDevice<P, F> {
    printer: P,
    fax: F,
}

impl<P: Print, F: Fax> PrintFaxDevice<P, F> {
    pub fn new(printer: P, fax: F) -> Self {
        PrintFaxDevice { printer, fax }
    }

    pub fn into_parts(self) -> (P, F) {
        (self.printer, self.fax)
    }
}

impl<P, F> DeviceInfo for PrintFaxDevice<P, F> {
    fn info(&self) -> &str {
        "Print & Fax Device"
    }
}

impl<P: Print, F> Print for PrintFaxDevice<P, F> {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding print", self.info());
        self.printer.print(document, out)
    }
}

impl<P, F: Fax> Fax for PrintFaxDevice<P, F> {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding fax", self.info());
        self.fax.fax(document, out)
    }
}

/// All three capabilities, each from its own provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiFunctionDevice<P, S, F> {
    printer: P,
    scanner: S,
    fax: F,
}

impl<P: Print, S: Scan, F: Fax> MultiFunctionDevice<P, S, F> {
    pub fn new(printer: P, scanner: S, fax: F) -> Self {
        MultiFunctionDevice {
            printer,
            scanner,
            fax,
        }
    }

    pub fn into_parts(self) -> (P, S, F) {
        (self.printer, self.scanner, self.fax)
    }
}

impl<P, S, F> DeviceInfo for MultiFunctionDevice<P, S, F> {
    fn info(&self) -> &str {
        "Multi-Function Device"
    }
}

impl<P: Print, S, F> Print for MultiFunctionDevice<P, S, F> {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding print", self.info());
        self.printer.print(document, out)
    }
}

impl<P, S: Scan, F> Scan for MultiFunctionDevice<P, S, F> {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding scan", self.info());
        self.scanner.scan(document, out)
    }
}

impl<P, S, F: Fax> Fax for MultiFunctionDevice<P, S, F> {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        debug!("{}: forwarding fax", self.info());
        self.fax.fax(document, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{FaxMachine, Printer, Scanner};
    use std::cell::RefCell;

    // Records payloads instead of emitting, to check routing.
    struct RecordingPrinter {
        seen: RefCell<Vec<String>>,
    }

    impl Print for RecordingPrinter {
        fn print(&self, document: &str, _out: &mut dyn Write) -> Result<()> {
            self.seen.borrow_mut().push(document.to_string());
            Ok(())
        }
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_scan_device_routes_each_capability() {
        let device = PrintScanDevice::new(Printer::new(), Scanner::new());
        let mut out = Vec::new();
        device.print("Document A", &mut out).unwrap();
        device.scan("Document A", &mut out).unwrap();
        assert_eq!(text(out), "Printing: Document A\nScanning: Document A\n");
        assert_eq!(device.info(), "Print & Scan Device");
    }

    #[test]
    fn test_print_fax_device_routes_each_capability() {
        let device = PrintFaxDevice::new(Printer::new(), FaxMachine::new());
        let mut out = Vec::new();
        device.print("Document B", &mut out).unwrap();
        device.fax("Document B", &mut out).unwrap();
        assert_eq!(text(out), "Printing: Document B\nFaxing: Document B\n");
        assert_eq!(device.info(), "Print & Fax Device");
    }

    #[test]
    fn test_multi_function_device_uses_distinct_providers() {
        let device = MultiFunctionDevice::new(
            Printer::labelled("P"),
            Scanner::labelled("S"),
            FaxMachine::labelled("F"),
        );
        let mut out = Vec::new();
        device.print("x", &mut out).unwrap();
        device.scan("x", &mut out).unwrap();
        device.fax("x", &mut out).unwrap();
        assert_eq!(text(out), "P Printing: x\nS Scanning: x\nF Faxing: x\n");
        assert_eq!(device.info(), "Multi-Function Device");
    }

    #[test]
    fn test_forwarding_passes_payload_unchanged() {
        let printer = RecordingPrinter {
            seen: RefCell::new(Vec::new()),
        };
        let device = PrintScanDevice::new(printer, Scanner::new());
        let mut out = Vec::new();
        device.print("  exact payload ", &mut out).unwrap();
        assert!(out.is_empty());

        let (printer, _) = device.into_parts();
        assert_eq!(*printer.seen.borrow(), vec!["  exact payload ".to_string()]);
    }

    #[test]
    fn test_boxed_providers_are_accepted() {
        let printer: Box<dyn Print> = Box::new(Printer::labelled("Boxed"));
        let fax: Box<dyn Fax> = Box::new(FaxMachine::new());
        let device = PrintFaxDevice::new(printer, fax);
        let mut out = Vec::new();
        device.print("doc", &mut out).unwrap();
        assert_eq!(text(out), "Boxed Printing: doc\n");
    }

    #[test]
    fn test_device_is_substitutable_as_capability() {
        fn print_twice(printer: &dyn Print, out: &mut dyn Write) -> Result<()> {
            printer.print("one", out)?;
            printer.print("two", out)
        }

        let device = PrintScanDevice::new(Printer::new(), Scanner::new());
        let mut out = Vec::new();
        print_twice(&device, &mut out).unwrap();
        assert_eq!(text(out), "Printing: one\nPrinting: two\n");
    }

    #[test]
    fn test_into_parts_returns_owned_providers() {
        let device = PrintFaxDevice::new(Printer::labelled("kept"), FaxMachine::new());
        let (printer, fax) = device.into_parts();
        assert_eq!(printer.label(), Some("kept"));
        assert_eq!(fax.label(), None);
    }
}
