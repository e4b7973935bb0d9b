//! Narrow capability traits and the providers that implement them.
//!
//! Each trait carries exactly one operation. A provider implements one trait
//! and nothing else, so a client that only needs printing never depends on
//! scanning or faxing.

use std::io::Write;

use log::debug;

use crate::error::Result;

pub trait Print {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait Scan {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait Fax {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()>;
}

// Boxed providers are capabilities too, so runtime-selected `Box<dyn Print>`
// plugs into the same coordinators as concrete types.
impl<T: Print + ?Sized> Print for Box<T> {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        (**self).print(document, out)
    }
}

impl<T: Scan + ?Sized> Scan for Box<T> {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        (**self).scan(document, out)
    }
}

impl<T: Fax + ?Sized> Fax for Box<T> {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        (**self).fax(document, out)
    }
}

/// Writes one line: `[<label> ]<verb>: <document>`.
fn emit(out: &mut dyn Write, label: Option<&str>, verb: &str, document: &str) -> Result<()> {
    match label {
        Some(label) => writeln!(out, "{label} {verb}: {document}")?,
        None => writeln!(out, "{verb}: {document}")?,
    }
    debug!("{verb} emitted for {} byte document", document.len());
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Printer {
    label: Option<String>,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer whose lines are prefixed with `label`, e.g. `SimplePrinter Printing: ...`.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Print for Printer {
    fn print(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        emit(out, self.label(), "Printing", document)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scanner {
    label: Option<String>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Scan for Scanner {
    fn scan(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        emit(out, self.label(), "Scanning", document)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaxMachine {
    label: Option<String>,
}

impl FaxMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Fax for FaxMachine {
    fn fax(&self, document: &str, out: &mut dyn Write) -> Result<()> {
        emit(out, self.label(), "Faxing", document)
    }
}
