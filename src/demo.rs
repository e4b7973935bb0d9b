//! One runnable walkthrough per principle, wired from a [`SolidConfig`].

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::info;

use crate::capability::{Fax, FaxMachine, Print, Printer, Scan, Scanner};
use crate::config::{DeviceConfig, DeviceKind, SolidConfig};
use crate::database::DataManager;
use crate::device::{DeviceInfo, MultiFunctionDevice, PrintFaxDevice, PrintScanDevice};
use crate::error::{Result, SolidError};
use crate::notification::notify_all;
use crate::shape::{print_area, total_area, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    pub fn run(&self, config: &SolidConfig, out: &mut dyn Write) -> Result<()> {
        info!("running {} demo", self.title());
        match self {
            Principle::SingleResponsibility => run_devices(&config.devices, out),
            Principle::OpenClosed => run_notifications(config, out),
            Principle::LiskovSubstitution => run_shapes(config, out),
            Principle::InterfaceSegregation => run_segregated_printers(out),
            Principle::DependencyInversion => run_data_manager(config, out),
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "srp" | "single-responsibility" => Ok(Principle::SingleResponsibility),
            "ocp" | "open-closed" => Ok(Principle::OpenClosed),
            "lsp" | "liskov-substitution" => Ok(Principle::LiskovSubstitution),
            "isp" | "interface-segregation" => Ok(Principle::InterfaceSegregation),
            "dip" | "dependency-inversion" => Ok(Principle::DependencyInversion),
            _ => Err(SolidError::UnknownPrinciple(s.to_string())),
        }
    }
}

fn printer(label: Option<&str>) -> Printer {
    label.map(Printer::labelled).unwrap_or_default()
}

fn scanner(label: Option<&str>) -> Scanner {
    label.map(Scanner::labelled).unwrap_or_default()
}

fn fax_machine(label: Option<&str>) -> FaxMachine {
    label.map(FaxMachine::labelled).unwrap_or_default()
}

/// Each device announces itself, then exercises exactly the capabilities it holds.
pub fn run_devices(devices: &[DeviceConfig], out: &mut dyn Write) -> Result<()> {
    for device in devices {
        let label = device.label.as_deref();
        let doc = device.document.as_str();
        match device.kind {
            DeviceKind::PrintScan => {
                let device = PrintScanDevice::new(printer(label), scanner(label));
                writeln!(out, "{}", device.info())?;
                device.print(doc, out)?;
                device.scan(doc, out)?;
            }
            DeviceKind::PrintFax => {
                let device = PrintFaxDevice::new(printer(label), fax_machine(label));
                writeln!(out, "{}", device.info())?;
                device.print(doc, out)?;
                device.fax(doc, out)?;
            }
            DeviceKind::MultiFunction => {
                let device =
                    MultiFunctionDevice::new(printer(label), scanner(label), fax_machine(label));
                writeln!(out, "{}", device.info())?;
                device.print(doc, out)?;
                device.scan(doc, out)?;
                device.fax(doc, out)?;
            }
        }
    }
    Ok(())
}

pub fn run_notifications(config: &SolidConfig, out: &mut dyn Write) -> Result<()> {
    let notifications = config.notifications.build()?;
    notify_all(&notifications, &config.notifications.message, out)
}

pub fn run_shapes(config: &SolidConfig, out: &mut dyn Write) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = config.shapes.iter().map(|s| s.build()).collect();
    for shape in &shapes {
        print_area(shape.as_ref(), out)?;
    }
    info!("total area of {} shapes: {}", shapes.len(), total_area(&shapes));
    Ok(())
}

/// A full multi-function unit next to a printer that only prints. The simple
/// printer is handed around as `&dyn Print` and never sees scan or fax.
pub fn run_segregated_printers(out: &mut dyn Write) -> Result<()> {
    let label = "MultiFunctionPrinter";
    let mfp = MultiFunctionDevice::new(
        Printer::labelled(label),
        Scanner::labelled(label),
        FaxMachine::labelled(label),
    );
    let simple: Box<dyn Print> = Box::new(Printer::labelled("SimplePrinter"));

    mfp.print("Document 1", out)?;
    mfp.scan("Document 1", out)?;
    mfp.fax("Document 1", out)?;
    simple.print("Document 2", out)
}

pub fn run_data_manager(config: &SolidConfig, out: &mut dyn Write) -> Result<()> {
    let database = config.database.backend()?.build();
    let manager = DataManager::new(database)
        .with_connection_string(config.database.connection_string.as_str())
        .with_query(config.database.query.as_str());
    manager.perform_data_operations(out)
}
