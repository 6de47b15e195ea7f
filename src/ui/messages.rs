//! Console output helpers for the kiosk operator.

use crate::models::response::OpStatus;
use ansi_term::Colour;
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint("ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint("✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint("⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint("❌"), msg);
}

/// Print an operation result with the color matching its status.
/// Error-status responses go to stdout: they are answers for the operator,
/// not process failures.
pub fn status_line(status: OpStatus, msg: &str) {
    let (icon, colour) = match status {
        OpStatus::Success => ("✅", Colour::Green),
        OpStatus::Warning => ("⚠️", Colour::Yellow),
        OpStatus::Cancelled => ("ℹ️", Colour::Blue),
        OpStatus::Error => ("❌", Colour::Red),
    };
    println!("{} {}", colour.bold().paint(icon), msg);
}
