//! Command-line argument handling.
//!
//! The binary takes exactly seven positional numbers. Anything else prints
//! a one-line usage string on stdout and exits cleanly, except malformed
//! numbers, which are reported as errors.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::budget::LinkParams;

/// Free-space link budget calculator.
#[derive(Debug, Parser)]
#[command(name = "link-budget")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Transmitter output power, W
    #[arg(value_parser = finite_real)]
    pub tx_w: f64,

    /// Transmitter antenna gain
    #[arg(value_parser = finite_real)]
    pub tx_gain_db: f64,

    /// Carrier frequency, Hz
    #[arg(value_parser = finite_real)]
    pub freq_hz: f64,

    /// Link distance, km
    #[arg(value_parser = finite_real)]
    pub dist_km: f64,

    /// Receiver antenna gain
    #[arg(value_parser = finite_real)]
    pub rx_gain_db: f64,

    /// Noise spectral density, J
    #[arg(value_parser = finite_real)]
    pub n0_j: f64,

    /// Channel bandwidth, Hz
    #[arg(value_parser = finite_real)]
    pub bw_hz: f64,
}

impl Cli {
    /// Link parameters carried by the arguments.
    pub fn into_params(self) -> LinkParams {
        LinkParams {
            tx_power_w: self.tx_w,
            tx_gain_db: self.tx_gain_db,
            freq_hz: self.freq_hz,
            dist_km: self.dist_km,
            rx_gain_db: self.rx_gain_db,
            noise_density_j: self.n0_j,
            bandwidth_hz: self.bw_hz,
        }
    }
}

/// What the process should do after looking at its arguments.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    /// Seven well-formed numbers: evaluate the link.
    Evaluate(LinkParams),
    /// Wrong arity or any non-evaluating request: print the usage line.
    Usage,
    /// An argument that is not a finite number, with the parser's message.
    Malformed(String),
}

/// Classifies an argument vector.
pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Evaluate(cli.into_params()),
        Err(err) if err.kind() == ErrorKind::ValueValidation => {
            Invocation::Malformed(err.to_string())
        }
        Err(_) => Invocation::Usage,
    }
}

/// Builds the usage line printed for non-evaluating invocations.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} tx_w tx_gain_db freq_hz dist_km rx_gain_db n0_j bw_hz")
}

fn finite_real(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{s}` is not finite"))
    }
}
