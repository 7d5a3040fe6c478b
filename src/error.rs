use thiserror::Error;

/// Failures of the link budget evaluation.
///
/// Every variant is a domain error: the inputs parsed as finite reals but
/// the arithmetic they describe is undefined. Each is surfaced before the
/// corresponding float operation could yield a NaN or infinity.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LinkBudgetError {
    /// Wavelength is carrier frequency divided into the speed of light.
    #[error("carrier frequency is zero, wavelength is undefined")]
    ZeroFrequency,

    /// SNR divides received power by `noise_density_j * bandwidth_hz`.
    #[error(
        "noise power is zero (noise density {noise_density_j} J x bandwidth {bandwidth_hz} Hz)"
    )]
    ZeroNoisePower {
        /// Noise spectral density input, J.
        noise_density_j: f64,
        /// Channel bandwidth input, Hz.
        bandwidth_hz: f64,
    },

    /// Shannon capacity takes log2(1 + SNR), undefined for 1 + SNR <= 0.
    #[error("signal-to-noise ratio {snr} leaves log2(1 + SNR) undefined")]
    NonPositiveSnr {
        /// The offending linear signal-to-noise ratio.
        snr: f64,
    },

    /// Capacity left the representable range.
    #[error("channel capacity is not finite")]
    NonFiniteCapacity,
}
