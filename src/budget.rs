//! Link budget evaluation worker.
//!
//! Friis free-space path loss feeds a Shannon-Hartley capacity bound; the
//! result is floored to whole bits per second.

use std::f64::consts::PI;

use tracing::trace;

use crate::common::{ATMOSPHERIC_LOSS, LINE_LOSS, SPEED_OF_LIGHT};
use crate::error::LinkBudgetError;

/// Input parameters of a single link evaluation.
///
/// Field names follow the command-line labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkParams {
    /// Transmitter output power, W
    pub tx_power_w: f64,
    /// Transmitter antenna gain
    pub tx_gain_db: f64,
    /// Carrier frequency, Hz
    pub freq_hz: f64,
    /// Link distance, km
    pub dist_km: f64,
    /// Receiver antenna gain
    pub rx_gain_db: f64,
    /// Noise spectral density, J (W/Hz)
    pub noise_density_j: f64,
    /// Channel bandwidth, Hz
    pub bandwidth_hz: f64,
}

/// Derived quantities of an evaluated link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBudget {
    /// Carrier wavelength, m
    pub wavelength_m: f64,
    /// Signal power at the receiver after path loss and gains, W
    pub received_power_w: f64,
    /// Noise power across the channel bandwidth, W
    pub noise_power_w: f64,
    /// Shannon capacity, bits/s
    pub capacity_bps: f64,
    /// Capacity floored to whole bits/s
    pub max_bitrate_bps: i64,
}

impl LinkParams {
    /// Evaluates the link budget.
    ///
    /// Runs the whole pipeline: wavelength, free-space path loss, received
    /// power, noise power, Shannon capacity. Fails instead of letting any
    /// step produce a NaN or infinity.
    pub fn evaluate(&self) -> Result<LinkBudget, LinkBudgetError> {
        if self.freq_hz == 0.0 {
            return Err(LinkBudgetError::ZeroFrequency);
        }

        let wavelength_m = SPEED_OF_LIGHT / self.freq_hz;
        let distance_m = self.dist_km * 1000.0;

        let path_loss = (wavelength_m / (4.0 * PI * distance_m)).powi(2);

        // The gains multiply in as-is. The CLI labels them in dB, but no
        // 10^(dB/10) conversion happens here; callers holding true decibel
        // figures must convert before passing them.
        let received_power_w = self.tx_power_w
            * LINE_LOSS
            * self.tx_gain_db
            * path_loss
            * ATMOSPHERIC_LOSS
            * self.rx_gain_db;

        let noise_power_w = self.noise_density_j * self.bandwidth_hz;
        if noise_power_w == 0.0 {
            return Err(LinkBudgetError::ZeroNoisePower {
                noise_density_j: self.noise_density_j,
                bandwidth_hz: self.bandwidth_hz,
            });
        }

        let snr = received_power_w / noise_power_w;
        if 1.0 + snr <= 0.0 {
            return Err(LinkBudgetError::NonPositiveSnr { snr });
        }

        let capacity_bps = self.bandwidth_hz * (1.0 + snr).log2();
        if !capacity_bps.is_finite() {
            return Err(LinkBudgetError::NonFiniteCapacity);
        }

        trace!(
            wavelength_m,
            received_power_w,
            noise_power_w,
            snr,
            capacity_bps,
            "Link budget evaluated"
        );

        Ok(LinkBudget {
            wavelength_m,
            received_power_w,
            noise_power_w,
            capacity_bps,
            max_bitrate_bps: capacity_bps.floor() as i64,
        })
    }
}

/// Maximum achievable bitrate of the link, bits/s.
pub fn max_bitrate(params: &LinkParams) -> Result<i64, LinkBudgetError> {
    Ok(params.evaluate()?.max_bitrate_bps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> LinkParams {
        LinkParams {
            tx_power_w: 10.0,
            tx_gain_db: 15.0,
            freq_hz: 2.4e9,
            dist_km: 500.0,
            rx_gain_db: 12.0,
            noise_density_j: 1e-20,
            bandwidth_hz: 2e7,
        }
    }

    #[test_log::test]
    fn test_reference_scenario() {
        let budget = reference_params().evaluate().unwrap();

        assert_eq!(budget.wavelength_m, 0.12491352416666666);
        assert_eq!(budget.noise_power_w, 1.9999999999999998e-13);

        let expected_received = 5.651083062411399e-13;
        assert!(
            (budget.received_power_w - expected_received).abs() < expected_received * 1e-12,
            "received power = {:e}",
            budget.received_power_w
        );

        assert_eq!(budget.max_bitrate_bps, 38_713_279);
    }

    #[test_log::test]
    fn test_more_tx_power_never_lowers_bitrate() {
        let mut params = reference_params();
        let mut previous = i64::MIN;

        for tx_power_w in [0.0, 1e-3, 0.1, 1.0, 10.0, 1e3, 1e9] {
            params.tx_power_w = tx_power_w;
            let bitrate = max_bitrate(&params).unwrap();
            assert!(
                bitrate >= previous,
                "bitrate dropped to {bitrate} at {tx_power_w} W"
            );
            previous = bitrate;
        }
    }

    #[test_log::test]
    fn test_longer_distance_never_raises_bitrate() {
        let mut params = reference_params();
        let mut previous = i64::MAX;

        for dist_km in [1.0, 10.0, 100.0, 500.0, 1e4, 1e8] {
            params.dist_km = dist_km;
            let bitrate = max_bitrate(&params).unwrap();
            assert!(
                bitrate <= previous,
                "bitrate rose to {bitrate} at {dist_km} km"
            );
            previous = bitrate;
        }
    }

    #[test_log::test]
    fn test_zero_tx_power_yields_zero_bitrate() {
        let mut params = reference_params();
        params.tx_power_w = 0.0;

        let budget = params.evaluate().unwrap();
        assert_eq!(budget.received_power_w, 0.0);
        assert_eq!(budget.max_bitrate_bps, 0);
    }

    #[test_log::test]
    fn test_evaluation_is_deterministic() {
        let params = reference_params();
        assert_eq!(params.evaluate().unwrap(), params.evaluate().unwrap());
    }

    #[test_log::test]
    fn test_zero_frequency_is_rejected() {
        let mut params = reference_params();
        params.freq_hz = 0.0;

        assert_eq!(params.evaluate(), Err(LinkBudgetError::ZeroFrequency));
    }

    #[test_log::test]
    fn test_zero_noise_power_is_rejected() {
        let mut params = reference_params();
        params.noise_density_j = 0.0;

        assert!(matches!(
            params.evaluate(),
            Err(LinkBudgetError::ZeroNoisePower { .. })
        ));
    }

    #[test_log::test]
    fn test_non_positive_log_argument_is_rejected() {
        // A negative transmitter gain drives received power below -N.
        let mut params = reference_params();
        params.tx_gain_db = -15.0;
        params.noise_density_j = 1e-26;

        assert!(matches!(
            params.evaluate(),
            Err(LinkBudgetError::NonPositiveSnr { snr }) if snr <= -1.0
        ));
    }

    // Pins the unit-handling quirk: the dB-labelled gains scale received
    // power linearly, without decibel conversion.
    #[test_log::test]
    fn test_gains_multiply_linearly() {
        let mut params = reference_params();
        params.tx_gain_db = 1.0;
        let unit_gain = params.evaluate().unwrap();

        params.tx_gain_db = 2.0;
        let doubled_gain = params.evaluate().unwrap();

        assert_eq!(
            doubled_gain.received_power_w,
            2.0 * unit_gain.received_power_w
        );
    }
}
