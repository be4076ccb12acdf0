//! Physical constants (CODATA 2018 exact values) and the derived conversion factors.

pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34; // J s
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23; // J / K
pub const SPEED_OF_LIGHT_CM: f64 = 2.997_924_58e10; // cm / s

/// Converts a frequency in Hz to an equivalent temperature in K (h / k).
pub const HZ_TO_K: f64 = PLANCK_CONSTANT / BOLTZMANN_CONSTANT;

/// Converts a wavenumber in cm^-1 to an equivalent temperature in K (h c / k).
pub const CM_TO_K: f64 = PLANCK_CONSTANT * SPEED_OF_LIGHT_CM / BOLTZMANN_CONSTANT;

/// MHz to Hz.
pub const MHZ_TO_HZ: f64 = 1.0e6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_factors_match_reference_values() {
        assert!((HZ_TO_K - 4.799_243_073e-11).abs() < 1e-19);
        assert!((CM_TO_K - 1.438_776_877).abs() < 1e-9);
    }
}
