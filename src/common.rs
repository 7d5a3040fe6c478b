/// Speed of light in vacuum, m/s
pub static SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Fixed line loss, 10^(-1/10) (-1 dB) in linear form
pub static LINE_LOSS: f64 = 0.7943282347242815;

/// Fixed atmospheric loss, 10^(0/10) (0 dB) in linear form
pub static ATMOSPHERIC_LOSS: f64 = 1.0;
