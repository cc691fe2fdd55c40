use std::fmt;

/// Width of one compass sector in degrees.
const SECTOR_DEGREES: f64 = 22.5;

/// A point of the 16-point compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassDirection {
    /// All points in clockwise order, starting at north.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::NNE,
        CompassDirection::NE,
        CompassDirection::ENE,
        CompassDirection::E,
        CompassDirection::ESE,
        CompassDirection::SE,
        CompassDirection::SSE,
        CompassDirection::S,
        CompassDirection::SSW,
        CompassDirection::SW,
        CompassDirection::WSW,
        CompassDirection::W,
        CompassDirection::WNW,
        CompassDirection::NW,
        CompassDirection::NNW,
    ];

    /// Maps a wind bearing to the sector centered on it.
    ///
    /// Halfway points round up (11.25° is NNE) and bearings outside
    /// `[0, 360)` wrap around, so the result is periodic in 360°.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = round_half_up(degrees / SECTOR_DEGREES) as i64;
        Self::ALL[sector.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NNE => "NNE",
            CompassDirection::NE => "NE",
            CompassDirection::ENE => "ENE",
            CompassDirection::E => "E",
            CompassDirection::ESE => "ESE",
            CompassDirection::SE => "SE",
            CompassDirection::SSE => "SSE",
            CompassDirection::S => "S",
            CompassDirection::SSW => "SSW",
            CompassDirection::SW => "SW",
            CompassDirection::WSW => "WSW",
            CompassDirection::W => "W",
            CompassDirection::WNW => "WNW",
            CompassDirection::NW => "NW",
            CompassDirection::NNW => "NNW",
        }
    }
}

/// Nearest integer, ties toward positive infinity.
///
/// Compares the exact fractional part instead of computing `floor(x + 0.5)`,
/// which rounds 0.49999999999999994 up to 1.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
