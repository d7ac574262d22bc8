//! Edge orientation, moves and box coordinates.

use core::fmt;
use core::str::FromStr;

/// Orientation of an edge between two adjacent dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[cfg_attr(feature = "std", serde(rename = "H"))]
    Horizontal,
    #[cfg_attr(feature = "std", serde(rename = "V"))]
    Vertical,
}

impl Orientation {
    /// Single-letter wire code.
    pub const fn code(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Parse a wire code, accepting either case.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Placing a single edge.
///
/// Coordinates are in edge space:
/// - horizontal edges: `r` in `0..=rows`, `c` in `0..cols`
/// - vertical edges: `r` in `0..rows`, `c` in `0..=cols`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub orientation: Orientation,
    pub r: usize,
    pub c: usize,
}

impl Move {
    pub const fn new(orientation: Orientation, r: usize, c: usize) -> Self {
        Self { orientation, r, c }
    }

    pub const fn horizontal(r: usize, c: usize) -> Self {
        Self::new(Orientation::Horizontal, r, c)
    }

    pub const fn vertical(r: usize, c: usize) -> Self {
        Self::new(Orientation::Vertical, r, c)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.orientation.code(), self.r, self.c)
    }
}

/// A box, identified by its top-left dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxCoord {
    pub br: usize,
    pub bc: usize,
}

impl BoxCoord {
    pub const fn new(br: usize, bc: usize) -> Self {
        Self { br, bc }
    }
}

impl From<(usize, usize)> for BoxCoord {
    fn from((br, bc): (usize, usize)) -> Self {
        Self { br, bc }
    }
}

impl From<BoxCoord> for (usize, usize) {
    fn from(b: BoxCoord) -> Self {
        (b.br, b.bc)
    }
}

/// Key form `"br,bc"`, used where a box must index a string-keyed map.
impl fmt::Display for BoxCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.br, self.bc)
    }
}

/// Error parsing a `"br,bc"` box key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxKeyError;

impl fmt::Display for BoxKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "box key must look like \"row,col\"")
    }
}

impl FromStr for BoxCoord {
    type Err = BoxKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (br, bc) = s.split_once(',').ok_or(BoxKeyError)?;
        let br = br.trim().parse().map_err(|_| BoxKeyError)?;
        let bc = bc.trim().parse().map_err(|_| BoxKeyError)?;
        Ok(Self { br, bc })
    }
}
