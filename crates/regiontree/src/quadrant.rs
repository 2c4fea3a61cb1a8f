//! Quadrants of a square region and their notation order

use serde::{Deserialize, Serialize};

/// One of the four equal squares a region splits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper left square
    TopLeft,
    /// Upper right square
    TopRight,
    /// Lower right square
    BottomRight,
    /// Lower left square
    BottomLeft,
}

impl Quadrant {
    /// All quadrants in storage order (clockwise from the top left).
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomRight => 2,
            Quadrant::BottomLeft => 3,
        }
    }

    /// Origin of this quadrant relative to its parent's origin.
    pub fn offset(self, half: u64) -> (u64, u64) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (half, 0),
            Quadrant::BottomRight => (half, half),
            Quadrant::BottomLeft => (0, half),
        }
    }

    /// Quadrant containing the local point `(x, y)` of a square with half side `half`.
    pub fn containing(x: u64, y: u64, half: u64) -> Self {
        match (x >= half, y >= half) {
            (false, false) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (true, true) => Quadrant::BottomRight,
            (false, true) => Quadrant::BottomLeft,
        }
    }
}

/// How the four elements of a notation list map onto quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuadrantOrder {
    /// Top left, top right, bottom right, bottom left
    #[default]
    Clockwise,
    /// Top left, top right, bottom left, bottom right
    RowMajor,
}

impl QuadrantOrder {
    /// Quadrants in the order their nodes appear in a list.
    pub fn sequence(self) -> [Quadrant; 4] {
        match self {
            QuadrantOrder::Clockwise => Quadrant::ALL,
            QuadrantOrder::RowMajor => [
                Quadrant::TopLeft,
                Quadrant::TopRight,
                Quadrant::BottomLeft,
                Quadrant::BottomRight,
            ],
        }
    }
}
