//! Hex grid coordinate systems: offset (odd-r), cube and axial
//!
//! The game addresses cells in axial coordinates. Tiled maps are stored in
//! odd-r offset coordinates, and cube coordinates are the intermediate form
//! used to move between the two.
//!
//! The conversions are total over every input whose cube components fit in
//! an `i32`. Map and snapshot coordinates are many orders of magnitude below
//! that bound. Inputs near `i32::MIN`/`i32::MAX` whose results do not fit
//! overflow (a panic in debug builds).
//! See <https://www.redblobgames.com/grids/hexagons/#conversions-offset>.

use serde::{Deserialize, Serialize};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

/// Cube hex coordinates (`x + y + z == 0`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Offset coordinates in the odd-r layout (odd rows shoved right)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

/// Axial offsets of the six neighbors, counter-clockwise from east
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // NW
    (-1, 0), // W
    (-1, 1), // SW
    (0, 1),  // SE
];

impl Coordinate {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Axial position of an odd-r offset cell
    pub fn from_offset(offset: Offset) -> Self {
        let (q, r) = oddr_to_axial(offset.col, offset.row);
        Self { q, r }
    }

    /// Odd-r offset position of this cell
    pub fn to_offset(self) -> Offset {
        let (col, row) = axial_to_oddr(self.q, self.r);
        Offset { col, row }
    }

    pub fn to_cube(self) -> Cube {
        let (x, y, z) = axial_to_cube(self.q, self.r);
        Cube { x, y, z }
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(self, direction: usize) -> Coordinate {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Coordinate::new(self.q + dq, self.r + dr)
    }

    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        (0..DIRECTIONS.len()).map(move |d| self.neighbor(d))
    }

    /// Distance between two hexes
    pub fn distance(self, other: Coordinate) -> i32 {
        let a = self.to_cube();
        let b = other.to_cube();
        ((a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()) / 2
    }
}

impl From<Cube> for Coordinate {
    fn from(cube: Cube) -> Self {
        let (q, r) = cube_to_axial(cube.x, cube.y, cube.z);
        Self { q, r }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Convert odd-r offset coordinates into cube coordinates.
///
/// `row - (row mod 2)` is always even, so halving it is exact; Euclidean
/// division keeps negative rows consistent with positive ones.
pub fn oddr_to_cube(col: i32, row: i32) -> (i32, i32, i32) {
    let x = col - (row - row.rem_euclid(2)).div_euclid(2);
    let z = row;
    let y = -x - z;
    (x, y, z)
}

/// Convert cube coordinates into axial coordinates (`y` is redundant)
pub fn cube_to_axial(x: i32, _y: i32, z: i32) -> (i32, i32) {
    (x, z)
}

/// Convert odd-r offset coordinates into axial coordinates
pub fn oddr_to_axial(col: i32, row: i32) -> (i32, i32) {
    let (x, y, z) = oddr_to_cube(col, row);
    cube_to_axial(x, y, z)
}

/// Convert axial coordinates into cube coordinates
pub fn axial_to_cube(q: i32, r: i32) -> (i32, i32, i32) {
    (q, -q - r, r)
}

/// Convert cube coordinates into odd-r offset coordinates
pub fn cube_to_oddr(x: i32, _y: i32, z: i32) -> (i32, i32) {
    let col = x + (z - z.rem_euclid(2)).div_euclid(2);
    (col, z)
}

/// Convert axial coordinates into odd-r offset coordinates
pub fn axial_to_oddr(q: i32, r: i32) -> (i32, i32) {
    let (x, y, z) = axial_to_cube(q, r);
    cube_to_oddr(x, y, z)
}
