//! Static formation presets and the fixed role mapping. All coordinates are
//! in percentage pitch space (0–100 on both axes, attacking left to right).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub id: u8,
    pub x: f64,
    pub y: f64,
}

const fn slot(id: u8, x: f64, y: f64) -> FormationSlot {
    FormationSlot { id, x, y }
}

/// Role is a pure function of shirt number.
pub fn role(id: u8) -> &'static str {
    match id {
        1 => "GK",
        2 => "LB",
        3 => "CB",
        4 => "CB",
        5 => "RB",
        6 => "CM",
        7 => "CM",
        8 => "CAM",
        9 => "LW",
        10 => "ST",
        11 => "RW",
        _ => "?",
    }
}

pub const DEFAULT_FORMATION: &str = "4-3-3";

pub const FORMATIONS: &[(&str, [FormationSlot; 11])] = &[
    (
        "4-3-3",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 25.0),
            slot(3, 25.0, 45.0),
            slot(4, 25.0, 55.0),
            slot(5, 25.0, 75.0),
            slot(6, 45.0, 35.0),
            slot(7, 45.0, 50.0),
            slot(8, 45.0, 65.0),
            slot(9, 75.0, 25.0),
            slot(10, 75.0, 50.0),
            slot(11, 75.0, 75.0),
        ],
    ),
    (
        "4-4-2",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 25.0),
            slot(3, 25.0, 45.0),
            slot(4, 25.0, 55.0),
            slot(5, 25.0, 75.0),
            slot(6, 45.0, 25.0),
            slot(7, 45.0, 45.0),
            slot(8, 45.0, 55.0),
            slot(9, 45.0, 75.0),
            slot(10, 75.0, 40.0),
            slot(11, 75.0, 60.0),
        ],
    ),
    (
        "3-5-2",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 35.0),
            slot(3, 25.0, 50.0),
            slot(4, 25.0, 65.0),
            slot(5, 45.0, 20.0),
            slot(6, 45.0, 35.0),
            slot(7, 45.0, 50.0),
            slot(8, 45.0, 65.0),
            slot(9, 45.0, 80.0),
            slot(10, 75.0, 40.0),
            slot(11, 75.0, 60.0),
        ],
    ),
    (
        "4-2-3-1",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 25.0),
            slot(3, 25.0, 45.0),
            slot(4, 25.0, 55.0),
            slot(5, 25.0, 75.0),
            slot(6, 40.0, 45.0),
            slot(7, 40.0, 55.0),
            slot(8, 60.0, 50.0),
            slot(9, 60.0, 25.0),
            slot(10, 75.0, 50.0),
            slot(11, 60.0, 75.0),
        ],
    ),
    (
        "3-4-3",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 35.0),
            slot(3, 25.0, 50.0),
            slot(4, 25.0, 65.0),
            slot(5, 45.0, 25.0),
            slot(6, 45.0, 45.0),
            slot(7, 45.0, 55.0),
            slot(8, 45.0, 75.0),
            slot(9, 75.0, 25.0),
            slot(10, 75.0, 50.0),
            slot(11, 75.0, 75.0),
        ],
    ),
    (
        "5-3-2",
        [
            slot(1, 10.0, 50.0),
            slot(2, 25.0, 20.0),
            slot(3, 25.0, 35.0),
            slot(4, 25.0, 50.0),
            slot(5, 25.0, 65.0),
            slot(6, 25.0, 80.0),
            slot(7, 45.0, 35.0),
            slot(8, 45.0, 50.0),
            slot(9, 45.0, 65.0),
            slot(10, 75.0, 40.0),
            slot(11, 75.0, 60.0),
        ],
    ),
];

pub fn formation(name: &str) -> Option<&'static [FormationSlot; 11]> {
    FORMATIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, slots)| slots)
}
