//! Synthetic road networks, expressed as WKT linestrings, shared by the
//! tests and benches of the workspace.

/// A single road of a fixture network.
#[derive(Debug, Clone, Copy)]
pub struct FixtureRoad {
    pub id: u32,
    pub wkt: &'static str,
    pub speed_kmph: f64,
    pub bidirectional: bool,
}

const fn road(id: u32, wkt: &'static str, speed_kmph: f64, bidirectional: bool) -> FixtureRoad {
    FixtureRoad {
        id,
        wkt,
        speed_kmph,
        bidirectional,
    }
}

/// Two bidirectional roads meeting at `(10, 0)`.
///
/// ```text
///           (10,10)
///              |  2 (30km/h)
/// (0,0) ---- (10,0)
///   1 (60km/h)
/// ```
pub const TWO_ROADS: &[FixtureRoad] = &[
    road(1, "LINESTRING (0 0, 10 0)", 60.0, true),
    road(2, "LINESTRING (10 0, 10 10)", 30.0, true),
];

/// A single bidirectional road of three segments.
pub const STRAIGHT_ROAD: &[FixtureRoad] = &[road(
    1,
    "LINESTRING (0 0, 10 0, 20 0, 30 0)",
    50.0,
    true,
)];

/// A junction at `(10, 0)` where a one-way road leaves and another
/// one-way road arrives.
///
/// ```text
///              (10,10)
///                 v  3 (one-way, towards the junction)
/// (0,0) ------- (10,0) ------> (20,0)
///   1 (bidirectional)    2 (one-way)
/// ```
pub const ONE_WAY_JUNCTION: &[FixtureRoad] = &[
    road(1, "LINESTRING (0 0, 10 0)", 50.0, true),
    road(2, "LINESTRING (10 0, 20 0)", 50.0, false),
    road(3, "LINESTRING (10 10, 10 0)", 50.0, false),
];

/// Two roads which never share a point.
pub const DETACHED: &[FixtureRoad] = &[
    road(1, "LINESTRING (0 0, 10 0)", 50.0, true),
    road(2, "LINESTRING (50 50, 60 50)", 50.0, true),
];

/// A 3x3 street grid with 100m blocks, mixed speeds, one-way columns,
/// and a fast one-way diagonal from the south-west to the north-east corner.
pub const GRID: &[FixtureRoad] = &[
    // Rows (west to east)
    road(1, "LINESTRING (0 0, 100 0, 200 0)", 50.0, true),
    road(2, "LINESTRING (0 100, 100 100, 200 100)", 30.0, true),
    road(3, "LINESTRING (0 200, 100 200, 200 200)", 50.0, true),
    // Columns (south to north)
    road(4, "LINESTRING (0 0, 0 100, 0 200)", 40.0, true),
    road(5, "LINESTRING (100 0, 100 100, 100 200)", 90.0, false),
    road(6, "LINESTRING (200 200, 200 100, 200 0)", 20.0, false),
    // Diagonal
    road(7, "LINESTRING (0 0, 100 100, 200 200)", 120.0, false),
];

/// A ring road of four segments, with a spur leaving its north-east corner.
pub const RING_WITH_SPUR: &[FixtureRoad] = &[
    road(
        1,
        "LINESTRING (0 0, 50 0, 50 50, 0 50, 0 0)",
        40.0,
        true,
    ),
    road(2, "LINESTRING (50 50, 80 80, 120 80)", 70.0, true),
];

/// Two ways of arriving from road 1: road 2 is entered at once but is long
/// and slow, road 3 is entered one segment later but is short and fast.
///
/// ```text
///         (10,20)
///            |  3 (60km/h)
///         (10,10)
///            |
/// (0,0) -- (10,0) ------------------ (1000,0)
///   1 (60km/h)        2 (10km/h)
/// ```
pub const SLOW_ARRIVAL: &[FixtureRoad] = &[
    road(1, "LINESTRING (0 0, 10 0)", 60.0, true),
    road(2, "LINESTRING (10 0, 1000 0)", 10.0, true),
    road(3, "LINESTRING (10 0, 10 10, 10 20)", 60.0, true),
];
