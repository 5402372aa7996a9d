/// Holes 1..=9 make up the front nine.
pub const FRONT_NINE_LAST_HOLE: u8 = 9;

/// Par assumed for an unrated card that carries no par or hole data.
pub const STANDARD_PAR: i32 = 72;

/// Net double bogey: strokes over par allowed on a hole before the
/// handicap strokes received there.
pub const NET_DOUBLE_BOGEY_OVER_PAR: i32 = 2;

/// Best-N table for the rolling window, as `(minimum rounds, N)`.
pub const BEST_OF_TABLE: [(usize, usize); 8] = [
    (19, 8),
    (17, 7),
    (15, 6),
    (13, 5),
    (11, 4),
    (9, 3),
    (6, 2),
    (3, 1),
];
