pub mod adjusted;
pub mod allocation;
pub mod handicap;

pub use self::adjusted::{adjusted_gross_score, hole_score_cap, score_record_from_strokes};
pub use self::allocation::{allocate_strokes, strokes_on_hole, validate_stroke_index, HoleAllocation};
pub use self::handicap::{course_handicap, course_handicap_for_tee};
