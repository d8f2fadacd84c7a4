pub mod linear;
pub mod math;
pub mod radial;

pub use linear::{stepped_track_fraction, thumb_offset, track_fraction};
pub use math::{
    DEG_TO_RAD, RAD_TO_DEG, clamp_to, map, snap_fraction, snap_to_grid, step_fractions, step_gap,
};
pub use radial::{Anchor, ArcPath, DEFAULT_ANGLE_OFFSET, RadialGeometry, pointer_angle};
