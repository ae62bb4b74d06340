//! Marker pairing and slider mapping.
//!
//! - `table`: pairs the raw marker list into indexed segments
//! - `selector`: converts between segment indices and slider positions

mod selector;
mod table;

pub use selector::{
    SegmentSelector, SliderRange, SliderTick, IDLE_SEGMENT, REFERENCE_SEGMENT,
};
pub use table::{FrameRange, MarkerTable, Segment, MIN_PAIRED_MARKERS};
