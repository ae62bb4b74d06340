//! Mapping between segment indices and slider positions.
//!
//! Segment 0 is the idle loop that plays right after loading. It is not part
//! of the slider's travel: selectable segments are `1..N`, spread linearly
//! over `[0, span]` where `span` is the end frame of segment 1 (the reference
//! segment). With two or fewer segments the slider collapses to position 0.

use serde::Serialize;

use crate::error::{Result, ScrubError};
use crate::markers::table::{FrameRange, MarkerTable};

/// Index of the segment whose end frame scales the slider.
pub const REFERENCE_SEGMENT: usize = 1;

/// Index of the idle segment played on load.
pub const IDLE_SEGMENT: usize = 0;

/// Closed numeric range of the slider control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, position: f64) -> f64 {
        if position.is_nan() {
            return self.min;
        }
        position.clamp(self.min, self.max)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Fraction of the way through the range, 0.0 for a collapsed range.
    pub fn ratio(&self, position: f64) -> f64 {
        let width = self.width();
        if width <= 0.0 {
            0.0
        } else {
            ((self.clamp(position) - self.min) / width).clamp(0.0, 1.0)
        }
    }
}

/// A labeled discrete mark on the slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderTick {
    pub index: usize,
    pub position: f64,
    pub label: String,
}

/// Pure index/position mappings over a non-empty marker table.
#[derive(Debug, Clone, Copy)]
pub struct SegmentSelector<'a> {
    table: &'a MarkerTable,
}

impl<'a> SegmentSelector<'a> {
    /// Selector over `table`, or `None` when the table has no segments.
    pub fn new(table: &'a MarkerTable) -> Option<Self> {
        if table.is_empty() {
            None
        } else {
            Some(Self { table })
        }
    }

    /// Number of segments (`N`, at least 1).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// End frame of the reference segment, or 0 when there is none.
    pub fn span(&self) -> f64 {
        self.table
            .get(REFERENCE_SEGMENT)
            .map(|segment| segment.end_frame.max(0) as f64)
            .unwrap_or(0.0)
    }

    fn has_travel(&self) -> bool {
        self.len() > 2
    }

    /// Slider position for a segment index.
    ///
    /// `round((index - 1) / (N - 2) * span)` when `N > 2`, otherwise 0.
    /// The idle segment maps to the slider origin.
    pub fn index_to_position(&self, index: usize) -> f64 {
        if !self.has_travel() || index <= REFERENCE_SEGMENT {
            return 0.0;
        }
        let steps = (self.len() - 2) as f64;
        ((index - 1) as f64 / steps * self.span()).round()
    }

    /// Nearest selectable segment for a slider position.
    ///
    /// `round(position / span * (N - 2)) + 1`, clamped to `[1, N - 1]`.
    /// A single-segment table always answers 0.
    pub fn position_to_index(&self, position: f64) -> usize {
        let last = self.last_selectable();
        if self.len() == 1 {
            return IDLE_SEGMENT;
        }
        let span = self.span();
        if !self.has_travel() || span <= 0.0 || !position.is_finite() {
            return REFERENCE_SEGMENT;
        }
        let steps = (self.len() - 2) as f64;
        let raw = (position / span * steps).round() + 1.0;
        if raw <= REFERENCE_SEGMENT as f64 {
            REFERENCE_SEGMENT
        } else {
            (raw as usize).min(last)
        }
    }

    /// Frame range of segment `index`.
    pub fn resolve_frame_range(&self, index: usize) -> Result<FrameRange> {
        self.table
            .get(index)
            .map(|segment| segment.frame_range())
            .ok_or(ScrubError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Lowest index reachable through the slider.
    pub fn first_selectable(&self) -> usize {
        if self.len() >= 2 {
            REFERENCE_SEGMENT
        } else {
            IDLE_SEGMENT
        }
    }

    pub fn last_selectable(&self) -> usize {
        self.len() - 1
    }

    pub fn slider_range(&self) -> SliderRange {
        if self.has_travel() {
            SliderRange::new(0.0, self.span())
        } else {
            SliderRange::new(0.0, 0.0)
        }
    }

    /// One tick per selectable segment.
    pub fn ticks(&self) -> Vec<SliderTick> {
        (self.first_selectable()..=self.last_selectable())
            .filter_map(|index| self.table.get(index))
            .map(|segment| SliderTick {
                index: segment.index,
                position: self.index_to_position(segment.index),
                label: if segment.name.is_empty() {
                    segment.index.to_string()
                } else {
                    segment.name.clone()
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RawMarker;

    fn table(times: &[i64]) -> MarkerTable {
        let raw: Vec<RawMarker> = times.iter().map(|&t| RawMarker::at(t)).collect();
        MarkerTable::build(&raw).unwrap()
    }

    /// `n` segments, each 10 frames long, laid end to end.
    fn contiguous(n: usize) -> MarkerTable {
        let times: Vec<i64> = (0..n as i64)
            .flat_map(|i| [i * 10, i * 10 + 10])
            .collect();
        table(&times)
    }

    #[test]
    fn empty_table_has_no_selector() {
        let empty = MarkerTable::default();
        assert!(SegmentSelector::new(&empty).is_none());
    }

    #[test]
    fn three_segment_scenario() {
        let t = table(&[0, 10, 10, 20, 20, 40]);
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.span(), 20.0);
        assert_eq!(sel.index_to_position(1), 0.0);
        assert_eq!(sel.index_to_position(2), 20.0);
        assert_eq!(sel.position_to_index(0.0), 1);
        assert_eq!(sel.position_to_index(20.0), 2);
        assert_eq!(sel.resolve_frame_range(2).unwrap(), FrameRange::new(20, 40));
    }

    #[test]
    fn idle_segment_sits_at_origin() {
        let t = contiguous(5);
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.index_to_position(0), 0.0);
    }

    #[test]
    fn round_trip_for_selectable_indices() {
        for n in 3..=12 {
            let t = contiguous(n);
            let sel = SegmentSelector::new(&t).unwrap();
            for i in 1..n {
                let pos = sel.index_to_position(i);
                assert_eq!(sel.position_to_index(pos), i, "n={n} i={i} pos={pos}");
            }
        }
    }

    #[test]
    fn index_to_position_is_monotonic() {
        for n in 1..=12 {
            let t = contiguous(n);
            let sel = SegmentSelector::new(&t).unwrap();
            let positions: Vec<f64> = (0..n).map(|i| sel.index_to_position(i)).collect();
            assert!(
                positions.windows(2).all(|w| w[0] <= w[1]),
                "n={n}: {positions:?}"
            );
        }
    }

    #[test]
    fn position_to_index_clamps_to_selectable_range() {
        let t = contiguous(4); // span = 20, steps = 2
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.position_to_index(-100.0), 1);
        assert_eq!(sel.position_to_index(1_000.0), 3);
        assert_eq!(sel.position_to_index(f64::NAN), 1);
    }

    #[test]
    fn position_ties_round_away_from_zero() {
        let t = contiguous(4); // span = 20, steps = 2 -> index step every 10
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.position_to_index(4.9), 1);
        assert_eq!(sel.position_to_index(5.0), 2);
        assert_eq!(sel.position_to_index(15.0), 3);
    }

    #[test]
    fn single_segment_is_fixed_at_zero() {
        let t = table(&[0, 30]);
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.index_to_position(0), 0.0);
        assert_eq!(sel.position_to_index(12.0), 0);
        assert_eq!(sel.slider_range(), SliderRange::new(0.0, 0.0));
        assert_eq!(sel.first_selectable(), 0);
        assert_eq!(sel.last_selectable(), 0);
    }

    #[test]
    fn two_segments_collapse_to_reference() {
        let t = table(&[0, 10, 10, 20]);
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.index_to_position(1), 0.0);
        assert_eq!(sel.position_to_index(0.0), 1);
        assert_eq!(sel.position_to_index(99.0), 1);
        assert_eq!(sel.slider_range().width(), 0.0);
    }

    #[test]
    fn zero_span_answers_reference_segment() {
        let t = table(&[0, 0, 0, 0, 5, 9]);
        let sel = SegmentSelector::new(&t).unwrap();
        assert_eq!(sel.span(), 0.0);
        assert_eq!(sel.position_to_index(3.0), 1);
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        let t = contiguous(3);
        let sel = SegmentSelector::new(&t).unwrap();
        assert!(sel.resolve_frame_range(2).is_ok());
        let err = sel.resolve_frame_range(3).unwrap_err();
        assert!(matches!(
            err,
            ScrubError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert!(sel.resolve_frame_range(usize::MAX).is_err());
    }

    #[test]
    fn ticks_cover_selectable_segments() {
        let raw = vec![
            RawMarker::new("idle", 0, 0),
            RawMarker::at(10),
            RawMarker::new("wave", 10, 0),
            RawMarker::at(20),
            RawMarker::at(20),
            RawMarker::at(40),
        ];
        let t = MarkerTable::build(&raw).unwrap();
        let sel = SegmentSelector::new(&t).unwrap();
        let ticks = sel.ticks();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].label, "wave");
        assert_eq!(ticks[0].position, 0.0);
        assert_eq!(ticks[1].label, "2");
        assert_eq!(ticks[1].position, 20.0);
    }

    #[test]
    fn slider_range_clamps_and_ratios() {
        let range = SliderRange::new(0.0, 20.0);
        assert_eq!(range.clamp(-3.0), 0.0);
        assert_eq!(range.clamp(25.0), 20.0);
        assert_eq!(range.ratio(10.0), 0.5);
        assert_eq!(SliderRange::new(0.0, 0.0).ratio(5.0), 0.0);
    }
}
