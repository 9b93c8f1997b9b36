use std::cell::Cell;

use crate::{
    bounding_box::BoundingBoxOverlap,
    curve::{ArcLengthParameter, CurveLengthParameter},
    interval::{merge, Interval},
    intersects::{CurveIntersectionEvent, CurveIntersectionTolerance, Intersects},
    trim::TrimInterval,
};

use super::{
    boolean_difference, difference_from_overlaps, interval_difference, materialize,
    DifferenceOptions, IntervalDifference,
};

fn iv(min: f64, max: f64) -> Interval<f64> {
    Interval::new(min, max)
}

/// A curve whose geometry is reduced to a domain and a one dimensional box.
/// Arc length and parameter coincide, shifted by the domain start.
#[derive(Debug, PartialEq)]
struct Source {
    domain: Interval<f64>,
    extent: Interval<f64>,
    broken_length: bool,
    trim_fails_at: Option<f64>,
    trims: Cell<usize>,
}

impl Source {
    fn new(min: f64, max: f64) -> Self {
        Self {
            domain: iv(min, max),
            extent: iv(min, max),
            broken_length: false,
            trim_fails_at: None,
            trims: Cell::new(0),
        }
    }
}

/// A subtractor with scripted intersection events against any source.
struct Subtractor {
    extent: Interval<f64>,
    events: Vec<CurveIntersectionEvent<f64>>,
    fails: bool,
    seen: Cell<Option<(f64, f64)>>,
}

impl Subtractor {
    fn overlapping(intervals: &[Interval<f64>]) -> Self {
        Self::with_events(
            intervals
                .iter()
                .map(|a| CurveIntersectionEvent::Overlap { a: *a, b: *a })
                .collect(),
        )
    }

    fn with_events(events: Vec<CurveIntersectionEvent<f64>>) -> Self {
        Self {
            extent: iv(0., 10.),
            events,
            fails: false,
            seen: Cell::new(None),
        }
    }

    fn away(mut self) -> Self {
        self.extent = iv(100., 110.);
        self
    }

    fn failing(mut self) -> Self {
        self.fails = true;
        self
    }
}

impl ArcLengthParameter<f64> for Source {
    fn try_length(&self) -> anyhow::Result<f64> {
        anyhow::ensure!(!self.broken_length, "no length");
        Ok(self.domain.length())
    }

    fn try_length_parameter(&self, length: f64) -> anyhow::Result<CurveLengthParameter<f64>> {
        anyhow::ensure!(!self.broken_length, "no length");
        Ok(CurveLengthParameter::new(self.domain.min() + length, length))
    }
}

impl BoundingBoxOverlap<f64, Subtractor> for Source {
    fn bounding_box_overlaps(&self, other: &Subtractor, tolerance: Option<f64>) -> bool {
        let tolerance = tolerance.unwrap_or(0.);
        let inflated = iv(self.extent.min() - tolerance, self.extent.max() + tolerance);
        inflated.touches(&other.extent)
    }
}

impl<'a> Intersects<'a, &'a Subtractor> for Source {
    type Output = anyhow::Result<Vec<CurveIntersectionEvent<f64>>>;
    type Option = Option<CurveIntersectionTolerance<f64>>;

    fn find_intersection(&'a self, other: &'a Subtractor, option: Self::Option) -> Self::Output {
        let tolerance = option.unwrap_or_default();
        other
            .seen
            .set(Some((tolerance.intersection, tolerance.overlap)));
        anyhow::ensure!(!other.fails, "intersection failed");
        Ok(other.events.clone())
    }
}

impl TrimInterval<f64> for Source {
    fn try_trim_interval(&self, interval: &Interval<f64>) -> anyhow::Result<Self> {
        self.trims.set(self.trims.get() + 1);
        anyhow::ensure!(interval.length() > 0., "degenerate interval {}", interval);
        if let Some(t) = self.trim_fails_at {
            anyhow::ensure!(!interval.contains(t), "cannot trim through {}", t);
        }
        Ok(Source::new(interval.min(), interval.max()))
    }
}

fn run(source: &Source, subtractors: &[Subtractor]) -> IntervalDifference<f64> {
    interval_difference(
        Some(source),
        subtractors.iter().map(Some),
        &DifferenceOptions::default(),
    )
}

#[test]
fn single_overlap_splits_domain() {
    let source = Source::new(0., 10.);
    let difference = run(&source, &[Subtractor::overlapping(&[iv(3., 7.)])]);
    assert_eq!(difference.remainder(), &[iv(0., 3.), iv(7., 10.)]);
    assert_eq!(difference.overlaps(), &[iv(3., 7.)]);
}

#[test]
fn overlapping_subtractors_merge() {
    let source = Source::new(0., 10.);
    let difference = run(
        &source,
        &[
            Subtractor::overlapping(&[iv(2., 5.)]),
            Subtractor::overlapping(&[iv(4., 8.)]),
        ],
    );
    assert_eq!(difference.remainder(), &[iv(0., 2.), iv(8., 10.)]);
    assert_eq!(difference.overlaps(), &[iv(2., 8.)]);
}

#[test]
fn covering_subtractor_consumes_everything() {
    let source = Source::new(0., 10.);
    let difference = run(&source, &[Subtractor::overlapping(&[iv(-5., 15.)])]);
    assert!(difference.remainder().is_empty());
    assert_eq!(difference.overlaps(), &[iv(0., 10.)]);
}

#[test]
fn no_overlaps_keep_domain() {
    let source = Source::new(0., 10.);
    let difference = run(
        &source,
        &[
            Subtractor::with_events(vec![]),
            Subtractor::with_events(vec![]),
        ],
    );
    assert_eq!(difference.remainder(), &[iv(0., 10.)]);
    assert!(difference.overlaps().is_empty());

    let empty = run(&source, &[]);
    assert_eq!(empty.remainder(), &[iv(0., 10.)]);
    assert!(empty.overlaps().is_empty());
}

#[test]
fn touching_overlaps_become_one() {
    let source = Source::new(0., 10.);
    let difference = run(
        &source,
        &[
            Subtractor::overlapping(&[iv(0., 5.)]),
            Subtractor::overlapping(&[iv(5., 10.)]),
        ],
    );
    assert!(difference.remainder().is_empty());
    assert_eq!(difference.overlaps(), &[iv(0., 10.)]);
}

#[test]
fn absent_source_is_a_no_op() {
    let subtractors = [Subtractor::overlapping(&[iv(3., 7.)])];
    let difference = interval_difference::<f64, Source, _, _>(
        None,
        subtractors.iter().map(Some),
        &DifferenceOptions::default(),
    );
    assert!(difference.is_empty());

    let curves = boolean_difference::<f64, Source, _, _>(
        None,
        subtractors.iter().map(Some),
        &DifferenceOptions::default(),
    );
    assert!(curves.is_empty());
    assert!(subtractors[0].seen.get().is_none());
}

#[test]
fn absent_subtractors_are_skipped() {
    let source = Source::new(0., 10.);
    let subtractor = Subtractor::overlapping(&[iv(1., 2.)]);
    let difference = interval_difference(
        Some(&source),
        vec![None, Some(&subtractor), None],
        &DifferenceOptions::default(),
    );
    assert_eq!(difference.remainder(), &[iv(0., 1.), iv(2., 10.)]);
    assert_eq!(difference.overlaps(), &[iv(1., 2.)]);
}

#[test]
fn point_events_are_ignored() {
    let source = Source::new(0., 10.);
    let subtractor = Subtractor::with_events(vec![
        CurveIntersectionEvent::Point { a: 2., b: 0. },
        CurveIntersectionEvent::Overlap {
            a: iv(4., 6.),
            b: iv(0., 2.),
        },
        CurveIntersectionEvent::Point { a: 8., b: 1. },
    ]);
    let difference = run(&source, &[subtractor]);
    assert_eq!(difference.remainder(), &[iv(0., 4.), iv(6., 10.)]);
    assert_eq!(difference.overlaps(), &[iv(4., 6.)]);
}

#[test]
fn fast_reject_only_skips_work() {
    let source = Source::new(0., 10.);

    // a subtractor whose box is away from the source never reaches the intersection
    let away = [Subtractor::with_events(vec![]).away()];
    let difference = run(&source, &away);
    assert_eq!(difference.remainder(), &[iv(0., 10.)]);
    assert!(away[0].seen.get().is_none());

    let options = DifferenceOptions::default().with_fast_reject(false);
    let difference = interval_difference(Some(&source), away.iter().map(Some), &options);
    assert_eq!(difference.remainder(), &[iv(0., 10.)]);
    assert!(away[0].seen.get().is_some());
}

#[test]
fn failed_intersection_skips_subtractor() {
    let source = Source::new(0., 10.);
    let difference = run(
        &source,
        &[
            Subtractor::overlapping(&[iv(1., 2.)]).failing(),
            Subtractor::overlapping(&[iv(6., 7.)]),
        ],
    );
    assert_eq!(difference.remainder(), &[iv(0., 6.), iv(7., 10.)]);
    assert_eq!(difference.overlaps(), &[iv(6., 7.)]);
}

#[test]
fn tolerance_is_shared_by_intersection_and_overlap() {
    let source = Source::new(0., 10.);
    let subtractors = [Subtractor::with_events(vec![])];
    let options = DifferenceOptions::default().with_tolerance(1e-3);
    interval_difference(Some(&source), subtractors.iter().map(Some), &options);
    assert_eq!(subtractors[0].seen.get(), Some((1e-3, 1e-3)));
}

#[test]
fn broken_arc_length_yields_empty_result() {
    let mut source = Source::new(0., 10.);
    source.broken_length = true;
    let difference = run(&source, &[Subtractor::overlapping(&[iv(3., 7.)])]);
    assert!(difference.is_empty());
}

#[test]
fn domain_follows_arc_length_end_points() {
    let source = Source::new(2., 5.);
    let difference = run(&source, &[Subtractor::overlapping(&[iv(0., 3.)])]);
    assert_eq!(difference.remainder(), &[iv(3., 5.)]);
    assert_eq!(difference.overlaps(), &[iv(2., 3.)]);
}

#[test]
fn degenerate_intervals_are_dropped() {
    let difference = difference_from_overlaps(
        &iv(0., 10.),
        &[iv(4., 4.), iv(10., 12.), iv(-3., 1e-12), iv(12., 13.)],
        1e-9,
    );
    assert_eq!(difference.remainder(), &[iv(1e-12, 4.), iv(4., 10.)]);
    assert!(difference.overlaps().is_empty());
}

#[test]
fn remainder_and_overlaps_cover_domain() {
    // deterministic pseudo random overlaps
    let mut seed = 42u64;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 33) as f64 / (1u64 << 31) as f64) * 14. - 2.
    };

    for _ in 0..32 {
        let overlaps = (0..6).map(|_| iv(next(), next())).collect::<Vec<_>>();
        let difference = difference_from_overlaps(&iv(0., 10.), &overlaps, 0.);

        let remainder = difference.remainder();
        remainder.windows(2).for_each(|w| assert!(w[0].max() <= w[1].min()));
        difference
            .overlaps()
            .windows(2)
            .for_each(|w| assert!(w[0].max() < w[1].min()));

        // remainder and overlaps only share endpoints
        for r in remainder {
            for o in difference.overlaps() {
                assert!(!r.overlaps(o), "{} overlaps {}", r, o);
            }
        }

        let all = [remainder, difference.overlaps()].concat();
        assert_eq!(merge(&all), vec![iv(0., 10.)]);
    }
}

#[test]
fn materialize_trims_each_interval() {
    let source = Source::new(0., 10.);
    let difference = IntervalDifference::new(vec![iv(0., 3.), iv(7., 10.)], vec![iv(3., 7.)]);
    let curves = materialize(&source, &difference);
    assert_eq!(source.trims.get(), 3);
    assert_eq!(
        curves
            .remainder()
            .iter()
            .map(|c| c.domain)
            .collect::<Vec<_>>(),
        vec![iv(0., 3.), iv(7., 10.)]
    );
    assert_eq!(curves.overlaps()[0].domain, iv(3., 7.));
}

#[test]
fn materialize_skips_failed_trims() {
    let mut source = Source::new(0., 10.);
    source.trim_fails_at = Some(8.);
    let difference = IntervalDifference::new(vec![iv(0., 3.), iv(7., 10.)], vec![iv(3., 7.)]);
    let (remainder, overlaps) = materialize(&source, &difference).into_tuple();
    assert_eq!(remainder.len(), 1);
    assert_eq!(remainder[0].domain, iv(0., 3.));
    assert_eq!(overlaps.len(), 1);
}

#[test]
fn degenerate_intervals_never_reach_trim() {
    let source = Source::new(0., 10.);
    let subtractors = [Subtractor::overlapping(&[iv(5., 5.), iv(10., 10.)])];
    let curves = boolean_difference(
        Some(&source),
        subtractors.iter().map(Some),
        &DifferenceOptions::default(),
    );
    // the zero length overlap strictly inside splits the remainder in two touching pieces
    assert_eq!(curves.remainder().len(), 2);
    assert!(curves.overlaps().is_empty());
    assert_eq!(source.trims.get(), 2);
}
