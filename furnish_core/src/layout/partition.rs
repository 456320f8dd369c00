//! # Partition Placement
//!
//! Turns one vertical-partition part into divider boards inside the open
//! gaps of a shelving unit.
//!
//! ## Steps
//!
//! 1. Gap extraction: horizontal surfaces sorted by height, one interval per
//!    consecutive pair, gaps of 5 cm or less discarded.
//! 2. Visual indexing: intervals are stored bottom-up, addressed top-down
//!    (`visual = total − internal`), so shelf 1 is the topmost gap.
//! 3. Rule resolution per interval (exact, named, pattern, rest), falling
//!    back to the global strategy.
//! 4. Divider count: a ratio's segment count beats an explicit count.
//! 5. Crowding guard: `count × thickness > 30%` of the width skips the gap.
//! 6. Cut offsets from the ratio (or evenly spaced), cuts within 5% of an
//!    edge dropped.

use log::{trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Vec3};
use crate::parts::{Part, PositionedPart};

use super::rules::{resolve_rule, PartitionConfig, PartitionStrategy, Ratio, ShelfModifier, ShelfTarget};

/// Gaps at or below this height are surface contact, not storage (cm)
pub const MIN_GAP_CM: f64 = 5.0;

/// Largest share of the width dividers may take up
pub const CROWDING_LIMIT: f64 = 0.3;

/// Cuts closer than this fraction to either edge are dropped
pub const EDGE_MARGIN: f64 = 0.05;

/// An open vertical gap between two consecutive horizontal surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Top face of the lower surface (cm)
    pub start: f64,
    /// Bottom face of the upper surface (cm)
    pub end: f64,
    pub height: f64,
    /// Left edge (−x) of the lower surface
    pub left: f64,
    /// Length of the lower surface along x
    pub span: f64,
    /// Depth center of the lower surface
    pub z: f64,
}

impl Interval {
    pub fn mid_y(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Usable gaps between the given surfaces, ordered bottom to top.
pub fn extract_intervals(surfaces: &[PositionedPart]) -> Vec<Interval> {
    let mut sorted: Vec<&PositionedPart> = surfaces.iter().collect();
    sorted.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            let start = lower.top_face();
            let end = upper.bottom_face();
            let height = end - start;
            if height <= MIN_GAP_CM {
                return None;
            }
            Some(Interval {
                start,
                end,
                height,
                left: lower.position.x - lower.dimensions.length / 2.0,
                span: lower.dimensions.length,
                z: lower.position.z,
            })
        })
        .collect()
}

/// What happened in one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPartitioning {
    /// 1-based, top-down
    pub visual_index: u32,
    pub interval: Interval,
    /// Modifier target that governed this interval; `None` for the global strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<ShelfTarget>,
    pub dividers: u32,
    /// Retained cut positions as fractions of the shelf length
    pub cut_fractions: Vec<f64>,
}

/// Result of placing one partition part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionOutcome {
    /// One abstract part per interval that received dividers
    pub parts: Vec<Part>,
    pub positioned: Vec<PositionedPart>,
    /// Every usable interval, top-down
    pub shelves: Vec<ShelfPartitioning>,
    pub warnings: Vec<String>,
}

/// Dividers requested for one interval, before the crowding guard.
struct DividerPlan {
    count: i64,
    ratio: Option<Ratio>,
    /// Draw random weights once the count has passed the guard
    random_weights: bool,
}

/// Count and ratio for an interval governed by `modifier` (or the global strategy).
fn plan_dividers(
    config: &PartitionConfig,
    modifier: Option<&ShelfModifier>,
    visual_index: u32,
    warnings: &mut Vec<String>,
) -> DividerPlan {
    let global_ratio = match config.strategy {
        PartitionStrategy::Equal => None,
        _ => config.ratio.clone(),
    };
    let global_count = (config.count > 0).then_some(i64::from(config.count));

    let (ratio, explicit_count) = match modifier {
        Some(m) => (
            m.ratio.clone().or(global_ratio),
            m.count.map(i64::from).or(global_count),
        ),
        None => (global_ratio, global_count),
    };

    if let Some(ratio) = ratio {
        let implied = i64::from(ratio.divider_count());
        if let Some(count) = explicit_count.filter(|c| *c != implied) {
            let message = format!(
                "Shelf {}: partition ratio {} implies {} dividers, ignoring count {}",
                visual_index, ratio, implied, count
            );
            warn!("{}", message);
            warnings.push(message);
        }
        return DividerPlan {
            count: implied,
            ratio: Some(ratio),
            random_weights: false,
        };
    }

    DividerPlan {
        count: explicit_count.unwrap_or(1),
        ratio: None,
        random_weights: config.strategy == PartitionStrategy::Random,
    }
}

/// Evenly spaced or ratio-weighted cut fractions, edge cuts removed.
fn cut_fractions(count: u32, ratio: Option<&Ratio>) -> Vec<f64> {
    let raw = match ratio {
        Some(ratio) => ratio.cut_fractions(),
        None => (0..count)
            .map(|i| f64::from(i + 1) / f64::from(count + 1))
            .collect(),
    };
    raw.into_iter()
        .filter(|f| (EDGE_MARGIN..=1.0 - EDGE_MARGIN).contains(f))
        .collect()
}

/// Place dividers for `part` between the given horizontal surfaces.
///
/// `envelope.length` is the overall width the crowding guard measures
/// against. `random_shelf_probability` applies to `RandomShelves` only.
pub fn place_partitions<R: Rng + ?Sized>(
    part: &Part,
    config: &PartitionConfig,
    surfaces: &[PositionedPart],
    envelope: &Dimensions,
    random_shelf_probability: f64,
    rng: &mut R,
) -> PartitionOutcome {
    let mut outcome = PartitionOutcome::default();
    let intervals = extract_intervals(surfaces);
    let total = intervals.len() as u32;
    let thickness = part.dimensions.length;

    // Walk top-down so output reads in visual order
    for (internal, interval) in intervals.iter().enumerate().rev() {
        let visual_index = total - internal as u32;
        let modifier = resolve_rule(&config.modifiers, visual_index, total);

        let selected = match (modifier, config.strategy) {
            (Some(_), _) => true,
            (None, PartitionStrategy::AllShelves) => true,
            (None, PartitionStrategy::RandomShelves) => rng.random_bool(random_shelf_probability.clamp(0.0, 1.0)),
            (None, _) => false,
        };

        let mut shelf = ShelfPartitioning {
            visual_index,
            interval: *interval,
            rule: modifier.map(|m| m.target),
            dividers: 0,
            cut_fractions: Vec::new(),
        };

        if !selected {
            trace!("shelf {}: no rule, strategy {} skips", visual_index, config.strategy.code());
            outcome.shelves.push(shelf);
            continue;
        }

        let plan = plan_dividers(config, modifier, visual_index, &mut outcome.warnings);
        if plan.count <= 0 {
            trace!("shelf {}: resolved count {} skips", visual_index, plan.count);
            outcome.shelves.push(shelf);
            continue;
        }
        let count = plan.count as u32;

        // === Crowding guard ===
        let occupied = f64::from(count) * thickness;
        if occupied > CROWDING_LIMIT * envelope.length {
            let message = format!(
                "Crowding: {} dividers of {:.1} cm take {:.1} cm of the {:.0} cm wide shelf {} (over {:.0}%), skipped",
                count,
                thickness,
                occupied,
                envelope.length,
                visual_index,
                CROWDING_LIMIT * 100.0
            );
            warn!("{}", message);
            outcome.warnings.push(message);
            outcome.shelves.push(shelf);
            continue;
        }

        // === Cuts ===
        let ratio = match plan.ratio {
            None if plan.random_weights => Some(Ratio::random(count, rng)),
            ratio => ratio,
        };
        let cuts = cut_fractions(count, ratio.as_ref());
        trace!("shelf {}: {} dividers at {:?}", visual_index, cuts.len(), cuts);
        if cuts.is_empty() {
            outcome.shelves.push(shelf);
            continue;
        }

        let mut dividers = part.clone();
        dividers.id = format!("{}-s{}", part.id, visual_index);
        dividers.name = format!("{} (shelf {})", part.name, visual_index);
        dividers.dimensions = Dimensions::new(thickness, part.dimensions.width, interval.height);
        dividers.quantity = cuts.len() as u32;
        dividers.elevation = interval.start;

        for (i, fraction) in cuts.iter().enumerate() {
            let x = interval.left + fraction * interval.span;
            let position = Vec3::new(x, interval.mid_y(), interval.z);
            outcome.positioned.push(dividers.instance(i as u32, position, Vec3::ZERO));
        }

        shelf.dividers = dividers.quantity;
        shelf.cut_fractions = cuts;
        outcome.parts.push(dividers);
        outcome.shelves.push(shelf);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{AnchorPattern, Category, PartKind};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const LENGTH: f64 = 90.0;
    const THICKNESS: f64 = 2.0;

    fn surface(index: u32, y: f64) -> PositionedPart {
        let board = Part::new(
            "shelf",
            "Shelf",
            Category::Storage,
            PartKind::HorizontalSurface,
            Dimensions::new(LENGTH - 2.0 * THICKNESS, 29.4, THICKNESS),
        );
        board.instance(index, Vec3::new(0.0, y, 0.3), Vec3::ZERO)
    }

    /// Surfaces at 1, 41, 81, 121: three 38 cm gaps.
    fn three_gaps() -> Vec<PositionedPart> {
        [1.0, 41.0, 81.0, 121.0]
            .iter()
            .enumerate()
            .map(|(i, y)| surface(i as u32, *y))
            .collect()
    }

    fn partition_part(config: &PartitionConfig) -> Part {
        Part::new(
            "partition",
            "Vertical Partition",
            Category::Storage,
            PartKind::VerticalPartition(config.clone()),
            Dimensions::new(THICKNESS, 29.4, 120.0),
        )
        .anchored(AnchorPattern::VerticalPartition)
    }

    fn run(config: PartitionConfig, surfaces: &[PositionedPart], envelope_length: f64) -> PartitionOutcome {
        let mut rng = StdRng::seed_from_u64(42);
        place_partitions(
            &partition_part(&config),
            &config,
            surfaces,
            &Dimensions::new(envelope_length, 30.0, 122.0),
            0.7,
            &mut rng,
        )
    }

    fn with_modifier(modifier: ShelfModifier) -> PartitionConfig {
        PartitionConfig {
            modifiers: vec![modifier],
            ..PartitionConfig::default()
        }
    }

    #[test]
    fn test_extract_intervals() {
        let intervals = extract_intervals(&three_gaps());
        assert_eq!(intervals.len(), 3);
        assert!((intervals[0].start - 2.0).abs() < 1e-9);
        assert!((intervals[0].end - 40.0).abs() < 1e-9);
        assert!((intervals[0].height - 38.0).abs() < 1e-9);
        assert!((intervals[0].left + 43.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_gaps_discarded() {
        let surfaces = vec![surface(0, 1.0), surface(1, 7.0), surface(2, 50.0)];
        // 7 - 1 - 2 = 4 cm gap is contact, not storage
        assert_eq!(extract_intervals(&surfaces).len(), 1);
    }

    #[test]
    fn test_unsorted_surfaces() {
        let mut surfaces = three_gaps();
        surfaces.reverse();
        assert_eq!(extract_intervals(&surfaces).len(), 3);
    }

    #[test]
    fn test_top_modifier_hits_topmost_gap_only() {
        let config = with_modifier(ShelfModifier::new(ShelfTarget::Top).with_count(2));
        let outcome = run(config, &three_gaps(), LENGTH);
        assert_eq!(outcome.positioned.len(), 2);
        assert_eq!(outcome.parts.len(), 1);
        assert_eq!(outcome.parts[0].id, "partition-s1");
        assert_eq!(outcome.positioned[0].id, "partition-s1-0");
        // Topmost gap runs 82..120
        assert!(outcome.positioned.iter().all(|p| (p.position.y - 101.0).abs() < 1e-9));
        assert!((outcome.parts[0].dimensions.height - 38.0).abs() < 1e-9);

        let per_shelf: Vec<u32> = outcome.shelves.iter().map(|s| s.dividers).collect();
        assert_eq!(per_shelf, vec![2, 0, 0]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_ratio_range_cuts() {
        let config = with_modifier(
            ShelfModifier::new(ShelfTarget::Range(1, 3)).with_ratio(Ratio::parse("1:1:1").unwrap()),
        );
        let outcome = run(config, &three_gaps(), LENGTH);
        assert_eq!(outcome.positioned.len(), 6);
        for shelf in &outcome.shelves {
            assert_eq!(shelf.dividers, 2);
            assert!((shelf.cut_fractions[0] - 1.0 / 3.0).abs() < 0.01);
            assert!((shelf.cut_fractions[1] - 2.0 / 3.0).abs() < 0.01);
        }
        // Shelf spans -43..43
        let x = outcome.positioned[0].position.x;
        assert!((x - (-43.0 + 86.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_beats_count_with_warning() {
        let config = with_modifier(
            ShelfModifier::new(ShelfTarget::Bottom)
                .with_count(5)
                .with_ratio(Ratio::parse("1:1").unwrap()),
        );
        let outcome = run(config, &three_gaps(), LENGTH);
        assert_eq!(outcome.positioned.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("ignoring count 5"));
        assert_eq!(outcome.shelves[2].dividers, 1);
    }

    #[test]
    fn test_non_positive_count_skips() {
        let config = PartitionConfig {
            strategy: PartitionStrategy::AllShelves,
            modifiers: vec![ShelfModifier::new(ShelfTarget::Exact(2)).with_count(0)],
            ..PartitionConfig::default()
        };
        let outcome = run(config, &three_gaps(), LENGTH);
        let per_shelf: Vec<u32> = outcome.shelves.iter().map(|s| s.dividers).collect();
        assert_eq!(per_shelf, vec![1, 0, 1]);
    }

    #[test]
    fn test_crowding_guard() {
        let surfaces = vec![surface(0, 1.0), surface(1, 41.0)];
        let config = with_modifier(ShelfModifier::new(ShelfTarget::Rest).with_count(10));
        let outcome = run(config, &surfaces, 50.0);
        assert!(outcome.positioned.is_empty());
        assert!(outcome.parts.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("Crowding"));
    }

    #[test]
    fn test_none_strategy_places_nothing() {
        let outcome = run(PartitionConfig::default(), &three_gaps(), LENGTH);
        assert!(outcome.positioned.is_empty());
        assert_eq!(outcome.shelves.len(), 3);
    }

    #[test]
    fn test_all_shelves_even_spacing() {
        let config = PartitionConfig {
            strategy: PartitionStrategy::AllShelves,
            count: 3,
            ..PartitionConfig::default()
        };
        let outcome = run(config, &three_gaps(), LENGTH);
        assert_eq!(outcome.positioned.len(), 9);
        assert_eq!(outcome.shelves[0].cut_fractions, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_random_shelves_seeded_is_repeatable() {
        let config = PartitionConfig {
            strategy: PartitionStrategy::RandomShelves,
            ..PartitionConfig::default()
        };
        let a = run(config.clone(), &three_gaps(), LENGTH);
        let b = run(config, &three_gaps(), LENGTH);
        assert_eq!(a.positioned, b.positioned);
    }

    #[test]
    fn test_random_strategy_weights_stay_inside() {
        let config = PartitionConfig {
            strategy: PartitionStrategy::Random,
            modifiers: vec![ShelfModifier::new(ShelfTarget::Rest).with_count(2)],
            ..PartitionConfig::default()
        };
        let outcome = run(config, &three_gaps(), LENGTH);
        for shelf in &outcome.shelves {
            assert!(shelf.cut_fractions.iter().all(|f| *f > EDGE_MARGIN && *f < 1.0 - EDGE_MARGIN));
            assert!(shelf.cut_fractions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_crowded_random_interval_draws_no_weights() {
        let surfaces = vec![surface(0, 1.0), surface(1, 41.0)];
        let config = PartitionConfig {
            strategy: PartitionStrategy::Random,
            modifiers: vec![ShelfModifier::new(ShelfTarget::Rest).with_count(i32::MAX)],
            ..PartitionConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = place_partitions(
            &partition_part(&config),
            &config,
            &surfaces,
            &Dimensions::new(50.0, 30.0, 122.0),
            0.7,
            &mut rng,
        );
        assert!(outcome.positioned.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].starts_with("Crowding"));
        // The skipped interval left the random source untouched
        assert_eq!(rng.random::<u64>(), StdRng::seed_from_u64(42).random::<u64>());
    }

    #[test]
    fn test_every_second_shelf_counts_from_top() {
        // Surfaces at 1, 41, ..., 201: five 38 cm gaps
        let surfaces: Vec<PositionedPart> = (0..6).map(|i| surface(i, 1.0 + 40.0 * f64::from(i))).collect();
        let config = with_modifier(ShelfModifier::new(ShelfTarget::EveryNth(2)).with_count(1));
        let outcome = run(config, &surfaces, LENGTH);

        let per_shelf: Vec<u32> = outcome.shelves.iter().map(|s| s.dividers).collect();
        assert_eq!(per_shelf, vec![0, 1, 0, 1, 0]);
        let ids: Vec<&str> = outcome.parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["partition-s2", "partition-s4"]);

        // Shelf 2 is the 122..160 gap, shelf 4 the 42..80 gap
        let ys: Vec<f64> = outcome.positioned.iter().map(|p| p.position.y).collect();
        assert!((ys[0] - 141.0).abs() < 1e-9);
        assert!((ys[1] - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_cuts_dropped() {
        let lopsided = Ratio::parse("1:40:1").unwrap();
        assert!(cut_fractions(2, Some(&lopsided)).is_empty());
        assert_eq!(cut_fractions(1, None), vec![0.5]);
    }
}
