//! Partition rules: strategies, ratios and per-shelf targets.
//!
//! Targets and ratios arrive as loose strings ("top", "every 2nd",
//! "range 1-3", "3:2:5"). They are parsed exactly once, at deserialization,
//! into the types below and matched exhaustively afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Global partition strategy for a shelving unit.
///
/// Only `AllShelves` and `RandomShelves` select intervals on their own;
/// `Equal`, `Ratio` and `Random` shape the cuts of intervals selected by
/// shelf modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartitionStrategy {
    #[default]
    None,
    Equal,
    Ratio,
    Random,
    AllShelves,
    RandomShelves,
}

impl PartitionStrategy {
    pub const ALL: [PartitionStrategy; 6] = [
        PartitionStrategy::None,
        PartitionStrategy::Equal,
        PartitionStrategy::Ratio,
        PartitionStrategy::Random,
        PartitionStrategy::AllShelves,
        PartitionStrategy::RandomShelves,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PartitionStrategy::None => "none",
            PartitionStrategy::Equal => "equal",
            PartitionStrategy::Ratio => "ratio",
            PartitionStrategy::Random => "random",
            PartitionStrategy::AllShelves => "all-shelves",
            PartitionStrategy::RandomShelves => "random-shelves",
        }
    }
}

/// Compartment width ratio, e.g. `3:2:5` (or `3-2-5`).
///
/// N segments describe N compartments and therefore N−1 dividers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ratio(Vec<f64>);

impl Ratio {
    /// Parse a colon- or hyphen-delimited ratio string.
    pub fn parse(text: &str) -> DesignResult<Self> {
        let segments: Vec<&str> = text
            .split([':', '-'])
            .map(str::trim)
            .collect();
        if segments.len() < 2 {
            return Err(DesignError::invalid_input(
                "partitionRatio",
                text,
                "Ratio needs at least two segments, e.g. \"1:1\"",
            ));
        }

        let mut weights = Vec::with_capacity(segments.len());
        for segment in segments {
            let weight: f64 = segment.parse().map_err(|_| {
                DesignError::invalid_input("partitionRatio", text, format!("'{}' is not a number", segment))
            })?;
            if !weight.is_finite() || weight <= 0.0 {
                return Err(DesignError::invalid_input(
                    "partitionRatio",
                    text,
                    "Ratio segments must be positive numbers",
                ));
            }
            weights.push(weight);
        }
        Ok(Ratio(weights))
    }

    /// Random compartment weights for `dividers` dividers.
    pub fn random<R: Rng + ?Sized>(dividers: u32, rng: &mut R) -> Self {
        let weights = (0..=dividers).map(|_| rng.random_range(0.5..1.5)).collect();
        Ratio(weights)
    }

    pub fn segments(&self) -> &[f64] {
        &self.0
    }

    /// Number of dividers this ratio implies.
    pub fn divider_count(&self) -> u32 {
        self.0.len().saturating_sub(1) as u32
    }

    /// Cumulative cut positions as fractions of the full width.
    ///
    /// `1:1:1` yields `[1/3, 2/3]`.
    pub fn cut_fractions(&self) -> Vec<f64> {
        let total: f64 = self.0.iter().sum();
        let mut running = 0.0;
        self.0[..self.0.len() - 1]
            .iter()
            .map(|weight| {
                running += weight;
                running / total
            })
            .collect()
    }
}

impl TryFrom<String> for Ratio {
    type Error = DesignError;

    fn try_from(value: String) -> DesignResult<Self> {
        Ratio::parse(&value)
    }
}

impl From<Ratio> for String {
    fn from(ratio: Ratio) -> String {
        ratio.to_string()
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", parts.join(":"))
    }
}

/// Which shelf interval(s) a modifier applies to.
///
/// Intervals are addressed top-down and 1-based: shelf 1 is the topmost
/// open compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShelfTarget {
    Exact(u32),
    Top,
    Bottom,
    Rest,
    Odd,
    Even,
    EveryNth(u32),
    Range(u32, u32),
}

/// Match priority, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Named,
    Pattern,
    Fallback,
}

impl MatchTier {
    pub const ORDER: [MatchTier; 4] = [MatchTier::Exact, MatchTier::Named, MatchTier::Pattern, MatchTier::Fallback];
}

impl ShelfTarget {
    /// Parse a user-facing target string.
    pub fn parse(text: &str) -> DesignResult<Self> {
        let normalized = text.trim().to_lowercase();
        let body = normalized
            .strip_prefix("shelf")
            .map(str::trim)
            .unwrap_or(&normalized);

        let invalid = |reason: &str| DesignError::invalid_input("shelfModifiers.target", text, reason);

        match body {
            "top" => return Ok(ShelfTarget::Top),
            "bottom" => return Ok(ShelfTarget::Bottom),
            "rest" | "others" => return Ok(ShelfTarget::Rest),
            "odd" => return Ok(ShelfTarget::Odd),
            "even" => return Ok(ShelfTarget::Even),
            _ => {}
        }

        if let Some(rest) = body.strip_prefix("every") {
            let digits = rest
                .trim_start_matches([' ', '-'])
                .trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let n: u32 = digits
                .parse()
                .map_err(|_| invalid("Expected \"every N\" with a positive integer N"))?;
            if n == 0 {
                return Err(invalid("\"every N\" needs N >= 1"));
            }
            return Ok(ShelfTarget::EveryNth(n));
        }

        let range_body = body.strip_prefix("range").map(str::trim).unwrap_or(body);
        if let Some((start, end)) = range_body.split_once('-') {
            let a: u32 = start.trim().parse().map_err(|_| invalid("Expected \"range A-B\""))?;
            let b: u32 = end.trim().parse().map_err(|_| invalid("Expected \"range A-B\""))?;
            if a == 0 || a > b {
                return Err(invalid("Range must satisfy 1 <= A <= B"));
            }
            return Ok(ShelfTarget::Range(a, b));
        }

        match body.parse::<u32>() {
            Ok(0) => Err(invalid("Shelf numbers start at 1")),
            Ok(n) => Ok(ShelfTarget::Exact(n)),
            Err(_) => Err(invalid(
                "Expected a shelf number, top, bottom, rest, odd, even, \"every N\" or \"range A-B\"",
            )),
        }
    }

    pub fn tier(&self) -> MatchTier {
        match self {
            ShelfTarget::Exact(_) => MatchTier::Exact,
            ShelfTarget::Top | ShelfTarget::Bottom => MatchTier::Named,
            ShelfTarget::Odd | ShelfTarget::Even | ShelfTarget::EveryNth(_) | ShelfTarget::Range(..) => {
                MatchTier::Pattern
            }
            ShelfTarget::Rest => MatchTier::Fallback,
        }
    }

    /// Whether this target selects the interval at `visual_index` of `total`.
    pub fn matches(&self, visual_index: u32, total: u32) -> bool {
        match *self {
            ShelfTarget::Exact(n) => n == visual_index,
            ShelfTarget::Top => visual_index == 1,
            ShelfTarget::Bottom => visual_index == total,
            ShelfTarget::Odd => visual_index % 2 == 1,
            ShelfTarget::Even => visual_index % 2 == 0,
            ShelfTarget::EveryNth(n) => n > 0 && visual_index % n == 0,
            ShelfTarget::Range(a, b) => (a..=b).contains(&visual_index),
            ShelfTarget::Rest => true,
        }
    }
}

impl TryFrom<String> for ShelfTarget {
    type Error = DesignError;

    fn try_from(value: String) -> DesignResult<Self> {
        ShelfTarget::parse(&value)
    }
}

impl From<ShelfTarget> for String {
    fn from(target: ShelfTarget) -> String {
        target.to_string()
    }
}

impl std::fmt::Display for ShelfTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShelfTarget::Exact(n) => write!(f, "{}", n),
            ShelfTarget::Top => write!(f, "top"),
            ShelfTarget::Bottom => write!(f, "bottom"),
            ShelfTarget::Rest => write!(f, "rest"),
            ShelfTarget::Odd => write!(f, "odd"),
            ShelfTarget::Even => write!(f, "even"),
            ShelfTarget::EveryNth(n) => write!(f, "every {}", n),
            ShelfTarget::Range(a, b) => write!(f, "range {}-{}", a, b),
        }
    }
}

/// A per-shelf override of the global partition strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfModifier {
    pub target: ShelfTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<Ratio>,
}

impl ShelfModifier {
    pub fn new(target: ShelfTarget) -> Self {
        ShelfModifier {
            target,
            count: None,
            ratio: None,
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = Some(ratio);
        self
    }
}

/// Pick the modifier governing one interval.
///
/// Strict priority: exact index, then top/bottom, then patterns, then
/// `rest`. Within a tier the first listed modifier wins.
pub fn resolve_rule(modifiers: &[ShelfModifier], visual_index: u32, total: u32) -> Option<&ShelfModifier> {
    MatchTier::ORDER.iter().find_map(|tier| {
        modifiers
            .iter()
            .find(|m| m.target.tier() == *tier && m.target.matches(visual_index, total))
    })
}

/// Partition settings attached to a vertical-partition part.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionConfig {
    pub strategy: PartitionStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<Ratio>,
    pub count: u32,
    #[serde(default)]
    pub modifiers: Vec<ShelfModifier>,
}

impl PartitionConfig {
    /// Whether this configuration can ever produce a divider.
    pub fn is_active(&self) -> bool {
        match self.strategy {
            PartitionStrategy::AllShelves | PartitionStrategy::RandomShelves => true,
            _ => !self.modifiers.is_empty(),
        }
    }
}
