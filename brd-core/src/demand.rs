use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative demand level derived from a predicted rental count.
///
/// The five levels partition the non-negative integers with half-open
/// intervals on ascending thresholds (50, 100, 200, 300). Each level
/// carries a fixed display label, hex color, and symbol.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize,
)]
pub enum DemandLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl DemandLevel {
    /// All levels in ascending order.
    pub const ALL: [DemandLevel; 5] = [
        DemandLevel::VeryLow,
        DemandLevel::Low,
        DemandLevel::Moderate,
        DemandLevel::High,
        DemandLevel::VeryHigh,
    ];

    /// Bucket a predicted count. Thresholds are tested ascending and the
    /// first match wins.
    pub fn classify(count: u32) -> DemandLevel {
        if count < 50 {
            return DemandLevel::VeryLow;
        }
        if count < 100 {
            return DemandLevel::Low;
        }
        if count < 200 {
            return DemandLevel::Moderate;
        }
        if count < 300 {
            return DemandLevel::High;
        }
        DemandLevel::VeryHigh
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "Very Low",
            DemandLevel::Low => "Low",
            DemandLevel::Moderate => "Moderate",
            DemandLevel::High => "High",
            DemandLevel::VeryHigh => "Very High",
        }
    }

    /// Display color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "#2b6cb0",
            DemandLevel::Low => "#2f855a",
            DemandLevel::Moderate => "#ed8936",
            DemandLevel::High => "#e53e3e",
            DemandLevel::VeryHigh => "#6b46c1",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "🔵",
            DemandLevel::Low => "🟢",
            DemandLevel::Moderate => "🟠",
            DemandLevel::High => "🔴",
            DemandLevel::VeryHigh => "🟣",
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::DemandLevel;
    use std::collections::HashSet;

    #[test]
    fn bucket_membership() {
        for n in 0..50 {
            assert_eq!(DemandLevel::classify(n), DemandLevel::VeryLow, "n = {}", n);
        }
        for n in 50..100 {
            assert_eq!(DemandLevel::classify(n), DemandLevel::Low, "n = {}", n);
        }
        for n in 100..200 {
            assert_eq!(DemandLevel::classify(n), DemandLevel::Moderate, "n = {}", n);
        }
        for n in 200..300 {
            assert_eq!(DemandLevel::classify(n), DemandLevel::High, "n = {}", n);
        }
        for n in [300, 301, 500, 10_000, u32::MAX] {
            assert_eq!(DemandLevel::classify(n), DemandLevel::VeryHigh, "n = {}", n);
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(DemandLevel::classify(49), DemandLevel::VeryLow);
        assert_eq!(DemandLevel::classify(50), DemandLevel::Low);
        assert_eq!(DemandLevel::classify(99), DemandLevel::Low);
        assert_eq!(DemandLevel::classify(100), DemandLevel::Moderate);
        assert_eq!(DemandLevel::classify(199), DemandLevel::Moderate);
        assert_eq!(DemandLevel::classify(200), DemandLevel::High);
        assert_eq!(DemandLevel::classify(299), DemandLevel::High);
        assert_eq!(DemandLevel::classify(300), DemandLevel::VeryHigh);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = DemandLevel::classify(0);
        for n in 1..400 {
            let current = DemandLevel::classify(n);
            assert!(previous <= current, "level dropped at n = {}", n);
            previous = current;
        }
    }

    #[test]
    fn colors_and_symbols_are_unique_per_level() {
        let colors: HashSet<&str> = DemandLevel::ALL.iter().map(|l| l.color()).collect();
        let symbols: HashSet<&str> = DemandLevel::ALL.iter().map(|l| l.symbol()).collect();
        assert_eq!(colors.len(), DemandLevel::ALL.len());
        assert_eq!(symbols.len(), DemandLevel::ALL.len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(DemandLevel::VeryHigh.to_string(), "Very High");
    }
}
