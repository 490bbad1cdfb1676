//! Closed integer spans of partial-remainder values.

use std::fmt::Display;

/// Closed range `[min, max]` of `t` values over which one digit is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    min: i64,
    max: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Span {
    /// Creates span `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub const fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "Span min must be <= max");
        Self { min, max }
    }

    /// Creates span `[min, max]`, or `None` if it would be empty.
    pub const fn try_new(min: i64, max: i64) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Single-point span.
    pub const fn point(t: i64) -> Self {
        Self { min: t, max: t }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Number of integer points, always at least one.
    pub const fn len(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }

    /// Returns true if `t` ∈ `[min, max]`.
    pub const fn contains(&self, t: i64) -> bool {
        self.min <= t && t <= self.max
    }

    pub const fn overlaps(&self, other: &Span) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn intersection(&self, other: &Span) -> Option<Span> {
        Span::try_new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Smallest span containing both.
    pub fn hull(&self, other: &Span) -> Span {
        Span::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// =============================================================================
// Span Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Span {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Span", 2)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Span {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: i64,
            max: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Span::try_new(raw.min, raw.max).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "span min {} is greater than max {}",
                raw.min, raw.max
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(-8, 7);
        assert_eq!(span.min(), -8);
        assert_eq!(span.max(), 7);
        assert_eq!(span.len(), 16);
        assert_eq!(Span::point(3).len(), 1);
    }

    #[test]
    #[should_panic(expected = "Span min must be <= max")]
    fn test_inverted_span_panics() {
        let _ = Span::new(5, 4);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Span::try_new(5, 4), None);
        assert_eq!(Span::try_new(4, 4), Some(Span::point(4)));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(24, 47);
        assert!(span.contains(24));
        assert!(span.contains(47));
        assert!(!span.contains(48));
    }

    #[test]
    fn test_span_overlaps() {
        let upper = Span::new(24, 47);
        let lower = Span::new(6, 24);
        assert!(upper.overlaps(&lower));
        assert_eq!(upper.intersection(&lower), Some(Span::point(24)));
        assert!(!upper.overlaps(&Span::new(8, 23)));
        assert_eq!(upper.intersection(&Span::new(8, 23)), None);
        assert_eq!(upper.hull(&Span::new(8, 23)), Span::new(8, 47));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(-49, -27).to_string(), "[-49, -27]");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn span_round_trip() {
        let span = Span::new(-16, 15);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"min":-16,"max":15}"#);
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }

    #[test]
    fn inverted_span_is_rejected() {
        let result: Result<Span, _> = serde_json::from_str(r#"{"min":3,"max":2}"#);
        assert!(result.is_err());
    }
}
