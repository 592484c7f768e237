#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Dot markers and their pairwise constraint predicates.

/// A dot annotation between two orthogonally adjacent cells.
///
/// Each marker resolves to a binary predicate over the two cell values via
/// [`Marker::satisfied`]. The absence of a dot (`None`) imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// No dot between the two cells.
    #[default]
    None,
    /// White dot: the two values must be consecutive.
    White,
    /// Black dot: one value must be double the other.
    Black,
}

impl Marker {
    /// Evaluates this marker's predicate for two assigned digits in `1..=9`.
    #[must_use]
    pub const fn satisfied(self, a: u8, b: u8) -> bool {
        match self {
            Self::None => true,
            Self::White => a == b + 1 || b == a + 1,
            Self::Black => a == 2 * b || b == 2 * a,
        }
    }

    /// Returns `true` if this marker actually constrains its cell pair.
    #[must_use]
    pub const fn is_dot(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<u8> for Marker {
    type Error = u8;

    /// Decodes the on-disk encoding `{0, 1, 2}`; any other value is returned
    /// unchanged as the error.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::White),
            2 => Ok(Self::Black),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accepts_any_pair() {
        for a in 1..=9 {
            for b in 1..=9 {
                assert!(Marker::None.satisfied(a, b));
            }
        }
    }

    #[test]
    fn test_white_requires_consecutive() {
        assert!(Marker::White.satisfied(5, 6));
        assert!(Marker::White.satisfied(6, 5));
        assert!(Marker::White.satisfied(1, 2));
        assert!(!Marker::White.satisfied(5, 5));
        assert!(!Marker::White.satisfied(3, 7));
    }

    #[test]
    fn test_black_requires_double() {
        assert!(Marker::Black.satisfied(4, 8));
        assert!(Marker::Black.satisfied(8, 4));
        assert!(Marker::Black.satisfied(1, 2));
        assert!(!Marker::Black.satisfied(9, 9));
        assert!(!Marker::Black.satisfied(3, 7));
    }

    #[test]
    fn test_one_and_two_satisfy_both_dots() {
        assert!(Marker::White.satisfied(1, 2));
        assert!(Marker::Black.satisfied(2, 1));
    }

    #[test]
    fn test_try_from_encoding() {
        assert_eq!(Marker::try_from(0), Ok(Marker::None));
        assert_eq!(Marker::try_from(1), Ok(Marker::White));
        assert_eq!(Marker::try_from(2), Ok(Marker::Black));
        assert_eq!(Marker::try_from(7), Err(7));
    }
}
