//! Branch labels: the four-symbol child alphabet and root labels.

/// The four quadrants a diamond subdivides into, in canonical order.
///
/// This order is load-bearing: subdivision emits children in this
/// order, and the locate scan probes candidates in this order, which
/// is what makes shared-edge tie-breaks deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    /// The child sharing the parent's north corner.
    North = 0,
    /// The child sharing the parent's east corner.
    East = 1,
    /// The child sharing the parent's south corner.
    South = 2,
    /// The child sharing the parent's west corner.
    West = 3,
}

impl Quadrant {
    /// All four quadrants in canonical order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::North,
        Quadrant::East,
        Quadrant::South,
        Quadrant::West,
    ];

    /// Display symbol for this quadrant.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Quadrant::North => 'N',
            Quadrant::East => 'E',
            Quadrant::South => 'S',
            Quadrant::West => 'W',
        }
    }
}

/// The branch label carried by every diamond: which of the four root
/// diamonds it descends from, or which quadrant of its parent it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// A depth-0 root diamond, index 0–3 (symbols `A`–`D`).
    Root(u8),
    /// A child produced by subdivision.
    Child(Quadrant),
}

impl Label {
    /// Construct a root label, validating the index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0..4.
    #[must_use]
    pub fn root(index: u8) -> Label {
        assert!(index < 4, "root index {index} out of range (must be 0-3)");
        Label::Root(index)
    }

    /// The symbol this label encodes through the address table.
    /// Roots map to `A`–`D`, children to `N`/`E`/`S`/`W`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Label::Root(i) => (b'A' + (i & 3)) as char,
            Label::Child(q) => q.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_quadrants_in_order() {
        assert_eq!(Quadrant::ALL.len(), 4);
        assert_eq!(Quadrant::ALL[0], Quadrant::North);
        assert_eq!(Quadrant::ALL[1], Quadrant::East);
        assert_eq!(Quadrant::ALL[2], Quadrant::South);
        assert_eq!(Quadrant::ALL[3], Quadrant::West);
    }

    #[test]
    fn test_quadrant_symbols_are_distinct() {
        let symbols: Vec<char> = Quadrant::ALL.iter().map(|q| q.symbol()).collect();
        assert_eq!(symbols, vec!['N', 'E', 'S', 'W']);
    }

    #[test]
    fn test_root_symbols() {
        assert_eq!(Label::root(0).symbol(), 'A');
        assert_eq!(Label::root(1).symbol(), 'B');
        assert_eq!(Label::root(2).symbol(), 'C');
        assert_eq!(Label::root(3).symbol(), 'D');
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_root_index_out_of_range_panics() {
        let _ = Label::root(4);
    }

    #[test]
    fn test_child_symbol_matches_quadrant() {
        for q in Quadrant::ALL {
            assert_eq!(Label::Child(q).symbol(), q.symbol());
        }
    }
}
