//! Address encoding: branch-label chains to display strings.

use std::collections::HashMap;

use crate::error::MeshError;
use crate::label::Label;

/// Translation table from label symbols to display strings.
///
/// The default table is the identity over the eight-symbol alphabet
/// (`A`–`D` for roots, `N`/`E`/`S`/`W` for children). A custom table
/// may remap freely, including mapping the two alphabets onto
/// overlapping output symbols.
#[derive(Clone, Debug)]
pub struct AddressTable {
    entries: HashMap<char, String>,
}

impl AddressTable {
    /// The identity table: every symbol of the fixed alphabet maps to
    /// itself.
    #[must_use]
    pub fn identity() -> Self {
        let mut entries = HashMap::new();
        for symbol in ['A', 'B', 'C', 'D', 'N', 'E', 'S', 'W'] {
            entries.insert(symbol, symbol.to_string());
        }
        Self { entries }
    }

    /// An empty table. Every encode fails until entries are inserted;
    /// useful for building fully custom alphabets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Map `symbol` to `text`, replacing any previous entry.
    pub fn insert(&mut self, symbol: char, text: impl Into<String>) {
        self.entries.insert(symbol, text.into());
    }

    /// Encode a label chain into an address string.
    ///
    /// Each label's symbol is looked up and the translations are
    /// concatenated in chain order. A symbol with no table entry is a
    /// configuration error ([`MeshError::UnknownSymbol`]), never a
    /// silent pass-through.
    pub fn encode(&self, labels: &[Label]) -> Result<String, MeshError> {
        let mut address = String::with_capacity(labels.len());
        for label in labels {
            let symbol = label.symbol();
            let text = self
                .entries
                .get(&symbol)
                .ok_or(MeshError::UnknownSymbol(symbol))?;
            address.push_str(text);
        }
        Ok(address)
    }
}

impl Default for AddressTable {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use crate::label::Quadrant;

    use super::*;

    #[test]
    fn test_identity_encoding() {
        let table = AddressTable::identity();
        let labels = [
            Label::root(2),
            Label::Child(Quadrant::North),
            Label::Child(Quadrant::West),
            Label::Child(Quadrant::West),
            Label::Child(Quadrant::South),
        ];
        assert_eq!(table.encode(&labels).unwrap(), "CNWWS");
    }

    #[test]
    fn test_empty_chain_encodes_to_empty_string() {
        assert_eq!(AddressTable::identity().encode(&[]).unwrap(), "");
    }

    #[test]
    fn test_custom_table_with_overlapping_alphabets() {
        // Roots and children deliberately share output digits.
        let mut table = AddressTable::empty();
        for (symbol, digit) in [
            ('A', "0"),
            ('B', "1"),
            ('C', "2"),
            ('D', "3"),
            ('N', "0"),
            ('E', "1"),
            ('S', "2"),
            ('W', "3"),
        ] {
            table.insert(symbol, digit);
        }
        let labels = [Label::root(1), Label::Child(Quadrant::East), Label::Child(Quadrant::North)];
        assert_eq!(table.encode(&labels).unwrap(), "110");
    }

    #[test]
    fn test_multi_character_translations() {
        let mut table = AddressTable::identity();
        table.insert('A', "alpha-");
        let labels = [Label::root(0), Label::Child(Quadrant::South)];
        assert_eq!(table.encode(&labels).unwrap(), "alpha-S");
    }

    #[test]
    fn test_missing_symbol_is_an_error() {
        let mut table = AddressTable::empty();
        table.insert('A', "A");
        let labels = [Label::root(0), Label::Child(Quadrant::North)];
        match table.encode(&labels) {
            Err(MeshError::UnknownSymbol(c)) => assert_eq!(c, 'N'),
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }
}
