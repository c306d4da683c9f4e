use phf::{Map, Set, phf_map, phf_set};

/// The canonical gap symbol written into derived rows.
pub const GAP: char = '-';

/// The fixed amino-acid alphabet indexing both axes of a mutation table.
pub const AMINO_ACIDS: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V',
    'W', 'Y',
];

static GAP_SYMBOLS: Set<char> = phf_set! { '-', '.', 'X' };

static AMINO_ACID_INDEX: Map<char, usize> = phf_map! {
    'A' => 0, 'C' => 1, 'D' => 2, 'E' => 3, 'F' => 4,
    'G' => 5, 'H' => 6, 'I' => 7, 'K' => 8, 'L' => 9,
    'M' => 10, 'N' => 11, 'P' => 12, 'Q' => 13, 'R' => 14,
    'S' => 15, 'T' => 16, 'V' => 17, 'W' => 18, 'Y' => 19,
};

pub fn is_gap(symbol: char) -> bool {
    GAP_SYMBOLS.contains(&symbol)
}

/// Position of `symbol` in [`AMINO_ACIDS`], if it is one of the 20 canonical letters.
pub fn amino_acid_index(symbol: char) -> Option<usize> {
    AMINO_ACID_INDEX.get(&symbol).copied()
}
