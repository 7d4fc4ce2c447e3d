use crate::core::error::InputError;

/// Symbols accepted by the default alphabet: the four bases plus `N`
pub const DNA_SYMBOLS: &[u8] = b"ACGTN";

/// Largest alphabet supported
pub const MAX_ALPHABET_SIZE: usize = 16;

const UNMAPPED: u8 = u8::MAX;

/// The symbol set that barcodes and queries are drawn from.
///
/// Each symbol is assigned a dense code `0..len()` in the order given at
/// construction. Encoding is case-sensitive: `a` is not `A`.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    codes: Box<[u8; 256]>,
}

impl Alphabet {
    /// Build an alphabet from a list of distinct ASCII symbols.
    ///
    /// Returns `None` if the list is empty, longer than [`MAX_ALPHABET_SIZE`],
    /// contains a non-graphic byte, or repeats a symbol.
    #[must_use]
    pub fn new(symbols: &[u8]) -> Option<Self> {
        if symbols.is_empty() || symbols.len() > MAX_ALPHABET_SIZE {
            return None;
        }

        let mut codes = Box::new([UNMAPPED; 256]);
        for (code, &symbol) in symbols.iter().enumerate() {
            if !symbol.is_ascii_graphic() || codes[usize::from(symbol)] != UNMAPPED {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)] // bounded by MAX_ALPHABET_SIZE
            {
                codes[usize::from(symbol)] = code as u8;
            }
        }

        Some(Self {
            symbols: symbols.to_vec(),
            codes,
        })
    }

    /// `A`, `C`, `G`, `T` and `N`
    #[must_use]
    pub fn dna() -> Self {
        Self::new(DNA_SYMBOLS).unwrap_or_else(|| unreachable!("DNA alphabet is well formed"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Code for a single symbol, if it belongs to the alphabet
    #[must_use]
    pub fn code(&self, symbol: u8) -> Option<u8> {
        match self.codes[usize::from(symbol)] {
            UNMAPPED => None,
            code => Some(code),
        }
    }

    /// Encode a whole sequence, rejecting the first symbol outside the alphabet.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidSymbol` with the offending character and its
    /// position.
    pub fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, InputError> {
        seq.iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.code(symbol).ok_or(InputError::InvalidSymbol {
                    symbol: char::from(symbol),
                    position,
                })
            })
            .collect()
    }

    /// Map codes back to their symbols
    #[must_use]
    pub fn decode(&self, codes: &[u8]) -> Vec<u8> {
        codes
            .iter()
            .map(|&code| self.symbols[usize::from(code)])
            .collect()
    }

    /// Bits needed to pack one symbol as `code + 1` (zero is reserved so
    /// packed values stay unambiguous across lengths)
    #[must_use]
    pub fn bits_per_symbol(&self) -> u32 {
        usize::BITS - self.symbols.len().leading_zeros()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.symbols))
    }
}

impl std::str::FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes()).ok_or_else(|| {
            format!(
                "invalid alphabet '{s}': expected 1-{MAX_ALPHABET_SIZE} distinct printable ASCII symbols"
            )
        })
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}
