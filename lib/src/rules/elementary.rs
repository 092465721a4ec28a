//! Elementary (Wolfram) rules.

use crate::{
    cells::{validate_row, wrap, Row, State, DEAD},
    error::Error,
    rules::Rule,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Number of bits in an elementary rule number,
/// one for each of the `2^3` neighborhoods.
pub const RULE_BITS: u32 = 8;

/// Expands `number` into exactly `num_bits` binary digits,
/// most significant first, padded with zeros on the left.
///
/// ```
/// use rcellular_lib::{rules::decimal_to_bits, State};
///
/// let bits = decimal_to_bits(5, 4).unwrap();
/// assert_eq!(bits, vec![State(0), State(1), State(0), State(1)]);
/// ```
pub fn decimal_to_bits(number: u32, num_bits: u32) -> Result<Vec<State>, Error> {
    if num_bits == 0 {
        return Err(Error::NonPositiveBits);
    }
    let fits = number.checked_shr(num_bits).unwrap_or(0) == 0;
    if number > u8::MAX as u32 || !fits {
        return Err(Error::InvalidRuleNumber(number));
    }
    Ok((0..num_bits)
        .rev()
        .map(|i| State((number.checked_shr(i).unwrap_or(0) & 1) as u8))
        .collect())
}

/// Decodes a Wolfram rule number. See [`RuleTable::decode`].
pub fn decode(number: u32) -> Result<RuleTable, Error> {
    RuleTable::decode(number)
}

/// The output table of an elementary rule.
///
/// The neighborhood `(left, center, right)` has the pattern value
/// `4 * left + 2 * center + right`. Entry `n` of the table is the next
/// state for pattern `n`, which is bit `n` of the rule number,
/// counting from the least significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    number: u8,
    table: [State; 8],
}

impl RuleTable {
    /// Builds the table of a rule.
    pub fn new(number: u8) -> Self {
        let mut table = [DEAD; 8];
        for (pattern, entry) in table.iter_mut().enumerate() {
            *entry = State((number >> pattern) & 1);
        }
        RuleTable { number, table }
    }

    /// Decodes a rule number, which must be in `0..=255`.
    ///
    /// No table is produced for an invalid number.
    pub fn decode(number: u32) -> Result<Self, Error> {
        let bits = decimal_to_bits(number, RULE_BITS)?;
        let mut table = [DEAD; 8];
        for (entry, &bit) in table.iter_mut().zip(bits.iter().rev()) {
            *entry = bit;
        }
        Ok(RuleTable {
            number: number as u8,
            table,
        })
    }

    /// The rule number, re-encoded from the table.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The next state for a neighborhood pattern in `0..8`.
    #[inline]
    pub fn get(&self, pattern: usize) -> Result<State, Error> {
        self.table
            .get(pattern)
            .copied()
            .ok_or(Error::PatternOutOfRange(pattern))
    }

    /// The table in natural order, indexed by pattern value.
    pub fn table(&self) -> &[State; 8] {
        &self.table
    }

    /// The binary expansion of the rule number, most significant bit first.
    ///
    /// Entry `i` is the output for the pattern `7 - i`.
    pub fn msb_first(&self) -> [State; 8] {
        let mut bits = self.table;
        bits.reverse();
        bits
    }
}

/// Accepts `30`, `W30` and `Rule 30`.
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix(['W', 'w'])
            .or_else(|| s.strip_prefix("Rule "))
            .or_else(|| s.strip_prefix("rule "))
            .unwrap_or(s);
        let number = digits
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::ParseRuleError(s.to_string()))?;
        RuleTable::decode(number)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "W{}", self.number)
    }
}

/// Computes the next row of an elementary automaton on a ring.
///
/// The left neighbor of the first cell is the last cell,
/// and the right neighbor of the last cell is the first cell.
pub fn next_row(current: &[State], table: &RuleTable) -> Result<Row, Error> {
    validate_row(current, 0)?;
    let len = current.len();
    (0..len)
        .map(|i| {
            let left = current[wrap(i, -1, len)].0;
            let center = current[i].0;
            let right = current[wrap(i, 1, len)].0;
            let pattern = (left << 2 | center << 1 | right) as usize;
            table.get(pattern)
        })
        .collect()
}

impl Rule for RuleTable {
    type Gen = Row;

    fn evolve(&self, current: &Row) -> Result<Row, Error> {
        next_row(current, self)
    }
}
