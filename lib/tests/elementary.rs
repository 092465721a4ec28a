use rcellular_lib::{
    rules::{decimal_to_bits, decode, next_row, RuleTable},
    Error, ErrorKind, State, ALIVE, DEAD,
};

fn row(cells: &[u8]) -> Vec<State> {
    cells.iter().map(|&c| State(c)).collect()
}

#[test]
fn known_rules() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode(30)?.msb_first().to_vec(), row(&[0, 0, 0, 1, 1, 1, 1, 0]));
    assert_eq!(decode(90)?.msb_first().to_vec(), row(&[0, 1, 0, 1, 1, 0, 1, 0]));
    assert_eq!(decode(0)?.msb_first(), [DEAD; 8]);
    assert_eq!(decode(255)?.msb_first(), [ALIVE; 8]);
    Ok(())
}

#[test]
fn all_rules_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    for number in 0..=255u32 {
        let table = decode(number)?;
        let bits = table.msb_first();
        assert!(bits.iter().all(|s| s.is_valid()));
        let encoded = bits.iter().fold(0u32, |acc, s| acc << 1 | s.0 as u32);
        assert_eq!(encoded, number);
        assert_eq!(table.number() as u32, number);
        assert_eq!(table, RuleTable::new(number as u8));
    }
    Ok(())
}

#[test]
fn bit_n_governs_pattern_n() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(30)?;
    for pattern in 0..8 {
        assert_eq!(table.get(pattern)?, State((30 >> pattern) & 1));
    }
    Ok(())
}

#[test]
fn pattern_out_of_range() {
    let table = RuleTable::new(110);
    let err = table.get(8).unwrap_err();
    assert_eq!(err, Error::PatternOutOfRange(8));
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn other_bit_widths() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decimal_to_bits(5, 4)?, row(&[0, 1, 0, 1]));
    assert_eq!(decimal_to_bits(1, 10)?, row(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
    assert_eq!(decimal_to_bits(30, 4), Err(Error::InvalidRuleNumber(30)));
    assert_eq!(decimal_to_bits(30, 0), Err(Error::NonPositiveBits));
    Ok(())
}

#[test]
fn invalid_rule_number() {
    let err = decode(256).unwrap_err();
    assert_eq!(err, Error::InvalidRuleNumber(256));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(decode(300).is_err());
}

#[test]
fn parse_rule_strings() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!("30".parse::<RuleTable>()?.number(), 30);
    assert_eq!("W110".parse::<RuleTable>()?.number(), 110);
    assert_eq!("Rule 90".parse::<RuleTable>()?.number(), 90);
    assert_eq!(RuleTable::new(30).to_string(), "W30");
    assert!(matches!(
        "B3/S23".parse::<RuleTable>(),
        Err(Error::ParseRuleError(_))
    ));
    assert_eq!(
        "W256".parse::<RuleTable>(),
        Err(Error::InvalidRuleNumber(256))
    );
    Ok(())
}

#[test]
fn rule_30_from_single_cell() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(30)?;
    let next = next_row(&row(&[0, 0, 0, 1, 0, 0, 0]), &table)?;
    assert_eq!(next, row(&[0, 0, 1, 1, 1, 0, 0]));
    let next = next_row(&next, &table)?;
    assert_eq!(next, row(&[0, 1, 1, 0, 0, 1, 0]));
    Ok(())
}

#[test]
fn rule_90_from_single_cell() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(90)?;
    let next = next_row(&row(&[0, 0, 0, 1, 0, 0, 0]), &table)?;
    assert_eq!(next, row(&[0, 0, 1, 0, 1, 0, 0]));
    Ok(())
}

#[test]
fn ring_boundary() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(30)?;
    // The left neighbor of cell 0 is the last cell: neighborhood 100.
    assert_eq!(next_row(&row(&[0, 0, 0, 0, 1]), &table)?, row(&[1, 0, 0, 1, 1]));
    // The right neighbor of the last cell is cell 0: neighborhood 001.
    assert_eq!(next_row(&row(&[1, 0, 0, 0, 0]), &table)?, row(&[1, 1, 0, 0, 1]));
    // A single cell is its own left and right neighbor.
    assert_eq!(next_row(&row(&[1]), &decode(128)?)?, row(&[1]));
    assert_eq!(next_row(&row(&[0]), &decode(1)?)?, row(&[1]));
    Ok(())
}

#[test]
fn length_preserving() -> Result<(), Box<dyn std::error::Error>> {
    for len in 1..20 {
        let current: Vec<State> = (0..len).map(|i| State((i % 3 == 0) as u8)).collect();
        for number in [0, 30, 90, 110, 184, 255] {
            assert_eq!(next_row(&current, &decode(number)?)?.len(), len);
        }
    }
    Ok(())
}

#[test]
fn no_hidden_state() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(110)?;
    let current = row(&[0, 1, 1, 0, 1, 0, 0, 1]);
    let first = next_row(&current, &table)?;
    let second = next_row(&current, &table)?;
    assert_eq!(first, second);
    assert_eq!(current, row(&[0, 1, 1, 0, 1, 0, 0, 1]));
    Ok(())
}

#[test]
fn invalid_rows() -> Result<(), Box<dyn std::error::Error>> {
    let table = decode(30)?;
    assert_eq!(next_row(&[], &table), Err(Error::EmptyRow));
    let err = next_row(&row(&[0, 1, 2]), &table).unwrap_err();
    assert_eq!(err, Error::InvalidCell((2, 0), State(2)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    Ok(())
}
