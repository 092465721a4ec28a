use rcellular_lib::{
    rules::{next_grid, Life},
    Error, ErrorKind, Grid, State, ALIVE, DEAD,
};

fn grid(rows: &[&[u8]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|&c| State(c)).collect())
        .collect()
}

#[test]
fn blinker() -> Result<(), Box<dyn std::error::Error>> {
    let vertical = grid(&[
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0],
    ]);
    let horizontal = grid(&[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ]);
    let next = next_grid(&vertical)?;
    assert_eq!(next, horizontal);
    assert_eq!(next_grid(&next)?, vertical);
    Ok(())
}

#[test]
fn blinker_on_3x3_torus() -> Result<(), Box<dyn std::error::Error>> {
    // Every cell of a 3x3 torus is a neighbor of every other cell,
    // so each dead cell sees all three living ones.
    let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
    let full = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
    let empty = grid(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
    assert_eq!(next_grid(&vertical)?, full);
    assert_eq!(next_grid(&full)?, empty);
    assert_eq!(next_grid(&empty)?, empty);
    Ok(())
}

#[test]
fn block_is_still() -> Result<(), Box<dyn std::error::Error>> {
    let block = grid(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]);
    assert_eq!(next_grid(&block)?, block);
    Ok(())
}

#[test]
fn glider_moves_diagonally() -> Result<(), Box<dyn std::error::Error>> {
    let mut current = grid(&[
        &[0, 1, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0, 0, 0, 0],
        &[1, 1, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
    ]);
    let start = current.clone();
    for _ in 0..4 {
        current = next_grid(&current)?;
    }
    let shifted = grid(&[
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
    ]);
    assert_eq!(current, shifted);
    // After 8 * 4 generations it has crossed the whole torus.
    for _ in 0..28 {
        current = next_grid(&current)?;
    }
    assert_eq!(current, start);
    Ok(())
}

#[test]
fn wraps_across_edges() -> Result<(), Box<dyn std::error::Error>> {
    // A vertical blinker split between the last and the first rows,
    // in the first column.
    let split = grid(&[
        &[1, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0],
    ]);
    let horizontal = grid(&[
        &[1, 1, 0, 0, 1],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ]);
    assert_eq!(next_grid(&split)?, horizontal);
    assert_eq!(next_grid(&horizontal)?, split);
    Ok(())
}

#[test]
fn non_square_grid() -> Result<(), Box<dyn std::error::Error>> {
    let current = grid(&[
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
    ]);
    let next = next_grid(&current)?;
    assert_eq!(next.len(), 4);
    assert!(next.iter().all(|row| row.len() == 6));
    assert_eq!(next_grid(&next)?, current);
    Ok(())
}

#[test]
fn transition_table() {
    for n in 0..=8 {
        let survives = n == 2 || n == 3;
        assert_eq!(Life::transition(ALIVE, n), State::from(survives));
        assert_eq!(Life::transition(DEAD, n), State::from(n == 3));
    }
    assert_eq!(Life.to_string(), "B3/S23");
}

#[test]
fn invalid_grids() {
    assert_eq!(next_grid(&[]), Err(Error::EmptyGrid));
    assert_eq!(next_grid(&[vec![]]), Err(Error::EmptyRow));

    let ragged = grid(&[&[0, 1], &[0]]);
    let err = next_grid(&ragged).unwrap_err();
    assert_eq!(
        err,
        Error::NonRectangular {
            row: 1,
            len: 1,
            expected: 2
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let longer = grid(&[&[0, 1], &[0, 1, 0]]);
    assert!(matches!(
        next_grid(&longer),
        Err(Error::NonRectangular { row: 1, .. })
    ));

    let invalid = grid(&[&[0, 1], &[3, 0]]);
    assert_eq!(next_grid(&invalid), Err(Error::InvalidCell((0, 1), State(3))));
}

#[test]
fn no_hidden_state() -> Result<(), Box<dyn std::error::Error>> {
    let current = grid(&[&[1, 1, 0, 0], &[0, 1, 0, 1], &[1, 0, 0, 0]]);
    let snapshot = current.clone();
    assert_eq!(next_grid(&current)?, next_grid(&current)?);
    assert_eq!(current, snapshot);
    Ok(())
}
