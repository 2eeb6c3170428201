//! Tests for the digit-band repair pass

use bandfix::{repair, scan, Grid, RepairError, BAND_HEIGHT};
use rstest::rstest;

#[rstest]
#[case::fills_digit_columns("1 2\n   \n   \n4 5\n", "1 2\n0 0\n0 0\n4 5\n")]
#[case::blank_column_untouched("1 \n1 \n1 \n1 \n", "1 \n1 \n1 \n1 \n")]
#[case::already_clean("123\n456\n789\n135\n", "123\n456\n789\n135\n")]
#[case::all_blank_band("   \n   \n   \n   \n", "   \n   \n   \n   \n")]
fn given_band_when_repairing_then_content_matches(#[case] input: &str, #[case] expected: &str) {
    // Arrange
    let mut grid = Grid::parse(input);

    // Act
    repair(&mut grid).unwrap();

    // Assert
    assert_eq!(grid.to_content(), expected);
}

#[test]
fn given_digit_columns_when_repairing_then_no_blanks_remain_in_band() {
    // Arrange
    let mut grid = Grid::parse("9 8 7\n 1 6 \n  2  \n3 4 5\n");

    // Act
    let report = repair(&mut grid).unwrap();

    // Assert - every column carries a digit, so every band blank was filled
    assert_eq!(report.digit_columns, 5);
    for row in grid.rows().iter().take(BAND_HEIGHT) {
        assert!(!row.contains(&' '), "band row still has blanks: {:?}", row);
    }
}

#[test]
fn given_rows_beyond_band_when_repairing_then_they_are_untouched() {
    // Arrange
    let mut grid = Grid::parse("1 2\n   \n   \n4 5\n+ *\n   \n");

    // Act
    repair(&mut grid).unwrap();

    // Assert
    let rows = grid.rows();
    assert_eq!(rows[4], vec!['+', ' ', '*', '\n']);
    assert_eq!(rows[5], vec![' ', ' ', ' ', '\n']);
}

#[test]
fn given_digit_only_below_band_when_repairing_then_column_stays_blank() {
    // Arrange - the '7' in row 4 must not make column 1 a digit column
    let mut grid = Grid::parse("1  \n   \n   \n2  \n 7 \n");

    // Act
    repair(&mut grid).unwrap();

    // Assert
    assert_eq!(grid.to_content(), "1  \n0  \n0  \n2  \n 7 \n");
}

#[test]
fn given_repaired_grid_when_repairing_again_then_result_is_identical() {
    // Arrange
    let mut grid = Grid::parse("1 2\n   \n   \n4 5\n");
    repair(&mut grid).unwrap();
    let first = grid.to_content();

    // Act
    let mut again = Grid::parse(&first);
    let report = repair(&mut again).unwrap();

    // Assert
    assert_eq!(again.to_content(), first);
    assert!(report.is_clean());
}

#[test]
fn given_grid_when_scanning_then_nothing_is_mutated() {
    // Arrange
    let content = "1 2\n   \n   \n4 5\n";
    let grid = Grid::parse(content);

    // Act
    let report = scan(&grid).unwrap();

    // Assert
    assert_eq!(grid.to_content(), content);
    assert_eq!(report.digit_columns, 2);
    assert_eq!(report.blank_cells, 4);
    assert_eq!(report.dirty_columns, vec![0, 2]);
}

#[test]
fn given_ragged_band_when_repairing_then_error() {
    // Arrange - row 3 misses the trailing newline, so it is narrower than row 0
    let mut grid = Grid::parse("1 2\n   \n   \n4 5");

    // Act
    let err = repair(&mut grid).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        RepairError::RaggedBand {
            row: 3,
            len: 3,
            expected: 4
        }
    ));
}

#[test]
fn given_fewer_than_four_rows_when_scanning_then_error() {
    // Arrange
    let grid = Grid::parse("1 2\n4 5\n");

    // Act
    let err = scan(&grid).unwrap_err();

    // Assert
    assert!(matches!(err, RepairError::BandTooShort { rows: 2, .. }));
}
