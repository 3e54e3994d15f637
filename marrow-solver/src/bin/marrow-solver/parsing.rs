//! Value parsers for the command-line arguments which are not plain numbers.
use marrow_solver::Dimensions;
use marrow_solver::SudokuInstance;
use marrow_solver::SUDOKU_SIZE;

/// Parses `WIDTHxHEIGHT`, for instance `6x7`.
pub(crate) fn parse_dimensions(input: &str) -> Result<Dimensions, String> {
    let (width, height) = input
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{input}`"))?;

    let parse_side = |side: &str| {
        side.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid side `{side}` in `{input}`: {e}"))
    };

    Ok(Dimensions::new(parse_side(width)?, parse_side(height)?))
}

/// Parses a sudoku grid given row by row as 81 cells: the digits `1` to `9` are clues, `.` and `0`
/// are empty cells. Whitespace is ignored.
pub(crate) fn parse_sudoku_grid(input: &str) -> Result<Vec<Vec<Option<u8>>>, String> {
    let cells = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' | '0' => Ok(None),
            '1'..='9' => Ok(Some(c as u8 - b'0')),
            _ => Err(format!("unexpected character `{c}` in the grid")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if cells.len() != SUDOKU_SIZE * SUDOKU_SIZE {
        return Err(format!(
            "expected {} cells, got {}",
            SUDOKU_SIZE * SUDOKU_SIZE,
            cells.len()
        ));
    }

    Ok(cells
        .chunks(SUDOKU_SIZE)
        .map(|row| row.to_vec())
        .collect())
}

/// Parses a grid with [`parse_sudoku_grid`] and checks its clues.
pub(crate) fn parse_sudoku(input: &str) -> Result<SudokuInstance, String> {
    SudokuInstance::new(parse_sudoku_grid(input)?).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_width_by_height() {
        assert_eq!(Ok(Dimensions::new(6, 7)), parse_dimensions("6x7"));
        assert_eq!(Ok(Dimensions::new(65, 47)), parse_dimensions("65X47"));
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        assert!(parse_dimensions("6").is_err());
        assert!(parse_dimensions("6xseven").is_err());
    }

    #[test]
    fn grid_cells_are_read_row_by_row() {
        let input = format!("53..7....{}", ".".repeat(72));
        let grid = parse_sudoku_grid(&input).unwrap();

        assert_eq!(9, grid.len());
        assert_eq!(
            vec![Some(5), Some(3), None, None, Some(7), None, None, None, None],
            grid[0]
        );
        assert!(grid[1..].iter().flatten().all(Option::is_none));
    }

    #[test]
    fn grid_whitespace_is_ignored() {
        let input = "000000000\n".repeat(9);
        let grid = parse_sudoku_grid(&input).unwrap();

        assert!(grid.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn short_grids_are_rejected() {
        assert!(parse_sudoku_grid("123").is_err());
    }

    #[test]
    fn parsed_grids_keep_their_clues() {
        let input = format!("{}9", ".".repeat(80));
        let instance = parse_sudoku(&input).unwrap();

        assert_eq!(Some(9), instance.clue(8, 8));
        assert_eq!(1, instance.num_clues());
    }

    #[test]
    fn letters_are_rejected_in_grids() {
        let input = format!("a{}", ".".repeat(80));
        assert!(parse_sudoku_grid(&input).is_err());
    }
}
