/// For each actual finishing slot, the index at which that competitor
/// appears in the guess, or `None` when the guess never names them.
///
/// A competitor listed more than once in the guess resolves to its first
/// occurrence; the scan is a plain forward search, so absence is an
/// ordinary outcome rather than an error. Neither input is assumed to be
/// duplicate-free.
pub fn map_positions<C: PartialEq>(actual: &[C], guess: &[C]) -> Vec<Option<usize>> {
    actual
        .iter()
        .map(|competitor| guess.iter().position(|guessed| guessed == competitor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_positions_identical_orders() {
        let order = ["A", "B", "C"];
        assert_eq!(
            map_positions(&order, &order),
            vec![Some(0), Some(1), Some(2)]
        );
    }

    #[test]
    fn test_map_positions_shuffled_guess() {
        let actual = ["A", "B", "C"];
        let guess = ["B", "A", "C"];
        assert_eq!(
            map_positions(&actual, &guess),
            vec![Some(1), Some(0), Some(2)]
        );
    }

    #[test]
    fn test_map_positions_absent_competitor() {
        let actual = ["A", "B"];
        let guess = ["B"];
        assert_eq!(map_positions(&actual, &guess), vec![None, Some(0)]);
    }

    #[test]
    fn test_map_positions_empty_guess() {
        let actual = ["A", "B"];
        assert_eq!(map_positions::<&str>(&actual, &[]), vec![None, None]);
    }

    #[test]
    fn test_map_positions_duplicate_guess_first_occurrence_wins() {
        let actual = ["A"];
        let guess = ["B", "C", "A", "D", "A"];
        assert_eq!(map_positions(&actual, &guess), vec![Some(2)]);
    }

    #[test]
    fn test_map_positions_works_with_integer_ids() {
        let actual = [44_u32, 33, 16];
        let guess = [33_u32, 44, 16];
        assert_eq!(
            map_positions(&actual, &guess),
            vec![Some(1), Some(0), Some(2)]
        );
    }
}
