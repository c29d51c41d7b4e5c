//! Upper Confidence Bound for Trees.
//!
//! UCT(child) = score / visits + C * sqrt(ln(parent_visits) / visits)
//!
//! A child that has never been visited scores `f64::MAX`, so every child of a
//! node is tried once before any of them is tried twice.

/// Canonical exploration constant (about sqrt(2)).
pub const EXPLORATION: f64 = 1.41;

/// UCT value of a child given its parent's visit count.
#[inline]
pub fn uct_value(parent_visits: u32, child_score: i64, child_visits: u32, exploration: f64) -> f64 {
    if child_visits == 0 {
        return f64::MAX;
    }

    let visits = child_visits as f64;
    let exploitation = child_score as f64 / visits;
    // ln(0) would make the bound NaN
    let exploration_term = if parent_visits == 0 {
        0.0
    } else {
        exploration * ((parent_visits as f64).ln() / visits).sqrt()
    };

    exploitation + exploration_term
}

/// Return the item with the greatest key, keeping the first one on ties.
///
/// `Iterator::max_by` keeps the last maximum, which would make tie-breaks
/// depend on the opposite end of the child list.
pub(crate) fn first_max<T, K, I>(items: I) -> Option<T>
where
    I: IntoIterator<Item = (T, K)>,
    K: PartialOrd,
{
    let mut best: Option<(T, K)> = None;
    for (item, key) in items {
        let replace = match &best {
            Some((_, best_key)) => key > *best_key,
            None => true,
        };
        if replace {
            best = Some((item, key));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_child_is_maximal() {
        assert_eq!(uct_value(100, 0, 0, EXPLORATION), f64::MAX);
        assert_eq!(uct_value(0, 0, 0, EXPLORATION), f64::MAX);
    }

    #[test]
    fn test_uct_formula() {
        // 5 / 10 + 1.41 * sqrt(ln(100) / 10)
        let expected = 0.5 + 1.41 * ((100f64).ln() / 10.0).sqrt();
        let value = uct_value(100, 5, 10, EXPLORATION);
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_parent_visit_has_no_exploration_bonus() {
        // ln(1) == 0
        let value = uct_value(1, 1, 1, EXPLORATION);
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_parent_visits_is_not_nan() {
        let value = uct_value(0, 3, 2, EXPLORATION);
        assert!(!value.is_nan());
        assert!((value - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_forced_loss_score_ranks_last() {
        let penalized = uct_value(50, i64::from(i32::MIN), 3, EXPLORATION);
        let losing = uct_value(50, 0, 3, EXPLORATION);
        assert!(penalized < losing);
    }

    #[test]
    fn test_first_max_keeps_first_on_ties() {
        let items = vec![("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0)];
        assert_eq!(first_max(items), Some("b"));

        let all_equal = vec![(0, f64::MAX), (1, f64::MAX), (2, f64::MAX)];
        assert_eq!(first_max(all_equal), Some(0));

        let empty: Vec<(u8, i64)> = Vec::new();
        assert_eq!(first_max(empty), None);
    }
}
