/// Quick-start requests, same set the original UI offered as buttons.
pub const QUICK_EXAMPLES: [&str; 5] = [
    "Simple calculator",
    "Todo list with categories",
    "Countdown timer",
    "Note-taking app",
    "Expense tracker",
];

/// Look up a quick example by its 1-based number.
pub fn by_number(n: usize) -> Option<&'static str> {
    if n == 0 {
        return None;
    }
    QUICK_EXAMPLES.get(n - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(by_number(1), Some("Simple calculator"));
        assert_eq!(by_number(5), Some("Expense tracker"));
        assert_eq!(by_number(0), None);
        assert_eq!(by_number(6), None);
    }
}
