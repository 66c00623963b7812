//! Small numeric helpers.

/// The larger of two values; the first one wins a tie.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

/// "FizzBuzz" for multiples of 15, "Fizz" for 3, "Buzz" for 5, otherwise the
/// number itself.
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn calculate_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max() {
        assert_eq!(max(2, 1), 2);
        assert_eq!(max(1, 2), 2);
        assert_eq!(max(1, 1), 1);
        assert_eq!(max(1.5, -3.0), 1.5);
    }

    #[test]
    fn test_fizz_buzz() {
        assert_eq!(fizz_buzz(15), "FizzBuzz");
        assert_eq!(fizz_buzz(6), "Fizz");
        assert_eq!(fizz_buzz(10), "Buzz");
        assert_eq!(fizz_buzz(4), "4");
    }

    #[test]
    fn test_calculate_average() {
        assert_eq!(calculate_average(&[]), None);
        assert_eq!(calculate_average(&[1.0]), Some(1.0));
        assert_eq!(calculate_average(&[1.0, 2.0]), Some(1.5));
        assert_eq!(calculate_average(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}
