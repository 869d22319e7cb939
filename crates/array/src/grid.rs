//! Evenly spaced value grids.

/// Returns `n` evenly spaced values from `start` to `stop` inclusive.
///
/// The final value is set to `stop` exactly rather than accumulated, so
/// bin-edge sequences close on their stated upper bound. Returns an empty
/// vector for `n == 0` and `[start]` for `n == 1`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn single() {
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn endpoints_exact() {
        let edges = linspace(0.0, 1.0 + 1e-8, 6);
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[5], 1.0 + 1e-8);
    }

    #[test]
    fn strictly_increasing() {
        let edges = linspace(0.0, 1.0, 11);
        for pair in edges.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn even_spacing() {
        let values = linspace(0.0, 1.0, 5);
        for (i, v) in values.iter().enumerate() {
            assert!((v - 0.25 * i as f64).abs() < 1e-12);
        }
    }
}
