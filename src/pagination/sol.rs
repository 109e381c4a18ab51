//! Sol navigation flags over the range `[1, max_sol]`.

use serde::Serialize;

/// Whether neighbouring sols exist around `sol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolBounds {
    pub sol: u32,
    pub has_earlier_sol: bool,
    pub has_later_sol: bool,
}

impl SolBounds {
    pub fn new(sol: u32, max_sol: u32) -> Self {
        Self {
            sol,
            has_earlier_sol: sol > 1,
            has_later_sol: sol < max_sol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_edge() {
        let bounds = SolBounds::new(1, 10);
        assert!(!bounds.has_earlier_sol);
        assert!(bounds.has_later_sol);
    }

    #[test]
    fn test_max_edge() {
        let bounds = SolBounds::new(10, 10);
        assert!(bounds.has_earlier_sol);
        assert!(!bounds.has_later_sol);
    }

    #[test]
    fn test_sol_zero() {
        let bounds = SolBounds::new(0, 10);
        assert!(!bounds.has_earlier_sol);
        assert!(bounds.has_later_sol);
    }

    #[test]
    fn test_serializes_as_header() {
        let json = serde_json::to_value(SolBounds::new(5, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sol": 5, "hasEarlierSol": true, "hasLaterSol": true })
        );
    }
}
