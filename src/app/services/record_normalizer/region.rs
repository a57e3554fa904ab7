//! Region code canonicalization

use crate::constants::FALLBACK_REGION_CODE;

/// First two characters of the value, uppercased; `None` when blank
pub fn canonical_region(raw: &str) -> Option<String> {
    let code: String = raw.trim().chars().take(2).collect::<String>().to_uppercase();
    (!code.is_empty()).then_some(code)
}

/// Canonical region code, `US` when the value is blank
pub fn to_region_code(raw: &str) -> String {
    canonical_region(raw).unwrap_or_else(|| FALLBACK_REGION_CODE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_region_code() {
        assert_eq!(to_region_code("california"), "CA");
        assert_eq!(to_region_code("tx"), "TX");
        assert_eq!(to_region_code(" NY "), "NY");
        assert_eq!(to_region_code("W"), "W");
        assert_eq!(to_region_code(""), "US");
        assert_eq!(to_region_code("   "), "US");
    }

    #[test]
    fn test_canonical_region_keeps_blank_distinct() {
        assert_eq!(canonical_region(""), None);
        assert_eq!(canonical_region("Québec"), Some("QU".to_string()));
    }
}
