use crate::error::{ProcessingError, Result};
use crate::utils::numbers::leading_number;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `D°M′S″H` with ASCII digits, matched anywhere in the input
    static ref DMS_PATTERN: Regex =
        Regex::new(r"([0-9]+)°([0-9]+)′([0-9.]+)″([NSEW])").expect("DMS pattern is valid");
}

/// Convert a DMS (Degrees°Minutes′Seconds″Hemisphere) string to decimal degrees
///
/// North and East are positive, South and West negative. No range check is
/// applied to the individual parts.
///
/// # Examples
/// ```
/// use concesiones_processor::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("17°3′53.19″N").unwrap();
/// assert!((decimal - 17.064775).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Option<f64> {
    try_dms_to_decimal(dms).ok()
}

/// Same as [`dms_to_decimal`] for an optional field value.
pub fn parse_dms(dms: Option<&str>) -> Option<f64> {
    dms.and_then(dms_to_decimal)
}

/// Strict variant of [`dms_to_decimal`] that reports why the text was rejected.
pub fn try_dms_to_decimal(dms: &str) -> Result<f64> {
    if dms.is_empty() {
        return Err(ProcessingError::InvalidCoordinate(
            "Empty DMS value".to_string(),
        ));
    }

    let captures = DMS_PATTERN.captures(dms).ok_or_else(|| {
        ProcessingError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected format: 'D°M′S″H'",
            dms
        ))
    })?;

    let degrees = parse_part(&captures[1], "degrees")?;
    let minutes = parse_part(&captures[2], "minutes")?;
    let seconds = parse_part(&captures[3], "seconds")?;

    let decimal_value = degrees + minutes / 60.0 + seconds / 3600.0;

    match &captures[4] {
        "S" | "W" => Ok(-decimal_value),
        _ => Ok(decimal_value),
    }
}

/// Reads the leading number of a captured part, so `1.2.3″` gives `1.2`
fn parse_part(text: &str, name: &str) -> Result<f64> {
    leading_number(text).ok_or_else(|| {
        ProcessingError::InvalidCoordinate(format!("Invalid {} value: '{}'", name, text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_to_decimal() {
        let lat = dms_to_decimal("17°3′53.19″N").unwrap();
        assert!((lat - (17.0 + 3.0 / 60.0 + 53.19 / 3600.0)).abs() < 1e-12);
        assert!((lat - 17.06477).abs() < 0.00001);

        let lng = dms_to_decimal("99°44′29.44″W").unwrap();
        assert!((lng - -99.74151).abs() < 0.00001);
    }

    #[test]
    fn test_hemisphere_signs() {
        assert_eq!(dms_to_decimal("10°30′0″N"), Some(10.5));
        assert_eq!(dms_to_decimal("10°30′0″S"), Some(-10.5));
        assert_eq!(dms_to_decimal("10°30′0″E"), Some(10.5));
        assert_eq!(dms_to_decimal("10°30′0″W"), Some(-10.5));
    }

    #[test]
    fn test_exact_formula() {
        let expected = 16.0 + 51.0 / 60.0 + 18.96 / 3600.0;
        assert_eq!(dms_to_decimal("16°51′18.96″N"), Some(expected));
        assert_eq!(dms_to_decimal("16°51′18.96″S"), Some(-expected));
    }

    #[test]
    fn test_invalid_dms_format() {
        assert_eq!(dms_to_decimal(""), None);
        assert_eq!(dms_to_decimal("17:03:53"), None);
        assert_eq!(dms_to_decimal("17°3'53.19\"N"), None); // ASCII quotes
        assert_eq!(dms_to_decimal("17°3′53.19″X"), None);
        assert_eq!(dms_to_decimal("17°3′...″N"), None);
        assert_eq!(parse_dms(None), None);
    }

    #[test]
    fn test_no_range_validation() {
        // Out-of-range parts are accepted as long as the pattern matches
        assert_eq!(dms_to_decimal("200°90′0″E"), Some(201.5));
    }

    #[test]
    fn test_unanchored_match() {
        assert_eq!(dms_to_decimal("Lat: 10°0′0″N aprox."), Some(10.0));
        // A leading minus sign is not part of the pattern
        assert_eq!(dms_to_decimal("-10°0′0″N"), Some(10.0));
    }

    #[test]
    fn test_seconds_read_leading_number() {
        let expected = 17.0 + 3.0 / 60.0 + 1.2 / 3600.0;
        assert_eq!(dms_to_decimal("17°3′1.2.3″N"), Some(expected));
        assert_eq!(dms_to_decimal("17°3′1.″S"), Some(-(17.0 + 3.0 / 60.0 + 1.0 / 3600.0)));
    }

    #[test]
    fn test_only_ascii_digits_match() {
        assert_eq!(dms_to_decimal("١°0′0″N 17°0′0″N"), Some(17.0));
        assert_eq!(dms_to_decimal("١٧°٠′٠″N"), None);
    }

    #[test]
    fn test_try_dms_reports_reason() {
        assert!(matches!(
            try_dms_to_decimal("abc"),
            Err(ProcessingError::InvalidCoordinate(_))
        ));
        assert!(try_dms_to_decimal("").is_err());
        assert!(try_dms_to_decimal("1°2′3″N").is_ok());
        assert!(matches!(
            try_dms_to_decimal("1°2′.″N"),
            Err(ProcessingError::InvalidCoordinate(_))
        ));
    }
}
