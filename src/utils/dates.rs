use crate::utils::constants::TWO_DIGIT_YEAR_PIVOT;

/// Extract the year of a `DD/MM/YY` or `DD/MM/YYYY` date
///
/// Two-digit years above [`TWO_DIGIT_YEAR_PIVOT`] are read as 19xx, the rest
/// as 20xx. This is an approximation: a date written `01/01/49` is assumed
/// to be 2049.
pub fn extract_year(date: Option<&str>) -> Option<i32> {
    let date = date?.trim();
    if date.is_empty() {
        return None;
    }

    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let year_text = parts[2].trim();
    let year = year_text.parse::<i32>().ok()?;

    if year_text.len() == 2 {
        if year > TWO_DIGIT_YEAR_PIVOT {
            Some(1900 + year)
        } else {
            Some(2000 + year)
        }
    } else {
        Some(year)
    }
}
