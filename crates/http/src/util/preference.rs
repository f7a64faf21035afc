//! Preference list serialization.
//!
//! Renders a [`PreferenceList`] as the comma-separated `value[;q=quality]`
//! wire form. A quality of exactly 1.0 is the protocol default and is not
//! printed; anything outside `[0.0, 1.0]` makes the whole list unformattable
//! and the caller decides what to skip.

use std::fmt::Display;
use std::fmt::Write;

use uni_rest::data::PreferenceList;

use crate::error::FormatError;

/// Formats a preference list into its header value.
pub fn format<T: Display>(preferences: &PreferenceList<T>) -> Result<String, FormatError> {
    let mut value = String::new();

    for (index, preference) in preferences.iter().enumerate() {
        let quality = preference.quality();
        if !(0.0..=1.0).contains(&quality) || quality.is_nan() {
            return Err(FormatError::quality_out_of_range(preference.value(), quality));
        }

        if index > 0 {
            value.push_str(", ");
        }

        write!(value, "{}", preference.value()).map_err(FormatError::invalid_header_value)?;

        if quality < 1.0 {
            value.push_str(";q=");
            value.push_str(&format_quality(quality));
        }
    }

    Ok(value)
}

/// Renders a quality with up to three decimals, trailing zeros trimmed.
fn format_quality(quality: f32) -> String {
    let mut rendered = format!("{quality:.3}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use uni_rest::data::Preference;

    fn list(preferences: Vec<Preference<&'static str>>) -> PreferenceList<&'static str> {
        preferences.into()
    }

    #[test]
    fn default_quality_is_omitted() {
        let preferences = list(vec![Preference::new("text/html"), Preference::new("application/xml")]);
        assert_eq!(format(&preferences).unwrap(), "text/html, application/xml");
    }

    #[test]
    fn explicit_quality_is_printed_exactly() {
        let preferences = list(vec![
            Preference::new("text/html"),
            Preference::with_quality("application/xml", 0.9),
            Preference::with_quality("*/*", 0.5),
        ]);
        assert_eq!(format(&preferences).unwrap(), "text/html, application/xml;q=0.9, */*;q=0.5");
    }

    #[test]
    fn three_decimals_survive() {
        let preferences = list(vec![Preference::with_quality("en", 0.125)]);
        assert_eq!(format(&preferences).unwrap(), "en;q=0.125");
    }

    #[test]
    fn zero_quality_is_printed() {
        let preferences = list(vec![Preference::with_quality("gzip", 0.0)]);
        assert_eq!(format(&preferences).unwrap(), "gzip;q=0");
    }

    #[test]
    fn out_of_range_quality_is_an_error() {
        let preferences = list(vec![Preference::with_quality("en", 1.5)]);
        assert!(matches!(format(&preferences), Err(FormatError::QualityOutOfRange { .. })));
    }

    #[test]
    fn empty_list_formats_to_nothing() {
        assert_eq!(format(&PreferenceList::<&str>::new()).unwrap(), "");
    }
}
