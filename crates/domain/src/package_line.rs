// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Package line decoding.
//!
//! Package contents are stored as display strings of the form
//! `"<count>x <itemName>"`. A line that does not follow that shape is
//! never an error: it degrades to a count of one with the whole trimmed
//! line as the item name.

/// A decoded package line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLine {
    /// The decoded quantity.
    pub count: u32,
    /// The trimmed item name.
    pub name: String,
}

/// Decodes one package line.
///
/// The line is trimmed, then matched against: leading ASCII digits, a
/// literal lowercase `x`, at least one whitespace character, and a
/// non-empty remainder. On a match the digits are the count and the
/// trimmed remainder is the name. Otherwise the count is 1 and the name is
/// the trimmed line. Digit runs too large for `u32` do not match.
///
/// # Arguments
///
/// * `line` - One entry of `PackageDefinition::items`
#[must_use]
pub fn parse_package_line(line: &str) -> PackageLine {
    let trimmed: &str = line.trim();

    match split_quantity(trimmed) {
        Some((count, name)) => PackageLine {
            count,
            name: name.to_string(),
        },
        None => PackageLine {
            count: 1,
            name: trimmed.to_string(),
        },
    }
}

fn split_quantity(line: &str) -> Option<(u32, &str)> {
    let digits_end: usize = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let count: u32 = line[..digits_end].parse().ok()?;
    let rest: &str = line[digits_end..].strip_prefix('x')?;

    // At least one whitespace character must separate the marker from the name.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name: &str = rest.trim();
    if name.is_empty() {
        return None;
    }

    Some((count, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: u32, name: &str) -> PackageLine {
        PackageLine {
            count,
            name: String::from(name),
        }
    }

    #[test]
    fn test_quantity_prefix_is_decoded() {
        assert_eq!(parse_package_line("2x Microphone"), line(2, "Microphone"));
        assert_eq!(parse_package_line("12x  LED Par"), line(12, "LED Par"));
    }

    #[test]
    fn test_bare_name_counts_as_one() {
        assert_eq!(parse_package_line("Projector"), line(1, "Projector"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_package_line("  3x Speaker  "), line(3, "Speaker"));
        assert_eq!(parse_package_line("  Screen "), line(1, "Screen"));
    }

    #[test]
    fn test_missing_whitespace_after_marker_falls_back() {
        assert_eq!(parse_package_line("2xMicrophone"), line(1, "2xMicrophone"));
    }

    #[test]
    fn test_uppercase_marker_falls_back() {
        assert_eq!(parse_package_line("2X Microphone"), line(1, "2X Microphone"));
    }

    #[test]
    fn test_marker_without_name_falls_back() {
        assert_eq!(parse_package_line("4x"), line(1, "4x"));
        assert_eq!(parse_package_line("4x   "), line(1, "4x"));
    }

    #[test]
    fn test_overflowing_count_falls_back() {
        assert_eq!(
            parse_package_line("99999999999x Cable"),
            line(1, "99999999999x Cable")
        );
    }

    #[test]
    fn test_zero_count_is_decoded_verbatim() {
        assert_eq!(parse_package_line("0x Cable"), line(0, "Cable"));
    }

    #[test]
    fn test_empty_line_yields_empty_name() {
        assert_eq!(parse_package_line("   "), line(1, ""));
    }
}
