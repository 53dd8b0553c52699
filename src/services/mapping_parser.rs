//! Profile-image mapping CSV parser.
//!
//! Columns: `id, displayName, userPrincipalName, imageType, imagePath`.
//! Parsing is total: short or malformed rows produce empty fields, never errors.

use crate::models::UserRecord;

pub const NO_PIC: &str = "no_pic";

const COLUMN_COUNT: usize = 5;

/// Splits one CSV line into raw field values.
///
/// A field opening with `"` is quoted only if its closing `"` is directly
/// followed by `,` or the end of the line; there is no escape handling for
/// embedded quotes. Any other field runs to the next comma and loses one
/// leading and one trailing `"`. A line ending in `,` yields a trailing
/// empty field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(COLUMN_COUNT);
    let mut rest = Some(line);

    while let Some(input) = rest {
        let (value, remainder) = next_field(input);
        fields.push(value);
        rest = remainder;
    }

    fields
}

/// Returns the next field and the input after its separator (`None` at end of line).
fn next_field(input: &str) -> (String, Option<&str>) {
    if let Some(quoted) = input.strip_prefix('"') {
        if let Some(close) = quoted.find('"') {
            let value = &quoted[..close];
            let after = &quoted[close + 1..];
            if after.is_empty() {
                return (value.to_string(), None);
            }
            if let Some(remainder) = after.strip_prefix(',') {
                return (value.to_string(), Some(remainder));
            }
        }
    }

    match input.find(',') {
        Some(idx) => (strip_quotes(&input[..idx]), Some(&input[idx + 1..])),
        None => (strip_quotes(input), None),
    }
}

fn strip_quotes(raw: &str) -> String {
    let raw = raw.strip_prefix('"').unwrap_or(raw);
    raw.strip_suffix('"').unwrap_or(raw).to_string()
}

/// Parses the whole mapping document. The first line is a header and is skipped
/// without validation; every following line yields exactly one record, in order.
pub fn parse_mapping_csv(csv: &str, profile_images_url: &str) -> Vec<UserRecord> {
    csv.trim()
        .split('\n')
        .skip(1)
        .map(|line| parse_row(line, profile_images_url))
        .collect()
}

fn parse_row(line: &str, profile_images_url: &str) -> UserRecord {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = tokenize_line(line).into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let id = next();
    let display_name = next();
    let user_principal_name = next();
    let image_type = next();
    let image_path = next();

    let photo = derive_photo(&image_type, &image_path, profile_images_url);

    UserRecord {
        id,
        display_name,
        user_principal_name,
        image_type,
        image_path,
        has_photo: photo.is_some(),
        photo,
        classification: None,
        confidence: None,
    }
}

/// Photo URL for a row, or `None` for `no_pic` rows and rows without a path.
pub fn derive_photo(image_type: &str, image_path: &str, profile_images_url: &str) -> Option<String> {
    if image_type == NO_PIC || image_path.is_empty() {
        return None;
    }

    Some(format!("{}/{}", profile_images_url, last_path_segment(image_path)))
}

/// Second `/`-separated segment of a `<container>/<filename>` path.
///
/// Paths nesting deeper (or not at all) are not special-cased: `a/b/c.jpg`
/// yields `b` and `c.jpg` yields an empty segment.
pub fn last_path_segment(image_path: &str) -> &str {
    image_path.split('/').nth(1).unwrap_or("")
}

/// True when a non-empty path does not have the expected two segments.
pub fn has_unexpected_depth(image_path: &str) -> bool {
    !image_path.is_empty() && image_path.split('/').count() != 2
}
