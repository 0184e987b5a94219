pub mod result_ext;

use memchr::memmem;

/// Everything after the first `delimiter`, or the whole string if it is missing
pub fn substring_after<'a>(input: &'a str, delimiter: &str) -> &'a str {
    substring_after_or(input, delimiter, input)
}

/// Everything after the first `delimiter`, or `missing` if it is not there
pub fn substring_after_or<'a>(input: &'a str, delimiter: &str, missing: &'a str) -> &'a str {
    match memmem::find(input.as_bytes(), delimiter.as_bytes()) {
        Some(index) => &input[index + delimiter.len()..],
        None => missing,
    }
}

/// Everything before the first `delimiter`, or the whole string if it is missing
pub fn substring_before<'a>(input: &'a str, delimiter: &str) -> &'a str {
    match memmem::find(input.as_bytes(), delimiter.as_bytes()) {
        Some(index) => &input[..index],
        None => input,
    }
}

/// Text between `start` and the next `end`, see [`substring_after`] and [`substring_before`]
pub fn substring_between<'a>(input: &'a str, start: &str, end: &str) -> &'a str {
    substring_before(substring_after(input, start), end)
}
