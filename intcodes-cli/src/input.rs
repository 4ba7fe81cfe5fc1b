//! Parsing of the `encode` and `decode` arguments.

use intcodes::BitString;

use crate::error::Error;

/// Parses a comma separated list of unsigned integers. Whitespace around
/// items and empty items are ignored, so `"1, 2,,3 "` is `[1, 2, 3]`.
pub fn parse_numbers(text: &str) -> Result<Vec<u64>, Error> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>()
                .map_err(|_| Error::InvalidNumber(item.to_string()))
        })
        .collect()
}

/// Parses a string of `0` and `1` characters. Whitespace may be used to
/// group the bits and is ignored.
pub fn parse_bits(text: &str) -> Result<BitString, Error> {
    let compact: String = text.split_whitespace().collect();
    Ok(compact.parse()?)
}
