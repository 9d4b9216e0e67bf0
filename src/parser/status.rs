//! Fixed code-to-label tables for the list endpoint's status fields.
//!
//! A code outside its table is a hard error: the site adding a status
//! is schema drift, not something to paper over with a default label.

use super::error::ParseError;

pub fn anime_watch_status(code: i64) -> Result<&'static str, ParseError> {
    match code {
        1 => Ok("Currently Watching"),
        2 => Ok("Completed"),
        3 => Ok("On Hold"),
        4 => Ok("Dropped"),
        6 => Ok("Plan to Watch"),
        _ => Err(ParseError::unknown_code("anime watch status", code)),
    }
}

pub fn manga_read_status(code: i64) -> Result<&'static str, ParseError> {
    match code {
        1 => Ok("Currently Reading"),
        2 => Ok("Completed"),
        3 => Ok("On Hold"),
        4 => Ok("Dropped"),
        6 => Ok("Plan to Read"),
        _ => Err(ParseError::unknown_code("manga read status", code)),
    }
}

pub fn anime_airing_status(code: i64) -> Result<&'static str, ParseError> {
    match code {
        1 => Ok("Currently Airing"),
        2 => Ok("Finished Airing"),
        3 => Ok("Not Yet Aired"),
        _ => Err(ParseError::unknown_code("anime airing status", code)),
    }
}

pub fn manga_publishing_status(code: i64) -> Result<&'static str, ParseError> {
    match code {
        1 => Ok("Currently Publishing"),
        2 => Ok("Finished Publishing"),
        3 => Ok("Not Yet Published"),
        4 => Ok("On Hiatus"),
        5 => Ok("Discontinued"),
        _ => Err(ParseError::unknown_code("manga publishing status", code)),
    }
}
