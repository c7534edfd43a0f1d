/*
Reads and writes colorings as a single line "[c0, c1, ..., c_{n-1}]".
*/
use std::fs;
use std::path::Path;

use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, multispace0, space0};
use nom::combinator::map_res;
use nom::multi::separated_list0;
use nom::sequence::{delimited, terminated, tuple};

use crate::color::Coloring;
use crate::error::{ColoringError, Result};

/** writes a string encoding the coloring (use this to export the solution) */
pub fn coloring_to_string(coloring:&[usize]) -> String {
    let values:Vec<String> = coloring.iter().map(|c| c.to_string()).collect();
    format!("[{}]\n", values.join(", "))
}

/** writes a coloring into a file. */
pub fn write_coloring<P:AsRef<Path>>(filename:P, coloring:&[usize]) -> Result<()> {
    fs::write(filename, coloring_to_string(coloring))?;
    Ok(())
}

/// reads an unsigned integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(s)
}

/// reads "[c0, c1, ...]"
fn read_list(s:&str) -> IResult<&str, Vec<usize>> {
    delimited(
        tag("["),
        separated_list0(tuple((space0, tag(","), space0)), integer),
        terminated(tag("]"), multispace0)
    )(s)
}

/// parses a coloring written by write_coloring
pub fn parse_coloring(s:&str) -> Result<Coloring> {
    let trimmed = s.trim_start();
    match read_list(trimmed) {
        Ok(("", coloring)) => Ok(coloring),
        Ok((rest, _)) | Err(nom::Err::Error(nom::error::Error { input: rest, .. }))
        | Err(nom::Err::Failure(nom::error::Error { input: rest, .. })) => {
            Err(ColoringError::malformed(s.len() - rest.len(), "invalid coloring list"))
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(ColoringError::malformed(s.len(), "incomplete coloring list"))
        }
    }
}

/// reads a coloring from a file
pub fn read_coloring<P:AsRef<Path>>(filename:P) -> Result<Coloring> {
    parse_coloring(&fs::read_to_string(filename)?)
}
