use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, multispace1, not_line_ending, space1};
use nom::combinator::{map_res, opt, value};
use nom::multi::many0;
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};

use crate::color::VertexId;
use crate::error::{ColoringError, Result};
use crate::graph::Graph;


/// reads an unsigned integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(s)
}

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), terminated(not_line_ending, opt(line_ending)))(s)
}

/// skips all comments and blank lines
pub fn skip_comments(s:&str) -> IResult<&str, Vec<()>> {
    many0(alt((value((), skip_comment), value((), multispace1))))(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edge"), tag("col"))), space1)),
        separated_pair(integer, space1, integer)
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(pair(tag("e"), space1), separated_pair(integer, space1, integer))(s)
}

/** parses a DIMACS instance.
Files listing every edge in both directions (2m edge lines) are accepted.
*/
pub fn parse_dimacs(input:&str) -> Result<Graph> {
    let offset = |rest:&str| input.len() - rest.len();
    let line_at = |rest:&str| rest.lines().next().unwrap_or("").to_string();
    let (mut s, _) = skip_comments(input)
        .map_err(|_| ColoringError::malformed(0, "unable to skip comments"))?;
    let header_at = offset(s);
    let (n, m) = match read_header(s) {
        Ok((rest, header)) => { s = rest; header },
        Err(_) => {
            return Err(ColoringError::malformed(
                header_at, format!("expected 'p edge n m', found '{}'", line_at(s))
            ));
        }
    };
    let mut graph = Graph::new(n, m)
        .map_err(|_| ColoringError::malformed(header_at, format!("vertex count {} too large", n)))?;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    loop {
        s = skip_comments(s).map(|(rest,_)| rest).unwrap_or(s);
        if s.is_empty() { break; }
        match read_edge(s) {
            Ok((rest, (a,b))) => {
                if a == 0 || b == 0 {
                    return Err(ColoringError::malformed(offset(s), "vertex ids start at 1"));
                }
                edges.push((a-1, b-1));
                s = rest;
            }
            Err(_) => {
                return Err(ColoringError::malformed(
                    offset(s), format!("expected 'e u v', found '{}'", line_at(s))
                ));
            }
        }
    }
    if m > 0 && m.checked_mul(2) == Some(edges.len()) { // both directions listed
        edges.retain(|(a,b)| a < b);
    } else if edges.len() != m {
        return Err(ColoringError::InconsistentGraphSize { declared: m, found: edges.len() });
    }
    for (u, v) in edges {
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

/// reads an instance from file
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<Graph> {
    let s = fs::read_to_string(filename)?.replace("\r", "");
    parse_dimacs(&s)
}
