/*
Reads the plain edge list format:
 - first line: "n m" (vertex count, edge count)
 - then m pairs "u v" of 0-indexed vertex ids, separated by whitespace
*/
use std::fs;
use std::path::Path;

use nom::IResult;
use nom::character::complete::{digit1, multispace0, multispace1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair};

use crate::error::{ColoringError, Result};
use crate::graph::Graph;


/// reads an unsigned integer
fn integer(s:&[u8]) -> IResult<&[u8], usize> {
    map_res(
        map_res(digit1, std::str::from_utf8),
        str::parse::<usize>
    )(s)
}

/// reads the header "n m"
pub fn read_header(s:&[u8]) -> IResult<&[u8], (usize,usize)> {
    preceded(multispace0, separated_pair(integer, multispace1, integer))(s)
}

/// describes the byte found at the start of s
fn describe(s:&[u8]) -> String {
    match s.first() {
        None => "unexpected end of input".to_string(),
        Some(b) if b.is_ascii_digit() => "number too large".to_string(),
        Some(b) => format!("unexpected byte 0x{:02x} ({:?})", b, *b as char),
    }
}

/** parses a graph from the edge list format.
Fails with MalformedInput on any byte that is neither a digit nor whitespace,
and with VertexIndexOutOfRange if an id is not in [0,n).
*/
pub fn parse_edge_list(input:&[u8]) -> Result<Graph> {
    let offset = |rest:&[u8]| input.len() - rest.len();
    let header = multispace0::<&[u8], ()>(input).map(|(rest,_)| rest).unwrap_or(input);
    let (mut s, (n,m)) = read_header(input)
        .map_err(|_| {
            ColoringError::malformed(offset(header), format!("invalid header: {}", describe(header)))
        })?;
    let mut graph = Graph::new(n, m)
        .map_err(|_| ColoringError::malformed(offset(header), format!("vertex count {} too large", n)))?;
    let mut pending:Option<usize> = None; // first endpoint of the current edge
    loop {
        s = multispace0::<&[u8], ()>(s).map(|(rest,_)| rest).unwrap_or(s);
        if s.is_empty() { break; }
        match integer(s) {
            Ok((rest, x)) => {
                s = rest;
                match pending.take() {
                    None => pending = Some(x),
                    Some(u) => graph.add_edge(u, x)?,
                }
            }
            Err(_) => { return Err(ColoringError::malformed(offset(s), describe(s))); }
        }
    }
    if let Some(u) = pending {
        return Err(ColoringError::malformed(
            input.len(), format!("vertex {} has no matching endpoint", u)
        ));
    }
    log::debug!("read {} value pairs", graph.nb_parsed_edges());
    Ok(graph)
}

/// reads an instance from file
pub fn read_from_file<P:AsRef<Path>>(filename:P) -> Result<Graph> {
    let content = fs::read(filename)?;
    parse_edge_list(&content)
}
