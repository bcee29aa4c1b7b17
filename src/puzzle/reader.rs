//! Parses the textual puzzle definition format.
//!
//! A definition holds the width and height followed by one character per
//! element, read left to right and top to bottom: rows of points interleaved
//! with horizontal edges alternate with rows of vertical edges interleaved
//! with spaces. Whitespace between tokens is optional.
//!
//! ```text
//! 2 2
//! s o o
//! x w o
//! o o e
//! ```

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Error, Result};
use crate::puzzle::grid::{EdgeValue, PointValue, Puzzle, SpaceValue};

/// Parses a puzzle definition from a string.
pub fn parse(input: &str) -> Result<Puzzle> {
    let mut chars = input.chars().peekable();

    let width = read_number(&mut chars, "width")?;
    let height = read_number(&mut chars, "height")?;
    if width < 2 || height < 2 {
        return Err(Error::BadDimensions { width, height });
    }

    let mut points = Vec::with_capacity(Puzzle::num_points_for(width, height));
    let mut edges = Vec::with_capacity(Puzzle::num_edges_for(width, height));
    let mut spaces = Vec::with_capacity(Puzzle::num_spaces_for(width, height));

    for row in 0..height {
        // Row of points interleaved with horizontal edges.
        for col in 0..width {
            points.push(read_point(&mut chars)?);
            if col < width - 1 {
                edges.push(read_edge(&mut chars)?);
            }
        }

        // Row of vertical edges interleaved with spaces.
        if row < height - 1 {
            for col in 0..width {
                edges.push(read_edge(&mut chars)?);
                if col < width - 1 {
                    spaces.push(read_space(&mut chars)?);
                }
            }
        }
    }

    Puzzle::new(width, height, points, edges, spaces)
}

fn next_token(chars: &mut Peekable<Chars<'_>>, expected: &'static str) -> Result<char> {
    for ch in chars.by_ref() {
        if !ch.is_whitespace() {
            return Ok(ch);
        }
    }
    Err(Error::UnexpectedEnd(expected))
}

fn read_number(chars: &mut Peekable<Chars<'_>>, expected: &'static str) -> Result<usize> {
    let first = next_token(chars, expected)?;
    let mut value = first
        .to_digit(10)
        .ok_or(Error::UnexpectedToken {
            ch: first,
            expected,
        })? as usize;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        value = value * 10 + digit as usize;
        chars.next();
    }
    Ok(value)
}

fn read_point(chars: &mut Peekable<Chars<'_>>) -> Result<PointValue> {
    let ch = next_token(chars, "point value")?;
    PointValue::from_char(ch).ok_or(Error::UnexpectedToken {
        ch,
        expected: "point value",
    })
}

fn read_edge(chars: &mut Peekable<Chars<'_>>) -> Result<EdgeValue> {
    let ch = next_token(chars, "edge value")?;
    EdgeValue::from_char(ch).ok_or(Error::UnexpectedToken {
        ch,
        expected: "edge value",
    })
}

fn read_space(chars: &mut Peekable<Chars<'_>>) -> Result<SpaceValue> {
    let ch = next_token(chars, "space value")?;
    SpaceValue::from_char(ch).ok_or(Error::UnexpectedToken {
        ch,
        expected: "space value",
    })
}
