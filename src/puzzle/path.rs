//! A path through a puzzle: a start point plus a bounded sequence of moves.

use std::fmt;

/// A single move between grid-adjacent points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Decodes a population genome byte. Only the four move characters decode
    /// to a move; any other byte acts as a terminator.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'u' => Some(Move::Up),
            b'd' => Some(Move::Down),
            b'l' => Some(Move::Left),
            b'r' => Some(Move::Right),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Move::Up => 'u',
            Move::Down => 'd',
            Move::Left => 'l',
            Move::Right => 'r',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A bounded, mutable move sequence.
///
/// Capacity is fixed at construction; a solvable path can visit each point at
/// most once, so callers size it to the puzzle's point count. Appending at
/// capacity and popping when empty are silent no-ops. Callers that need an
/// exact-length append can compare [`Path::len`] before and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    start: usize,
    moves: Vec<Move>,
    capacity: usize,
}

impl Path {
    /// Creates an empty path with the given move capacity, starting at point
    /// index 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            start: 0,
            moves: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn start_point(&self) -> usize {
        self.start
    }

    pub fn set_start_point(&mut self, index: usize) {
        self.start = index;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move at position `index`. Precondition: `index < self.len()`.
    pub fn get(&self, index: usize) -> Move {
        debug_assert!(index < self.moves.len());
        self.moves[index]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Appends a move, ignored if the path is at capacity.
    pub fn push(&mut self, value: Move) {
        if self.moves.len() < self.capacity {
            self.moves.push(value);
        }
    }

    /// Removes the most recent move, ignored if the path is empty.
    pub fn pop(&mut self) {
        self.moves.pop();
    }

    /// Drops all moves and resets the start point to 0.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.start = 0;
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.moves {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
