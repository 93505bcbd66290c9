use crate::config::GRID;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Unit offset in grid space; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Reads a heading name. Anything unrecognised becomes `Right`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Heading::Up,
            "down" => Heading::Down,
            "left" => Heading::Left,
            "right" => Heading::Right,
            _ => Heading::Right,
        }
    }
}

/// Maps any coordinate onto the board, re-entering from the opposite edge.
pub fn wrap(coord: i32) -> i32 {
    coord.rem_euclid(GRID)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// Neighbour in `heading`, wrapped onto the board.
    pub fn stepped(self, heading: Heading) -> Self {
        let next = self.offset(heading);
        Cell { x: wrap(next.x), y: wrap(next.y) }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID).contains(&self.x) && (0..GRID).contains(&self.y)
    }

    /// Every cell of the board, row by row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID).flat_map(|y| (0..GRID).map(move |x| Cell { x, y }))
    }
}
