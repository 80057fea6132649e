use super::Address;
use crate::lang::Grid;

/// ## Direction of travel

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        match self {
            Direction::Down | Direction::Up => true,
            Direction::Right | Direction::Left => false,
        }
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Right and Down move toward larger coordinates.
    pub fn is_forward(self) -> bool {
        match self {
            Direction::Right | Direction::Down => true,
            Direction::Left | Direction::Up => false,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Direction::*;
        match self {
            Right => write!(f, "Right"),
            Down => write!(f, "Down"),
            Left => write!(f, "Left"),
            Up => write!(f, "Up"),
        }
    }
}

/// ## Instruction pointer
///
/// Coordinates are 8-bit and wrap the same way the heap cursor does.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ip {
    x: Address,
    y: Address,
    direction: Direction,
}

impl Default for Ip {
    fn default() -> Self {
        Ip {
            x: 0,
            y: 0,
            direction: Direction::Right,
        }
    }
}

impl Ip {
    pub fn new() -> Ip {
        Ip::default()
    }

    pub fn x(&self) -> Address {
        self.x
    }

    pub fn y(&self) -> Address {
        self.y
    }

    pub fn set_position(&mut self, x: Address, y: Address) {
        self.x = x;
        self.y = y;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn advance(&mut self) {
        match self.direction {
            Direction::Right => self.x = self.x.wrapping_add(1),
            Direction::Down => self.y = self.y.wrapping_add(1),
            Direction::Left => self.x = self.x.wrapping_sub(1),
            Direction::Up => self.y = self.y.wrapping_sub(1),
        }
    }

    /// Loop continuation test. Only the axis of travel decides whether to
    /// keep going. A horizontal walk on a row that does not exist stops.
    pub fn in_bounds(&self, grid: &Grid) -> bool {
        let (x, y) = (self.x as usize, self.y as usize);
        if self.direction.is_vertical() {
            y < grid.rows()
        } else {
            y < grid.rows() && x < grid.row_len(y)
        }
    }
}
