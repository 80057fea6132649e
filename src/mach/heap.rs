use super::{materialize, Address};

/// ## Data memory
///
/// A zero filled byte tape addressed by a wrapping 8-bit cursor. Storage is
/// grown in chunks the first time a cell is touched and is never shrunk.

#[derive(Debug, Default, Clone)]
pub struct Heap {
    cells: Vec<u8>,
    cursor: Address,
}

impl Heap {
    pub fn new() -> Heap {
        Heap::default()
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Address) {
        self.cursor = cursor;
    }

    /// The materialized prefix of the tape.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn value(&mut self) -> u8 {
        materialize(&mut self.cells, self.cursor);
        self.cells[self.cursor as usize]
    }

    pub fn set_value(&mut self, value: u8) {
        materialize(&mut self.cells, self.cursor);
        self.cells[self.cursor as usize] = value;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.wrapping_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = self.cursor.wrapping_add(1);
    }
}
