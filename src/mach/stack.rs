use super::{materialize, Address};

/// ## Cursor driven LIFO memory
///
/// The cursor points at the top value. An empty stack keeps its cursor one
/// below index zero, which on an 8-bit cursor is 255. Nothing guards against
/// underflow or overflow; popping an empty stack just wraps the cursor again.

#[derive(Clone)]
pub struct Stack {
    cells: Vec<u8>,
    cursor: Address,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} @ {}", self.cells, self.cursor)
    }
}

impl Default for Stack {
    fn default() -> Self {
        Stack {
            cells: vec![],
            cursor: Address::max_value(),
        }
    }
}

impl Stack {
    pub fn new() -> Stack {
        Stack::default()
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn push(&mut self, val: u8) {
        let top = self.cursor.wrapping_add(1);
        materialize(&mut self.cells, top);
        self.cells[top as usize] = val;
        self.cursor = top;
    }

    pub fn pop(&mut self) {
        self.cursor = self.cursor.wrapping_sub(1);
    }

    pub fn peek(&mut self) -> u8 {
        materialize(&mut self.cells, self.cursor);
        self.cells[self.cursor as usize]
    }
}
