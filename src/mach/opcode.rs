use super::{Capabilities, Direction};

/// ## Virtual machine instruction set
///
/// Every opcode is a single character in the program grid. There are no
/// operands; each instruction works on the heap cell under the cursor,
/// the stack, or the instruction pointer.
///
/// For example: `+++.` adds three to the current cell and prints it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Heap
    /// `>` Move the heap cursor right.
    Right,
    /// `<` Move the heap cursor left.
    Left,
    /// `+` Add one to the current cell.
    Increment,
    /// `-` Subtract one from the current cell.
    Decrement,
    /// `.` Emit the current cell as one byte.
    Output,
    /// `,` Read one value into the current cell.
    Input,
    /// `/` Skip the next cell if the current cell is zero.
    Skip,

    // *** Branch control
    /// `U` `D` `L` `R`
    Turn(Direction),

    // *** Stack
    /// `V` Push the current cell.
    Push,
    /// `^` Discard the top of the stack.
    Pop,
    /// `!` Copy the top of the stack into the current cell.
    Peek,
    /// `[` Push the heap cursor, then move it to the address in the current cell.
    Enter,
    /// `]` Restore the heap cursor from the top of the stack and pop it.
    Leave,

    // *** Extensions
    /// `)` Clear the current cell.
    Zero,
    /// `;` Stop the program.
    Halt,
    /// `~` Move the heap cursor to the address in the current cell.
    Redirect,
    /// `&` Record the instruction pointer at the cursor and the cell after it.
    Mark,
    /// `(` Jump to the position recorded at the cursor and the cell after it.
    Jump,

    // *** Debugging
    /// `#`
    DumpHeap,
    /// `@`
    DumpStack,
}

impl Opcode {
    /// Anything that doesn't decode is a no-op.
    pub fn decode(byte: u8, capabilities: &Capabilities) -> Option<Opcode> {
        use Opcode::*;
        let op = match byte {
            b'>' => Right,
            b'<' => Left,
            b'+' => Increment,
            b'-' => Decrement,
            b'.' => Output,
            b',' => Input,
            b'/' => Skip,
            b'U' => Turn(Direction::Up),
            b'D' => Turn(Direction::Down),
            b'L' => Turn(Direction::Left),
            b'R' => Turn(Direction::Right),
            b'V' => Push,
            b'^' => Pop,
            b'!' => Peek,
            b'[' => Enter,
            b']' => Leave,
            b')' => Zero,
            b';' => Halt,
            b'~' => Redirect,
            b'&' => Mark,
            b'(' => Jump,
            b'#' => DumpHeap,
            b'@' => DumpStack,
            _ => return None,
        };
        if op.is_enabled(capabilities) {
            Some(op)
        } else {
            None
        }
    }

    pub fn is_enabled(&self, capabilities: &Capabilities) -> bool {
        use Opcode::*;
        match self {
            Right | Left | Increment | Decrement | Output | Input | Skip | Turn(_) => true,
            Push | Pop | Peek | Enter | Leave => capabilities.stack,
            Zero | Halt | Redirect | Mark | Jump => capabilities.extensions,
            DumpHeap => capabilities.debug,
            DumpStack => capabilities.debug && capabilities.stack,
        }
    }

    pub fn as_char(&self) -> char {
        use Opcode::*;
        match self {
            Right => '>',
            Left => '<',
            Increment => '+',
            Decrement => '-',
            Output => '.',
            Input => ',',
            Skip => '/',
            Turn(Direction::Up) => 'U',
            Turn(Direction::Down) => 'D',
            Turn(Direction::Left) => 'L',
            Turn(Direction::Right) => 'R',
            Push => 'V',
            Pop => '^',
            Peek => '!',
            Enter => '[',
            Leave => ']',
            Zero => ')',
            Halt => ';',
            Redirect => '~',
            Mark => '&',
            Jump => '(',
            DumpHeap => '#',
            DumpStack => '@',
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
