use super::{Address, Ip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    /// `#`
    Heap,
    /// `@`
    Stack,
    /// End of run.
    Exit,
}

/// ## Frozen copy of machine state for debug dumps
///
/// Each view is a plain text table; styling and pausing belong to
/// whoever prints it.

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub kind: DumpKind,
    pub ip: Ip,
    pub heap: Vec<u8>,
    pub heap_cursor: Address,
    pub stack: Option<(Vec<u8>, Address)>,
}

const ROW_WIDTH: usize = 0x10;

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

impl Snapshot {
    fn cursor_value(&self) -> u8 {
        self.heap
            .get(self.heap_cursor as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn ip_view(&self) -> String {
        format!(
            "Instruction ({:03}, {:03})\nDirection: {}\n",
            self.ip.x(),
            self.ip.y(),
            self.ip.direction()
        )
    }

    pub fn heap_numeric_view(&self) -> String {
        let mut s = String::from("Program Heap Dump (uint8_t)");
        for (i, cell) in self.heap.iter().enumerate() {
            if i % ROW_WIDTH == 0 {
                s.push_str(&format!("\n0x{:x}\t| ", i));
            }
            s.push_str(&format!(" {:03}", cell));
        }
        s.push_str(&format!(
            "\nPtr: 0x{:02x} [{:03}]\n",
            self.heap_cursor,
            self.cursor_value()
        ));
        s
    }

    pub fn heap_char_view(&self) -> String {
        let mut s = String::from("Program Heap Dump (char)");
        for (i, cell) in self.heap.iter().enumerate() {
            if i % ROW_WIDTH == 0 {
                s.push_str(&format!("\n0x{:x}\t| ", i));
            }
            s.push(printable(*cell));
            s.push(' ');
        }
        s.push_str(&format!(
            "\nPtr: 0x{:02x} [{}]\n",
            self.heap_cursor,
            printable(self.cursor_value())
        ));
        s
    }

    /// `None` when the machine runs without a stack.
    pub fn stack_view(&self) -> Option<String> {
        let (cells, cursor) = self.stack.as_ref()?;
        let mut s = String::from("Program Stack Dump (uint8_t)|(char)\n::TOP::\n");
        for (i, cell) in cells.iter().enumerate().rev() {
            s.push_str(&format!("{:4} | {}", cell, printable(*cell)));
            if i == *cursor as usize {
                s.push_str("\t< sPtr");
            }
            s.push('\n');
        }
        s.push_str("::BOT::\n");
        Some(s)
    }
}
