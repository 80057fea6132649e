use super::{Capabilities, DumpKind, Heap, Ip, Opcode, Snapshot, Stack};
use crate::lang::Grid;

/// ## Execution loop
///
/// The runtime owns every piece of machine state and talks to the outside
/// world only through the [`Event`] returned from [`Runtime::execute`].
/// Output bytes are buffered and always delivered before any event that
/// happened after them.

pub struct Runtime {
    grid: Grid,
    capabilities: Capabilities,
    heap: Heap,
    stack: Option<Stack>,
    ip: Ip,
    count: usize,
    state: State,
    input: Option<Option<u8>>,
    output: Vec<u8>,
    dump: Option<Snapshot>,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Running,
    Print(Vec<u8>),
    Input,
    Dump(Snapshot),
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Running,
    Input,
    Stopped,
}

impl Runtime {
    pub fn new(grid: Grid, capabilities: Capabilities) -> Runtime {
        let stack = if capabilities.stack {
            Some(Stack::new())
        } else {
            None
        };
        Runtime {
            grid,
            capabilities,
            heap: Heap::new(),
            stack,
            ip: Ip::new(),
            count: 0,
            state: State::Running,
            input: None,
            output: vec![],
            dump: None,
        }
    }

    pub fn instruction_count(&self) -> usize {
        self.count
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    pub fn ip(&self) -> &Ip {
        &self.ip
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Answer to [`Event::Input`]. `None` means the input stream ended and
    /// leaves the cell alone.
    pub fn enter(&mut self, value: Option<u8>) {
        self.input = Some(value);
        if self.state == State::Input {
            self.state = State::Running;
        }
    }

    pub fn interrupt(&mut self) {
        self.state = State::Stopped;
    }

    pub fn snapshot(&self, kind: DumpKind) -> Snapshot {
        Snapshot {
            kind,
            ip: self.ip,
            heap: self.heap.cells().to_vec(),
            heap_cursor: self.heap.cursor(),
            stack: self
                .stack
                .as_ref()
                .map(|stack| (stack.cells().to_vec(), stack.cursor())),
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.output.is_empty() && self.dump.is_none() {
            for _ in 0..cycles {
                if self.state != State::Running {
                    break;
                }
                if !self.ip.in_bounds(&self.grid) {
                    self.state = State::Stopped;
                    break;
                }
                self.step();
                if self.dump.is_some() {
                    break;
                }
            }
        }
        if !self.output.is_empty() {
            return Event::Print(std::mem::take(&mut self.output));
        }
        if let Some(snapshot) = self.dump.take() {
            return Event::Dump(snapshot);
        }
        match self.state {
            State::Running => Event::Running,
            State::Input => Event::Input,
            State::Stopped => Event::Stopped,
        }
    }

    fn step(&mut self) {
        let (x, y) = (self.ip.x() as usize, self.ip.y() as usize);
        if let Some(byte) = self.grid.cell(x, y) {
            if let Some(op) = Opcode::decode(byte, &self.capabilities) {
                if op == Opcode::Input && self.input.is_none() {
                    self.state = State::Input;
                    return;
                }
                self.dispatch(op);
                self.count += 1;
            }
        }
        self.ip.advance();
    }

    fn dispatch(&mut self, op: Opcode) {
        match op {
            Opcode::Right => self.heap.move_right(),
            Opcode::Left => self.heap.move_left(),
            Opcode::Increment => {
                let value = self.heap.value().wrapping_add(1);
                self.heap.set_value(value);
            }
            Opcode::Decrement => {
                let value = self.heap.value().wrapping_sub(1);
                self.heap.set_value(value);
            }
            Opcode::Output => {
                let value = self.heap.value();
                self.output.push(value);
            }
            Opcode::Input => {
                if let Some(Some(value)) = self.input.take() {
                    self.heap.set_value(value);
                }
            }
            Opcode::Skip => {
                if self.heap.value() == 0 {
                    self.ip.advance();
                }
            }
            Opcode::Turn(direction) => self.ip.set_direction(direction),
            Opcode::Push => {
                let value = self.heap.value();
                if let Some(stack) = self.stack.as_mut() {
                    stack.push(value);
                }
            }
            Opcode::Pop => {
                if let Some(stack) = self.stack.as_mut() {
                    stack.pop();
                }
            }
            Opcode::Peek => {
                if let Some(stack) = self.stack.as_mut() {
                    let value = stack.peek();
                    self.heap.set_value(value);
                }
            }
            Opcode::Enter => {
                let target = self.heap.value();
                if let Some(stack) = self.stack.as_mut() {
                    stack.push(self.heap.cursor());
                    self.heap.set_cursor(target);
                }
            }
            Opcode::Leave => {
                if let Some(stack) = self.stack.as_mut() {
                    self.heap.set_cursor(stack.peek());
                    stack.pop();
                }
            }
            Opcode::Zero => self.heap.set_value(0),
            Opcode::Halt => self.state = State::Stopped,
            Opcode::Redirect => {
                let target = self.heap.value();
                self.heap.set_cursor(target);
            }
            Opcode::Mark => {
                self.heap.set_value(self.ip.x());
                self.heap.move_right();
                self.heap.set_value(self.ip.y());
                self.heap.move_left();
            }
            Opcode::Jump => {
                let x = self.heap.value();
                self.heap.move_right();
                let y = self.heap.value();
                self.heap.move_left();
                self.ip.set_position(x, y);
            }
            Opcode::DumpHeap => self.dump = Some(self.snapshot(DumpKind::Heap)),
            Opcode::DumpStack => self.dump = Some(self.snapshot(DumpKind::Stack)),
        }
    }
}
