/*!
## Rust Machine Module

This Rust module is the Minimal-2D virtual machine: the heap and stack
memories, the instruction pointer, the opcode table, and the loop that
walks the grid.

*/

/// Heap cursor, stack cursor, and grid coordinates are all 8-bit and wrap.
pub type Address = u8;

/// Cells added each time a memory has to grow.
pub const MEM_CHUNK: usize = 64;

mod capabilities;
mod heap;
mod ip;
mod opcode;
mod runtime;
mod snapshot;
mod stack;

#[cfg(test)]
mod tests;

pub use capabilities::Capabilities;
pub use heap::Heap;
pub use ip::Direction;
pub use ip::Ip;
pub use opcode::Opcode;
pub use runtime::Event;
pub use runtime::Runtime;
pub use snapshot::DumpKind;
pub use snapshot::Snapshot;
pub use stack::Stack;

/// Grow `cells` until `address` is a valid index, zero filling.
fn materialize(cells: &mut Vec<u8>, address: Address) {
    while address as usize >= cells.len() {
        cells.resize(cells.len() + MEM_CHUNK, 0);
    }
}
