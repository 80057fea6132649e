//! # Minimal-2D
//!
//! An interpreter for Minimal-2D, a two dimensional relative of brainfuck
//! found on esolangs.org. A program is a grid of characters. An instruction
//! pointer starts in the upper left corner heading right and executes every
//! character it lands on that means something; everything else is skipped.
//!
//! Put a program in `input.txt` and run the executable from the same
//! directory.
//! ```text
//! D  this program prints byte 3
//! +
//! +
//! +
//! .
//! ```
//! Anything other than a command is a comment, so programs are free to draw
//! pictures around their code. Just keep comments off the path the
//! instruction pointer walks; upper case `U`, `D`, `L` and `R` turn it.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

pub mod lang;
pub mod mach;
pub mod term;
