/// ## Optional instruction groups
///
/// Everything is enabled by default. A character whose group is switched off
/// is just another no-op.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `V ^ ! [ ]` and the stack memory.
    pub stack: bool,
    /// `) ; ~ & (`
    pub extensions: bool,
    /// `#`, plus `@` when the stack is also enabled.
    pub debug: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            stack: true,
            extensions: true,
            debug: true,
        }
    }
}

impl Capabilities {
    /// Only the commands every Minimal-2D interpreter understands.
    pub fn base() -> Capabilities {
        Capabilities {
            stack: false,
            extensions: false,
            debug: false,
        }
    }
}
