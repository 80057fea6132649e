/// ## Program source as rows of cells
///
/// Rows are split on line feeds and carriage returns are dropped. Every other
/// byte is a cell, whether or not it means anything to the machine. Rows keep
/// their own lengths; nothing is padded.

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    pub fn load(bytes: &[u8]) -> Grid {
        let mut rows = vec![Vec::new()];
        for &byte in bytes {
            match byte {
                b'\r' => {}
                b'\n' => rows.push(Vec::new()),
                _ => {
                    if let Some(row) = rows.last_mut() {
                        row.push(byte);
                    }
                }
            }
        }
        Grid { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Zero for rows past the end of the program.
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, |row| row.len())
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y)?.get(x).copied()
    }
}

impl From<&str> for Grid {
    fn from(s: &str) -> Self {
        Grid::load(s.as_bytes())
    }
}
