use std::io::{self, BufRead};

// Same set as C isspace, which includes vertical tab.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Next value for a `,` command: the first byte that isn't whitespace.
/// `None` at end of stream.
pub fn next_value<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        let (used, found) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|&b| !is_space(b)) {
                Some(i) => (i + 1, Some(buf[i])),
                None => (buf.len(), None),
            }
        };
        reader.consume(used);
        if found.is_some() {
            return Ok(found);
        }
    }
}
