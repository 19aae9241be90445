//! # Hex Formatting Utilities
//!
//! Hex helpers used for transaction logging and trace inspection. Encoding
//! of byte buffers inside trace files goes through the `hex` crate's serde
//! support directly (see [`crate::conntest::Io`]).

/// Format bytes for compact display (useful for logs)
///
/// Formats data as "68 31 31 68" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pretty-print bytes as a hex dump with offsets and an ASCII column
///
/// Output resembles `hexdump -C`, one line per `bytes_per_line` bytes.
pub fn pretty_hex(data: &[u8], bytes_per_line: usize) -> String {
    if data.is_empty() || bytes_per_line == 0 {
        return String::new();
    }

    let lines: Vec<String> = data
        .chunks(bytes_per_line)
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = format!("{:04x}: ", i * bytes_per_line);
            for byte in chunk {
                line.push_str(&format!("{byte:02x} "));
            }
            for _ in chunk.len()..bytes_per_line {
                line.push_str("   ");
            }
            line.push('|');
            for &byte in chunk {
                if byte.is_ascii_graphic() || byte == b' ' {
                    line.push(byte as char);
                } else {
                    line.push('.');
                }
            }
            line.push('|');
            line
        })
        .collect();

    lines.join("\n")
}
