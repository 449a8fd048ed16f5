//! Colon-separated hex dumps of raw bytes

use tracing::debug;

/// Renders a byte slice as lowercase hex pairs joined by `:` (`0a:1b:ff`).
///
/// An empty slice renders as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl std::fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Formats `bytes` as text. See [`HexBytes`].
pub fn format_bytes(bytes: &[u8]) -> String {
    HexBytes(bytes).to_string()
}

/// Logs `bytes` at debug level. Nothing is emitted for an empty slice.
pub fn log_bytes(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    debug!("{}", HexBytes(bytes));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(format_bytes(&[]), "");
    }

    #[test]
    fn separators() {
        assert_eq!(format_bytes(&[0x00]), "00");
        assert_eq!(format_bytes(&[0x0a, 0x1b, 0xff]), "0a:1b:ff");
    }

    #[test]
    fn group_count() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = format_bytes(&bytes);
        assert_eq!(text.split(':').count(), bytes.len());
        assert!(text.split(':').all(|g| g.len() == 2));
        assert_eq!(text.matches(':').count(), bytes.len() - 1);
    }
}
