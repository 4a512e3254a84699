/// Number of header bytes that must match before a damaged base header is repaired.
pub const DEFAULT_FIXUP_THRESHOLD: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    fixup_threshold: u8,
}

impl ParserConfig {
    /// `fixup_threshold` is clamped to `0..=8` here and nowhere else.
    pub fn new(fixup_threshold: u8) -> Self {
        Self {
            fixup_threshold: fixup_threshold.min(8),
        }
    }

    /// Minimum header score (matching bytes out of 8) at which the header is rewritten instead of
    /// the block being rejected.
    pub fn fixup_threshold(&self) -> u8 {
        self.fixup_threshold
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FIXUP_THRESHOLD)
    }
}
