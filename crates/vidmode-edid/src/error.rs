use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdidError>;

/// Errors surfaced while validating, fetching or decoding an EDID.
///
/// Most decode paths never fail: malformed descriptors and unknown data blocks are skipped with a
/// debug log. Errors are reserved for input that cannot be treated as an EDID at all.
#[derive(Debug, Error)]
pub enum EdidError {
    /// A 128-byte block failed validation.
    #[error("EDID block {index} is invalid (all_zero={all_zero})")]
    BadBlock {
        index: usize,
        all_zero: bool,
        #[source]
        reason: Box<EdidError>,
    },

    #[error("base block header matches only {score}/8 bytes")]
    BadHeader { score: u8 },

    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    BadChecksum { expected: u8, found: u8 },

    #[error("unsupported EDID version {version}")]
    BadVersion { version: u8 },

    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(&'static str),

    #[error("data block range out of bounds: offset={offset} len={len}")]
    Range { offset: usize, len: usize },

    #[error("extension data block layout not supported (tag {tag:#04x})")]
    UnsupportedExtension { tag: u8 },

    #[error("failed to read EDID block {index}")]
    Fetch {
        index: u8,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("EDID truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid hex dump: {0}")]
    Hex(#[from] hex::FromHexError),
}
