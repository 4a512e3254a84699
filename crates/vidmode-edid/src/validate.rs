//! Sanity checks for a single 128-byte EDID block.

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{EdidError, Result};
use crate::{CEA_EXT, EDID_BLOCK_SIZE};

/// Fixed magic at the start of every base block.
pub const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

const VERSION_OFFSET: usize = 0x12;
const REVISION_OFFSET: usize = 0x13;
pub(crate) const CHECKSUM_OFFSET: usize = EDID_BLOCK_SIZE - 1;

/// Number of bytes (0..=8) of `block` that match the base block header.
pub fn header_score(block: &[u8]) -> u8 {
    EDID_HEADER
        .iter()
        .zip(block)
        .filter(|(want, got)| want == got)
        .count() as u8
}

/// The checksum byte that makes the whole block sum to zero.
pub fn block_checksum(block: &[u8; EDID_BLOCK_SIZE]) -> u8 {
    let sum = block[..CHECKSUM_OFFSET]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

pub fn is_all_zero(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Outcome of validating one block.
///
/// `block` is the caller's block after any header repair; the caller's buffer is never modified.
#[derive(Debug)]
pub struct ValidationResult {
    pub ok: bool,
    /// Set whenever the block needed repair or failed, even if it was still accepted.
    pub corrupt: bool,
    pub all_zero: bool,
    pub block: [u8; EDID_BLOCK_SIZE],
    pub defect: Option<EdidError>,
}

impl ValidationResult {
    /// Converts a failed validation into [`EdidError::BadBlock`].
    pub fn into_result(self, index: usize) -> Result<[u8; EDID_BLOCK_SIZE]> {
        if self.ok {
            return Ok(self.block);
        }
        let reason = self
            .defect
            .unwrap_or(EdidError::MalformedDescriptor("unspecified block defect"));
        Err(EdidError::BadBlock {
            index,
            all_zero: self.all_zero,
            reason: Box::new(reason),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockValidator {
    fixup_threshold: u8,
}

impl BlockValidator {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            fixup_threshold: config.fixup_threshold(),
        }
    }

    pub fn validate(&self, block: &[u8; EDID_BLOCK_SIZE], is_base: bool) -> ValidationResult {
        let mut block = *block;
        let mut corrupt = false;

        if is_base {
            let score = header_score(&block);
            if score < 8 {
                if score >= self.fixup_threshold {
                    debug!(score, "fixing EDID header");
                    block[..EDID_HEADER.len()].copy_from_slice(&EDID_HEADER);
                    corrupt = true;
                } else {
                    return Self::bad(block, EdidError::BadHeader { score });
                }
            }
        }

        let expected = block_checksum(&block);
        let found = block[CHECKSUM_OFFSET];
        if expected != found {
            corrupt = true;
            // Some HDMI switches rewrite CEA payloads without updating the checksum.
            if block[0] == CEA_EXT {
                debug!(expected, found, "EDID checksum invalid, remainder is CEA extension");
            } else {
                return Self::bad(block, EdidError::BadChecksum { expected, found });
            }
        }

        // Block tag 0 is the base block.
        if block[0] == 0x00 {
            let version = block[VERSION_OFFSET];
            if version != 1 {
                return Self::bad(block, EdidError::BadVersion { version });
            }
            let revision = block[REVISION_OFFSET];
            if revision > 4 {
                debug!(revision, "EDID minor > 4, assuming backward compatibility");
            }
        }

        ValidationResult {
            ok: true,
            corrupt,
            all_zero: false,
            block,
            defect: None,
        }
    }

    fn bad(block: [u8; EDID_BLOCK_SIZE], defect: EdidError) -> ValidationResult {
        let all_zero = is_all_zero(&block);
        if all_zero {
            debug!("EDID block is all zeroes");
        } else {
            debug!(error = %defect, "raw EDID block rejected");
        }
        ValidationResult {
            ok: false,
            corrupt: true,
            all_zero,
            block,
            defect: Some(defect),
        }
    }
}

impl Default for BlockValidator {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_block() -> [u8; EDID_BLOCK_SIZE] {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[..8].copy_from_slice(&EDID_HEADER);
        block[VERSION_OFFSET] = 1;
        block[REVISION_OFFSET] = 4;
        block[CHECKSUM_OFFSET] = block_checksum(&block);
        block
    }

    #[test]
    fn perfect_header_scores_eight() {
        assert_eq!(header_score(&EDID_HEADER), 8);
        assert_eq!(header_score(&[0u8; 8]), 2);
    }

    #[test]
    fn valid_base_block_passes_untouched() {
        let block = base_block();
        let result = BlockValidator::default().validate(&block, true);
        assert!(result.ok);
        assert!(!result.corrupt);
        assert_eq!(result.block, block);
    }

    #[test]
    fn damaged_header_is_repaired_but_flagged() {
        // Checksum still matches the canonical header.
        let mut block = base_block();
        block[7] = 0x01;

        let result = BlockValidator::default().validate(&block, true);
        assert!(result.ok);
        assert!(result.corrupt);
        assert_eq!(&result.block[..8], &EDID_HEADER);
        assert_eq!(block[7], 0x01);
    }

    #[test]
    fn header_below_threshold_is_rejected() {
        let mut block = base_block();
        block[1] = 0;
        block[2] = 0;
        block[3] = 0;
        let validator = BlockValidator::new(&ParserConfig::new(6));
        let result = validator.validate(&block, true);
        assert!(!result.ok);
        assert!(matches!(
            result.defect,
            Some(EdidError::BadHeader { score: 5 })
        ));
    }

    #[test]
    fn cea_checksum_mismatch_is_tolerated() {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[0] = CEA_EXT;
        block[1] = 3;
        block[CHECKSUM_OFFSET] = 0x55;

        let result = BlockValidator::default().validate(&block, false);
        assert!(result.ok);
        assert!(result.corrupt);
    }

    #[test]
    fn other_extension_checksum_mismatch_fails() {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[0] = 0x70;
        block[CHECKSUM_OFFSET] = 0x55;

        let result = BlockValidator::default().validate(&block, false);
        assert!(!result.ok);
        assert!(matches!(
            result.defect,
            Some(EdidError::BadChecksum {
                expected: 0x90,
                found: 0x55
            })
        ));
    }

    #[test]
    fn wrong_version_fails() {
        let mut block = base_block();
        block[VERSION_OFFSET] = 2;
        block[CHECKSUM_OFFSET] = block_checksum(&block);
        let result = BlockValidator::default().validate(&block, true);
        assert!(matches!(
            result.defect,
            Some(EdidError::BadVersion { version: 2 })
        ));
    }

    #[test]
    fn all_zero_block_is_reported_distinctly() {
        let block = [0u8; EDID_BLOCK_SIZE];
        let err = BlockValidator::default()
            .validate(&block, true)
            .into_result(0)
            .unwrap_err();
        assert!(matches!(
            err,
            EdidError::BadBlock {
                index: 0,
                all_zero: true,
                ..
            }
        ));
    }
}
