//! Block-by-block EDID retrieval over an unreliable channel.

use tracing::{debug, warn};

use crate::blob::{Block, EdidBlob, EXTENSION_COUNT};
use crate::error::{EdidError, Result};
use crate::validate::{is_all_zero, BlockValidator};

/// Attempts per block before it is given up on.
pub const MAX_TRIES: usize = 4;

/// Anything that can read one 128-byte EDID block by index, such as a DDC bus or a firmware
/// override. Transport errors are reported as [`EdidError::Fetch`].
pub trait BlockSource {
    fn read_block(&mut self, index: u8) -> Result<Block>;
}

impl<F> BlockSource for F
where
    F: FnMut(u8) -> Result<Block>,
{
    fn read_block(&mut self, index: u8) -> Result<Block> {
        self(index)
    }
}

/// Reads and validates a complete EDID from `source`.
///
/// The base block is read up to [`MAX_TRIES`] times; an all-zero first read means no sink is
/// attached and aborts immediately. Each extension gets the same number of tries, and an
/// extension that never validates is dropped: the returned blob's extension count and checksum
/// are rewritten to match. Any transport error aborts the whole read.
pub fn read_edid(source: &mut impl BlockSource, validator: &BlockValidator) -> Result<EdidBlob> {
    let base = read_base(source, validator)?;

    let mut extensions = Vec::new();
    for index in 1..=base[EXTENSION_COUNT] {
        match read_extension(source, validator, index)? {
            Some(block) => extensions.push(block),
            None => warn!(index, "dropping invalid EDID extension"),
        }
    }
    Ok(EdidBlob::from_validated(base, extensions))
}

fn read_base(source: &mut impl BlockSource, validator: &BlockValidator) -> Result<Block> {
    let mut last_err = None;
    for attempt in 0..MAX_TRIES {
        let raw = source.read_block(0)?;
        let result = validator.validate(&raw, true);
        if result.ok {
            if result.corrupt {
                debug!(attempt, "base block accepted after repair");
            }
            return Ok(result.block);
        }
        if attempt == 0 && is_all_zero(&raw) {
            debug!("base block is all zeroes, no sink attached");
            return result.into_result(0);
        }
        last_err = Some(result.into_result(0));
    }
    match last_err {
        Some(Err(err)) => Err(err),
        _ => Err(EdidError::MalformedDescriptor("base block never validated")),
    }
}

fn read_extension(
    source: &mut impl BlockSource,
    validator: &BlockValidator,
    index: u8,
) -> Result<Option<Block>> {
    for attempt in 0..MAX_TRIES {
        let raw = source.read_block(index)?;
        let result = validator.validate(&raw, false);
        if result.ok {
            return Ok(Some(result.block));
        }
        debug!(index, attempt, "EDID extension failed validation");
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{block_checksum, CHECKSUM_OFFSET, EDID_HEADER};
    use crate::{CEA_EXT, EDID_BLOCK_SIZE};

    fn base(extensions: u8) -> Block {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[..8].copy_from_slice(&EDID_HEADER);
        block[18] = 1;
        block[19] = 3;
        block[EXTENSION_COUNT] = extensions;
        block[CHECKSUM_OFFSET] = block_checksum(&block);
        block
    }

    fn extension(tag: u8, fill: u8) -> Block {
        let mut block = [fill; EDID_BLOCK_SIZE];
        block[0] = tag;
        block[CHECKSUM_OFFSET] = block_checksum(&block);
        block
    }

    fn block_sum(block: &Block) -> u8 {
        block.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
    }

    #[test]
    fn reads_base_and_extensions() {
        let blocks = [base(1), extension(CEA_EXT, 0)];
        let mut reads = Vec::new();
        let mut source = |index: u8| -> Result<Block> {
            reads.push(index);
            Ok(blocks[usize::from(index)])
        };
        let blob = read_edid(&mut source, &BlockValidator::default()).unwrap();
        assert_eq!(blob.extension_count(), 1);
        assert_eq!(reads, vec![0, 1]);
    }

    #[test]
    fn retries_a_flaky_base_block() {
        let good = base(0);
        let mut bad = good;
        bad[40] ^= 0xff;
        let mut tries = 0;
        let mut source = |_: u8| -> Result<Block> {
            tries += 1;
            Ok(if tries < 3 { bad } else { good })
        };
        let blob = read_edid(&mut source, &BlockValidator::default()).unwrap();
        assert_eq!(blob.base(), &good);
        assert_eq!(tries, 3);
    }

    #[test]
    fn all_zero_first_read_aborts() {
        let mut tries = 0;
        let mut source = |_: u8| -> Result<Block> {
            tries += 1;
            Ok([0u8; EDID_BLOCK_SIZE])
        };
        let err = read_edid(&mut source, &BlockValidator::default()).unwrap_err();
        assert!(matches!(err, EdidError::BadBlock { index: 0, all_zero: true, .. }));
        assert_eq!(tries, 1);
    }

    #[test]
    fn gives_up_after_four_bad_base_reads() {
        let mut bad = base(0);
        bad[CHECKSUM_OFFSET] ^= 1;
        let mut tries = 0;
        let mut source = |_: u8| -> Result<Block> {
            tries += 1;
            Ok(bad)
        };
        let err = read_edid(&mut source, &BlockValidator::default()).unwrap_err();
        assert!(matches!(err, EdidError::BadBlock { all_zero: false, .. }));
        assert_eq!(tries, MAX_TRIES);
    }

    #[test]
    fn invalid_extension_is_dropped_and_checksum_kept() {
        let mut broken = extension(0x40, 0x11);
        broken[CHECKSUM_OFFSET] ^= 1;
        let blocks = [base(3), extension(CEA_EXT, 0), broken, extension(0x70, 0)];
        let mut source = |index: u8| -> Result<Block> { Ok(blocks[usize::from(index)]) };
        let blob = read_edid(&mut source, &BlockValidator::default()).unwrap();

        assert_eq!(blob.extension_count(), 2);
        assert_eq!(blob.base()[EXTENSION_COUNT], 2);
        assert_eq!(block_sum(blob.base()), 0);
        assert_eq!(blob.block(2).map(|b| b[0]), Some(0x70));
    }

    #[test]
    fn transport_error_aborts() {
        let blocks = [base(1)];
        let mut source = |index: u8| -> Result<Block> {
            blocks.get(usize::from(index)).copied().ok_or_else(|| EdidError::Fetch {
                index,
                source: "NAK".into(),
            })
        };
        let err = read_edid(&mut source, &BlockValidator::default()).unwrap_err();
        assert!(matches!(err, EdidError::Fetch { index: 1, .. }));
    }
}
