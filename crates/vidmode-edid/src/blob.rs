//! Owned EDID buffer and base block field access.

use tracing::debug;

use crate::error::{EdidError, Result};
use crate::quirks::decode_vendor;
use crate::validate::{BlockValidator, CHECKSUM_OFFSET};
use crate::{CEA_EXT, EDID_BLOCK_SIZE, VTB_EXT};

pub type Block = [u8; EDID_BLOCK_SIZE];

/// Length of a detailed timing / display descriptor.
pub const DESCRIPTOR_SIZE: usize = 18;

// Base block layout.
const MFG_ID: usize = 0x08;
const PRODUCT_CODE: usize = 0x0a;
const SERIAL: usize = 0x0c;
const MFG_WEEK: usize = 0x10;
const MFG_YEAR: usize = 0x11;
const VERSION: usize = 0x12;
const REVISION: usize = 0x13;
const INPUT: usize = 0x14;
const WIDTH_CM: usize = 0x15;
const HEIGHT_CM: usize = 0x16;
const FEATURES: usize = 0x18;
const ESTABLISHED: usize = 0x23;
const STANDARD_TIMINGS: usize = 0x26;
const DETAILED_TIMINGS: usize = 0x36;
pub(crate) const EXTENSION_COUNT: usize = 0x7e;

/// Base block input byte bits.
pub mod input {
    pub const DIGITAL: u8 = 1 << 7;
    /// EDID 1.3 digital input: DFP 1.x compatible.
    pub const DFP_1X: u8 = 1 << 0;
    pub const COLOR_DEPTH_MASK: u8 = 0x70;
}

/// Base block feature byte bits.
pub mod features {
    pub const DEFAULT_GTF: u8 = 1 << 0;
    pub const PREFERRED_TIMING: u8 = 1 << 1;
    pub const RGB444_YCRCB444: u8 = 1 << 3;
    pub const RGB444_YCRCB422: u8 = 1 << 4;
}

/// Vendor and product identification from the base block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdidIdentity {
    pub manufacturer: String,
    pub mfg_id: [u8; 2],
    pub product: u16,
    pub serial: u32,
    pub week: u8,
    pub year: u16,
    pub version: u8,
    pub revision: u8,
}

/// A complete EDID: the base block followed by its extensions.
///
/// The number of blocks always agrees with the base block's extension count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdidBlob {
    blocks: Vec<Block>,
}

impl EdidBlob {
    /// Wraps raw bytes. Fails if the buffer is shorter than the extension count requires;
    /// trailing bytes past the declared extensions are dropped.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() < EDID_BLOCK_SIZE {
            return Err(EdidError::Truncated {
                expected: EDID_BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let extensions = usize::from(bytes[EXTENSION_COUNT]);
        let expected = EDID_BLOCK_SIZE * (1 + extensions);
        if bytes.len() < expected {
            return Err(EdidError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }
        if bytes.len() > expected {
            debug!(
                expected,
                actual = bytes.len(),
                "ignoring trailing bytes after last EDID extension"
            );
        }

        let blocks = bytes[..expected]
            .chunks_exact(EDID_BLOCK_SIZE)
            .map(|chunk| {
                let mut block = [0u8; EDID_BLOCK_SIZE];
                block.copy_from_slice(chunk);
                block
            })
            .collect();
        Ok(Self { blocks })
    }

    /// Parses a hex dump. Whitespace (including line breaks) is ignored.
    pub fn from_hex(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = hex::decode(compact)?;
        Self::new(bytes)
    }

    /// Builds a blob from a validated base block and the extensions that survived validation.
    /// If some were dropped, the base block's extension count is lowered and its checksum byte
    /// raised by the same amount so the block still sums to zero.
    pub(crate) fn from_validated(mut base: Block, extensions: Vec<Block>) -> Self {
        let declared = base[EXTENSION_COUNT];
        let kept = extensions.len().min(usize::from(u8::MAX)) as u8;
        if kept != declared {
            base[CHECKSUM_OFFSET] = base[CHECKSUM_OFFSET].wrapping_add(declared.wrapping_sub(kept));
            base[EXTENSION_COUNT] = kept;
            debug!(declared, kept, "rewrote EDID extension count");
        }
        let mut blocks = Vec::with_capacity(1 + extensions.len());
        blocks.push(base);
        blocks.extend(extensions.into_iter().take(usize::from(kept)));
        Self { blocks }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.blocks.concat()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn base(&self) -> &Block {
        &self.blocks[0]
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn extension_count(&self) -> usize {
        self.blocks.len() - 1
    }

    pub fn extensions(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().skip(1)
    }

    /// True when every block passes validation.
    pub fn is_valid(&self, validator: &BlockValidator) -> bool {
        self.blocks
            .iter()
            .enumerate()
            .all(|(i, block)| validator.validate(block, i == 0).ok)
    }

    pub fn version(&self) -> u8 {
        self.base()[VERSION]
    }

    pub fn revision(&self) -> u8 {
        self.base()[REVISION]
    }

    /// True when the EDID structure version is strictly newer than `version.revision`.
    pub fn version_greater(&self, version: u8, revision: u8) -> bool {
        self.version() > version || (self.version() == version && self.revision() > revision)
    }

    pub fn mfg_id(&self) -> [u8; 2] {
        [self.base()[MFG_ID], self.base()[MFG_ID + 1]]
    }

    pub fn product_id(&self) -> u16 {
        u16::from_le_bytes([self.base()[PRODUCT_CODE], self.base()[PRODUCT_CODE + 1]])
    }

    pub fn identity(&self) -> EdidIdentity {
        let base = self.base();
        let vendor = decode_vendor(self.mfg_id());
        EdidIdentity {
            manufacturer: String::from_utf8_lossy(&vendor).into_owned(),
            mfg_id: self.mfg_id(),
            product: self.product_id(),
            serial: u32::from_le_bytes([
                base[SERIAL],
                base[SERIAL + 1],
                base[SERIAL + 2],
                base[SERIAL + 3],
            ]),
            week: base[MFG_WEEK],
            year: 1990 + u16::from(base[MFG_YEAR]),
            version: base[VERSION],
            revision: base[REVISION],
        }
    }

    pub fn input(&self) -> u8 {
        self.base()[INPUT]
    }

    pub fn is_digital(&self) -> bool {
        self.input() & input::DIGITAL != 0
    }

    pub fn width_cm(&self) -> u8 {
        self.base()[WIDTH_CM]
    }

    pub fn height_cm(&self) -> u8 {
        self.base()[HEIGHT_CM]
    }

    pub fn features(&self) -> u8 {
        self.base()[FEATURES]
    }

    /// Established timings I/II bytes followed by the manufacturer reserved byte.
    pub fn established_timings(&self) -> [u8; 3] {
        let base = self.base();
        [
            base[ESTABLISHED],
            base[ESTABLISHED + 1],
            base[ESTABLISHED + 2],
        ]
    }

    /// The eight 2-byte standard timing codes of the base block.
    pub fn standard_timings(&self) -> [[u8; 2]; 8] {
        let base = self.base();
        core::array::from_fn(|i| {
            let off = STANDARD_TIMINGS + i * 2;
            [base[off], base[off + 1]]
        })
    }

    /// Every 18-byte descriptor, in the order decoders must see them: the four base block
    /// descriptors, then those carried by CEA and VTB extensions.
    pub fn detailed_blocks(&self) -> Vec<&[u8; DESCRIPTOR_SIZE]> {
        let mut out = Vec::new();
        for i in 0..4 {
            push_descriptor(&mut out, self.base(), DETAILED_TIMINGS + i * DESCRIPTOR_SIZE);
        }

        for ext in self.extensions() {
            match ext[0] {
                CEA_EXT => {
                    let start = usize::from(ext[2]);
                    if !(4..=127).contains(&start) {
                        continue;
                    }
                    let count = (127 - start) / DESCRIPTOR_SIZE;
                    for i in 0..count {
                        push_descriptor(&mut out, ext, start + i * DESCRIPTOR_SIZE);
                    }
                }
                VTB_EXT => {
                    if ext[1] != 1 {
                        debug!(version = ext[1], "unknown VTB extension version");
                        continue;
                    }
                    let count = usize::from(ext[2]).min(6);
                    for i in 0..count {
                        push_descriptor(&mut out, ext, 5 + i * DESCRIPTOR_SIZE);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

fn push_descriptor<'a>(out: &mut Vec<&'a [u8; DESCRIPTOR_SIZE]>, block: &'a Block, offset: usize) {
    if let Some(desc) = block
        .get(offset..offset + DESCRIPTOR_SIZE)
        .and_then(|s| <&[u8; DESCRIPTOR_SIZE]>::try_from(s).ok())
    {
        out.push(desc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_bytes(extensions: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; EDID_BLOCK_SIZE * (1 + usize::from(extensions))];
        bytes[EXTENSION_COUNT] = extensions;
        bytes
    }

    #[test]
    fn length_must_cover_declared_extensions() {
        let mut bytes = blob_bytes(1);
        bytes.truncate(200);
        assert!(matches!(
            EdidBlob::new(&bytes),
            Err(EdidError::Truncated {
                expected: 256,
                actual: 200
            })
        ));
        assert!(matches!(
            EdidBlob::new([0u8; 10]),
            Err(EdidError::Truncated { expected: 128, .. })
        ));
    }

    #[test]
    fn trailing_bytes_are_dropped() {
        let mut bytes = blob_bytes(0);
        bytes.extend_from_slice(&[0xaa; 128]);
        let blob = EdidBlob::new(&bytes).unwrap();
        assert_eq!(blob.extension_count(), 0);
        assert_eq!(blob.to_bytes().len(), 128);
    }

    #[test]
    fn hex_dump_ignores_whitespace() {
        let text = hex::encode(blob_bytes(0));
        let spaced: String = text
            .as_bytes()
            .chunks(32)
            .map(|line| format!("{}\n", std::str::from_utf8(line).unwrap()))
            .collect();
        let blob = EdidBlob::from_hex(&spaced).unwrap();
        assert_eq!(blob.to_hex(), text);
        assert!(matches!(EdidBlob::from_hex("zz"), Err(EdidError::Hex(_))));
    }

    #[test]
    fn version_comparison() {
        let mut bytes = blob_bytes(0);
        bytes[VERSION] = 1;
        bytes[REVISION] = 3;
        let blob = EdidBlob::new(&bytes).unwrap();
        assert!(blob.version_greater(1, 2));
        assert!(!blob.version_greater(1, 3));
        assert!(!blob.version_greater(2, 0));
    }

    #[test]
    fn detailed_blocks_walk_cea_and_vtb_extensions() {
        let mut bytes = blob_bytes(2);
        // CEA: descriptors start at 0x54 -> (127 - 84) / 18 = 2 descriptors.
        bytes[128] = CEA_EXT;
        bytes[128 + 2] = 0x54;
        // VTB version 1 with 3 descriptors.
        bytes[256] = VTB_EXT;
        bytes[256 + 1] = 1;
        bytes[256 + 2] = 3;
        let blob = EdidBlob::new(&bytes).unwrap();
        assert_eq!(blob.detailed_blocks().len(), 4 + 2 + 3);
    }

    #[test]
    fn identity_fields() {
        let mut bytes = blob_bytes(0);
        bytes[MFG_ID..MFG_ID + 2].copy_from_slice(&[0x4c, 0x2d]);
        bytes[PRODUCT_CODE..PRODUCT_CODE + 2].copy_from_slice(&596u16.to_le_bytes());
        bytes[SERIAL..SERIAL + 4].copy_from_slice(&0x0102_0304u32.to_le_bytes());
        bytes[MFG_WEEK] = 12;
        bytes[MFG_YEAR] = 30;
        let id = EdidBlob::new(&bytes).unwrap().identity();
        assert_eq!(id.manufacturer, "SAM");
        assert_eq!(id.product, 596);
        assert_eq!(id.serial, 0x0102_0304);
        assert_eq!((id.week, id.year), (12, 2020));
    }
}
