//! Extension block walking: top-level CEA blocks, DisplayID sections and the CTA-861 data block
//! collection either of them can carry.

use tracing::debug;

use crate::blob::{Block, EdidBlob};
use crate::error::{EdidError, Result};
use crate::mode::{DisplayMode, ModeFlags, ModeType};
use crate::{CEA_EXT, DISPLAYID_EXT};

/// DisplayID data block tags.
const DISPLAYID_TYPE_1_DETAILED: u8 = 0x03;
const DISPLAYID_CTA: u8 = 0x81;

const DISPLAYID_HEADER_LEN: usize = 4;
const DISPLAYID_BLOCK_HEADER_LEN: usize = 3;
const DISPLAYID_TIMING_1_LEN: usize = 20;

/// CTA-861 data block tags (bits 7..5 of the header byte).
pub mod db_tag {
    pub const AUDIO: u8 = 1;
    pub const VIDEO: u8 = 2;
    pub const VENDOR: u8 = 3;
    pub const SPEAKER: u8 = 4;
    pub const USE_EXTENDED: u8 = 7;
}

/// Extended data block tags (payload byte 1 when the tag is [`db_tag::USE_EXTENDED`]).
pub mod ext_tag {
    pub const VIDEO_CAPABILITY: u8 = 0x00;
    pub const HDR_STATIC_METADATA: u8 = 0x06;
    pub const YCBCR420_VIDEO: u8 = 0x0e;
    pub const YCBCR420_CAPABILITY_MAP: u8 = 0x0f;
}

pub const HDMI_IEEE_OUI: u32 = 0x000c03;
pub const HDMI_FORUM_IEEE_OUI: u32 = 0xc45dd8;

/// CEA header byte 3 bits.
pub mod cea_caps {
    pub const BASIC_AUDIO: u8 = 1 << 6;
    pub const YCRCB444: u8 = 1 << 5;
    pub const YCRCB422: u8 = 1 << 4;
}

/// Next extension block with the given tag at or after `start`, and the index to resume from.
pub fn find_extension(blob: &EdidBlob, tag: u8, start: usize) -> Option<(&Block, usize)> {
    blob.extensions()
        .enumerate()
        .skip(start)
        .find(|(_, ext)| ext[0] == tag)
        .map(|(i, ext)| (ext, i + 1))
}

/// A validated DisplayID section inside an extension block.
#[derive(Debug, Clone, Copy)]
pub struct DisplayIdSection<'a> {
    block: &'a Block,
    /// One past the last byte of the section's data blocks.
    end: usize,
}

impl<'a> DisplayIdSection<'a> {
    /// Checks the section header and its own checksum. The extension block checksum belongs to
    /// the EDID and is not consulted.
    pub fn parse(block: &'a Block) -> Option<Self> {
        let idx = 1;
        let available = block.len() - 1 - idx;
        let bytes = usize::from(block[idx + 1]);
        // Header, payload and the DisplayID checksum byte.
        let section_len = DISPLAYID_HEADER_LEN + bytes + 1;
        debug!(
            revision = block[idx],
            bytes,
            product_type = block[idx + 2],
            ext_count = block[idx + 3],
            "DisplayID section"
        );
        if section_len > available {
            return None;
        }
        let sum = block[idx..idx + section_len]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        if sum != 0 {
            debug!(remainder = sum, "DisplayID checksum invalid");
            return None;
        }
        Some(Self {
            block,
            end: idx + DISPLAYID_HEADER_LEN + bytes,
        })
    }

    /// Data blocks as `(tag, whole block including its 3-byte header)`.
    pub fn data_blocks(&self) -> impl Iterator<Item = (u8, &'a [u8])> + 'a {
        let block = self.block;
        let end = self.end;
        let mut idx = 1 + DISPLAYID_HEADER_LEN;
        std::iter::from_fn(move || {
            if idx + DISPLAYID_BLOCK_HEADER_LEN > end {
                return None;
            }
            let num_bytes = usize::from(block[idx + 2]);
            let next = idx + DISPLAYID_BLOCK_HEADER_LEN + num_bytes;
            if num_bytes == 0 || next > end {
                return None;
            }
            let db = &block[idx..next];
            idx = next;
            Some((db[0], db))
        })
    }
}

/// DisplayID sections in extension order. The walk ends at the first DisplayID extension whose
/// section fails validation; later DisplayID extensions are not consulted.
pub fn displayid_sections(blob: &EdidBlob) -> impl Iterator<Item = DisplayIdSection<'_>> {
    blob.extensions()
        .filter(|ext| ext[0] == DISPLAYID_EXT)
        .map_while(DisplayIdSection::parse)
}

/// A CTA-861 data block collection: either a whole top-level CEA extension or a CTA data block
/// embedded in a DisplayID section.
#[derive(Debug, Clone, Copy)]
pub struct CeaBlock<'a> {
    bytes: &'a [u8],
}

impl<'a> CeaBlock<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    fn byte(&self, n: usize) -> u8 {
        self.bytes.get(n).copied().unwrap_or(0)
    }

    pub fn tag(&self) -> u8 {
        self.byte(0)
    }

    pub fn revision(&self) -> u8 {
        self.byte(1)
    }

    /// Byte 3 capability bits; only meaningful for a top-level CEA extension.
    pub fn caps(&self) -> u8 {
        if self.tag() == CEA_EXT {
            self.byte(3)
        } else {
            0
        }
    }

    /// Half-open byte range holding the data block collection.
    pub fn data_block_offsets(&self) -> Result<(usize, usize)> {
        match self.tag() {
            DISPLAYID_CTA => Ok((3, 3 + usize::from(self.byte(2)))),
            CEA_EXT => {
                let start = 4;
                let end = match usize::from(self.byte(2)) {
                    0 => 127,
                    n => n,
                };
                if !(4..=127).contains(&end) {
                    return Err(EdidError::Range {
                        offset: end,
                        len: self.bytes.len(),
                    });
                }
                Ok((start, end))
            }
            tag => Err(EdidError::UnsupportedExtension { tag }),
        }
    }

    /// Iterates the data blocks, stopping at the first one whose payload would run past the end
    /// of the collection.
    pub fn data_blocks(&self) -> Result<DataBlocks<'a>> {
        let (start, end) = self.data_block_offsets()?;
        Ok(DataBlocks {
            bytes: self.bytes,
            pos: start,
            end: end.min(self.bytes.len()),
        })
    }
}

/// Locates the CTA-861 data: a top-level CEA extension wins, otherwise the first CTA data block
/// of the DisplayID sections ahead of any invalid one.
pub fn find_cea(blob: &EdidBlob) -> Option<CeaBlock<'_>> {
    if let Some((ext, _)) = find_extension(blob, CEA_EXT, 0) {
        return Some(CeaBlock { bytes: &ext[..] });
    }
    displayid_sections(blob)
        .flat_map(|section| section.data_blocks())
        .find(|(tag, _)| *tag == DISPLAYID_CTA)
        .map(|(_, bytes)| CeaBlock { bytes })
}

pub struct DataBlocks<'a> {
    bytes: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Iterator for DataBlocks<'a> {
    type Item = DataBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let len = usize::from(self.bytes[self.pos] & 0x1f);
        if self.pos + len >= self.end {
            debug!(
                offset = self.pos,
                len,
                end = self.end,
                "CEA data block overruns its collection"
            );
            return None;
        }
        let db = DataBlock {
            bytes: &self.bytes[self.pos..=self.pos + len],
        };
        self.pos += len + 1;
        Some(db)
    }
}

/// One CTA-861 data block, header byte included. Reads past the end return 0.
#[derive(Debug, Clone, Copy)]
pub struct DataBlock<'a> {
    bytes: &'a [u8],
}

impl<'a> DataBlock<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte `n` of the block, where byte 0 is the header.
    pub fn byte(&self, n: usize) -> u8 {
        self.bytes.get(n).copied().unwrap_or(0)
    }

    pub fn tag(&self) -> u8 {
        self.byte(0) >> 5
    }

    /// Payload length, excluding the header byte.
    pub fn len(&self) -> usize {
        usize::from(self.byte(0) & 0x1f)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[1..]
    }

    /// Extended tag; only meaningful when `tag() == USE_EXTENDED`.
    pub fn extended_tag(&self) -> Option<u8> {
        (self.tag() == db_tag::USE_EXTENDED && !self.is_empty()).then(|| self.byte(1))
    }

    fn oui(&self) -> u32 {
        u32::from(self.byte(1)) | u32::from(self.byte(2)) << 8 | u32::from(self.byte(3)) << 16
    }

    pub fn is_hdmi_vsdb(&self) -> bool {
        self.tag() == db_tag::VENDOR && self.len() >= 5 && self.oui() == HDMI_IEEE_OUI
    }

    pub fn is_hdmi_forum_vsdb(&self) -> bool {
        self.tag() == db_tag::VENDOR && self.len() >= 7 && self.oui() == HDMI_FORUM_IEEE_OUI
    }

    pub fn is_video_capability(&self) -> bool {
        self.extended_tag() == Some(ext_tag::VIDEO_CAPABILITY) && self.len() == 2
    }

    pub fn is_y420_capability_map(&self) -> bool {
        self.extended_tag() == Some(ext_tag::YCBCR420_CAPABILITY_MAP)
    }

    pub fn is_y420_video(&self) -> bool {
        self.extended_tag() == Some(ext_tag::YCBCR420_VIDEO)
    }

    pub fn is_hdr_static_metadata(&self) -> bool {
        self.extended_tag() == Some(ext_tag::HDR_STATIC_METADATA) && self.len() >= 3
    }
}

/// Modes from DisplayID type I detailed timing blocks, across every DisplayID section.
pub fn displayid_detailed_modes(blob: &EdidBlob) -> Vec<DisplayMode> {
    displayid_sections(blob)
        .flat_map(|section| section.data_blocks())
        .filter(|(tag, _)| *tag == DISPLAYID_TYPE_1_DETAILED)
        .flat_map(|(_, db)| {
            let payload = &db[DISPLAYID_BLOCK_HEADER_LEN..];
            // A partial trailing timing means the whole block is malformed.
            let timings = if payload.len() % DISPLAYID_TIMING_1_LEN == 0 {
                payload.chunks_exact(DISPLAYID_TIMING_1_LEN)
            } else {
                debug!(len = payload.len(), "DisplayID timing block length not a multiple of 20");
                payload[..0].chunks_exact(DISPLAYID_TIMING_1_LEN)
            };
            timings.filter_map(displayid_timing_1)
        })
        .collect()
}

fn displayid_timing_1(t: &[u8]) -> Option<DisplayMode> {
    let le16 = |i: usize| u32::from(u16::from_le_bytes([t[i], t[i + 1]]));
    let offset15 = |i: usize| u32::from(u16::from_le_bytes([t[i], t[i + 1] & 0x7f]));
    let clock = (u32::from(t[0]) | u32::from(t[1]) << 8 | u32::from(t[2]) << 16) + 1;
    let preferred = t[3] & 0x80 != 0;

    let hactive = le16(4) + 1;
    let hblank = le16(6) + 1;
    let hsync = offset15(8) + 1;
    let hsw = le16(10) + 1;
    let hsync_positive = t[9] & 0x80 != 0;
    let vactive = le16(12) + 1;
    let vblank = le16(14) + 1;
    let vsync = offset15(16) + 1;
    let vsw = le16(18) + 1;
    let vsync_positive = t[17] & 0x80 != 0;

    let narrow = |v: u32| u16::try_from(v).ok();
    let mut flags = ModeFlags::empty();
    flags |= if hsync_positive {
        ModeFlags::PHSYNC
    } else {
        ModeFlags::NHSYNC
    };
    flags |= if vsync_positive {
        ModeFlags::PVSYNC
    } else {
        ModeFlags::NVSYNC
    };
    let mut mode_type = ModeType::DRIVER;
    mode_type.set(ModeType::PREFERRED, preferred);

    Some(DisplayMode {
        clock: clock * 10,
        hdisplay: narrow(hactive)?,
        hsync_start: narrow(hactive + hsync)?,
        hsync_end: narrow(hactive + hsync + hsw)?,
        htotal: narrow(hactive + hblank)?,
        vdisplay: narrow(vactive)?,
        vsync_start: narrow(vactive + vsync)?,
        vsync_end: narrow(vactive + vsync + vsw)?,
        vtotal: narrow(vactive + vblank)?,
        flags,
        mode_type,
        ..DisplayMode::default()
    })
}
