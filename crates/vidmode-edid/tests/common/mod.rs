#![allow(dead_code)]

//! Byte-level EDID builders shared by the integration tests.

use vidmode_edid::EDID_BLOCK_SIZE;

pub const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Standard timing slot filler meaning "unused".
pub const UNUSED_STD: [u8; 2] = [0x01, 0x01];

pub fn checksum(block: &mut [u8]) {
    let sum = block[..EDID_BLOCK_SIZE - 1]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    block[EDID_BLOCK_SIZE - 1] = 0u8.wrapping_sub(sum);
}

pub fn block_sum(block: &[u8]) -> u8 {
    block.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Packs a three letter PNP vendor id.
pub fn vendor_id(vendor: &[u8; 3]) -> [u8; 2] {
    let packed = vendor
        .iter()
        .fold(0u16, |acc, &c| (acc << 5) | u16::from(c - b'@'));
    packed.to_be_bytes()
}

/// An 18-byte detailed timing descriptor. `misc` is byte 17 (sync and interlace flags).
#[allow(clippy::too_many_arguments)]
pub fn detailed_timing(
    clock_khz: u32,
    (hactive, hblank, hsync_offset, hsync_width): (u16, u16, u16, u16),
    (vactive, vblank, vsync_offset, vsync_width): (u16, u16, u16, u16),
    (width_mm, height_mm): (u16, u16),
    misc: u8,
) -> [u8; 18] {
    let clock = ((clock_khz / 10) as u16).to_le_bytes();
    let lo = |v: u16| (v & 0xff) as u8;
    [
        clock[0],
        clock[1],
        lo(hactive),
        lo(hblank),
        ((hactive >> 8) << 4 | (hblank >> 8)) as u8,
        lo(vactive),
        lo(vblank),
        ((vactive >> 8) << 4 | (vblank >> 8)) as u8,
        lo(hsync_offset),
        lo(hsync_width),
        ((vsync_offset & 0x0f) << 4 | (vsync_width & 0x0f)) as u8,
        ((hsync_offset >> 8) << 6
            | (hsync_width >> 8) << 4
            | (vsync_offset >> 4) << 2
            | (vsync_width >> 4)) as u8,
        lo(width_mm),
        lo(height_mm),
        ((width_mm >> 8) << 4 | (height_mm >> 8)) as u8,
        0, // hborder
        0, // vborder
        misc,
    ]
}

/// Separate digital sync, both polarities positive.
pub const MISC_PP: u8 = 0x1e;

/// CEA-861 1920x1080@60 (VIC 16) with a 527x296 mm image.
pub fn dtd_1080p60() -> [u8; 18] {
    detailed_timing(148_500, (1920, 280, 88, 44), (1080, 45, 4, 5), (527, 296), MISC_PP)
}

/// CEA-861 1280x720@60 (VIC 4).
pub fn dtd_720p60() -> [u8; 18] {
    detailed_timing(74_250, (1280, 370, 110, 40), (720, 30, 5, 5), (527, 296), MISC_PP)
}

/// A display descriptor (`00 00 00 tag 00` followed by 13 payload bytes).
pub fn display_descriptor(tag: u8, payload: &[u8]) -> [u8; 18] {
    let mut d = [0u8; 18];
    d[3] = tag;
    d[5..5 + payload.len()].copy_from_slice(payload);
    d
}

pub fn monitor_name(name: &str) -> [u8; 18] {
    let mut payload = [0x20u8; 13];
    payload[..name.len()].copy_from_slice(name.as_bytes());
    if name.len() < 13 {
        payload[name.len()] = 0x0a;
    }
    display_descriptor(0xfc, &payload)
}

/// Range limits descriptor: vertical Hz, horizontal kHz, max clock in 10 MHz units and the
/// timing support flags byte.
pub fn range_limits(vfreq: (u8, u8), hfreq: (u8, u8), max_clock: u8, flags: u8) -> [u8; 18] {
    let mut payload = [0u8; 13];
    payload[0] = vfreq.0;
    payload[1] = vfreq.1;
    payload[2] = hfreq.0;
    payload[3] = hfreq.1;
    payload[4] = max_clock;
    payload[5] = flags;
    payload[6] = 0x0a;
    payload[7..].fill(0x20);
    display_descriptor(0xfd, &payload)
}

/// Builds a base block field by field. Defaults: EDID 1.4, digital 8 bpc input, 53x30 cm,
/// no timings, no extensions.
#[derive(Clone)]
pub struct EdidBuilder {
    base: [u8; EDID_BLOCK_SIZE],
    descriptors: Vec<[u8; 18]>,
    extensions: Vec<[u8; EDID_BLOCK_SIZE]>,
}

impl EdidBuilder {
    pub fn new(vendor: &[u8; 3], product: u16) -> Self {
        let mut base = [0u8; EDID_BLOCK_SIZE];
        base[0..8].copy_from_slice(&HEADER);
        base[8..10].copy_from_slice(&vendor_id(vendor)); // manufacturer
        base[10..12].copy_from_slice(&product.to_le_bytes()); // product code
        base[12..16].copy_from_slice(&0x0102_0304u32.to_le_bytes()); // serial
        base[16] = 12; // week
        base[17] = 30; // year - 1990
        base[18] = 1; // version
        base[19] = 4; // revision
        base[20] = 0xa5; // digital, 8 bpc, DisplayPort
        base[21] = 53; // width cm
        base[22] = 30; // height cm
        base[23] = 120; // gamma 2.2
        base[24] = 0x0a; // RGB 4:4:4 + YCbCr 4:4:4, preferred timing
        for slot in base[38..54].chunks_exact_mut(2) {
            slot.copy_from_slice(&UNUSED_STD);
        }
        Self {
            base,
            descriptors: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn revision(mut self, revision: u8) -> Self {
        self.base[19] = revision;
        self
    }

    pub fn input(mut self, input: u8) -> Self {
        self.base[20] = input;
        self
    }

    pub fn features(mut self, features: u8) -> Self {
        self.base[24] = features;
        self
    }

    pub fn established(mut self, bits: [u8; 3]) -> Self {
        self.base[35..38].copy_from_slice(&bits);
        self
    }

    /// Fills standard timing slots in order; remaining slots stay unused.
    pub fn standard(mut self, codes: &[[u8; 2]]) -> Self {
        for (slot, code) in self.base[38..54].chunks_exact_mut(2).zip(codes) {
            slot.copy_from_slice(code);
        }
        self
    }

    /// Appends one of the four 18-byte descriptors.
    pub fn descriptor(mut self, d: [u8; 18]) -> Self {
        assert!(self.descriptors.len() < 4, "base block holds four descriptors");
        self.descriptors.push(d);
        self
    }

    pub fn extension(mut self, block: [u8; EDID_BLOCK_SIZE]) -> Self {
        self.extensions.push(block);
        self
    }

    pub fn base_block(&self) -> [u8; EDID_BLOCK_SIZE] {
        let mut base = self.base;
        for (i, d) in self.descriptors.iter().enumerate() {
            base[54 + i * 18..72 + i * 18].copy_from_slice(d);
        }
        // Unused descriptor slots become dummy descriptors.
        for i in self.descriptors.len()..4 {
            base[54 + i * 18..72 + i * 18].copy_from_slice(&display_descriptor(0x10, &[]));
        }
        base[126] = self.extensions.len() as u8;
        checksum(&mut base);
        base
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = self.base_block().to_vec();
        for ext in &self.extensions {
            bytes.extend_from_slice(ext);
        }
        bytes
    }
}

/// A CEA-861 revision 3 extension holding `data_blocks` followed by `dtds`.
pub fn cea_extension(caps: u8, data_blocks: &[&[u8]], dtds: &[[u8; 18]]) -> [u8; EDID_BLOCK_SIZE] {
    let mut ext = [0u8; EDID_BLOCK_SIZE];
    ext[0] = 0x02;
    ext[1] = 3;
    ext[3] = caps;
    let mut pos = 4;
    for db in data_blocks {
        ext[pos..pos + db.len()].copy_from_slice(db);
        pos += db.len();
    }
    ext[2] = pos as u8;
    for dtd in dtds {
        ext[pos..pos + 18].copy_from_slice(dtd);
        pos += 18;
    }
    checksum(&mut ext);
    ext
}

/// Video data block listing `svds`.
pub fn video_data_block(svds: &[u8]) -> Vec<u8> {
    let mut db = vec![0x40 | svds.len() as u8];
    db.extend_from_slice(svds);
    db
}
