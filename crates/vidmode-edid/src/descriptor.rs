//! Typed views of the 18-byte descriptors found in the base block and in CEA/VTB extensions.
//!
//! Each descriptor kind is unpacked in exactly one place; decoders never index raw descriptor
//! bytes themselves.

use bitflags::bitflags;

use crate::blob::DESCRIPTOR_SIZE;
use crate::formula::GtfParams;

pub type RawDescriptor = [u8; DESCRIPTOR_SIZE];

/// Display descriptor tags (byte 3 of a display descriptor).
pub mod tag {
    pub const MONITOR_SERIAL: u8 = 0xff;
    pub const MONITOR_STRING: u8 = 0xfe;
    pub const MONITOR_RANGE: u8 = 0xfd;
    pub const MONITOR_NAME: u8 = 0xfc;
    pub const STD_MODES: u8 = 0xfa;
    pub const CVT_3BYTE: u8 = 0xf8;
    pub const EST_TIMINGS: u8 = 0xf7;
}

/// True for a detailed timing descriptor (non-zero pixel clock).
pub fn is_detailed_timing(d: &RawDescriptor) -> bool {
    d[0] != 0 || d[1] != 0
}

/// True for a display descriptor carrying `tag`.
pub fn is_display_descriptor(d: &RawDescriptor, tag: u8) -> bool {
    d[0] == 0 && d[1] == 0 && d[2] == 0 && d[3] == tag
}

bitflags! {
    /// Byte 17 of a detailed timing descriptor.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct DetailedMisc: u8 {
        const HSYNC_POSITIVE = 1 << 1;
        const VSYNC_POSITIVE = 1 << 2;
        /// Either bit set: digital or composite sync. Clear: analog composite.
        const SYNC_SEPARATE = 0b11 << 3;
        const STEREO = 1 << 5;
        const INTERLACE = 1 << 7;
    }
}

/// Fields of a detailed timing descriptor with the 12-bit values reassembled from their split
/// nibbles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DetailedTiming {
    /// Pixel clock in units of 10 kHz.
    pub pixel_clock: u16,
    pub hactive: u16,
    pub hblank: u16,
    pub vactive: u16,
    pub vblank: u16,
    pub hsync_offset: u16,
    pub hsync_width: u16,
    pub vsync_offset: u16,
    pub vsync_width: u16,
    pub width_mm: u16,
    pub height_mm: u16,
    pub misc: DetailedMisc,
}

impl DetailedTiming {
    /// Returns `None` for display descriptors.
    pub fn unpack(d: &RawDescriptor) -> Option<Self> {
        if !is_detailed_timing(d) {
            return None;
        }
        let hi = |byte: u8, shift: u32| u16::from(byte) << shift;
        Some(Self {
            pixel_clock: u16::from_le_bytes([d[0], d[1]]),
            hactive: hi(d[4] & 0xf0, 4) | u16::from(d[2]),
            hblank: hi(d[4] & 0x0f, 8) | u16::from(d[3]),
            vactive: hi(d[7] & 0xf0, 4) | u16::from(d[5]),
            vblank: hi(d[7] & 0x0f, 8) | u16::from(d[6]),
            hsync_offset: hi(d[11] & 0xc0, 2) | u16::from(d[8]),
            hsync_width: hi(d[11] & 0x30, 4) | u16::from(d[9]),
            vsync_offset: hi(d[11] & 0x0c, 2) | u16::from(d[10] >> 4),
            vsync_width: hi(d[11] & 0x03, 4) | u16::from(d[10] & 0x0f),
            width_mm: hi(d[14] & 0xf0, 4) | u16::from(d[12]),
            height_mm: hi(d[14] & 0x0f, 8) | u16::from(d[13]),
            misc: DetailedMisc::from_bits_retain(d[17]),
        })
    }
}

/// Range descriptor timing support flags (byte 10).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeKind {
    /// Default GTF supported.
    DefaultGtf,
    /// Range limits only, no timing formula.
    LimitsOnly,
    /// Secondary GTF curve with its coefficients.
    SecondaryGtf,
    /// CVT supported, with extra CVT fields.
    Cvt,
    Other(u8),
}

impl RangeKind {
    fn from_byte(b: u8) -> Self {
        match b {
            0x00 => Self::DefaultGtf,
            0x01 => Self::LimitsOnly,
            0x02 => Self::SecondaryGtf,
            0x04 => Self::Cvt,
            other => Self::Other(other),
        }
    }
}

/// Monitor range limits descriptor (tag 0xFD).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RangeLimits {
    pub min_vfreq: u16,
    pub max_vfreq: u16,
    pub min_hfreq_khz: u16,
    pub max_hfreq_khz: u16,
    /// Max pixel clock in kHz, or 0 if unspecified.
    pub max_clock_khz: u32,
    /// Maximum active width in pixels (CVT descriptors only), or 0 if unlimited.
    pub max_hactive: u32,
    pub kind: RangeKind,
    /// Secondary GTF coefficients and the horizontal frequency (kHz) where the curve starts.
    pub gtf2: Option<(u32, GtfParams)>,
}

impl RangeLimits {
    /// Unpacks a range descriptor. `revision` is the EDID revision: 1.4 adds a +255 offset bit
    /// per limit and CVT-specific clock refinement.
    pub fn unpack(d: &RawDescriptor, revision: u8) -> Option<Self> {
        if !is_display_descriptor(d, tag::MONITOR_RANGE) {
            return None;
        }
        let offsets = if revision >= 4 { d[4] } else { 0 };
        let with_offset = |value: u8, bit: u8| {
            u16::from(value) + if offsets & bit != 0 { 255 } else { 0 }
        };

        let kind = RangeKind::from_byte(d[10]);
        let cvt_14 = revision >= 4 && kind == RangeKind::Cvt;

        let max_clock_khz = match d[9] {
            0 | 0xff => 0,
            c if cvt_14 => (u32::from(c) * 10_000).saturating_sub(u32::from(d[12] >> 2) * 250),
            c => u32::from(c) * 10_000 + 5001,
        };

        let max_hactive = if cvt_14 && d[13] != 0 {
            8 * (u32::from(d[13]) + 256 * u32::from(d[12] & 0x03))
        } else {
            0
        };

        let gtf2 = (kind == RangeKind::SecondaryGtf).then(|| {
            (
                u32::from(d[12]) * 2,
                GtfParams {
                    m: u32::from(u16::from_le_bytes([d[14], d[15]])),
                    two_c: u32::from(d[13]),
                    k: u32::from(d[16]),
                    two_j: u32::from(d[17]),
                },
            )
        });

        Some(Self {
            min_vfreq: with_offset(d[5], 0x01),
            max_vfreq: with_offset(d[6], 0x02),
            min_hfreq_khz: with_offset(d[7], 0x04),
            max_hfreq_khz: with_offset(d[8], 0x08),
            max_clock_khz,
            max_hactive,
            kind,
            gtf2,
        })
    }

    /// EDID 1.4 CVT descriptors advertise reduced blanking support in byte 15.
    pub fn cvt_supports_rb(d: &RawDescriptor) -> bool {
        d[15] & 0x10 != 0
    }
}

/// Text payload of a monitor name / string descriptor: up to 13 bytes, terminated by a
/// line feed.
pub fn descriptor_text(d: &RawDescriptor) -> String {
    let text: Vec<u8> = d[5..]
        .iter()
        .copied()
        .take_while(|&b| b != 0x0a)
        .collect();
    String::from_utf8_lossy(&text).into_owned()
}

/// Standard timing codes carried in a 0xFA descriptor.
pub fn standard_codes(d: &RawDescriptor) -> impl Iterator<Item = [u8; 2]> + '_ {
    d[5..17].chunks_exact(2).map(|c| [c[0], c[1]])
}

/// One coordinated video timing 3-byte code (tag 0xF8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvtCode {
    pub width: u16,
    pub height: u16,
    /// Refresh rates in decode order: 85, 75, 60, 50 Hz. Bit 0 of the rate byte (60 Hz reduced
    /// blanking) is not decoded.
    pub rates: Vec<u32>,
}

impl CvtCode {
    const RATES: [(u8, u32); 4] = [(1 << 1, 85), (1 << 2, 75), (1 << 3, 60), (1 << 4, 50)];

    pub fn unpack(code: [u8; 3]) -> Option<Self> {
        if code == [0, 0, 0] {
            return None;
        }
        let height = (u32::from(code[0]) + (u32::from(code[1] & 0xf0) << 4) + 1) * 2;
        let width = match code[1] & 0x0c {
            0x00 => height * 4 / 3,
            0x04 => height * 16 / 9,
            0x08 => height * 16 / 10,
            _ => height * 15 / 9,
        };
        // Both fit: height is at most 8192 lines.
        let (width, height) = (u16::try_from(width).ok()?, u16::try_from(height).ok()?);
        let rates = Self::RATES
            .iter()
            .filter(|(bit, _)| code[2] & bit != 0)
            .map(|&(_, rate)| rate)
            .collect();
        Some(Self {
            width,
            height,
            rates,
        })
    }
}

pub fn cvt_codes(d: &RawDescriptor) -> impl Iterator<Item = CvtCode> + '_ {
    d[6..18]
        .chunks_exact(3)
        .filter_map(|c| CvtCode::unpack([c[0], c[1], c[2]]))
}

/// Indices into the established timings III table set in a 0xF7 descriptor, most significant
/// bit first.
pub fn est3_indices(d: &RawDescriptor, table_len: usize) -> impl Iterator<Item = usize> + '_ {
    d[6..12].iter().enumerate().flat_map(move |(i, &byte)| {
        (0..8)
            .rev()
            .filter(move |&bit| byte & (1 << bit) != 0)
            .map(move |bit| i * 8 + 7 - bit)
            .filter(move |&m| m < table_len)
    })
}
