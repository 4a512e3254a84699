//! Display capabilities decoded from the base block and the CTA-861 extension, plus the audio
//! and HDMI accessors consumed by ELD and infoframe builders.

use bitflags::bitflags;
use tracing::debug;

use crate::blob::{features, input, EdidBlob};
use crate::cea::match_cea_mode;
use crate::descriptor::{descriptor_text, is_display_descriptor, tag, RangeKind, RangeLimits};
use crate::error::Result;
use crate::ext::{cea_caps, db_tag, find_cea, DataBlock};
use crate::mode::DisplayMode;
use crate::quirks::Quirks;
use crate::CEA_EXT;

bitflags! {
    /// Pixel encodings the sink accepts.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ColorFormats: u8 {
        const RGB444 = 1 << 0;
        const YCRCB444 = 1 << 1;
        const YCRCB422 = 1 << 2;
        const YCRCB420 = 1 << 3;
    }
}

bitflags! {
    /// Deep color bits of HDMI VSDB byte 6.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct DeepColor: u8 {
        const Y444 = 1 << 3;
        const DC_30 = 1 << 4;
        const DC_36 = 1 << 5;
        const DC_48 = 1 << 6;
    }
}

bitflags! {
    /// YCbCr 4:2:0 deep color bits of HF-VSDB byte 7.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Y420DeepColor: u8 {
        const DC_30 = 1 << 0;
        const DC_36 = 1 << 1;
        const DC_48 = 1 << 2;
    }
}

/// A set of VICs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VicSet([u64; 4]);

impl VicSet {
    pub fn insert(&mut self, vic: u8) {
        self.0[usize::from(vic / 64)] |= 1 << (vic % 64);
    }

    pub fn contains(&self, vic: u8) -> bool {
        self.0[usize::from(vic / 64)] & (1 << (vic % 64)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&vic| self.contains(vic))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScdcCaps {
    pub supported: bool,
    pub read_request: bool,
    pub scrambling: bool,
    /// Scrambling below 340 MHz.
    pub scrambling_low_rates: bool,
}

/// Fixed Rate Link limits: lane count and Gbps per lane. Zero means FRL is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrlRate {
    pub lanes: u8,
    pub rate_per_lane: u8,
}

impl FrlRate {
    fn from_code(code: u8) -> Self {
        let (lanes, rate_per_lane) = match code {
            1 => (3, 3),
            2 => (3, 6),
            3 => (4, 6),
            4 => (4, 8),
            5 => (4, 10),
            6 => (4, 12),
            _ => (0, 0),
        };
        Self {
            lanes,
            rate_per_lane,
        }
    }
}

/// Display Stream Compression capabilities from the HF-VSDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DscCaps {
    pub v_1p2: bool,
    pub native_420: bool,
    pub all_bpp: bool,
    /// Highest supported component depth, 0 when only 8 bpc.
    pub bpc_supported: u8,
    pub max_slices: u8,
    /// Pixel clock per slice in MHz.
    pub clk_per_slice: u16,
    pub max_frl: FrlRate,
    pub total_chunk_kbytes: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HdmiInfo {
    pub scdc: ScdcCaps,
    /// VICs that may only be sent as YCbCr 4:2:0.
    pub y420_vdb_modes: VicSet,
    /// VICs that may additionally be sent as YCbCr 4:2:0.
    pub y420_cmdb_modes: VicSet,
    /// Raw capability map: bit `n` covers the `n`th SVD of the video data block.
    pub y420_cmdb_map: u64,
    pub y420_dc_modes: Y420DeepColor,
    pub max_frl: FrlRate,
    pub dsc_cap: DscCaps,
}

/// HDR static metadata data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HdrStaticMetadata {
    /// Supported EOTF bits (SDR, HDR gamma, ST 2084, HLG).
    pub eotf: u8,
    pub metadata_type: u8,
    pub max_cll: u8,
    pub max_fall: u8,
    pub min_cll: u8,
}

/// HDMI VSDB latency fields; index 0 is progressive, 1 interlaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    pub present: [bool; 2],
    pub video: [u8; 2],
    pub audio: [u8; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayInfo {
    pub width_mm: u32,
    pub height_mm: u32,
    /// Bits per color component; 0 when unknown.
    pub bpc: u8,
    pub color_formats: ColorFormats,
    pub cea_rev: u8,
    pub non_desktop: bool,
    /// Vertical refresh range (Hz) from a range-limits-only descriptor.
    pub monitor_range: Option<(u16, u16)>,
    pub name: Option<String>,
    pub is_hdmi: bool,
    pub dvi_dual: bool,
    /// kHz; 0 when not declared.
    pub max_tmds_clock: u32,
    pub has_hdmi_infoframe: bool,
    pub rgb_quant_range_selectable: bool,
    /// Deep color depths from the HDMI VSDB; `Y444` is never set here.
    pub hdmi_dc_modes: DeepColor,
    pub hdmi: HdmiInfo,
    pub hdr: Option<HdrStaticMetadata>,
    pub latency: Latency,
}

impl DisplayInfo {
    /// Builds the capability summary for `blob`. Every field starts from its default, so a
    /// previous value is never merged into.
    pub fn from_edid(blob: &EdidBlob, quirks: Quirks) -> Self {
        let mut info = Self {
            width_mm: u32::from(blob.width_cm()) * 10,
            height_mm: u32::from(blob.height_cm()) * 10,
            non_desktop: quirks.contains(Quirks::NON_DESKTOP),
            ..Self::default()
        };
        debug!(non_desktop = info.non_desktop, "display info");

        let has_range = blob.version_greater(1, 1);
        for d in blob.detailed_blocks() {
            if has_range {
                if let Some(range) = RangeLimits::unpack(d, blob.revision()) {
                    if range.kind == RangeKind::LimitsOnly {
                        info.monitor_range = Some((range.min_vfreq, range.max_vfreq));
                    }
                }
            }
            if is_display_descriptor(d, tag::MONITOR_NAME) {
                info.name = Some(descriptor_text(d));
            }
        }
        if let Some((min, max)) = info.monitor_range {
            debug!(min, max, "monitor refresh range");
        }

        if blob.revision() < 3 || !blob.is_digital() {
            return info;
        }
        info.color_formats |= ColorFormats::RGB444;
        info.parse_cea(blob);

        if info.bpc == 0 && blob.revision() == 3 && blob.input() & input::DFP_1X != 0 {
            info.bpc = 8;
            debug!(bpc = info.bpc, "DFP 1.x sink");
        }

        if blob.revision() < 4 {
            return info;
        }

        info.bpc = match blob.input() & input::COLOR_DEPTH_MASK {
            0x10 => 6,
            0x20 => 8,
            0x30 => 10,
            0x40 => 12,
            0x50 => 14,
            0x60 => 16,
            _ => 0,
        };
        debug!(bpc = info.bpc, "EDID 1.4 color depth");

        if blob.features() & features::RGB444_YCRCB444 != 0 {
            info.color_formats |= ColorFormats::YCRCB444;
        }
        if blob.features() & features::RGB444_YCRCB422 != 0 {
            info.color_formats |= ColorFormats::YCRCB422;
        }
        info
    }

    fn parse_cea(&mut self, blob: &EdidBlob) {
        let Some(cea) = find_cea(blob) else {
            return;
        };
        self.cea_rev = cea.revision();

        self.color_formats = ColorFormats::RGB444;
        if cea.caps() & cea_caps::YCRCB444 != 0 {
            self.color_formats |= ColorFormats::YCRCB444;
        }
        if cea.caps() & cea_caps::YCRCB422 != 0 {
            self.color_formats |= ColorFormats::YCRCB422;
        }

        let blocks = match cea.data_blocks() {
            Ok(blocks) => blocks,
            Err(err) => {
                debug!(error = %err, "skipping CEA capabilities");
                return;
            }
        };
        for db in blocks {
            if db.is_hdmi_vsdb() {
                self.parse_hdmi_vsdb(db);
            }
            if db.is_hdmi_forum_vsdb() {
                self.parse_hdmi_forum_vsdb(db);
            }
            if db.is_y420_capability_map() {
                self.parse_y420_capability_map(db);
            }
            if db.is_video_capability() {
                debug!(vcdb = db.byte(2), "CEA video capability");
                self.rgb_quant_range_selectable = db.byte(2) & 0x40 != 0;
            }
            if db.is_hdr_static_metadata() {
                self.hdr = Some(parse_hdr_static_metadata(db));
            }
        }
    }

    fn parse_hdmi_vsdb(&mut self, db: DataBlock<'_>) {
        let len = db.len();
        self.is_hdmi = true;
        if len >= 6 {
            self.dvi_dual = db.byte(6) & 1 != 0;
        }
        if len >= 7 {
            self.max_tmds_clock = u32::from(db.byte(7)) * 5000;
        }
        debug!(
            dvi_dual = self.dvi_dual,
            max_tmds_clock = self.max_tmds_clock,
            "HDMI VSDB"
        );

        if len >= 8 {
            let flags = db.byte(8);
            self.latency.present = [flags & 0x80 != 0, flags & 0x40 != 0];
            self.latency.video[0] = db.byte(9);
            self.latency.audio[0] = db.byte(10);
            self.latency.video[1] = db.byte(11);
            self.latency.audio[1] = db.byte(12);
        }

        self.bpc = 8;
        if len < 6 {
            return;
        }
        let dc = DeepColor::from_bits_truncate(db.byte(6));
        self.hdmi_dc_modes = dc & (DeepColor::DC_30 | DeepColor::DC_36 | DeepColor::DC_48);
        let bpc = if dc.contains(DeepColor::DC_48) {
            16
        } else if dc.contains(DeepColor::DC_36) {
            12
        } else if dc.contains(DeepColor::DC_30) {
            10
        } else {
            debug!("no deep color support");
            return;
        };
        self.bpc = bpc;
        debug!(bpc, y444 = dc.contains(DeepColor::Y444), "HDMI deep color");
        if !dc.contains(DeepColor::DC_36) {
            debug!("deep color sink lacks mandatory 36 bit support");
        }
    }

    fn parse_hdmi_forum_vsdb(&mut self, db: DataBlock<'_>) {
        self.has_hdmi_infoframe = true;
        let hdmi = &mut self.hdmi;

        if db.byte(6) & 0x80 != 0 {
            hdmi.scdc.supported = true;
            hdmi.scdc.read_request = db.byte(6) & 0x40 != 0;
        }

        if db.byte(5) != 0 {
            let max_tmds_clock = u32::from(db.byte(5)) * 5000;
            if max_tmds_clock > 340_000 {
                self.max_tmds_clock = max_tmds_clock;
                debug!(max_tmds_clock, "HF-VSDB TMDS clock");
            }
            if hdmi.scdc.supported {
                hdmi.scdc.scrambling = true;
                hdmi.scdc.scrambling_low_rates = db.byte(6) & 0x08 != 0;
            }
        }

        if db.byte(7) != 0 {
            hdmi.max_frl = FrlRate::from_code((db.byte(7) & 0xf0) >> 4);
            debug!(lanes = hdmi.max_frl.lanes, rate = hdmi.max_frl.rate_per_lane, "HDMI 2.1 sink");
            hdmi.dsc_cap = parse_dsc_caps(db);
        }

        hdmi.y420_dc_modes = Y420DeepColor::from_bits_truncate(db.byte(7));
    }

    fn parse_y420_capability_map(&mut self, db: DataBlock<'_>) {
        let map_len = db.len().saturating_sub(1);
        if map_len == 0 {
            // Every CEA mode may also be sent as 4:2:0.
            self.hdmi.y420_cmdb_map = u64::MAX;
            self.color_formats |= ColorFormats::YCRCB420;
            return;
        }
        if map_len > 8 {
            debug!(map_len, "clamping 4:2:0 capability map to 64 SVDs");
        }
        let map = (0..map_len.min(8))
            .fold(0u64, |map, i| map | u64::from(db.byte(2 + i)) << (8 * i));
        if map != 0 {
            self.color_formats |= ColorFormats::YCRCB420;
        }
        self.hdmi.y420_cmdb_map = map;
    }

    /// Audio delay (ms) the source should add so sound stays in sync with `mode`.
    pub fn av_sync_delay(&self, mode: &DisplayMode) -> u32 {
        let latency = &self.latency;
        if !latency.present[0] {
            return 0;
        }
        let i = usize::from(mode.is_interlaced() && latency.present[1]);
        let (a, v) = (latency.audio[i], latency.video[i]);
        if a == 255 || v == 255 {
            return 0;
        }
        let ms = |x: u8| {
            if x == 0 {
                0
            } else {
                (2 * (i32::from(x) - 1)).min(500)
            }
        };
        (ms(v) - ms(a)).max(0) as u32
    }
}

fn parse_dsc_caps(db: DataBlock<'_>) -> DscCaps {
    let flags = db.byte(11);
    let mut dsc = DscCaps {
        v_1p2: flags & 0x80 != 0,
        ..DscCaps::default()
    };
    if !dsc.v_1p2 {
        return dsc;
    }
    dsc.native_420 = flags & 0x40 != 0;
    dsc.all_bpp = flags & 0x08 != 0;
    dsc.bpc_supported = if flags & 0x04 != 0 {
        16
    } else if flags & 0x02 != 0 {
        12
    } else if flags & 0x01 != 0 {
        10
    } else {
        0
    };
    dsc.max_frl = FrlRate::from_code((db.byte(12) & 0xf0) >> 4);
    dsc.total_chunk_kbytes = db.byte(13) & 0x3f;
    (dsc.max_slices, dsc.clk_per_slice) = match db.byte(12) & 0x0f {
        1 => (1, 340),
        2 => (2, 340),
        3 => (4, 340),
        4 => (8, 340),
        5 => (8, 400),
        6 => (12, 400),
        7 => (16, 400),
        _ => (0, 0),
    };
    dsc
}

fn parse_hdr_static_metadata(db: DataBlock<'_>) -> HdrStaticMetadata {
    let len = db.len();
    let mut hdr = HdrStaticMetadata {
        eotf: db.byte(2) & 0x0f,
        metadata_type: db.byte(3) & 0x01,
        ..HdrStaticMetadata::default()
    };
    if len >= 4 {
        hdr.max_cll = db.byte(4);
    }
    if len >= 5 {
        hdr.max_fall = db.byte(5);
    }
    if len >= 6 {
        hdr.min_cll = db.byte(6);
    }
    hdr
}

/// A CEA short audio descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sad {
    pub format: u8,
    pub channels: u8,
    /// Supported sample rate bits.
    pub freq: u8,
    /// Format dependent: bit depths for LPCM, max bitrate for compressed formats.
    pub byte2: u8,
}

/// Short audio descriptors of the first audio data block. Empty when there is no CEA data
/// (or it predates revision 3); an error only when the block's layout is out of range.
pub fn short_audio_descriptors(blob: &EdidBlob) -> Result<Vec<Sad>> {
    let Some(cea) = find_cea(blob) else {
        debug!("no CEA extension found");
        return Ok(Vec::new());
    };
    if cea.revision() < 3 {
        debug!(revision = cea.revision(), "SADs require CEA revision 3");
        return Ok(Vec::new());
    }
    let Some(audio) = cea.data_blocks()?.find(|db| db.tag() == db_tag::AUDIO) else {
        return Ok(Vec::new());
    };
    Ok(audio
        .payload()
        .chunks_exact(3)
        .map(|sad| Sad {
            format: (sad[0] & 0x78) >> 3,
            channels: sad[0] & 0x07,
            freq: sad[1] & 0x7f,
            byte2: sad[2],
        })
        .collect())
}

/// Speaker allocation byte of the first well-formed speaker allocation data block.
pub fn speaker_allocation(blob: &EdidBlob) -> Result<Option<u8>> {
    let Some(cea) = find_cea(blob) else {
        return Ok(None);
    };
    if cea.revision() < 3 {
        return Ok(None);
    }
    Ok(cea
        .data_blocks()?
        .find(|db| db.tag() == db_tag::SPEAKER && db.len() == 3)
        .map(|db| db.byte(1)))
}

/// Whether the sink declares audio support, either through the basic audio bit or an audio
/// data block.
pub fn detect_monitor_audio(blob: &EdidBlob) -> bool {
    let Some(cea) = find_cea(blob) else {
        return false;
    };
    if cea.tag() == CEA_EXT && cea.caps() & cea_caps::BASIC_AUDIO != 0 {
        return true;
    }
    let Ok(blocks) = cea.data_blocks() else {
        return false;
    };
    let mut has_audio = false;
    for db in blocks.filter(|db| db.tag() == db_tag::AUDIO) {
        has_audio = true;
        for sad in db.payload().chunks_exact(3) {
            debug!(format = (sad[0] >> 3) & 0x0f, "CEA audio format");
        }
    }
    has_audio
}

/// Whether the sink is an HDMI sink rather than DVI.
pub fn detect_hdmi_monitor(blob: &EdidBlob) -> bool {
    find_cea(blob)
        .and_then(|cea| cea.data_blocks().ok())
        .is_some_and(|mut blocks| blocks.any(|db| db.is_hdmi_vsdb()))
}

/// RGB quantization range a source should assume before the sink says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbQuantRange {
    Full,
    Limited,
}

/// CE modes (every VIC except 640x480) default to limited range; IT modes to full range.
pub fn default_rgb_quant_range(mode: &DisplayMode) -> RgbQuantRange {
    match match_cea_mode(mode) {
        Some(vic) if vic > 1 => RgbQuantRange::Limited,
        _ => RgbQuantRange::Full,
    }
}
