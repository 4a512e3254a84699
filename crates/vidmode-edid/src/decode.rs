//! Base block timing decoders: detailed, CVT 3-byte, standard, established and range-inferred
//! modes.
//!
//! Every decoder appends to a [`ModeList`]; some consult what is already there to avoid
//! duplicates, so the call order in the parser matters.

use tracing::debug;

use crate::blob::{features, EdidBlob};
use crate::cea;
use crate::descriptor::{
    self, is_display_descriptor, tag, DetailedMisc, DetailedTiming, RangeKind, RangeLimits,
    RawDescriptor,
};
use crate::formula::{cvt_mode, gtf_mode, gtf_mode_secondary, GtfParams};
use crate::mode::{DisplayMode, ModeFlags};
use crate::quirks::Quirks;
use crate::tables::{find_dmt, DMT_MODES, EST3_MODES, EST_MODES, EXTRA_MODES};

/// Insertion-ordered accumulator for decoded modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeList {
    modes: Vec<DisplayMode>,
}

impl ModeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mode: DisplayMode) {
        self.modes.push(mode);
    }

    pub fn extend(&mut self, modes: impl IntoIterator<Item = DisplayMode>) {
        self.modes.extend(modes);
    }

    pub fn as_slice(&self) -> &[DisplayMode] {
        &self.modes
    }

    pub fn as_mut_slice(&mut self) -> &mut [DisplayMode] {
        &mut self.modes
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayMode> {
        self.modes.iter()
    }

    pub fn into_vec(self) -> Vec<DisplayMode> {
        self.modes
    }

    /// True if a mode with the same active size and refresh rate is already present.
    pub fn has_size_and_refresh(&self, hdisplay: u16, vdisplay: u16, vrefresh: u32) -> bool {
        self.modes
            .iter()
            .any(|m| m.hdisplay == hdisplay && m.vdisplay == vdisplay && m.vrefresh() == vrefresh)
    }

    /// An inferred mode is only worth adding if it is new and no larger than something the
    /// monitor already advertises.
    fn accepts_inferred(&self, mode: &DisplayMode) -> bool {
        if self.has_size_and_refresh(mode.hdisplay, mode.vdisplay, mode.vrefresh()) {
            return false;
        }
        self.modes
            .iter()
            .any(|m| mode.hdisplay <= m.hdisplay && mode.vdisplay <= m.vdisplay)
    }
}

/// How the monitor expects unknown standard timings to be synthesized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimingLevel {
    Dmt,
    Gtf,
    Gtf2,
    Cvt,
}

/// Facts about the monitor every timing decoder needs, computed once per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingContext {
    pub version: u8,
    pub revision: u8,
    pub level: TimingLevel,
    pub supports_rb: bool,
    /// Start frequency (kHz) and coefficients of the secondary GTF curve.
    pub gtf2: Option<(u32, GtfParams)>,
    pub width_cm: u8,
    pub height_cm: u8,
    /// The first detailed timing is the preferred mode.
    pub first_detailed_preferred: bool,
}

impl TimingContext {
    pub fn new(blob: &EdidBlob) -> Self {
        let revision = blob.revision();
        let ranges: Vec<&RawDescriptor> = blob
            .detailed_blocks()
            .into_iter()
            .filter(|d| is_display_descriptor(d, tag::MONITOR_RANGE))
            .collect();

        // The last secondary-GTF descriptor wins.
        let gtf2 = ranges
            .iter()
            .filter_map(|d| RangeLimits::unpack(d, revision))
            .filter_map(|r| r.gtf2)
            .last();

        let supports_rb = if revision >= 4 {
            ranges.iter().any(|d| RangeLimits::cvt_supports_rb(d))
        } else {
            blob.is_digital()
        };

        let default_gtf = blob.features() & features::DEFAULT_GTF != 0;
        let level = if revision >= 2 {
            if revision >= 4 && default_gtf {
                TimingLevel::Cvt
            } else if gtf2.map_or(false, |(hbreak, _)| hbreak != 0) {
                TimingLevel::Gtf2
            } else if default_gtf {
                TimingLevel::Gtf
            } else {
                TimingLevel::Dmt
            }
        } else {
            TimingLevel::Dmt
        };

        let first_detailed_preferred = blob.version_greater(1, 3)
            || blob.features() & features::PREFERRED_TIMING != 0;

        Self {
            version: blob.version(),
            revision,
            level,
            supports_rb,
            gtf2,
            width_cm: blob.width_cm(),
            height_cm: blob.height_cm(),
            first_detailed_preferred,
        }
    }

    fn version_greater(&self, version: u8, revision: u8) -> bool {
        self.version > version || (self.version == version && self.revision > revision)
    }

    fn mode_in_range(&self, mode: &DisplayMode, range: &RangeLimits) -> bool {
        let hsync = mode.hsync_khz();
        if hsync < u32::from(range.min_hfreq_khz) || hsync > u32::from(range.max_hfreq_khz) {
            return false;
        }
        let vrefresh = mode.vrefresh();
        if vrefresh < u32::from(range.min_vfreq) || vrefresh > u32::from(range.max_vfreq) {
            return false;
        }
        if range.max_clock_khz != 0 && mode.clock > range.max_clock_khz {
            return false;
        }
        if range.max_hactive != 0 && u32::from(mode.hdisplay) > range.max_hactive {
            return false;
        }
        !(mode.is_reduced_blanking() && !self.supports_rb)
    }
}

/// CEA content with these (width, frame height) pairs is sometimes described by its field
/// height in detailed timings.
const CEA_INTERLACED: [(u16, u16); 7] = [
    (1920, 1080),
    (720, 480),
    (1440, 480),
    (2880, 480),
    (720, 576),
    (1440, 576),
    (2880, 576),
];

/// Clock forced by [`Quirks::CLOCK_135_TOO_HIGH`], in 10 kHz units.
const CLOCK_135_QUIRK: u16 = 1088;

/// Decodes one detailed timing descriptor. Display descriptors and malformed timings yield
/// `None`.
pub fn decode_detailed(
    d: &RawDescriptor,
    ctx: &TimingContext,
    quirks: Quirks,
) -> Option<DisplayMode> {
    let t = DetailedTiming::unpack(d)?;

    if t.hactive < 64 || t.vactive < 64 {
        return None;
    }
    if t.misc.contains(DetailedMisc::STEREO) {
        debug!(hactive = t.hactive, vactive = t.vactive, "stereo mode not supported");
        return None;
    }
    if !t.misc.intersects(DetailedMisc::SYNC_SEPARATE) {
        debug!(hactive = t.hactive, vactive = t.vactive, "composite sync not supported");
    }
    if t.hsync_width == 0 || t.vsync_width == 0 {
        debug!(
            hsync_width = t.hsync_width,
            vsync_width = t.vsync_width,
            "detailed timing has zero sync pulse width"
        );
        return None;
    }

    let mut mode = if quirks.contains(Quirks::FORCE_REDUCED_BLANKING) {
        cvt_mode(t.hactive, t.vactive, 60, true, false, false)?
    } else {
        detailed_timings(&t, quirks)
    };

    mode.width_mm = t.width_mm;
    mode.height_mm = t.height_mm;
    if quirks.contains(Quirks::DETAILED_IN_CM) {
        mode.width_mm = mode.width_mm.saturating_mul(10);
        mode.height_mm = mode.height_mm.saturating_mul(10);
    }
    if quirks.contains(Quirks::DETAILED_USE_MAXIMUM_SIZE) {
        mode.width_mm = u16::from(ctx.width_cm) * 10;
        mode.height_mm = u16::from(ctx.height_cm) * 10;
    }
    Some(mode)
}

fn detailed_timings(t: &DetailedTiming, quirks: Quirks) -> DisplayMode {
    let pixel_clock = if quirks.contains(Quirks::CLOCK_135_TOO_HIGH) {
        CLOCK_135_QUIRK
    } else {
        t.pixel_clock
    };

    let hsync_start = t.hactive + t.hsync_offset;
    let hsync_end = hsync_start + t.hsync_width;
    let vsync_start = t.vactive + t.vsync_offset;
    let vsync_end = vsync_start + t.vsync_width;
    let mut mode = DisplayMode {
        clock: u32::from(pixel_clock) * 10,
        hdisplay: t.hactive,
        hsync_start,
        hsync_end,
        htotal: t.hactive + t.hblank,
        vdisplay: t.vactive,
        vsync_start,
        vsync_end,
        vtotal: t.vactive + t.vblank,
        ..DisplayMode::default()
    };

    // Some EDIDs have totals shorter than their own sync pulses.
    if mode.hsync_end > mode.htotal {
        mode.htotal = mode.hsync_end + 1;
    }
    if mode.vsync_end > mode.vtotal {
        mode.vtotal = mode.vsync_end + 1;
    }

    if t.misc.contains(DetailedMisc::INTERLACE) {
        if CEA_INTERLACED
            .iter()
            .any(|&(w, h)| mode.hdisplay == w && mode.vdisplay == h / 2)
        {
            mode.vdisplay *= 2;
            mode.vsync_start *= 2;
            mode.vsync_end *= 2;
            mode.vtotal = (mode.vtotal * 2) | 1;
        }
        mode.flags |= ModeFlags::INTERLACE;
    }

    let mut misc = t.misc;
    if quirks.contains(Quirks::DETAILED_SYNC_PP) {
        misc |= DetailedMisc::HSYNC_POSITIVE | DetailedMisc::VSYNC_POSITIVE;
    }
    mode.flags |= if misc.contains(DetailedMisc::HSYNC_POSITIVE) {
        ModeFlags::PHSYNC
    } else {
        ModeFlags::NHSYNC
    };
    mode.flags |= if misc.contains(DetailedMisc::VSYNC_POSITIVE) {
        ModeFlags::PVSYNC
    } else {
        ModeFlags::NVSYNC
    };
    mode
}

/// Detailed timings from the base block, then from CEA and VTB extensions. The first decoded
/// mode is marked preferred when the EDID says so, and clocks that land within rounding of a
/// CEA/HDMI mode are snapped to it.
pub fn add_detailed_modes(
    blob: &EdidBlob,
    ctx: &TimingContext,
    quirks: Quirks,
    modes: &mut ModeList,
) {
    let mut preferred = ctx.first_detailed_preferred;
    for d in blob.detailed_blocks() {
        if !descriptor::is_detailed_timing(d) {
            continue;
        }
        let Some(mut mode) = decode_detailed(d, ctx, quirks) else {
            continue;
        };
        if preferred {
            mode.set_preferred(true);
        }
        cea::fixup_detailed_clock(&mut mode);
        modes.push(mode);
        preferred = false;
    }
}

/// Modes from CVT 3-byte code descriptors (EDID 1.3 and later).
pub fn add_cvt_modes(blob: &EdidBlob, modes: &mut ModeList) {
    if !blob.version_greater(1, 2) {
        return;
    }
    for d in blob.detailed_blocks() {
        if !is_display_descriptor(d, tag::CVT_3BYTE) {
            continue;
        }
        for code in descriptor::cvt_codes(d) {
            for &rate in &code.rates {
                if let Some(mode) = cvt_mode(code.width, code.height, rate, false, false, false) {
                    modes.push(mode);
                }
            }
        }
    }
}

/// The three fill patterns that mark an unused standard timing slot.
fn is_unused_standard_code(code: [u8; 2]) -> bool {
    matches!(code, [0x00, 0x00] | [0x01, 0x01] | [0x20, 0x20])
}

/// Decodes one 2-byte standard timing code. Returns `None` for unused slots, for sizes already
/// present in `modes`, and when the monitor's timing level cannot synthesize the mode.
pub fn decode_standard(
    code: [u8; 2],
    ctx: &TimingContext,
    modes: &ModeList,
) -> Option<DisplayMode> {
    if is_unused_standard_code(code) {
        return None;
    }

    let mut hsize = u16::from(code[0]) * 8 + 248;
    let vrefresh = u32::from(code[1] & 0x3f) + 60;
    let mut vsize = match code[1] >> 6 {
        0 if ctx.revision < 3 => hsize,
        0 => hsize * 10 / 16,
        1 => hsize * 3 / 4,
        2 => hsize * 4 / 5,
        _ => hsize * 9 / 16,
    };

    // HDTV panels round 1366x768 up to whatever the aspect code can express.
    if vrefresh == 60 && matches!((hsize, vsize), (1360, 765) | (1368, 769)) {
        hsize = 1366;
        vsize = 768;
    }

    if modes.has_size_and_refresh(hsize, vsize, vrefresh) {
        return None;
    }

    if (hsize, vsize, vrefresh) == (1366, 768, 60) {
        let mut mode = cvt_mode(1366, 768, vrefresh, false, false, false)?;
        mode.hdisplay = 1366;
        mode.hsync_start = mode.hsync_start.saturating_sub(1);
        mode.hsync_end = mode.hsync_end.saturating_sub(1);
        return Some(mode);
    }

    if ctx.supports_rb {
        if let Some(mode) = find_dmt(hsize, vsize, vrefresh, true) {
            return Some(mode);
        }
    }
    if let Some(mode) = find_dmt(hsize, vsize, vrefresh, false) {
        return Some(mode);
    }

    match ctx.level {
        TimingLevel::Dmt => None,
        TimingLevel::Gtf => gtf_mode(hsize, vsize, vrefresh, false, false),
        TimingLevel::Gtf2 => {
            let mode = gtf_mode(hsize, vsize, vrefresh, false, false)?;
            match ctx.gtf2 {
                Some((hbreak, params)) if mode.hsync_khz() > hbreak => {
                    gtf_mode_secondary(hsize, vsize, vrefresh, false, false, params)
                }
                _ => Some(mode),
            }
        }
        TimingLevel::Cvt => cvt_mode(hsize, vsize, vrefresh, false, false, false),
    }
}

/// The eight base block standard timings, then the six extra codes of each 0xFA descriptor
/// (EDID 1.1 and later).
pub fn add_standard_modes(blob: &EdidBlob, ctx: &TimingContext, modes: &mut ModeList) {
    for code in blob.standard_timings() {
        if let Some(mode) = decode_standard(code, ctx, modes) {
            modes.push(mode);
        }
    }

    if !blob.version_greater(1, 0) {
        return;
    }
    for d in blob.detailed_blocks() {
        if !is_display_descriptor(d, tag::STD_MODES) {
            continue;
        }
        for code in descriptor::standard_codes(d) {
            if let Some(mode) = decode_standard(code, ctx, modes) {
                modes.push(mode);
            }
        }
    }
}

/// Modes from the established timings bitmap and, for EDID 1.1 and later, from established
/// timings III descriptors.
pub fn decode_established(blob: &EdidBlob) -> Vec<DisplayMode> {
    let [t1, t2, reserved] = blob.established_timings();
    let bits = u32::from(t1) | u32::from(t2) << 8 | u32::from(reserved & 0x80) << 9;
    let mut out: Vec<DisplayMode> = EST_MODES
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, mode)| *mode)
        .collect();

    if blob.version_greater(1, 0) {
        for d in blob.detailed_blocks() {
            if !is_display_descriptor(d, tag::EST_TIMINGS) {
                continue;
            }
            out.extend(
                descriptor::est3_indices(d, EST3_MODES.len())
                    .map(|m| EST3_MODES[m])
                    .filter_map(|m| find_dmt(m.w, m.h, u32::from(m.refresh), m.rb)),
            );
        }
    }
    out
}

pub fn add_established_modes(blob: &EdidBlob, modes: &mut ModeList) {
    modes.extend(decode_established(blob));
}

/// Modes implied by range descriptors on continuous-frequency monitors: DMT modes inside the
/// range, then GTF or CVT synthesized extras.
pub fn add_inferred_modes(blob: &EdidBlob, ctx: &TimingContext, modes: &mut ModeList) {
    if blob.features() & features::DEFAULT_GTF == 0 || !blob.version_greater(1, 0) {
        return;
    }

    for d in blob.detailed_blocks() {
        let Some(range) = RangeLimits::unpack(d, ctx.revision) else {
            continue;
        };

        for dmt in DMT_MODES.iter() {
            if ctx.mode_in_range(dmt, &range) && modes.accepts_inferred(dmt) {
                modes.push(*dmt);
            }
        }

        if !ctx.version_greater(1, 1) {
            continue;
        }
        match range.kind {
            RangeKind::DefaultGtf | RangeKind::SecondaryGtf => {
                add_extra_modes(ctx, &range, modes, |m| {
                    gtf_mode(m.w, m.h, u32::from(m.refresh), false, false)
                });
            }
            RangeKind::Cvt if ctx.version_greater(1, 3) => {
                let rb = ctx.supports_rb;
                add_extra_modes(ctx, &range, modes, |m| {
                    cvt_mode(m.w, m.h, u32::from(m.refresh), rb, false, false)
                });
            }
            _ => {}
        }
    }
}

/// Synthesizes each extra mode, stopping at the first the formula cannot produce.
fn add_extra_modes(
    ctx: &TimingContext,
    range: &RangeLimits,
    modes: &mut ModeList,
    synthesize: impl Fn(&crate::tables::MiniMode) -> Option<DisplayMode>,
) {
    for extra in EXTRA_MODES.iter() {
        let Some(mut mode) = synthesize(extra) else {
            return;
        };
        mode.fixup_1366x768();
        if ctx.mode_in_range(&mode, range) && modes.accepts_inferred(&mode) {
            modes.push(mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeType;

    fn ctx(revision: u8) -> TimingContext {
        TimingContext {
            version: 1,
            revision,
            level: TimingLevel::Dmt,
            supports_rb: false,
            gtf2: None,
            width_cm: 52,
            height_cm: 29,
            first_detailed_preferred: true,
        }
    }

    /// 1920x1080@60 CEA timing, 148.5 MHz, 531x299 mm, digital separate sync +h +v.
    fn dtd_1080p() -> RawDescriptor {
        [
            0x02, 0x3a, 0x80, 0x18, 0x71, 0x38, 0x2d, 0x40, 0x58, 0x2c, 0x45, 0x00, 0x13, 0x2b,
            0x21, 0x00, 0x00, 0x1e,
        ]
    }

    #[test]
    fn detailed_timing_builds_mode() {
        let mode = decode_detailed(&dtd_1080p(), &ctx(4), Quirks::empty()).unwrap();
        assert_eq!(mode.clock, 148_500);
        assert_eq!(
            [mode.hdisplay, mode.hsync_start, mode.hsync_end, mode.htotal],
            [1920, 2008, 2052, 2200]
        );
        assert_eq!(
            [mode.vdisplay, mode.vsync_start, mode.vsync_end, mode.vtotal],
            [1080, 1084, 1089, 1125]
        );
        assert_eq!(mode.flags, ModeFlags::PHSYNC | ModeFlags::PVSYNC);
        assert_eq!((mode.width_mm, mode.height_mm), (531, 299));
        assert_eq!(mode.mode_type, ModeType::DRIVER);
    }

    #[test]
    fn detailed_rejects_stereo_small_and_zero_sync() {
        let mut stereo = dtd_1080p();
        stereo[17] |= 0x20;
        assert!(decode_detailed(&stereo, &ctx(4), Quirks::empty()).is_none());

        let mut zero_sync = dtd_1080p();
        zero_sync[9] = 0;
        assert!(decode_detailed(&zero_sync, &ctx(4), Quirks::empty()).is_none());

        let mut tiny = dtd_1080p();
        tiny[2] = 32;
        tiny[4] &= 0x0f;
        assert!(decode_detailed(&tiny, &ctx(4), Quirks::empty()).is_none());
    }

    #[test]
    fn detailed_quirks() {
        let d = dtd_1080p();
        let mode = decode_detailed(&d, &ctx(4), Quirks::CLOCK_135_TOO_HIGH).unwrap();
        assert_eq!(mode.clock, 10_880);

        let mode = decode_detailed(&d, &ctx(4), Quirks::DETAILED_IN_CM).unwrap();
        assert_eq!((mode.width_mm, mode.height_mm), (5310, 2990));

        let mode = decode_detailed(&d, &ctx(4), Quirks::DETAILED_USE_MAXIMUM_SIZE).unwrap();
        assert_eq!((mode.width_mm, mode.height_mm), (520, 290));

        let mut negative = d;
        negative[17] = 0x18;
        let mode = decode_detailed(&negative, &ctx(4), Quirks::empty()).unwrap();
        assert_eq!(mode.flags, ModeFlags::NHSYNC | ModeFlags::NVSYNC);
        let mode = decode_detailed(&negative, &ctx(4), Quirks::DETAILED_SYNC_PP).unwrap();
        assert_eq!(mode.flags, ModeFlags::PHSYNC | ModeFlags::PVSYNC);

        let mode = decode_detailed(&d, &ctx(4), Quirks::FORCE_REDUCED_BLANKING).unwrap();
        assert!(mode.is_reduced_blanking());
        assert_eq!(mode.vrefresh(), 60);
        assert_eq!(mode.width_mm, 531);
    }

    #[test]
    fn interlaced_field_height_is_doubled() {
        // 1920x540 field, interlace bit set.
        let mut d = dtd_1080p();
        d[0..2].copy_from_slice(&7425u16.to_le_bytes());
        d[5] = 0x1c;
        d[6] = 0x16;
        d[7] = 0x20;
        d[10] = 0x25;
        d[17] |= 0x80;
        let mode = decode_detailed(&d, &ctx(4), Quirks::empty()).unwrap();
        assert!(mode.is_interlaced());
        assert_eq!(
            [mode.vdisplay, mode.vsync_start, mode.vsync_end, mode.vtotal],
            [1080, 1084, 1094, 1125]
        );
    }

    #[test]
    fn bogus_totals_are_extended_past_sync() {
        let mut d = dtd_1080p();
        // hblank 100 < hsync offset + width (132).
        d[3] = 100;
        d[4] &= 0xf0;
        let mode = decode_detailed(&d, &ctx(4), Quirks::empty()).unwrap();
        assert_eq!(mode.htotal, 2053);
    }

    #[test]
    fn standard_timing_aspect_and_fill_patterns() {
        let modes = ModeList::new();
        let c = ctx(4);
        for unused in [[0x00, 0x00], [0x01, 0x01], [0x20, 0x20]] {
            assert!(decode_standard(unused, &c, &modes).is_none());
        }
        // 1280x1024@60 (5:4).
        let mode = decode_standard([0x81, 0x80], &c, &modes).unwrap();
        assert_eq!((mode.hdisplay, mode.vdisplay, mode.vrefresh()), (1280, 1024, 60));
        // 1680x1050@60 (16:10) is a DMT mode.
        let mode = decode_standard([0xb3, 0x00], &c, &modes).unwrap();
        assert_eq!((mode.hdisplay, mode.vdisplay), (1680, 1050));
        // Aspect 0 on EDID 1.2 means 1:1.
        assert!(decode_standard([0x81, 0x00], &ctx(2), &modes).is_none());
    }

    #[test]
    fn standard_timing_skips_existing_size() {
        let mut modes = ModeList::new();
        modes.push(decode_detailed(&dtd_1080p(), &ctx(4), Quirks::empty()).unwrap());
        // 1920x1080@60.
        assert!(decode_standard([0xd1, 0xc0], &ctx(4), &modes).is_none());
    }

    #[test]
    fn standard_timing_hdtv_fixup() {
        // 1368 wide, 16:9 -> 1368x769, patched to 1366x768 via CVT.
        let mode = decode_standard([0x8c, 0xc0], &ctx(4), &ModeList::new()).unwrap();
        assert_eq!((mode.hdisplay, mode.vdisplay), (1366, 768));
        assert_eq!(mode.vrefresh(), 60);
    }

    #[test]
    fn standard_timing_falls_back_to_formula_by_level() {
        // 1152x720@60 is not a DMT mode.
        let code = [(1152 / 8 - 31) as u8, 0x00];
        let mut c = ctx(4);
        assert!(decode_standard(code, &c, &ModeList::new()).is_none());

        c.level = TimingLevel::Cvt;
        let cvt = decode_standard(code, &c, &ModeList::new()).unwrap();
        assert_eq!((cvt.hdisplay, cvt.vdisplay), (1152, 720));

        c.level = TimingLevel::Gtf;
        let gtf = decode_standard(code, &c, &ModeList::new()).unwrap();
        assert_ne!(gtf, cvt);
    }

    #[test]
    fn inferred_modes_must_fit_under_an_existing_mode() {
        let mut modes = ModeList::new();
        let big = find_dmt(1280, 1024, 60, false).unwrap();
        let small = find_dmt(1024, 768, 60, false).unwrap();
        let huge = find_dmt(1600, 1200, 60, false).unwrap();
        assert!(!modes.accepts_inferred(&small));
        modes.push(big);
        assert!(modes.accepts_inferred(&small));
        assert!(!modes.accepts_inferred(&big));
        assert!(!modes.accepts_inferred(&huge));
    }
}
