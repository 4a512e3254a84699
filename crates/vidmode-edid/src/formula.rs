//! VESA CVT and GTF timing synthesis.
//!
//! Integer-only implementations. Results are bit-for-bit stable so that synthesized modes can be
//! deduplicated against table modes and against each other.

use crate::mode::{DisplayMode, ModeFlags};

/// Coefficients of the GTF blanking formula. `two_c` and `two_j` are stored doubled, matching
/// the encoding used by the secondary-GTF range descriptor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GtfParams {
    pub m: u32,
    pub two_c: u32,
    pub k: u32,
    pub two_j: u32,
}

impl GtfParams {
    /// The default GTF curve (M=600, C=40, K=128, J=20).
    pub const DEFAULT: Self = Self {
        m: 600,
        two_c: 80,
        k: 128,
        two_j: 40,
    };
}

impl Default for GtfParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const CVT_MARGIN_PERMILLE: i64 = 18;
const CVT_H_GRANULARITY: i64 = 8;
const CVT_MIN_V_PORCH: i64 = 3;
const CVT_MIN_VSYNC_BP_US: i64 = 550;
const CVT_HSYNC_PERCENT: i64 = 8;
const CVT_MIN_HBLANK_PERCENT: i64 = 20;
const CVT_CLOCK_STEP_KHZ: i64 = 250;
const CVT_RB_MIN_VBLANK_US: i64 = 460;
const CVT_RB_H_SYNC: i64 = 32;
const CVT_RB_H_BLANK: i64 = 160;
const CVT_RB_VFPORCH: i64 = 3;
const CVT_RB_MIN_VBPORCH: i64 = 6;

/// Vertical sync width implied by the aspect ratio of the requested size.
fn cvt_vsync_width(hdisplay: i64, vdisplay: i64) -> i64 {
    if vdisplay % 3 == 0 && vdisplay * 4 / 3 == hdisplay {
        4
    } else if vdisplay % 9 == 0 && vdisplay * 16 / 9 == hdisplay {
        5
    } else if vdisplay % 10 == 0 && vdisplay * 16 / 10 == hdisplay {
        6
    } else if vdisplay % 4 == 0 && vdisplay * 5 / 4 == hdisplay {
        7
    } else if vdisplay % 9 == 0 && vdisplay * 15 / 9 == hdisplay {
        7
    } else {
        10
    }
}

/// Synthesizes a VESA CVT mode. A refresh of 0 means 60 Hz.
///
/// The horizontal size is rounded down to the 8-pixel CVT granularity. Returns `None` when the
/// inputs are degenerate or the result does not fit the mode's field widths.
pub fn cvt_mode(
    hdisplay: u16,
    vdisplay: u16,
    vrefresh: u32,
    reduced: bool,
    margins: bool,
    interlaced: bool,
) -> Option<DisplayMode> {
    if hdisplay == 0 || vdisplay == 0 {
        return None;
    }

    let vrefresh = if vrefresh == 0 { 60 } else { i64::from(vrefresh) };
    let hd = i64::from(hdisplay);
    let vd = i64::from(vdisplay);
    let vfield_rate = if interlaced { vrefresh * 2 } else { vrefresh };
    let interlace = i64::from(interlaced);

    let hdisplay_rnd = hd - hd % CVT_H_GRANULARITY;
    let hmargin = if margins {
        let m = hdisplay_rnd * CVT_MARGIN_PERMILLE / 1000;
        m - m % CVT_H_GRANULARITY
    } else {
        0
    };
    let active_h = hdisplay_rnd + 2 * hmargin;

    let vdisplay_rnd = if interlaced { vd / 2 } else { vd };
    let vmargin = if margins {
        vdisplay_rnd * CVT_MARGIN_PERMILLE / 1000
    } else {
        0
    };
    let active_v = vd + 2 * vmargin;
    let vsync = cvt_vsync_width(hd, vd);

    let (htotal, hsync_start, hsync_end, vtotal, hperiod) = if !reduced {
        // Estimated horizontal period in units of 1/2 ns.
        let num = 1_000_000_000 - CVT_MIN_VSYNC_BP_US * 1000 * vfield_rate;
        let den = ((vdisplay_rnd + 2 * vmargin + CVT_MIN_V_PORCH) * 2 + interlace) * vfield_rate;
        if num <= 0 || den <= 0 {
            return None;
        }
        let hperiod = num * 2 / den;
        if hperiod <= 0 {
            return None;
        }

        let vsync_bp = (CVT_MIN_VSYNC_BP_US * 1000 / hperiod + 1).max(vsync + CVT_MIN_V_PORCH);
        let vtotal = vdisplay_rnd + 2 * vmargin + vsync_bp + CVT_MIN_V_PORCH;

        // C' and M' of the default blanking formula.
        let m_prime = 600 * 128 / 256;
        let c_prime = (40 - 20) * 128 / 256 + 20;
        let hblank_percent =
            (c_prime * 1000 - m_prime * hperiod / 1000).max(CVT_MIN_HBLANK_PERCENT * 1000);

        let mut hblank = active_h * hblank_percent / (100 * 1000 - hblank_percent);
        hblank -= hblank % (2 * CVT_H_GRANULARITY);

        let htotal = active_h + hblank;
        let hsync_end = active_h + hblank / 2;
        let mut hsync_start = hsync_end - htotal * CVT_HSYNC_PERCENT / 100;
        hsync_start += CVT_H_GRANULARITY - hsync_start % CVT_H_GRANULARITY;

        (htotal, hsync_start, hsync_end, vtotal, hperiod)
    } else {
        let num = 1_000_000_000 - CVT_RB_MIN_VBLANK_US * 1000 * vfield_rate;
        let den = (vdisplay_rnd + 2 * vmargin) * vfield_rate;
        if num <= 0 || den <= 0 {
            return None;
        }
        let hperiod = num / den;
        if hperiod <= 0 {
            return None;
        }

        let vbi_lines = (CVT_RB_MIN_VBLANK_US * 1000 / hperiod + 1)
            .max(CVT_RB_VFPORCH + vsync + CVT_RB_MIN_VBPORCH);
        let vtotal = vdisplay_rnd + 2 * vmargin + vbi_lines;

        let htotal = active_h + CVT_RB_H_BLANK;
        let hsync_end = active_h + CVT_RB_H_BLANK / 2;
        let hsync_start = hsync_end - CVT_RB_H_SYNC;

        (htotal, hsync_start, hsync_end, vtotal, hperiod)
    };

    let mut clock = htotal * 1_000_000 / hperiod;
    clock -= clock % CVT_CLOCK_STEP_KHZ;

    let vsync_start = active_v + CVT_MIN_V_PORCH;
    let vsync_end = vsync_start + vsync;
    let vtotal = if interlaced { vtotal * 2 } else { vtotal };

    let mut flags = if reduced {
        ModeFlags::PHSYNC | ModeFlags::NVSYNC
    } else {
        ModeFlags::NHSYNC | ModeFlags::PVSYNC
    };
    if interlaced {
        flags |= ModeFlags::INTERLACE;
    }

    Some(DisplayMode {
        clock: u32::try_from(clock).ok()?,
        hdisplay: u16::try_from(active_h).ok()?,
        hsync_start: u16::try_from(hsync_start).ok()?,
        hsync_end: u16::try_from(hsync_end).ok()?,
        htotal: u16::try_from(htotal).ok()?,
        vdisplay: u16::try_from(active_v).ok()?,
        vsync_start: u16::try_from(vsync_start).ok()?,
        vsync_end: u16::try_from(vsync_end).ok()?,
        vtotal: u16::try_from(vtotal).ok()?,
        flags,
        ..DisplayMode::default()
    })
}

/// Synthesizes a GTF mode with the default blanking coefficients.
pub fn gtf_mode(
    hdisplay: u16,
    vdisplay: u16,
    vrefresh: u32,
    margins: bool,
    interlaced: bool,
) -> Option<DisplayMode> {
    gtf_mode_secondary(
        hdisplay,
        vdisplay,
        vrefresh,
        margins,
        interlaced,
        GtfParams::DEFAULT,
    )
}

const GTF_MARGIN_PERMILLE: i64 = 18;
const GTF_CELL_GRAN: i64 = 8;
const GTF_MIN_V_PORCH: i64 = 1;
const GTF_V_SYNC_RQD: i64 = 3;
const GTF_H_SYNC_PERCENT: i64 = 8;
const GTF_MIN_VSYNC_BP_US: i64 = 550;

/// Synthesizes a GTF mode using explicit blanking coefficients (secondary GTF curve).
pub fn gtf_mode_secondary(
    hdisplay: u16,
    vdisplay: u16,
    vrefresh: u32,
    margins: bool,
    interlaced: bool,
    params: GtfParams,
) -> Option<DisplayMode> {
    if hdisplay == 0 || vdisplay == 0 || vrefresh == 0 {
        return None;
    }

    let hd = i64::from(hdisplay);
    let vd = i64::from(vdisplay);
    let vrefresh = i64::from(vrefresh);
    let interlace = i64::from(interlaced);

    let hdisplay_rnd = (hd + GTF_CELL_GRAN / 2) / GTF_CELL_GRAN * GTF_CELL_GRAN;
    let vdisplay_rnd = if interlaced { vd / 2 } else { vd };
    let vfield_rate = if interlaced { vrefresh * 2 } else { vrefresh };

    let top_margin = if margins {
        (vdisplay_rnd * GTF_MARGIN_PERMILLE + 500) / 1000
    } else {
        0
    };

    let tmp1 = (1_000_000 - GTF_MIN_VSYNC_BP_US * vfield_rate) / 500;
    let tmp2 = (vdisplay_rnd + 2 * top_margin + GTF_MIN_V_PORCH) * 2 + interlace;
    if tmp1 <= 0 {
        return None;
    }
    let hfreq_est = tmp2 * 1000 * vfield_rate / tmp1;
    if hfreq_est <= 0 {
        return None;
    }

    let vsync_bp = (GTF_MIN_VSYNC_BP_US * hfreq_est / 1000 + 500) / 1000;
    let vtotal_lines = vdisplay_rnd + 2 * top_margin + vsync_bp + GTF_MIN_V_PORCH;

    let left_margin = if margins {
        (hdisplay_rnd * GTF_MARGIN_PERMILLE + 500) / 1000
    } else {
        0
    };
    let total_active = hdisplay_rnd + 2 * left_margin;

    let m = i64::from(params.m);
    let two_c = i64::from(params.two_c);
    let k = i64::from(params.k);
    let two_j = i64::from(params.two_j);
    let c_prime = ((two_c - two_j) * k / 256 + two_j) / 2;
    let m_prime = k * m / 256;

    let ideal_duty = c_prime * 1000 - m_prime * 1_000_000 / hfreq_est;
    if ideal_duty >= 100_000 {
        return None;
    }
    let hblank = total_active * ideal_duty / (100_000 - ideal_duty);
    let hblank = (hblank + GTF_CELL_GRAN) / (2 * GTF_CELL_GRAN) * (2 * GTF_CELL_GRAN);

    let total_pixels = total_active + hblank;
    let clock = total_pixels * hfreq_est / 1000;

    let hsync = total_pixels * GTF_H_SYNC_PERCENT / 100;
    let hsync = (hsync + GTF_CELL_GRAN / 2) / GTF_CELL_GRAN * GTF_CELL_GRAN;
    let hfront_porch = hblank / 2 - hsync;

    let vtotal = if interlaced {
        vtotal_lines * 2
    } else {
        vtotal_lines
    };

    let mut flags = if params == GtfParams::DEFAULT {
        ModeFlags::NHSYNC | ModeFlags::PVSYNC
    } else {
        ModeFlags::PHSYNC | ModeFlags::NVSYNC
    };
    if interlaced {
        flags |= ModeFlags::INTERLACE;
    }

    Some(DisplayMode {
        clock: u32::try_from(clock).ok()?,
        hdisplay: u16::try_from(hdisplay_rnd).ok()?,
        hsync_start: u16::try_from(hdisplay_rnd + hfront_porch).ok()?,
        hsync_end: u16::try_from(hdisplay_rnd + hfront_porch + hsync).ok()?,
        htotal: u16::try_from(total_pixels).ok()?,
        vdisplay: u16::try_from(vdisplay_rnd).ok()?,
        vsync_start: u16::try_from(vdisplay_rnd + GTF_MIN_V_PORCH).ok()?,
        vsync_end: u16::try_from(vdisplay_rnd + GTF_MIN_V_PORCH + GTF_V_SYNC_RQD).ok()?,
        vtotal: u16::try_from(vtotal).ok()?,
        flags,
        ..DisplayMode::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::find_dmt;

    fn timings(mode: &DisplayMode) -> ([u16; 4], [u16; 4]) {
        (
            [mode.hdisplay, mode.hsync_start, mode.hsync_end, mode.htotal],
            [mode.vdisplay, mode.vsync_start, mode.vsync_end, mode.vtotal],
        )
    }

    #[test]
    fn cvt_1080p60() {
        let mode = cvt_mode(1920, 1080, 60, false, false, false).unwrap();
        assert_eq!(mode.clock, 173_000);
        assert_eq!(
            timings(&mode),
            ([1920, 2048, 2248, 2576], [1080, 1083, 1088, 1120])
        );
        assert_eq!(mode.flags, ModeFlags::NHSYNC | ModeFlags::PVSYNC);
        assert!(!mode.is_reduced_blanking());
    }

    #[test]
    fn cvt_agrees_with_cvt_derived_dmt_entries() {
        for (w, h, rb) in [
            (1920, 1200, false),
            (1920, 1200, true),
            (1680, 1050, false),
            (1280, 800, false),
            (1280, 800, true),
        ] {
            let cvt = cvt_mode(w, h, 60, rb, false, false).unwrap();
            let dmt = find_dmt(w, h, 60, rb).unwrap();
            assert_eq!(timings(&cvt), timings(&dmt), "{w}x{h} rb={rb}");
            assert_eq!(cvt.clock, dmt.clock, "{w}x{h} rb={rb}");
        }
    }

    #[test]
    fn cvt_reduced_blanking_is_classified_as_such() {
        let mode = cvt_mode(1920, 1200, 60, true, false, false).unwrap();
        assert_eq!(mode.clock, 154_000);
        assert!(mode.is_reduced_blanking());
        assert_eq!(mode.flags, ModeFlags::PHSYNC | ModeFlags::NVSYNC);
    }

    #[test]
    fn cvt_rounds_width_down_to_granularity() {
        let mode = cvt_mode(1366, 768, 60, false, false, false).unwrap();
        assert_eq!(mode.hdisplay, 1360);
        assert_eq!(mode.clock, 84_750);
    }

    #[test]
    fn cvt_interlaced_doubles_vtotal() {
        let mode = cvt_mode(1920, 1080, 60, false, false, true).unwrap();
        assert_eq!(mode.clock, 179_750);
        assert_eq!(mode.vtotal, 1164);
        assert!(mode.is_interlaced());
    }

    #[test]
    fn cvt_margins_widen_active_area() {
        let mode = cvt_mode(1024, 768, 60, false, true, false).unwrap();
        assert_eq!(
            timings(&mode),
            ([1056, 1112, 1216, 1376], [794, 797, 801, 825])
        );
        assert_eq!(mode.clock, 68_000);
    }

    #[test]
    fn cvt_zero_refresh_means_sixty() {
        assert_eq!(
            cvt_mode(1920, 1080, 0, false, false, false),
            cvt_mode(1920, 1080, 60, false, false, false)
        );
        assert!(cvt_mode(0, 1080, 60, false, false, false).is_none());
    }

    #[test]
    fn gtf_640x480() {
        let mode = gtf_mode(640, 480, 60, false, false).unwrap();
        assert_eq!(mode.clock, 23_875);
        assert_eq!(timings(&mode), ([640, 656, 720, 800], [480, 481, 484, 497]));
        assert_eq!(mode.flags, ModeFlags::NHSYNC | ModeFlags::PVSYNC);
    }

    #[test]
    fn gtf_1024x768() {
        let mode = gtf_mode(1024, 768, 60, false, false).unwrap();
        assert_eq!(mode.clock, 64_127);
        assert_eq!(
            timings(&mode),
            ([1024, 1080, 1184, 1344], [768, 769, 772, 795])
        );
    }

    #[test]
    fn gtf_rounds_width_to_nearest_cell() {
        let mode = gtf_mode(1366, 768, 60, false, false).unwrap();
        assert_eq!(mode.hdisplay, 1368);
        assert_eq!(mode.clock, 85_885);
    }

    #[test]
    fn gtf_custom_curve_flips_polarity() {
        let params = GtfParams {
            m: 600,
            two_c: 80,
            k: 128,
            two_j: 30,
        };
        let mode = gtf_mode_secondary(1024, 768, 60, false, false, params).unwrap();
        assert_eq!(mode.flags, ModeFlags::PHSYNC | ModeFlags::NVSYNC);
    }
}
