//! Display mode value type shared by every decoder path.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Sync polarity, scan and stereo layout flags of a [`DisplayMode`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u32 {
        const PHSYNC = 1 << 0;
        const NHSYNC = 1 << 1;
        const PVSYNC = 1 << 2;
        const NVSYNC = 1 << 3;
        const INTERLACE = 1 << 4;
        const DBLSCAN = 1 << 5;
        const CSYNC = 1 << 6;
        const DBLCLK = 1 << 12;
        const STEREO_FRAME_PACKING = 1 << 14;
        const STEREO_TOP_AND_BOTTOM = 1 << 15;
        const STEREO_SIDE_BY_SIDE_HALF = 1 << 16;
    }
}

impl ModeFlags {
    /// Every stereo (3D) layout bit.
    pub const STEREO_MASK: Self = Self::STEREO_FRAME_PACKING
        .union(Self::STEREO_TOP_AND_BOTTOM)
        .union(Self::STEREO_SIDE_BY_SIDE_HALF);
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ModeType: u8 {
        const PREFERRED = 1 << 0;
        const DRIVER = 1 << 1;
    }
}

bitflags! {
    /// Which parts of two modes [`DisplayMode::matches`] compares.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct MatchFlags: u8 {
        const TIMINGS = 1 << 0;
        const CLOCK = 1 << 1;
        const FLAGS = 1 << 2;
        const STEREO_FLAGS = 1 << 3;
        const ASPECT_RATIO = 1 << 4;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PictureAspect {
    #[default]
    None,
    Aspect4_3,
    Aspect16_9,
    Aspect64_27,
    Aspect256_135,
}

/// One video timing. All horizontal values are in pixels, vertical values in lines and the
/// pixel clock in kHz.
///
/// Modes are plain values: decoders create them, the aggregator owns them, and nothing points
/// back into the EDID they came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub clock: u32,
    pub hdisplay: u16,
    pub hsync_start: u16,
    pub hsync_end: u16,
    pub htotal: u16,
    pub vdisplay: u16,
    pub vsync_start: u16,
    pub vsync_end: u16,
    pub vtotal: u16,
    pub flags: ModeFlags,
    pub picture_aspect: PictureAspect,
    pub mode_type: ModeType,
    pub width_mm: u16,
    pub height_mm: u16,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            clock: 0,
            hdisplay: 0,
            hsync_start: 0,
            hsync_end: 0,
            htotal: 0,
            vdisplay: 0,
            vsync_start: 0,
            vsync_end: 0,
            vtotal: 0,
            flags: ModeFlags::empty(),
            picture_aspect: PictureAspect::None,
            mode_type: ModeType::DRIVER,
            width_mm: 0,
            height_mm: 0,
        }
    }
}

impl DisplayMode {
    /// Mode name in the conventional `WxH` form, with an `i` suffix for interlaced modes.
    pub fn name(&self) -> String {
        let suffix = if self.is_interlaced() { "i" } else { "" };
        format!("{}x{}{}", self.hdisplay, self.vdisplay, suffix)
    }

    pub fn is_interlaced(&self) -> bool {
        self.flags.contains(ModeFlags::INTERLACE)
    }

    pub fn is_preferred(&self) -> bool {
        self.mode_type.contains(ModeType::PREFERRED)
    }

    pub fn set_preferred(&mut self, preferred: bool) {
        self.mode_type.set(ModeType::PREFERRED, preferred);
    }

    /// Vertical refresh rate in Hz, rounded to the nearest integer.
    ///
    /// Interlaced modes report the field rate; doublescan halves the result.
    pub fn vrefresh(&self) -> u32 {
        if self.htotal == 0 || self.vtotal == 0 {
            return 0;
        }

        let mut num = u64::from(self.clock);
        let mut den = u64::from(self.htotal) * u64::from(self.vtotal);
        if self.flags.contains(ModeFlags::INTERLACE) {
            num *= 2;
        }
        if self.flags.contains(ModeFlags::DBLSCAN) {
            den *= 2;
        }

        ((num * 1000 + den / 2) / den) as u32
    }

    /// Horizontal sync rate in kHz, rounded to the nearest integer.
    pub fn hsync_khz(&self) -> u32 {
        if self.htotal == 0 {
            return 0;
        }
        let htotal = u32::from(self.htotal);
        (self.clock + htotal / 2) / htotal
    }

    /// Active area in pixels.
    pub fn area(&self) -> u32 {
        u32::from(self.hdisplay) * u32::from(self.vdisplay)
    }

    /// True when the blanking intervals are exactly the CVT reduced-blanking constants.
    pub fn is_reduced_blanking(&self) -> bool {
        i32::from(self.htotal) - i32::from(self.hdisplay) == 160
            && i32::from(self.hsync_end) - i32::from(self.hdisplay) == 80
            && i32::from(self.hsync_end) - i32::from(self.hsync_start) == 32
            && i32::from(self.vsync_start) - i32::from(self.vdisplay) == 3
    }

    pub fn matches(&self, other: &DisplayMode, what: MatchFlags) -> bool {
        if what.contains(MatchFlags::TIMINGS) && !self.timings_equal(other) {
            return false;
        }
        if what.contains(MatchFlags::CLOCK) && self.clock != other.clock {
            return false;
        }
        if what.contains(MatchFlags::FLAGS)
            && self.flags.difference(ModeFlags::STEREO_MASK)
                != other.flags.difference(ModeFlags::STEREO_MASK)
        {
            return false;
        }
        if what.contains(MatchFlags::STEREO_FLAGS)
            && self.flags.intersection(ModeFlags::STEREO_MASK)
                != other.flags.intersection(ModeFlags::STEREO_MASK)
        {
            return false;
        }
        if what.contains(MatchFlags::ASPECT_RATIO) && self.picture_aspect != other.picture_aspect {
            return false;
        }
        true
    }

    fn timings_equal(&self, other: &DisplayMode) -> bool {
        self.hdisplay == other.hdisplay
            && self.hsync_start == other.hsync_start
            && self.hsync_end == other.hsync_end
            && self.htotal == other.htotal
            && self.vdisplay == other.vdisplay
            && self.vsync_start == other.vsync_start
            && self.vsync_end == other.vsync_end
            && self.vtotal == other.vtotal
    }

    /// Replace a GTF/CVT 1368x768 result with the 1366x768 panel size those formulas can't
    /// express (their horizontal granularity is 8 pixels).
    pub(crate) fn fixup_1366x768(&mut self) {
        if self.hdisplay == 1368 && self.vdisplay == 768 {
            self.hdisplay = 1366;
            self.hsync_start -= 1;
            self.hsync_end -= 1;
        }
    }
}

impl fmt::Display for DisplayMode {
    /// Prints an X11-style modeline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {}.{:03} {} {} {} {} {} {} {} {}",
            self.name(),
            self.clock / 1000,
            self.clock % 1000,
            self.hdisplay,
            self.hsync_start,
            self.hsync_end,
            self.htotal,
            self.vdisplay,
            self.vsync_start,
            self.vsync_end,
            self.vtotal,
        )?;
        for (flag, label) in [
            (ModeFlags::PHSYNC, "+hsync"),
            (ModeFlags::NHSYNC, "-hsync"),
            (ModeFlags::PVSYNC, "+vsync"),
            (ModeFlags::NVSYNC, "-vsync"),
            (ModeFlags::INTERLACE, "interlace"),
            (ModeFlags::DBLSCAN, "doublescan"),
            (ModeFlags::DBLCLK, "dblclk"),
        ] {
            if self.flags.contains(flag) {
                write!(f, " {label}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_1080p() -> DisplayMode {
        DisplayMode {
            clock: 148_500,
            hdisplay: 1920,
            hsync_start: 2008,
            hsync_end: 2052,
            htotal: 2200,
            vdisplay: 1080,
            vsync_start: 1084,
            vsync_end: 1089,
            vtotal: 1125,
            flags: ModeFlags::PHSYNC | ModeFlags::PVSYNC,
            ..DisplayMode::default()
        }
    }

    #[test]
    fn refresh_and_hsync_round_to_nearest() {
        let mode = mode_1080p();
        assert_eq!(mode.vrefresh(), 60);
        assert_eq!(mode.hsync_khz(), 68);
        assert_eq!(mode.name(), "1920x1080");
    }

    #[test]
    fn interlaced_refresh_counts_fields() {
        let mut mode = mode_1080p();
        mode.clock = 74_250;
        mode.flags |= ModeFlags::INTERLACE;
        assert_eq!(mode.vrefresh(), 60);
        assert_eq!(mode.name(), "1920x1080i");
    }

    #[test]
    fn zero_totals_do_not_divide() {
        let mode = DisplayMode::default();
        assert_eq!(mode.vrefresh(), 0);
        assert_eq!(mode.hsync_khz(), 0);
    }

    #[test]
    fn flag_match_ignores_stereo_layout() {
        let plain = mode_1080p();
        let mut stereo = plain;
        stereo.flags |= ModeFlags::STEREO_TOP_AND_BOTTOM;

        assert!(plain.matches(&stereo, MatchFlags::TIMINGS | MatchFlags::FLAGS));
        assert!(!plain.matches(&stereo, MatchFlags::STEREO_FLAGS));
    }

    #[test]
    fn modeline_formatting() {
        assert_eq!(
            mode_1080p().to_string(),
            "\"1920x1080\" 148.500 1920 2008 2052 2200 1080 1084 1089 1125 +hsync +vsync"
        );
    }
}
