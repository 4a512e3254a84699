//! Static timing tables: VESA DMT, CTA-861 VICs, HDMI VICs and the established timings.

mod cea;
mod dmt;
mod est;

pub use cea::{CEA_MODES_1, CEA_MODES_193, HDMI_MODES};
pub use dmt::DMT_MODES;
pub use est::{EST3_MODES, EST_MODES, EXTRA_MODES};

use crate::mode::DisplayMode;

/// Builds a table [`DisplayMode`] in a `const` context.
///
/// `mode!(clock, [hdisplay, hsync_start, hsync_end, htotal], [vdisplay, ..], FLAG | FLAG, Aspect)`
macro_rules! mode {
    (@aspect) => {
        $crate::mode::PictureAspect::None
    };
    (@aspect $aspect:ident) => {
        $crate::mode::PictureAspect::$aspect
    };
    (
        $clock:expr,
        [$hd:expr, $hss:expr, $hse:expr, $ht:expr],
        [$vd:expr, $vss:expr, $vse:expr, $vt:expr],
        $($flag:ident)|+
        $(, $aspect:ident)?
    ) => {
        $crate::mode::DisplayMode {
            clock: $clock,
            hdisplay: $hd,
            hsync_start: $hss,
            hsync_end: $hse,
            htotal: $ht,
            vdisplay: $vd,
            vsync_start: $vss,
            vsync_end: $vse,
            vtotal: $vt,
            flags: $crate::mode::ModeFlags::empty()$(.union($crate::mode::ModeFlags::$flag))+,
            picture_aspect: $crate::tables::mode!(@aspect $($aspect)?),
            mode_type: $crate::mode::ModeType::DRIVER,
            width_mm: 0,
            height_mm: 0,
        }
    };
}
pub(crate) use mode;

/// A size/refresh pair that still has to be resolved to full timings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MiniMode {
    pub w: u16,
    pub h: u16,
    pub refresh: u16,
    pub rb: bool,
}

impl MiniMode {
    pub const fn new(w: u16, h: u16, refresh: u16, rb: bool) -> Self {
        Self { w, h, refresh, rb }
    }
}

/// First DMT mode with the given size and refresh whose reduced-blanking classification is `rb`.
pub fn find_dmt(hsize: u16, vsize: u16, refresh: u32, rb: bool) -> Option<DisplayMode> {
    DMT_MODES
        .iter()
        .find(|m| {
            m.hdisplay == hsize
                && m.vdisplay == vsize
                && m.vrefresh() == refresh
                && m.is_reduced_blanking() == rb
        })
        .copied()
}

pub fn cea_mode_for_vic(vic: u8) -> Option<&'static DisplayMode> {
    match vic {
        1..=127 => CEA_MODES_1.get(usize::from(vic) - 1),
        193..=219 => CEA_MODES_193.get(usize::from(vic) - 193),
        _ => None,
    }
}

pub fn hdmi_mode_for_vic(vic: u8) -> Option<&'static DisplayMode> {
    match vic {
        1..=4 => HDMI_MODES.get(usize::from(vic) - 1),
        _ => None,
    }
}

/// Every defined CTA-861 VIC, in table order.
pub fn cea_vics() -> impl Iterator<Item = u8> {
    (1..=127u8).chain(193..=219)
}

/// Every defined HDMI VSDB VIC.
pub fn hdmi_vics() -> impl Iterator<Item = u8> {
    1..=4u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{ModeFlags, PictureAspect};

    #[test]
    fn vic_lookup_bounds() {
        assert!(cea_mode_for_vic(0).is_none());
        assert!(cea_mode_for_vic(128).is_none());
        assert!(cea_mode_for_vic(192).is_none());
        assert!(cea_mode_for_vic(220).is_none());
        assert!(cea_mode_for_vic(219).is_some());
        assert!(hdmi_mode_for_vic(5).is_none());
        assert_eq!(cea_vics().count(), 127 + 27);
    }

    #[test]
    fn vic_16_is_1080p60() {
        let mode = cea_mode_for_vic(16).unwrap();
        assert_eq!((mode.hdisplay, mode.vdisplay), (1920, 1080));
        assert_eq!(mode.clock, 148_500);
        assert_eq!(mode.vrefresh(), 60);
        assert_eq!(mode.picture_aspect, PictureAspect::Aspect16_9);
        assert_eq!(mode.flags, ModeFlags::PHSYNC | ModeFlags::PVSYNC);
    }

    #[test]
    fn dmt_lookup_respects_reduced_blanking() {
        let normal = find_dmt(1920, 1200, 60, false).unwrap();
        assert_eq!(normal.clock, 193_250);
        let rb = find_dmt(1920, 1200, 60, true).unwrap();
        assert_eq!(rb.clock, 154_000);
        assert!(find_dmt(1234, 567, 60, false).is_none());
    }

    #[test]
    fn established_tables_have_expected_shape() {
        assert_eq!(EST_MODES.len(), 17);
        assert_eq!(EST3_MODES.len(), 44);
        assert_eq!((EST_MODES[5].hdisplay, EST_MODES[5].vrefresh()), (640, 60));
    }
}
