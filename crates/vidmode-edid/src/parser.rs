//! Top-level orchestration: validation, quirk lookup, display info and the ordered mode list.

use tracing::{debug, warn};

use crate::blob::{EdidBlob, EdidIdentity};
use crate::cea::{add_alternate_cea_modes, add_cea_modes};
use crate::config::ParserConfig;
use crate::decode::{
    add_cvt_modes, add_detailed_modes, add_established_modes, add_inferred_modes,
    add_standard_modes, ModeList, TimingContext,
};
use crate::error::Result;
use crate::ext::displayid_detailed_modes;
use crate::fetch::{read_edid, BlockSource};
use crate::info::{self, DisplayInfo, Sad};
use crate::mode::DisplayMode;
use crate::quirks::{self, Quirks};
use crate::tables::DMT_MODES;
use crate::validate::BlockValidator;

/// Everything decoded from one EDID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdid {
    /// The blob after header repair, with invalid extensions removed.
    pub blob: EdidBlob,
    pub identity: EdidIdentity,
    pub quirks: Quirks,
    pub info: DisplayInfo,
    /// Modes in decode priority order.
    pub modes: Vec<DisplayMode>,
    /// Some block needed repair or was dropped.
    pub corrupt: bool,
}

impl ParsedEdid {
    pub fn preferred_mode(&self) -> Option<&DisplayMode> {
        self.modes.iter().find(|m| m.is_preferred())
    }

    pub fn short_audio_descriptors(&self) -> Result<Vec<Sad>> {
        info::short_audio_descriptors(&self.blob)
    }

    pub fn speaker_allocation(&self) -> Result<Option<u8>> {
        info::speaker_allocation(&self.blob)
    }

    pub fn detect_monitor_audio(&self) -> bool {
        info::detect_monitor_audio(&self.blob)
    }

    pub fn detect_hdmi_monitor(&self) -> bool {
        info::detect_hdmi_monitor(&self.blob)
    }

    pub fn av_sync_delay(&self, mode: &DisplayMode) -> u32 {
        self.info.av_sync_delay(mode)
    }
}

/// Stateless EDID parser. One instance can be shared across any number of parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdidParser {
    config: ParserConfig,
    validator: BlockValidator,
}

impl EdidParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            validator: BlockValidator::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn validator(&self) -> &BlockValidator {
        &self.validator
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<ParsedEdid> {
        self.parse_blob(&EdidBlob::new(bytes)?)
    }

    pub fn parse_hex(&self, text: &str) -> Result<ParsedEdid> {
        self.parse_blob(&EdidBlob::from_hex(text)?)
    }

    /// Reads the EDID through `source`, then parses it.
    pub fn read(&self, source: &mut impl BlockSource) -> Result<ParsedEdid> {
        let blob = read_edid(source, &self.validator)?;
        self.parse_blob(&blob)
    }

    /// Validates every block, then decodes. A bad base block fails the parse; a bad extension
    /// is dropped and the rest of the EDID is still used.
    pub fn parse_blob(&self, raw: &EdidBlob) -> Result<ParsedEdid> {
        let checked = self.validator.validate(raw.base(), true);
        let mut corrupt = checked.corrupt;
        let base = checked.into_result(0)?;

        let mut extensions = Vec::with_capacity(raw.extension_count());
        for (i, ext) in raw.extensions().enumerate() {
            let checked = self.validator.validate(ext, false);
            corrupt |= checked.corrupt;
            match checked.into_result(i + 1) {
                Ok(block) => extensions.push(block),
                Err(err) => warn!(error = %err, "dropping EDID extension"),
            }
        }
        let blob = EdidBlob::from_validated(base, extensions);

        let identity = blob.identity();
        let quirks = quirks::lookup(blob.mfg_id(), blob.product_id());
        let mut info = DisplayInfo::from_edid(&blob, quirks);
        let modes = collect_modes(&blob, quirks, &mut info);
        apply_bpc_quirks(&mut info, quirks);

        debug!(
            manufacturer = %identity.manufacturer,
            product = identity.product,
            modes = modes.len(),
            corrupt,
            "EDID parsed"
        );
        Ok(ParsedEdid {
            blob,
            identity,
            quirks,
            info,
            modes,
            corrupt,
        })
    }
}

/// Runs every decoder in priority order. `info` must already hold the display info: the CEA
/// decoder reads its 4:2:0 capability map.
fn collect_modes(blob: &EdidBlob, quirks: Quirks, info: &mut DisplayInfo) -> Vec<DisplayMode> {
    let ctx = TimingContext::new(blob);
    let mut modes = ModeList::new();

    add_detailed_modes(blob, &ctx, quirks, &mut modes);
    add_cvt_modes(blob, &mut modes);
    add_standard_modes(blob, &ctx, &mut modes);
    add_established_modes(blob, &mut modes);
    add_cea_modes(blob, info, &mut modes);
    add_alternate_cea_modes(blob, &mut modes);
    modes.extend(displayid_detailed_modes(blob));
    add_inferred_modes(blob, &ctx, &mut modes);

    if quirks.intersects(Quirks::PREFER_LARGE_60 | Quirks::PREFER_LARGE_75) {
        fixup_preferred(modes.as_mut_slice(), quirks);
    }
    modes.into_vec()
}

/// Makes the largest mode preferred; among equally large modes, the one whose refresh is
/// closest to the quirk's target rate.
fn fixup_preferred(modes: &mut [DisplayMode], quirks: Quirks) {
    if modes.is_empty() {
        return;
    }
    let target = if quirks.contains(Quirks::PREFER_LARGE_75) {
        75
    } else {
        60
    };

    let mut best = 0;
    for (i, mode) in modes.iter().enumerate().skip(1) {
        if mode.area() > modes[best].area() {
            best = i;
        }
        let pref = &modes[best];
        if mode.area() == pref.area()
            && mode.vrefresh().abs_diff(target) < pref.vrefresh().abs_diff(target)
        {
            best = i;
        }
    }

    for mode in modes.iter_mut() {
        mode.set_preferred(false);
    }
    modes[best].set_preferred(true);
    debug!(mode = %modes[best].name(), target, "preferred mode fixed up");
}

fn apply_bpc_quirks(info: &mut DisplayInfo, quirks: Quirks) {
    // Later entries win when a table row carries more than one.
    for (quirk, bpc) in [
        (Quirks::FORCE_6BPC, 6),
        (Quirks::FORCE_8BPC, 8),
        (Quirks::FORCE_10BPC, 10),
        (Quirks::FORCE_12BPC, 12),
    ] {
        if quirks.contains(quirk) {
            info.bpc = bpc;
        }
    }
}

/// Conservative modes for a sink without a usable EDID: DMT modes up to 61 Hz, limited to
/// `hdisplay` x `vdisplay` when both are non-zero.
pub fn modes_noedid(hdisplay: u16, vdisplay: u16) -> Vec<DisplayMode> {
    let bounded = hdisplay != 0 && vdisplay != 0;
    DMT_MODES
        .iter()
        .filter(|m| !bounded || (m.hdisplay <= hdisplay && m.vdisplay <= vdisplay))
        .filter(|m| m.vrefresh() <= 61)
        .copied()
        .collect()
}

/// Marks every mode of the given size as preferred.
pub fn set_preferred_mode(modes: &mut [DisplayMode], hdisplay: u16, vdisplay: u16) {
    for mode in modes
        .iter_mut()
        .filter(|m| m.hdisplay == hdisplay && m.vdisplay == vdisplay)
    {
        mode.set_preferred(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::find_dmt;

    fn dmt(w: u16, h: u16, r: u32) -> DisplayMode {
        find_dmt(w, h, r, false).unwrap()
    }

    #[test]
    fn fixup_prefers_largest_then_closest_refresh() {
        let mut modes = vec![
            dmt(1024, 768, 60),
            dmt(1280, 1024, 75),
            dmt(1280, 1024, 60),
            dmt(800, 600, 60),
        ];
        modes[0].set_preferred(true);

        fixup_preferred(&mut modes, Quirks::PREFER_LARGE_60);
        let preferred: Vec<_> = modes.iter().map(|m| m.is_preferred()).collect();
        assert_eq!(preferred, vec![false, false, true, false]);

        fixup_preferred(&mut modes, Quirks::PREFER_LARGE_60 | Quirks::PREFER_LARGE_75);
        let preferred: Vec<_> = modes.iter().map(|m| m.is_preferred()).collect();
        assert_eq!(preferred, vec![false, true, false, false]);
    }

    #[test]
    fn last_bpc_quirk_wins() {
        let mut info = DisplayInfo {
            bpc: 8,
            ..DisplayInfo::default()
        };
        apply_bpc_quirks(&mut info, Quirks::FORCE_6BPC | Quirks::FORCE_10BPC);
        assert_eq!(info.bpc, 10);
        apply_bpc_quirks(&mut info, Quirks::empty());
        assert_eq!(info.bpc, 10);
    }

    #[test]
    fn noedid_modes_respect_limits() {
        let modes = modes_noedid(1024, 768);
        assert!(!modes.is_empty());
        assert!(modes
            .iter()
            .all(|m| m.hdisplay <= 1024 && m.vdisplay <= 768 && m.vrefresh() <= 61));
        assert!(modes.iter().any(|m| m.hdisplay == 1024 && m.vdisplay == 768));

        let unbounded = modes_noedid(0, 768);
        assert!(unbounded.len() > modes.len());
        assert!(unbounded.iter().all(|m| m.vrefresh() <= 61));
    }

    #[test]
    fn set_preferred_marks_every_match() {
        let mut modes = modes_noedid(0, 0);
        set_preferred_mode(&mut modes, 1024, 768);
        assert!(modes
            .iter()
            .filter(|m| m.is_preferred())
            .all(|m| m.hdisplay == 1024 && m.vdisplay == 768));
        assert!(modes.iter().any(|m| m.is_preferred()));
    }
}
