//! CTA-861 and HDMI VIC matching, and the modes contributed by CEA video data blocks.

use tracing::{debug, warn};

use crate::blob::EdidBlob;
use crate::decode::ModeList;
use crate::ext::{db_tag, find_cea, DataBlock};
use crate::info::{ColorFormats, DisplayInfo};
use crate::mode::{DisplayMode, MatchFlags, ModeFlags, PictureAspect};
use crate::tables::{cea_mode_for_vic, cea_vics, hdmi_mode_for_vic, hdmi_vics};

/// Clock slack (kHz) when snapping detailed timings, which only have 10 kHz resolution.
const DETAILED_CLOCK_TOLERANCE: u32 = 5;

/// The other member of a 60 Hz / 59.94 Hz pair. Modes whose refresh is not a multiple of 6 have
/// no such twin and return their own clock.
pub fn alternate_clock(mode: &DisplayMode) -> u32 {
    if mode.vrefresh() % 6 != 0 {
        return mode.clock;
    }
    let clock = u64::from(mode.clock);
    // The tables store the 59.94 Hz variant for 240 and 480 line modes, 60 Hz otherwise.
    let alt = if mode.vdisplay == 240 || mode.vdisplay == 480 {
        (clock * 1001 + 500) / 1000
    } else {
        (clock * 1000 + 500) / 1001
    };
    alt as u32
}

/// Steps a table mode to its next permitted vertical front porch. The tables hold the shortest
/// porch; a handful of VICs allow one or two extra lines.
fn alternate_timings(vic: u8, mode: &mut DisplayMode) -> bool {
    let eligible = match vic {
        8 | 9 | 12 | 13 => mode.vtotal < 263,
        23 | 24 | 27 | 28 => mode.vtotal < 314,
        _ => false,
    };
    if eligible {
        mode.vsync_start += 1;
        mode.vsync_end += 1;
        mode.vtotal += 1;
    }
    eligible
}

fn match_flags(to_match: &DisplayMode) -> MatchFlags {
    let mut flags = MatchFlags::TIMINGS | MatchFlags::FLAGS;
    if to_match.picture_aspect != PictureAspect::None {
        flags |= MatchFlags::ASPECT_RATIO;
    }
    flags
}

fn within(clock: u32, target: u32, tolerance: u32) -> bool {
    clock.abs_diff(target) <= tolerance
}

fn khz_to_picos(clock: u32) -> u32 {
    1_000_000_000 / clock
}

fn same_period(a: u32, b: u32) -> bool {
    b != 0 && khz_to_picos(a) == khz_to_picos(b)
}

/// Walks the CEA table, trying each candidate at every porch variant it allows.
fn find_cea_vic(to_match: &DisplayMode, clock_ok: impl Fn(u32, u32) -> bool) -> Option<u8> {
    if to_match.clock == 0 {
        return None;
    }
    let what = match_flags(to_match);
    cea_vics().find(|&vic| {
        let Some(table) = cea_mode_for_vic(vic) else {
            return false;
        };
        if !clock_ok(table.clock, alternate_clock(table)) {
            return false;
        }
        let mut candidate = *table;
        loop {
            if to_match.matches(&candidate, what) {
                return true;
            }
            if !alternate_timings(vic, &mut candidate) {
                return false;
            }
        }
    })
}

fn find_hdmi_vic(to_match: &DisplayMode, clock_ok: impl Fn(u32, u32) -> bool) -> Option<u8> {
    if to_match.clock == 0 {
        return None;
    }
    let what = match_flags(to_match);
    hdmi_vics().find(|&vic| {
        hdmi_mode_for_vic(vic).map_or(false, |table| {
            clock_ok(table.clock, alternate_clock(table)) && to_match.matches(table, what)
        })
    })
}

/// CEA VIC whose timing matches `mode`, accepting a pixel clock within `tolerance` kHz of
/// either the 60 Hz or the 59.94 Hz variant.
pub fn match_cea_vic(mode: &DisplayMode, tolerance: u32) -> Option<u8> {
    find_cea_vic(mode, |c1, c2| {
        within(mode.clock, c1, tolerance) || within(mode.clock, c2, tolerance)
    })
}

/// CEA VIC whose timing matches `mode` exactly, comparing clocks by their whole-picosecond
/// period.
pub fn match_cea_mode(mode: &DisplayMode) -> Option<u8> {
    find_cea_vic(mode, |c1, c2| {
        same_period(mode.clock, c1) || same_period(mode.clock, c2)
    })
}

pub fn match_hdmi_vic(mode: &DisplayMode, tolerance: u32) -> Option<u8> {
    find_hdmi_vic(mode, |c1, c2| {
        within(mode.clock, c1, tolerance) || within(mode.clock, c2, tolerance)
    })
}

pub fn match_hdmi_mode(mode: &DisplayMode) -> Option<u8> {
    find_hdmi_vic(mode, |c1, c2| {
        same_period(mode.clock, c1) || same_period(mode.clock, c2)
    })
}

/// Snaps a detailed timing's clock to the nearer of the two clocks of the CEA or HDMI mode it
/// matches.
pub fn fixup_detailed_clock(mode: &mut DisplayMode) {
    let (kind, table) = if let Some(table) =
        match_cea_vic(mode, DETAILED_CLOCK_TOLERANCE).and_then(cea_mode_for_vic)
    {
        ("CEA", table)
    } else if let Some(table) =
        match_hdmi_vic(mode, DETAILED_CLOCK_TOLERANCE).and_then(hdmi_mode_for_vic)
    {
        ("HDMI", table)
    } else {
        return;
    };

    let clock1 = table.clock;
    let clock2 = alternate_clock(table);
    let clock = if mode.clock.abs_diff(clock1) < mode.clock.abs_diff(clock2) {
        clock1
    } else {
        clock2
    };
    if clock != mode.clock {
        debug!(
            kind,
            mode = %mode.name(),
            from = mode.clock,
            to = clock,
            "snapping detailed mode clock"
        );
        mode.clock = clock;
    }
}

/// A short video descriptor's VIC. Legacy SVDs use bit 7 as a native-mode marker.
pub fn svd_to_vic(svd: u8) -> u8 {
    match svd {
        1..=64 | 129..=192 => svd & 0x7f,
        _ => svd,
    }
}

fn mode_from_svd(svd: u8) -> Option<DisplayMode> {
    cea_mode_for_vic(svd_to_vic(svd)).copied()
}

fn mode_from_vic_index(video: &[u8], index: usize) -> Option<DisplayMode> {
    video.get(index).and_then(|&svd| mode_from_svd(svd))
}

/// Modes from CEA video data blocks, YCbCr 4:2:0-only blocks and the HDMI VSDB. Also records
/// which VICs support 4:2:0 in `info`.
pub fn add_cea_modes(blob: &EdidBlob, info: &mut DisplayInfo, modes: &mut ModeList) {
    let Some(cea) = find_cea(blob) else {
        return;
    };
    if cea.revision() < 3 {
        return;
    }
    let blocks = match cea.data_blocks() {
        Ok(blocks) => blocks,
        Err(err) => {
            debug!(error = %err, "skipping CEA modes");
            return;
        }
    };

    let mut video: &[u8] = &[];
    let mut hdmi = None;
    for db in blocks {
        if db.tag() == db_tag::VIDEO {
            video = db.payload();
            add_svd_modes(video, info, modes);
        } else if db.is_hdmi_vsdb() {
            hdmi = Some(db);
        } else if db.is_y420_video() {
            add_y420_only_modes(&db.payload()[1..], info, modes);
        }
    }

    // Stereo flags patch modes added above, so the VSDB goes last.
    if let Some(hdmi) = hdmi {
        add_hdmi_vsdb_modes(hdmi, video, info, modes);
    }
}

fn add_svd_modes(video: &[u8], info: &mut DisplayInfo, modes: &mut ModeList) {
    for (i, &svd) in video.iter().enumerate() {
        let Some(mode) = mode_from_svd(svd) else {
            continue;
        };
        // The capability map addresses the first 64 SVDs of the video block.
        if i < 64 && info.hdmi.y420_cmdb_map & (1 << i) != 0 {
            info.hdmi.y420_cmdb_modes.insert(svd_to_vic(svd));
        }
        modes.push(mode);
    }
}

fn add_y420_only_modes(svds: &[u8], info: &mut DisplayInfo, modes: &mut ModeList) {
    let mut added = 0;
    for &svd in svds {
        let vic = svd_to_vic(svd);
        let Some(mode) = cea_mode_for_vic(vic) else {
            continue;
        };
        info.hdmi.y420_vdb_modes.insert(vic);
        modes.push(*mode);
        added += 1;
    }
    if added > 0 {
        info.color_formats |= ColorFormats::YCRCB420;
    }
}

struct StereoMandatory {
    width: u16,
    height: u16,
    vrefresh: u32,
    flags: ModeFlags,
}

const fn stereo(width: u16, height: u16, vrefresh: u32, flags: ModeFlags) -> StereoMandatory {
    StereoMandatory {
        width,
        height,
        vrefresh,
        flags,
    }
}

/// 3D formats every 3D-capable HDMI sink must accept.
const STEREO_MANDATORY: [StereoMandatory; 8] = [
    stereo(1920, 1080, 24, ModeFlags::STEREO_TOP_AND_BOTTOM),
    stereo(1920, 1080, 24, ModeFlags::STEREO_FRAME_PACKING),
    stereo(
        1920,
        1080,
        50,
        ModeFlags::INTERLACE.union(ModeFlags::STEREO_SIDE_BY_SIDE_HALF),
    ),
    stereo(
        1920,
        1080,
        60,
        ModeFlags::INTERLACE.union(ModeFlags::STEREO_SIDE_BY_SIDE_HALF),
    ),
    stereo(1280, 720, 50, ModeFlags::STEREO_TOP_AND_BOTTOM),
    stereo(1280, 720, 50, ModeFlags::STEREO_FRAME_PACKING),
    stereo(1280, 720, 60, ModeFlags::STEREO_TOP_AND_BOTTOM),
    stereo(1280, 720, 60, ModeFlags::STEREO_FRAME_PACKING),
];

fn add_mandatory_stereo_modes(modes: &mut ModeList) -> usize {
    let mut stereo_modes = Vec::new();
    for mode in modes.iter() {
        for m in &STEREO_MANDATORY {
            let interlace_wanted = m.flags.contains(ModeFlags::INTERLACE);
            if mode.hdisplay == m.width
                && mode.vdisplay == m.height
                && mode.is_interlaced() == interlace_wanted
                && mode.vrefresh() == m.vrefresh
            {
                let mut stereo = *mode;
                stereo.flags |= m.flags;
                stereo_modes.push(stereo);
            }
        }
    }
    let added = stereo_modes.len();
    modes.extend(stereo_modes);
    added
}

/// 3D_Structure bits that map to a supported stereo layout.
fn stereo_layouts(structure: u16) -> impl Iterator<Item = ModeFlags> {
    [
        (1 << 0, ModeFlags::STEREO_FRAME_PACKING),
        (1 << 6, ModeFlags::STEREO_TOP_AND_BOTTOM),
        (1 << 8, ModeFlags::STEREO_SIDE_BY_SIDE_HALF),
    ]
    .into_iter()
    .filter(move |(bit, _)| structure & bit != 0)
    .map(|(_, flag)| flag)
}

fn add_stereo_from_index(
    video: &[u8],
    index: usize,
    flag: ModeFlags,
    modes: &mut ModeList,
) -> usize {
    match mode_from_vic_index(video, index) {
        Some(mut mode) => {
            mode.flags |= flag;
            modes.push(mode);
            1
        }
        None => 0,
    }
}

/// HDMI 1.4 VSDB: 4K VICs, mandatory 3D formats and per-VIC 3D structures.
fn add_hdmi_vsdb_modes(db: DataBlock<'_>, video: &[u8], info: &mut DisplayInfo, modes: &mut ModeList) {
    let added = hdmi_vsdb_modes(db, video, modes);
    if added > 0 {
        info.has_hdmi_infoframe = true;
    }
}

fn hdmi_vsdb_modes(db: DataBlock<'_>, video: &[u8], modes: &mut ModeList) -> usize {
    let len = db.len();
    let mut added = 0;

    if len < 8 {
        return added;
    }
    // HDMI_Video_Present.
    if db.byte(8) & 0x20 == 0 {
        return added;
    }

    let mut offset = 0;
    if db.byte(8) & 0x80 != 0 {
        offset += 2;
    }
    if db.byte(8) & 0x40 != 0 {
        offset += 2;
    }
    // Room for the 3D flags byte and the VIC/3D length byte.
    if len < 8 + offset + 2 {
        return added;
    }

    offset += 1;
    let mut multi_present = 0;
    if db.byte(8 + offset) & 0x80 != 0 {
        added += add_mandatory_stereo_modes(modes);
        multi_present = (db.byte(8 + offset) & 0x60) >> 5;
    }

    offset += 1;
    let vic_len = usize::from(db.byte(8 + offset) >> 5);
    let hdmi_3d_len = usize::from(db.byte(8 + offset) & 0x1f);

    for i in 0..vic_len {
        if len < 9 + offset + i {
            break;
        }
        let vic = db.byte(9 + offset + i);
        match hdmi_mode_for_vic(vic) {
            Some(mode) => {
                modes.push(*mode);
                added += 1;
            }
            None => warn!(vic, "unknown HDMI VIC"),
        }
    }
    offset += 1 + vic_len;

    let multi_len = match multi_present {
        1 => 2,
        2 => 4,
        _ => 0,
    };

    if len + 1 < 8 + offset + hdmi_3d_len || hdmi_3d_len < multi_len {
        return added;
    }

    if multi_present == 1 || multi_present == 2 {
        let structure_all = u16::from_be_bytes([db.byte(8 + offset), db.byte(9 + offset)]);
        let mask = if multi_present == 2 {
            u16::from_be_bytes([db.byte(10 + offset), db.byte(11 + offset)])
        } else {
            0xffff
        };
        for index in (0..16).filter(|i| mask & (1 << i) != 0) {
            for flag in stereo_layouts(structure_all) {
                added += add_stereo_from_index(video, index, flag, modes);
            }
        }
    }
    offset += multi_len;

    let entries = hdmi_3d_len - multi_len;
    let mut i = 0;
    while i < entries {
        let entry = db.byte(8 + offset + i);
        let detail_present = entry & 0x0f > 7;
        if detail_present && i + 1 == entries {
            break;
        }

        let index = usize::from(entry >> 4);
        let flag = match entry & 0x0f {
            0 => Some(ModeFlags::STEREO_FRAME_PACKING),
            6 => Some(ModeFlags::STEREO_TOP_AND_BOTTOM),
            // 3D_Detail_X 1: side-by-side with horizontal subsampling.
            8 if db.byte(9 + offset + i) >> 4 == 1 => Some(ModeFlags::STEREO_SIDE_BY_SIDE_HALF),
            _ => None,
        };
        if let Some(flag) = flag {
            added += add_stereo_from_index(video, index, flag, modes);
        }

        i += if detail_present { 2 } else { 1 };
    }

    added
}

/// For every mode that is one half of a 60/59.94 Hz CEA or HDMI pair, adds the other half.
pub fn add_alternate_cea_modes(blob: &EdidBlob, modes: &mut ModeList) {
    if find_cea(blob).is_none() {
        return;
    }

    let mut alternates = Vec::new();
    for mode in modes.iter() {
        let table = match match_cea_mode(mode).and_then(cea_mode_for_vic) {
            Some(table) => table,
            None => match match_hdmi_mode(mode).and_then(hdmi_mode_for_vic) {
                Some(table) => table,
                None => continue,
            },
        };

        let clock1 = table.clock;
        let clock2 = alternate_clock(table);
        if clock1 == clock2 || (mode.clock != clock1 && mode.clock != clock2) {
            continue;
        }

        let mut alternate = *table;
        alternate.flags |= mode.flags & ModeFlags::STEREO_MASK;
        alternate.clock = if mode.clock != clock1 { clock1 } else { clock2 };
        alternates.push(alternate);
    }
    modes.extend(alternates);
}
