mod common;

use common::*;
use pretty_assertions::assert_eq;
use vidmode_edid::cea::{match_cea_vic, match_hdmi_vic};
use vidmode_edid::info::default_rgb_quant_range;
use vidmode_edid::tables::{cea_mode_for_vic, hdmi_mode_for_vic};
use vidmode_edid::{ColorFormats, EdidParser, ModeFlags, PictureAspect, RgbQuantRange, Sad};

const AUDIO_DB: [u8; 4] = [
    0x23, // audio, len 3
    0x09, 0x07, 0x07, // LPCM 2ch, 32/44.1/48 kHz, 16/20/24 bit
];

const SPEAKER_DB: [u8; 4] = [0x83, 0x01, 0x00, 0x00];

/// HDMI 1.4 VSDB, deep color 30/36/48 + Y444, 300 MHz TMDS, no latency or video fields.
const HDMI_VSDB: [u8; 8] = [0x67, 0x03, 0x0c, 0x00, 0x10, 0x00, 0x78, 0x3c];

fn hdmi_tv() -> EdidBuilder {
    let vdb = video_data_block(&[0x90, 4, 5, 31, 97]);
    let y420_cmdb: [u8; 3] = [0xe2, 0x0f, 0x10];
    EdidBuilder::new(b"XYZ", 0x1234)
        .revision(3)
        .input(0x80)
        .descriptor(dtd_1080p60())
        .descriptor(monitor_name("XYZ TV"))
        .extension(cea_extension(
            0x70,
            &[&vdb, &AUDIO_DB, &SPEAKER_DB, &HDMI_VSDB, &y420_cmdb],
            &[dtd_720p60()],
        ))
}

fn vic_size(vic: u8) -> (u16, u16, u32) {
    let mode = cea_mode_for_vic(vic).unwrap();
    (mode.hdisplay, mode.vdisplay, mode.vrefresh())
}

#[test]
fn cea_extension_end_to_end() {
    let parsed = EdidParser::default().parse(&hdmi_tv().build()).unwrap();
    let sizes: Vec<_> = parsed
        .modes
        .iter()
        .map(|m| (m.hdisplay, m.vdisplay, m.vrefresh()))
        .collect();

    // Base DTD, extension DTD, then the video data block in SVD order.
    assert_eq!(sizes[0], (1920, 1080, 60));
    assert_eq!(sizes[1], (1280, 720, 60));
    assert_eq!(
        sizes[2..7].to_vec(),
        vec![vic_size(16), vic_size(4), vic_size(5), vic_size(31), vic_size(97)]
    );
    assert!(parsed.modes[0].is_preferred());
    assert!(!parsed.modes[1].is_preferred());

    // 59.94 Hz twins follow the primary modes.
    let clocks: Vec<u32> = parsed.modes[7..].iter().map(|m| m.clock).collect();
    assert!(clocks.contains(&148_352));
    assert!(clocks.contains(&593_407));
    assert!(!clocks.contains(&148_500));

    let info = &parsed.info;
    assert!(info.is_hdmi);
    assert_eq!(info.cea_rev, 3);
    assert_eq!(info.bpc, 16);
    assert_eq!(info.max_tmds_clock, 300_000);
    assert_eq!(info.name.as_deref(), Some("XYZ TV"));
    assert_eq!(
        info.color_formats,
        ColorFormats::RGB444 | ColorFormats::YCRCB444 | ColorFormats::YCRCB422 | ColorFormats::YCRCB420
    );
    assert!(info.hdmi.y420_cmdb_modes.contains(97));
    assert!(!info.hdmi.y420_cmdb_modes.contains(16));

    assert!(parsed.detect_hdmi_monitor());
    assert!(parsed.detect_monitor_audio());
    assert_eq!(
        parsed.short_audio_descriptors().unwrap(),
        vec![Sad {
            format: 1,
            channels: 1,
            freq: 0x07,
            byte2: 0x07,
        }]
    );
    assert_eq!(parsed.speaker_allocation().unwrap(), Some(0x01));
    assert_eq!(parsed.av_sync_delay(&parsed.modes[0]), 0);
}

#[test]
fn dvi_sink_without_cea_is_not_hdmi() {
    let parsed = EdidParser::default()
        .parse(&EdidBuilder::new(b"XYZ", 1).descriptor(dtd_1080p60()).build())
        .unwrap();
    assert!(!parsed.detect_hdmi_monitor());
    assert!(!parsed.detect_monitor_audio());
    assert!(parsed.short_audio_descriptors().unwrap().is_empty());
}

#[test]
fn hdmi_vics_and_mandatory_stereo_modes() {
    let vdb = video_data_block(&[4, 19]);
    let vsdb: [u8; 12] = [
        0x6b, // vendor, len 11
        0x03, 0x0c, 0x00, // OUI
        0x10, 0x00, // physical address
        0x00, 0x00, // no deep color, no TMDS limit
        0x20, // HDMI video present
        0x80, // 3D present
        0x20, // one HDMI VIC, no 3D entries
        0x01, // 3840x2160@30
    ];
    let builder = EdidBuilder::new(b"XYZ", 2)
        .revision(3)
        .input(0x80)
        .extension(cea_extension(0, &[&vdb, &vsdb], &[]));
    let parsed = EdidParser::default().parse(&builder.build()).unwrap();
    assert!(parsed.info.has_hdmi_infoframe);

    let stereo: Vec<_> = parsed
        .modes
        .iter()
        .filter(|m| m.flags.intersects(ModeFlags::STEREO_MASK))
        .map(|m| (m.vrefresh(), m.flags & ModeFlags::STEREO_MASK))
        .collect();
    assert_eq!(
        stereo[..4].to_vec(),
        vec![
            (60, ModeFlags::STEREO_TOP_AND_BOTTOM),
            (60, ModeFlags::STEREO_FRAME_PACKING),
            (50, ModeFlags::STEREO_TOP_AND_BOTTOM),
            (50, ModeFlags::STEREO_FRAME_PACKING),
        ]
    );

    let uhd: Vec<u32> = parsed
        .modes
        .iter()
        .filter(|m| m.hdisplay == 3840)
        .map(|m| m.clock)
        .collect();
    assert_eq!(uhd, vec![297_000, 296_703]);
}

#[test]
fn vic_matching_accepts_both_clock_variants() {
    let mut mode = *cea_mode_for_vic(5).unwrap();
    mode.picture_aspect = PictureAspect::None;
    assert_eq!(match_cea_vic(&mode, 5), Some(5));
    mode.clock = 74_250 * 1000 / 1001;
    assert_eq!(match_cea_vic(&mode, 5), Some(5));

    let mut uhd = *hdmi_mode_for_vic(1).unwrap();
    uhd.clock = 296_703;
    assert_eq!(match_hdmi_vic(&uhd, 5), Some(1));
}

#[test]
fn quantization_range_defaults_by_vic() {
    assert_eq!(
        default_rgb_quant_range(cea_mode_for_vic(1).unwrap()),
        RgbQuantRange::Full
    );
    assert_eq!(
        default_rgb_quant_range(cea_mode_for_vic(4).unwrap()),
        RgbQuantRange::Limited
    );
}
