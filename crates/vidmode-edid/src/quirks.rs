//! Per-monitor workarounds for known-broken EDIDs.

use bitflags::bitflags;
use tracing::debug;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Quirks: u32 {
        /// Prefer the largest mode, at the refresh closest to 60 Hz.
        const PREFER_LARGE_60 = 1 << 0;
        /// Detailed timings claim 135 MHz but the panel runs far slower.
        const CLOCK_135_TOO_HIGH = 1 << 1;
        /// Prefer the largest mode, at the refresh closest to 75 Hz.
        const PREFER_LARGE_75 = 1 << 2;
        /// Detailed timing image sizes are reported in cm instead of mm.
        const DETAILED_IN_CM = 1 << 3;
        /// Ignore per-descriptor image sizes; use the base block's maximum size.
        const DETAILED_USE_MAXIMUM_SIZE = 1 << 4;
        /// Sync polarity bits in detailed timings are wrong; use positive/positive.
        const DETAILED_SYNC_PP = 1 << 6;
        /// Replace detailed timings with CVT reduced blanking.
        const FORCE_REDUCED_BLANKING = 1 << 7;
        const FORCE_8BPC = 1 << 8;
        const FORCE_12BPC = 1 << 9;
        const FORCE_6BPC = 1 << 10;
        const FORCE_10BPC = 1 << 11;
        /// Head-mounted displays and other sinks that must not join the desktop.
        const NON_DESKTOP = 1 << 12;
    }
}

#[derive(Debug, Clone, Copy)]
struct QuirkEntry {
    vendor: [u8; 3],
    product: u16,
    quirks: Quirks,
}

const fn quirk(vendor: &[u8; 3], product: u16, quirks: Quirks) -> QuirkEntry {
    QuirkEntry {
        vendor: *vendor,
        product,
        quirks,
    }
}

const HMD: Quirks = Quirks::NON_DESKTOP;

static QUIRK_TABLE: &[QuirkEntry] = &[
    // Acer AL1706, Acer F51.
    quirk(b"ACR", 44358, Quirks::PREFER_LARGE_60),
    quirk(b"API", 0x7602, Quirks::PREFER_LARGE_60),
    // Panels that report 8 bpc but are 6 bpc.
    quirk(b"AEO", 0, Quirks::FORCE_6BPC),
    quirk(b"BOE", 0x078b, Quirks::FORCE_6BPC),
    quirk(b"CPT", 0x17df, Quirks::FORCE_6BPC),
    quirk(b"SDC", 0x3652, Quirks::FORCE_6BPC),
    quirk(b"BOE", 0x0771, Quirks::FORCE_6BPC),
    // Belinea 10 15 55.
    quirk(b"MAX", 1516, Quirks::PREFER_LARGE_60),
    quirk(b"MAX", 0x077e, Quirks::PREFER_LARGE_60),
    // Envision EN-7100e, EN2028.
    quirk(b"EPI", 59264, Quirks::CLOCK_135_TOO_HIGH),
    quirk(b"EPI", 8232, Quirks::PREFER_LARGE_60),
    // Funai PM36B.
    quirk(
        b"FCM",
        13600,
        Quirks::PREFER_LARGE_75.union(Quirks::DETAILED_IN_CM),
    ),
    // eDP 10 bpc panel reporting unknown depth.
    quirk(b"LGD", 764, Quirks::FORCE_10BPC),
    // LG Philips LP154W01-A5.
    quirk(b"LPL", 0, Quirks::DETAILED_USE_MAXIMUM_SIZE),
    quirk(b"LPL", 0x2a00, Quirks::DETAILED_USE_MAXIMUM_SIZE),
    // Samsung SyncMaster 205BW, 22[5-6]BW.
    quirk(b"SAM", 541, Quirks::DETAILED_SYNC_PP),
    quirk(b"SAM", 596, Quirks::PREFER_LARGE_60),
    quirk(b"SAM", 638, Quirks::PREFER_LARGE_60),
    // Sony PVM-2541A.
    quirk(b"SNY", 0x2541, Quirks::FORCE_12BPC),
    // ViewSonic VA2026w.
    quirk(b"VSC", 5020, Quirks::FORCE_REDUCED_BLANKING),
    // Medion MD 30217 PG.
    quirk(b"MED", 0x07b8, Quirks::PREFER_LARGE_75),
    // Lenovo G50.
    quirk(b"SDC", 18514, Quirks::FORCE_6BPC),
    quirk(b"SEC", 0xd033, Quirks::FORCE_8BPC),
    // Rotel RSX-1058 forwards the sink EDID but only does HDMI 1.1.
    quirk(b"ETR", 13896, Quirks::FORCE_8BPC),
    // Valve Index.
    quirk(b"VLV", 0x91a8, HMD),
    quirk(b"VLV", 0x91b0, HMD),
    quirk(b"VLV", 0x91b1, HMD),
    quirk(b"VLV", 0x91b2, HMD),
    quirk(b"VLV", 0x91b3, HMD),
    quirk(b"VLV", 0x91b4, HMD),
    quirk(b"VLV", 0x91b5, HMD),
    quirk(b"VLV", 0x91b6, HMD),
    quirk(b"VLV", 0x91b7, HMD),
    quirk(b"VLV", 0x91b8, HMD),
    quirk(b"VLV", 0x91b9, HMD),
    quirk(b"VLV", 0x91ba, HMD),
    quirk(b"VLV", 0x91bb, HMD),
    quirk(b"VLV", 0x91bc, HMD),
    quirk(b"VLV", 0x91bd, HMD),
    quirk(b"VLV", 0x91be, HMD),
    quirk(b"VLV", 0x91bf, HMD),
    // HTC Vive / Vive Pro.
    quirk(b"HVR", 0xaa01, HMD),
    quirk(b"HVR", 0xaa02, HMD),
    // Oculus Rift family.
    quirk(b"OVR", 0x0001, HMD),
    quirk(b"OVR", 0x0003, HMD),
    quirk(b"OVR", 0x0004, HMD),
    quirk(b"OVR", 0x0012, HMD),
    // Windows Mixed Reality headsets.
    quirk(b"ACR", 0x7fce, HMD),
    quirk(b"HPN", 0x3515, HMD),
    quirk(b"LEN", 0x0408, HMD),
    quirk(b"LEN", 0xb800, HMD),
    quirk(b"FUJ", 0x1970, HMD),
    quirk(b"DEL", 0x7fce, HMD),
    quirk(b"SEC", 0x144a, HMD),
    quirk(b"AUS", 0xc102, HMD),
    // PlayStation VR.
    quirk(b"SNY", 0x0704, HMD),
    // Sensics, OSVR HDK.
    quirk(b"SEN", 0x1019, HMD),
    quirk(b"SVR", 0x1019, HMD),
];

/// Unpacks the three 5-bit letters of the manufacturer id (base block bytes 8..=9, big endian).
pub fn decode_vendor(mfg_id: [u8; 2]) -> [u8; 3] {
    [
        ((mfg_id[0] & 0x7c) >> 2) + b'@',
        (((mfg_id[0] & 0x03) << 3) | ((mfg_id[1] & 0xe0) >> 5)) + b'@',
        (mfg_id[1] & 0x1f) + b'@',
    ]
}

/// Quirks for a monitor. The first entry matching both vendor and product wins.
pub fn lookup(mfg_id: [u8; 2], product_id: u16) -> Quirks {
    let vendor = decode_vendor(mfg_id);
    match QUIRK_TABLE
        .iter()
        .find(|q| q.vendor == vendor && q.product == product_id)
    {
        Some(entry) => {
            debug!(
                vendor = %String::from_utf8_lossy(&vendor),
                product_id,
                quirks = ?entry.quirks,
                "applying EDID quirks"
            );
            entry.quirks
        }
        None => Quirks::empty(),
    }
}
