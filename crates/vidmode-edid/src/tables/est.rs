// Generated from the published VESA/CTA timing tables; keep entries in table order.

use super::{mode, MiniMode};
use crate::mode::DisplayMode;

/// Established timings I and II, indexed by bit position (bytes 35..=37, LSB first).
pub static EST_MODES: [DisplayMode; 17] = [
    mode!(40000, [800, 840, 968, 1056], [600, 601, 605, 628], PHSYNC | PVSYNC),
    mode!(36000, [800, 824, 896, 1024], [600, 601, 603, 625], PHSYNC | PVSYNC),
    mode!(31500, [640, 656, 720, 840], [480, 481, 484, 500], NHSYNC | NVSYNC),
    mode!(31500, [640, 664, 704, 832], [480, 489, 492, 520], NHSYNC | NVSYNC),
    mode!(30240, [640, 704, 768, 864], [480, 483, 486, 525], NHSYNC | NVSYNC),
    mode!(25175, [640, 656, 752, 800], [480, 490, 492, 525], NHSYNC | NVSYNC),
    mode!(35500, [720, 738, 846, 900], [400, 421, 423, 449], NHSYNC | NVSYNC),
    mode!(28320, [720, 738, 846, 900], [400, 412, 414, 449], NHSYNC | PVSYNC),
    mode!(135000, [1280, 1296, 1440, 1688], [1024, 1025, 1028, 1066], PHSYNC | PVSYNC),
    mode!(78750, [1024, 1040, 1136, 1312], [768, 769, 772, 800], PHSYNC | PVSYNC),
    mode!(75000, [1024, 1048, 1184, 1328], [768, 771, 777, 806], NHSYNC | NVSYNC),
    mode!(65000, [1024, 1048, 1184, 1344], [768, 771, 777, 806], NHSYNC | NVSYNC),
    mode!(44900, [1024, 1032, 1208, 1264], [768, 768, 776, 817], PHSYNC | PVSYNC | INTERLACE),
    mode!(57284, [832, 864, 928, 1152], [624, 625, 628, 667], NHSYNC | NVSYNC),
    mode!(49500, [800, 816, 896, 1056], [600, 601, 604, 625], PHSYNC | PVSYNC),
    mode!(50000, [800, 856, 976, 1040], [600, 637, 643, 666], PHSYNC | PVSYNC),
    mode!(108000, [1152, 1216, 1344, 1600], [864, 865, 868, 900], PHSYNC | PVSYNC),
];

/// Established timings III, in descriptor bit order (byte 6 bit 7 first).
pub static EST3_MODES: [MiniMode; 44] = [
    MiniMode::new(640, 350, 85, false),
    MiniMode::new(640, 400, 85, false),
    MiniMode::new(720, 400, 85, false),
    MiniMode::new(640, 480, 85, false),
    MiniMode::new(848, 480, 60, false),
    MiniMode::new(800, 600, 85, false),
    MiniMode::new(1024, 768, 85, false),
    MiniMode::new(1152, 864, 75, false),
    MiniMode::new(1280, 768, 60, true),
    MiniMode::new(1280, 768, 60, false),
    MiniMode::new(1280, 768, 75, false),
    MiniMode::new(1280, 768, 85, false),
    MiniMode::new(1280, 960, 60, false),
    MiniMode::new(1280, 960, 85, false),
    MiniMode::new(1280, 1024, 60, false),
    MiniMode::new(1280, 1024, 85, false),
    MiniMode::new(1360, 768, 60, false),
    MiniMode::new(1440, 900, 60, true),
    MiniMode::new(1440, 900, 60, false),
    MiniMode::new(1440, 900, 75, false),
    MiniMode::new(1440, 900, 85, false),
    MiniMode::new(1400, 1050, 60, true),
    MiniMode::new(1400, 1050, 60, false),
    MiniMode::new(1400, 1050, 75, false),
    MiniMode::new(1400, 1050, 85, false),
    MiniMode::new(1680, 1050, 60, true),
    MiniMode::new(1680, 1050, 60, false),
    MiniMode::new(1680, 1050, 75, false),
    MiniMode::new(1680, 1050, 85, false),
    MiniMode::new(1600, 1200, 60, false),
    MiniMode::new(1600, 1200, 65, false),
    MiniMode::new(1600, 1200, 70, false),
    MiniMode::new(1600, 1200, 75, false),
    MiniMode::new(1600, 1200, 85, false),
    MiniMode::new(1792, 1344, 60, false),
    MiniMode::new(1792, 1344, 75, false),
    MiniMode::new(1856, 1392, 60, false),
    MiniMode::new(1856, 1392, 75, false),
    MiniMode::new(1920, 1200, 60, true),
    MiniMode::new(1920, 1200, 60, false),
    MiniMode::new(1920, 1200, 75, false),
    MiniMode::new(1920, 1200, 85, false),
    MiniMode::new(1920, 1440, 60, false),
    MiniMode::new(1920, 1440, 75, false),
];

/// Sizes synthesized from a range descriptor when the monitor declares GTF or CVT support.
pub static EXTRA_MODES: [MiniMode; 7] = [
    MiniMode::new(1024, 576, 60, false),
    MiniMode::new(1366, 768, 60, false),
    MiniMode::new(1600, 900, 60, false),
    MiniMode::new(1680, 945, 60, false),
    MiniMode::new(1920, 1080, 60, false),
    MiniMode::new(2048, 1152, 60, false),
    MiniMode::new(2048, 1536, 60, false),
];
