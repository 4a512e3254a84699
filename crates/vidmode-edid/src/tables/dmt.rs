// Generated from the published VESA/CTA timing tables; keep entries in table order.

use super::mode;
use crate::mode::DisplayMode;

/// VESA DMT modes, ordered by DMT id.
pub static DMT_MODES: [DisplayMode; 88] = [
    // 0x01: 640x350@85
    mode!(31500, [640, 672, 736, 832], [350, 382, 385, 445], PHSYNC | NVSYNC),
    // 0x02: 640x400@85
    mode!(31500, [640, 672, 736, 832], [400, 401, 404, 445], NHSYNC | PVSYNC),
    // 0x03: 720x400@85
    mode!(35500, [720, 756, 828, 936], [400, 401, 404, 446], NHSYNC | PVSYNC),
    // 0x04: 640x480@60
    mode!(25175, [640, 656, 752, 800], [480, 490, 492, 525], NHSYNC | NVSYNC),
    // 0x05: 640x480@72
    mode!(31500, [640, 664, 704, 832], [480, 489, 492, 520], NHSYNC | NVSYNC),
    // 0x06: 640x480@75
    mode!(31500, [640, 656, 720, 840], [480, 481, 484, 500], NHSYNC | NVSYNC),
    // 0x07: 640x480@85
    mode!(36000, [640, 696, 752, 832], [480, 481, 484, 509], NHSYNC | NVSYNC),
    // 0x08: 800x600@56
    mode!(36000, [800, 824, 896, 1024], [600, 601, 603, 625], PHSYNC | PVSYNC),
    // 0x09: 800x600@60
    mode!(40000, [800, 840, 968, 1056], [600, 601, 605, 628], PHSYNC | PVSYNC),
    // 0x0a: 800x600@72
    mode!(50000, [800, 856, 976, 1040], [600, 637, 643, 666], PHSYNC | PVSYNC),
    // 0x0b: 800x600@75
    mode!(49500, [800, 816, 896, 1056], [600, 601, 604, 625], PHSYNC | PVSYNC),
    // 0x0c: 800x600@85
    mode!(56250, [800, 832, 896, 1048], [600, 601, 604, 631], PHSYNC | PVSYNC),
    // 0x0d: 800x600@120 reduced blanking
    mode!(73250, [800, 848, 880, 960], [600, 603, 607, 636], PHSYNC | NVSYNC),
    // 0x0e: 848x480@60
    mode!(33750, [848, 864, 976, 1088], [480, 486, 494, 517], PHSYNC | PVSYNC),
    // 0x0f: 1024x768@43
    mode!(44900, [1024, 1032, 1208, 1264], [768, 768, 776, 817], PHSYNC | PVSYNC | INTERLACE),
    // 0x10: 1024x768@60
    mode!(65000, [1024, 1048, 1184, 1344], [768, 771, 777, 806], NHSYNC | NVSYNC),
    // 0x11: 1024x768@70
    mode!(75000, [1024, 1048, 1184, 1328], [768, 771, 777, 806], NHSYNC | NVSYNC),
    // 0x12: 1024x768@75
    mode!(78750, [1024, 1040, 1136, 1312], [768, 769, 772, 800], PHSYNC | PVSYNC),
    // 0x13: 1024x768@85
    mode!(94500, [1024, 1072, 1168, 1376], [768, 769, 772, 808], PHSYNC | PVSYNC),
    // 0x14: 1024x768@120 reduced blanking
    mode!(115500, [1024, 1072, 1104, 1184], [768, 771, 775, 813], PHSYNC | NVSYNC),
    // 0x15: 1152x864@75
    mode!(108000, [1152, 1216, 1344, 1600], [864, 865, 868, 900], PHSYNC | PVSYNC),
    // 0x55: 1280x720@60
    mode!(74250, [1280, 1390, 1430, 1650], [720, 725, 730, 750], PHSYNC | PVSYNC),
    // 0x16: 1280x768@60 reduced blanking
    mode!(68250, [1280, 1328, 1360, 1440], [768, 771, 778, 790], PHSYNC | NVSYNC),
    // 0x17: 1280x768@60
    mode!(79500, [1280, 1344, 1472, 1664], [768, 771, 778, 798], NHSYNC | PVSYNC),
    // 0x18: 1280x768@75
    mode!(102250, [1280, 1360, 1488, 1696], [768, 771, 778, 805], NHSYNC | PVSYNC),
    // 0x19: 1280x768@85
    mode!(117500, [1280, 1360, 1496, 1712], [768, 771, 778, 809], NHSYNC | PVSYNC),
    // 0x1a: 1280x768@120 reduced blanking
    mode!(140250, [1280, 1328, 1360, 1440], [768, 771, 778, 813], PHSYNC | NVSYNC),
    // 0x1b: 1280x800@60 reduced blanking
    mode!(71000, [1280, 1328, 1360, 1440], [800, 803, 809, 823], PHSYNC | NVSYNC),
    // 0x1c: 1280x800@60
    mode!(83500, [1280, 1352, 1480, 1680], [800, 803, 809, 831], NHSYNC | PVSYNC),
    // 0x1d: 1280x800@75
    mode!(106500, [1280, 1360, 1488, 1696], [800, 803, 809, 838], NHSYNC | PVSYNC),
    // 0x1e: 1280x800@85
    mode!(122500, [1280, 1360, 1496, 1712], [800, 803, 809, 843], NHSYNC | PVSYNC),
    // 0x1f: 1280x800@120 reduced blanking
    mode!(146250, [1280, 1328, 1360, 1440], [800, 803, 809, 847], PHSYNC | NVSYNC),
    // 0x20: 1280x960@60
    mode!(108000, [1280, 1376, 1488, 1800], [960, 961, 964, 1000], PHSYNC | PVSYNC),
    // 0x21: 1280x960@85
    mode!(148500, [1280, 1344, 1504, 1728], [960, 961, 964, 1011], PHSYNC | PVSYNC),
    // 0x22: 1280x960@120 reduced blanking
    mode!(175500, [1280, 1328, 1360, 1440], [960, 963, 967, 1017], PHSYNC | NVSYNC),
    // 0x23: 1280x1024@60
    mode!(108000, [1280, 1328, 1440, 1688], [1024, 1025, 1028, 1066], PHSYNC | PVSYNC),
    // 0x24: 1280x1024@75
    mode!(135000, [1280, 1296, 1440, 1688], [1024, 1025, 1028, 1066], PHSYNC | PVSYNC),
    // 0x25: 1280x1024@85
    mode!(157500, [1280, 1344, 1504, 1728], [1024, 1025, 1028, 1072], PHSYNC | PVSYNC),
    // 0x26: 1280x1024@120 reduced blanking
    mode!(187250, [1280, 1328, 1360, 1440], [1024, 1027, 1034, 1084], PHSYNC | NVSYNC),
    // 0x27: 1360x768@60
    mode!(85500, [1360, 1424, 1536, 1792], [768, 771, 777, 795], PHSYNC | PVSYNC),
    // 0x28: 1360x768@120 reduced blanking
    mode!(148250, [1360, 1408, 1440, 1520], [768, 771, 776, 813], PHSYNC | NVSYNC),
    // 0x51: 1366x768@60
    mode!(85500, [1366, 1436, 1579, 1792], [768, 771, 774, 798], PHSYNC | PVSYNC),
    // 0x56: 1366x768@60
    mode!(72000, [1366, 1380, 1436, 1500], [768, 769, 772, 800], PHSYNC | PVSYNC),
    // 0x29: 1400x1050@60 reduced blanking
    mode!(101000, [1400, 1448, 1480, 1560], [1050, 1053, 1057, 1080], PHSYNC | NVSYNC),
    // 0x2a: 1400x1050@60
    mode!(121750, [1400, 1488, 1632, 1864], [1050, 1053, 1057, 1089], NHSYNC | PVSYNC),
    // 0x2b: 1400x1050@75
    mode!(156000, [1400, 1504, 1648, 1896], [1050, 1053, 1057, 1099], NHSYNC | PVSYNC),
    // 0x2c: 1400x1050@85
    mode!(179500, [1400, 1504, 1656, 1912], [1050, 1053, 1057, 1105], NHSYNC | PVSYNC),
    // 0x2d: 1400x1050@120 reduced blanking
    mode!(208000, [1400, 1448, 1480, 1560], [1050, 1053, 1057, 1112], PHSYNC | NVSYNC),
    // 0x2e: 1440x900@60 reduced blanking
    mode!(88750, [1440, 1488, 1520, 1600], [900, 903, 909, 926], PHSYNC | NVSYNC),
    // 0x2f: 1440x900@60
    mode!(106500, [1440, 1520, 1672, 1904], [900, 903, 909, 934], NHSYNC | PVSYNC),
    // 0x30: 1440x900@75
    mode!(136750, [1440, 1536, 1688, 1936], [900, 903, 909, 942], NHSYNC | PVSYNC),
    // 0x31: 1440x900@85
    mode!(157000, [1440, 1544, 1696, 1952], [900, 903, 909, 948], NHSYNC | PVSYNC),
    // 0x32: 1440x900@120 reduced blanking
    mode!(182750, [1440, 1488, 1520, 1600], [900, 903, 909, 953], PHSYNC | NVSYNC),
    // 0x53: 1600x900@60
    mode!(108000, [1600, 1624, 1704, 1800], [900, 901, 904, 1000], PHSYNC | PVSYNC),
    // 0x33: 1600x1200@60
    mode!(162000, [1600, 1664, 1856, 2160], [1200, 1201, 1204, 1250], PHSYNC | PVSYNC),
    // 0x34: 1600x1200@65
    mode!(175500, [1600, 1664, 1856, 2160], [1200, 1201, 1204, 1250], PHSYNC | PVSYNC),
    // 0x35: 1600x1200@70
    mode!(189000, [1600, 1664, 1856, 2160], [1200, 1201, 1204, 1250], PHSYNC | PVSYNC),
    // 0x36: 1600x1200@75
    mode!(202500, [1600, 1664, 1856, 2160], [1200, 1201, 1204, 1250], PHSYNC | PVSYNC),
    // 0x37: 1600x1200@85
    mode!(229500, [1600, 1664, 1856, 2160], [1200, 1201, 1204, 1250], PHSYNC | PVSYNC),
    // 0x38: 1600x1200@120 reduced blanking
    mode!(268250, [1600, 1648, 1680, 1760], [1200, 1203, 1207, 1271], PHSYNC | NVSYNC),
    // 0x39: 1680x1050@60 reduced blanking
    mode!(119000, [1680, 1728, 1760, 1840], [1050, 1053, 1059, 1080], PHSYNC | NVSYNC),
    // 0x3a: 1680x1050@60
    mode!(146250, [1680, 1784, 1960, 2240], [1050, 1053, 1059, 1089], NHSYNC | PVSYNC),
    // 0x3b: 1680x1050@75
    mode!(187000, [1680, 1800, 1976, 2272], [1050, 1053, 1059, 1099], NHSYNC | PVSYNC),
    // 0x3c: 1680x1050@85
    mode!(214750, [1680, 1808, 1984, 2288], [1050, 1053, 1059, 1105], NHSYNC | PVSYNC),
    // 0x3d: 1680x1050@120 reduced blanking
    mode!(245500, [1680, 1728, 1760, 1840], [1050, 1053, 1059, 1112], PHSYNC | NVSYNC),
    // 0x3e: 1792x1344@60
    mode!(204750, [1792, 1920, 2120, 2448], [1344, 1345, 1348, 1394], NHSYNC | PVSYNC),
    // 0x3f: 1792x1344@75
    mode!(261000, [1792, 1888, 2104, 2456], [1344, 1345, 1348, 1417], NHSYNC | PVSYNC),
    // 0x40: 1792x1344@120 reduced blanking
    mode!(333250, [1792, 1840, 1872, 1952], [1344, 1347, 1351, 1423], PHSYNC | NVSYNC),
    // 0x41: 1856x1392@60
    mode!(218250, [1856, 1952, 2176, 2528], [1392, 1393, 1396, 1439], NHSYNC | PVSYNC),
    // 0x42: 1856x1392@75
    mode!(288000, [1856, 1984, 2208, 2560], [1392, 1393, 1396, 1500], NHSYNC | PVSYNC),
    // 0x43: 1856x1392@120 reduced blanking
    mode!(356500, [1856, 1904, 1936, 2016], [1392, 1395, 1399, 1474], PHSYNC | NVSYNC),
    // 0x52: 1920x1080@60
    mode!(148500, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], NHSYNC | NVSYNC),
    // 0x44: 1920x1200@60 reduced blanking
    mode!(154000, [1920, 1968, 2000, 2080], [1200, 1203, 1209, 1235], PHSYNC | NVSYNC),
    // 0x45: 1920x1200@60
    mode!(193250, [1920, 2056, 2256, 2592], [1200, 1203, 1209, 1245], NHSYNC | PVSYNC),
    // 0x46: 1920x1200@75
    mode!(245250, [1920, 2056, 2264, 2608], [1200, 1203, 1209, 1255], NHSYNC | PVSYNC),
    // 0x47: 1920x1200@85
    mode!(281250, [1920, 2064, 2272, 2624], [1200, 1203, 1209, 1262], NHSYNC | PVSYNC),
    // 0x48: 1920x1200@120 reduced blanking
    mode!(317000, [1920, 1968, 2000, 2080], [1200, 1203, 1209, 1271], PHSYNC | NVSYNC),
    // 0x49: 1920x1440@60
    mode!(234000, [1920, 2048, 2256, 2600], [1440, 1441, 1444, 1500], NHSYNC | PVSYNC),
    // 0x4a: 1920x1440@75
    mode!(297000, [1920, 2064, 2288, 2640], [1440, 1441, 1444, 1500], NHSYNC | PVSYNC),
    // 0x4b: 1920x1440@120 reduced blanking
    mode!(380500, [1920, 1968, 2000, 2080], [1440, 1443, 1447, 1525], PHSYNC | NVSYNC),
    // 0x54: 2048x1152@60
    mode!(162000, [2048, 2074, 2154, 2250], [1152, 1153, 1156, 1200], PHSYNC | PVSYNC),
    // 0x4c: 2560x1600@60 reduced blanking
    mode!(268500, [2560, 2608, 2640, 2720], [1600, 1603, 1609, 1646], PHSYNC | NVSYNC),
    // 0x4d: 2560x1600@60
    mode!(348500, [2560, 2752, 3032, 3504], [1600, 1603, 1609, 1658], NHSYNC | PVSYNC),
    // 0x4e: 2560x1600@75
    mode!(443250, [2560, 2768, 3048, 3536], [1600, 1603, 1609, 1672], NHSYNC | PVSYNC),
    // 0x4f: 2560x1600@85
    mode!(505250, [2560, 2768, 3048, 3536], [1600, 1603, 1609, 1682], NHSYNC | PVSYNC),
    // 0x50: 2560x1600@120 reduced blanking
    mode!(552750, [2560, 2608, 2640, 2720], [1600, 1603, 1609, 1694], PHSYNC | NVSYNC),
    // 0x57: 4096x2160@60 reduced blanking
    mode!(556744, [4096, 4104, 4136, 4176], [2160, 2208, 2216, 2222], PHSYNC | NVSYNC),
    // 0x58: 4096x2160@59.94 reduced blanking
    mode!(556188, [4096, 4104, 4136, 4176], [2160, 2208, 2216, 2222], PHSYNC | NVSYNC),
];
