// Generated from the published VESA/CTA timing tables; keep entries in table order.

use super::mode;
use crate::mode::DisplayMode;

/// CTA-861 VICs 1..=127.
pub static CEA_MODES_1: [DisplayMode; 127] = [
    // 1: 640x480@60 4:3
    mode!(25175, [640, 656, 752, 800], [480, 490, 492, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 2: 720x480@60 4:3
    mode!(27000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 3: 720x480@60 16:9
    mode!(27000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect16_9),
    // 4: 1280x720@60 16:9
    mode!(74250, [1280, 1390, 1430, 1650], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 5: 1920x1080i@60 16:9
    mode!(74250, [1920, 2008, 2052, 2200], [1080, 1084, 1094, 1125], PHSYNC | PVSYNC | INTERLACE, Aspect16_9),
    // 6: 720(1440)x480i@60 4:3
    mode!(13500, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 7: 720(1440)x480i@60 16:9
    mode!(13500, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 8: 720(1440)x240@60 4:3
    mode!(13500, [720, 739, 801, 858], [240, 244, 247, 262], NHSYNC | NVSYNC | DBLCLK, Aspect4_3),
    // 9: 720(1440)x240@60 16:9
    mode!(13500, [720, 739, 801, 858], [240, 244, 247, 262], NHSYNC | NVSYNC | DBLCLK, Aspect16_9),
    // 10: 2880x480i@60 4:3
    mode!(54000, [2880, 2956, 3204, 3432], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE, Aspect4_3),
    // 11: 2880x480i@60 16:9
    mode!(54000, [2880, 2956, 3204, 3432], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE, Aspect16_9),
    // 12: 2880x240@60 4:3
    mode!(54000, [2880, 2956, 3204, 3432], [240, 244, 247, 262], NHSYNC | NVSYNC, Aspect4_3),
    // 13: 2880x240@60 16:9
    mode!(54000, [2880, 2956, 3204, 3432], [240, 244, 247, 262], NHSYNC | NVSYNC, Aspect16_9),
    // 14: 1440x480@60 4:3
    mode!(54000, [1440, 1472, 1596, 1716], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 15: 1440x480@60 16:9
    mode!(54000, [1440, 1472, 1596, 1716], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect16_9),
    // 16: 1920x1080@60 16:9
    mode!(148500, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 17: 720x576@50 4:3
    mode!(27000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect4_3),
    // 18: 720x576@50 16:9
    mode!(27000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect16_9),
    // 19: 1280x720@50 16:9
    mode!(74250, [1280, 1720, 1760, 1980], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 20: 1920x1080i@50 16:9
    mode!(74250, [1920, 2448, 2492, 2640], [1080, 1084, 1094, 1125], PHSYNC | PVSYNC | INTERLACE, Aspect16_9),
    // 21: 720(1440)x576i@50 4:3
    mode!(13500, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 22: 720(1440)x576i@50 16:9
    mode!(13500, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 23: 720(1440)x288@50 4:3
    mode!(13500, [720, 732, 795, 864], [288, 290, 293, 312], NHSYNC | NVSYNC | DBLCLK, Aspect4_3),
    // 24: 720(1440)x288@50 16:9
    mode!(13500, [720, 732, 795, 864], [288, 290, 293, 312], NHSYNC | NVSYNC | DBLCLK, Aspect16_9),
    // 25: 2880x576i@50 4:3
    mode!(54000, [2880, 2928, 3180, 3456], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE, Aspect4_3),
    // 26: 2880x576i@50 16:9
    mode!(54000, [2880, 2928, 3180, 3456], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE, Aspect16_9),
    // 27: 2880x288@50 4:3
    mode!(54000, [2880, 2928, 3180, 3456], [288, 290, 293, 312], NHSYNC | NVSYNC, Aspect4_3),
    // 28: 2880x288@50 16:9
    mode!(54000, [2880, 2928, 3180, 3456], [288, 290, 293, 312], NHSYNC | NVSYNC, Aspect16_9),
    // 29: 1440x576@50 4:3
    mode!(54000, [1440, 1464, 1592, 1728], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect4_3),
    // 30: 1440x576@50 16:9
    mode!(54000, [1440, 1464, 1592, 1728], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect16_9),
    // 31: 1920x1080@50 16:9
    mode!(148500, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 32: 1920x1080@24 16:9
    mode!(74250, [1920, 2558, 2602, 2750], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 33: 1920x1080@25 16:9
    mode!(74250, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 34: 1920x1080@30 16:9
    mode!(74250, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 35: 2880x480@60 4:3
    mode!(108000, [2880, 2944, 3192, 3432], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 36: 2880x480@60 16:9
    mode!(108000, [2880, 2944, 3192, 3432], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect16_9),
    // 37: 2880x576@50 4:3
    mode!(108000, [2880, 2928, 3184, 3456], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect4_3),
    // 38: 2880x576@50 16:9
    mode!(108000, [2880, 2928, 3184, 3456], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect16_9),
    // 39: 1920x1080i@50 16:9
    mode!(72000, [1920, 1952, 2120, 2304], [1080, 1126, 1136, 1250], PHSYNC | NVSYNC | INTERLACE, Aspect16_9),
    // 40: 1920x1080i@100 16:9
    mode!(148500, [1920, 2448, 2492, 2640], [1080, 1084, 1094, 1125], PHSYNC | PVSYNC | INTERLACE, Aspect16_9),
    // 41: 1280x720@100 16:9
    mode!(148500, [1280, 1720, 1760, 1980], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 42: 720x576@100 4:3
    mode!(54000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect4_3),
    // 43: 720x576@100 16:9
    mode!(54000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect16_9),
    // 44: 720(1440)x576i@100 4:3
    mode!(27000, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 45: 720(1440)x576i@100 16:9
    mode!(27000, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 46: 1920x1080i@120 16:9
    mode!(148500, [1920, 2008, 2052, 2200], [1080, 1084, 1094, 1125], PHSYNC | PVSYNC | INTERLACE, Aspect16_9),
    // 47: 1280x720@120 16:9
    mode!(148500, [1280, 1390, 1430, 1650], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 48: 720x480@120 4:3
    mode!(54000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 49: 720x480@120 16:9
    mode!(54000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect16_9),
    // 50: 720(1440)x480i@120 4:3
    mode!(27000, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 51: 720(1440)x480i@120 16:9
    mode!(27000, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 52: 720x576@200 4:3
    mode!(108000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect4_3),
    // 53: 720x576@200 16:9
    mode!(108000, [720, 732, 796, 864], [576, 581, 586, 625], NHSYNC | NVSYNC, Aspect16_9),
    // 54: 720(1440)x576i@200 4:3
    mode!(54000, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 55: 720(1440)x576i@200 16:9
    mode!(54000, [720, 732, 795, 864], [576, 580, 586, 625], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 56: 720x480@240 4:3
    mode!(108000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect4_3),
    // 57: 720x480@240 16:9
    mode!(108000, [720, 736, 798, 858], [480, 489, 495, 525], NHSYNC | NVSYNC, Aspect16_9),
    // 58: 720(1440)x480i@240 4:3
    mode!(54000, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect4_3),
    // 59: 720(1440)x480i@240 16:9
    mode!(54000, [720, 739, 801, 858], [480, 488, 494, 525], NHSYNC | NVSYNC | INTERLACE | DBLCLK, Aspect16_9),
    // 60: 1280x720@24 16:9
    mode!(59400, [1280, 3040, 3080, 3300], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 61: 1280x720@25 16:9
    mode!(74250, [1280, 3700, 3740, 3960], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 62: 1280x720@30 16:9
    mode!(74250, [1280, 3040, 3080, 3300], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 63: 1920x1080@120 16:9
    mode!(297000, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 64: 1920x1080@100 16:9
    mode!(297000, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 65: 1280x720@24 64:27
    mode!(59400, [1280, 3040, 3080, 3300], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 66: 1280x720@25 64:27
    mode!(74250, [1280, 3700, 3740, 3960], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 67: 1280x720@30 64:27
    mode!(74250, [1280, 3040, 3080, 3300], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 68: 1280x720@50 64:27
    mode!(74250, [1280, 1720, 1760, 1980], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 69: 1280x720@60 64:27
    mode!(74250, [1280, 1390, 1430, 1650], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 70: 1280x720@100 64:27
    mode!(148500, [1280, 1720, 1760, 1980], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 71: 1280x720@120 64:27
    mode!(148500, [1280, 1390, 1430, 1650], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 72: 1920x1080@24 64:27
    mode!(74250, [1920, 2558, 2602, 2750], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 73: 1920x1080@25 64:27
    mode!(74250, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 74: 1920x1080@30 64:27
    mode!(74250, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 75: 1920x1080@50 64:27
    mode!(148500, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 76: 1920x1080@60 64:27
    mode!(148500, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 77: 1920x1080@100 64:27
    mode!(297000, [1920, 2448, 2492, 2640], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 78: 1920x1080@120 64:27
    mode!(297000, [1920, 2008, 2052, 2200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 79: 1680x720@24 64:27
    mode!(59400, [1680, 3040, 3080, 3300], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 80: 1680x720@25 64:27
    mode!(59400, [1680, 2908, 2948, 3168], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 81: 1680x720@30 64:27
    mode!(59400, [1680, 2380, 2420, 2640], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 82: 1680x720@50 64:27
    mode!(82500, [1680, 1940, 1980, 2200], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 83: 1680x720@60 64:27
    mode!(99000, [1680, 1940, 1980, 2200], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 84: 1680x720@100 64:27
    mode!(165000, [1680, 1740, 1780, 2000], [720, 725, 730, 825], PHSYNC | PVSYNC, Aspect64_27),
    // 85: 1680x720@120 64:27
    mode!(198000, [1680, 1740, 1780, 2000], [720, 725, 730, 825], PHSYNC | PVSYNC, Aspect64_27),
    // 86: 2560x1080@24 64:27
    mode!(99000, [2560, 3558, 3602, 3750], [1080, 1084, 1089, 1100], PHSYNC | PVSYNC, Aspect64_27),
    // 87: 2560x1080@25 64:27
    mode!(90000, [2560, 3008, 3052, 3200], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 88: 2560x1080@30 64:27
    mode!(118800, [2560, 3328, 3372, 3520], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 89: 2560x1080@50 64:27
    mode!(185625, [2560, 3108, 3152, 3300], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 90: 2560x1080@60 64:27
    mode!(198000, [2560, 2808, 2852, 3000], [1080, 1084, 1089, 1100], PHSYNC | PVSYNC, Aspect64_27),
    // 91: 2560x1080@100 64:27
    mode!(371250, [2560, 2778, 2822, 2970], [1080, 1084, 1089, 1250], PHSYNC | PVSYNC, Aspect64_27),
    // 92: 2560x1080@120 64:27
    mode!(495000, [2560, 3108, 3152, 3300], [1080, 1084, 1089, 1250], PHSYNC | PVSYNC, Aspect64_27),
    // 93: 3840x2160@24 16:9
    mode!(297000, [3840, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 94: 3840x2160@25 16:9
    mode!(297000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 95: 3840x2160@30 16:9
    mode!(297000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 96: 3840x2160@50 16:9
    mode!(594000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 97: 3840x2160@60 16:9
    mode!(594000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 98: 4096x2160@24 256:135
    mode!(297000, [4096, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 99: 4096x2160@25 256:135
    mode!(297000, [4096, 5064, 5152, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 100: 4096x2160@30 256:135
    mode!(297000, [4096, 4184, 4272, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 101: 4096x2160@50 256:135
    mode!(594000, [4096, 5064, 5152, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 102: 4096x2160@60 256:135
    mode!(594000, [4096, 4184, 4272, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 103: 3840x2160@24 64:27
    mode!(297000, [3840, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 104: 3840x2160@25 64:27
    mode!(297000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 105: 3840x2160@30 64:27
    mode!(297000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 106: 3840x2160@50 64:27
    mode!(594000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 107: 3840x2160@60 64:27
    mode!(594000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 108: 1280x720@48 16:9
    mode!(90000, [1280, 2240, 2280, 2500], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect16_9),
    // 109: 1280x720@48 64:27
    mode!(90000, [1280, 2240, 2280, 2500], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 110: 1680x720@48 64:27
    mode!(99000, [1680, 2490, 2530, 2750], [720, 725, 730, 750], PHSYNC | PVSYNC, Aspect64_27),
    // 111: 1920x1080@48 16:9
    mode!(148500, [1920, 2558, 2602, 2750], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect16_9),
    // 112: 1920x1080@48 64:27
    mode!(148500, [1920, 2558, 2602, 2750], [1080, 1084, 1089, 1125], PHSYNC | PVSYNC, Aspect64_27),
    // 113: 2560x1080@48 64:27
    mode!(198000, [2560, 3558, 3602, 3750], [1080, 1084, 1089, 1100], PHSYNC | PVSYNC, Aspect64_27),
    // 114: 3840x2160@48 16:9
    mode!(594000, [3840, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 115: 4096x2160@48 256:135
    mode!(594000, [4096, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 116: 3840x2160@48 64:27
    mode!(594000, [3840, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 117: 3840x2160@100 16:9
    mode!(1188000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 118: 3840x2160@120 16:9
    mode!(1188000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 119: 3840x2160@100 64:27
    mode!(1188000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 120: 3840x2160@120 64:27
    mode!(1188000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 121: 5120x2160@24 64:27
    mode!(396000, [5120, 7116, 7204, 7500], [2160, 2168, 2178, 2200], PHSYNC | PVSYNC, Aspect64_27),
    // 122: 5120x2160@25 64:27
    mode!(396000, [5120, 6816, 6904, 7200], [2160, 2168, 2178, 2200], PHSYNC | PVSYNC, Aspect64_27),
    // 123: 5120x2160@30 64:27
    mode!(396000, [5120, 5784, 5872, 6000], [2160, 2168, 2178, 2200], PHSYNC | PVSYNC, Aspect64_27),
    // 124: 5120x2160@48 64:27
    mode!(742500, [5120, 5866, 5954, 6250], [2160, 2168, 2178, 2475], PHSYNC | PVSYNC, Aspect64_27),
    // 125: 5120x2160@50 64:27
    mode!(742500, [5120, 6216, 6304, 6600], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 126: 5120x2160@60 64:27
    mode!(742500, [5120, 5284, 5372, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 127: 5120x2160@100 64:27
    mode!(1485000, [5120, 6216, 6304, 6600], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
];

/// CTA-861 VICs 193..=219.
pub static CEA_MODES_193: [DisplayMode; 27] = [
    // 193: 5120x2160@120 64:27
    mode!(1485000, [5120, 5284, 5372, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect64_27),
    // 194: 7680x4320@24 16:9
    mode!(1188000, [7680, 10232, 10408, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect16_9),
    // 195: 7680x4320@25 16:9
    mode!(1188000, [7680, 10032, 10208, 10800], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect16_9),
    // 196: 7680x4320@30 16:9
    mode!(1188000, [7680, 8232, 8408, 9000], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect16_9),
    // 197: 7680x4320@48 16:9
    mode!(2376000, [7680, 10232, 10408, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect16_9),
    // 198: 7680x4320@50 16:9
    mode!(2376000, [7680, 10032, 10208, 10800], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect16_9),
    // 199: 7680x4320@60 16:9
    mode!(2376000, [7680, 8232, 8408, 9000], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect16_9),
    // 200: 7680x4320@100 16:9
    mode!(4752000, [7680, 9792, 9968, 10560], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect16_9),
    // 201: 7680x4320@120 16:9
    mode!(4752000, [7680, 8032, 8208, 8800], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect16_9),
    // 202: 7680x4320@24 64:27
    mode!(1188000, [7680, 10232, 10408, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 203: 7680x4320@25 64:27
    mode!(1188000, [7680, 10032, 10208, 10800], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 204: 7680x4320@30 64:27
    mode!(1188000, [7680, 8232, 8408, 9000], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 205: 7680x4320@48 64:27
    mode!(2376000, [7680, 10232, 10408, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 206: 7680x4320@50 64:27
    mode!(2376000, [7680, 10032, 10208, 10800], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 207: 7680x4320@60 64:27
    mode!(2376000, [7680, 8232, 8408, 9000], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 208: 7680x4320@100 64:27
    mode!(4752000, [7680, 9792, 9968, 10560], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 209: 7680x4320@120 64:27
    mode!(4752000, [7680, 8032, 8208, 8800], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 210: 10240x4320@24 64:27
    mode!(1485000, [10240, 11732, 11908, 12500], [4320, 4336, 4356, 4950], PHSYNC | PVSYNC, Aspect64_27),
    // 211: 10240x4320@25 64:27
    mode!(1485000, [10240, 12732, 12908, 13500], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 212: 10240x4320@30 64:27
    mode!(1485000, [10240, 10528, 10704, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 213: 10240x4320@48 64:27
    mode!(2970000, [10240, 11732, 11908, 12500], [4320, 4336, 4356, 4950], PHSYNC | PVSYNC, Aspect64_27),
    // 214: 10240x4320@50 64:27
    mode!(2970000, [10240, 12732, 12908, 13500], [4320, 4336, 4356, 4400], PHSYNC | PVSYNC, Aspect64_27),
    // 215: 10240x4320@60 64:27
    mode!(2970000, [10240, 10528, 10704, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 216: 10240x4320@100 64:27
    mode!(5940000, [10240, 12432, 12608, 13200], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 217: 10240x4320@120 64:27
    mode!(5940000, [10240, 10528, 10704, 11000], [4320, 4336, 4356, 4500], PHSYNC | PVSYNC, Aspect64_27),
    // 218: 4096x2160@100 256:135
    mode!(1188000, [4096, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
    // 219: 4096x2160@120 256:135
    mode!(1188000, [4096, 4184, 4272, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
];

/// HDMI 1.4 VSDB VICs 1..=4; VIC `n` lives at index `n - 1`.
pub static HDMI_MODES: [DisplayMode; 4] = [
    // 1: 3840x2160@30
    mode!(297000, [3840, 4016, 4104, 4400], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 2: 3840x2160@25
    mode!(297000, [3840, 4896, 4984, 5280], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 3: 3840x2160@24
    mode!(297000, [3840, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect16_9),
    // 4: 4096x2160@24
    mode!(297000, [4096, 5116, 5204, 5500], [2160, 2168, 2178, 2250], PHSYNC | PVSYNC, Aspect256_135),
];
