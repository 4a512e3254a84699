#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use vidmode_edid::validate::{block_checksum, header_score, EDID_HEADER};
use vidmode_edid::{
    cvt_mode, BlockValidator, EdidParser, ParserConfig, CEA_EXT, DISPLAYID_EXT, EDID_BLOCK_SIZE,
    VTB_EXT,
};

fn to_block(bytes: &[u8]) -> [u8; EDID_BLOCK_SIZE] {
    let mut block = [0u8; EDID_BLOCK_SIZE];
    block.copy_from_slice(bytes);
    block
}

fn seal(block: &mut [u8; EDID_BLOCK_SIZE]) {
    block[EDID_BLOCK_SIZE - 1] = block_checksum(block);
}

/// Random bytes shaped like an EDID: a valid header and checksum on the base block and extension
/// blocks carrying a known tag, so the decoders behind validation get exercised.
fn edid_like() -> impl Strategy<Value = Vec<u8>> {
    let block = prop::collection::vec(any::<u8>(), EDID_BLOCK_SIZE);
    let tag = prop::sample::select(vec![CEA_EXT, DISPLAYID_EXT, VTB_EXT, 0x40]);
    (
        block.clone(),
        prop::collection::vec((tag, block, any::<bool>()), 0..=3),
    )
        .prop_map(|(base, exts)| {
            let mut base = to_block(&base);
            base[..8].copy_from_slice(&EDID_HEADER);
            base[18] = 1;
            base[0x7e] = exts.len() as u8;
            seal(&mut base);

            let mut bytes = base.to_vec();
            for (tag, raw, checksummed) in exts {
                let mut ext = to_block(&raw);
                ext[0] = tag;
                if checksummed {
                    seal(&mut ext);
                }
                bytes.extend_from_slice(&ext);
            }
            bytes
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_algorithm: proptest::test_runner::RngAlgorithm::ChaCha,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0x45d1_d0e5),
        .. ProptestConfig::default()
    })]

    #[test]
    fn checksum_byte_zeroes_the_block(bytes in prop::collection::vec(any::<u8>(), EDID_BLOCK_SIZE)) {
        let mut block = to_block(&bytes);
        seal(&mut block);
        let sum = block.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        prop_assert_eq!(sum, 0);
    }

    #[test]
    fn one_bad_header_byte_is_repaired(pos in 0usize..8, flip in 1u8..=255, threshold in 0u8..=8) {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[..8].copy_from_slice(&EDID_HEADER);
        block[18] = 1;
        block[19] = 4;
        seal(&mut block);
        block[pos] ^= flip;
        prop_assert_eq!(header_score(&block), 7);

        let result = BlockValidator::new(&ParserConfig::new(threshold)).validate(&block, true);
        prop_assert_eq!(result.ok, threshold <= 7);
        prop_assert!(result.corrupt);
        if result.ok {
            prop_assert_eq!(&result.block[..8], &EDID_HEADER[..]);
        }
    }

    #[test]
    fn cvt_reduced_blanking_is_recognised(w in 80u16..=512, h in 480u16..=2160, rb in any::<bool>()) {
        let w = w * 8;
        if let Some(mode) = cvt_mode(w, h, 60, rb, false, false) {
            prop_assert_eq!(mode.is_reduced_blanking(), rb);
        }
    }

    #[test]
    fn parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..=640)) {
        let parser = EdidParser::default();
        let outcome = std::panic::catch_unwind(|| {
            let _ = parser.parse(&bytes);
        });
        prop_assert!(outcome.is_ok());
    }

    #[test]
    fn decoders_never_panic_on_edid_shaped_input(bytes in edid_like()) {
        let parser = EdidParser::default();
        let outcome = std::panic::catch_unwind(|| {
            if let Ok(parsed) = parser.parse(&bytes) {
                let _ = parsed.short_audio_descriptors();
                let _ = parsed.speaker_allocation();
                for mode in &parsed.modes {
                    let _ = parsed.av_sync_delay(mode);
                }
            }
        });
        prop_assert!(outcome.is_ok());
    }

    #[test]
    fn reparsing_the_cleaned_blob_is_stable(bytes in edid_like()) {
        let parser = EdidParser::default();
        let Ok(first) = parser.parse(&bytes) else {
            return Ok(());
        };
        let second = parser.parse(&first.blob.to_bytes()).expect("cleaned blob parses");
        prop_assert_eq!(&second.blob, &first.blob);
        prop_assert_eq!(&second.modes, &first.modes);
        prop_assert_eq!(&second.info, &first.info);
        prop_assert_eq!(second.quirks, first.quirks);
    }
}
