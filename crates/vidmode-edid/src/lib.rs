//! EDID, CTA-861 and DisplayID decoding.
//!
//! The entry point is [`EdidParser`]: hand it the raw bytes read from a monitor and it returns
//! the monitor's identity, its [`DisplayInfo`] and an ordered list of [`DisplayMode`]s gathered
//! from every timing source the EDID carries. Everything here is pure computation over caller
//! supplied bytes; reading the bytes from the display is left to a [`BlockSource`].

#![forbid(unsafe_code)]

pub mod blob;
pub mod cea;
pub mod config;
pub mod decode;
pub mod descriptor;
pub mod error;
pub mod ext;
pub mod fetch;
pub mod formula;
pub mod info;
pub mod mode;
pub mod parser;
pub mod quirks;
pub mod tables;
pub mod validate;

/// Size of the base block and of every extension block.
pub const EDID_BLOCK_SIZE: usize = 128;

/// Extension block tags (byte 0 of an extension block).
pub const CEA_EXT: u8 = 0x02;
pub const VTB_EXT: u8 = 0x10;
pub const DISPLAYID_EXT: u8 = 0x70;

pub use blob::{EdidBlob, EdidIdentity};
pub use config::ParserConfig;
pub use error::{EdidError, Result};
pub use fetch::{read_edid, BlockSource};
pub use formula::{cvt_mode, gtf_mode, gtf_mode_secondary, GtfParams};
pub use info::{ColorFormats, DisplayInfo, RgbQuantRange, Sad};
pub use mode::{DisplayMode, MatchFlags, ModeFlags, ModeType, PictureAspect};
pub use parser::{modes_noedid, set_preferred_mode, EdidParser, ParsedEdid};
pub use quirks::Quirks;
pub use validate::{BlockValidator, ValidationResult};
