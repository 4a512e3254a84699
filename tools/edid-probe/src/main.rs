use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vidmode_edid::config::DEFAULT_FIXUP_THRESHOLD;
use vidmode_edid::{
    modes_noedid, set_preferred_mode, DisplayMode, EdidParser, ParsedEdid, ParserConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "edid-probe",
    about = "Decode an EDID blob and print the display info and synthesized mode list."
)]
struct Args {
    /// EDID file path (`-` reads stdin)
    #[arg(required_unless_present = "fallback")]
    input: Option<PathBuf>,

    /// Treat the input as a hex dump instead of raw bytes
    #[arg(long, action = clap::ArgAction::SetTrue)]
    hex: bool,

    /// Header bytes (out of 8) that must match before a damaged header is repaired
    #[arg(long, value_name = "SCORE", default_value_t = DEFAULT_FIXUP_THRESHOLD)]
    fixup_threshold: u8,

    /// Skip decoding and list the no-EDID fallback modes bounded by WxH (0x0 for no bound)
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    fallback: Option<(u16, u16)>,

    /// Print only the mode list
    #[arg(long, action = clap::ArgAction::SetTrue)]
    modes_only: bool,
}

fn parse_size(s: &str) -> Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.parse().map_err(|e| format!("width {w:?}: {e}"))?;
    let h = h.parse().map_err(|e| format!("height {h:?}: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Some((w, h)) = args.fallback {
        let mut modes = modes_noedid(w, h);
        set_preferred_mode(&mut modes, w, h);
        print_modes(&modes);
        return Ok(());
    }
    if args.fixup_threshold > 8 {
        bail!("--fixup-threshold must be between 0 and 8, got {}", args.fixup_threshold);
    }

    let Some(path) = args.input.as_deref() else {
        bail!("an EDID path is required unless --fallback is given");
    };
    let raw = read_input(path)?;
    let parser = EdidParser::new(ParserConfig::new(args.fixup_threshold));
    let parsed = if args.hex {
        let text = String::from_utf8(raw).context("hex input is not UTF-8")?;
        parser.parse_hex(&text)
    } else {
        parser.parse(&raw)
    };
    let edid = parsed.with_context(|| format!("decode EDID from {}", path.display()))?;

    if !args.modes_only {
        print_summary(&edid);
    }
    print_modes(&edid.modes);
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("read EDID from stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn print_summary(edid: &ParsedEdid) {
    let id = &edid.identity;
    println!(
        "{} product {:#06x} serial {:#010x}, week {} of {}, EDID {}.{}{}",
        id.manufacturer,
        id.product,
        id.serial,
        id.week,
        id.year,
        id.version,
        id.revision,
        if edid.corrupt { " (repaired)" } else { "" },
    );
    if !edid.quirks.is_empty() {
        println!("quirks: {:?}", edid.quirks);
    }

    let info = &edid.info;
    if let Some(name) = &info.name {
        println!("name: {name}");
    }
    println!(
        "size: {}x{} mm, {} bpc, color formats {:?}",
        info.width_mm, info.height_mm, info.bpc, info.color_formats
    );
    if let Some((min, max)) = info.monitor_range {
        println!("refresh range: {min}-{max} Hz");
    }
    if info.non_desktop {
        println!("non-desktop display");
    }
    if info.is_hdmi {
        println!(
            "HDMI: max TMDS {} kHz, deep color {:?}, SCDC {}",
            info.max_tmds_clock, info.hdmi_dc_modes, info.hdmi.scdc.supported
        );
    }
    if let Some(hdr) = &info.hdr {
        println!("HDR: EOTF {:#04x}, max CLL {}", hdr.eotf, hdr.max_cll);
    }

    match edid.short_audio_descriptors() {
        Ok(sads) => {
            for sad in sads {
                println!(
                    "audio: format {} channels {} rates {:#04x}",
                    sad.format,
                    u16::from(sad.channels) + 1,
                    sad.freq
                );
            }
        }
        Err(err) => warn!(error = %err, "unreadable audio descriptors"),
    }
    println!();
}

fn print_modes(modes: &[DisplayMode]) {
    for mode in modes {
        let marker = if mode.is_preferred() { "*" } else { " " };
        println!("{marker} {:>3} Hz  {mode}", mode.vrefresh());
    }
}
