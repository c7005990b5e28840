use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::tables::capacity;
use rust_qr_gen::encoder::version::{SEGMENT_OVERHEAD_BYTES, select_version};
use rust_qr_gen::render::{self, DEFAULT_QUIET_ZONE, RenderOptions};
use rust_qr_gen::{
    Encoder, EncoderConfig, MAX_PAYLOAD_BYTES, MaskPattern, OversizePolicy, Version, read_symbol,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text; print it to the terminal or save PNG/SVG
    Encode {
        text: String,
        /// Output file (.png, .svg, ...); terminal preview when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pixels per module
        #[arg(long, default_value_t = 8)]
        scale: u32,
        #[arg(long, default_value_t = DEFAULT_QUIET_ZONE)]
        quiet_zone: usize,
        /// Fixed mask pattern (0-7)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..8))]
        mask: Option<u8>,
        /// Fail instead of truncating payloads that do not fit
        #[arg(long)]
        strict: bool,
    },
    /// Encode text, read the symbol back and compare
    Verify { text: String },
    /// Show version selection and capacity for a payload or for every version
    Inspect { text: Option<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            out,
            scale,
            quiet_zone,
            mask,
            strict,
        } => {
            let mut config = EncoderConfig::from_env();
            if let Some(id) = mask {
                config.mask = MaskPattern::from_bits(id);
            }
            if strict {
                config.oversize = OversizePolicy::Reject;
            }
            encode_cmd(&text, out, RenderOptions { scale, quiet_zone }, config)
        }
        Command::Verify { text } => verify_cmd(&text),
        Command::Inspect { text } => {
            inspect_cmd(text.as_deref());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    text: &str,
    out: Option<PathBuf>,
    opts: RenderOptions,
    config: EncoderConfig,
) -> Result<(), String> {
    let start = Instant::now();
    let symbol = Encoder::with_config(config)
        .encode(text)
        .map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    match out {
        Some(path) => {
            render::save(&symbol.modules, &path, opts).map_err(|e| e.to_string())?;
            println!(
                "Wrote {} (version {}, {}x{} modules, mask {}, {:.1?})",
                path.display(),
                symbol.version.number(),
                symbol.size(),
                symbol.size(),
                symbol.mask_pattern.id(),
                elapsed
            );
        }
        None => print!("{}", render::to_text(&symbol.modules, opts.quiet_zone)),
    }
    Ok(())
}

fn verify_cmd(text: &str) -> Result<(), String> {
    let symbol = Encoder::new().encode(text).map_err(|e| e.to_string())?;
    let decoded = read_symbol(&symbol.modules).map_err(|e| e.to_string())?;
    println!(
        "version={} ec={:?} mask={} payload={} bytes",
        decoded.version.number(),
        decoded.ec_level,
        decoded.mask.id(),
        decoded.payload.len()
    );
    if decoded.payload == text.as_bytes() {
        println!("OK: payload matches");
        Ok(())
    } else {
        Err(format!(
            "payload mismatch: read {:?}",
            String::from_utf8_lossy(&decoded.payload)
        ))
    }
}

fn inspect_cmd(text: Option<&str>) {
    if let Some(text) = text {
        let len = text.len();
        let version = select_version(len);
        let info = capacity(version);
        println!(
            "{} bytes -> version {} ({}x{}), {} data + {} ec codewords",
            len,
            version.number(),
            version.size(),
            version.size(),
            info.data_bytes,
            info.ec_bytes
        );
        return;
    }

    println!("version  size  data  ec  max payload");
    for version in Version::all() {
        let info = capacity(version);
        println!(
            "{:>7}  {:>4}  {:>4}  {:>2}  {:>11}",
            version.number(),
            version.size(),
            info.data_bytes,
            info.ec_bytes,
            (info.data_bytes - SEGMENT_OVERHEAD_BYTES).min(MAX_PAYLOAD_BYTES)
        );
    }
}
