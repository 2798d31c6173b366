use crate::cli::{args::ConfigAction, config::create_encoding, global::GlobalArgs};
use base_block::{CodecKind, Encoding, EncodingsConfig};
use serde::Serialize;

/// One registry entry as printed by `config list --json`.
#[derive(Debug, Serialize)]
struct EncodingSummary<'a> {
    name: &'a str,
    codec: CodecKind,
    binary_block_size: usize,
    encoded_block_size: usize,
    requires_padding: bool,
    generates_padding: bool,
    wrap: Option<usize>,
    description: Option<&'a str>,
}

impl<'a> EncodingSummary<'a> {
    fn new(encoding: &'a Encoding) -> Self {
        let kind = encoding.kind();
        let (binary_block_size, encoded_block_size) = kind.block_sizes();
        EncodingSummary {
            name: encoding.name(),
            codec: kind,
            binary_block_size,
            encoded_block_size,
            requires_padding: kind.requires_padding(),
            generates_padding: kind.generates_padding(),
            wrap: encoding.wrap(),
            description: encoding.description(),
        }
    }
}

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &EncodingsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { encoding } => handle_show(&encoding, config),
    }
}

fn handle_list(json: bool, config: &EncodingsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let encodings = config
        .names()
        .map(|name| create_encoding(config, name))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        let summaries: Vec<_> = encodings.iter().map(EncodingSummary::new).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "encodings": summaries }))?
        );
        return Ok(());
    }

    println!("Available encodings:\n");
    for encoding in &encodings {
        let (binary, encoded) = encoding.kind().block_sizes();
        println!(
            "  {:<20} {}:{}  {:<8}  {}",
            encoding.name(),
            binary,
            encoded,
            padding_label(encoding.kind()),
            encoding.description().unwrap_or("")
        );
    }
    Ok(())
}

fn handle_show(name: &str, config: &EncodingsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(config, name)?;
    let kind = encoding.kind();
    let (binary, encoded) = kind.block_sizes();

    println!("Encoding: {}", encoding.name());
    if let Some(description) = encoding.description() {
        println!("  {}", description);
    }
    println!("  Codec: {}", serde_json::to_value(kind)?.as_str().unwrap_or("?"));
    println!("  Block: {} bytes -> {} symbols", binary, encoded);
    println!("  Padding: {}", padding_label(kind));
    match encoding.wrap() {
        Some(cols) => println!("  Wrap: {} columns", cols),
        None => println!("  Wrap: none"),
    }
    Ok(())
}

fn padding_label(kind: CodecKind) -> &'static str {
    match (kind.generates_padding(), kind.requires_padding()) {
        (true, true) => "padded",
        (false, false) => "unpadded",
        (true, false) => "pad-opt",
        (false, true) => "pad-req",
    }
}
