use crate::cli::{
    args::EncodeArgs,
    config::create_encoding,
    global::GlobalArgs,
    io::{read_input, write_output},
};
use base_block::EncodingsConfig;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &EncodingsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(config, &args.encoding)?;
    let input_data = read_input(args.file.as_deref(), global)?;

    let encoded = encoding.encode(&input_data);
    tracing::info!(
        encoding = encoding.name(),
        input_bytes = input_data.len(),
        output_symbols = encoded.len(),
        "encoded"
    );

    // -w 0 turns off a wrap width set by the registry entry
    let wrap = match args.wrap {
        Some(0) => None,
        Some(cols) => Some(cols),
        None => encoding.wrap(),
    };

    let mut text = match wrap {
        Some(cols) => wrap_lines(&encoded, cols),
        None => encoded,
    };
    text.push('\n');

    write_output(args.output.as_deref(), text.as_bytes())
}

/// Breaks `encoded` into lines of at most `cols` characters.
fn wrap_lines(encoded: &str, cols: usize) -> String {
    debug_assert!(cols > 0);
    // Encoded output is ASCII, so byte chunks are character chunks.
    let mut out = String::with_capacity(encoded.len() + encoded.len() / cols);
    for (i, line) in encoded.as_bytes().chunks(cols).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(line.iter().map(|&b| char::from(b)));
    }
    out
}
