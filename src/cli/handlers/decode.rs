use crate::cli::{
    args::DecodeArgs,
    config::create_encoding,
    global::GlobalArgs,
    io::{read_input, write_output},
};
use base_block::EncodingsConfig;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &EncodingsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = create_encoding(config, &args.encoding)?;
    let input_text = read_input(args.file.as_deref(), global)?;

    // Line breaks inside the text are ignorable; trailing spaces from
    // editors or `echo` are not, so trim both ends first.
    let decoded = encoding.decode(input_text.trim_ascii())?;
    tracing::info!(
        encoding = encoding.name(),
        input_bytes = input_text.len(),
        output_bytes = decoded.len(),
        "decoded"
    );

    write_output(args.output.as_deref(), &decoded)
}
