use std::{env, fs};

use anyhow::{bail, Context};
use lzw_compression::{compress, decompress};

const SKIP_BINARY_PATH: usize = 1;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(SKIP_BINARY_PATH);
    let mode = args
        .next()
        .context("missing mode, expected compress | decompress")?;
    let input_path = args.next().context("missing input file")?;
    let output_path = args.next().context("missing output file")?;

    let input =
        fs::read(&input_path).with_context(|| format!("failed to read {input_path}"))?;

    match mode.as_str() {
        "compress" => {
            if !output_path.to_lowercase().ends_with(".z") {
                bail!("compressed file must have the file extension *.z");
            }
            let compressed = compress(&input)?;
            fs::write(&output_path, &compressed.bytes)
                .with_context(|| format!("failed to write {output_path}"))?;
            println!("compression ratio: {:.3}", compressed.compression_ratio());
        }
        "decompress" => {
            let decompressed = decompress(&input)?;
            fs::write(&output_path, &decompressed)
                .with_context(|| format!("failed to write {output_path}"))?;
        }
        other => bail!("unknown mode {other:?}, expected compress | decompress"),
    }

    Ok(())
}
