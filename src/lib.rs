//! Lossless LZW compression over byte streams, using fixed-width 12-bit
//! codes packed two codes per three bytes. The code table is seeded with
//! the 256 single-byte strings, grows by one entry per encoding step, and
//! freezes once the 12-bit code space (4096 entries) is used up.

pub mod decode;
pub mod encode;
pub mod pack;
pub mod table;

use thiserror::Error;

pub use decode::decode;
pub use encode::encode;
pub use pack::{pack, unpack};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pack(#[from] pack::PackError),
    #[error(transparent)]
    Unpack(#[from] pack::UnpackError),
    #[error(transparent)]
    Decode(#[from] decode::DecodeError),
}

/// A packed bitstream together with the input length it was built from.
#[derive(Debug)]
pub struct Compressed {
    pub bytes: Vec<u8>,
    original_len: usize,
}

impl Compressed {
    /// Original byte count over packed byte count. An empty input packs to
    /// an empty buffer and reports 1.0.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes.is_empty() {
            return 1.0;
        }
        self.original_len as f64 / self.bytes.len() as f64
    }
}

/// Compresses `input` into a packed 12-bit LZW code stream.
pub fn compress(input: &[u8]) -> Result<Compressed, Error> {
    let codes = encode::encode(input);
    let bytes = pack::pack(&codes)?;
    Ok(Compressed {
        bytes,
        original_len: input.len(),
    })
}

/// Reverses [`compress`].
///
/// Packing always emits whole 3-byte groups, so an odd code count comes
/// back from [`unpack`] with one synthetic zero code appended, and the
/// stream itself cannot tell that pad apart from a genuine trailing code
/// 0. Exactly one trailing zero code is stripped before decoding, which
/// means an input whose encoding ends in code 0 at an even code count
/// loses its final NUL byte. The `.z` format carries no code count that
/// could resolve this.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut codes = pack::unpack(input)?;
    if codes.last() == Some(&0) {
        codes.pop();
    }
    let output = decode::decode(&codes)?;
    Ok(output)
}
