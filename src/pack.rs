use itertools::Itertools;
use thiserror::Error;

/// Fills the second half of the trailing 3-byte group when the code count
/// is odd.
const PAD_CODE: u16 = 0;

const MAX_CODE: u16 = 0xFFF;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("code {code} does not fit in 12 bits")]
    CodeOutOfRange { code: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnpackError {
    #[error("packed buffer length {len} is not a multiple of 3")]
    RaggedLength { len: usize },
}

/// Packs 12-bit codes two at a time into 3-byte groups.
///
/// For a pair `(c1, c2)` the group is `c1`'s high byte, then `c1`'s low
/// nibble next to `c2`'s high nibble, then `c2`'s low byte. An unpaired
/// final code is paired with a zero pad code and still emits a full group,
/// so the output length is always a multiple of 3. Nothing in the output
/// marks the pad; see [`crate::decompress`] for how the trailing zero is
/// treated on the way back.
pub fn pack(codes: &[u16]) -> Result<Vec<u8>, PackError> {
    if let Some(&code) = codes.iter().find(|&&code| code > MAX_CODE) {
        return Err(PackError::CodeOutOfRange { code });
    }

    let mut bytes = Vec::with_capacity(codes.len().div_ceil(2) * 3);
    for pair in codes.chunks(2) {
        let first = pair[0];
        let second = pair.get(1).copied().unwrap_or(PAD_CODE);
        bytes.push((first >> 4) as u8);
        bytes.push(((first & 0x00F) << 4 | second >> 8) as u8);
        bytes.push((second & 0x0FF) as u8);
    }

    Ok(bytes)
}

/// Splits a packed buffer back into 12-bit codes, two per 3-byte group.
pub fn unpack(bytes: &[u8]) -> Result<Vec<u16>, UnpackError> {
    if bytes.len() % 3 != 0 {
        return Err(UnpackError::RaggedLength { len: bytes.len() });
    }

    let codes = bytes
        .iter()
        .copied()
        .tuples()
        .flat_map(|(byte0, byte1, byte2)| {
            let first = (byte0 as u16) << 4 | (byte1 as u16) >> 4;
            let second = ((byte1 as u16) & 0x00F) << 8 | byte2 as u16;
            [first, second]
        })
        .collect_vec();

    Ok(codes)
}
