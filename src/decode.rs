use thiserror::Error;

use crate::table::StringTable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("code {code} has no table entry yet (table holds {table_len})")]
    InvalidCode { code: u16, table_len: usize },
}

/// Rebuilds the original byte sequence from a 12-bit LZW code stream.
///
/// The string table is grown by the same deterministic rule the encoder
/// uses, so both sides assign identical codes without the table ever being
/// transmitted. The one wrinkle is a code referring to the entry the
/// decoder is just about to create; it decodes to the previous string
/// extended by its own first byte. The table freezes at 4096 entries,
/// matching the encoder exactly.
pub fn decode(codes: &[u16]) -> Result<Vec<u8>, DecodeError> {
    let mut iter = codes.iter().copied();
    let first = match iter.next() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };

    let mut table = StringTable::new();
    let mut previous = table
        .string_of(first)
        .ok_or(DecodeError::InvalidCode {
            code: first,
            table_len: 256,
        })?
        .to_vec();
    let mut output = previous.clone();

    for code in iter {
        let current = match table.string_of(code) {
            Some(string) => string.to_vec(),
            None if code as usize == table.len() => {
                let mut string = previous.clone();
                string.push(previous[0]);
                string
            }
            None => {
                return Err(DecodeError::InvalidCode {
                    code,
                    table_len: table.len(),
                })
            }
        };

        output.extend_from_slice(&current);
        let mut entry = previous;
        entry.push(current[0]);
        table.insert(entry);
        previous = current;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{decode, DecodeError};
    use rstest::rstest;

    #[rstest]
    #[case(&[], b"".to_vec())]
    #[case(&[42], vec![42])]
    #[case(&[65, 256], b"AAA".to_vec())]
    #[case(&[65, 66, 256, 256], b"ABABAB".to_vec())]
    #[case(
        &[84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263],
        b"TOBEORNOTTOBEORTOBEORNOT".to_vec()
    )]
    fn test_decoding(#[case] codes: &[u16], #[case] expected: Vec<u8>) {
        assert_eq!(decode(codes), Ok(expected));
    }

    #[test]
    fn code_ahead_of_the_table_is_rejected() {
        // 256 would be the next assignment; 300 cannot exist yet
        let result = decode(&[65, 300]);
        assert_eq!(
            result,
            Err(DecodeError::InvalidCode {
                code: 300,
                table_len: 256
            })
        );
    }

    #[test]
    fn first_code_above_the_seeded_range_is_rejected() {
        let result = decode(&[256]);
        assert_eq!(
            result,
            Err(DecodeError::InvalidCode {
                code: 256,
                table_len: 256
            })
        );
    }
}
