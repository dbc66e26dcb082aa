use crate::table::CodeTable;

/// Encodes a byte sequence into a stream of 12-bit LZW codes.
///
/// Greedy longest-match: the current prefix grows while the extended
/// string is still in the table. On the first miss the prefix's code is
/// emitted, the extended string is added to the table, and matching
/// restarts at the byte that broke the match. After the last byte the
/// final prefix's code is emitted. Once the table holds 4096 entries it
/// stops growing and the rest of the input is coded with the frozen table.
pub fn encode(input: &[u8]) -> Vec<u16> {
    let mut table = CodeTable::new();
    let mut codes = Vec::new();
    let mut prefix: Vec<u8> = Vec::new();

    for &byte in input {
        prefix.push(byte);
        if table.code_of(&prefix).is_none() {
            let extended = prefix.clone();
            prefix.pop();
            // the prefix is never empty here: all single bytes are seeded,
            // so a miss needs at least two bytes
            if let Some(code) = table.code_of(&prefix) {
                codes.push(code);
            }
            table.insert(extended);
            prefix.clear();
            prefix.push(byte);
        }
    }

    // empty input never builds a prefix, so nothing is emitted
    if let Some(code) = table.code_of(&prefix) {
        codes.push(code);
    }

    codes
}
