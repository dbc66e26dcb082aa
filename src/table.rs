use std::collections::HashMap;

/// Hard cap on table entries implied by the fixed 12-bit code width.
pub const MAX_TABLE_SIZE: usize = 4096;

/// Encode-side dictionary mapping byte strings to their assigned codes.
///
/// Seeded with the 256 single-byte entries, so every length-one prefix is
/// always known. New strings get the next free code (the current table
/// size) until the 12-bit code space is used up; after that `insert`
/// becomes a no-op and the table is frozen for the rest of the call.
#[derive(Debug)]
pub struct CodeTable {
    codes: HashMap<Vec<u8>, u16>,
}

impl CodeTable {
    pub fn new() -> Self {
        let codes = (0..=255u8).map(|byte| (vec![byte], byte as u16)).collect();
        Self { codes }
    }

    pub fn code_of(&self, string: &[u8]) -> Option<u16> {
        self.codes.get(string).copied()
    }

    pub fn insert(&mut self, string: Vec<u8>) {
        let next_code = self.codes.len();
        if next_code < MAX_TABLE_SIZE {
            self.codes.insert(string, next_code as u16);
            if next_code + 1 == MAX_TABLE_SIZE {
                log::debug!("code table reached {MAX_TABLE_SIZE} entries, freezing");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

/// Decode-side mirror of [`CodeTable`]: byte strings addressed by their
/// insertion index, which is exactly the code the encoder assigned.
#[derive(Debug)]
pub struct StringTable {
    strings: Vec<Vec<u8>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            strings: (0..=255u8).map(|byte| vec![byte]).collect(),
        }
    }

    pub fn string_of(&self, code: u16) -> Option<&[u8]> {
        self.strings.get(code as usize).map(Vec::as_slice)
    }

    pub fn insert(&mut self, string: Vec<u8>) {
        if self.strings.len() < MAX_TABLE_SIZE {
            self.strings.push(string);
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeTable, StringTable, MAX_TABLE_SIZE};

    #[test]
    fn code_table_is_seeded_with_single_bytes() {
        let table = CodeTable::new();
        assert_eq!(table.len(), 256);
        assert_eq!(table.code_of(&[0]), Some(0));
        assert_eq!(table.code_of(&[65]), Some(65));
        assert_eq!(table.code_of(&[255]), Some(255));
        assert_eq!(table.code_of(&[65, 66]), None);
    }

    #[test]
    fn code_table_assigns_codes_in_insertion_order() {
        let mut table = CodeTable::new();
        table.insert(vec![65, 66]);
        table.insert(vec![66, 67]);
        assert_eq!(table.code_of(&[65, 66]), Some(256));
        assert_eq!(table.code_of(&[66, 67]), Some(257));
    }

    #[test]
    fn code_table_freezes_at_the_12_bit_ceiling() {
        let mut table = CodeTable::new();
        for i in 0..MAX_TABLE_SIZE as u16 {
            table.insert(vec![65, (i >> 8) as u8, i as u8]);
        }
        assert_eq!(table.len(), MAX_TABLE_SIZE);
        table.insert(vec![90, 90, 90, 90]);
        assert_eq!(table.len(), MAX_TABLE_SIZE);
        assert_eq!(table.code_of(&[90, 90, 90, 90]), None);
    }

    #[test]
    fn string_table_mirrors_the_seeded_codes() {
        let table = StringTable::new();
        assert_eq!(table.len(), 256);
        assert_eq!(table.string_of(65), Some([65].as_slice()));
        assert_eq!(table.string_of(256), None);
    }

    #[test]
    fn string_table_freezes_at_the_12_bit_ceiling() {
        let mut table = StringTable::new();
        for i in 0..MAX_TABLE_SIZE as u16 {
            table.insert(vec![65, (i >> 8) as u8, i as u8]);
        }
        assert_eq!(table.len(), MAX_TABLE_SIZE);
        table.insert(vec![90, 90]);
        assert_eq!(table.len(), MAX_TABLE_SIZE);
    }
}
