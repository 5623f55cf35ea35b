// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Bidirectional character <-> Morse code table.
//!
//! A [`SymbolTable`] is validated once when it is built: every code must be a
//! non-empty run of dots and dashes, and no two characters may share a code,
//! so the reverse map is well defined.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

pub const DOT: char = '.';
pub const DASH: char = '-';

/// ITU Morse code, in table order.
pub const ITU_ENTRIES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static ITU_TABLE: LazyLock<SymbolTable> = LazyLock::new(|| {
    match SymbolTable::from_entries(ITU_ENTRIES) {
        Ok(table) => table,
        Err(e) => panic!("built-in ITU table is invalid: {e}"),
    }
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("empty code for '{0}'")]
    EmptyCode(char),

    #[error("code '{code}' for '{ch}' contains symbols other than '.' and '-'")]
    InvalidSymbol { ch: char, code: String },

    #[error("character '{0}' is listed more than once")]
    DuplicateChar(char),

    #[error("code '{code}' is shared by '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
}

/// Immutable character <-> code mapping.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(char, &'static str)>,
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// Build a table from `(char, code)` pairs, deriving the reverse map.
    pub fn from_entries(entries: &[(char, &'static str)]) -> Result<Self, TableError> {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse = HashMap::with_capacity(entries.len());

        for &(ch, code) in entries {
            validate_code(ch, code)?;

            if forward.insert(ch, code).is_some() {
                return Err(TableError::DuplicateChar(ch));
            }
            match reverse.entry(code) {
                Entry::Occupied(existing) => {
                    return Err(TableError::DuplicateCode {
                        code: code.to_string(),
                        first: *existing.get(),
                        second: ch,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(ch);
                }
            }
        }

        Ok(Self {
            entries: entries.to_vec(),
            forward,
            reverse,
        })
    }

    /// The shared ITU table, built on first use.
    pub fn itu() -> &'static SymbolTable {
        &ITU_TABLE
    }

    /// Code for `ch`. Lookup is exact; callers normalise case.
    pub fn encode_char(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character for a single dot/dash token.
    pub fn decode_code(&self, code: &str) -> Option<char> {
        self.reverse.get(code).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.forward.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

fn validate_code(ch: char, code: &str) -> Result<(), TableError> {
    if code.is_empty() {
        return Err(TableError::EmptyCode(ch));
    }
    if !code.chars().all(|c| c == DOT || c == DASH) {
        return Err(TableError::InvalidSymbol {
            ch,
            code: code.to_string(),
        });
    }
    Ok(())
}
