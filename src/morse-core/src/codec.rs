// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Text to Morse and back.
//!
//! Encoded messages are space separated tokens. A bare `/` token marks a word
//! break. Both directions are total: characters or tokens the table does not
//! know are dropped, never reported as errors.

use tracing::trace;

use crate::table::SymbolTable;

/// Token emitted for every space in the input text.
pub const WORD_SEPARATOR: &str = "/";
/// Exact substring that splits words when decoding.
pub const WORD_DELIMITER: &str = " / ";

const TOKEN_DELIMITER: &str = " ";

/// Encoder/decoder bound to a symbol table.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a SymbolTable,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new(SymbolTable::itu())
    }
}

impl<'a> Converter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Convert text to Morse.
    ///
    /// Input is uppercased first. Each space becomes its own `/` token, so
    /// runs of spaces are not collapsed.
    pub fn encode(&self, text: &str) -> String {
        let mut tokens: Vec<&str> = Vec::with_capacity(text.len());
        for ch in text.chars().flat_map(char::to_uppercase) {
            if ch == ' ' {
                tokens.push(WORD_SEPARATOR);
            } else if let Some(code) = self.table.encode_char(ch) {
                tokens.push(code);
            } else {
                trace!("dropping unsupported character {:?}", ch);
            }
        }
        tokens.join(TOKEN_DELIMITER)
    }

    /// Convert Morse back to uppercase text.
    ///
    /// Words are split on `" / "` only. A `/` without a space on each side is
    /// left inside its token, which then fails lookup and is dropped.
    pub fn decode(&self, code: &str) -> String {
        code.split(WORD_DELIMITER)
            .map(|word| self.decode_word(word))
            .collect::<Vec<_>>()
            .join(TOKEN_DELIMITER)
    }

    fn decode_word(&self, word: &str) -> String {
        word.split(TOKEN_DELIMITER)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let ch = self.table.decode_code(token);
                if ch.is_none() {
                    trace!("dropping unknown token {:?}", token);
                }
                ch
            })
            .collect()
    }
}

/// Encode with the ITU table.
pub fn encode(text: &str) -> String {
    Converter::default().encode(text)
}

/// Decode with the ITU table.
pub fn decode(code: &str) -> String {
    Converter::default().decode(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_symbols() {
        assert_eq!(encode("A"), ".-");
        assert_eq!(encode("Z"), "--..");
        assert_eq!(encode("0"), "-----");
        assert_eq!(encode("5"), ".....");
        assert_eq!(encode("!"), "-.-.--");
        assert_eq!(encode("?"), "..--..");
        assert_eq!(encode("."), ".-.-.-");
    }

    #[test]
    fn test_encode_words() {
        assert_eq!(encode("SOS"), "... --- ...");
        assert_eq!(
            encode("HELLO WORLD"),
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
        assert_eq!(encode("ABC123!"), ".- -... -.-. .---- ..--- ...-- -.-.--");
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        assert_eq!(encode("hello"), encode("HELLO"));
        assert_eq!(encode("Hello World"), encode("HELLO WORLD"));
    }

    #[test]
    fn test_encode_drops_unsupported() {
        assert_eq!(encode("A#B"), encode("AB"));
        assert_eq!(encode("AéB"), ".- -...");
        assert_eq!(encode("\t~"), "");
    }

    #[test]
    fn test_encode_keeps_every_space() {
        assert_eq!(encode("A   B"), ".- / / / -...");
        assert_eq!(encode(" "), "/");
        assert_eq!(encode(" A"), "/ .-");
    }

    #[test]
    fn test_encode_multi_char_uppercase() {
        // 'ß' uppercases to "SS"
        assert_eq!(encode("ß"), "... ...");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_words() {
        assert_eq!(decode(".-"), "A");
        assert_eq!(decode("-----"), "0");
        assert_eq!(decode("... --- ..."), "SOS");
        assert_eq!(
            decode(".... . .-.. .-.. --- / .-- --- .-. .-.. -.."),
            "HELLO WORLD"
        );
        assert_eq!(decode("-.-.--"), "!");
        assert_eq!(decode("-..-."), "/");
    }

    #[test]
    fn test_decode_drops_invalid_tokens() {
        assert_eq!(decode(".- invalid -..."), "AB");
        assert_eq!(decode("........ .-"), "A");
    }

    #[test]
    fn test_decode_skips_empty_tokens() {
        assert_eq!(decode(".-  -..."), "AB");
        assert_eq!(decode("  .-  "), "A");
    }

    #[test]
    fn test_decode_strict_word_delimiter() {
        assert_eq!(decode(".- / -..."), "A B");
        assert_eq!(decode(".-/-..."), "");
        assert_eq!(decode(".- /-..."), "A");
    }

    #[test]
    fn test_decode_empty_words_are_kept() {
        assert_eq!(decode(".- / / / -..."), "A  B");
        // the second "/" falls inside the last word and is dropped
        assert_eq!(decode(".- / / -..."), "A B");
    }

    #[test]
    fn test_round_trip() {
        for text in ["HELLO", "HELLO WORLD 123!", "1234567890", "HELLO, WORLD!"] {
            assert_eq!(decode(&encode(text)), text);
        }
        assert_eq!(decode(&encode("mixed Case")), "MIXED CASE");
    }

    #[test]
    fn test_round_trip_long_text() {
        let text = "A".repeat(1000);
        assert_eq!(decode(&encode(&text)), text);
    }

    #[test]
    fn test_converter_with_custom_table() {
        let table = SymbolTable::from_entries(&[('A', ".-"), ('N', "-.")]).unwrap();
        let converter = Converter::new(&table);
        assert_eq!(converter.encode("an b"), ".- -. /");
        assert_eq!(converter.decode(".- -. / -..."), "AN ");
    }
}
