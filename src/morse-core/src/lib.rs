// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Text <-> Morse code conversion over the ITU symbol table.

pub mod codec;
pub mod table;

pub use codec::{decode, encode, Converter, WORD_DELIMITER, WORD_SEPARATOR};
pub use table::{SymbolTable, TableError, ITU_ENTRIES};
