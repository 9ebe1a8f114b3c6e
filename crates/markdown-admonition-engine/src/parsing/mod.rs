//! # Parsing
//!
//! Splits a document into host markdown chunks and extension blocks.
//! See [`builder::BlockBuilder`] for the line-scan driver and [`parser`] for
//! the extension traits.

pub mod blocks;
pub mod builder;
pub mod cursor;
pub mod lines;
pub mod parser;

#[cfg(test)]
mod tests;

use blocks::Document;
use builder::BlockBuilder;
use parser::BlockStartParser;

/// Parses `text` into a [`Document`], offering every line outside an open
/// extension block to `start_parsers` in order.
pub fn parse_document(text: &str, start_parsers: &[Box<dyn BlockStartParser>]) -> Document {
    let mut builder = BlockBuilder::new(start_parsers);

    for lr in lines::lines(text) {
        builder.push(&lr);
    }

    Document {
        children: builder.finish(),
    }
}
