use crate::error::{OrderError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of an order file: `item,quantity`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u32,
}

/// Reads order lines from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace around every field.
pub struct OrderLineReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderLineReader<R> {
    /// Creates a new `OrderLineReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes each row; a malformed row yields an `Err` and the
    /// iterator carries on with the next one.
    pub fn lines(self) -> impl Iterator<Item = Result<OrderLine>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
