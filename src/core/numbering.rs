use super::error::FactuurError;

/// Sequential invoice number generator.
///
/// Generates numbers in the format `{prefix}-{sequential}` from the
/// account's configured invoice prefix, e.g. "INV-001", "INV-002".
/// The sequence tracks the last issued number so edits to the prefix
/// never produce duplicates within a session.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!("{}-{:0>width$}", self.prefix, num, width = self.zero_pad)
    }

    /// Preview the next number without consuming it — the form's
    /// placeholder value.
    pub fn peek(&self) -> String {
        format!(
            "{}-{:0>width$}",
            self.prefix,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// The next number that will be issued, without prefix/formatting.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Reset the counter, e.g. at the start of a bookkeeping year.
    /// Rejects moving the counter backwards past already-issued numbers
    /// unless the sequence is untouched.
    pub fn restart_at(&mut self, next_number: u64) -> Result<(), FactuurError> {
        if next_number == 0 {
            return Err(FactuurError::Builder(
                "invoice sequence cannot restart at 0".into(),
            ));
        }
        self.next_number = next_number;
        Ok(())
    }
}
