use std::num::NonZeroUsize;

/// Maximum number of tracking codes the async endpoint accepts per request.
pub const BATCH_SIZE: usize = 1000;

const DEFAULT_SIZE: NonZeroUsize = match NonZeroUsize::new(BATCH_SIZE) {
    Some(size) => size,
    None => panic!("BATCH_SIZE must be non-zero"),
};

/// Contiguous group of tracking codes, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Batch {
    codes: Vec<String>,
}

impl Batch {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn into_codes(self) -> Vec<String> {
        self.codes
    }
}

/// Split raw file content into batches of [`BATCH_SIZE`] lines.
///
/// Lines are taken verbatim: a trailing newline produces a trailing empty
/// line, and empty content produces a single batch holding one empty line.
pub fn split_into_batches(content: &str) -> Vec<Batch> {
    split_with_size(content, DEFAULT_SIZE)
}

/// Same as [`split_into_batches`] with an explicit batch size.
pub fn split_with_size(content: &str, size: NonZeroUsize) -> Vec<Batch> {
    let lines: Vec<&str> = content.split('\n').collect();
    lines
        .chunks(size.get())
        .map(|chunk| Batch::new(chunk.iter().map(|line| (*line).to_owned()).collect()))
        .collect()
}
