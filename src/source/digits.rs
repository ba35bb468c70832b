//! Digit streams that drive the subdivision
//!
//! Every source is a plain `Iterator<Item = u8>` yielding values in `0..=9`.
//! Finite sources simply end; the painting treats whatever is missing as 0.

use crate::io::configuration::PI_DIGIT_COUNT;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{BufRead, BufReader, Read};

const BUNDLED_PI: &str = include_str!("../../data/pi_digits.txt");

/// Map one character of input to a digit; anything but `0`-`9` reads as 0
pub fn digit_from_char(character: char) -> u8 {
    character
        .to_digit(10)
        .and_then(|digit| u8::try_from(digit).ok())
        .unwrap_or(0)
}

/// Successive characters of a UTF-8 text stream as digits
///
/// Non-digit characters, including line breaks, yield 0. A `\r\n` pair or a
/// lone `\r` counts as a single line break. The stream ends at end of input,
/// on the first read error, or at the first invalid UTF-8 sequence; whatever
/// decoded before that point is still yielded.
pub struct ReaderDigits<R: Read> {
    // None once the input has ended
    reader: Option<BufReader<R>>,
    pending: std::vec::IntoIter<u8>,
}

impl<R: Read> ReaderDigits<R> {
    /// Wrap a reader; reads are buffered internally
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            pending: Vec::new().into_iter(),
        }
    }

    // Decode the next line into `pending`; false once the input has ended
    fn refill(&mut self) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        let mut line = Vec::new();
        let read = reader.read_until(b'\n', &mut line);
        let (text, complete) = match std::str::from_utf8(&line) {
            Ok(text) => (text, true),
            Err(e) => (
                std::str::from_utf8(line.get(..e.valid_up_to()).unwrap_or_default())
                    .unwrap_or_default(),
                false,
            ),
        };

        if !complete || !matches!(read, Ok(n) if n > 0) {
            self.reader = None;
        }
        self.pending = line_digits(text).into_iter();
        !text.is_empty()
    }
}

// `\r\n` can only end a line, so dropping a `\r` before `\n` is enough
fn line_digits(text: &str) -> Vec<u8> {
    let mut characters = text.chars().peekable();
    let mut digits = Vec::with_capacity(text.len());
    while let Some(character) = characters.next() {
        if character == '\r' && characters.peek() == Some(&'\n') {
            continue;
        }
        digits.push(digit_from_char(character));
    }
    digits
}

impl<R: Read> Iterator for ReaderDigits<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if let Some(digit) = self.pending.next() {
                return Some(digit);
            }
            if !self.refill() {
                return None;
            }
        }
    }
}

/// The first ten thousand digits of pi, starting with the leading 3
#[derive(Debug, Clone)]
pub struct PiDigits {
    position: usize,
}

impl Default for PiDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl PiDigits {
    /// Start at the leading 3
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    fn table() -> &'static [u8] {
        BUNDLED_PI
            .as_bytes()
            .get(..PI_DIGIT_COUNT)
            .unwrap_or_else(|| BUNDLED_PI.as_bytes())
    }
}

impl Iterator for PiDigits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = Self::table().get(self.position).copied()?;
        self.position += 1;
        Some(digit_from_char(char::from(byte)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Self::table().len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

/// Uniformly distributed digits, forever
pub struct RandomDigits {
    rng: StdRng,
}

impl RandomDigits {
    /// Reproducible digits from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Digits seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Iterator for RandomDigits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.rng.random_range(0..=9))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Any of the three digit sources, chosen at runtime
pub enum DigitSource {
    /// Characters of a file or piped input
    Reader(ReaderDigits<Box<dyn Read>>),
    /// Bundled digits of pi
    Pi(PiDigits),
    /// Random digits
    Random(RandomDigits),
}

impl DigitSource {
    /// Read digits from any stream
    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(ReaderDigits::new(Box::new(reader)))
    }
}

impl Iterator for DigitSource {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self {
            Self::Reader(digits) => digits.next(),
            Self::Pi(digits) => digits.next(),
            Self::Random(digits) => digits.next(),
        }
    }
}
