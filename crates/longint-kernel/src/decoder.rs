//! Decimal string to integer conversion.
//!
//! A digit string of length `len` is split so that its low part holds
//! `split` digits, `split` being the largest power of two below `len`:
//!
//! ```text
//! value = high * 10^split + low = ((high * 5^split) << split) + low
//! ```
//!
//! `5^split` is one of the cached `5^(2^k)`, so each level costs one
//! multiplication and a shift instead of a multiplication by a freshly built
//! power of ten.

use std::borrow::Cow;
use std::sync::OnceLock;

use longint_integers::Integer;

use crate::cache::Pow5Cache;
use crate::error::ParseDigitsError;
use crate::parallel;
use crate::thresholds::DIGIT_LIMIT;

/// Parses a decimal digit string with the process-wide shared decoder.
///
/// ASCII spaces and underscores are skipped anywhere in the string. Any other
/// non-digit character is rejected with its 1-based position.
///
/// # Errors
///
/// Returns [`ParseDigitsError`] for a malformed string or one without digits.
///
/// # Example
///
/// ```
/// use longint_kernel::parse_digits;
///
/// assert_eq!(parse_digits(" 12_34 ").unwrap().to_i64(), Some(1234));
/// assert_eq!(parse_digits("12a4").unwrap_err().position, 3);
/// ```
pub fn parse_digits(s: &str) -> Result<Integer, ParseDigitsError> {
    DecimalDecoder::shared().parse_digits(s)
}

/// Parses a signed decimal integer with the process-wide shared decoder.
///
/// Surrounding whitespace and one leading `+` or `-` are accepted in front of
/// the [`parse_digits`] grammar.
///
/// # Errors
///
/// Returns [`ParseDigitsError`] with a position relative to `s`.
pub fn parse_integer(s: &str) -> Result<Integer, ParseDigitsError> {
    DecimalDecoder::shared().parse_integer(s)
}

/// Decimal string decoder owning its cache of powers of five.
///
/// Decoders are `Sync`; one instance can serve any number of threads.
#[derive(Default)]
pub struct DecimalDecoder {
    pow5: Pow5Cache,
}

impl DecimalDecoder {
    /// Creates a decoder with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the decoder shared by [`parse_digits`] and [`parse_integer`].
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<DecimalDecoder> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    /// The cache of `5^(2^k)` used by this decoder.
    pub fn cache(&self) -> &Pow5Cache {
        &self.pow5
    }

    /// Parses a string of decimal digits, skipping ASCII spaces and
    /// underscores.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDigitsError`] with the 1-based position of the first
    /// offending character, or position 0 if the string holds no digits.
    pub fn parse_digits(&self, s: &str) -> Result<Integer, ParseDigitsError> {
        let digits = if s.bytes().all(|b| b.is_ascii_digit()) {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(strip_separators(s)?)
        };
        if digits.is_empty() {
            return Err(ParseDigitsError::EMPTY);
        }

        tracing::trace!(digits = digits.len(), "parse_digits");
        Ok(self.inner(&digits, 0, digits.len()))
    }

    /// Parses an optionally signed decimal integer surrounded by whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDigitsError`] with a position relative to `s`.
    pub fn parse_integer(&self, s: &str) -> Result<Integer, ParseDigitsError> {
        let body = s.trim();
        let leading = s[..s.len() - s.trim_start().len()].chars().count();
        let (negative, unsigned) = match body.as_bytes().first() {
            Some(b'-') => (true, &body[1..]),
            Some(b'+') => (false, &body[1..]),
            _ => (false, body),
        };
        let offset = leading + body.len() - unsigned.len();

        let magnitude = self.parse_digits(unsigned).map_err(|err| {
            if err.is_empty_input() {
                err
            } else {
                ParseDigitsError::at(err.position + offset)
            }
        })?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Converts `digits[lo..hi]`.
    fn inner(&self, digits: &str, lo: usize, hi: usize) -> Integer {
        let len = hi - lo;
        if len <= DIGIT_LIMIT {
            return Integer::parse_digit_run(&digits[lo..hi]);
        }

        // Largest power of two strictly below len, so both parts are non-empty.
        let lg_split = (len - 1).ilog2();
        let split = 1usize << lg_split;

        let (high, low) = parallel::join(
            len * 10 / 3,
            || self.inner(digits, lo, hi - split),
            || self.inner(digits, hi - split, hi),
        );
        ((high * &*self.pow5.pow5(lg_split)) << split) + low
    }
}

/// Copies the digits of `s`, dropping ASCII spaces and underscores.
fn strip_separators(s: &str) -> Result<String, ParseDigitsError> {
    let mut cleaned = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match c {
            '0'..='9' => cleaned.push(c),
            ' ' | '_' => {}
            _ => return Err(ParseDigitsError::at(i + 1)),
        }
    }
    Ok(cleaned)
}
