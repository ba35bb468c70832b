//! Tests for reader, pi and random digit streams

#[cfg(test)]
mod tests {
    use pimondrian::source::digits::{
        DigitSource, PiDigits, RandomDigits, ReaderDigits, digit_from_char,
    };
    use std::io::{Cursor, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    struct FlakyReader {
        calls: usize,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.calls += 1;
            match self.calls {
                2 => Err(std::io::Error::other("hiccup")),
                _ => {
                    let chunk = b"12";
                    let n = chunk.len().min(buf.len());
                    buf.get_mut(..n)
                        .unwrap()
                        .copy_from_slice(chunk.get(..n).unwrap());
                    Ok(n)
                }
            }
        }
    }

    // Tests digit characters map to values and everything else to zero
    // Verified by mapping letters to their offset from '0'
    #[test]
    fn test_digit_from_char() {
        assert_eq!(digit_from_char('0'), 0);
        assert_eq!(digit_from_char('7'), 7);
        assert_eq!(digit_from_char('9'), 9);
        assert_eq!(digit_from_char('a'), 0);
        assert_eq!(digit_from_char('.'), 0);
        assert_eq!(digit_from_char('\n'), 0);
        assert_eq!(digit_from_char('é'), 0);
    }

    // Tests every character of a stream becomes one digit
    // Verified by skipping non-digit characters
    #[test]
    fn test_reader_digits_normalizes_characters() {
        let digits: Vec<u8> = ReaderDigits::new(Cursor::new("3.14x\n")).collect();
        assert_eq!(digits, vec![3, 0, 1, 4, 0, 0]);
    }

    // Tests CRLF and lone CR line breaks read as a single character
    // Verified by yielding one zero per byte of the line break
    #[test]
    fn test_reader_digits_line_breaks() {
        let crlf: Vec<u8> = DigitSource::reader(Cursor::new("5\r\n27")).collect();
        assert_eq!(crlf, vec![5, 0, 2, 7]);

        let lone_cr: Vec<u8> = ReaderDigits::new(Cursor::new("5\r27\r\n")).collect();
        assert_eq!(lone_cr, vec![5, 0, 2, 7, 0]);
    }

    // Tests a multi-byte character counts as one non-digit
    // Verified by decoding the stream byte by byte
    #[test]
    fn test_reader_digits_multibyte_characters() {
        let digits: Vec<u8> = DigitSource::reader(Cursor::new("5é27")).collect();
        assert_eq!(digits, vec![5, 0, 2, 7]);

        let wide: Vec<u8> = ReaderDigits::new(Cursor::new("1€\n2")).collect();
        assert_eq!(wide, vec![1, 0, 0, 2]);
    }

    // Tests invalid UTF-8 ends the stream after the characters before it
    // Verified by mapping the invalid byte to zero and continuing
    #[test]
    fn test_reader_digits_stop_on_invalid_utf8() {
        let bytes: &[u8] = b"12\n34\xff56\n78";
        let digits: Vec<u8> = ReaderDigits::new(Cursor::new(bytes)).collect();
        assert_eq!(digits, vec![1, 2, 0, 3, 4]);
    }

    // Tests an empty stream ends immediately
    // Verified by yielding a zero at end of input
    #[test]
    fn test_reader_digits_empty() {
        assert_eq!(ReaderDigits::new(Cursor::new("")).next(), None);
    }

    // Tests a read error ends the stream instead of failing
    // Verified by mapping read errors to zero digits
    #[test]
    fn test_reader_digits_stop_on_error() {
        assert_eq!(ReaderDigits::new(FailingReader).next(), None);

        let digits: Vec<u8> = ReaderDigits::new(FlakyReader { calls: 0 }).take(10).collect();
        assert_eq!(digits, vec![1, 2]);
    }

    // Tests the bundled digits of pi start correctly and hold ten thousand digits
    // Verified by dropping the leading 3
    #[test]
    fn test_pi_digits() {
        let head: Vec<u8> = PiDigits::new().take(12).collect();
        assert_eq!(head, vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8]);

        let all: Vec<u8> = PiDigits::default().collect();
        assert_eq!(all.len(), 10_000);
        assert!(all.iter().all(|digit| *digit <= 9));
        assert_eq!(PiDigits::new().size_hint(), (10_000, Some(10_000)));
    }

    // Tests seeded random digits are reproducible and in range
    // Verified by ignoring the seed
    #[test]
    fn test_random_digits_seeded() {
        let first: Vec<u8> = RandomDigits::from_seed(42).take(200).collect();
        let second: Vec<u8> = RandomDigits::from_seed(42).take(200).collect();
        let other: Vec<u8> = RandomDigits::from_seed(43).take(200).collect();

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert!(first.iter().all(|digit| *digit <= 9));
    }

    // Tests entropy-seeded digits never run out
    // Verified by ending the stream after one digit
    #[test]
    fn test_random_digits_unbounded() {
        let mut digits = RandomDigits::from_entropy();
        assert_eq!(digits.by_ref().take(1_000).count(), 1_000);
        assert!(digits.next().is_some());
    }

    // Tests the tagged source forwards to each variant
    // Verified by always forwarding to the pi variant
    #[test]
    fn test_digit_source_variants() {
        let from_reader: Vec<u8> = DigitSource::reader(Cursor::new("527")).collect();
        assert_eq!(from_reader, vec![5, 2, 7]);

        let from_pi: Vec<u8> = DigitSource::Pi(PiDigits::new()).take(5).collect();
        assert_eq!(from_pi, vec![3, 1, 4, 1, 5]);

        let from_random: Vec<u8> = DigitSource::Random(RandomDigits::from_seed(7))
            .take(20)
            .collect();
        let expected: Vec<u8> = RandomDigits::from_seed(7).take(20).collect();
        assert_eq!(from_random, expected);
    }
}
