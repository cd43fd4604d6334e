use lib::prelude::*;

/// Digits spelled out as words, tested in this order.
const WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Decodes the digit starting at the beginning of the given bytes, if any.
type Scan = fn(&[u8]) -> Option<u32>;

lib::entry!(input = "d01.txt", solve);

fn solve(input: IStr) -> Result<(u32, u32)> {
    let lines = input.lines();
    Ok((part_one(&lines)?, part_two(&lines)?))
}

fn part_one(lines: &[IStr]) -> Result<u32> {
    calibrate(lines, digit)
}

fn part_two(lines: &[IStr]) -> Result<u32> {
    calibrate(lines, digit_or_word)
}

fn calibrate(lines: &[IStr], scan: Scan) -> Result<u32> {
    let mut total = 0;

    for line in lines {
        let Some(value) = calibration_value(line.as_data(), scan) else {
            return Err(IStrError::condition(line.span(), "line contains a digit", None).into());
        };

        total += value;
    }

    Ok(total)
}

/// Combine the first and last digit found in the line.
///
/// Matching is a lookahead at every position so overlapping words such as
/// `oneight` contribute both of their digits.
fn calibration_value(line: &[u8], scan: Scan) -> Option<u32> {
    let mut it = (0..line.len()).filter_map(|n| scan(&line[n..]));
    let first = it.next()?;
    let last = it.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn digit(rest: &[u8]) -> Option<u32> {
    match rest {
        [b @ b'0'..=b'9', ..] => Some(u32::from(b - b'0')),
        _ => None,
    }
}

fn digit_or_word(rest: &[u8]) -> Option<u32> {
    if let Some(d) = digit(rest) {
        return Some(d);
    }

    WORDS
        .iter()
        .find(|(word, _)| rest.starts_with(word.as_bytes()))
        .map(|&(_, d)| d)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;
    use proptest::prelude::*;

    use super::{calibration_value, digit, digit_or_word, part_one, part_two};

    const EXAMPLE1: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";

    const EXAMPLE2: &str = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    fn lines(data: &'static str) -> Vec<IStr> {
        IStr::new(data.as_bytes(), 0).lines()
    }

    #[test]
    fn test_calibration_values() {
        assert_eq!(calibration_value(b"1abc2", digit), Some(12));
        assert_eq!(calibration_value(b"pqr3stu8vwx", digit), Some(38));
        assert_eq!(calibration_value(b"treb7uchet", digit), Some(77));
        assert_eq!(calibration_value(b"abc", digit), None);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(&lines(EXAMPLE1)).unwrap(), 142);
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_value(b"eightwothree", digit_or_word), Some(83));
        assert_eq!(calibration_value(b"zoneight234", digit_or_word), Some(14));
        assert_eq!(calibration_value(b"oneight", digit_or_word), Some(18));
        assert_eq!(calibration_value(b"twone", digit_or_word), Some(21));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(&lines(EXAMPLE2)).unwrap(), 281);
        // Digits alone agree with part one.
        assert_eq!(part_two(&lines(EXAMPLE1)).unwrap(), 142);
    }

    #[test]
    fn test_idempotent() {
        let digits = lines(EXAMPLE1);
        assert_eq!(part_one(&digits).unwrap(), part_one(&digits).unwrap());

        let words = lines(EXAMPLE2);
        assert_eq!(part_two(&words).unwrap(), part_two(&words).unwrap());
    }

    #[test]
    fn test_no_digits() {
        let error = part_one(&lines(EXAMPLE2)).unwrap_err();
        let error = error.downcast_ref::<IStrError>().unwrap();
        // "eightwothree" is the second line.
        assert_eq!(error.span(), 9..21);
        assert!(matches!(error.kind(), ErrorKind::Condition(..)));

        assert!(part_two(&lines("abc\n")).is_err());
    }

    proptest! {
        #[test]
        fn first_and_last_digit(line in "[a-z]{0,5}[0-9][a-z0-9]{0,30}") {
            let digits = line.bytes().filter(u8::is_ascii_digit).map(|b| u32::from(b - b'0')).collect::<Vec<_>>();
            let expected = digits[0] * 10 + digits[digits.len() - 1];
            let value = calibration_value(line.as_bytes(), digit);
            prop_assert_eq!(value, Some(expected));
            prop_assert!(expected <= 99);
        }
    }
}
