use memchr::memchr;

use crate::error::Error;

/// Why a line failed to split into a valid record. Converted into a
/// line-numbered [`Error`] by the caller; counting lines is deferred to the
/// error path so the hot loop never pays for it.
#[derive(Debug, PartialEq)]
pub enum Malformed {
    MissingDelimiter,
    ExtraDelimiter,
    EmptyKey,
    BadMeasurement(String),
}

impl Malformed {
    pub fn at(self, line: u64) -> Error {
        match self {
            Malformed::MissingDelimiter => Error::MissingDelimiter { line },
            Malformed::ExtraDelimiter => Error::ExtraDelimiter { line },
            Malformed::EmptyKey => Error::EmptyKey { line },
            Malformed::BadMeasurement(text) => Error::BadMeasurement { line, text },
        }
    }
}

/// Splits one line (terminator already stripped) into its key bytes and
/// measurement. The line must hold exactly two non-empty `;`-separated
/// fields; the key is taken verbatim, with no trimming.
pub fn parse(line: &[u8]) -> Result<(&[u8], f64), Malformed> {
    let sep = memchr(b';', line).ok_or(Malformed::MissingDelimiter)?;
    if sep == 0 {
        return Err(Malformed::EmptyKey);
    }
    let (key, measurement) = (&line[..sep], &line[sep + 1..]);
    if memchr(b';', measurement).is_some() {
        return Err(Malformed::ExtraDelimiter);
    }
    let value = fast_float::parse::<f64, _>(measurement)
        .map_err(|_| Malformed::BadMeasurement(String::from_utf8_lossy(measurement).into_owned()))?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_key_and_measurement() {
        assert_eq!(parse(b"Paris;10.0"), Ok((&b"Paris"[..], 10.0)));
    }

    #[test]
    fn negative_and_fractional_values() {
        assert_eq!(parse(b"X;-2.5"), Ok((&b"X"[..], -2.5)));
        assert_eq!(parse(b"X;3"), Ok((&b"X"[..], 3.0)));
    }

    #[test]
    fn key_is_verbatim() {
        let (key, _) = parse(b" San Juan ;1.0").unwrap();
        assert_eq!(key, b" San Juan ");
    }

    #[test]
    fn rejects_missing_delimiter() {
        assert_eq!(parse(b"NoDelimiterHere"), Err(Malformed::MissingDelimiter));
        assert_eq!(parse(b""), Err(Malformed::MissingDelimiter));
    }

    #[test]
    fn rejects_extra_delimiter() {
        assert_eq!(parse(b"A;B;C"), Err(Malformed::ExtraDelimiter));
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(parse(b";1.0"), Err(Malformed::EmptyKey));
    }

    #[test]
    fn rejects_unparsable_measurement() {
        assert_eq!(
            parse(b"City;abc"),
            Err(Malformed::BadMeasurement("abc".to_string()))
        );
        assert_eq!(
            parse(b"City;"),
            Err(Malformed::BadMeasurement(String::new()))
        );
        assert_eq!(
            parse(b"City;1.0 "),
            Err(Malformed::BadMeasurement("1.0 ".to_string()))
        );
    }
}
