use std::num::ParseIntError;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Index {} out of bounds for length {}", index, len)]
    IndexOutOfBounds { index: usize, len: usize },

    #[fail(display = "Invalid array size {:?}: {}", input, cause)]
    InvalidSize {
        input: String,
        #[cause] cause: ParseIntError,
    },

    #[fail(display = "Array size must not be negative, got {}", _0)] NegativeSize(i32),

    #[fail(display = "Failed to initialize logger: {}", _0)] Logger(String),
}

/// Parses an array size given on the command line.
///
/// The size has to be a non-negative `i32`, the element type of the
/// sequences being reversed.
pub fn parse_size(input: &str) -> Result<i32, Error> {
    match input.trim().parse::<i32>() {
        Ok(n) if n < 0 => Err(Error::NegativeSize(n)),
        Ok(n) => Ok(n),
        Err(cause) => Err(Error::InvalidSize {
            input: input.to_owned(),
            cause,
        }),
    }
}
