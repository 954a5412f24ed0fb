use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The encoded block is structurally invalid: a truncated varint, a
    /// chunk length exceeding the remaining input or output, a back-offset
    /// of zero or pointing before the start of the output, or a body that
    /// stops short of (or overshoots) the length recorded in the header.
    #[error("zappy: corrupt input")]
    Corrupt,

    /// The header length is valid as a 64-bit value but cannot be addressed
    /// on this platform.
    #[error("zappy: decoded block is too large")]
    TooLarge,
}

pub type Result<T> = std::result::Result<T, Error>;
