#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("seed file line {line}: invalid seed {text:?}")]
    InvalidSeed { line: usize, text: String },

    #[error("signature length {len} out of range (1..=16)")]
    SignatureLength { len: usize },

    #[error("signature altitude {value} out of range (0..=128)")]
    SignatureAltitude { value: u32 },

    #[error("invalid signature entry {0:?}")]
    SignatureEntry(String),

    #[error("signature window z {start}..{end} outside the probed rows 12..16")]
    SignatureWindow { start: u8, end: usize },

    #[error("start x {x} outside the scanned window (0..{width})")]
    StartColumn { x: u8, width: usize },

    #[error("x span {0} out of range (1..=8 chunks)")]
    SpanChunks(u8),

    #[error("unknown biome name {0:?}")]
    UnknownBiome(String),

    #[error("decoration bound {0} unsupported (legacy generators used 5 or 6)")]
    DecorationBound(u16),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
