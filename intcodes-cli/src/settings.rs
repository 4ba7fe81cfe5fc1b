//! Selecting the coding, either from flags or from a configuration file.

use std::path::Path;
use std::path::PathBuf;

use clap::Args;
use config::Config;
use config::Environment;
use config::File;
use config::Source;
use intcodes::Coding;
use intcodes::CodingKind;
use intcodes::CodingOptions;

use crate::error::Error;

/// Prefix of environment variables that override configuration file values,
/// e.g. `INTCODES_MODULUS=12`.
const ENV_PREFIX: &str = "INTCODES";

/// Flags selecting the coding.
#[derive(Debug, Clone, Args)]
pub struct CodingArgs {
    /// Code family: unary, binary, vlq, elias-gamma, elias-delta,
    /// elias-omega or golomb-rice.
    #[arg(long, global = true, default_value_t = CodingKind::Unary)]
    pub coding: CodingKind,

    /// Invert the bit polarity of unary, Elias gamma and Elias delta.
    #[arg(long, global = true)]
    pub alternative: bool,

    /// Bits per chunk for binary and vlq.
    #[arg(long, global = true, default_value_t = 8)]
    pub chunk_size: u32,

    /// Divisor for golomb-rice.
    #[arg(long, global = true, default_value_t = 10)]
    pub modulus: u64,

    /// Read the coding from this file instead of the flags above.
    #[arg(long, global = true, env = "INTCODES_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CodingArgs {
    fn options(&self) -> CodingOptions {
        CodingOptions {
            alternative: self.alternative,
            chunk_size: Some(self.chunk_size),
            modulus: Some(self.modulus),
        }
    }

    /// Builds the selected coding.
    pub fn load(&self) -> Result<Coding, Error> {
        let coding = match &self.config {
            Some(path) => load_file(path)?,
            None => Coding::new(self.coding, self.options())?,
        };
        tracing::debug!(?coding, "selected coding");
        Ok(coding)
    }
}

/// Reads a coding from a configuration file, with environment overrides.
///
/// The file holds a serialized [`Coding`], e.g. for TOML:
///
/// ```toml
/// coding = "golomb-rice"
/// modulus = 10
/// ```
pub fn load_file(path: &Path) -> Result<Coding, Error> {
    tracing::debug!(path = %path.display(), "loading coding from file");
    Ok(load_from(File::from(path))?)
}

fn load_from<S>(source: S) -> Result<Coding, config::ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let env = Environment::with_prefix(ENV_PREFIX).try_parsing(true);

    Config::builder()
        .add_source(source)
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use config::FileFormat;
    use intcodes::GolombRice;
    use intcodes::IntegerCode;
    use intcodes::Modulus;

    fn from_toml(text: &str) -> Result<Coding, config::ConfigError> {
        load_from(File::from_str(text, FileFormat::Toml))
    }

    fn args(coding: CodingKind) -> CodingArgs {
        CodingArgs {
            coding,
            alternative: false,
            chunk_size: 8,
            modulus: 10,
            config: None,
        }
    }

    #[test]
    fn test_load_from_flags() {
        let coding = args(CodingKind::GolombRice).load().unwrap();
        assert_eq!(coding, Coding::GolombRice(GolombRice::new(Modulus::new(10).unwrap())));

        let coding = args(CodingKind::Binary).load().unwrap();
        assert_eq!(coding.encode(5).unwrap().to_string(), "00000101");
    }

    #[test]
    fn test_load_from_flags_validates() {
        let args = CodingArgs { chunk_size: 1, ..args(CodingKind::Vlq) };
        assert_matches!(
            args.load(),
            Err(Error::Coding(intcodes::ConfigError::ChunkSizeTooSmall(1)))
        );
    }

    #[test]
    fn test_load_from_toml() {
        let coding = from_toml("coding = \"golomb-rice\"\nmodulus = 10\n").unwrap();
        assert_eq!(coding.encode(42).unwrap().to_string(), "11110010");

        let coding = from_toml("coding = \"vlq\"\nchunk_size = 4\n").unwrap();
        assert_eq!(coding.encode(300).unwrap().to_string(), "110011010100");

        let coding = from_toml("coding = \"elias-omega\"\n").unwrap();
        assert_eq!(coding, Coding::EliasOmega);
    }

    #[test]
    fn test_load_from_toml_rejects_invalid_settings() {
        assert!(from_toml("coding = \"golomb-rice\"\nmodulus = 0\n").is_err());
        assert!(from_toml("coding = \"binary\"\n").is_err());
        assert!(from_toml("coding = \"huffman\"\n").is_err());
    }
}
