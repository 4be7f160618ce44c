//! Well-known package file names and the per-ABI store selector.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Manifest file shipped next to the stores
pub const FILE_ASSEMBLIES_MANIFEST: &str = "assemblies.manifest";

/// Primary store of a package
pub const FILE_ASSEMBLIES_BLOB: &str = "assemblies.blob";

/// Extraction summary written next to the unpacked assemblies
pub const FILE_ASSEMBLIES_JSON: &str = "assemblies.json";

/// Android ABI an architecture-specific store is built for
///
/// Splits the package into one secondary store per ABI; the selector maps each canonical token
/// to the store's fixed file name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// 32-bit ARM (`armeabi-v7a`)
    Arm,
    /// 64-bit ARM (`arm64-v8a`)
    Arm64,
    /// 32-bit x86
    X86,
    /// 64-bit x86
    X86_64,
}

impl Architecture {
    /// File name of this ABI's store inside the package.
    pub fn blob_file_name(self) -> &'static str {
        match self {
            Architecture::Arm => "assemblies.armeabi_v7a.blob",
            Architecture::Arm64 => "assemblies.arm64_v8a.blob",
            Architecture::X86 => "assemblies.x86.blob",
            Architecture::X86_64 => "assemblies.x86_64.blob",
        }
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arm" => Ok(Architecture::Arm),
            "arm64" => Ok(Architecture::Arm64),
            "x86" => Ok(Architecture::X86),
            "x86_64" => Ok(Architecture::X86_64),
            other => Err(Error::UnknownArchitecture(other.to_owned())),
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Architecture::Arm => "arm",
            Architecture::Arm64 => "arm64",
            Architecture::X86 => "x86",
            Architecture::X86_64 => "x86_64",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::arch::Architecture;
    use crate::error::Error;

    #[test]
    fn tokens_round_trip() {
        for token in ["arm", "arm64", "x86", "x86_64"] {
            let arch: Architecture = token.parse().expect("token is canonical");
            assert_eq!(arch.to_string(), token);
        }
    }

    #[test]
    fn blob_file_names() {
        assert_eq!(
            "arm".parse::<Architecture>().unwrap().blob_file_name(),
            "assemblies.armeabi_v7a.blob"
        );
        assert_eq!(
            "arm64".parse::<Architecture>().unwrap().blob_file_name(),
            "assemblies.arm64_v8a.blob"
        );
        assert_eq!(
            "x86".parse::<Architecture>().unwrap().blob_file_name(),
            "assemblies.x86.blob"
        );
        assert_eq!(
            "x86_64".parse::<Architecture>().unwrap().blob_file_name(),
            "assemblies.x86_64.blob"
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        match "mips".parse::<Architecture>() {
            Err(Error::UnknownArchitecture(token)) => assert_eq!(token, "mips"),
            other => panic!("expected an unknown architecture, got {other:?}"),
        }
    }
}
