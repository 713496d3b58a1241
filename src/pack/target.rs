//! Packaging platforms and CPU architectures.

use std::fmt;

use crate::error::{CliError, Error, Result};

/// Target operating system for a packaged distributable.
///
/// Rendered with the packaging tool's wire names (`linux`, `win32`,
/// `darwin`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Linux desktop targets
    Linux,
    /// Windows targets
    Win32,
    /// macOS targets
    Darwin,
}

/// Target CPU architecture for a packaged distributable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86 (32-bit)
    Ia32,
    /// x86_64 / AMD64 (64-bit)
    X64,
}

impl Platform {
    /// Icon file extension expected by the platform's packager.
    pub fn icon_extension(self) -> &'static str {
        match self {
            Platform::Darwin => ".icns",
            Platform::Win32 => ".ico",
            Platform::Linux => ".png",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
            Platform::Darwin => "darwin",
        })
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Arch::Ia32 => "ia32",
            Arch::X64 => "x64",
        })
    }
}

/// Platforms considered for a full matrix build.
pub const ALL_PLATFORMS: [Platform; 3] = [Platform::Linux, Platform::Win32, Platform::Darwin];

/// Architectures considered for a full matrix build.
pub const ALL_ARCHS: [Arch; 2] = [Arch::Ia32, Arch::X64];

/// Every platform/arch pair considered for a full matrix build.
///
/// Includes darwin/ia32; overlay construction filters it out.
pub fn matrix() -> Vec<(Platform, Arch)> {
    let mut pairs = Vec::with_capacity(ALL_PLATFORMS.len() * ALL_ARCHS.len());
    for platform in ALL_PLATFORMS {
        for arch in ALL_ARCHS {
            pairs.push((platform, arch));
        }
    }
    pairs
}

/// Detects the host platform/arch pair for single-platform builds.
pub fn host() -> Result<(Platform, Arch)> {
    let platform = match std::env::consts::OS {
        "linux" => Platform::Linux,
        "windows" => Platform::Win32,
        "macos" => Platform::Darwin,
        os => {
            return Err(Error::Cli(CliError::InvalidArguments {
                reason: format!("unsupported host platform: {os}"),
            }));
        }
    };

    let arch = match std::env::consts::ARCH {
        "x86" => Arch::Ia32,
        "x86_64" => Arch::X64,
        arch => {
            return Err(Error::Cli(CliError::InvalidArguments {
                reason: format!("unsupported host architecture: {arch}"),
            }));
        }
    };

    Ok((platform, arch))
}
