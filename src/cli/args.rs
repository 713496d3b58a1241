//! Command line argument parsing.
//!
//! A handful of flags with permissive defaults; everything not given here
//! comes from the package descriptor in the working directory.

use clap::Parser;

/// Build and packaging orchestrator for desktop applications
#[derive(Parser, Debug)]
#[command(
    name = "distpack",
    about = "Build and packaging orchestrator for desktop applications",
    long_about = "Compiles the application's back-end shell and front-end bundles with the \
external bundler, then packages the output into platform-native distributables.

Usage:
  distpack                      package for the host platform only
  distpack --all --asar         package every supported platform/arch pair
  distpack -n MyApp -v 2.3.4    override the name and runtime version"
)]
pub struct Args {
    /// Application name for the packaged artifacts (default: the package
    /// descriptor's product name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Pack application sources into an asar archive
    #[arg(short, long)]
    pub asar: bool,

    /// Package every supported platform/arch pair instead of the host only
    #[arg(long)]
    pub all: bool,

    /// Icon path without extension; the platform-specific extension is
    /// appended per target
    #[arg(short, long, value_name = "PATH", default_value = "logo/logo")]
    pub icon: String,

    /// Runtime version to package against; defaults to the installed
    /// runtime's self-reported version
    #[arg(short = 'v', long, value_name = "VERSION")]
    pub version: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_descriptor_driven_contract() {
        let args = Args::try_parse_from(["distpack"]).unwrap();
        assert!(args.name.is_none());
        assert!(!args.asar);
        assert!(!args.all);
        assert_eq!(args.icon, "logo/logo");
        assert!(args.version.is_none());
    }

    #[test]
    fn short_flags_parse() {
        let args =
            Args::try_parse_from(["distpack", "-n", "Demo", "-a", "-i", "art/icon", "-v", "2.3.4"])
                .unwrap();
        assert_eq!(args.name.as_deref(), Some("Demo"));
        assert!(args.asar);
        assert_eq!(args.icon, "art/icon");
        assert_eq!(args.version.as_deref(), Some("2.3.4"));
    }

    #[test]
    fn all_is_long_only() {
        let args = Args::try_parse_from(["distpack", "--all"]).unwrap();
        assert!(args.all);
    }
}
