//! Platform and codename selection shared by `check` and `install`.

use crate::cli::args::TargetArgs;
use crate::detection::{detect_host, Platform, Toolchain};
use crate::error::Result;

/// Resolve the platform and codename, preferring explicit arguments.
///
/// Host detection only runs when no `--distro` was given; an explicit
/// `debian` on a Linux host still picks up the detected codename.
pub fn resolve_target(
    args: &TargetArgs,
    toolchain: &dyn Toolchain,
) -> Result<(Platform, Option<String>)> {
    match args.distro {
        Some(platform) => {
            let codename = args.codename.clone().or_else(|| {
                if platform == Platform::Debian && cfg!(target_os = "linux") {
                    toolchain.dist_proto().and_then(|dist| dist.codename)
                } else {
                    None
                }
            });
            Ok((platform, codename))
        }
        None => {
            let (platform, detected) = detect_host(toolchain)?;
            Ok((platform, args.codename.clone().or(detected)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{DistInfo, StubToolchain};

    #[test]
    fn explicit_non_debian_ignores_host_codename() {
        let args = TargetArgs {
            distro: Some(Platform::Mac),
            codename: None,
        };
        let toolchain = StubToolchain::new().with_dist(DistInfo {
            raw: "Debian GNU/Linux 12".into(),
            distro: "debian".into(),
            codename: Some("bookworm".into()),
        });
        let (_, codename) = resolve_target(&args, &toolchain).unwrap();
        assert_eq!(codename, None);
    }

    #[test]
    fn explicit_distro_and_codename_win() {
        let args = TargetArgs {
            distro: Some(Platform::Mac),
            codename: Some("sonoma".into()),
        };
        let (platform, codename) = resolve_target(&args, &StubToolchain::new()).unwrap();
        assert_eq!(platform, Platform::Mac);
        assert_eq!(codename.as_deref(), Some("sonoma"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn explicit_distro_keeps_detected_codename() {
        let args = TargetArgs {
            distro: Some(Platform::Debian),
            codename: None,
        };
        let toolchain = StubToolchain::new().with_dist(DistInfo {
            raw: "Ubuntu 24.04".into(),
            distro: "debian".into(),
            codename: Some("noble".into()),
        });
        let (_, codename) = resolve_target(&args, &toolchain).unwrap();
        assert_eq!(codename.as_deref(), Some("noble"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn codename_override_beats_detection() {
        let args = TargetArgs {
            distro: None,
            codename: Some("trixie".into()),
        };
        let toolchain = StubToolchain::new().with_dist(DistInfo {
            raw: "Debian GNU/Linux 12".into(),
            distro: "debian".into(),
            codename: Some("bookworm".into()),
        });
        let (platform, codename) = resolve_target(&args, &toolchain).unwrap();
        assert_eq!(platform, Platform::Debian);
        assert_eq!(codename.as_deref(), Some("trixie"));
    }
}
