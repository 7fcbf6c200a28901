//! Bakes the `--version` string into `CROP_VERSION`.
//!
//! | checkout | `CROP_VERSION` |
//! |---|---|
//! | tagged release | `0.2.0` |
//! | untagged commit `1a2b3c4` | `0.2.0-dev+1a2b3c4` |
//! | no git (tarball build) | `0.2.0-dev` |

fn main() {
    // Rebuild when HEAD moves so `crop --version` tracks the checkout
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let package = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let version = if git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some() {
        package
    } else {
        match git(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) => format!("{package}-dev+{}", hash.trim()),
            None => format!("{package}-dev"),
        }
    };
    println!("cargo:rustc-env=CROP_VERSION={version}");
}

fn git(args: &[&str]) -> Option<String> {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
        .filter(|out| !out.trim().is_empty())
}
