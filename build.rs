use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Set by packagers building from a source tarball, where no git metadata exists.
const REVISION_OVERRIDE: &str = "PAINTAPP_BUILD_REVISION";

fn main() {
    println!("cargo:rerun-if-env-changed={REVISION_OVERRIDE}");

    let revision = env::var(REVISION_OVERRIDE)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(git_revision)
        .unwrap_or_else(|| "unknown".into());

    // Cargo sets PROFILE to "debug" or "release" for the crate being built.
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());

    println!("cargo:rustc-env=PAINTAPP_GIT_HASH={revision}");
    println!("cargo:rustc-env=PAINTAPP_BUILD_PROFILE={profile}");

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) {
        for watched in ["HEAD", "index", "refs", "packed-refs"] {
            let path = git_dir.join(watched);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

/// Short commit hash, suffixed with `-dirty` when tracked files have local edits.
fn git_revision() -> Option<String> {
    let hash = git(&["rev-parse", "--short", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"]).is_some();
    Some(if dirty { format!("{hash}-dirty") } else { hash })
}

/// Runs git and returns its trimmed stdout, or `None` on failure or empty output.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
