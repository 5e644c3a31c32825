//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Release CLI propagating versions across package manifests."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---

/// Compile-time metadata about this tool captured via `vergen`.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Semantic version of this tool.
    pub semver: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Optimisation level used during compilation.
    pub profile: String,
}

impl BuildInfo {
    /// Construct a new [`BuildInfo`] from the environment captured at build time.
    pub fn current() -> Self {
        Self {
            semver: env!("CARGO_PKG_VERSION").to_owned(),
            git_sha: option_env!("VERGEN_GIT_SHA")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            profile: option_env!("VERGEN_CARGO_OPT_LEVEL")
                .map(|level| format!("opt-level {level}"))
                .unwrap_or_else(|| "UNKNOWN".to_owned()),
        }
    }

    /// One-line banner combining semantic version and git hash.
    pub fn banner(&self) -> String {
        format!("horizon-release v{} (git {})", self.semver, self.git_sha)
    }

    /// Multi-line text printed by `--version`.
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_contains_semver() {
        let info = BuildInfo::current();
        let extended = info.extended();
        assert!(extended.starts_with("horizon-release v"));
        assert!(extended.contains(&info.semver));
        assert_eq!(extended.lines().count(), 4);
    }
}
