/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
}

impl BuildMetadata {
    /// `gamesmith 0.1.0 (abc1234 clean, x86_64-unknown-linux-gnu, 2026-01-01T00:00:00Z)`
    pub fn version_line(&self) -> String {
        format!(
            "gamesmith {} ({} {}, {}, {})",
            self.version, self.git_hash, self.git_status, self.target, self.timestamp
        )
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("GAMESMITH_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("GAMESMITH_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("GAMESMITH_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("GAMESMITH_BUILD_TARGET").unwrap_or("unknown"),
    }
}
