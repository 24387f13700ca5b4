//! Per-target platform facts.
//!
//! A [`Platform`] is built once per process and shared read-only. Host code
//! for a target without a reference descriptor can assemble its own through
//! [`Platform::new`].

use std::sync::{Arc, OnceLock};

use composive_ui_graphics::Dp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformType {
    Android,
    Ios,
    Desktop,
    Web,
}

/// Visual design language of a theme family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeType {
    Material3,
    Cupertino,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    name: String,
    platform_type: PlatformType,
    supports_dark_mode_detection: bool,
    preferred_theme: ThemeType,
    has_system_back_button: bool,
    supports_edge_to_edge: bool,
    density_scale: f32,
    prefers_compact_layouts: bool,
}

impl Platform {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        platform_type: PlatformType,
        supports_dark_mode_detection: bool,
        preferred_theme: ThemeType,
        has_system_back_button: bool,
        supports_edge_to_edge: bool,
        density_scale: f32,
        prefers_compact_layouts: bool,
    ) -> Self {
        Self {
            name: name.into(),
            platform_type,
            supports_dark_mode_detection,
            preferred_theme,
            has_system_back_button,
            supports_edge_to_edge,
            density_scale,
            prefers_compact_layouts,
        }
    }

    pub fn android(release: &str) -> Self {
        Self::new(
            versioned("Android", release),
            PlatformType::Android,
            true,
            ThemeType::Material3,
            true,
            true,
            1.0,
            false,
        )
    }

    pub fn ios(version: &str) -> Self {
        Self::new(
            versioned("iOS", version),
            PlatformType::Ios,
            true,
            ThemeType::Cupertino,
            false,
            true,
            1.0,
            true,
        )
    }

    pub fn desktop(os_name: &str, os_version: &str) -> Self {
        Self::new(
            format!("Desktop ({})", versioned(os_name, os_version)),
            PlatformType::Desktop,
            true,
            ThemeType::Cupertino,
            false,
            false,
            1.2,
            false,
        )
    }

    pub fn web() -> Self {
        Self::new(
            "Web",
            PlatformType::Web,
            true,
            ThemeType::Cupertino,
            false,
            false,
            1.0,
            false,
        )
    }

    /// Descriptor for the target this binary was compiled for.
    ///
    /// Computed on first use and shared for the rest of the process.
    pub fn current() -> Arc<Platform> {
        static CURRENT: OnceLock<Arc<Platform>> = OnceLock::new();
        CURRENT
            .get_or_init(|| {
                let platform = Self::detect();
                log::debug!("detected platform {:?}", platform.name);
                Arc::new(platform)
            })
            .clone()
    }

    fn detect() -> Self {
        let release = kernel_release().unwrap_or_default();
        match std::env::consts::OS {
            "android" => Self::android(""),
            "ios" => Self::ios(""),
            _ if cfg!(target_family = "wasm") => Self::web(),
            "macos" => Self::desktop("Mac OS X", ""),
            "windows" => Self::desktop("Windows", ""),
            "linux" => Self::desktop("Linux", &release),
            os => Self::desktop(os, ""),
        }
    }

    pub fn with_density_scale(mut self, density_scale: f32) -> Self {
        self.density_scale = density_scale;
        self
    }

    pub fn with_preferred_theme(mut self, theme: ThemeType) -> Self {
        self.preferred_theme = theme;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform_type(&self) -> PlatformType {
        self.platform_type
    }

    pub fn supports_dark_mode_detection(&self) -> bool {
        self.supports_dark_mode_detection
    }

    pub fn preferred_theme(&self) -> ThemeType {
        self.preferred_theme
    }

    pub fn has_system_back_button(&self) -> bool {
        self.has_system_back_button
    }

    pub fn supports_edge_to_edge(&self) -> bool {
        self.supports_edge_to_edge
    }

    pub fn density_scale(&self) -> f32 {
        self.density_scale
    }

    pub fn prefers_compact_layouts(&self) -> bool {
        self.prefers_compact_layouts
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.platform_type, PlatformType::Android | PlatformType::Ios)
    }

    pub fn is_desktop(&self) -> bool {
        self.platform_type == PlatformType::Desktop
    }

    pub fn is_ios(&self) -> bool {
        self.platform_type == PlatformType::Ios
    }

    pub fn is_android(&self) -> bool {
        self.platform_type == PlatformType::Android
    }

    pub fn is_web(&self) -> bool {
        self.platform_type == PlatformType::Web
    }

    /// Theme family used when neither the caller nor the configuration picks one.
    pub fn recommended_theme(&self) -> ThemeType {
        if self.name.to_ascii_lowercase().contains("android") {
            ThemeType::Material3
        } else {
            ThemeType::Cupertino
        }
    }

    pub fn should_use_material3(&self) -> bool {
        self.recommended_theme() == ThemeType::Material3
    }

    pub fn should_use_cupertino(&self) -> bool {
        self.recommended_theme() == ThemeType::Cupertino
    }

    pub fn spacing_multiplier(&self) -> f32 {
        match self.platform_type {
            PlatformType::Ios | PlatformType::Android => 1.0,
            PlatformType::Desktop => 1.2,
            PlatformType::Web => 1.1,
        }
    }

    pub fn min_touch_target_size(&self) -> Dp {
        match self.platform_type {
            PlatformType::Ios => Dp(44.0),
            PlatformType::Android => Dp(48.0),
            PlatformType::Desktop => Dp(32.0),
            PlatformType::Web => Dp(40.0),
        }
    }
}

/// `base` followed by `version`, or `base` alone when no version is known.
fn versioned(base: &str, version: &str) -> String {
    let version = version.trim();
    if version.is_empty() {
        base.to_owned()
    } else {
        format!("{base} {version}")
    }
}

/// The running kernel's release string, where the OS exposes one as a file.
fn kernel_release() -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    match std::fs::read_to_string("/proc/sys/kernel/osrelease") {
        Ok(release) => Some(release.trim().to_owned()),
        Err(err) => {
            log::debug!("kernel release unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
