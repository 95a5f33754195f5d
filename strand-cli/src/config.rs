//! Session configuration assembled from command-line flags and environment.

/// Default width, in characters, of the longest frequency bar.
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Environment variable that disables colored output when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Rendering options shared by the interactive session and one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Emit ANSI color escapes.
    pub color: bool,
    /// Width of the longest bar in the frequency chart.
    pub chart_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color: true,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl SessionConfig {
    /// Build from parsed flags, honoring `NO_COLOR`.
    pub fn from_flags(no_color: bool, chart_width: usize) -> Self {
        let env_no_color = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
        Self::resolve(no_color, env_no_color, chart_width)
    }

    fn resolve(no_color: bool, env_no_color: bool, chart_width: usize) -> Self {
        Self {
            color: !(no_color || env_no_color),
            chart_width: chart_width.max(1),
        }
    }

    /// Same settings with color turned off.
    pub fn plain(self) -> Self {
        Self {
            color: false,
            ..self
        }
    }
}
