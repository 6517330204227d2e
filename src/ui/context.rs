use crate::config::{ColorMode, Config};
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Effective output settings after CLI flags, config and terminal detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = if json {
            false
        } else {
            match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            }
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }
}
