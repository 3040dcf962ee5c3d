use std::fmt;

use colored::Colorize;

use crate::{
    config::Config,
    currency::{format_money, CurrencyCode, LocaleConfig},
};

pub const RULE_WIDTH: usize = 80;
const SUB_RULE_WIDTH: usize = 50;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Info,
    Success,
    Warning,
    Error,
}

/// Styles console lines and money amounts according to the active [`Config`].
#[derive(Debug, Clone)]
pub struct Formatter {
    plain_mode: bool,
    currency: CurrencyCode,
    locale: LocaleConfig,
}

impl Formatter {
    pub fn new(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_mode,
            currency: config.currency_code(),
            locale: config.locale_config(),
        }
    }

    /// Uncoloured formatter with default currency settings.
    pub fn plain() -> Self {
        Self::new(&Config {
            plain_mode: true,
            ..Config::default()
        })
    }

    pub fn money(&self, amount: f64) -> String {
        format_money(amount, &self.currency, &self.locale)
    }

    pub fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    pub fn sub_rule(&self) -> String {
        format!("  {}", "-".repeat(SUB_RULE_WIDTH))
    }

    /// Title framed by full-width rules.
    pub fn banner(&self, title: impl fmt::Display) -> Vec<String> {
        vec![
            self.rule(),
            self.header_text(title),
            self.rule(),
        ]
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, title)
    }

    /// Section heading, prefixed by `icon` unless plain mode is on.
    pub fn heading(&self, icon: &str, title: impl fmt::Display) -> String {
        let text = if self.plain_mode {
            title.to_string()
        } else {
            format!("{icon} {title}")
        };
        self.apply_style(Style::Header, text)
    }

    pub fn info_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Info, message)
    }

    pub fn success_text(&self, message: impl fmt::Display) -> String {
        self.decorate("✔", "OK:", message, Style::Success)
    }

    pub fn warning_text(&self, message: impl fmt::Display) -> String {
        self.decorate("⚠", "WARNING:", message, Style::Warning)
    }

    pub fn error_text(&self, message: impl fmt::Display) -> String {
        self.decorate("✖", "ERROR:", message, Style::Error)
    }

    pub fn print_lines(&self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        self.colorize(message.to_string(), style)
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        style: Style,
    ) -> String {
        if self.plain_mode {
            format!("{plain_label} {message}")
        } else {
            self.colorize(format!("{icon} {message}"), style)
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.plain_mode {
            return text;
        }
        match style {
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
            Style::Header => text.bold().to_string(),
            Style::Info => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_text_labels() {
        let formatter = Formatter::plain();
        assert_eq!(formatter.success_text("listo"), "OK: listo");
        assert_eq!(formatter.error_text("falló"), "ERROR: falló");
        assert_eq!(formatter.heading("📊", "REPORTE"), "REPORTE");
    }

    #[test]
    fn banner_is_framed_by_rules() {
        let formatter = Formatter::plain();
        let lines = formatter.banner("TITULO");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), RULE_WIDTH);
        assert_eq!(lines[1], "TITULO");
    }

    #[test]
    fn money_uses_configured_currency() {
        let formatter = Formatter::new(&Config {
            currency: "EUR".into(),
            locale: "es-ES".into(),
            plain_mode: true,
            ..Config::default()
        });
        assert_eq!(formatter.money(1500.0), "€1.500,00");
    }
}
