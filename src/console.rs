//! Where the logger writes: a console understanding `%c` style
//! directives and nested groups.

use std::env;
use std::io::{self, Write};
use owo_colors::OwoColorize;
use rgb::RGB8;
use serde_json::Value;
use crate::to_hex;

/// Whether the console is drawn on a light or a dark background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleTheme {
    #[default]
    Light,
    Dark,
}

impl ConsoleTheme {
    /// Guess the theme of the terminal from `COLORFGBG`.  Defaults to
    /// [`ConsoleTheme::Light`] when the variable is missing.
    pub fn detect() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    /// `COLORFGBG` is `"fg;bg"` (sometimes `"fg;default;bg"`) with ANSI
    /// color numbers; 0–6 and 8 are dark backgrounds.
    pub fn from_colorfgbg(var: Option<&str>) -> Self {
        let bg = var.and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(0 ..= 6 | 8) => ConsoleTheme::Dark,
            _ => ConsoleTheme::Light,
        }
    }

    /// Color of message text on this console.
    pub fn text_color(self) -> RGB8 {
        match self {
            ConsoleTheme::Light => RGB8::new(0, 0, 0),
            ConsoleTheme::Dark => RGB8::new(255, 255, 255),
        }
    }
}

/// Which corners of a styled span are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radius {
    #[default]
    None,
    Left,
    Right,
}

/// Style of the text following a `%c` directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub background: Option<RGB8>,
    pub border: Option<RGB8>,
    pub foreground: Option<RGB8>,
    pub radius: Radius,
}

impl Style {
    /// No decoration at all.
    pub const TRANSPARENT: Style = Style {
        background: None, border: None, foreground: None, radius: Radius::None };

    /// The style as an inline CSS declaration, as browser consoles
    /// expect after a `%c`.
    pub fn css(&self) -> String {
        if *self == Style::TRANSPARENT {
            return "background:transparent".to_string()
        }
        let mut css = String::new();
        if let Some(c) = self.background {
            css.push_str(&format!("background:{};", to_hex(c)));
        }
        if let Some(c) = self.border {
            css.push_str(&format!("border:1px solid {}; padding: 1px;", to_hex(c)));
        }
        match self.radius {
            Radius::None => (),
            Radius::Left => css.push_str(" border-radius: 2px 0 0 2px;"),
            Radius::Right => css.push_str(" border-radius: 0 2px 2px 0;"),
        }
        if let Some(c) = self.foreground {
            css.push_str(&format!(" color: {};", to_hex(c)));
        }
        css
    }

    fn ansi(&self) -> owo_colors::Style {
        let mut style = owo_colors::Style::new();
        if let Some(c) = self.background {
            style = style.on_truecolor(c.r, c.g, c.b);
        }
        if let Some(c) = self.foreground {
            style = style.truecolor(c.r, c.g, c.b);
        }
        style
    }
}

/// Output surface of a [`Logger`](crate::Logger).
pub trait Console {
    /// Print one line.  The text after the n-th `%c` of `format` is
    /// styled with `styles[n]`; directives without a style are dropped.
    fn log(&mut self, format: &str, styles: &[Style]) -> io::Result<()>;

    /// Print a structured value.
    fn value(&mut self, value: &Value) -> io::Result<()>;

    /// Open a group titled `label`.  Output is nested until the
    /// matching [`Console::group_end`].
    fn group(&mut self, label: &str) -> io::Result<()>;

    fn group_end(&mut self) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn log(&mut self, format: &str, styles: &[Style]) -> io::Result<()> {
        (**self).log(format, styles)
    }

    fn value(&mut self, value: &Value) -> io::Result<()> {
        (**self).value(value)
    }

    fn group(&mut self, label: &str) -> io::Result<()> {
        (**self).group(label)
    }

    fn group_end(&mut self) -> io::Result<()> {
        (**self).group_end()
    }
}

const INDENT: &str = "  ";

/// A [`Console`] writing ANSI 24-bit colored text.  Groups are shown
/// by indentation.
#[derive(Debug)]
pub struct TerminalConsole<W> {
    out: W,
    depth: usize,
    colored: bool,
}

impl TerminalConsole<io::Stdout> {
    /// Standard output, colored when it is a terminal.
    pub fn stdout() -> Self {
        TerminalConsole::new(io::stdout()).colored(atty::is(atty::Stream::Stdout))
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(out: W) -> Self {
        TerminalConsole { out, depth: 0, colored: true }
    }

    /// Enable or disable escape sequences.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize { self.depth }

    pub fn get_ref(&self) -> &W { &self.out }

    pub fn into_inner(self) -> W { self.out }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", INDENT.repeat(self.depth), text)
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn log(&mut self, format: &str, styles: &[Style]) -> io::Result<()> {
        let mut parts = format.split("%c");
        let mut text = parts.next().unwrap_or_default().to_string();
        for (i, part) in parts.enumerate() {
            match styles.get(i) {
                Some(style) if self.colored && !part.is_empty() => {
                    text.push_str(&part.style(style.ansi()).to_string())
                }
                _ => text.push_str(part),
            }
        }
        self.line(&text)
    }

    fn value(&mut self, value: &Value) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(value)?;
        for l in pretty.lines() {
            self.line(l)?;
        }
        Ok(())
    }

    fn group(&mut self, label: &str) -> io::Result<()> {
        if self.colored {
            self.line(&label.bold().to_string())?;
        } else {
            self.line(label)?;
        }
        self.depth += 1;
        Ok(())
    }

    fn group_end(&mut self) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.out.flush()
    }
}
