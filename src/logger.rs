//! A console logger giving every key its own color.
//!
//! A line looks like
//!
//! ```text
//!  09:05:03  ==== key ====  (type:string)  message
//! ```
//!
//! where the key is drawn on the key color and the message inside a
//! border of the same color.  Objects, arrays and multiple messages are
//! wrapped in a group titled with the key.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::io;
use chrono::{Local, NaiveTime};
use serde_json::Value;
use crate::console::{Console, ConsoleTheme, Radius, Style, TerminalConsole};
use crate::palettes::{colors, ColorItem};
use crate::{parse_color, Result};

const DEFAULT_PREFIX: &str = "==== ";
const DEFAULT_SUFFIX: &str = " ====";

/// Ramp indices handed out first, then once those are used up.
const INITIAL_INDICES: [usize; 3] = [1, 5, 7];
const REFILL_INDICES: [usize; 3] = [2, 3, 6];

/// Rewrites a key before it is decorated.
pub type FormatKey = fn(&str) -> String;

/// Configuration of a [`Logger`].
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Put before the key.  When empty, `"==== "` is used if
    /// `show_default_fix` is set.
    pub prefix: String,
    /// Put after the key.  When empty, `" ===="` is used if
    /// `show_default_fix` is set.
    pub suffix: String,
    pub show_time: bool,
    pub show_default_fix: bool,
    /// Show the type of the message, e.g. `(type:string)`.
    pub show_type: bool,
    pub format_key: Option<FormatKey>,
    /// Colors handed out to keys before the preset ones.
    pub color_list: Vec<ColorItem>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            prefix: String::new(),
            suffix: String::new(),
            show_time: true,
            show_default_fix: true,
            show_type: true,
            format_key: None,
            color_list: vec![],
        }
    }
}

impl LogConfig {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    pub fn show_default_fix(mut self, show: bool) -> Self {
        self.show_default_fix = show;
        self
    }

    pub fn show_type(mut self, show: bool) -> Self {
        self.show_type = show;
        self
    }

    pub fn format_key(mut self, f: FormatKey) -> Self {
        self.format_key = Some(f);
        self
    }

    pub fn color_list(mut self, colors: Vec<ColorItem>) -> Self {
        self.color_list = colors;
        self
    }

    /// The key with its prefix and suffix.
    pub fn decorate(&self, key: &str) -> String {
        let fix = |s: &'static str, custom: &str| {
            if !custom.is_empty() { custom.to_string() }
            else if self.show_default_fix { s.to_string() }
            else { String::new() } };
        let key = match self.format_key {
            Some(f) => f(key),
            None => key.to_string(),
        };
        format!("{}{key}{}", fix(DEFAULT_PREFIX, &self.prefix),
                fix(DEFAULT_SUFFIX, &self.suffix))
    }
}

/// What a message is logged under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogTarget {
    pub key: String,
    /// CSS color of the key, bypassing the automatic assignment.
    pub color: Option<String>,
}

impl LogTarget {
    pub fn new(key: impl Into<String>) -> Self {
        LogTarget { key: key.into(), color: None }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<&str> for LogTarget {
    fn from(key: &str) -> Self { LogTarget::new(key) }
}

impl From<String> for LogTarget {
    fn from(key: String) -> Self { LogTarget::new(key) }
}

/// Hands out colors to keys, in order, and remembers them.
#[derive(Clone, Debug)]
pub struct ColorAssigner {
    queue: VecDeque<ColorItem>,
    keys: HashMap<String, ColorItem>,
}

impl Default for ColorAssigner {
    fn default() -> Self { Self::new() }
}

impl ColorAssigner {
    /// Start with entries 1, 5 and 7 of every preset palette.
    pub fn new() -> Self {
        Self::with_colors(colors(&INITIAL_INDICES))
    }

    /// Start with `colors`; presets follow once they are used up.
    pub fn with_colors(colors: Vec<ColorItem>) -> Self {
        ColorAssigner { queue: colors.into(), keys: HashMap::new() }
    }

    /// Color of `key`, assigning the next free one if the key is new.
    pub fn color_for(&mut self, key: &str) -> ColorItem {
        if let Some(&item) = self.keys.get(key) {
            return item
        }
        if self.queue.is_empty() {
            self.queue.extend(colors(&REFILL_INDICES));
        }
        let item = self.queue.pop_front()
            .unwrap_or(ColorItem::new(ColorItem::BLACK, ColorItem::WHITE));
        // Other presets may share the color.
        self.queue.retain(|c| c.color != item.color);
        log::trace!("key {key:?} gets {}", crate::to_hex(item.color));
        self.keys.insert(key.to_string(), item);
        item
    }

    /// Color already assigned to `key`.
    pub fn get(&self, key: &str) -> Option<ColorItem> {
        self.keys.get(key).copied()
    }

    /// Number of colors left before refilling.
    pub fn remaining(&self) -> usize { self.queue.len() }
}

/// Name of the type of a message, as shown by `(type:…)`.
fn type_name(message: Option<&Value>) -> &'static str {
    match message {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn text(message: Option<&Value>) -> String {
    match message {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// Log messages to a [`Console`], each key in its own color.
///
/// # Example
///
/// ```
/// use huelog::{LogConfig, Logger, TerminalConsole};
/// use serde_json::json;
///
/// let console = TerminalConsole::new(Vec::new()).colored(false);
/// let mut logger = Logger::with_console(console, LogConfig::default().show_time(false));
/// logger.log("net", &[json!("connected")]).unwrap();
/// let out = String::from_utf8(logger.into_console().into_inner()).unwrap();
/// assert_eq!(out, "  ==== net ==== (type:string)  connected \n");
/// ```
pub struct Logger<C = TerminalConsole<io::Stdout>> {
    config: LogConfig,
    colors: ColorAssigner,
    console: C,
    theme: ConsoleTheme,
    clock: Box<dyn Fn() -> NaiveTime>,
}

impl<C: fmt::Debug> fmt::Debug for Logger<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("colors", &self.colors)
            .field("console", &self.console)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Log to standard output, guessing the terminal theme.
    pub fn new() -> Self {
        Logger::with_console(TerminalConsole::stdout(), LogConfig::default())
            .theme(ConsoleTheme::detect())
    }
}

impl Default for Logger {
    fn default() -> Self { Self::new() }
}

impl<C: Console> Logger<C> {
    pub fn with_console(console: C, config: LogConfig) -> Self {
        let colors = if config.color_list.is_empty() { ColorAssigner::new() }
                     else { ColorAssigner::with_colors(config.color_list.clone()) };
        Logger { config, colors, console, theme: ConsoleTheme::default(),
                 clock: Box::new(|| Local::now().time()) }
    }

    /// Theme of the console, deciding the color of message text.
    pub fn theme(mut self, theme: ConsoleTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the wall clock used for timestamps.
    pub fn clock(mut self, clock: impl Fn() -> NaiveTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &LogConfig { &self.config }

    /// Replace the configuration.  Colors already given to keys are
    /// kept.
    pub fn set_config(&mut self, config: LogConfig) {
        self.config = config;
    }

    pub fn colors(&self) -> &ColorAssigner { &self.colors }

    pub fn console(&self) -> &C { &self.console }

    pub fn console_mut(&mut self) -> &mut C { &mut self.console }

    pub fn into_console(self) -> C { self.console }

    /// Log `messages` under `target`.  Several messages are grouped
    /// under the decorated key.
    pub fn log(&mut self, target: impl Into<LogTarget>, messages: &[Value])
               -> Result<()> {
        let target = target.into();
        let item = match target.color.as_deref().filter(|c| !c.is_empty()) {
            Some(c) => ColorItem::new(parse_color(c)?, ColorItem::WHITE),
            None => self.colors.color_for(&target.key),
        };
        if messages.len() > 1 {
            self.console.group(&self.config.decorate(&target.key))?;
            for m in messages {
                self.log_one(&target.key, Some(m), item)?;
            }
            self.console.group_end()?;
            return Ok(())
        }
        self.log_one(&target.key, messages.first(), item)
    }

    fn styles(&self, item: ColorItem) -> [Style; 3] {
        [
            Style { background: Some(item.color), border: Some(item.color),
                    foreground: Some(item.text_color), radius: Radius::Left },
            Style { background: None, border: Some(item.color),
                    foreground: Some(self.theme.text_color()),
                    radius: Radius::Right },
            Style::TRANSPARENT,
        ]
    }

    fn label(&self, key: &str, type_name: &str) -> String {
        let mut label = format!("%c {}", self.config.decorate(key));
        if self.config.show_time {
            let now = (self.clock)();
            label = format!(" {} {label}", now.format("%H:%M:%S"));
        }
        if self.config.show_type {
            label = format!(" {label} (type:{type_name})");
        }
        label
    }

    fn log_one(&mut self, key: &str, message: Option<&Value>, item: ColorItem)
               -> Result<()> {
        let type_name = type_name(message);
        let label = self.label(key, type_name);
        let structured = matches!(message, Some(Value::Array(_) | Value::Object(_)));
        let format = if structured { label }
                     else { format!("{label} %c {} ", text(message)) };
        let styles = self.styles(item);
        let n = format.matches("%c").count().min(styles.len());
        if let (true, Some(message)) = (structured, message) {
            self.console.group(&self.config.decorate(key))?;
            self.console.log(&format, &styles[.. n])?;
            self.console.value(message)?;
            self.console.group_end()?;
        } else {
            self.console.log(&format, &styles[.. n])?;
        }
        Ok(())
    }
}

/// Log any number of serializable values with a [`Logger`].
///
/// ```
/// use huelog::{console_log, LogConfig, Logger, TerminalConsole};
/// let console = TerminalConsole::new(Vec::new()).colored(false);
/// let mut logger = Logger::with_console(console, LogConfig::default());
/// console_log!(logger, "point", 1, "two", [3]).unwrap();
/// ```
#[macro_export]
macro_rules! console_log {
    ($logger:expr, $target:expr $(, $msg:expr)* $(,)?) => {
        $logger.log($target, &[$($crate::serde_json::json!($msg)),*])
    };
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_hex, Error, PresetColor, preset_palette};
    use pretty_assertions::assert_eq;
    use rgb::RGB8;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Event {
        Log(String, Vec<Style>),
        Value(Value),
        Group(String),
        GroupEnd,
    }

    #[derive(Debug, Default)]
    struct Recorder(Vec<Event>);

    impl Console for Recorder {
        fn log(&mut self, format: &str, styles: &[Style]) -> io::Result<()> {
            self.0.push(Event::Log(format.to_string(), styles.to_vec()));
            Ok(())
        }

        fn value(&mut self, value: &Value) -> io::Result<()> {
            self.0.push(Event::Value(value.clone()));
            Ok(())
        }

        fn group(&mut self, label: &str) -> io::Result<()> {
            self.0.push(Event::Group(label.to_string()));
            Ok(())
        }

        fn group_end(&mut self) -> io::Result<()> {
            self.0.push(Event::GroupEnd);
            Ok(())
        }
    }

    fn logger(config: LogConfig) -> Logger<Recorder> {
        Logger::with_console(Recorder::default(), config)
            .clock(|| NaiveTime::from_hms_opt(9, 5, 3).unwrap_or_default())
    }

    fn formats(logger: &Logger<Recorder>) -> Vec<&str> {
        logger.console().0.iter().filter_map(|e| match e {
            Event::Log(f, _) => Some(f.as_str()),
            _ => None }).collect()
    }

    #[test]
    fn decorate() {
        let config = LogConfig::default();
        assert_eq!(config.decorate("k"), "==== k ====");
        let config = config.prefix("[").suffix("]");
        assert_eq!(config.decorate("k"), "[k]");
        let config = LogConfig::default().show_default_fix(false);
        assert_eq!(config.decorate("k"), "k");
        let config = config.format_key(|k| k.to_uppercase()).prefix("> ");
        assert_eq!(config.decorate("k"), "> K");
    }

    #[test]
    fn scalar_line() {
        let mut logger = logger(LogConfig::default());
        logger.log("test.ts1", &[json!("Hello, World!")]).unwrap();
        let blue = preset_palette(PresetColor::Blue);
        let Event::Log(format, styles) = &logger.console().0[0] else {
            panic!("{:?}", logger.console().0)
        };
        assert_eq!(format,
                   "  09:05:03 %c ==== test.ts1 ==== (type:string) %c Hello, World! ");
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].background, Some(blue[1]));
        assert_eq!(styles[0].foreground, Some(ColorItem::BLACK));
        assert_eq!(styles[1].border, Some(blue[1]));
        assert_eq!(styles[1].foreground, Some(RGB8::new(0, 0, 0)));
    }

    #[test]
    fn label_options() {
        let mut logger = logger(LogConfig::default().show_type(false));
        logger.log("a", &[json!(1)]).unwrap();
        logger.set_config(LogConfig::default().show_time(false));
        logger.log("a", &[json!(true)]).unwrap();
        logger.log("a", &[json!(null)]).unwrap();
        logger.log("a", &[]).unwrap();
        assert_eq!(formats(&logger), [
            " 09:05:03 %c ==== a ==== %c 1 ",
            " %c ==== a ==== (type:boolean) %c true ",
            " %c ==== a ==== (type:null) %c null ",
            " %c ==== a ==== (type:undefined) %c undefined ",
        ]);
    }

    #[test]
    fn keys_keep_their_color() {
        let mut logger = logger(LogConfig::default());
        for key in ["a", "b", "a", "c"] {
            logger.log(key, &[json!("x")]).unwrap();
        }
        let blue = preset_palette(PresetColor::Blue);
        let bg: Vec<_> = logger.console().0.iter().map(|e| match e {
            Event::Log(_, s) => s[0].background,
            _ => None }).collect();
        assert_eq!(bg, [Some(blue[1]), Some(blue[5]), Some(blue[1]), Some(blue[7])]);
        // Shades get white text.
        assert_eq!(logger.colors().get("c").map(|c| c.text_color),
                   Some(ColorItem::WHITE));
    }

    #[test]
    fn structured_messages_are_grouped() {
        let mut logger = logger(LogConfig::default().show_time(false));
        logger.log("obj", &[json!({"a": 1})]).unwrap();
        let events = &logger.console().0;
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], Event::Group("==== obj ====".to_string()));
        let Event::Log(format, styles) = &events[1] else { panic!("{events:?}") };
        assert_eq!(format, " %c ==== obj ==== (type:object)");
        assert_eq!(styles.len(), 1);
        assert_eq!(events[2], Event::Value(json!({"a": 1})));
        assert_eq!(events[3], Event::GroupEnd);
    }

    #[test]
    fn several_messages() {
        let mut logger = logger(LogConfig::default().show_time(false)
                                .show_type(false));
        logger.log("test.ts", &[json!("Hello"), json!(["World!"])]).unwrap();
        let events = &logger.console().0;
        let groups = events.iter().filter(|e| matches!(e, Event::Group(_))).count();
        let ends = events.iter().filter(|e| **e == Event::GroupEnd).count();
        assert_eq!((groups, ends), (2, 2));
        assert_eq!(events[0], Event::Group("==== test.ts ====".to_string()));
        assert_eq!(formats(&logger), [" %c ==== test.ts ==== %c Hello ",
                                      " %c ==== test.ts ===="]);
        assert_eq!(events.last(), Some(&Event::GroupEnd));
    }

    #[test]
    fn explicit_color() {
        let mut logger = logger(LogConfig::default());
        logger.log(LogTarget::new("k").color("tomato"), &[json!("x")]).unwrap();
        let Event::Log(_, styles) = &logger.console().0[0] else { panic!() };
        assert_eq!(styles[0].background, Some(RGB8::new(255, 99, 71)));
        assert_eq!(styles[0].foreground, Some(ColorItem::WHITE));
        // The assignment queue was not touched.
        assert_eq!(logger.colors().get("k"), None);
        let err = logger.log(LogTarget::new("k").color("#nope"), &[]);
        assert!(matches!(err, Err(Error::InvalidColor { .. })));
    }

    #[test]
    fn dark_console_text() {
        let mut logger = logger(LogConfig::default()).theme(ConsoleTheme::Dark);
        logger.log("k", &[json!("x")]).unwrap();
        let Event::Log(_, styles) = &logger.console().0[0] else { panic!() };
        assert_eq!(styles[1].foreground, Some(RGB8::new(255, 255, 255)));
    }

    #[test]
    fn assigner_refills_and_dedups() {
        let a = ColorItem::new(RGB8::new(1, 2, 3), ColorItem::BLACK);
        let b = ColorItem::new(RGB8::new(4, 5, 6), ColorItem::BLACK);
        let mut colors = ColorAssigner::with_colors(vec![a, b, a]);
        assert_eq!(colors.color_for("x"), a);
        assert_eq!(colors.remaining(), 1);
        assert_eq!(colors.color_for("y"), b);
        assert_eq!(colors.remaining(), 0);
        let z = colors.color_for("z");
        assert_eq!(to_hex(z.color), "#91caff");
        assert_eq!(colors.remaining(), 3 * PresetColor::LEN - 1);
    }

    #[test]
    fn preset_duplicates_are_skipped() {
        // Magenta and pink share their seed.
        let mut colors = ColorAssigner::new();
        let n = colors.remaining();
        let mut seen = Vec::new();
        let mut key = 0;
        while colors.remaining() > 0 {
            seen.push(colors.color_for(&key.to_string()).color);
            key += 1;
        }
        assert!(seen.len() < n);
        let mut unique = seen.clone();
        unique.sort_by_key(|c| (c.r, c.g, c.b));
        unique.dedup();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn custom_color_list() {
        let a = ColorItem::new(RGB8::new(9, 9, 9), ColorItem::WHITE);
        let mut logger = logger(LogConfig::default().color_list(vec![a]));
        logger.log("k", &[json!("x")]).unwrap();
        assert_eq!(logger.colors().get("k"), Some(a));
    }

    #[test]
    fn macro_logs_values() {
        let mut logger = logger(LogConfig::default().show_time(false));
        crate::console_log!(logger, "m", 1, "two").unwrap();
        assert_eq!(formats(&logger), [" %c ==== m ==== (type:number) %c 1 ",
                                      " %c ==== m ==== (type:string) %c two "]);
    }
}
