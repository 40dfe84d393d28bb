use chrono::NaiveTime;
use huelog::{colors, generate, preset_palettes, to_hex, ConsoleTheme, LogConfig,
             Logger, Options, PresetColor, TerminalConsole, Theme, RAMP_LEN};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn every_preset_has_a_full_ramp() {
    assert_eq!(preset_palettes().len(), PresetColor::LEN);
    for (p, ramp) in preset_palettes() {
        assert_eq!(ramp.colors().len(), RAMP_LEN);
        assert_eq!(ramp.base(), p.seed(), "{p}");
        let by_name = generate(p.name(), &Options::default());
        // CSS knows some of the names, with other values.
        if let Ok(named) = by_name {
            assert_eq!(named.colors().len(), RAMP_LEN);
        }
    }
}

#[test]
fn options_builder() {
    let opts = Options::default().theme(Theme::Dark)
        .background_str("#000").unwrap();
    assert_eq!(opts.theme, Theme::Dark);
    let ramp = generate("#52c41a", &opts).unwrap();
    assert_eq!(ramp.colors().len(), RAMP_LEN);
    assert_ne!(ramp, generate("#52c41a", &Options::default()).unwrap());
}

#[test]
fn text_hint_follows_index() {
    for item in colors(&[0, 5]) {
        assert_eq!(to_hex(item.text_color), "#000000");
    }
    for item in colors(&[6, 9]) {
        assert_eq!(to_hex(item.text_color), "#ffffff");
    }
}

#[test]
fn terminal_output() {
    let console = TerminalConsole::new(Vec::new()).colored(false);
    let mut logger = Logger::with_console(console, LogConfig::default())
        .theme(ConsoleTheme::Dark)
        .clock(|| NaiveTime::from_hms_opt(23, 0, 7).unwrap_or_default());
    logger.log("test", &[json!("Hello"), json!({"n": 1})]).unwrap();
    let out = String::from_utf8(logger.into_console().into_inner()).unwrap();
    assert_eq!(out, "==== test ====\n\
                     \x20   23:00:07  ==== test ==== (type:string)  Hello \n\
                     \x20 ==== test ====\n\
                     \x20     23:00:07  ==== test ==== (type:object)\n\
                     \x20   {\n\
                     \x20     \"n\": 1\n\
                     \x20   }\n");
}
