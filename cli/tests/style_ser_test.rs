use nu_ansi_term::Color::*;
use nu_ansi_term::Style;
use serde_derive::{Deserialize, Serialize};

use numlab::style_ser::{parse_color, parse_style};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Wrap {
    #[serde(with = "numlab::style_ser")]
    style: Style,
}

#[test]
fn roundtrip() {
    fn check(style: Style) {
        let style = Wrap { style };
        let toml_str = toml::to_string(&style).unwrap();
        let des = toml::from_str::<Wrap>(&toml_str).unwrap();
        assert_eq!(style, des);
    }

    let tests = [
        Black,
        Red,
        Green,
        Yellow,
        Blue,
        Purple,
        Cyan,
        White,
        DarkGray,
        LightRed,
        LightGreen,
        LightYellow,
        LightBlue,
        LightPurple,
        Magenta,
        LightMagenta,
        LightCyan,
        LightGray,
        Fixed(0),
        Fixed(255),
        Rgb(0, 0, 0),
        Rgb(255, 255, 255),
        Rgb(1, 2, 3),
    ];
    for test in tests.iter().cloned() {
        check(Style::new().fg(test));
        check(Style::new().on(test));
        check(Style::new().fg(test).on(test));
    }
    check(Style::new().fg(Red).on(Black).dimmed().underline());
    check(Style::new().bold().italic().reverse());
    check(Style::new());
}

#[test]
fn parse_colors() {
    assert_eq!(parse_color("black"), Some(Black));
    assert_eq!(parse_color("light_magenta"), Some(LightMagenta));
    assert_eq!(parse_color("208"), Some(Fixed(208)));
    assert_eq!(parse_color("rgb(1,2,3)"), Some(Rgb(1, 2, 3)));
    assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Rgb(1, 2, 3)));
    assert_eq!(parse_color("#ff8800"), Some(Rgb(255, 136, 0)));
    assert_eq!(parse_color("rgb(1,2)"), None);
    assert_eq!(parse_color("rgb(1,2,300)"), None);
    assert_eq!(parse_color("#ff88"), None);
    assert_eq!(parse_color("256"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn parse_styles() {
    assert_eq!(
        parse_style("bold red on black"),
        Ok(Style::new().bold().fg(Red).on(Black))
    );
    assert_eq!(parse_style("plain"), Ok(Style::new()));
    assert_eq!(parse_style("dim under"), Ok(Style::new().dimmed().underline()));
    assert_eq!(parse_style("bold sparkly"), Err("sparkly"));
}

#[test]
fn invalid_style_in_toml() {
    let err = toml::from_str::<Wrap>("style = \"bold sparkly\"").unwrap_err();
    assert!(err.to_string().contains("sparkly"), "{}", err);
}
