// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde support for `nu_ansi_term::Style` as a space separated string,
//! e.g. `"bold red on black"`. Use with `#[serde(with = "style_ser")]`.

use std::{borrow::Cow, fmt};

use nu_ansi_term::{Color, Style};
use serde::{
    de::{Error, Unexpected, Visitor},
    Deserializer, Serializer,
};

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("purple", Color::Purple),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("dark_gray", Color::DarkGray),
    ("light_red", Color::LightRed),
    ("light_green", Color::LightGreen),
    ("light_yellow", Color::LightYellow),
    ("light_blue", Color::LightBlue),
    ("light_purple", Color::LightPurple),
    ("magenta", Color::Magenta),
    ("light_magenta", Color::LightMagenta),
    ("light_cyan", Color::LightCyan),
    ("light_gray", Color::LightGray),
];

struct StyleVisitor;

impl<'de> Visitor<'de> for StyleVisitor {
    type Value = Style;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a style string like \"bold red on black\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        parse_style(v).map_err(|word| E::invalid_value(Unexpected::Str(word), &"valid color token"))
    }
}

/// Parses a color name, a 256-color index, `rgb(r,g,b)`, or `#rrggbb`.
pub fn parse_color(input: &str) -> Option<Color> {
    if let Some(&(_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == input) {
        return Some(color);
    }
    if let Ok(value) = input.parse::<u8>() {
        return Some(Color::Fixed(value));
    }
    if let Some(inner) = input
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = inner
            .split(',')
            .map(|num| num.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match channels[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8));
    }
    None
}

/// Parses a whole style string. On failure returns the offending word.
pub fn parse_style(input: &str) -> Result<Style, &str> {
    let mut style = Style::new();
    let mut next_color_is_bg = false;
    for word in input.split_whitespace() {
        match word {
            "bold" => style = style.bold(),
            "italic" => style = style.italic(),
            "dimmed" | "dim" => style = style.dimmed(),
            "underline" | "under" => style = style.underline(),
            "blink" => style = style.blink(),
            "reverse" => style = style.reverse(),
            "strikethrough" | "strike" => style = style.strikethrough(),
            "hidden" | "none" => style = style.hidden(),
            "on" => next_color_is_bg = true,
            "plain" | "default" => (),
            _ => {
                let color = parse_color(word).ok_or(word)?;
                if next_color_is_bg {
                    style = style.on(color);
                    next_color_is_bg = false;
                } else {
                    style = style.fg(color);
                }
            }
        }
    }
    Ok(style)
}

pub fn deserialize<'de, D>(des: D) -> Result<Style, D::Error>
where
    D: Deserializer<'de>,
{
    des.deserialize_str(StyleVisitor)
}

fn color_to_string(color: Color) -> Cow<'static, str> {
    match color {
        Color::Default => "default".into(),
        Color::Fixed(i) => format!("{}", i).into(),
        Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b).into(),
        named => NAMED_COLORS
            .iter()
            .find(|(_, color)| *color == named)
            .map(|(name, _)| Cow::Borrowed(*name))
            .unwrap_or(Cow::Borrowed("default")),
    }
}

pub fn serialize<S>(style: &Style, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let flags = [
        (style.is_bold, "bold"),
        (style.is_italic, "italic"),
        (style.is_dimmed, "dimmed"),
        (style.is_hidden, "hidden"),
        (style.is_blink, "blink"),
        (style.is_reverse, "reverse"),
        (style.is_strikethrough, "strikethrough"),
        (style.is_underline, "underline"),
    ];
    let mut result: Vec<Cow<'static, str>> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| Cow::Borrowed(*name))
        .collect();
    if let Some(fg) = style.foreground {
        result.push(color_to_string(fg));
    }
    if let Some(bg) = style.background {
        result.push("on".into());
        result.push(color_to_string(bg));
    }
    if result.is_empty() {
        result.push("plain".into());
    }
    ser.serialize_str(&result.join(" "))
}
