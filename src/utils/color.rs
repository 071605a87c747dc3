use ratatui::style::Color;

/// Parse a CSS color (`#rgb`, `#rrggbb`, `rgb(r, g, b)`) into a terminal color.
///
/// Returns `None` for anything else, including named CSS colors.
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let inner = value
        .strip_prefix("rgb(")
        .or_else(|| value.strip_prefix("rgba("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

/// Terminal color for a palette swatch, gray when the value can't be parsed
#[must_use]
pub fn swatch_color(value: &str) -> Color {
    parse_css_color(value).unwrap_or(Color::Gray)
}

/// Linear interpolation between palette stops, for drawing a gradient bar
/// `width` cells wide
#[must_use]
pub fn gradient_ramp(colors: &[String], width: usize) -> Vec<Color> {
    let stops: Vec<(u8, u8, u8)> = colors
        .iter()
        .filter_map(|value| match parse_css_color(value) {
            Some(Color::Rgb(r, g, b)) => Some((r, g, b)),
            _ => None,
        })
        .collect();

    match stops.len() {
        0 => vec![Color::Gray; width],
        1 => vec![Color::Rgb(stops[0].0, stops[0].1, stops[0].2); width],
        _ => (0..width)
            .map(|x| {
                let t = if width > 1 { x as f32 / (width - 1) as f32 } else { 0.0 };
                let scaled = t * (stops.len() - 1) as f32;
                let index = (scaled.floor() as usize).min(stops.len() - 2);
                let local = scaled - index as f32;
                let (a, b) = (stops[index], stops[index + 1]);
                let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * local).round() as u8;
                Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
            })
            .collect(),
    }
}
