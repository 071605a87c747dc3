use gradient_feed::utils::color::{gradient_ramp, parse_css_color, swatch_color};
use ratatui::style::Color;

#[test]
fn test_parse_css_color() {
    assert_eq!(parse_css_color("#667eea"), Some(Color::Rgb(0x66, 0x7e, 0xea)));
    assert_eq!(parse_css_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_css_color(" rgb(1, 2, 3) "), Some(Color::Rgb(1, 2, 3)));
    assert_eq!(parse_css_color("rgba(10, 20, 30, 0.5)"), Some(Color::Rgb(10, 20, 30)));
    assert_eq!(parse_css_color("purple"), None);
    assert_eq!(parse_css_color("#12345"), None);
    assert_eq!(parse_css_color("#zzzzzz"), None);
}

#[test]
fn test_swatch_color_falls_back_to_gray() {
    assert_eq!(swatch_color("#000000"), Color::Rgb(0, 0, 0));
    assert_eq!(swatch_color("not a color"), Color::Gray);
}

#[test]
fn test_gradient_ramp_endpoints() {
    let colors = vec!["#000000".to_string(), "#ffffff".to_string()];
    let ramp = gradient_ramp(&colors, 5);
    assert_eq!(ramp.len(), 5);
    assert_eq!(ramp[0], Color::Rgb(0, 0, 0));
    assert_eq!(ramp[2], Color::Rgb(128, 128, 128));
    assert_eq!(ramp[4], Color::Rgb(255, 255, 255));
}

#[test]
fn test_gradient_ramp_passes_through_middle_stop() {
    let colors = vec!["#ff0000".to_string(), "#00ff00".to_string(), "#0000ff".to_string()];
    let ramp = gradient_ramp(&colors, 3);
    assert_eq!(ramp, vec![Color::Rgb(255, 0, 0), Color::Rgb(0, 255, 0), Color::Rgb(0, 0, 255)]);
}

#[test]
fn test_gradient_ramp_degenerate_palettes() {
    assert_eq!(gradient_ramp(&[], 3), vec![Color::Gray; 3]);
    assert_eq!(gradient_ramp(&["#010203".to_string()], 2), vec![Color::Rgb(1, 2, 3); 2]);
    assert!(gradient_ramp(&["#000".to_string(), "#fff".to_string()], 0).is_empty());
}
