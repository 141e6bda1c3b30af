use gpui::{Hsla, Rgba};
use gpui_trade_overlay::data_types::{
    parse_color, FontSpec, LinePlotConfig, StepMode, TradePointConfig,
};

fn rgba(color: Hsla) -> (u8, u8, u8) {
    let c = Rgba::from(color);
    let b = |v: f32| (v * 255.0).round() as u8;
    (b(c.r), b(c.g), b(c.b))
}

#[test]
fn test_parse_colors() {
    assert_eq!(rgba(parse_color("#6CB885").unwrap()), (0x6c, 0xb8, 0x85));
    assert_eq!(rgba(parse_color("#fff").unwrap()), (255, 255, 255));
    assert_eq!(rgba(parse_color("rgb(0, 0, 0)").unwrap()), (0, 0, 0));
    assert_eq!(rgba(parse_color("blue").unwrap()), (0, 0, 255));
    assert_eq!(rgba(parse_color(" Green ").unwrap()), (0, 128, 0));

    let translucent = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
    assert!((translucent.a - 0.5).abs() < 1e-6);

    assert!(parse_color("#12345").is_err());
    assert!(parse_color("rgb(300, 0, 0)").is_err());
    assert!(parse_color("rgb(1, 2)").is_err());
    assert!(parse_color("chartreuse-ish").is_err());
}

#[test]
fn test_parse_fonts() {
    let font: FontSpec = "60px Arial".parse().unwrap();
    assert_eq!(font.size, 60.0);
    assert_eq!(font.family, "Arial");
    assert!(!font.bold);

    let font: FontSpec = "bold 12px \"Roboto Mono\"".parse().unwrap();
    assert_eq!(font.size, 12.0);
    assert_eq!(font.family, "Roboto Mono");
    assert!(font.bold);

    assert!("Arial".parse::<FontSpec>().is_err());
    assert!("12px".parse::<FontSpec>().is_err());
}

#[test]
fn test_plot_configs_from_json() {
    let config: TradePointConfig =
        serde_json::from_str(r##"{"color": "#6CB885", "base_radius": 2.5}"##).unwrap();
    assert_eq!(config.base_radius, 2.5);
    assert_eq!(config.alpha, 0.7);
    assert_eq!(rgba(config.color), (0x6c, 0xb8, 0x85));

    let line: LinePlotConfig =
        serde_json::from_str(r#"{"step": "Post", "line_width": 5}"#).unwrap();
    assert_eq!(line.step, Some(StepMode::Post));
    assert_eq!(line.line_width, 5.0);

    assert!(serde_json::from_str::<TradePointConfig>(r#"{"color": "nope"}"#).is_err());
}
