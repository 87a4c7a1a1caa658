//! Theme colors read from CSS custom properties.

/// Fallback for `--bg-dark`.
pub const DEFAULT_BACKGROUND: [f32; 3] = [11.0 / 255.0, 15.0 / 255.0, 25.0 / 255.0];
/// Fallback for `--accent-blue`.
pub const DEFAULT_ACCENT: [f32; 3] = [59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0];

/// Background and point colors, sRGB channels scaled to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: [f32; 3],
    pub accent: [f32; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self { background: DEFAULT_BACKGROUND, accent: DEFAULT_ACCENT }
    }
}

impl Theme {
    /// Build a theme from raw property values; anything unparseable falls
    /// back to the default for that slot.
    pub fn from_css(background: &str, accent: &str) -> Self {
        Self {
            background: parse_css_color(background).unwrap_or(DEFAULT_BACKGROUND),
            accent: parse_css_color(accent).unwrap_or(DEFAULT_ACCENT),
        }
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
/// Alpha is ignored.
pub fn parse_css_color(raw: &str) -> Option<[f32; 3]> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let inner = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(str::trim);
    let mut rgb = [0.0; 3];
    for slot in &mut rgb {
        let v: f32 = channels.next()?.parse().ok()?;
        if !(0.0..=255.0).contains(&v) {
            return None;
        }
        *slot = v / 255.0;
    }
    Some(rgb)
}

fn parse_hex(hex: &str) -> Option<[f32; 3]> {
    if !hex.is_ascii() {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        3 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<_>>()?,
        6 => (0..3)
            .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };
    Some([
        f32::from(digits[0]) / 255.0,
        f32::from(digits[1]) / 255.0,
        f32::from(digits[2]) / 255.0,
    ])
}
