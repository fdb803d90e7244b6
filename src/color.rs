/// Pastel tints for the specialty card accents. The admin panel stores a
/// full-saturation hex color per specialty; the card background uses a
/// washed-out version of it so the icon keeps the strong color.

const SOFT_BLEND: f64 = 0.2;

/// Neutral circle background used when the configured hex is unusable.
pub const NEUTRAL_TINT: &str = "rgb(243, 244, 246)";

/// Parses `#RRGGBB` or `RRGGBB`. Anything else is rejected.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn soften(channel: u8) -> u8 {
    (channel as f64 * SOFT_BLEND + 255.0 * (1.0 - SOFT_BLEND)).round() as u8
}

/// Blends each channel 80% toward white, keeping 20% of the original.
/// Malformed input yields `None`; callers fall back to [`NEUTRAL_TINT`].
pub fn soft_tint(color: &str) -> Option<String> {
    let (r, g, b) = parse_hex(color)?;
    Some(format!("rgb({}, {}, {})", soften(r), soften(g), soften(b)))
}

/// Tint with the neutral fallback already applied, for style attributes.
pub fn soft_tint_or_neutral(color: &str) -> String {
    soft_tint(color).unwrap_or_else(|| {
        log::warn!("ignoring malformed accent color {:?}", color);
        NEUTRAL_TINT.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_softens_to_light_gray() {
        assert_eq!(soft_tint("#000000").as_deref(), Some("rgb(204, 204, 204)"));
    }

    #[test]
    fn white_stays_white() {
        assert_eq!(soft_tint("#FFFFFF").as_deref(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(soft_tint("ec4899"), soft_tint("#ec4899"));
    }

    #[test]
    fn channels_blend_independently() {
        // 0x80 = 128 -> round(128 * 0.2 + 204) = round(229.6) = 230
        assert_eq!(soft_tint("#800000").as_deref(), Some("rgb(230, 204, 204)"));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(soft_tint(""), None);
        assert_eq!(soft_tint("#fff"), None);
        assert_eq!(soft_tint("#gggggg"), None);
        assert_eq!(soft_tint("#ec4899ff"), None);
        assert_eq!(soft_tint_or_neutral("not-a-color"), NEUTRAL_TINT);
    }
}
