//! Deterministic avatar colors: a user's initials hash to a hue, which is
//! rendered as a hex color pair (background plus readable text color). Views
//! use it for colored-initials avatars and ui-avatars.com URLs.

const AVATAR_SATURATION: f32 = 70.0;
const AVATAR_LIGHTNESS: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarColor {
    /// Background, `#rrggbb`.
    pub background: String,
    /// Text color over that background, `#rrggbb`.
    pub text: String,
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

fn hsl_to_hex(h: f32, s: f32, l: f32) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let k = |n: f32| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let channel = l - a * (-1.0_f32).max((k(n) - 3.0).min((9.0 - k(n)).min(1.0)));
        (255.0 * channel).round() as u8
    };
    format!("#{:02x}{:02x}{:02x}", f(0.0), f(8.0), f(4.0))
}

pub fn avatar_color(name: &str) -> AvatarColor {
    let hash: u32 = initials(name).chars().map(|c| c as u32).sum();
    let hue = (hash % 360) as f32;
    let background = hsl_to_hex(hue, AVATAR_SATURATION, AVATAR_LIGHTNESS);
    let text = if AVATAR_LIGHTNESS > 50.0 {
        "#1F2937".to_string()
    } else {
        "#FFFFFF".to_string()
    };
    AvatarColor { background, text }
}

/// ui-avatars.com URL matching the colors of [`avatar_color`].
pub fn avatar_url(name: &str) -> String {
    let color = avatar_color(name);
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color={}",
        name.replace(' ', "+"),
        color.background.trim_start_matches('#'),
        color.text.trim_start_matches('#'),
    )
}

/// Parse `#rrggbb` into channel bytes. Returns None for anything else.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Leanne Graham"), "LG");
        assert_eq!(initials("Clementina DuBuque"), "CD");
        assert_eq!(initials("plato"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_avatar_color_is_deterministic() {
        let first = avatar_color("Leanne Graham");
        let second = avatar_color("Leanne Graham");
        assert_eq!(first, second);
        // L=60 keeps the dark text color
        assert_eq!(first.text, "#1F2937");
        assert!(parse_hex_color(&first.background).is_some());
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
    }

    #[test]
    fn test_avatar_url_encodes_name_and_colors() {
        let url = avatar_url("Leanne Graham");
        assert!(url.starts_with("https://ui-avatars.com/api/?name=Leanne+Graham&background="));
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#1F2937"), Some((0x1f, 0x29, 0x37)));
        assert_eq!(parse_hex_color("1F2937"), None);
        assert_eq!(parse_hex_color("#abc"), None);
    }
}
