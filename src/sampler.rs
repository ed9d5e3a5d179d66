//! Screen color sampling
//!
//! Platform eyedropper APIs report the picked color as a string, either
//! `rgb(r, g, b)` or hex with or without the leading `#`. The sampler itself is
//! a collaborator behind [`ColorSampler`]; this module only normalizes what it
//! returns.

use crate::color::{hex_to_rgb, Rgb};

/// A source of sampled colors, such as a system eyedropper
pub trait ColorSampler {
    /// Sample one color. `None` means the user cancelled.
    fn sample(&mut self) -> Option<String>;
}

/// Normalize a raw sampler string into a color
///
/// Strings containing `rgb` use their first three integer runs as channels,
/// clamped to 255 (missing runs read as 0). Anything else is parsed as hex,
/// leniently.
pub fn normalize_sample(raw: &str) -> Rgb {
    let raw = raw.trim();

    if raw.to_ascii_lowercase().contains("rgb") {
        let mut channels = [0u8; 3];
        for (slot, run) in channels.iter_mut().zip(digit_runs(raw)) {
            *slot = run.parse::<u32>().map_or(u8::MAX, |v| v.min(255) as u8);
        }
        return Rgb::from(channels);
    }

    if raw.starts_with('#') {
        hex_to_rgb(raw)
    } else {
        hex_to_rgb(&format!("#{raw}"))
    }
}

/// Sample a color and normalize it. Returns `None` if sampling was cancelled.
pub fn sample_color<S: ColorSampler + ?Sized>(sampler: &mut S) -> Option<Rgb> {
    let raw = sampler.sample()?;
    let color = normalize_sample(&raw);
    log::debug!("sampled '{raw}' as {color}");
    Some(color)
}

fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted(Vec<Option<&'static str>>);

    impl ColorSampler for Scripted {
        fn sample(&mut self) -> Option<String> {
            self.0.remove(0).map(str::to_string)
        }
    }

    #[test]
    fn test_normalize_rgb_function() {
        assert_eq!(normalize_sample("rgb(59, 130, 246)"), Rgb::new(59, 130, 246));
        assert_eq!(normalize_sample("rgba(1,2,3,0.5)"), Rgb::new(1, 2, 3));
        assert_eq!(normalize_sample("RGB(300, 0, 0)"), Rgb::new(255, 0, 0));
        assert_eq!(normalize_sample("rgb(12)"), Rgb::new(12, 0, 0));
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_sample("#3b82f6"), Rgb::new(0x3B, 0x82, 0xF6));
        assert_eq!(normalize_sample("3B82F6"), Rgb::new(0x3B, 0x82, 0xF6));
        assert_eq!(normalize_sample(" ff0000 "), Rgb::new(255, 0, 0));
        assert_eq!(normalize_sample("not a color"), Rgb::BLACK);
    }

    #[test]
    fn test_sample_color() {
        let mut sampler = Scripted(vec![Some("rgb(255, 255, 255)"), None]);
        assert_eq!(sample_color(&mut sampler), Some(Rgb::WHITE));
        assert_eq!(sample_color(&mut sampler), None);
    }
}
