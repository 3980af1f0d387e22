use anyhow::{Context, Result};
use notifier_item::{Icon, Pixmap};
use std::path::Path;

/// Sizes of the generated icons, hosts pick whichever fits best.
const GENERATED_SIZES: [u32; 3] = [16, 22, 32];

/// Load a PNG file as a single-pixmap icon.
pub fn load(name: &str, path: &Path) -> Result<Icon> {
    let img = image::open(path).with_context(|| format!("Failed to load icon from {}", path.display()))?;
    log::debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(Icon::new(name, vec![Pixmap::encode(&img)]))
}

/// A filled circle in `rgb` on a transparent background, at a few sizes.
pub fn generated(name: &str, rgb: [u16; 3]) -> Icon {
    let pixmaps = GENERATED_SIZES
        .iter()
        .map(|&size| {
            let img = image::ImageBuffer::<image::Rgba<u16>, Vec<u16>>::from_fn(size, size, |x, y| {
                let r = size as f32 / 2.0;
                let (dx, dy) = (x as f32 + 0.5 - r, y as f32 + 0.5 - r);
                let alpha = if dx * dx + dy * dy <= r * r { u16::MAX } else { 0 };
                image::Rgba([rgb[0], rgb[1], rgb[2], alpha])
            });
            Pixmap::encode(&img)
        })
        .collect();
    Icon::new(name, pixmaps)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generated_icon() {
        let icon = generated("demo", [0xffff, 0, 0]);
        assert_eq!(icon.pixmaps.len(), GENERATED_SIZES.len());
        for (pixmap, size) in icon.pixmaps.iter().zip(GENERATED_SIZES) {
            assert_eq!(pixmap.data().len(), (size * size * 4) as usize);
            // corners are transparent, the center is opaque red
            assert_eq!(&pixmap.data()[..4], &[0, 0xff, 0, 0]);
            let center = 4 * ((size / 2) * size + size / 2) as usize;
            assert_eq!(&pixmap.data()[center..center + 4], &[0xff, 0xff, 0, 0]);
        }
    }
}
