use crate::utils::async_helper::{spawn_and_send, AsyncTaskResult};
use egui::ColorImage;
use std::sync::mpsc::{channel, Receiver};

/// Decode downloaded artwork bytes (jpeg/png/webp) into an egui image
pub fn decode_artwork(bytes: &[u8]) -> Result<ColorImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("Invalid artwork: {}", e))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.as_flat_samples();
    Ok(ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()))
}

/// Fetch artwork for `track_id` in the background
pub fn fetch_artwork(track_id: String, url: String) -> Receiver<AsyncTaskResult<(String, ColorImage)>> {
    let (tx, rx) = channel();
    spawn_and_send(
        move || {
            Box::pin(async move {
                let response = crate::utils::http::client()
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| format!("Artwork request failed: {}", e))?;
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| format!("Artwork download failed: {}", e))?;
                let image = decode_artwork(&bytes)?;
                log::debug!("[Artwork] Loaded {}x{} for {}", image.size[0], image.size[1], track_id);
                Ok::<_, String>((track_id, image))
            })
        },
        tx,
    );
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_png() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_artwork(&bytes).unwrap();
        assert_eq!(decoded.size, [3, 2]);
        assert_eq!(decoded.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_artwork(b"not an image").is_err());
    }
}
