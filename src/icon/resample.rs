use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Limits};

use crate::icon::IconError;

/// Filter used for every icon. Lanczos3 keeps small sizes sharp without aliasing.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Decode an image from disk.
///
/// The format is sniffed from the file contents first; the extension is only
/// used when the contents are not recognised.
pub fn decode(path: &Path) -> Result<DynamicImage, IconError> {
    let decode_failed = |reason: String| IconError::DecodeFailed {
        path: path.to_path_buf(),
        reason,
    };

    ImageReader::open(path)
        .map_err(|e| decode_failed(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| decode_failed(e.to_string()))
}

/// Bytes per pixel of the `Rgba<f32>` buffer the resampler fills between passes.
const INTERMEDIATE_BYTES_PER_PIXEL: u64 = 16;

/// Resample the whole image to a `size` x `size` square.
/// Non-square sources are stretched, not cropped.
///
/// Sizes whose buffers would exceed the decoder's default allocation limit
/// are rejected instead of being handed to the allocator.
pub fn resize_square(img: &DynamicImage, size: u32) -> Result<DynamicImage, IconError> {
    check_allocation(img, size)?;
    Ok(img.resize_exact(size, size, FILTER))
}

fn check_allocation(img: &DynamicImage, size: u32) -> Result<(), IconError> {
    let Some(max_alloc) = Limits::default().max_alloc else {
        return Ok(());
    };

    let edge = u64::from(size);
    let intermediate = u64::from(img.width())
        .saturating_mul(edge)
        .saturating_mul(INTERMEDIATE_BYTES_PER_PIXEL);
    let output = edge
        .saturating_mul(edge)
        .saturating_mul(u64::from(img.color().bytes_per_pixel()));

    let needed = intermediate.max(output);
    if needed > max_alloc {
        return Err(IconError::ResizeFailed {
            size,
            reason: format!(
                "needs {} bytes, more than the {} byte allocation limit",
                needed, max_alloc
            ),
        });
    }

    Ok(())
}

/// Encode as PNG and write to `path`, replacing any existing file.
pub fn write_png(img: &DynamicImage, path: &Path) -> Result<(), IconError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    }

    #[test]
    fn resize_square_from_square_source() {
        let resized = resize_square(&gradient(64, 64), 16).unwrap();
        assert_eq!(resized.dimensions(), (16, 16));
    }

    #[test]
    fn resize_square_stretches_non_square_source() {
        let resized = resize_square(&gradient(300, 200), 48).unwrap();
        assert_eq!(resized.dimensions(), (48, 48));
    }

    #[test]
    fn resize_square_can_upscale() {
        let resized = resize_square(&gradient(8, 8), 32).unwrap();
        assert_eq!(resized.dimensions(), (32, 32));
    }

    #[test]
    fn resize_square_rejects_oversized_target() {
        let result = resize_square(&gradient(4, 4), 4_000_000_000);

        assert!(matches!(
            result,
            Err(IconError::ResizeFailed { size: 4_000_000_000, .. })
        ));
    }

    #[test]
    fn resize_square_rejects_wide_intermediate_buffer() {
        // The 4 MiB output is fine; the 65536 x 1024 float buffer is 1 GiB
        let wide = DynamicImage::new_rgba8(65536, 1);
        let result = resize_square(&wide, 1024);

        assert!(matches!(result, Err(IconError::ResizeFailed { .. })));
    }

    #[test]
    fn resize_square_accepts_large_icon() {
        let resized = resize_square(&gradient(8, 8), 1024).unwrap();
        assert_eq!(resized.dimensions(), (1024, 1024));
    }

    #[test]
    fn write_then_decode_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&gradient(10, 10), &path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (10, 10));
    }

    #[test]
    fn decode_sniffs_format_from_contents() {
        let dir = tempdir().unwrap();
        let png_path = dir.path().join("logo.png");
        write_png(&gradient(12, 12), &png_path).unwrap();

        // Same bytes, misleading extension
        let renamed = dir.path().join("logo.bin");
        fs::copy(&png_path, &renamed).unwrap();

        let decoded = decode(&renamed).unwrap();
        assert_eq!(decoded.dimensions(), (12, 12));
    }

    #[test]
    fn decode_garbage_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let result = decode(&path);

        assert!(matches!(result, Err(IconError::DecodeFailed { .. })));
    }

    #[test]
    fn decode_missing_file_fails() {
        let result = decode(Path::new("/nonexistent/logo.png"));
        assert!(matches!(result, Err(IconError::DecodeFailed { .. })));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        let result = write_png(&gradient(4, 4), &path);

        assert!(matches!(result, Err(IconError::WriteFailed { .. })));
    }
}
