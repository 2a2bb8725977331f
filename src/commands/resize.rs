use std::fs;
use std::path::PathBuf;

use image::GenericImageView;

use crate::icon::resample::{decode, resize_square, write_png};
use crate::icon::{icon_file_name, IconError, ProgressEvent};
use crate::utils::config::IconConfig;

/// Generate one square PNG per configured size.
///
/// Returns the written paths, one per requested size, in request order.
pub fn resize(config: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
    resize_with_progress(config, |_| {})
}

/// Generate icons, reporting each step through `on_progress`.
///
/// Workflow:
/// 1. Validate the size list
/// 2. Check the input exists (nothing is created if it doesn't)
/// 3. Create the output directory
/// 4. Decode the source, warn once if it isn't square
/// 5. Resample and write each size in order
///
/// There is no rollback: icons written before a failure stay on disk.
pub fn resize_with_progress<F>(
    config: &IconConfig,
    mut on_progress: F,
) -> Result<Vec<PathBuf>, IconError>
where
    F: FnMut(ProgressEvent),
{
    config.validate()?;

    if !config.input.exists() {
        return Err(IconError::InputNotFound {
            path: config.input.clone(),
        });
    }

    fs::create_dir_all(&config.output_dir).map_err(|e| IconError::OutputDirCreationFailed {
        path: config.output_dir.clone(),
        reason: e.to_string(),
    })?;

    let source = decode(&config.input)?;

    let (width, height) = source.dimensions();
    if width != height {
        on_progress(ProgressEvent::NotSquare { width, height });
    }

    let total = config.sizes.len();
    let mut written = Vec::with_capacity(total);

    for (index, &size) in config.sizes.iter().enumerate() {
        let output_path = config.output_dir.join(icon_file_name(size));
        let resized = resize_square(&source, size)?;
        write_png(&resized, &output_path)?;

        on_progress(ProgressEvent::Generated {
            path: output_path.clone(),
            size,
            index,
            total,
        });
        written.push(output_path);
    }

    Ok(written)
}
