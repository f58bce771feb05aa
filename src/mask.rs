use std::path::Path;

use crate::{
    bitmap::Bitmap,
    error::{CloudError, CloudResult},
};

/// Decode a mask image into an allowed-region bitmap.
///
/// Pure white pixels (255 in every color channel) are off-limits; everything
/// else is placeable. A mask that cannot be read or decoded is fatal for the
/// whole run, and so is a mask with no placeable pixels at all.
pub fn load_mask(path: &Path) -> CloudResult<Bitmap> {
    let img = image::open(path)
        .map_err(|e| CloudError::mask(format!("load mask '{}': {e}", path.display())))?;
    let region = region_from_image(&img);
    if region.is_empty() {
        return Err(CloudError::mask(format!(
            "mask '{}' has no placeable pixels (entirely white)",
            path.display()
        )));
    }
    tracing::info!(
        width = region.width(),
        height = region.height(),
        placeable = region.count_set(),
        "loaded mask"
    );
    Ok(region)
}

/// Allowed region from a decoded image: `true` where a word may be placed.
pub fn region_from_image(img: &image::DynamicImage) -> Bitmap {
    let rgb = img.to_rgb8();
    Bitmap::from_fn(rgb.width(), rgb.height(), |x, y| {
        let p = rgb.get_pixel(x, y);
        !(p[0] == 255 && p[1] == 255 && p[2] == 255)
    })
}
