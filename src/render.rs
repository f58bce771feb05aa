use std::path::Path;

use anyhow::Context as _;

use crate::{
    bitmap::Bitmap,
    color,
    config::CloudConfig,
    engine::{Placement, color_param},
    error::CloudResult,
};

/// Straight (non-premultiplied) RGBA8 frame.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Frame {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Frame {
            width,
            height,
            data,
        }
    }

    fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
        self.data[i + 3] = 255;
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Paint committed placements onto a flat background, each word in a color
/// sampled from the twilight palette at a per-word deterministic parameter.
/// When a mask region is present and `contour_width > 0`, its outline is
/// traced in white first so words stay on top.
pub fn render(
    placements: &[Placement],
    region: Option<&Bitmap>,
    width: u32,
    height: u32,
    cfg: &CloudConfig,
) -> Frame {
    let mut frame = Frame::filled(width, height, cfg.background);

    if let Some(region) = region
        && cfg.contour_width > 0
    {
        draw_contour(&mut frame, region, cfg.contour_width);
    }

    for p in placements {
        let rgb = color::twilight(color_param(cfg.seed, p.rank));
        let ink = &p.sprite.ink;
        for gy in 0..ink.height() {
            for gx in 0..ink.width() {
                if ink.get(gx, gy) {
                    let x = p.x + gx;
                    let y = p.y + gy;
                    if x < width && y < height {
                        frame.put(x, y, rgb);
                    }
                }
            }
        }
    }
    frame
}

/// White outline around the allowed region: placeable pixels bordering a
/// forbidden or out-of-bounds pixel, thickened to `width` pixels.
fn draw_contour(frame: &mut Frame, region: &Bitmap, width: u32) {
    let w = region.width();
    let h = region.height();
    let r = width as i64;
    for y in 0..h {
        for x in 0..w {
            if !region.get(x, y) || !on_boundary(region, x, y) {
                continue;
            }
            for dy in -r..=r {
                for dx in -r..=r {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0 && ny >= 0 && (nx as u32) < w && (ny as u32) < h {
                        frame.put(nx as u32, ny as u32, [255, 255, 255]);
                    }
                }
            }
        }
    }
}

fn on_boundary(region: &Bitmap, x: u32, y: u32) -> bool {
    let w = region.width() as i64;
    let h = region.height() as i64;
    for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= w || ny >= h {
            return true;
        }
        if !region.get(nx as u32, ny as u32) {
            return true;
        }
    }
    false
}

/// Encode a frame as PNG at `path`, creating parent directories as needed.
pub fn write_png(frame: &Frame, path: &Path) -> CloudResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
