use image::RgbaImage;
use png::{BitDepth, ColorType, Encoder};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{ExportError, IconComposer};
use crate::utils::get_icon_file_name;

/// Sizes packaged with the application, smallest first
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// One file written by [`export_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Render and write `icon{size}.png` for every size in order, overwriting
/// existing files. Writes one confirmation line per file to `report`.
///
/// Stops at the first failure; files written before it are left in place.
pub fn export_all<W: Write>(
    sizes: &[u32],
    output_dir: &Path,
    report: &mut W,
) -> Result<Vec<ExportedIcon>, ExportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut exported = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let icon =
            IconComposer::compose(size).map_err(|source| ExportError::Render { size, source })?;

        let path = output_dir.join(get_icon_file_name(size));
        write_png(&path, &icon)?;

        writeln!(report, "  Generated {} ({}x{})", path.display(), size, size)
            .map_err(ExportError::Report)?;
        exported.push(ExportedIcon { size, path });
    }

    Ok(exported)
}

fn write_png(path: &Path, icon: &RgbaImage) -> Result<(), ExportError> {
    let png_bytes = encode_png(icon).map_err(|source| ExportError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, &png_bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} ({} bytes)", path.display(), png_bytes.len());
    Ok(())
}

/// 8-bit RGBA PNG bytes for `icon`
pub fn encode_png(icon: &RgbaImage) -> Result<Vec<u8>, png::EncodingError> {
    let mut png_bytes: Vec<u8> = Vec::new();
    {
        let mut enc = Encoder::new(&mut png_bytes, icon.width(), icon.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(icon.as_raw())?;
        writer.finish()?;
    }
    Ok(png_bytes)
}
