//! Image format helpers shared by the registrar and the CLI.

// ============================================================================
// Image Dimension Extraction
// ============================================================================

/// Extract image dimensions from raw image data.
///
/// Supports PNG, JPEG, GIF and BMP by parsing header bytes.
/// Returns `(width, height)` or `None` if format is unrecognized.
pub fn extract_image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 10 {
        return None;
    }

    // PNG: width/height at bytes 16-23 in IHDR chunk
    if data.len() >= 24 && data.starts_with(&[0x89, b'P', b'N', b'G']) {
        let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
        let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
        return Some((width, height));
    }

    // JPEG: Need to parse SOF markers
    if data[0] == 0xFF && data[1] == 0xD8 {
        return extract_jpeg_dimensions(data);
    }

    // GIF: width/height at bytes 6-9 (little-endian)
    if data.starts_with(b"GIF") {
        let width = u16::from_le_bytes([data[6], data[7]]) as u32;
        let height = u16::from_le_bytes([data[8], data[9]]) as u32;
        return Some((width, height));
    }

    // BMP: BITMAPINFOHEADER width/height at bytes 18-25; height is negative for top-down rows
    if data.len() >= 26 && data.starts_with(b"BM") {
        let width = i32::from_le_bytes([data[18], data[19], data[20], data[21]]);
        let height = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
        return Some((width.unsigned_abs(), height.unsigned_abs()));
    }

    None
}

/// Extract dimensions from JPEG data by parsing SOF markers.
fn extract_jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let mut i = 2;
    while i + 4 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF markers (Start of Frame) - various encoding types
        if matches!(
            marker,
            0xC0 | 0xC1
                | 0xC2
                | 0xC3
                | 0xC5
                | 0xC6
                | 0xC7
                | 0xC9
                | 0xCA
                | 0xCB
                | 0xCD
                | 0xCE
                | 0xCF
        ) && i + 9 < data.len()
        {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Some((width, height));
        }

        // Skip to next marker
        let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        i += 2 + length;
    }
    None
}

// ============================================================================
// Image Format Detection
// ============================================================================

/// Image formats a WordprocessingML package can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    /// SVG image (vector)
    Svg,
    /// Enhanced Metafile
    Emf,
    /// Windows Metafile
    Wmf,
    WebP,
}

impl MediaFormat {
    /// Look up a format from its tag (file extension), case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let format = match tag.to_ascii_lowercase().as_str() {
            "png" => MediaFormat::Png,
            "jpg" | "jpeg" => MediaFormat::Jpeg,
            "gif" => MediaFormat::Gif,
            "bmp" => MediaFormat::Bmp,
            "tif" | "tiff" => MediaFormat::Tiff,
            "svg" => MediaFormat::Svg,
            "emf" => MediaFormat::Emf,
            "wmf" => MediaFormat::Wmf,
            "webp" => MediaFormat::WebP,
            _ => return None,
        };
        Some(format)
    }

    /// Get the MIME type string for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            MediaFormat::Png => "image/png",
            MediaFormat::Jpeg => "image/jpeg",
            MediaFormat::Gif => "image/gif",
            MediaFormat::Bmp => "image/bmp",
            MediaFormat::Tiff => "image/tiff",
            MediaFormat::Svg => "image/svg+xml",
            MediaFormat::Emf => "image/x-emf",
            MediaFormat::Wmf => "image/x-wmf",
            MediaFormat::WebP => "image/webp",
        }
    }

    /// Canonical tag, used as the media file extension.
    pub fn tag(self) -> &'static str {
        match self {
            MediaFormat::Png => "png",
            MediaFormat::Jpeg => "jpeg",
            MediaFormat::Gif => "gif",
            MediaFormat::Bmp => "bmp",
            MediaFormat::Tiff => "tiff",
            MediaFormat::Svg => "svg",
            MediaFormat::Emf => "emf",
            MediaFormat::Wmf => "wmf",
            MediaFormat::WebP => "webp",
        }
    }
}

/// Media type for a format tag. Tags without a known format map to `image/<tag>`.
pub fn media_type_for_tag(tag: &str) -> String {
    match MediaFormat::from_tag(tag) {
        Some(format) => format.mime_type().to_string(),
        None => format!("image/{}", tag.to_ascii_lowercase()),
    }
}

/// Detect image format from file path and/or raw bytes.
///
/// Tries the extension first, then falls back to magic bytes.
pub fn detect_media_format(path: &str, data: &[u8]) -> Option<MediaFormat> {
    if let Some((_, ext)) = path.rsplit_once('.')
        && let Some(format) = MediaFormat::from_tag(ext)
    {
        return Some(format);
    }

    if data.len() < 4 {
        return None;
    }
    if data[0] == 0xFF && data[1] == 0xD8 {
        return Some(MediaFormat::Jpeg);
    }
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        return Some(MediaFormat::Png);
    }
    if data.starts_with(b"GIF") {
        return Some(MediaFormat::Gif);
    }
    if data.starts_with(b"BM") {
        return Some(MediaFormat::Bmp);
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some(MediaFormat::WebP);
    }
    if looks_like_svg(data) {
        return Some(MediaFormat::Svg);
    }

    None
}

/// Cheap sniff for an `<svg` root in the first kilobyte. Not a validity check.
fn looks_like_svg(data: &[u8]) -> bool {
    let head = &data[..data.len().min(1024)];
    head.windows(4).any(|w| w == b"<svg")
}

// ============================================================================
// Tests
// ============================================================================
