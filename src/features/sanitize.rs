use crate::features::error::SanitizeError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use lopdf::{Document, Object};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const JPEG_QUALITY: u8 = 95;

/// OOXML parts that carry document properties (author, company, timestamps...).
pub const OFFICE_METADATA_PARTS: [&str; 3] = [
    "docProps/core.xml",
    "docProps/app.xml",
    "docProps/custom.xml",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SanitizeKind {
    Image,
    Pdf,
    Office,
    Unsupported,
}

impl SanitizeKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if mime.contains("officedocument")
            || mime.contains("ms-excel")
            || mime.contains("msword")
        {
            Self::Office
        } else {
            Self::Unsupported
        }
    }
}

pub fn sanitized_file_name(file_name: &str) -> String {
    format!("sanitized_{file_name}")
}

/// Returns a copy of the file with its embedded metadata stripped.
pub fn sanitize(mime: &str, bytes: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    let sanitized = match SanitizeKind::from_mime(mime) {
        SanitizeKind::Image => sanitize_image(bytes)?,
        SanitizeKind::Pdf => sanitize_pdf(bytes)?,
        SanitizeKind::Office => sanitize_office(bytes)?,
        SanitizeKind::Unsupported => return Err(SanitizeError::Unsupported(mime.to_string())),
    };
    log::debug!(
        "Sanitized {mime} file: {} -> {} bytes",
        bytes.len(),
        sanitized.len()
    );
    Ok(sanitized)
}

/// Decodes and re-encodes the pixels. The encoders only write image data, so
/// EXIF, XMP and text chunks of the source are dropped.
///
/// The EXIF orientation is baked into the pixels before encoding.
pub fn sanitize_image(bytes: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    let format = image::guess_format(bytes)?;
    let mut decoder = ImageReader::with_format(Cursor::new(bytes), format).into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    log::debug!("Applying {orientation:?} before re-encoding {format:?}");
    img.apply_orientation(orientation);

    let mut out = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            // JPEG has no alpha channel.
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?;
        }
        other => img.write_to(&mut out, other)?,
    }
    Ok(out.into_inner())
}

/// Drops the document information dictionary and the catalog's XMP stream.
pub fn sanitize_pdf(bytes: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    let mut doc = Document::load_mem(bytes)?;
    doc.trailer.remove(b"Info");

    let root_id = doc.trailer.get(b"Root").and_then(Object::as_reference)?;
    let catalog = doc.get_object_mut(root_id).and_then(Object::as_dict_mut)?;
    catalog.remove(b"Metadata");

    let pruned = doc.prune_objects();
    log::debug!("Pruned {} unreferenced PDF objects", pruned.len());

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

/// Copies every ZIP entry except [`OFFICE_METADATA_PARTS`].
pub fn sanitize_office(bytes: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_owned();
        if OFFICE_METADATA_PARTS.contains(&name.as_str()) {
            log::debug!("Removing {name} from Office document");
            continue;
        }

        let method = match file.compression() {
            CompressionMethod::Stored => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        };
        let options = SimpleFileOptions::default().compression_method(method);

        if file.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        writer.start_file(name, options)?;
        writer.write_all(&content)?;
    }

    Ok(writer.finish()?.into_inner())
}
