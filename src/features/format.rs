//! Formatting helpers the extraction side uses to turn raw values into field strings.
use std::fmt::Write as _;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const HEX_PREVIEW_BYTES: usize = 512;
const HEX_BYTES_PER_LINE: usize = 16;

/// `1536` -> `"1.50 KB"`. Stops at terabytes.
pub fn format_file_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", SIZE_UNITS[unit])
}

/// `3725.0` -> `"1h 2m 5s"`; the hour part is left out when zero.
pub fn format_duration(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.max(0.0).floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else {
        format!("{minutes}m {secs}s")
    }
}

/// Degrees/minutes/seconds to signed decimal degrees. South and west are negative.
pub fn dms_to_decimal(dms: [f64; 3], reference: &str) -> f64 {
    let decimal = dms[0] + dms[1] / 60.0 + dms[2] / 3600.0;
    match reference {
        "S" | "W" => -decimal,
        _ => decimal,
    }
}

/// `[52.0, 22.0, 45.12]`, `"N"` -> `52°22'45.12"N`.
pub fn format_dms(dms: [f64; 3], reference: &str) -> String {
    format!(
        "{}°{}'{:.2}\"{reference}",
        dms[0].floor(),
        dms[1].floor(),
        dms[2]
    )
}

/// Lowercase hex of the first 512 bytes, 16 per line.
pub fn hex_preview(bytes: &[u8]) -> String {
    let mut out =
        String::with_capacity(HEX_PREVIEW_BYTES * 3 + HEX_PREVIEW_BYTES / HEX_BYTES_PER_LINE);
    for (i, byte) in bytes.iter().take(HEX_PREVIEW_BYTES).enumerate() {
        let _ = write!(out, "{byte:02x} ");
        if (i + 1) % HEX_BYTES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(1023), "1023.00 B");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5_242_880), "5.00 MB");
        // Anything past terabytes stays in TB.
        assert_eq!(format_file_size(1024_u64.pow(5)), "1024.00 TB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0m 0s");
        assert_eq!(format_duration(65.9), "1m 5s");
        assert_eq!(format_duration(3725.0), "1h 2m 5s");
        assert_eq!(format_duration(-3.0), "0m 0s");
    }

    #[test]
    fn test_dms_conversion() {
        let amsterdam_lat = dms_to_decimal([52.0, 22.0, 45.08], "N");
        assert!((amsterdam_lat - 52.379_189).abs() < 1e-5);

        let new_york_lon = dms_to_decimal([74.0, 0.0, 21.6], "W");
        assert!((new_york_lon + 74.006).abs() < 1e-9);

        assert!(dms_to_decimal([33.0, 52.0, 4.0], "S") < 0.0);
    }

    #[test]
    fn test_format_dms() {
        assert_eq!(format_dms([52.0, 22.0, 45.081], "N"), "52°22'45.08\"N");
        assert_eq!(format_dms([4.9, 53.7, 57.95], "E"), "4°53'57.95\"E");
    }

    #[test]
    fn test_hex_preview_layout() {
        let bytes: Vec<u8> = (0..=255).cycle().take(600).collect();
        let preview = hex_preview(&bytes);
        let lines: Vec<&str> = preview.lines().collect();

        assert_eq!(lines.len(), 32, "512 bytes at 16 per line");
        assert!(lines[0].starts_with("00 01 02 03"));
        assert!(preview.ends_with("ff"), "Trailing whitespace is trimmed");
        assert_eq!(preview.split_whitespace().count(), 512);
    }

    #[test]
    fn test_hex_preview_short_input() {
        assert_eq!(hex_preview(&[0x89, 0x50, 0x4e, 0x47]), "89 50 4e 47");
        assert_eq!(hex_preview(&[]), "");
    }
}
