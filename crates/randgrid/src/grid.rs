use image::GrayImage;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} values for the grid, got {actual}")]
    Size { expected: usize, actual: usize },

    #[error("value {value} at index {index} does not fit in an 8-bit pixel")]
    OutOfRange { index: usize, value: i64 },

    #[error("range {min}..={max} does not fit in an 8-bit pixel")]
    Range { min: i64, max: i64 },
}

/// Check that every integer in `min..=max` can become a pixel.
pub fn check_pixel_range(min: i64, max: i64) -> Result<(), GridError> {
    if min < 0 || max > i64::from(u8::MAX) {
        return Err(GridError::Range { min, max });
    }
    Ok(())
}

/// Reshape a flat row-major list into a `width` x `height` grayscale image.
pub fn to_gray_image(values: &[i64], width: u32, height: u32) -> Result<GrayImage, GridError> {
    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(GridError::Size {
            expected,
            actual: values.len(),
        });
    }

    let pixels = values
        .iter()
        .enumerate()
        .map(|(index, &value)| u8::try_from(value).map_err(|_| GridError::OutOfRange { index, value }))
        .collect::<Result<Vec<u8>, _>>()?;

    // Length checked above.
    GrayImage::from_raw(width, height, pixels).ok_or(GridError::Size {
        expected,
        actual: values.len(),
    })
}

/// Format values tab-separated, `columns` per line, the way the service does.
pub fn format_rows(values: &[i64], columns: usize) -> String {
    let mut out = String::new();
    for row in values.chunks(columns.max(1)) {
        let line: Vec<String> = row.iter().map(i64::to_string).collect();
        out.push_str(&line.join("\t"));
        out.push('\n');
    }
    out
}
