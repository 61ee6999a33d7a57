pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// A file part received alongside a create/update form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Lowercased extension of `filename` if it is one of the accepted image types.
/// Only the segment after the last `.` counts, so `photo.png.exe` is rejected.
pub fn image_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

pub fn is_allowed_image(filename: &str) -> bool {
    image_extension(filename).is_some()
}
