mod gemini;

pub use gemini::{analyze_image, extract_base64_from_data_url, extract_mime_type_from_data_url};
