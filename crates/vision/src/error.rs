use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image has no pixels to analyze")]
    EmptyImage,

    #[error("Clustering error: {0}")]
    Clustering(String),
}

pub type Result<T> = std::result::Result<T, VisionError>;
