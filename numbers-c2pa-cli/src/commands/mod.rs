pub mod inject;
pub mod keygen;
pub mod manifest;
pub mod read;
