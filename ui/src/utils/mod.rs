pub mod clipboard;
pub mod colors;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod qr;
