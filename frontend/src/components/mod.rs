//! UI Components for the mediadrop application.
//!
//! # Layout Components
//! - [`Header`] - Navigation between the upload and register screens
//!
//! # Screens
//! - [`UploadPage`] - Drag & drop upload with key entry
//! - [`RegisterPage`] - Account registration with an invite key
//!
//! # Shared
//! - [`ResultPanel`] - Success / error card driven by the last outcome

mod header;
mod register;
mod result;
mod upload;

pub use header::*;
pub use register::*;
pub use result::*;
pub use upload::*;
