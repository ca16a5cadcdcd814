//! Entry point for the WASM application

pub fn main() {
    mediadrop_frontend::start();
}
