//! Entry point for the WASM application

pub fn main() {
    sentiment_frontend::start();
}
