//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` (native unit tests)
//! the calls compile to nothing.

macro_rules! console_fn {
    ($(#[$meta:meta])* $name:ident => $js:ident) => {
        $(#[$meta])*
        pub fn $name(message: &str) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::$js(&message.into());
            #[cfg(not(target_arch = "wasm32"))]
            let _ = message;
        }
    };
}

console_fn!(
    /// Log at error level.
    error => error_1
);
console_fn!(
    /// Log at warning level.
    warn => warn_1
);
console_fn!(
    /// Log at info level.
    info => info_1
);
console_fn!(
    /// Log at debug level.
    debug => debug_1
);
