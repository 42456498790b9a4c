//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (stm32): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op (arguments are still type-checked)

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "stm32")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "stm32"), test))]
        println!("[TRACE] {}", format!($($arg)*));

        #[cfg(all(not(feature = "stm32"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
