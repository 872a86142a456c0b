#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

// Log through the `log` facade re-exported from the crate root so dependents
// don't need their own `log` dependency to use these.

#[macro_export]
macro_rules! lanetrace_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! lanetrace_info {
    ($($arg:tt)+) => {
        $crate::log::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! lanetrace_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!($($arg)+)
    };
}

#[macro_export]
macro_rules! lanetrace_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!($($arg)+)
    };
}
