#[doc(hidden)]
#[cfg(feature = "std")]
#[macro_export]
macro_rules! cfg_std {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "std"))]
#[macro_export]
macro_rules! cfg_std {
    ($($item:item)*) => {};
}

#[doc(hidden)]
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! cfg_alloc {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "alloc"))]
#[macro_export]
macro_rules! cfg_alloc {
    ($($item:item)*) => {};
}
