//! Log target names for this crate.
//!
//! Each target is prefixed with the crate name, so subscribers can filter
//! with directives like `orbis-intersect::lateral=debug`.

macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {tracing_targets!($name = stringify!($name));};
}

tracing_targets! {
    INTERSECT = "intersect",
    LATERAL = "lateral",
}
