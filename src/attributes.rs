//! Attribute names understood by the scene loader that reads template files.
//!
//! These are plain keys. Nothing in this crate interprets them; they exist so
//! callers don't have to spell them by hand.

/// Number of times the object is created.
pub const COUNT: &str = "count";

pub const X: &str = "x";
pub const Y: &str = "y";
pub const Z: &str = "z";

/// Random position offset magnitudes (`rand * xr` etc).
pub const XR: &str = "xr";
pub const YR: &str = "yr";
pub const ZR: &str = "zr";

/// Build a `ComponentClassName.attributeName` key.
pub fn component_key(component: &str, field: &str) -> String {
    format!("{}.{}", component, field)
}

/// Build a `ComponentClassName.attributeName.subAttributeName` key.
pub fn component_sub_key(component: &str, field: &str, sub: &str) -> String {
    format!("{}.{}.{}", component, field, sub)
}
