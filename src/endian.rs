//! Byte-order selection for decoding and encoding.

/// Byte order of a cache file's integer fields.
///
/// Every cache glibc ships today is little-endian, so [`Endian::Little`]
/// is the default throughout this crate. Big-endian support exists for
/// caches produced on big-endian targets (s390x, some ppc64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Little-endian integer fields (the common case).
    #[default]
    Little,
    /// Big-endian integer fields.
    Big,
}

impl Endian {
    /// The byte order of the running target.
    ///
    /// Useful when inspecting the local `/etc/ld.so.cache`, which ldconfig
    /// writes in native order.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_little() {
        assert_eq!(Endian::default(), Endian::Little);
    }

    #[test]
    fn native_matches_the_target() {
        if cfg!(target_endian = "big") {
            assert_eq!(Endian::native(), Endian::Big);
        } else {
            assert_eq!(Endian::native(), Endian::Little);
        }
    }
}
