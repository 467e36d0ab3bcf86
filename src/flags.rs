//! Normalization flags and the named presets built from them.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::UrlnormError;

/// A set of normalization flags determining how a URL will be normalized.
///
/// Flags combine with `|`. The set is order-independent, but the rules it
/// enables always run in one fixed order (see [`crate::core::normalizer`]).
/// Bits that do not name a flag are carried along and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NormalizationFlags(u32);

impl NormalizationFlags {
    // Safe normalizations
    pub const LOWERCASE_SCHEME: Self = Self(1 << 0);
    pub const LOWERCASE_HOST: Self = Self(1 << 1);
    pub const UPPERCASE_ESCAPES: Self = Self(1 << 2);
    pub const DECODE_UNNECESSARY_ESCAPES: Self = Self(1 << 3);
    pub const REMOVE_DEFAULT_PORT: Self = Self(1 << 4);
    pub const REMOVE_EMPTY_QUERY_SEPARATOR: Self = Self(1 << 5);

    // Usually safe normalizations
    /// Mutually exclusive with [`Self::ADD_TRAILING_SLASH`].
    pub const REMOVE_TRAILING_SLASH: Self = Self(1 << 6);
    pub const ADD_TRAILING_SLASH: Self = Self(1 << 7);
    pub const REMOVE_DOT_SEGMENTS: Self = Self(1 << 8);

    // Unsafe normalizations
    pub const REMOVE_DIRECTORY_INDEX: Self = Self(1 << 9);
    pub const REMOVE_FRAGMENT: Self = Self(1 << 10);
    pub const FORCE_HTTP: Self = Self(1 << 11);
    pub const REMOVE_DUPLICATE_SLASHES: Self = Self(1 << 12);
    /// Mutually exclusive with [`Self::ADD_WWW`].
    pub const REMOVE_WWW: Self = Self(1 << 13);
    pub const ADD_WWW: Self = Self(1 << 14);
    pub const SORT_QUERY: Self = Self(1 << 15);

    // Host encodings, outside every preset but the "all" ones
    pub const DECODE_DWORD_HOST: Self = Self(1 << 16);
    pub const DECODE_OCTAL_HOST: Self = Self(1 << 17);
    pub const DECODE_HEX_HOST: Self = Self(1 << 18);
    pub const REMOVE_UNNECESSARY_HOST_DOTS: Self = Self(1 << 19);
    pub const REMOVE_EMPTY_PORT_SEPARATOR: Self = Self(1 << 20);

    /// Normalizations that never change the resource a URL points to.
    pub const SAFE: Self = Self(
        Self::LOWERCASE_SCHEME.0
            | Self::LOWERCASE_HOST.0
            | Self::UPPERCASE_ESCAPES.0
            | Self::DECODE_UNNECESSARY_ESCAPES.0
            | Self::REMOVE_DEFAULT_PORT.0
            | Self::REMOVE_EMPTY_QUERY_SEPARATOR.0,
    );

    pub const USUALLY_SAFE_GREEDY: Self =
        Self(Self::SAFE.0 | Self::REMOVE_TRAILING_SLASH.0 | Self::REMOVE_DOT_SEGMENTS.0);
    pub const USUALLY_SAFE_NON_GREEDY: Self =
        Self(Self::SAFE.0 | Self::ADD_TRAILING_SLASH.0 | Self::REMOVE_DOT_SEGMENTS.0);
    /// Alias of [`Self::USUALLY_SAFE_GREEDY`].
    pub const USUALLY_SAFE: Self = Self::USUALLY_SAFE_GREEDY;

    const UNSAFE_EXTRA: u32 = Self::REMOVE_DIRECTORY_INDEX.0
        | Self::REMOVE_FRAGMENT.0
        | Self::FORCE_HTTP.0
        | Self::REMOVE_DUPLICATE_SLASHES.0
        | Self::REMOVE_WWW.0
        | Self::SORT_QUERY.0;

    pub const UNSAFE_GREEDY: Self = Self(Self::USUALLY_SAFE_GREEDY.0 | Self::UNSAFE_EXTRA);
    pub const UNSAFE_NON_GREEDY: Self = Self(Self::USUALLY_SAFE_NON_GREEDY.0 | Self::UNSAFE_EXTRA);
    /// Alias of [`Self::UNSAFE_GREEDY`].
    pub const UNSAFE: Self = Self::UNSAFE_GREEDY;

    const HOST_EXTRA: u32 = Self::DECODE_DWORD_HOST.0
        | Self::DECODE_OCTAL_HOST.0
        | Self::DECODE_HEX_HOST.0
        | Self::REMOVE_UNNECESSARY_HOST_DOTS.0
        | Self::REMOVE_EMPTY_PORT_SEPARATOR.0;

    pub const ALL_GREEDY: Self = Self(Self::UNSAFE_GREEDY.0 | Self::HOST_EXTRA);
    pub const ALL_NON_GREEDY: Self = Self(Self::UNSAFE_NON_GREEDY.0 | Self::HOST_EXTRA);

    /// The empty set: normalization only re-serializes the URL.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bits, unknown ones included.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build a set from raw bits, keeping bits that name no flag.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Iterate the elementary flags contained in this set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = (&'static str, Self)> {
        ELEMENTARY_FLAGS
            .iter()
            .copied()
            .filter(move |(_, flag)| self.contains(*flag))
    }

    /// Look up a flag or preset by its kebab-case name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ELEMENTARY_FLAGS
            .iter()
            .chain(PRESETS.iter())
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, flag)| *flag)
    }
}

/// Elementary flags by name, in bit order.
pub const ELEMENTARY_FLAGS: &[(&str, NormalizationFlags)] = &[
    ("lowercase-scheme", NormalizationFlags::LOWERCASE_SCHEME),
    ("lowercase-host", NormalizationFlags::LOWERCASE_HOST),
    ("uppercase-escapes", NormalizationFlags::UPPERCASE_ESCAPES),
    ("decode-unnecessary-escapes", NormalizationFlags::DECODE_UNNECESSARY_ESCAPES),
    ("remove-default-port", NormalizationFlags::REMOVE_DEFAULT_PORT),
    ("remove-empty-query-separator", NormalizationFlags::REMOVE_EMPTY_QUERY_SEPARATOR),
    ("remove-trailing-slash", NormalizationFlags::REMOVE_TRAILING_SLASH),
    ("add-trailing-slash", NormalizationFlags::ADD_TRAILING_SLASH),
    ("remove-dot-segments", NormalizationFlags::REMOVE_DOT_SEGMENTS),
    ("remove-directory-index", NormalizationFlags::REMOVE_DIRECTORY_INDEX),
    ("remove-fragment", NormalizationFlags::REMOVE_FRAGMENT),
    ("force-http", NormalizationFlags::FORCE_HTTP),
    ("remove-duplicate-slashes", NormalizationFlags::REMOVE_DUPLICATE_SLASHES),
    ("remove-www", NormalizationFlags::REMOVE_WWW),
    ("add-www", NormalizationFlags::ADD_WWW),
    ("sort-query", NormalizationFlags::SORT_QUERY),
    ("decode-dword-host", NormalizationFlags::DECODE_DWORD_HOST),
    ("decode-octal-host", NormalizationFlags::DECODE_OCTAL_HOST),
    ("decode-hex-host", NormalizationFlags::DECODE_HEX_HOST),
    ("remove-unnecessary-host-dots", NormalizationFlags::REMOVE_UNNECESSARY_HOST_DOTS),
    ("remove-empty-port-separator", NormalizationFlags::REMOVE_EMPTY_PORT_SEPARATOR),
];

/// Named presets.
pub const PRESETS: &[(&str, NormalizationFlags)] = &[
    ("safe", NormalizationFlags::SAFE),
    ("usually-safe", NormalizationFlags::USUALLY_SAFE),
    ("usually-safe-greedy", NormalizationFlags::USUALLY_SAFE_GREEDY),
    ("usually-safe-non-greedy", NormalizationFlags::USUALLY_SAFE_NON_GREEDY),
    ("unsafe", NormalizationFlags::UNSAFE),
    ("unsafe-greedy", NormalizationFlags::UNSAFE_GREEDY),
    ("unsafe-non-greedy", NormalizationFlags::UNSAFE_NON_GREEDY),
    ("all-greedy", NormalizationFlags::ALL_GREEDY),
    ("all-non-greedy", NormalizationFlags::ALL_NON_GREEDY),
];

impl BitOr for NormalizationFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for NormalizationFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for NormalizationFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Sub for NormalizationFlags {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for NormalizationFlags {
    fn sub_assign(&mut self, rhs: Self) {
        self.remove(rhs);
    }
}

/// Parses names separated by `,`, `|` or `+`, e.g. `"safe, remove-fragment"`.
impl FromStr for NormalizationFlags {
    type Err = UrlnormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::empty();
        for name in s.split([',', '|', '+']) {
            if name.trim().is_empty() {
                continue;
            }
            let flag = Self::from_name(name)
                .ok_or_else(|| UrlnormError::UnknownFlag(name.trim().to_string()))?;
            flags |= flag;
        }
        Ok(flags)
    }
}

/// Renders the elementary flags joined by `|`; unknown bits are not shown.
impl fmt::Display for NormalizationFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
