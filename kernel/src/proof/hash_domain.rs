//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. This module is
//! the single authority for domain-separator byte strings; the enum,
//! `as_bytes()`, `ALL`, and `Display` come from one macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Whole path trace (selector, steps, final datasets).
    PathTrace => b"BRANCHTRACE::PATH_TRACE::V1\0",

    /// Bytes emitted by a single arm invocation.
    ArmOutput => b"BRANCHTRACE::ARM_OUTPUT::V1\0",

    /// Dataset registry snapshot after a run.
    DatasetSnapshot => b"BRANCHTRACE::DATASET_SNAPSHOT::V1\0",

    /// Recorded quicksort cell-write log.
    QuickSortWrites => b"BRANCHTRACE::QUICKSORT_WRITES::V1\0",

    /// Benchmark input hashing.
    BenchInput => b"BRANCHTRACE::BENCH_INPUT::V1\0",
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn all_variants_in_all_constant() {
        assert_eq!(HashDomain::ALL.len(), 5, "expected 5 domain variants in ALL");
    }

    #[test]
    fn all_bytes_unique() {
        let mut seen = BTreeSet::new();
        for domain in HashDomain::ALL {
            assert!(
                seen.insert(domain.as_bytes()),
                "duplicate domain bytes: {domain}"
            );
        }
    }

    #[test]
    fn all_follow_naming_convention() {
        for domain in HashDomain::ALL {
            let bytes = domain.as_bytes();
            assert!(bytes.starts_with(b"BRANCHTRACE::"), "{domain} prefix");
            assert!(bytes.ends_with(b"::V1\0"), "{domain} suffix");
        }
    }

    #[test]
    fn display_returns_variant_name() {
        assert_eq!(format!("{}", HashDomain::PathTrace), "PathTrace");
    }
}
