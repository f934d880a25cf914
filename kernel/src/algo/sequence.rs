//! Prime enumeration and Fibonacci terms.

/// Result of the prime scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeScan {
    /// Primes in output order, starting with the seeded `2`.
    pub primes: Vec<u32>,
    /// Number of candidates `i >= 3` run through trial division.
    pub candidates_tested: u32,
}

/// First `n` primes by trial division.
///
/// `2` is seeded when `n >= 1` and the counter starts at 2, so the scan runs
/// while `count <= n`. Each candidate `i` (from 3, every integer) is divided
/// by every `c` in `[2, i-1]`; it is prime iff the scan reaches `c == i`.
#[must_use]
pub fn primes(n: u32) -> PrimeScan {
    let mut primes = Vec::new();
    if n >= 1 {
        primes.push(2);
    }
    let mut candidates_tested = 0;
    let mut count = 2;
    let mut i: u32 = 3;
    while count <= n {
        candidates_tested += 1;
        let mut c = 2;
        while c < i {
            if i % c == 0 {
                break;
            }
            c += 1;
        }
        if c == i {
            primes.push(i);
            count += 1;
        }
        i += 1;
    }
    PrimeScan {
        primes,
        candidates_tested,
    }
}

/// First `n` Fibonacci terms, `F(0) = 0`, `F(1) = 1`.
///
/// Terms past `F(93)` wrap in `u64`.
#[must_use]
pub fn fibonacci(n: usize) -> Vec<u64> {
    let mut terms = Vec::with_capacity(n);
    let (mut first, mut second) = (0u64, 1u64);
    for c in 0..n {
        let next = match c {
            0 => 0,
            1 => 1,
            _ => {
                let next = first.wrapping_add(second);
                first = second;
                second = next;
                next
            }
        };
        terms.push(next);
    }
    terms
}
