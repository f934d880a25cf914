//! Algorithmic kernel arms: run a kernel over a dataset, print the result.
//!
//! Each arm prints a fixed prefix line and then its values. The line
//! formats are part of the stdout contract and must not drift.

use std::io::Write;

use tracing::debug;

use branchtrace_kernel::algo::{reverse as rev, search, sequence, sort, text};
use branchtrace_kernel::dataset::reference::{
    ARR_0, ARR_1, ARR_2, ARR_3, STRING, STR_7_1, STR_7_2,
};

use super::{ArmContext, ArmError};

fn write_ints(out: &mut dyn Write, header: &str, values: &[i32]) -> std::io::Result<()> {
    writeln!(out, "{header}")?;
    for v in values {
        write!(out, "{v} ")?;
    }
    writeln!(out)
}

pub(super) fn merge_sort(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let arr = ctx.datasets.ints_mut(ARR_0)?;
    sort::merge_sort(arr);
    write_ints(&mut ctx.out, "The merge-sorted array is:", arr)?;
    Ok(())
}

pub(super) fn quick_sort(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let arr = ctx.datasets.ints_mut(ARR_1)?;
    sort::quick_sort(arr);
    write_ints(&mut ctx.out, "The quick-sorted array is:", arr)?;
    Ok(())
}

pub(super) fn binary_search(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let target = ctx.config.search_target;
    let arr = ctx.datasets.ints(ARR_2)?;
    match search::binary_search(arr, target) {
        Some(index) => writeln!(ctx.out, "The element {target} is in the index of {index}")?,
        None => writeln!(ctx.out, "The element {target} is not in this array!")?,
    }
    Ok(())
}

pub(super) fn reverse(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let arr = ctx.datasets.ints_mut(ARR_3)?;
    rev::reverse(arr);
    write_ints(&mut ctx.out, "The reversed array is:", arr)?;
    Ok(())
}

pub(super) fn primes(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let n = ctx.config.prime_count;
    writeln!(ctx.out, "Enter the number of prime numbers required")?;
    if n >= 1 {
        writeln!(ctx.out, "First {n} prime numbers are :")?;
    }
    let scan = sequence::primes(n);
    debug!(candidates = scan.candidates_tested, "prime scan complete");
    for p in &scan.primes {
        write!(ctx.out, "{p} ")?;
    }
    writeln!(ctx.out)?;
    Ok(())
}

pub(super) fn fibonacci(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let n = ctx.config.fibonacci_count;
    writeln!(ctx.out, "First {n} terms of Fibonacci series are :-")?;
    for term in sequence::fibonacci(n) {
        write!(ctx.out, "{term} ")?;
    }
    writeln!(ctx.out)?;
    Ok(())
}

pub(super) fn substring(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let window = ctx.config.substring;
    let source = ctx.datasets.text(STRING)?;
    let buffer = text::substring(source.as_bytes(), window.position, window.length)?;
    // Ownership passes to the caller, which never releases it.
    let leaked = buffer.leak();
    debug!(bytes = leaked.len(), "substring buffer leaked");
    let printable = leaked.split(|&b| b == 0).next().unwrap_or_default();
    ctx.out.write_all(printable)?;
    writeln!(ctx.out)?;
    Ok(())
}

pub(super) fn compare(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    let a = ctx.datasets.text(STR_7_1)?;
    let b = ctx.datasets.text(STR_7_2)?;
    // The comparison is evaluated once per condition. The first branch is
    // unreachable since the signal is never positive.
    if text::compare(a.as_bytes(), b.as_bytes()).as_c_int() > 0 {
        writeln!(ctx.out, "{a} is greater than {b}")?;
    } else if text::compare(a.as_bytes(), b.as_bytes()).as_c_int() < 0 {
        writeln!(ctx.out, "{b} is greater than {a}")?;
    } else {
        writeln!(ctx.out, "{a} is equal to {b}")?;
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
pub(super) fn inline_increment(ctx: &mut ArmContext<'_>) -> Result<(), ArmError> {
    ctx.scratch_counter = ctx.scratch_counter.wrapping_add(1);
    Ok(())
}
