use super::{ExtractionRule, RuleSet};

/// Upper bound for the find-bit sweep; the outer parameter doubles from 1
/// while it stays below this value, so 2048 is the last width tested.
const FIND_BIT_CEILING: u64 = 2050;

/// The rule sets used when the configuration file does not define any.
pub fn builtin_rule_sets() -> Vec<RuleSet> {
    vec![perf_bench_rules(), find_bit_rules()]
}

/// Result locations for the standard perf benchmark suite.
///
/// Offsets and delimiters follow the output layout of `perf bench`; the
/// epoll ctl counters print on the anchor line itself, hence the zero
/// offsets.
pub fn perf_bench_rules() -> RuleSet {
    RuleSet::new(
        "perf_results",
        vec![
            ExtractionRule::anchored("sched/pipe", 5, " ", "usecs/op"),
            ExtractionRule::anchored("syscall/basic", 4, " ", "usecs/op"),
            ExtractionRule::anchored("mem/memcpy", 4, " ", "MB/sec"),
            ExtractionRule::anchored("mem/memset", 4, " ", "MB/sec"),
            ExtractionRule::anchored("numa-mem", 8, " ", " GB/sec/thread"),
            ExtractionRule::anchored("futex/hash", 8, "Averaged", " operations/sec"),
            ExtractionRule::anchored("futex/wake ", 13, "threads in ", " ms "),
            ExtractionRule::anchored("futex/wake-parallel", 13, "(waking 1/4 threads) in ", " ms "),
            ExtractionRule::anchored("futex/requeue", 13, "threads in ", " ms "),
            ExtractionRule::anchored("futex/lock-pi", 8, "Averaged ", " operations/sec"),
            ExtractionRule::anchored("epoll/wait", 7, "Averaged ", " operations/sec"),
            ExtractionRule::anchored("ADD operations", 0, "Averaged ", " ADD operations"),
            ExtractionRule::anchored("MOD operations", 0, "Averaged ", " MOD operations"),
            ExtractionRule::anchored("DEL operations", 0, "Averaged ", " DEL operations"),
            ExtractionRule::anchored("internals/synthesize", 5, "time per event ", " usec"),
            ExtractionRule::anchored("internals/kallsyms-parse", 1, "took: ", " ms "),
        ],
    )
}

/// Result locations for the find-bit sweep, one rule per tested
/// `(bits_set, total_bits)` combination.
///
/// The sweep doubles `total_bits` from 1 up to 2048 and, for each width,
/// doubles `bits_set` from 1 up to the width. Generation order is column
/// order and is fully deterministic.
pub fn find_bit_rules() -> RuleSet {
    let rules = doublings(FIND_BIT_CEILING)
        .flat_map(|total_bits| doublings(total_bits + 1).map(move |bits_set| find_bit_rule(bits_set, total_bits)))
        .collect();

    RuleSet::new("perf_find_bit_results", rules)
}

/// Powers of two starting at 1, strictly below `limit`.
fn doublings(limit: u64) -> impl Iterator<Item = u64> {
    core::iter::successors(Some(1u64), |bits| bits.checked_mul(2)).take_while(move |bits| *bits < limit)
}

fn find_bit_rule(bits_set: u64, total_bits: u64) -> ExtractionRule {
    ExtractionRule::anchored(
        &format!("{bits_set} bits set of {total_bits} bits"),
        1,
        "Average for_each_set_bit took:",
        " usec (+-",
    )
}
