// ==============================================
// CROSS-ENGINE INVARIANT TESTS (integration)
// ==============================================
//
// Properties that must hold for every eviction policy, plus the fixed-trace
// regression fixtures. These span multiple modules and belong here rather
// than in any single source file.

use replaykit::prelude::*;

/// Deterministic XorShift64 workload generator (no RNG dependency needed
/// for reproducible traces).
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

fn mixed_trace(len: usize, universe: u64, seed: u64) -> Vec<Address> {
    let mut rng = XorShift64::new(seed);
    (0..len).map(|_| rng.next_u64() % universe).collect()
}

// ==============================================
// Capacity invariant and presence bijection
// ==============================================

#[test]
fn resident_set_never_exceeds_capacity() {
    let trace = mixed_trace(5_000, 64, 42);
    for capacity in [1usize, 2, 7, 32, 100] {
        let mut fifo = FifoEngine::new(capacity);
        let mut lru = LruEngine::new(capacity);
        let mut clock = ClockEngine::new(capacity);
        for &addr in &trace {
            fifo.access(addr);
            lru.access(addr);
            clock.access(addr);
            assert!(fifo.len() <= capacity);
            assert!(lru.len() <= capacity);
            assert!(clock.len() <= capacity);
        }
    }
}

#[test]
fn presence_matches_buffer_contents() {
    let trace = mixed_trace(2_000, 48, 7);
    let mut fifo = FifoEngine::new(16);
    let mut lru = LruEngine::new(16);
    let mut clock = ClockEngine::new(16);
    for &addr in &trace {
        fifo.access(addr);
        lru.access(addr);
        clock.access(addr);
    }
    // one buffer slot per resident address, index and buffer agree
    fifo.debug_validate_invariants();
    lru.debug_validate_invariants();
    clock.debug_validate_invariants();

    for engine in [
        &fifo as &dyn ReplayEngine,
        &lru as &dyn ReplayEngine,
        &clock as &dyn ReplayEngine,
    ] {
        let contents = engine.contents();
        assert_eq!(contents.len(), engine.len());
        for &addr in &contents {
            assert!(engine.contains(addr));
        }
    }
}

// ==============================================
// Determinism
// ==============================================

#[test]
fn replaying_the_same_trace_twice_yields_identical_statistics() {
    let trace = mixed_trace(10_000, 200, 99);

    let run = |trace: &[Address]| {
        let mut sim = SimulationBuilder::new(50).try_build().unwrap();
        sim.replay(trace);
        sim
    };
    let first = run(&trace);
    let second = run(&trace);

    assert_eq!(first.fifo.stats(), second.fifo.stats());
    assert_eq!(first.lru.stats(), second.lru.stats());
    assert_eq!(first.clock.stats(), second.clock.stats());
    assert_eq!(first.fifo.eviction_stats(), second.fifo.eviction_stats());
    assert_eq!(first.lru.eviction_stats(), second.lru.eviction_stats());
    assert_eq!(first.clock.eviction_stats(), second.clock.eviction_stats());
    assert_eq!(first.clock.scan_stats(), second.clock.scan_stats());
    assert_eq!(first.fifo.contents(), second.fifo.contents());
    assert_eq!(first.lru.contents(), second.lru.contents());
    assert_eq!(first.clock.contents(), second.clock.contents());
}

// ==============================================
// Fixed-trace regression fixtures
// ==============================================

#[test]
fn fifo_preserves_arrival_order_despite_reuse() {
    // capacity 3, [1,2,3,4,1,5,2]: FIFO ignores the reuse of 1, so 1's
    // eviction precedes 2's first eviction.
    let mut fifo = FifoEngine::new(3);
    let outcomes = fifo.replay_traced(&[1, 2, 3, 4, 1, 5, 2]);

    let evicted: Vec<Address> = outcomes
        .iter()
        .filter_map(|outcome| outcome.eviction.map(|e| e.addr))
        .collect();
    let first_1 = evicted.iter().position(|&a| a == 1).unwrap();
    let first_2 = evicted.iter().position(|&a| a == 2).unwrap();
    assert!(first_1 < first_2);

    // literal final contents, newest to oldest
    assert_eq!(fifo.contents(), vec![2, 5, 1]);
}

#[test]
fn lru_reuse_postpones_eviction() {
    let mut lru = LruEngine::new(2);
    let outcomes = lru.replay_traced(&[1, 2, 1, 3]);
    assert_eq!(outcomes[3].eviction.unwrap().addr, 2);
    assert!(lru.contains(1));
    assert!(!lru.contains(2));
}

#[test]
fn clock_second_chance_spares_referenced_entry() {
    let mut clock = ClockEngine::new(2);
    let outcomes = clock.replay_traced(&[1, 2, 1, 3]);
    assert_eq!(outcomes[3].eviction.unwrap().addr, 2);
    assert!(clock.contains(1));
    assert_eq!(clock.scan_stats().recycles, 1);
}

// ==============================================
// Hit-rate formula behavior
// ==============================================

#[test]
fn cache_fill_boundary_on_short_distinct_trace() {
    // trace shorter than capacity, all distinct: the cache never fills,
    // the boundary tracks the last access, and the rate reports 1.0
    for capacity in [5usize, 10] {
        let mut sim = SimulationBuilder::new(capacity).try_build().unwrap();
        sim.replay(&[1, 2, 3]);
        for stats in [sim.fifo.stats(), sim.lru.stats(), sim.clock.stats()] {
            assert_eq!(stats.fill_boundary, 3);
            assert_eq!(stats.hit_rate(capacity), 1.0);
        }
    }
}

#[test]
fn hit_rate_is_not_clamped_to_the_unit_interval() {
    // The inherited formula subtracts the full capacity from the miss
    // count unconditionally; on a short single-address trace FIFO reports
    // a rate above 1. Pinned here as documented behavior, not an error.
    let mut fifo = FifoEngine::new(3);
    fifo.replay(&[7, 7, 7, 7, 7]);
    let stats = fifo.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.fill_boundary, 1);
    assert!(fifo.hit_rate() > 1.0);

    // LRU's boundary keeps advancing below capacity, so the same trace
    // degenerates to the 1.0 branch instead.
    let mut lru = LruEngine::new(3);
    lru.replay(&[7, 7, 7, 7, 7]);
    assert_eq!(lru.hit_rate(), 1.0);
}

// ==============================================
// Policy divergence on a common trace
// ==============================================

#[test]
fn policies_agree_on_accesses_and_diverge_on_misses() {
    let trace = mixed_trace(20_000, 400, 5);
    let mut sim = SimulationBuilder::new(100).try_build().unwrap();
    sim.replay(&trace);

    let fifo = sim.fifo.stats();
    let lru = sim.lru.stats();
    let clock = sim.clock.stats();
    assert_eq!(fifo.accesses, trace.len() as u64);
    assert_eq!(lru.accesses, trace.len() as u64);
    assert_eq!(clock.accesses, trace.len() as u64);

    // with uniform reuse, every policy misses sometimes and hits sometimes
    for stats in [fifo, lru, clock] {
        assert!(stats.misses > 0);
        assert!(stats.hits() > 0);
    }
    // CLOCK's scan actually exercised its second-chance path
    assert!(sim.clock.scan_stats().examined >= sim.clock.eviction_stats().evictions);
}
