/// Sort parallel index/value arrays (SoA) by index ascending.
/// - `inds` and `vals` must have the same length
/// - Pairing between `inds[i]` and `vals[i]` is preserved
/// - Indices are expected to be unique (sparse vector entries), so stability is not required
///
/// Sparse vectors built from a document are usually a few dozen entries,
/// which goes through insertion sort without allocating.
#[inline]
pub fn sort_by_index_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    assert_eq!(inds.len(), vals.len());
    let n = inds.len();
    if n <= 1 {
        return;
    }
    if n <= 32 {
        insertion_sort_u32_soa(inds, vals);
        return;
    }

    let mut pairs: Vec<(u32, N)> = inds.iter().copied().zip(vals.iter().copied()).collect();
    pairs.sort_unstable_by_key(|&(k, _)| k);
    for (i, (k, v)) in pairs.into_iter().enumerate() {
        inds[i] = k;
        vals[i] = v;
    }
}

/// Tiny insertion sort for small n (SoA).
#[inline(always)]
fn insertion_sort_u32_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    let n = inds.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && inds[j] < inds[j - 1] {
            inds.swap(j, j - 1);
            vals.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// True when `inds` is strictly increasing.
#[inline]
pub fn is_strictly_sorted(inds: &[u32]) -> bool {
    inds.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_sort<N: Copy>(inds: &[u32], vals: &[N]) -> (Vec<u32>, Vec<N>) {
        let mut pairs: Vec<(u32, N)> = inds.iter().copied().zip(vals.iter().copied()).collect();
        pairs.sort_by_key(|&(k, _)| k);
        pairs.into_iter().unzip()
    }

    /// tiny deterministic PRNG (xorshift32)
    struct Rng(u32);
    impl Rng {
        fn new(seed: u32) -> Self { Self(seed) }
        fn next_u32(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }
    }

    #[test]
    fn sort_handles_empty_and_single() {
        let mut inds: Vec<u32> = vec![];
        let mut vals: Vec<f64> = vec![];
        sort_by_index_soa(&mut inds, &mut vals);
        assert!(inds.is_empty());

        let mut inds = vec![42u32];
        let mut vals = vec![7u32];
        sort_by_index_soa(&mut inds, &mut vals);
        assert_eq!(inds, vec![42]);
        assert_eq!(vals, vec![7]);
    }

    #[test]
    fn sort_preserves_pairing_small() {
        let mut inds = vec![5u32, 1, 3, 0, 2];
        let mut vals = vec![50u32, 10, 30, 0, 20];
        sort_by_index_soa(&mut inds, &mut vals);
        assert_eq!(inds, vec![0, 1, 2, 3, 5]);
        assert_eq!(vals, vec![0, 10, 20, 30, 50]);
        assert!(is_strictly_sorted(&inds));
    }

    #[test]
    fn sort_matches_baseline_many_sizes() {
        let mut rng = Rng::new(0x1234_5678);

        for &n in &[2usize, 3, 7, 16, 31, 32, 33, 64, 129, 1024] {
            // unique keys: shuffle 0..n by random swaps
            let mut inds: Vec<u32> = (0..n as u32).map(|i| i * 3).collect();
            for i in (1..n).rev() {
                let j = (rng.next_u32() as usize) % (i + 1);
                inds.swap(i, j);
            }
            let mut vals: Vec<u32> = inds.iter().map(|k| k ^ 0xA5A5_5A5A).collect();

            let (base_k, base_v) = baseline_sort(&inds, &vals);
            sort_by_index_soa(&mut inds, &mut vals);

            assert!(is_strictly_sorted(&inds), "not sorted at n={n}");
            assert_eq!(inds, base_k, "keys mismatch at n={n}");
            assert_eq!(vals, base_v, "vals mismatch at n={n}");
        }
    }

    #[test]
    fn strictly_sorted_rejects_duplicates() {
        assert!(is_strictly_sorted(&[]));
        assert!(is_strictly_sorted(&[1, 2, 9]));
        assert!(!is_strictly_sorted(&[1, 1, 2]));
        assert!(!is_strictly_sorted(&[3, 2]));
    }
}
