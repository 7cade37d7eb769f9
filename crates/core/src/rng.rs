use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draws `count` items from `items` without replacement, uniformly at
    /// random. Callers must check `count <= items.len()` first.
    pub fn sample<T: Copy>(&mut self, items: &[T], count: usize) -> Vec<T> {
        rand::seq::index::sample(&mut self.rng, items.len(), count)
            .iter()
            .map(|idx| items[idx])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngState::from_seed(7);
        let mut b = RngState::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn sample_is_without_replacement() {
        let mut rng = RngState::from_seed(3);
        let items: Vec<u32> = (0..52).collect();
        let mut picked = rng.sample(&items, 21);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 21);
    }
}
