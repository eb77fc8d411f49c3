use contracts::domain::a001_invoice::aggregate::{CUSTOM_ID_MAX, CUSTOM_ID_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of human-facing invoice numbers
pub trait CustomIdSource: Send {
    fn next_custom_id(&mut self) -> i32;
}

/// Uniform draw in `[CUSTOM_ID_MIN, CUSTOM_ID_MAX]`. Values repeat.
pub struct RandomCustomIds {
    rng: StdRng,
}

impl RandomCustomIds {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CustomIdSource for RandomCustomIds {
    fn next_custom_id(&mut self) -> i32 {
        self.rng.gen_range(CUSTOM_ID_MIN..=CUSTOM_ID_MAX)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_five_digit_range() {
        let mut ids = RandomCustomIds::seeded(7);
        for _ in 0..10_000 {
            let v = ids.next_custom_id();
            assert!((CUSTOM_ID_MIN..=CUSTOM_ID_MAX).contains(&v), "{v}");
            assert_eq!(v.to_string().len(), 5);
        }
    }

    #[test]
    fn test_same_seed_yields_same_sequence() {
        let mut a = RandomCustomIds::seeded(42);
        let mut b = RandomCustomIds::seeded(42);
        for _ in 0..5 {
            assert_eq!(a.next_custom_id(), b.next_custom_id());
        }
    }

    #[test]
    fn test_single_generator_eventually_repeats() {
        let mut ids = RandomCustomIds::seeded(1);
        let mut seen = std::collections::HashSet::new();
        let repeated = (0..20_000).any(|_| !seen.insert(ids.next_custom_id()));
        assert!(repeated);
    }
}
