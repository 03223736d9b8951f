//! Stacking status effects.
//!
//! A power is a named, stacking effect on a player or monster. Each power has
//! a use-time numeric transform and every positive stack decays by exactly one
//! at end of turn.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A named status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// Vulnerable targets take 50% more damage.
    Vulnerable,
    /// Weakened attackers deal 25% less damage.
    Weak,
    /// Heal health equal to the stack count at end of turn.
    Regen,
}

impl Power {
    /// Apply this power's numeric transform to a value.
    ///
    /// Vulnerable amplifies incoming damage, Weak dampens outgoing damage
    /// (both floored), Regen converts stacks into a heal amount one-to-one.
    #[must_use]
    pub fn apply(self, value: u32) -> u32 {
        match self {
            Power::Vulnerable => value * 3 / 2,
            Power::Weak => value * 3 / 4,
            Power::Regen => value,
        }
    }
}

/// Power stacks on a single combatant.
///
/// Stacks are never negative; a decayed-out power sits at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerMap(FxHashMap<Power, u32>);

impl PowerMap {
    /// Create an empty power map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack count for a power (zero if absent).
    #[must_use]
    pub fn stacks(&self, power: Power) -> u32 {
        self.0.get(&power).copied().unwrap_or(0)
    }

    /// Whether a power is active (at least one stack).
    #[must_use]
    pub fn has(&self, power: Power) -> bool {
        self.stacks(power) > 0
    }

    /// Add stacks to a power (additive accumulation).
    pub fn add(&mut self, power: Power, stacks: u32) {
        let entry = self.0.entry(power).or_insert(0);
        *entry = entry.saturating_add(stacks);
    }

    /// Decrease every positive stack count by one.
    pub fn decay(&mut self) {
        for stacks in self.0.values_mut() {
            if *stacks > 0 {
                *stacks -= 1;
            }
        }
    }

    /// Remove all powers.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no power has any stacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&s| s == 0)
    }

    /// Iterate over `(power, stacks)` pairs with at least one stack.
    pub fn iter(&self) -> impl Iterator<Item = (Power, u32)> + '_ {
        self.0
            .iter()
            .filter(|(_, &s)| s > 0)
            .map(|(&p, &s)| (p, s))
    }
}

impl FromIterator<(Power, u32)> for PowerMap {
    fn from_iter<I: IntoIterator<Item = (Power, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (power, stacks) in iter {
            map.add(power, stacks);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms() {
        // Vulnerable: x1.5 floored
        assert_eq!(Power::Vulnerable.apply(4), 6);
        assert_eq!(Power::Vulnerable.apply(5), 7);
        assert_eq!(Power::Vulnerable.apply(0), 0);

        // Weak: x0.75 floored
        assert_eq!(Power::Weak.apply(8), 6);
        assert_eq!(Power::Weak.apply(7), 5);

        // Regen passes through
        assert_eq!(Power::Regen.apply(5), 5);
    }

    #[test]
    fn test_stacks_accumulate() {
        let mut powers = PowerMap::new();
        assert_eq!(powers.stacks(Power::Weak), 0);

        powers.add(Power::Weak, 2);
        powers.add(Power::Weak, 1);
        assert_eq!(powers.stacks(Power::Weak), 3);
        assert!(powers.has(Power::Weak));
        assert!(!powers.has(Power::Vulnerable));
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut powers = PowerMap::new();
        powers.add(Power::Vulnerable, 1);
        powers.add(Power::Regen, 2);

        powers.decay();
        assert_eq!(powers.stacks(Power::Vulnerable), 0);
        assert_eq!(powers.stacks(Power::Regen), 1);

        // Stacks already at zero stay at zero.
        powers.decay();
        powers.decay();
        assert_eq!(powers.stacks(Power::Vulnerable), 0);
        assert_eq!(powers.stacks(Power::Regen), 0);
        assert!(powers.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut powers: PowerMap = [(Power::Weak, 2), (Power::Regen, 5)].into_iter().collect();
        assert!(!powers.is_empty());

        powers.clear();
        assert!(powers.is_empty());
    }

    #[test]
    fn test_iter_skips_decayed() {
        let mut powers = PowerMap::new();
        powers.add(Power::Weak, 1);
        powers.add(Power::Regen, 1);
        powers.decay();
        powers.add(Power::Vulnerable, 2);

        let active: Vec<_> = powers.iter().collect();
        assert_eq!(active, vec![(Power::Vulnerable, 2)]);
    }
}
