//! Dice rolling behind a common [`Roll`] interface.

use alloc::vec::Vec;

use rand::Rng;

use crate::error::DiceError;

/// Anything that produces a sequence of face values from a random source.
pub trait Roll {
    /// Rolls once, returning one face value per die.
    fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u8>;

    /// Rolls once and returns the sum of the faces.
    fn roll_total<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.roll(rng).into_iter().map(u32::from).sum()
    }
}

/// `count` identical dice with `sides` faces each, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    count: u8,
    sides: u8,
}

impl Dice {
    /// Creates a set of identical dice.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::NoDice`] when `count` is zero and
    /// [`DiceError::TooFewSides`] when `sides` is below 2.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::dice::{Dice, Roll};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let dice = Dice::new(2, 6).unwrap();
    /// let faces = dice.roll(&mut ChaCha8Rng::seed_from_u64(1));
    /// assert_eq!(faces.len(), 2);
    /// assert!(faces.iter().all(|face| (1..=6).contains(face)));
    /// ```
    pub const fn new(count: u8, sides: u8) -> Result<Self, DiceError> {
        if count == 0 {
            return Err(DiceError::NoDice);
        }
        if sides < 2 {
            return Err(DiceError::TooFewSides(sides));
        }
        Ok(Self { count, sides })
    }

    /// Returns the number of dice.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the number of faces per die.
    #[must_use]
    pub const fn sides(&self) -> u8 {
        self.sides
    }
}

impl Roll for Dice {
    fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u8> {
        (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect()
    }
}

/// A mixed handful of dice, rolled together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DicePool {
    dice: Vec<Dice>,
}

impl DicePool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Adds dice to the pool.
    #[must_use]
    pub fn with(mut self, dice: Dice) -> Self {
        self.dice.push(dice);
        self
    }

    /// Returns the total number of dice in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.iter().map(|dice| usize::from(dice.count)).sum()
    }

    /// Returns whether the pool holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl Roll for DicePool {
    fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u8> {
        let mut faces = Vec::with_capacity(self.len());
        for dice in &self.dice {
            faces.extend(dice.roll(rng));
        }
        faces
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn new_validates() {
        assert_eq!(Dice::new(0, 6).unwrap_err(), DiceError::NoDice);
        assert_eq!(Dice::new(1, 1).unwrap_err(), DiceError::TooFewSides(1));
        let dice = Dice::new(3, 20).unwrap();
        assert_eq!((dice.count(), dice.sides()), (3, 20));
    }

    #[test]
    fn rolls_stay_in_range() {
        let dice = Dice::new(50, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let faces = dice.roll(&mut rng);
        assert_eq!(faces.len(), 50);
        assert!(faces.iter().all(|&face| (1..=6).contains(&face)));
    }

    #[test]
    fn same_seed_same_rolls() {
        let dice = Dice::new(5, 6).unwrap();
        let a = dice.roll(&mut ChaCha8Rng::seed_from_u64(77));
        let b = dice.roll(&mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn pool_rolls_every_die() {
        let pool = DicePool::new()
            .with(Dice::new(2, 6).unwrap())
            .with(Dice::new(1, 20).unwrap());
        assert_eq!(pool.len(), 3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let faces = pool.roll(&mut rng);
        assert_eq!(faces.len(), 3);
        assert!(faces[..2].iter().all(|&face| face <= 6));
        let total = pool.roll_total(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(total, faces.iter().map(|&face| u32::from(face)).sum::<u32>());
    }

    #[test]
    fn interchangeable_through_roll() {
        fn roll_any<T: Roll>(source: &T, seed: u64) -> usize {
            source.roll(&mut ChaCha8Rng::seed_from_u64(seed)).len()
        }
        assert_eq!(roll_any(&Dice::new(4, 6).unwrap(), 1), 4);
        assert_eq!(roll_any(&DicePool::new(), 1), 0);
    }
}
