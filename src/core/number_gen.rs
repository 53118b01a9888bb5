//! Account and card number generation
//!
//! Pure value-producing utility: 5-digit account numbers, 16-digit card
//! numbers grouped in fours, zero-padded 3-digit CVVs. No uniqueness
//! guarantee beyond the range; the account store enforces identifier
//! uniqueness.

use rand::Rng;

/// Generator for account numbers, card numbers, and CVVs
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberGenerator;

impl NumberGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        NumberGenerator
    }

    /// Generate a 5-digit account number (10000..=99999)
    pub fn account_number(&self) -> u32 {
        rand::thread_rng().gen_range(10_000..100_000)
    }

    /// Generate a 16-digit card number grouped in fours, e.g.
    /// "1234 5678 9012 3456"
    pub fn card_number(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut number = String::with_capacity(19);
        for i in 0..16 {
            number.push(char::from(b'0' + rng.gen_range(0..10u8)));
            if (i + 1) % 4 == 0 && i < 15 {
                number.push(' ');
            }
        }
        number
    }

    /// Generate a zero-padded 3-digit CVV
    pub fn cvv(&self) -> String {
        format!("{:03}", rand::thread_rng().gen_range(0..1000))
    }
}
