//! Fact catalog for the rotating trivia display

use rand::Rng;

/// Static fact list; the rotator picks from these uniformly at random
pub const FUN_FACTS: [&str; 10] = [
    "The energy in 1 gram of mass could power a 100W lightbulb for about 28,500 years!",
    "A paperclip (1g) contains about 21.5 kilotons of TNT equivalent energy.",
    "A 70kg human body contains about 1.5 gigatons of TNT equivalent energy—enough to power the entire world for several days.",
    "Only about 0.7% of mass is converted to energy in nuclear fission, and about 0.4% in nuclear fusion.",
    "If you could convert 1kg of matter to energy with 100% efficiency, it could launch a Saturn V rocket over 500 times!",
    "The Sun converts about 4 million tons of mass to energy every second through nuclear fusion.",
    "The total mass-energy of the observable universe is estimated to be about 4 × 10^69 Joules.",
    "Einstein's equation applies to all energy, including the energy stored in chemical bonds and even in food calories!",
    "A single raindrop (0.05g) contains energy equivalent to about 1 ton of TNT.",
    "The energy in your morning coffee comes from mass conversion in the Sun millions of years ago.",
];

/// Pick a uniformly random fact. No memory across picks; repeats are allowed.
pub fn random_fact() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..FUN_FACTS.len());
    FUN_FACTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fact_comes_from_the_catalog() {
        for _ in 0..50 {
            let fact = random_fact();
            assert!(FUN_FACTS.contains(&fact));
        }
    }
}
