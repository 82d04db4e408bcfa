// src/core/cover.rs
//
// Cosmetic cover colors. A tiny LCG seeded with `index + 6` picks one of eight
// gradients, so a book keeps its cover across re-renders without refetching.

const LCG_MUL: u64 = 9301;
const LCG_INC: u64 = 49297;
const LCG_MOD: u64 = 233_280;
const SEED_OFFSET: u64 = 6;

/// Linear congruential generator. Not for anything but picking colors.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        // (a * b) mod m == ((a mod m) * b) mod m, so reducing up front keeps
        // the multiply in range without changing the sequence.
        Self { state: seed % LCG_MOD }
    }

    /// Raw next state in `0..233280`.
    pub fn next_state(&mut self) -> u64 {
        self.state = (self.state * LCG_MUL + LCG_INC) % LCG_MOD;
        self.state
    }

    /// Next draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / LCG_MOD as f64
    }

    /// `floor(next_f64() * n)` without the float round trip.
    pub fn next_below(&mut self, n: usize) -> usize {
        (self.next_state() * n as u64 / LCG_MOD) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverColor {
    pub from: [u8; 3],
    pub to: [u8; 3],
}

impl CoverColor {
    const fn hex(from: u32, to: u32) -> Self {
        Self {
            from: [(from >> 16) as u8, (from >> 8) as u8, from as u8],
            to: [(to >> 16) as u8, (to >> 8) as u8, to as u8],
        }
    }

    /// CSS form, e.g. `linear-gradient(135deg, #667eea 0%, #764ba2 100%)`.
    pub fn css(&self) -> String {
        let [a, b, c] = self.from;
        let [d, e, f] = self.to;
        format!("linear-gradient(135deg, #{a:02x}{b:02x}{c:02x} 0%, #{d:02x}{e:02x}{f:02x} 100%)")
    }

    /// Midpoint of the gradient; used where only a flat fill is possible.
    pub fn mid(&self) -> [u8; 3] {
        let m = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
        [m(self.from[0], self.to[0]), m(self.from[1], self.to[1]), m(self.from[2], self.to[2])]
    }
}

pub const PALETTE: [CoverColor; 8] = [
    CoverColor::hex(0x667eea, 0x764ba2),
    CoverColor::hex(0xf093fb, 0xf5576c),
    CoverColor::hex(0x4facfe, 0x00f2fe),
    CoverColor::hex(0x43e97b, 0x38f9d7),
    CoverColor::hex(0xfa709a, 0xfee140),
    CoverColor::hex(0xa8edea, 0xfed6e3),
    CoverColor::hex(0xffecd2, 0xfcb69f),
    CoverColor::hex(0xff8a80, 0xea6100),
];

/// Palette slot for a book index. Pure function of `index`.
pub fn cover_slot(index: u64) -> usize {
    SeededRandom::new(index.wrapping_add(SEED_OFFSET)).next_below(PALETTE.len())
}

pub fn cover_for(index: u64) -> CoverColor {
    PALETTE[cover_slot(index)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_sequence_matches_reference_values() {
        let mut r = SeededRandom::new(7);
        assert_eq!(r.next_state(), 114_404);
        assert_eq!(r.next_state(), 130_821);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut r = SeededRandom::new(123_456_789);
        for _ in 0..1000 {
            let x = r.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn slots_for_first_indices() {
        // seeds 6, 7, 8 -> states 105103, 114404, 123705
        assert_eq!(cover_slot(0), 3);
        assert_eq!(cover_slot(1), 3);
        assert_eq!(cover_slot(2), 4);
    }

    #[test]
    fn cover_is_deterministic_and_float_path_agrees() {
        for index in [0u64, 1, 19, 20, 777, 1_000_000] {
            assert_eq!(cover_for(index), cover_for(index));
            let float_slot = (SeededRandom::new(index + 6).next_f64() * 8.0).floor() as usize;
            assert_eq!(cover_slot(index), float_slot);
        }
    }

    #[test]
    fn css_round_trips_palette_hex() {
        assert_eq!(PALETTE[0].css(), "linear-gradient(135deg, #667eea 0%, #764ba2 100%)");
        assert_eq!(PALETTE[7].css(), "linear-gradient(135deg, #ff8a80 0%, #ea6100 100%)");
    }
}
