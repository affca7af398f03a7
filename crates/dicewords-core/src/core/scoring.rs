use phf::{Map, phf_map};

/// Points for words longer than the table covers.
pub const MAX_POINTS: u32 = 11;

#[rustfmt::skip]
static POINTS_BY_LENGTH: Map<u8, u32> = phf_map! {
    1u8 => 0, 2u8 => 0,
    3u8 => 1, 4u8 => 1,
    5u8 => 2,
    6u8 => 3,
    7u8 => 5,
    8u8 => 11, 9u8 => 11, 10u8 => 11, 11u8 => 11,
    12u8 => 11, 13u8 => 11, 14u8 => 11, 15u8 => 11, 16u8 => 11,
};

/// Points awarded for a word of `len` letters.
pub fn points_for_length(len: usize) -> u32 {
    if len == 0 {
        return 0;
    }
    u8::try_from(len)
        .ok()
        .and_then(|len| POINTS_BY_LENGTH.get(&len))
        .copied()
        .unwrap_or(MAX_POINTS)
}
