//! Kart speed tables shared by racers and agents.

use crate::constants::DEFAULT_SPEED_STAT;
use crate::fixed::{fixed_mul, Fixed, FRACUNIT};

/// Top speed for a kart speed stat at normal game speed, unscaled.
pub fn kart_speed_from_stat(stat: u8) -> Fixed {
    let game_speed = FRACUNIT + (3 * FRACUNIT) / 64;
    let k_speed = 150 + stat as i32 * 3;
    fixed_mul(k_speed << 14, game_speed)
}

/// Cruising speed of a homing agent on a map of the given scale.
pub fn agent_default_speed(map_scale: Fixed) -> Fixed {
    fixed_mul(map_scale, kart_speed_from_stat(DEFAULT_SPEED_STAT) * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_grows_with_stat() {
        assert!(kart_speed_from_stat(9) > kart_speed_from_stat(1));
        assert_eq!(kart_speed_from_stat(5), 2_830_080);
    }

    #[test]
    fn test_default_speed_scales_with_map() {
        let base = agent_default_speed(FRACUNIT);
        assert_eq!(base, 2 * kart_speed_from_stat(5));
        assert_eq!(agent_default_speed(FRACUNIT / 2), base / 2);
    }
}
