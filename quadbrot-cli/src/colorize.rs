use quadbrot_compute::DID_NOT_ESCAPE;

/// Map an iteration count to RGB.
///
/// Points that never escaped are black; escaped points ramp from black to
/// yellow at two levels per iteration and stay yellow from 128 iterations on.
pub fn colorize(it: i32) -> [u8; 3] {
    if it <= DID_NOT_ESCAPE {
        return [0, 0, 0];
    }
    let level = it.saturating_mul(2).min(255) as u8;
    [level, level, 0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_escaped_is_black() {
        assert_eq!(colorize(DID_NOT_ESCAPE), [0, 0, 0]);
    }

    #[test]
    fn immediate_escape_is_black() {
        assert_eq!(colorize(0), [0, 0, 0]);
    }

    #[test]
    fn ramps_two_levels_per_iteration() {
        assert_eq!(colorize(1), [2, 2, 0]);
        assert_eq!(colorize(50), [100, 100, 0]);
        assert_eq!(colorize(127), [254, 254, 0]);
    }

    #[test]
    fn saturates_at_full_yellow() {
        assert_eq!(colorize(128), [255, 255, 0]);
        assert_eq!(colorize(249), [255, 255, 0]);
        assert_eq!(colorize(i32::MAX), [255, 255, 0]);
    }
}
