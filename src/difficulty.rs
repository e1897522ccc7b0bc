/// Enemy descent speed for a given score: one step faster every two points,
/// capped at `max_speed`.
pub fn enemy_speed(score: u32, max_speed: i32) -> i32 {
    let speed = 1 + (score / 2).min(i32::MAX as u32 - 1) as i32;
    speed.min(max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(enemy_speed(0, 10), 1);
        assert_eq!(enemy_speed(1, 10), 1);
    }

    #[test]
    fn steps_every_two_points() {
        assert_eq!(enemy_speed(2, 10), 2);
        assert_eq!(enemy_speed(9, 10), 5);
        assert_eq!(enemy_speed(17, 10), 9);
    }

    #[test]
    fn capped() {
        assert_eq!(enemy_speed(18, 10), 10);
        assert_eq!(enemy_speed(1_000, 10), 10);
        assert_eq!(enemy_speed(u32::MAX, 10), 10);
    }
}
