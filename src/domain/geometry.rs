// Small 2D vector math shared by ships, projectiles and collision checks.

/// A 2D position or velocity in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rounds to two decimal places. Speeds, velocity components and collision
/// distances all go through this so floating-point drift cannot accumulate
/// across ticks.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Velocity components for a heading (degrees) and scalar speed, each
/// component rounded to two decimals.
pub fn velocity_components(heading_deg: f64, speed: f64) -> Vec2 {
    let radians = heading_deg.to_radians();
    Vec2 {
        x: round2(speed * radians.cos()),
        y: round2(speed * radians.sin()),
    }
}

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Euclidean distance between two positions, rounded to two decimals.
pub fn distance_rounded(a: Vec2, b: Vec2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    round2((dx * dx + dy * dy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_negative_and_overflowing_angles() {
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(725.0), 5.0);
        assert_eq!(normalize_deg(45.0), 45.0);
    }

    #[test]
    fn velocity_components_are_rounded() {
        let v = velocity_components(0.0, 0.6);
        assert_eq!(v, Vec2::new(0.6, 0.0));

        let v = velocity_components(90.0, 2.0);
        assert_eq!(v, Vec2::new(0.0, 2.0));

        let v = velocity_components(45.0, 1.0);
        assert_eq!(v, Vec2::new(0.71, 0.71));
    }

    #[test]
    fn distance_is_rounded_to_two_decimals() {
        let d = distance_rounded(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert_eq!(d, 1.41);
    }
}
