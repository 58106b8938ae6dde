//! Hover transforms for project cards and magnetic buttons.

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";
const TILT_DAMPING: f64 = 10.0;
const MAGNET_PULL: f64 = 0.2;

/// Client-space bounding box of the hovered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    fn center_offset(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - self.left - self.width / 2.0,
            client_y - self.top - self.height / 2.0,
        )
    }
}

/// 3D tilt that leans the card towards the pointer.
pub fn tilt_transform(bounds: Bounds, client_x: f64, client_y: f64) -> String {
    let x = client_x - bounds.left;
    let y = client_y - bounds.top;
    let rotate_x = (y - bounds.height / 2.0) / TILT_DAMPING;
    let rotate_y = (bounds.width / 2.0 - x) / TILT_DAMPING;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(10px)")
}

pub fn magnetic_transform(bounds: Bounds, client_x: f64, client_y: f64) -> String {
    let (dx, dy) = bounds.center_offset(client_x, client_y);
    format!("translate({}px, {}px)", dx * MAGNET_PULL, dy * MAGNET_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centered_pointer_is_flat() {
        assert_eq!(
            tilt_transform(CARD, 200.0, 100.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
        );
    }

    #[test]
    fn corner_pointer_tilts_towards_it() {
        // bottom-left corner: 100px left of center, 50px below
        assert_eq!(
            tilt_transform(CARD, 100.0, 150.0),
            "perspective(1000px) rotateX(5deg) rotateY(10deg) translateZ(10px)"
        );
    }

    #[test]
    fn magnet_pulls_a_fifth_of_the_distance() {
        assert_eq!(magnetic_transform(CARD, 250.0, 50.0), "translate(10px, -10px)");
    }
}
