use geo::Coord;

/// A trait for accessing data from a generic 2D coordinate.
pub trait CoordTrait {
    /// x component of this coord
    fn x(&self) -> f64;

    /// y component of this coord
    fn y(&self) -> f64;

    /// Returns a tuple that contains the x/horizontal & y/vertical component of the coord.
    fn x_y(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

impl CoordTrait for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl CoordTrait for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl<C: CoordTrait> CoordTrait for &C {
    fn x(&self) -> f64 {
        (*self).x()
    }

    fn y(&self) -> f64 {
        (*self).y()
    }
}
