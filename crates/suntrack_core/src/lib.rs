//! Sun and Moon positions for a topocentric observer.
//!
//! One evaluation path serves both bodies: a [`Body`] selects its
//! [`BodyModel`] (geocentric theory plus rise/set conventions), and
//! [`compute_equatorial`] turns the model output into apparent topocentric
//! right ascension and declination. Altitude, hour angle and the Moon–Sun
//! phase angle are derived from there.

pub mod body;
pub mod moon;
pub mod observer;
pub mod position;
pub mod sun;

pub use body::{Aberration, Body, BodyModel, EclipticPosition};
pub use moon::MoonModel;
pub use observer::Observer;
pub use position::{
    EquatorialCoordinates, altitude_deg, compute_equatorial, hour_angle_hours,
    moon_phase_angle_deg,
};
pub use sun::SunModel;
