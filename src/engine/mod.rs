/// Curve processing: everything that turns two measurements into a
/// reflectance value.
///
/// ```text
///  background ─┐
///              ├─ difference ─► raw curve ─ savgol_filter ─► curve
///  signal ─────┘                                               │
///                           snap (nearest / local maximum) ◄───┤
///                                        │                     │
///                                  LineFit::through ──► reflectance
/// ```

pub mod difference;
pub mod peaks;
pub mod reflectance;
pub mod savgol;

pub use difference::difference;
pub use peaks::{find_peaks, snap, SnapMode, Snapped};
pub use reflectance::{reflectance, LineFit, Reflectance};
pub use savgol::savgol_filter;
