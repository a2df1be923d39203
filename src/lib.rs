//! modeplot — publication-style plots for phonon mode-mapping runs.
//!
//! Two binaries share this crate: `modeplot` draws the 1-D potential energy
//! curve spanned by a phonon mode, `modeplot-2d` draws the 2-D potential
//! energy surface spanned by two modes, with contours and a colour bar.
//! Each run parses the post-processed map file(s), normalizes energies per
//! atom, and writes a PDF/PNG pair.

pub mod cli;
pub mod config;
pub mod curve;
pub mod error;
pub mod render;
pub mod surface;
