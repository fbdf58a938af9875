// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
#![allow(clippy::cargo_common_metadata)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Layout math turns counts and indices into floats everywhere
#![allow(clippy::cast_precision_loss)]

//! Formation layouts and eased transitions for 3D tile galleries.
//!
//! Tilescape places one tile per data record in 3D space and animates the
//! tiles between four named arrangements: a flat table, a sphere, a helix
//! and a volumetric grid. Rendering is left to the host; the crate only
//! computes where every tile should be and moves it there over time.
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - the session object a host holds on to
//! - [`layout::FormationSet`] - target positions for every formation
//! - [`animation::AnimationContext`] - per-item transition tasks and the
//!   render clock, advanced by [`animation::AnimationContext::tick`]
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs on the host's frame thread. The host calls
//! [`gallery::Gallery::tick`] (or drives an [`animation::FramePump`]) once
//! per display refresh with the elapsed time; every moving tile is advanced
//! and then the host's render callback fires once for the whole frame.

pub mod animation;
pub mod error;
pub mod gallery;
pub mod ingest;
pub mod layout;
pub mod options;
pub mod scatter;
