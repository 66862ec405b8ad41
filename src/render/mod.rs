//! Rasterization.
//!
//! [`cpu::CpuRenderer`] turns evaluated frames into pixels; [`pipeline`] drives it over frame
//! ranges and hands the results to a sink.

/// Rendered frame buffers.
pub mod backend;
/// `vello_cpu` renderer.
pub mod cpu;
/// Single-frame, range and MP4 rendering.
pub mod pipeline;
pub(crate) mod text;
