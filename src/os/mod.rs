//! Operating system entropy
//!
//! Every platform submodule exposes the same `sys_random` function, which
//! fills a buffer with bytes from the kernel CSPRNG. The implementation is
//! picked at compile time, so callers in `token::source` stay portable.
//!
//! Failure to obtain entropy panics: a token generator that silently falls
//! back to weaker randomness is worse than one that stops.

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod macos;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) use macos::*;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
