//! # Pacward Core
//!
//! The script-visible surface of the PAC (Proxy Auto-Config) standard
//! library: the fixed set of global functions a proxy-configuration script
//! calls (`isInNet`, `dnsResolve`, `shExpMatch`, `dateRange`, ...) to
//! decide which proxy to use for a URL.
//!
//! ## Architecture Overview
//! * **[`helpers`]**: the host-provider contract. Every PAC function
//!   bottoms out in a [`helpers::PacHelpers`] method; hosts supply the
//!   live DNS and interface state, the fixed semantics ship as default
//!   methods.
//! * **[`bindings`]**: one typed entry point per PAC function, plus
//!   dispatch by exact script-facing name. All boundary coercion happens
//!   here and nowhere else.
//! * **[`value`]**: the loosely typed values exchanged with the script
//!   engine.
//! * **[`system`]**: the production provider, backed by the OS resolver
//!   and interfaces.
//!
//! A script engine embedding this crate registers the names from
//! [`bindings::FUNCTIONS`] and forwards each call to
//! [`bindings::PacBindings::invoke`]. Faults never cross the boundary:
//! every failure resolves to the function's negative sentinel (`false`,
//! `""`, `0`).

pub mod bindings;
pub mod helpers;
pub mod system;
pub mod value;

pub use bindings::PacBindings;
pub use helpers::PacHelpers;
pub use system::SystemHelpers;
pub use value::PacValue;
