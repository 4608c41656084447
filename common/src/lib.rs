//! # Pacward Common
//!
//! Pure PAC decision semantics, shared by every provider implementation.
//!
//! Everything in this crate is computable from its arguments alone: no
//! sockets, no resolver, no clock reads. The resolution-dependent parts of
//! the PAC surface live in `pacward-core`, which feeds this crate the
//! addresses and instants to decide on.
//!
//! ## Contents
//! * **[`hostname`]**: plain-name, domain-suffix and domain-level tests.
//! * **[`glob`]**: shell-expression (`*`/`?`) matching.
//! * **[`network`]**: netmask and CIDR membership, address-list ordering.
//! * **[`datetime`]**: weekday, date and time-of-day range evaluation.

pub mod datetime;
pub mod glob;
pub mod hostname;
pub mod network;
