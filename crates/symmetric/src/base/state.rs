//! Per-context algorithm state

use core::fmt;

use cipherwrap_algorithms::{Aes, Arc4, Blowfish, Camellia, Des, TdesEde2, TdesEde3};
use cipherwrap_api::CipherId;

/// Opaque per-context state of a symmetric cipher family
///
/// Produced by [`CipherBase::ctx_alloc`](super::CipherBase::ctx_alloc) and
/// only meaningful to the table that allocated it. Handing a state to a table
/// of another family is rejected with `BadInputData`.
pub struct CipherState {
    inner: State,
}

/// Closed set of family states
///
/// Block and stream families start unkeyed (`None`). The NULL cipher carries
/// nothing at all.
pub(crate) enum State {
    Null,
    Aes(Option<Aes>),
    Camellia(Option<Camellia>),
    Des(Option<Des>),
    DesEde(Option<TdesEde2>),
    DesEde3(Option<TdesEde3>),
    Blowfish(Option<Blowfish>),
    Arc4(Option<Arc4>),
}

impl CipherState {
    /// The stateless sentinel used by the NULL cipher
    ///
    /// Owns no key material, so releasing it does nothing.
    pub const fn null() -> Self {
        Self { inner: State::Null }
    }

    pub(crate) const fn new(inner: State) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &State {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut State {
        &mut self.inner
    }

    /// Family the state was allocated for
    pub fn family(&self) -> CipherId {
        match self.inner {
            State::Null => CipherId::Null,
            State::Aes(_) => CipherId::Aes,
            State::Camellia(_) => CipherId::Camellia,
            State::Des(_) => CipherId::Des,
            State::DesEde(_) | State::DesEde3(_) => CipherId::Des3,
            State::Blowfish(_) => CipherId::Blowfish,
            State::Arc4(_) => CipherId::Arc4,
        }
    }

    /// Whether a key schedule is present
    ///
    /// Always true for the NULL sentinel.
    pub fn is_keyed(&self) -> bool {
        match &self.inner {
            State::Null => true,
            State::Aes(slot) => slot.is_some(),
            State::Camellia(slot) => slot.is_some(),
            State::Des(slot) => slot.is_some(),
            State::DesEde(slot) => slot.is_some(),
            State::DesEde3(slot) => slot.is_some(),
            State::Blowfish(slot) => slot.is_some(),
            State::Arc4(slot) => slot.is_some(),
        }
    }
}

impl fmt::Debug for CipherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherState")
            .field("family", &self.family())
            .field("keyed", &self.is_keyed())
            .finish()
    }
}
