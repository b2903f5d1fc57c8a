use crate::router::RouterError;

use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// One of the seven verbs a route can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Patch,
    Head,
}

impl Method {
    /// The verb universe, in the order decoding walks it.
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Options,
        Method::Patch,
        Method::Head,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Iterates the verb universe in order.
    pub fn universe() -> impl Iterator<Item = Method> + Clone {
        Method::ALL.iter().copied()
    }

    #[inline]
    pub fn bit(self) -> u32 {
        1 << self.index()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Like `from_str`, but for dispatch: an unknown verb is just a miss.
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        Self::universe().find(|m| m.as_str() == name)
    }
}

impl FromStr for Method {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| RouterError::UnknownMethod(s.to_owned()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of verbs packed into an integer, one power-of-two bit per verb.
///
/// Any integer is accepted; bits outside the verb universe are carried along
/// by [`bits`](MethodSet::bits) and ignored by [`decode`](MethodSet::decode).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MethodSet {
    bits: u32,
}

impl MethodSet {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const GET: Self = Self { bits: 1 };
    pub const POST: Self = Self { bits: 1 << 1 };
    pub const PUT: Self = Self { bits: 1 << 2 };
    pub const DELETE: Self = Self { bits: 1 << 3 };
    pub const OPTIONS: Self = Self { bits: 1 << 4 };
    pub const PATCH: Self = Self { bits: 1 << 5 };
    pub const HEAD: Self = Self { bits: 1 << 6 };
    pub const ALL: Self = Self { bits: 0x7f };

    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    pub fn encode<I>(methods: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        methods
            .into_iter()
            .fold(Self::EMPTY, |set, m| set | Self::from(m))
    }

    pub fn decode(self) -> impl Iterator<Item = Method> {
        Method::universe().filter(move |&m| self.contains(m))
    }

    #[inline]
    pub fn contains(self, method: Method) -> bool {
        self.bits & method.bit() != 0
    }

    pub fn insert(&mut self, method: Method) {
        self.bits |= method.bit();
    }

    /// True if no known verb is set.
    pub fn is_empty(self) -> bool {
        self.bits & Self::ALL.bits == 0
    }
}

impl From<Method> for MethodSet {
    fn from(m: Method) -> Self {
        Self { bits: m.bit() }
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Self::encode(iter)
    }
}

impl BitOr for MethodSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOr<Method> for MethodSet {
    type Output = Self;
    fn bitor(self, rhs: Method) -> Self {
        self | Self::from(rhs)
    }
}

impl BitOrAssign for MethodSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits
    }
}

impl fmt::Debug for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.decode()).finish()
    }
}
