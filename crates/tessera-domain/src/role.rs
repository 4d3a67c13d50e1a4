//! Caller roles asserted by the gateway.

/// Privilege level of the caller making a request.
///
/// Wire format: `u8` (0 = Member, 1 = Admin, 2 = Service).
/// `Service` is reserved for the upstream auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member = 0,
    Admin = 1,
    Service = 2,
}

impl Role {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Member),
            1 => Some(Self::Admin),
            2 => Some(Self::Service),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u8().cmp(&other.as_u8())
    }
}
