use crate::profile::{Profile, Role, Viewer};

/// A profile whose role has a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDashboard {
    Student(Profile),
    Parent(Profile),
    Mentor(Profile),
}

impl RoleDashboard {
    /// Total over every role; profiles with an unknown role come back as `Err`.
    pub fn dispatch(profile: Profile) -> Result<Self, Profile> {
        match profile.role {
            Role::Student => Ok(Self::Student(profile)),
            Role::Parent => Ok(Self::Parent(profile)),
            Role::Mentor => Ok(Self::Mentor(profile)),
            Role::Unknown(_) => Err(profile),
        }
    }

    pub fn profile(&self) -> &Profile {
        match self {
            Self::Student(profile) | Self::Parent(profile) | Self::Mentor(profile) => profile,
        }
    }
}

/// Where the dashboard router is.
///
/// `Loading` and `ProfileLoading` are transient, `Unauthenticated` redirects to sign-in,
/// and the remaining states are terminal for a given session and profile.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Unauthenticated,
    ProfileLoading,
    ProfileMissing,
    RoleUnknown(Profile),
    Rendering(RoleDashboard),
}

impl DashboardState {
    /// Derive the router state from what has resolved so far. The outer `Option` of each
    /// argument is `None` while that read is still in flight.
    pub fn resolve(session: Option<Option<&Viewer>>, profile: Option<Option<Profile>>) -> Self {
        match (session, profile) {
            (None, _) => Self::Loading,
            (Some(None), _) => Self::Unauthenticated,
            (Some(Some(_)), None) => Self::ProfileLoading,
            (Some(Some(_)), Some(None)) => Self::ProfileMissing,
            (Some(Some(_)), Some(Some(profile))) => match RoleDashboard::dispatch(profile) {
                Ok(dashboard) => Self::Rendering(dashboard),
                Err(profile) => Self::RoleUnknown(profile),
            },
        }
    }

    /// The profile behind the header greeting, when one resolved.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::RoleUnknown(profile) => Some(profile),
            Self::Rendering(dashboard) => Some(dashboard.profile()),
            _ => None,
        }
    }
}
