use thiserror::Error;

/// Route that is reachable without a committed profile.
pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
    Hospital,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Self::Student),
            "faculty" => Some(Self::Faculty),
            "hospital" => Some(Self::Hospital),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Hospital => "hospital",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campus {
    Chennai,
    Vellore,
    Bhopal,
    Amaravati,
}

impl Campus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Chennai" => Some(Self::Chennai),
            "Vellore" => Some(Self::Vellore),
            "Bhopal" => Some(Self::Bhopal),
            "Amaravati" => Some(Self::Amaravati),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chennai => "Chennai",
            Self::Vellore => "Vellore",
            Self::Bhopal => "Bhopal",
            Self::Amaravati => "Amaravati",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("campus selection is required for this profile")]
    MissingCampus,
}

/// Process-wide profile state. Starts unauthenticated; only
/// [`Session::select_profile`] mutates it, and only as a whole.
#[derive(Debug, Default)]
pub struct Session {
    role: Option<Role>,
    campus: Option<Campus>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn campus(&self) -> Option<Campus> {
        self.campus
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Commit a profile selection. Hospital accounts are pinned to the
    /// Chennai campus and ignore any caller-supplied campus; every other
    /// role must name one. On failure nothing is committed.
    pub fn select_profile(
        &mut self,
        role: Role,
        campus: Option<Campus>,
    ) -> Result<(), SessionError> {
        let campus = match role {
            Role::Hospital => Campus::Chennai,
            Role::Student | Role::Faculty => campus.ok_or(SessionError::MissingCampus)?,
        };
        self.role = Some(role);
        self.campus = Some(campus);
        Ok(())
    }
}

/// Coarse session-level access check: an authenticated session may reach any
/// route, an unauthenticated one only the sign-in view. Role never restricts
/// routes, it only filters navigation chrome.
pub fn is_route_accessible(session: &Session, route_path: &str) -> bool {
    session.is_authenticated() || route_path == SIGN_IN_PATH
}
