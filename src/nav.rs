use crate::session::Role;

#[derive(Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    visible_for_roles: &'static [Role],
}

impl NavEntry {
    pub fn visible_for(&self, role: Role) -> bool {
        self.visible_for_roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Student, Role::Faculty, Role::Hospital];
const CAMPUS_ROLES: &[Role] = &[Role::Student, Role::Faculty];

/// Master navigation list in presentation order. Hospital accounts only see
/// the entries they respond to; everyone else sees the full list.
pub const MASTER_NAV: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        path: "/",
        visible_for_roles: ALL_ROLES,
    },
    NavEntry {
        label: "Hostel Complaints",
        path: "/hostel-complaints",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Mess Complaints",
        path: "/mess-complaints",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Stray Animal",
        path: "/stray-animal",
        visible_for_roles: ALL_ROLES,
    },
    NavEntry {
        label: "Medical Emergency",
        path: "/medical-emergency",
        visible_for_roles: ALL_ROLES,
    },
    NavEntry {
        label: "Places Nearby",
        path: "/places-nearby",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Lost & Found",
        path: "/lost-found",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Cab Partner",
        path: "/cab-partner",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Academic Notes",
        path: "/academic-notes",
        visible_for_roles: CAMPUS_ROLES,
    },
    NavEntry {
        label: "Events",
        path: "/events",
        visible_for_roles: CAMPUS_ROLES,
    },
];

/// Filter `items` down to the entries `role` may see. The result always
/// follows master-list order regardless of the order `items` arrives in, so
/// repeated renders stay deterministic.
pub fn visible_nav_items(items: &[&'static NavEntry], role: Role) -> Vec<&'static NavEntry> {
    MASTER_NAV
        .iter()
        .filter(|master| items.iter().any(|e| e.path == master.path))
        .filter(|master| master.visible_for(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_sees_exactly_three_entries_in_master_order() {
        let all: Vec<&NavEntry> = MASTER_NAV.iter().collect();
        let visible = visible_nav_items(&all, Role::Hospital);
        let paths: Vec<&str> = visible.iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/stray-animal", "/medical-emergency"]);
    }

    #[test]
    fn hospital_subset_ignores_call_order() {
        let mut reversed: Vec<&NavEntry> = MASTER_NAV.iter().collect();
        reversed.reverse();
        let visible = visible_nav_items(&reversed, Role::Hospital);
        let paths: Vec<&str> = visible.iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/stray-animal", "/medical-emergency"]);
    }

    #[test]
    fn students_and_faculty_see_the_full_list() {
        let all: Vec<&NavEntry> = MASTER_NAV.iter().collect();
        for role in [Role::Student, Role::Faculty] {
            let visible = visible_nav_items(&all, role);
            assert_eq!(visible.len(), MASTER_NAV.len());
            let paths: Vec<&str> = visible.iter().map(|e| e.path).collect();
            let master_paths: Vec<&str> = MASTER_NAV.iter().map(|e| e.path).collect();
            assert_eq!(paths, master_paths);
        }
    }
}
