//! Entity table declarations
//!
//! Each table declares the readable field projection and the allow-list of
//! client-writable fields. The backend schema also carries audit/system
//! fields (`CreatedOn`, `CreatedBy`, `ModifiedOn`, `ModifiedBy`) that must
//! never be client-writable, so they appear only in `fields`.

/// Declaration of one entity table in the record backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Backend table name
    pub name: &'static str,
    /// Readable fields requested on fetch
    pub fields: &'static [&'static str],
    /// Allow-list of client-writable fields
    pub updateable: &'static [&'static str],
}

impl TableSpec {
    /// Whether a field may be written by clients
    pub fn is_updateable(&self, field: &str) -> bool {
        self.updateable.contains(&field)
    }
}

const AUDIT_FIELDS: [&str; 5] = ["Id", "CreatedOn", "CreatedBy", "ModifiedOn", "ModifiedBy"];

/// Employee directory table
pub const EMPLOYEE: TableSpec = TableSpec {
    name: "employee",
    fields: &[
        "Id",
        "Name",
        "Tags",
        "Owner",
        "CreatedOn",
        "CreatedBy",
        "ModifiedOn",
        "ModifiedBy",
        "email",
        "phone",
        "designation",
        "status",
        "joinDate",
        "avatar",
        "department",
        "location",
    ],
    updateable: &[
        "Name",
        "Tags",
        "Owner",
        "email",
        "phone",
        "designation",
        "status",
        "joinDate",
        "avatar",
        "department",
        "location",
    ],
};

/// Department lookup table
pub const DEPARTMENT: TableSpec = TableSpec {
    name: "department",
    fields: &[
        "Id", "Name", "Tags", "Owner", "CreatedOn", "CreatedBy", "ModifiedOn", "ModifiedBy",
    ],
    updateable: &["Name", "Tags", "Owner"],
};

/// Location lookup table
pub const LOCATION: TableSpec = TableSpec {
    name: "location",
    fields: &[
        "Id", "Name", "Tags", "Owner", "CreatedOn", "CreatedBy", "ModifiedOn", "ModifiedBy",
    ],
    updateable: &["Name", "Tags", "Owner"],
};

/// Company event table
pub const EVENT: TableSpec = TableSpec {
    name: "event",
    fields: &[
        "Id", "Name", "Tags", "Owner", "CreatedOn", "CreatedBy", "ModifiedOn", "ModifiedBy",
        "title", "date", "type",
    ],
    updateable: &["Name", "Tags", "Owner", "title", "date", "type"],
};

/// User account table (backend names it `User1`)
pub const USER: TableSpec = TableSpec {
    name: "User1",
    fields: &[
        "Id",
        "Name",
        "Tags",
        "Owner",
        "CreatedOn",
        "CreatedBy",
        "ModifiedOn",
        "ModifiedBy",
        "email",
        "role",
        "darkModeEnabled",
    ],
    updateable: &["Name", "Tags", "Owner", "email", "role", "darkModeEnabled"],
};

/// All declared tables
pub const ALL: [&TableSpec; 5] = [&EMPLOYEE, &DEPARTMENT, &LOCATION, &EVENT, &USER];

/// Look up a table declaration by backend name
pub fn by_name(name: &str) -> Option<&'static TableSpec> {
    ALL.into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_fields_never_updateable() {
        for table in ALL {
            for field in AUDIT_FIELDS {
                assert!(
                    !table.is_updateable(field),
                    "{} must not allow writing {}",
                    table.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_updateable_fields_are_readable() {
        for table in ALL {
            for field in table.updateable {
                assert!(
                    table.fields.contains(field),
                    "{} declares updateable field {} that is not readable",
                    table.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("employee"), Some(&EMPLOYEE));
        assert_eq!(by_name("User1"), Some(&USER));
        assert_eq!(by_name("order"), None);
    }
}
