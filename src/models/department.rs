use crate::models::associate::Associate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    It,
    Marketing,
    Engineering,
}

impl Department {
    pub const ALL: [Department; 3] = [
        Department::It,
        Department::Marketing,
        Department::Engineering,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Marketing => "Marketing",
            Department::Engineering => "Engineering",
        }
    }

    /// Exact match only; "it" or "Engineering " do not belong to a bucket.
    pub fn from_label(label: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// Rows split into the three fixed listing buckets, each in ascending id order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DepartmentGroups {
    pub it: Vec<Associate>,
    pub marketing: Vec<Associate>,
    pub engineering: Vec<Associate>,
}

impl DepartmentGroups {
    pub fn partition(mut rows: Vec<Associate>) -> Self {
        rows.sort_by_key(|a| a.id);
        let mut groups = DepartmentGroups::default();
        for row in rows {
            match Department::from_label(&row.department) {
                Some(Department::It) => groups.it.push(row),
                Some(Department::Marketing) => groups.marketing.push(row),
                Some(Department::Engineering) => groups.engineering.push(row),
                None => {}
            }
        }
        groups
    }

    pub fn bucket(&self, department: Department) -> &[Associate] {
        match department {
            Department::It => &self.it,
            Department::Marketing => &self.marketing,
            Department::Engineering => &self.engineering,
        }
    }
}
