use crate::domain::ports::SolutionProvider;
use crate::utils::error::{Result, SubmitterError};
use std::path::Path;

/// Employees with the number of younger colleagues in the same department.
pub const YOUNGER_EMPLOYEES_QUERY: &str = "\
SELECT
    e1.EMP_ID,
    e1.FIRST_NAME,
    e1.LAST_NAME,
    d.DEPARTMENT_NAME,
    COUNT(e2.EMP_ID) AS YOUNGER_EMPLOYEES_COUNT
FROM EMPLOYEE e1
JOIN DEPARTMENT d
    ON e1.DEPARTMENT = d.DEPARTMENT_ID
LEFT JOIN EMPLOYEE e2
    ON e1.DEPARTMENT = e2.DEPARTMENT
    AND e2.DOB > e1.DOB
GROUP BY
    e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME
ORDER BY
    e1.EMP_ID DESC;
";

const YOUNGER_EMPLOYEES_EXPLANATION: &str = "\
Self-joins EMPLOYEE on department and keeps colleagues with a later DOB. \
The LEFT JOIN keeps employees with no younger colleagues (count 0). \
Rows are grouped per employee and ordered by EMP_ID descending.";

#[derive(Debug, Clone)]
pub struct StaticSolution {
    query: String,
    explanation: Option<String>,
}

impl StaticSolution {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            explanation: None,
        }
    }

    /// Loads the query text from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let query = std::fs::read_to_string(path)?;
        if query.trim().is_empty() {
            return Err(SubmitterError::invalid_input(
                "submission.query_file",
                format!("{} is empty", path.display()),
            ));
        }
        tracing::debug!("Loaded solution query from {}", path.display());
        Ok(Self::new(query))
    }
}

impl Default for StaticSolution {
    fn default() -> Self {
        Self {
            query: YOUNGER_EMPLOYEES_QUERY.to_string(),
            explanation: Some(YOUNGER_EMPLOYEES_EXPLANATION.to_string()),
        }
    }
}

impl SolutionProvider for StaticSolution {
    fn query(&self) -> &str {
        &self.query
    }

    fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}
